// ==========================================
// Column locators
// ==========================================
// Two interchangeable strategies for resolving which columns hold
// name / national id / phone:
// - HeaderColumnLocator: keyword match over the row-1 header texts
// - ContentColumnLocator: scoring over a sample of data rows
// Both return a mapping only when all three categories resolve.
// ==========================================

use crate::config::DetectionSettings;
use crate::domain::ColumnMapping;
use crate::importer::classify;
use crate::importer::grid::Grid;
use crate::importer::line_importer_trait::ColumnLocator;
use tracing::debug;

// ==========================================
// HeaderColumnLocator
// ==========================================
// Used when row 1 is a header. Each header cell is lowercased and
// trimmed, then tested against the category keywords in order
// (name, national id, phone); the first matching category claims
// the column. Within a category, a later matching column overwrites
// an earlier one (last match wins) - source-observed precedence,
// preserved exactly; flagged in DESIGN.md.
pub struct HeaderColumnLocator;

impl ColumnLocator for HeaderColumnLocator {
    fn resolve(&self, grid: &Grid, _settings: &DetectionSettings) -> Option<ColumnMapping> {
        let mut name_column = 0u32;
        let mut national_id_column = 0u32;
        let mut phone_column = 0u32;

        for col in 1..=grid.last_column() {
            let header = grid.cell(1, col).trim().to_lowercase();

            if header.contains("اسم") || header.contains("name") {
                name_column = col;
            } else if header.contains("قومي") || header.contains("national") {
                national_id_column = col;
            } else if (header.contains("رقم") && !header.contains("قومي"))
                || header.contains("phone")
                || header.contains("خط")
            {
                phone_column = col;
            }
        }

        debug!(
            name_column,
            national_id_column, phone_column, "header-text column scan"
        );

        if name_column > 0 && national_id_column > 0 && phone_column > 0 {
            Some(ColumnMapping {
                name_column,
                national_id_column,
                phone_column,
            })
        } else {
            None
        }
    }
}

// ==========================================
// ContentColumnLocator
// ==========================================
// Used when row 1 is data. Samples the first min(sample_rows,
// last_row) rows and scores every column per category; the
// strictly-highest total wins, first column on ties. A single
// ambiguous column may win more than one category - preserved
// behavior, flagged in DESIGN.md.
pub struct ContentColumnLocator;

#[derive(Debug, Clone, Copy, Default)]
struct CategoryScores {
    name: i32,
    national_id: i32,
    phone: i32,
}

impl ColumnLocator for ContentColumnLocator {
    fn resolve(&self, grid: &Grid, settings: &DetectionSettings) -> Option<ColumnMapping> {
        let last_column = grid.last_column() as usize;
        let sample_rows = settings.sample_rows.min(grid.last_row());

        // index 0 unused; columns are 1-indexed
        let mut scores = vec![CategoryScores::default(); last_column + 1];

        for row in 1..=sample_rows {
            for col in 1..=last_column as u32 {
                let value = grid.cell(row, col).trim();
                if value.is_empty() {
                    continue;
                }

                let clean = classify::strip_separators(value);
                let clean_len = clean.chars().count();
                let numeric = classify::is_numeric_only(&clean);

                if classify::has_arabic_or_latin_letter(value) && !numeric {
                    scores[col as usize].name += settings.name_weight;
                }

                if clean_len == 14 && numeric {
                    scores[col as usize].national_id += settings.national_id_weight;
                }

                if clean_len == 11 && numeric && clean.starts_with("01") {
                    scores[col as usize].phone += settings.phone_weight;
                }
            }
        }

        let name_column = best_column(&scores, |s| s.name)?;
        let national_id_column = best_column(&scores, |s| s.national_id)?;
        let phone_column = best_column(&scores, |s| s.phone)?;

        debug!(
            name_column,
            national_id_column, phone_column, sample_rows, "content-score column scan"
        );

        Some(ColumnMapping {
            name_column,
            national_id_column,
            phone_column,
        })
    }
}

/// Stable maximum scan: the first column holding the strictly highest
/// positive score wins; a category whose best score is 0 is unresolved.
fn best_column(scores: &[CategoryScores], score_of: impl Fn(&CategoryScores) -> i32) -> Option<u32> {
    let mut best_column = 0u32;
    let mut best_score = 0i32;

    for (col, entry) in scores.iter().enumerate().skip(1) {
        let score = score_of(entry);
        if score > best_score {
            best_score = score;
            best_column = col as u32;
        }
    }

    (best_score > 0).then_some(best_column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn settings() -> DetectionSettings {
        DetectionSettings::default()
    }

    // ===== header strategy =====

    #[test]
    fn test_header_arabic_keywords() {
        // "الرقم" alone (no "قومي") is a phone header; "الرقم القومي"
        // is claimed by the national-id category first
        let g = grid(&[&["الرقم", "الاسم", "الرقم القومي"]]);

        let mapping = HeaderColumnLocator.resolve(&g, &settings()).unwrap();
        assert_eq!(mapping.phone_column, 1);
        assert_eq!(mapping.name_column, 2);
        assert_eq!(mapping.national_id_column, 3);
    }

    #[test]
    fn test_header_english_keywords_case_insensitive() {
        let g = grid(&[&["Name", "National ID", "Phone Number"]]);

        let mapping = HeaderColumnLocator.resolve(&g, &settings()).unwrap();
        assert_eq!(
            mapping,
            ColumnMapping {
                name_column: 1,
                national_id_column: 2,
                phone_column: 3
            }
        );
    }

    #[test]
    fn test_header_last_match_wins() {
        // two name-like headers: the later column overwrites the earlier
        let g = grid(&[&["الاسم", "اسم الأم", "قومي", "خط"]]);

        let mapping = HeaderColumnLocator.resolve(&g, &settings()).unwrap();
        assert_eq!(mapping.name_column, 2);
    }

    #[test]
    fn test_header_missing_category_fails() {
        let g = grid(&[&["الاسم", "الرقم القومي", "ملاحظات"]]);

        assert!(HeaderColumnLocator.resolve(&g, &settings()).is_none());
    }

    #[test]
    fn test_header_khat_matches_phone() {
        let g = grid(&[&["name", "national", "خط"]]);

        let mapping = HeaderColumnLocator.resolve(&g, &settings()).unwrap();
        assert_eq!(mapping.phone_column, 3);
    }

    // ===== content strategy =====

    fn sample_rows_grid() -> Grid {
        grid(&[
            &["أحمد محمد", "12345678901234", "01012345678"],
            &["سالم علي", "98765432109876", "01198765432"],
            &["منى حسن", "11111111111111", "01211111111"],
            &["Omar Adel", "22222222222222", "01522222222"],
            &["ليلى سعد", "33333333333333", "01033333333"],
        ])
    }

    #[test]
    fn test_content_resolves_all_three() {
        let mapping = ContentColumnLocator
            .resolve(&sample_rows_grid(), &settings())
            .unwrap();

        assert_eq!(
            mapping,
            ColumnMapping {
                name_column: 1,
                national_id_column: 2,
                phone_column: 3
            }
        );
    }

    #[test]
    fn test_content_permuted_columns() {
        let g = grid(&[
            &["01012345678", "أحمد محمد", "12345678901234"],
            &["01198765432", "سالم علي", "98765432109876"],
        ]);

        let mapping = ContentColumnLocator.resolve(&g, &settings()).unwrap();
        assert_eq!(
            mapping,
            ColumnMapping {
                name_column: 2,
                national_id_column: 3,
                phone_column: 1
            }
        );
    }

    #[test]
    fn test_content_first_column_wins_ties() {
        // both columns score identically for name
        let g = grid(&[&["أحمد", "سالم", "12345678901234", "01012345678"]]);

        let mapping = ContentColumnLocator.resolve(&g, &settings()).unwrap();
        assert_eq!(mapping.name_column, 1);
    }

    #[test]
    fn test_content_unresolved_category_fails() {
        // no column ever looks like a phone
        let g = grid(&[
            &["أحمد", "12345678901234", "999"],
            &["سالم", "98765432109876", "888"],
        ]);

        assert!(ContentColumnLocator.resolve(&g, &settings()).is_none());
    }

    #[test]
    fn test_content_same_column_can_win_two_categories() {
        // a mixed column holding both 14-digit ids and 11-digit "01"
        // phones is elected for both categories when nothing else
        // competes - preserved source behavior
        let g = grid(&[
            &["أحمد", "12345678901234"],
            &["سالم", "01012345678"],
        ]);

        let mapping = ContentColumnLocator.resolve(&g, &settings()).unwrap();
        assert_eq!(mapping.name_column, 1);
        assert_eq!(mapping.national_id_column, 2);
        assert_eq!(mapping.phone_column, 2);
    }

    #[test]
    fn test_content_sample_rows_cap() {
        // only the first sample_rows rows are scored: the late phone
        // column is invisible with a 1-row sample
        let g = grid(&[
            &["أحمد", "12345678901234", ""],
            &["سالم", "98765432109876", "01012345678"],
        ]);

        let narrow = DetectionSettings {
            sample_rows: 1,
            ..Default::default()
        };
        assert!(ContentColumnLocator.resolve(&g, &narrow).is_none());

        assert!(ContentColumnLocator.resolve(&g, &settings()).is_some());
    }

    #[test]
    fn test_content_numeric_only_column_never_scores_name() {
        let g = grid(&[&["12345", "12345678901234", "01012345678"]]);

        assert!(ContentColumnLocator.resolve(&g, &settings()).is_none());
    }
}
