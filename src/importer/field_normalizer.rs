// ==========================================
// Field normalizer
// ==========================================
// Strips formatting noise from raw cell text before validation.
// Both normalizations are idempotent.
// ==========================================

use crate::importer::line_importer_trait::FieldNormalizer as FieldNormalizerTrait;

pub struct FieldNormalizer;

impl FieldNormalizerTrait for FieldNormalizer {
    /// Phone normalization, in order:
    /// 1. remove spaces, dashes and parentheses
    /// 2. a leading "+2" is dropped
    /// 3. otherwise a leading "2" is dropped when the value is exactly
    ///    12 characters long
    /// The result is used as-is by validation.
    fn normalize_phone(&self, raw: &str) -> String {
        let cleaned = raw
            .replace(' ', "")
            .replace('-', "")
            .replace('(', "")
            .replace(')', "");

        if let Some(rest) = cleaned.strip_prefix("+2") {
            rest.to_string()
        } else if cleaned.starts_with('2') && cleaned.chars().count() == 12 {
            cleaned.chars().skip(1).collect()
        } else {
            cleaned
        }
    }

    /// National-id normalization: spaces and dashes only.
    fn normalize_national_id(&self, raw: &str) -> String {
        raw.replace(' ', "").replace('-', "")
    }
}
