/// Journal name extraction from browser tab titles

/// Characters that separate a journal name from the rest of a tab title
/// ("Journal of X | Publisher", "Journal of X - Home").
const DELIMITERS: [char; 2] = ['|', '-'];

/// Normalize a raw tab title into a candidate journal name
///
/// Algorithm:
/// 1. Split on "|", keep the first segment
/// 2. Split that segment on "-", keep the first segment
/// 3. Trim surrounding whitespace
///
/// Examples:
/// - "Journal of Testing | ACME University" → "Journal of Testing"
/// - "Nature - Home" → "Nature"
/// - "   " → ""
///
/// A title that starts with a delimiter yields an empty name, which is
/// passed through as-is.
pub fn normalize(raw_title: &str) -> String {
    let first_segment = raw_title
        .split(DELIMITERS[0])
        .next()
        .unwrap_or_default();

    first_segment
        .split(DELIMITERS[1])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
