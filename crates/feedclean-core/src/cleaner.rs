//! Field-level quote cleanup.
//!
//! Product feeds escape a literal double quote as a doubled `""`, but the
//! same files also carry stray unescaped quotes left over from manual
//! editing. Cleaning resolves both in a single forward scan: doubled quotes
//! collapse to one literal quote, unpaired quotes are dropped, and the
//! result is trimmed.

/// Result of cleaning a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedField {
    /// The normalized field value.
    pub value: String,
    /// Whether the value differs from the original input.
    pub changed: bool,
}

/// Clean a field value by resolving double-quote noise.
///
/// Quotes pair up left to right: every `""` becomes a literal `"` and any
/// quote left without a partner is removed. The scanned value is then
/// trimmed of leading and trailing whitespace, so `changed` is also set
/// when trimming alone altered the input.
///
/// # Examples
///
/// ```
/// use feedclean_core::cleaner::clean_field;
///
/// assert_eq!(clean_field("a\"\"b").value, "a\"b");
/// assert_eq!(clean_field("a\"b").value, "ab");
/// assert!(!clean_field("plain").changed);
/// ```
pub fn clean_field(raw: &str) -> CleanedField {
    let mut scanned = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '"' {
            scanned.push(ch);
            continue;
        }
        // A doubled quote is an escaped literal; a lone one is noise.
        if chars.peek() == Some(&'"') {
            chars.next();
            scanned.push('"');
        }
    }
    let value = scanned.trim().to_string();
    let changed = value != raw;
    CleanedField { value, changed }
}
