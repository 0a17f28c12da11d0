//! Unit number formatting.
//!
//! Polish unit numbers use `^` to mark a superscript insertion suffix:
//! `"5^1"` is article 5-superscript-1 (an article inserted between 5 and 6
//! by an amending act). The split is total over any input string; rendering
//! the `<sup>` wrapper and the trailing period is the caller's concern.

/// A unit number split into its main part and optional superscript suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberParts<'a> {
    /// Everything before the first `^` (the whole string if none).
    pub main: &'a str,
    /// Everything after the first `^`, if present. Further `^` characters
    /// are kept as written; only the first one delimits.
    pub superscript: Option<&'a str>,
}

/// Split a raw unit number at the first `^` marker.
pub fn parse_number(raw: &str) -> NumberParts<'_> {
    match raw.split_once('^') {
        Some((main, superscript)) => NumberParts {
            main,
            superscript: Some(superscript),
        },
        None => NumberParts {
            main: raw,
            superscript: None,
        },
    }
}
