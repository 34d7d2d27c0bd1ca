//! Text normalization for matching
//!
//! Two strengths are used. The exact phase compares [`normalize`]d text on
//! both sides; the keyword phase only case-folds with [`fold`]. The two must
//! stay different: collapsing them changes which rows the fallback finds.

/// Lower-case and drop every space and comma
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| c != ' ' && c != ',')
        .collect()
}

/// Lower-case only
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}
