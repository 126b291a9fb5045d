use serde::{Deserialize, Serialize};

/// Truth value of a single cell, computed once at minefield creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroundCell {
    Mine,
    /// Safe cell carrying its adjacent-mine count (`0..=8`).
    Clear(u8),
}

impl GroundCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCell {
    Hidden,
    Flagged,
    /// Opened safe cell carrying its adjacent-mine count.
    Open(u8),
    /// The mine that ended the game; only ever present after a loss.
    Mine,
}

impl ViewCell {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_) | Self::Mine)
    }

    /// Text glyph for board dumps and minimal renderers. A zero-count open
    /// cell renders blank rather than as a digit.
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => '.',
            Self::Flagged => 'P',
            Self::Mine => 'X',
            Self::Open(0) => ' ',
            Self::Open(count) => (b'0' + count) as char,
        }
    }
}

impl Default for ViewCell {
    fn default() -> Self {
        Self::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_display_contract() {
        assert_eq!(ViewCell::Hidden.symbol(), '.');
        assert_eq!(ViewCell::Flagged.symbol(), 'P');
        assert_eq!(ViewCell::Mine.symbol(), 'X');
        assert_eq!(ViewCell::Open(0).symbol(), ' ');
        assert_eq!(ViewCell::Open(3).symbol(), '3');
        assert_eq!(ViewCell::Open(8).symbol(), '8');
    }

    #[test]
    fn only_open_variants_count_as_open() {
        assert!(ViewCell::Open(0).is_open());
        assert!(ViewCell::Mine.is_open());
        assert!(!ViewCell::Hidden.is_open());
        assert!(!ViewCell::Flagged.is_open());
    }
}
