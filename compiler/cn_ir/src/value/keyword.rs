//! Symbolic keywords.

use std::fmt;

/// A symbolic literal from the fixed keyword set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Auto,
    Odd,
    Even,
    MapWidth,
    MapHeight,
    SymbolCount,
}

impl Keyword {
    pub const ALL: [Keyword; 6] = [
        Keyword::Auto,
        Keyword::Odd,
        Keyword::Even,
        Keyword::MapWidth,
        Keyword::MapHeight,
        Keyword::SymbolCount,
    ];

    /// The keyword's spelling in notation text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Auto => "auto",
            Keyword::Odd => "odd",
            Keyword::Even => "even",
            Keyword::MapWidth => "mapWidth",
            Keyword::MapHeight => "mapHeight",
            Keyword::SymbolCount => "symbolCount",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Keyword::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Parity test for `odd`/`even`; `None` for every other keyword.
    pub const fn matches_parity(self, n: i64) -> Option<bool> {
        match self {
            Keyword::Even => Some(n.rem_euclid(2) == 0),
            Keyword::Odd => Some(n.rem_euclid(2) == 1),
            Keyword::Auto | Keyword::MapWidth | Keyword::MapHeight | Keyword::SymbolCount => None,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
