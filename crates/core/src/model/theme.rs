use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four fixed biology themes selectable before play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Introduction,
    Heredity,
    Metabolism,
    Dna,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::Introduction,
        Theme::Heredity,
        Theme::Metabolism,
        Theme::Dna,
    ];

    /// Human-facing label, mirroring the course chapter titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Theme::Introduction => "Theme 1: Introduction to Biology",
            Theme::Heredity => "Theme 3: Heredity",
            Theme::Metabolism => "Theme 8: Metabolism in the Cell",
            Theme::Dna => "Theme 9: DNA",
        }
    }

    /// Stable slug used when synthesizing question ids.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Theme::Introduction => "introduction",
            Theme::Heredity => "heredity",
            Theme::Metabolism => "metabolism",
            Theme::Dna => "dna",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
