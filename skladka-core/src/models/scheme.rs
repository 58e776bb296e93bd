use serde::{Deserialize, Serialize};

/// Tax-filing scheme chosen by a sole trader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scheme {
    #[serde(rename = "skala")]
    ScaleProgressive,
    #[serde(rename = "liniowka")]
    FlatLinear,
    #[serde(rename = "ryczalt")]
    LumpSum,
}

impl Scheme {
    /// Every scheme, in the order results are reported.
    pub const ALL: [Scheme; 3] = [Self::ScaleProgressive, Self::FlatLinear, Self::LumpSum];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScaleProgressive => "skala",
            Self::FlatLinear => "liniowka",
            Self::LumpSum => "ryczalt",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "skala" => Some(Self::ScaleProgressive),
            "liniowka" => Some(Self::FlatLinear),
            "ryczalt" => Some(Self::LumpSum),
            _ => None,
        }
    }

    /// Polish display name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ScaleProgressive => "Skala podatkowa",
            Self::FlatLinear => "Podatek liniowy",
            Self::LumpSum => "Ryczałt",
        }
    }

    /// Whether business expenses reduce the contribution base.
    pub fn deducts_expenses(&self) -> bool {
        !matches!(self, Self::LumpSum)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
