use serde::{Deserialize, Serialize};

/// Set of health-contribution rules in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Rules in force before the 2026 reform.
    Current,
    /// Rules introduced by the 2026 reform.
    Future,
}

impl Regime {
    pub const ALL: [Regime; 2] = [Self::Current, Self::Future];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Future => "future",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "current" => Some(Self::Current),
            "future" => Some(Self::Future),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Current => "Teraz",
            Self::Future => "2026",
        }
    }
}
