//! Binary outcome label (the `DEATH_EVENT` column).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the patient died during the follow-up period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Survival,
    Death,
}

impl Outcome {
    /// Both outcomes, ordered by label (0 then 1).
    pub const ALL: [Outcome; 2] = [Outcome::Survival, Outcome::Death];

    /// Map a 0/1 label to an outcome. Anything else is `None`.
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Self::Survival),
            1 => Some(Self::Death),
            _ => None,
        }
    }

    pub fn label(self) -> u8 {
        match self {
            Self::Survival => 0,
            Self::Death => 1,
        }
    }

    /// Human-readable prediction text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Survival => "Survival",
            Self::Death => "Death",
        }
    }

    /// Chart colour used for this outcome group.
    pub fn color(self) -> &'static str {
        match self {
            Self::Survival => "#636EFA",
            Self::Death => "#EF553B",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn labels_round_trip() {
        for outcome in Outcome::ALL {
            assert_eq!(Outcome::from_label(outcome.label()), Some(outcome));
        }
        assert_eq!(Outcome::from_label(2), None);
    }

    #[test]
    fn display_strings_are_fixed() {
        assert_eq!(Outcome::Survival.to_string(), "Survival");
        assert_eq!(Outcome::Death.to_string(), "Death");
    }
}
