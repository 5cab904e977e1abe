//! Gender tag used for luck-cycle and decade direction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use tianji_cycle::Polarity;

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Periods run forward for a yang-year male or a yin-year female.
    pub const fn runs_forward(self, year_polarity: Polarity) -> bool {
        matches!(
            (self, year_polarity),
            (Self::Male, Polarity::Yang) | (Self::Female, Polarity::Yin)
        )
    }
}

impl FromStr for Gender {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(ChartError::InvalidInput(format!("unknown gender {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn direction_table() {
        assert!(Gender::Male.runs_forward(Polarity::Yang));
        assert!(!Gender::Male.runs_forward(Polarity::Yin));
        assert!(Gender::Female.runs_forward(Polarity::Yin));
        assert!(!Gender::Female.runs_forward(Polarity::Yang));
    }
}
