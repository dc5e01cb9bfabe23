use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The objection a prospect raised, as offered by the category picker.
///
/// The set is closed: every variant has exactly one entry in the catalog,
/// so a lookup by category can never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectionCategory {
    #[serde(rename = "Income / Money")]
    IncomeMoney,
    #[serde(rename = "No Experience")]
    NoExperience,
    #[serde(rename = "Not a Salesperson")]
    NotASalesperson,
    #[serde(rename = "Need More Time")]
    NeedMoreTime,
    #[serde(rename = "Risk / Fear")]
    RiskFear,
    #[serde(rename = "Cost")]
    Cost,
}

/// Returned when a string names none of the six categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown objection category '{0}'. Expected one of: {known}", known = ObjectionCategory::known_slugs())]
pub struct UnknownCategory(pub String);

impl ObjectionCategory {
    /// All categories in catalog order.
    pub const ALL: [ObjectionCategory; 6] = [
        Self::IncomeMoney,
        Self::NoExperience,
        Self::NotASalesperson,
        Self::NeedMoreTime,
        Self::RiskFear,
        Self::Cost,
    ];

    /// Display label, as shown in the picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::IncomeMoney => "Income / Money",
            Self::NoExperience => "No Experience",
            Self::NotASalesperson => "Not a Salesperson",
            Self::NeedMoreTime => "Need More Time",
            Self::RiskFear => "Risk / Fear",
            Self::Cost => "Cost",
        }
    }

    /// Command-line friendly name.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::IncomeMoney => "income-money",
            Self::NoExperience => "no-experience",
            Self::NotASalesperson => "not-a-salesperson",
            Self::NeedMoreTime => "need-more-time",
            Self::RiskFear => "risk-fear",
            Self::Cost => "cost",
        }
    }

    fn known_slugs() -> String {
        Self::ALL
            .iter()
            .map(|c| c.slug())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ObjectionCategory {
    type Err = UnknownCategory;

    /// Accepts either the slug or the display label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == wanted || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for ObjectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slug_and_label() {
        assert_eq!("cost".parse::<ObjectionCategory>(), Ok(ObjectionCategory::Cost));
        assert_eq!("risk-fear".parse::<ObjectionCategory>(), Ok(ObjectionCategory::RiskFear));
        assert_eq!("Income / Money".parse::<ObjectionCategory>(), Ok(ObjectionCategory::IncomeMoney));
        assert_eq!(
            "not a salesperson".parse::<ObjectionCategory>(),
            Ok(ObjectionCategory::NotASalesperson)
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "pricing".parse::<ObjectionCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("pricing".to_string()));
        assert!(err.to_string().contains("need-more-time"));
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&ObjectionCategory::NeedMoreTime).unwrap();
        assert_eq!(json, "\"Need More Time\"");
    }
}
