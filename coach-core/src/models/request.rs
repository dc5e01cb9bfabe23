use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presentation style for AI-generated responses. Has no effect on locked
/// scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    StraightTalking,
    Supportive,
    Assertive,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Self::StraightTalking, Self::Supportive, Self::Assertive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StraightTalking => "straight-talking",
            Self::Supportive => "supportive",
            Self::Assertive => "assertive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid tone '{0}'. Must be: straight-talking, supportive, or assertive")]
pub struct UnknownTone(pub String);

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownTone(s.to_string()))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One AI-assisted lookup, built for a single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackRequest {
    /// Objection as the prospect said it. Must have non-whitespace content.
    pub objection_text: String,
    pub tone: Tone,
    /// Name of the hosted model to call.
    pub model: String,
}

impl FallbackRequest {
    pub fn new(objection_text: impl Into<String>, tone: Tone, model: impl Into<String>) -> Self {
        Self {
            objection_text: objection_text.into(),
            tone,
            model: model.into(),
        }
    }

    /// The objection with surrounding whitespace removed, or `None` if nothing
    /// is left.
    pub fn trimmed_objection(&self) -> Option<&str> {
        let text = self.objection_text.trim();
        (!text.is_empty()).then_some(text)
    }
}

/// Which part of a response to show.
///
/// Purely cosmetic: the same text is requested whatever the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewFormat {
    #[default]
    Full,
    SmsOnly,
    PhoneOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid view '{0}'. Must be: full, sms, or phone")]
pub struct UnknownView(pub String);

impl FromStr for ViewFormat {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "sms" | "sms-only" => Ok(Self::SmsOnly),
            "phone" | "phone-only" => Ok(Self::PhoneOnly),
            _ => Err(UnknownView(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_objection_has_no_content() {
        let request = FallbackRequest::new("  \n\t", Tone::Supportive, "m1");
        assert_eq!(request.trimmed_objection(), None);
    }

    #[test]
    fn objection_is_trimmed() {
        let request = FallbackRequest::new("  my wife isn't sure ", Tone::Assertive, "m1");
        assert_eq!(request.trimmed_objection(), Some("my wife isn't sure"));
    }

    #[test]
    fn tone_round_trips_through_its_name() {
        for tone in Tone::ALL {
            assert_eq!(tone.as_str().parse::<Tone>(), Ok(tone));
        }
        assert!("gentle".parse::<Tone>().is_err());
    }

    #[test]
    fn view_accepts_short_and_long_names() {
        assert_eq!("sms".parse::<ViewFormat>(), Ok(ViewFormat::SmsOnly));
        assert_eq!("phone-only".parse::<ViewFormat>(), Ok(ViewFormat::PhoneOnly));
        assert_eq!("FULL".parse::<ViewFormat>(), Ok(ViewFormat::Full));
        assert!("tweet".parse::<ViewFormat>().is_err());
    }
}
