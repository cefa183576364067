use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The three business areas, each with its own registrations or
/// nominations, settings and archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    Conference,
    TechConference,
    HallOfFame,
}

impl Domain {
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Conference => "conference",
            Domain::TechConference => "tech-conference",
            Domain::HallOfFame => "hall-of-fame",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "conference" => Ok(Domain::Conference),
            "tech-conference" => Ok(Domain::TechConference),
            "hall-of-fame" => Ok(Domain::HallOfFame),
            other => Err(ApiError::InvalidDomain(other.to_string())),
        }
    }

    /// Conference and tech-conference carry registrations with child
    /// attendee rows; hall-of-fame carries nominations.
    pub fn has_registrations(self) -> bool {
        !matches!(self, Domain::HallOfFame)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
