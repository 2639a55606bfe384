//! Domain types for fab and tool selection

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Manufacturing fab the measurements come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fab {
    #[serde(rename = "R3")]
    R3,
    #[serde(rename = "M16")]
    M16,
    #[serde(rename = "M15")]
    M15,
    #[serde(rename = "M14")]
    M14,
    #[serde(rename = "M11")]
    M11,
    #[serde(rename = "M10")]
    M10,
}

impl Fab {
    /// All fabs in display order
    pub const ALL: [Fab; 6] = [Fab::R3, Fab::M16, Fab::M15, Fab::M14, Fab::M11, Fab::M10];

    pub fn as_str(&self) -> &'static str {
        match self {
            Fab::R3 => "R3",
            Fab::M16 => "M16",
            Fab::M15 => "M15",
            Fab::M14 => "M14",
            Fab::M11 => "M11",
            Fab::M10 => "M10",
        }
    }
}

impl fmt::Display for Fab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|fab| fab.as_str() == s)
            .ok_or_else(|| Error::invalid_selection("fab", s))
    }
}

/// Metrology tool type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[serde(rename = "CD-SEM")]
    CdSem,
    #[serde(rename = "HV-SEM")]
    HvSem,
}

impl Tool {
    /// All tools in display order
    pub const ALL: [Tool; 2] = [Tool::CdSem, Tool::HvSem];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::CdSem => "CD-SEM",
            Tool::HvSem => "HV-SEM",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| Error::invalid_selection("tool", s))
    }
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Format a timestamp the way persisted records store it
///
/// RFC 3339, UTC, millisecond precision, `Z` suffix
/// (e.g. `2024-03-01T08:15:30.123Z`).
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fab_codes_in_display_order() {
        let codes: Vec<&str> = Fab::ALL.iter().map(Fab::as_str).collect();
        assert_eq!(codes, vec!["R3", "M16", "M15", "M14", "M11", "M10"]);
    }

    #[test]
    fn test_tool_codes_in_display_order() {
        let codes: Vec<&str> = Tool::ALL.iter().map(Tool::as_str).collect();
        assert_eq!(codes, vec!["CD-SEM", "HV-SEM"]);
    }

    #[test]
    fn test_fab_from_str() {
        assert_eq!("M14".parse::<Fab>().unwrap(), Fab::M14);
        assert!("m14".parse::<Fab>().is_err());
        assert!("".parse::<Fab>().is_err());
    }

    #[test]
    fn test_tool_from_str() {
        assert_eq!("HV-SEM".parse::<Tool>().unwrap(), Tool::HvSem);
        let err = "SEM".parse::<Tool>().unwrap_err();
        assert!(matches!(err, Error::InvalidSelection { field: "tool", .. }));
    }

    #[test]
    fn test_display_matches_code() {
        for fab in Fab::ALL {
            assert_eq!(fab.to_string(), fab.as_str());
        }
        assert_eq!(Tool::CdSem.to_string(), "CD-SEM");
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Tool::CdSem).unwrap(), "\"CD-SEM\"");
        let fab: Fab = serde_json::from_str("\"R3\"").unwrap();
        assert_eq!(fab, Fab::R3);
    }

    #[test]
    fn test_iso_timestamp_millis_utc() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 30).unwrap();
        assert_eq!(iso_timestamp(at), "2024-03-01T08:15:30.000Z");
    }

    #[test]
    fn test_app_phase_default_running() {
        assert_eq!(AppPhase::default(), AppPhase::Running);
    }
}
