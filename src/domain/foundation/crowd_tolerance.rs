//! Crowd tolerance value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a member feels about visiting busy, touristy places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrowdTolerance {
    /// Actively avoids crowded spots.
    Avoid,
    /// Fine with crowds when the destination warrants it.
    Okay,
    /// Has not expressed a position.
    NoPreference,
}

impl fmt::Display for CrowdTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CrowdTolerance::Avoid => "avoid",
            CrowdTolerance::Okay => "okay",
            CrowdTolerance::NoPreference => "no_preference",
        };
        write!(f, "{}", s)
    }
}
