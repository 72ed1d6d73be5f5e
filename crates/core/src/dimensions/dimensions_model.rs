//! Canonical platform and region dimensions.
//!
//! Every source adapter funnels its raw platform strings and geo codes into
//! these two enums so the combiner can rely on exact key equality across
//! datasets that never agreed on spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical advertising platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    Android,
    Web,
    Other,
}

impl Platform {
    /// The measured platforms, in generation order. `Other` is a catch-all
    /// for unrecognized input, never a generated dimension.
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::Web];

    /// Map a raw source string onto the canonical set. Matching is
    /// case-insensitive and whitespace-tolerant; anything unrecognized is
    /// `Other`.
    pub fn canonicalize(raw: &str) -> Platform {
        match raw.trim().to_lowercase().as_str() {
            "ios" => Platform::Ios,
            "android" => Platform::Android,
            "web" => Platform::Web,
            _ => Platform::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Web => "Web",
            Platform::Other => "Other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical reporting region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    #[serde(rename = "South America")]
    SouthAmerica,
    Europe,
    #[serde(rename = "Asia Pacific")]
    AsiaPacific,
    #[serde(rename = "Middle East")]
    MiddleEast,
    Africa,
    Other,
}

impl Region {
    /// The measured regions, in generation order.
    pub const ALL: [Region; 6] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::AsiaPacific,
        Region::SouthAmerica,
        Region::MiddleEast,
        Region::Africa,
    ];

    /// Map a raw region name onto the canonical set. Country codes go
    /// through [`region_for_country`](crate::dimensions::region_for_country)
    /// instead.
    pub fn canonicalize(raw: &str) -> Region {
        match raw.trim().to_lowercase().as_str() {
            "north america" => Region::NorthAmerica,
            "south america" => Region::SouthAmerica,
            "europe" => Region::Europe,
            "asia pacific" => Region::AsiaPacific,
            "middle east" => Region::MiddleEast,
            "africa" => Region::Africa,
            _ => Region::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia Pacific",
            Region::MiddleEast => "Middle East",
            Region::Africa => "Africa",
            Region::Other => "Other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
