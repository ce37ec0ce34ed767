//! Saffir-Simpson storm classification
//!
//! Fixed table of inclusive sustained-wind bands (knots) mapped to named
//! categories and alert severities.

use serde::{Deserialize, Serialize};

/// Alert severity, ordered info < warning < danger < critical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Critical => "critical",
        }
    }
}

/// Storm intensity category keyed on sustained wind speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StormCategory {
    #[serde(rename = "tropical_depression")]
    TropicalDepression,
    #[serde(rename = "tropical_storm")]
    TropicalStorm,
    #[serde(rename = "category_1")]
    Category1,
    #[serde(rename = "category_2")]
    Category2,
    #[serde(rename = "category_3")]
    Category3,
    #[serde(rename = "category_4")]
    Category4,
    #[serde(rename = "category_5")]
    Category5,
    #[serde(rename = "unknown")]
    Unknown,
}

impl StormCategory {
    /// Classify sustained wind in knots.
    ///
    /// Bands are inclusive on both ends. Anything outside the table
    /// (absent, negative, above 200 kt, or in a fractional gap between
    /// the integer-bounded bands) is `Unknown`. Total for any finite
    /// input.
    pub fn from_wind_speed(wind_speed_kt: Option<f64>) -> Self {
        let Some(kt) = wind_speed_kt else {
            return Self::Unknown;
        };

        match kt {
            kt if (0.0..=33.0).contains(&kt) => Self::TropicalDepression,
            kt if (34.0..=63.0).contains(&kt) => Self::TropicalStorm,
            kt if (64.0..=82.0).contains(&kt) => Self::Category1,
            kt if (83.0..=95.0).contains(&kt) => Self::Category2,
            kt if (96.0..=112.0).contains(&kt) => Self::Category3,
            kt if (113.0..=136.0).contains(&kt) => Self::Category4,
            kt if (137.0..=200.0).contains(&kt) => Self::Category5,
            _ => Self::Unknown,
        }
    }

    /// Alert severity attached to this category.
    pub fn severity(&self) -> Severity {
        match self {
            Self::TropicalDepression | Self::Unknown => Severity::Info,
            Self::TropicalStorm | Self::Category1 => Severity::Warning,
            Self::Category2 | Self::Category3 => Severity::Danger,
            Self::Category4 | Self::Category5 => Severity::Critical,
        }
    }

    /// Wire label, e.g. `category_3`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TropicalDepression => "tropical_depression",
            Self::TropicalStorm => "tropical_storm",
            Self::Category1 => "category_1",
            Self::Category2 => "category_2",
            Self::Category3 => "category_3",
            Self::Category4 => "category_4",
            Self::Category5 => "category_5",
            Self::Unknown => "unknown",
        }
    }

    /// Display form, e.g. `Category 3`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TropicalDepression => "Tropical Depression",
            Self::TropicalStorm => "Tropical Storm",
            Self::Category1 => "Category 1",
            Self::Category2 => "Category 2",
            Self::Category3 => "Category 3",
            Self::Category4 => "Category 4",
            Self::Category5 => "Category 5",
            Self::Unknown => "Unknown",
        }
    }
}
