//! Enumeration types for the carbon emissions estimator.
//!
//! The transport mode set is closed: every lookup keyed by mode is checked
//! for exhaustiveness at compile time instead of failing on an unknown key
//! at runtime. String keys only enter through [`TransportMode::from_str`].
//!
//! [`TransportMode::from_str`]: core::str::FromStr::from_str

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Transport modes
// ---------------------------------------------------------------------------

/// A way of travelling between two places.
///
/// Declaration order is the enumeration order used by every comparison view
/// and by ordered maps keyed on the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum TransportMode {
    /// Human-powered cycling. Emits nothing.
    Bicycle,
    /// Private passenger car.
    Car,
    /// Public bus, per passenger.
    Bus,
    /// Freight truck.
    Truck,
}

impl TransportMode {
    /// Every mode in enumeration order.
    pub const ALL: [Self; 4] = [Self::Bicycle, Self::Car, Self::Bus, Self::Truck];

    /// The lowercase key used in configuration files and form values.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bicycle => "bicycle",
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Truck => "truck",
        }
    }

    /// Display metadata for the presentation layer.
    pub const fn profile(self) -> ModeProfile {
        match self {
            Self::Bicycle => ModeProfile {
                label: "Bicicleta",
                icon: "🚲",
                color: "#10b981",
            },
            Self::Car => ModeProfile {
                label: "Carro",
                icon: "🚗",
                color: "#3b82f6",
            },
            Self::Bus => ModeProfile {
                label: "Ônibus",
                icon: "🚌",
                color: "#f59e0b",
            },
            Self::Truck => ModeProfile {
                label: "Caminhão",
                icon: "🚚",
                color: "#ef4444",
            },
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = UnknownModeError;

    /// Parse a mode key. Surrounding whitespace and letter case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| UnknownModeError {
                mode: s.to_owned(),
            })
    }
}

/// A mode key that does not name any [`TransportMode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {mode}")]
pub struct UnknownModeError {
    /// The key as the caller supplied it.
    pub mode: String,
}

// ---------------------------------------------------------------------------
// Presentation metadata
// ---------------------------------------------------------------------------

/// Label, icon, and color shown next to a mode.
///
/// Owned by the presentation layer; no calculation reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeProfile {
    /// Localized (pt-BR) label.
    pub label: &'static str,
    /// Emoji icon.
    pub icon: &'static str,
    /// CSS hex color.
    pub color: &'static str,
}

// ---------------------------------------------------------------------------
// Distance provenance
// ---------------------------------------------------------------------------

/// Where the distance used in a calculation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum DistanceSource {
    /// Resolved from the known route table.
    RouteTable,
    /// Typed in by the user.
    Manual,
}
