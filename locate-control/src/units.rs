//! Units of the distance shown in the location popup.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const FEET_IN_METER: f64 = 3.2808399;

/// Unit system used in the location popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UnitSystem {
    /// Distances in meters.
    #[default]
    Metric,
    /// Distances in feet.
    Imperial,
}

impl UnitSystem {
    /// Converts a distance in meters into this unit system.
    pub fn distance(&self, meters: f64) -> Distance {
        match self {
            UnitSystem::Metric => Distance {
                value: meters.round(),
                unit: "meters",
            },
            UnitSystem::Imperial => Distance {
                value: (meters * FEET_IN_METER).round(),
                unit: "feet",
            },
        }
    }
}

/// Distance rounded to whole units, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    value: f64,
    unit: &'static str,
}

impl Distance {
    /// Rounded value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit name, e.g. `meters`.
    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// Value formatted without a fractional part.
    pub fn formatted_value(&self) -> String {
        // `+ 0.0` turns negative zero into zero.
        format!("{:.0}", self.value + 0.0)
    }
}
