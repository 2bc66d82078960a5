use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uom::si::f64::Length;
use uom::si::length::{foot, kilometer, meter, mile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Feet,
    Meters,
    Miles,
    Kilometers,
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DistanceUnit::Feet => "feet",
            DistanceUnit::Meters => "meters",
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "kilometers",
        };
        write!(f, "{s}")
    }
}

/// a distance as written by the user, e.g. `{ distance = 0.5, distance_unit = "miles" }`.
/// the network is measured in feet, so all distances are converted before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceConfig {
    pub distance: f64,
    pub distance_unit: DistanceUnit,
}

impl DistanceConfig {
    pub fn feet(distance: f64) -> DistanceConfig {
        DistanceConfig {
            distance,
            distance_unit: DistanceUnit::Feet,
        }
    }

    pub fn to_length(&self) -> Length {
        match self.distance_unit {
            DistanceUnit::Feet => Length::new::<foot>(self.distance),
            DistanceUnit::Meters => Length::new::<meter>(self.distance),
            DistanceUnit::Miles => Length::new::<mile>(self.distance),
            DistanceUnit::Kilometers => Length::new::<kilometer>(self.distance),
        }
    }

    pub fn to_feet(&self) -> f64 {
        match self.distance_unit {
            DistanceUnit::Feet => self.distance,
            _ => self.to_length().get::<foot>(),
        }
    }
}

impl Display for DistanceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.distance, self.distance_unit)
    }
}
