//! Pure contraction calculator for the spring launcher.
//!
//! Two independent strategies are supported as explicit modes: a
//! geometry/lookup mode tuned against the 200×200 cm target grid, and a
//! physics mode that sizes the spring from the ideal projectile range
//! equation. Both are deterministic, allocation-free, and never fail;
//! missing calibration data degrades to a zero-valued result.

pub mod geometry;
pub mod physics;
pub mod trajectory;

use serde::{Deserialize, Serialize};

/// Coarse discrete launch-angle mode of the rig. Each setting has its own
/// tuned formula and preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleSetting {
    Acute,
    Obtuse,
}

impl AngleSetting {
    /// Wire/CSV name of the setting.
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleSetting::Acute => "acute",
            AngleSetting::Obtuse => "obtuse",
        }
    }
}

impl std::fmt::Display for AngleSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predefined targets on the grid. The first four are calibrated for the
/// acute setting, the rest for the obtuse setting; any pairing may still be
/// requested and untuned pairs resolve to a zero result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetType {
    StartLine,
    FrontLeftCorner,
    MidLine,
    FarSide,
    FrontLine,
    BackLine,
    Center,
    Side,
}

impl TargetType {
    /// Wire/CSV name of the target.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::StartLine => "start-line",
            TargetType::FrontLeftCorner => "front-left-corner",
            TargetType::MidLine => "mid-line",
            TargetType::FarSide => "far-side",
            TargetType::FrontLine => "front-line",
            TargetType::BackLine => "back-line",
            TargetType::Center => "center",
            TargetType::Side => "side",
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the shot should land: an explicit grid coordinate or a preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// Explicit coordinates on the 200×200 cm grid.
    Coordinates { x_cm: f64, y_cm: f64 },
    /// One of the calibrated preset targets.
    Preset(TargetType),
}

/// Inputs to a calculation. The variant selects the strategy explicitly
/// rather than inferring it from which optional fields happen to be set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaunchParameters {
    /// Geometry/lookup mode over the target grid.
    Geometry {
        angle_setting: AngleSetting,
        target: Target,
    },
    /// Physics mode from a declared target distance and spring properties.
    Physics {
        target_distance_m: f64,
        launch_angle_deg: f64,
        spring_constant_n_per_m: f64,
        /// Defaults to 50 g when absent.
        projectile_mass_g: Option<f64>,
    },
}

/// Output of a calculation. `contraction_cm` is rounded to one decimal place;
/// the echoed fields are populated where the mode defines them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub contraction_cm: f64,
    pub target_distance_m: f64,
    pub angle_setting: Option<AngleSetting>,
    pub target_type: Option<TargetType>,
    pub target_x_cm: Option<f64>,
    pub target_y_cm: Option<f64>,
}

/// Run the calculation strategy selected by `params`.
pub fn calculate(params: &LaunchParameters) -> CalculationResult {
    match *params {
        LaunchParameters::Geometry {
            angle_setting,
            target,
        } => match target {
            Target::Coordinates { x_cm, y_cm } => {
                geometry::for_coordinates(angle_setting, x_cm, y_cm)
            }
            Target::Preset(target_type) => geometry::for_preset(angle_setting, target_type),
        },
        LaunchParameters::Physics {
            target_distance_m,
            launch_angle_deg,
            spring_constant_n_per_m,
            projectile_mass_g,
        } => physics::contraction(
            target_distance_m,
            launch_angle_deg,
            spring_constant_n_per_m,
            projectile_mass_g,
        ),
    }
}
