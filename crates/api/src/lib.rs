//! Request-handler layer mirroring the original calculator's JSON contract.
//!
//! HTTP framing stays external: these handlers accept payload structs that a
//! web layer would deserialize from `POST /calculate`, `POST /calculations`,
//! and `GET /calculations`, and return plain result structs. Validation
//! failures map to a client error, storage failures to a server error; the
//! calculator itself never contributes errors.

use launcher_contraction::{
    AngleSetting, CalculationResult, LaunchParameters, Target, TargetType, calculate as run,
};
use launcher_core::constants::GRID_SIZE_CM;
use launcher_store::{Calculation, CalculationStore, NewCalculation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the handler layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input; the request is rejected, not retried.
    #[error("invalid request: {0}")]
    Validation(String),
    /// Persistence failure. Not expected from the in-memory store, but a
    /// future backing store must surface save failures distinctly from
    /// validation failures.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl ApiError {
    /// HTTP status the embedding layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Storage(_) => 500,
        }
    }
}

/// Payload accepted by the calculate operation. Which fields are present
/// selects the calculation mode: explicit coordinates win over a preset
/// target, which wins over a declared custom distance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculateRequest {
    pub angle_setting: Option<AngleSetting>,
    pub target_type: Option<TargetType>,
    /// Target grid x coordinate (cm, 0..=200).
    pub custom_target_x: Option<f64>,
    /// Target grid y coordinate (cm, 0..=200).
    pub custom_target_y: Option<f64>,
    /// Launch angle (degrees, 0..=90), physics mode.
    pub launch_angle: Option<f64>,
    /// Spring constant (N/m), physics mode.
    pub spring_constant: Option<f64>,
    /// Projectile mass (grams); defaults to 50 when absent.
    pub projectile_weight: Option<f64>,
    /// User-declared target distance (m), physics mode.
    pub custom_distance: Option<f64>,
}

/// Response payload for a calculation. Fields a mode does not define are
/// absent on the wire rather than echoed as placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub contraction_distance: f64,
    pub target_distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_setting: Option<AngleSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_y: Option<f64>,
}

impl From<CalculationResult> for CalculateResponse {
    fn from(result: CalculationResult) -> Self {
        Self {
            contraction_distance: result.contraction_cm,
            target_distance: result.target_distance_m,
            angle_setting: result.angle_setting,
            target_type: result.target_type,
            target_x: result.target_x_cm,
            target_y: result.target_y_cm,
        }
    }
}

impl CalculateResponse {
    /// Build the persisted record for an accepted response.
    pub fn to_record(&self, launch_angle: Option<f64>, timestamp_ms: f64) -> NewCalculation {
        NewCalculation {
            angle_setting: self.angle_setting,
            target_type: self.target_type,
            target_distance: self.target_distance,
            target_x: self.target_x,
            target_y: self.target_y,
            contraction_distance: self.contraction_distance,
            launch_angle,
            timestamp: timestamp_ms,
        }
    }
}

fn require<T: Copy>(value: Option<T>, name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::Validation(format!("{name} is required")))
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<(), ApiError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ApiError::Validation(format!(
            "{name} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

fn check_positive(name: &str, value: f64) -> Result<(), ApiError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ApiError::Validation(format!(
            "{name} must be a positive number, got {value}"
        )));
    }
    Ok(())
}

fn select_mode(request: &CalculateRequest) -> Result<LaunchParameters, ApiError> {
    if let (Some(x), Some(y)) = (request.custom_target_x, request.custom_target_y) {
        let angle_setting = require(request.angle_setting, "angleSetting")?;
        check_range("customTargetX", x, 0.0, GRID_SIZE_CM)?;
        check_range("customTargetY", y, 0.0, GRID_SIZE_CM)?;
        return Ok(LaunchParameters::Geometry {
            angle_setting,
            target: Target::Coordinates { x_cm: x, y_cm: y },
        });
    }

    if let Some(target_type) = request.target_type {
        let angle_setting = require(request.angle_setting, "angleSetting")?;
        return Ok(LaunchParameters::Geometry {
            angle_setting,
            target: Target::Preset(target_type),
        });
    }

    if let Some(distance) = request.custom_distance {
        let launch_angle = require(request.launch_angle, "launchAngle")?;
        let spring_constant = require(request.spring_constant, "springConstant")?;
        check_positive("customDistance", distance)?;
        check_range("launchAngle", launch_angle, 0.0, 90.0)?;
        check_positive("springConstant", spring_constant)?;
        if let Some(weight) = request.projectile_weight {
            check_positive("projectileWeight", weight)?;
        }
        return Ok(LaunchParameters::Physics {
            target_distance_m: distance,
            launch_angle_deg: launch_angle,
            spring_constant_n_per_m: spring_constant,
            projectile_mass_g: request.projectile_weight,
        });
    }

    Err(ApiError::Validation(
        "one of customTargetX/customTargetY, targetType, or customDistance is required".into(),
    ))
}

/// Run a validated calculation. Mirrors `POST /calculate`.
pub fn calculate(request: &CalculateRequest) -> Result<CalculateResponse, ApiError> {
    let params = select_mode(request)?;
    Ok(run(&params).into())
}

/// Persist an accepted calculation and return it with its identifier.
/// Mirrors `POST /calculations`.
pub fn save_calculation(
    store: &CalculationStore,
    record: NewCalculation,
) -> Result<Calculation, ApiError> {
    if !record.timestamp.is_finite() || record.timestamp < 0.0 {
        return Err(ApiError::Validation(format!(
            "timestamp must be non-negative epoch milliseconds, got {}",
            record.timestamp
        )));
    }
    if !record.contraction_distance.is_finite() || record.contraction_distance < 0.0 {
        return Err(ApiError::Validation(format!(
            "contractionDistance must be non-negative, got {}",
            record.contraction_distance
        )));
    }
    Ok(store.save(record))
}

/// List saved calculations, most recent first. Mirrors `GET /calculations`.
pub fn list_calculations(store: &CalculationStore) -> Vec<Calculation> {
    store.list()
}
