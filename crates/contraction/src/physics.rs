//! Physics mode: spring sizing from the ideal projectile range equation.

use launcher_core::constants::{DEFAULT_PROJECTILE_MASS_G, GRAVITY_M_S2};
use launcher_core::units::{grams_to_kg, m_to_cm, round_to_tenth};

use crate::CalculationResult;

/// Below this magnitude `sin(2θ)` is treated as zero. `sin(PI)` for a 90°
/// launch evaluates to ~1.2e-16 and would otherwise turn the denominator
/// into an absurd launch velocity instead of triggering the fallback.
const SIN_EPSILON: f64 = 1e-9;

/// Launch velocity (m/s) required to cover `target_distance_m` on flat ground.
///
/// Uses the ideal range equation `d = v0² sin(2θ) / g`. For degenerate angles
/// (0° or 90°) the denominator vanishes and `sqrt(d·g)` is returned as a
/// bounded approximation instead of dividing by zero.
pub fn launch_velocity_m_s(target_distance_m: f64, launch_angle_deg: f64) -> f64 {
    let sin_2theta = (2.0 * launch_angle_deg.to_radians()).sin();
    if sin_2theta.abs() < SIN_EPSILON {
        (target_distance_m * GRAVITY_M_S2).sqrt()
    } else {
        (target_distance_m * GRAVITY_M_S2 / sin_2theta).sqrt()
    }
}

/// Spring contraction (cm) that stores enough energy to reach the target.
///
/// Equates the kinetic energy at launch with the spring's potential energy:
/// `0.5*m*v0^2 = 0.5*k*x^2`, so `x = sqrt(2E/k)`. Mass defaults to 50 g
/// when not supplied.
pub fn contraction(
    target_distance_m: f64,
    launch_angle_deg: f64,
    spring_constant_n_per_m: f64,
    projectile_mass_g: Option<f64>,
) -> CalculationResult {
    let mass_kg = grams_to_kg(projectile_mass_g.unwrap_or(DEFAULT_PROJECTILE_MASS_G));
    let v0 = launch_velocity_m_s(target_distance_m, launch_angle_deg);
    let kinetic_energy_j = 0.5 * mass_kg * v0 * v0;
    let contraction_m = (2.0 * kinetic_energy_j / spring_constant_n_per_m).sqrt();

    CalculationResult {
        contraction_cm: round_to_tenth(m_to_cm(contraction_m)),
        target_distance_m,
        angle_setting: None,
        target_type: None,
        target_x_cm: None,
        target_y_cm: None,
    }
}
