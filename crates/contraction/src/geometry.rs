//! Geometry/lookup mode: tuned contraction values over the target grid.
//!
//! The coordinate formula is the canonical source of truth; preset targets
//! resolve through a calibration table whose representative coordinates feed
//! the same distance computation so both paths agree on target distance.

use launcher_core::constants::MAX_ACUTE_CONTRACTION_CM;
use launcher_core::grid;
use launcher_core::units::round_to_tenth;

use crate::{AngleSetting, CalculationResult, TargetType};

/// Calibration table: tuned contraction (cm) and a representative coordinate
/// (cm) for each preset target the rig has been dialled in for.
const PRESET_TABLE: &[(AngleSetting, TargetType, f64, (f64, f64))] = &[
    (AngleSetting::Acute, TargetType::StartLine, 12.0, (0.0, 100.0)),
    (AngleSetting::Acute, TargetType::FrontLeftCorner, 13.0, (0.0, 0.0)),
    (AngleSetting::Acute, TargetType::MidLine, 14.0, (100.0, 100.0)),
    (AngleSetting::Acute, TargetType::FarSide, 15.0, (100.0, 0.0)),
    (AngleSetting::Obtuse, TargetType::FrontLine, 9.5, (0.0, 100.0)),
    (AngleSetting::Obtuse, TargetType::BackLine, 15.0, (200.0, 100.0)),
    (AngleSetting::Obtuse, TargetType::Center, 14.0, (100.0, 100.0)),
    (AngleSetting::Obtuse, TargetType::Side, 15.0, (100.0, 0.0)),
];

fn preset_entry(angle: AngleSetting, target: TargetType) -> Option<(f64, (f64, f64))> {
    PRESET_TABLE
        .iter()
        .find(|(a, t, _, _)| *a == angle && *t == target)
        .map(|(_, _, contraction, coords)| (*contraction, *coords))
}

/// Contraction for an explicit grid coordinate under the given angle setting.
pub fn for_coordinates(angle: AngleSetting, x_cm: f64, y_cm: f64) -> CalculationResult {
    let depth = grid::depth_cm(x_cm);
    let lateral = grid::lateral_cm(y_cm);

    let contraction = match angle {
        AngleSetting::Acute => {
            // Base 12 cm, +1 cm per 100 cm of depth, +0.5 cm in the edge lanes.
            let mut c = 12.0 + (depth / 100.0) * 1.0;
            if grid::in_edge_band(lateral) {
                c += 0.5;
            }
            // Physical ceiling on spring travel in this setting.
            c.min(MAX_ACUTE_CONTRACTION_CM)
        }
        AngleSetting::Obtuse => {
            // Base 9.5 cm, scaled toward the back wall, +1 cm in the edge lanes.
            let mut c = 9.5 + (depth / 200.0) * 5.5;
            if grid::in_edge_band(lateral) {
                c += 1.0;
            }
            c
        }
    };

    CalculationResult {
        contraction_cm: round_to_tenth(contraction),
        target_distance_m: grid::launcher_distance_m(x_cm, y_cm),
        angle_setting: Some(angle),
        target_type: None,
        target_x_cm: Some(x_cm),
        target_y_cm: Some(y_cm),
    }
}

/// Contraction for a preset target. Untuned (angle, target) pairs yield a
/// zero-valued result rather than an error; missing calibration data is an
/// expected state for this rig.
pub fn for_preset(angle: AngleSetting, target: TargetType) -> CalculationResult {
    match preset_entry(angle, target) {
        Some((contraction, (x_cm, y_cm))) => CalculationResult {
            contraction_cm: round_to_tenth(contraction),
            target_distance_m: grid::launcher_distance_m(x_cm, y_cm),
            angle_setting: Some(angle),
            target_type: Some(target),
            target_x_cm: Some(x_cm),
            target_y_cm: Some(y_cm),
        },
        None => CalculationResult {
            contraction_cm: 0.0,
            target_distance_m: 0.0,
            angle_setting: Some(angle),
            target_type: Some(target),
            target_x_cm: None,
            target_y_cm: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acute_front_center_is_base_plus_offset_depth() {
        // depth 100 cm contributes exactly 1 cm over the 12 cm base
        let result = for_coordinates(AngleSetting::Acute, 0.0, 100.0);
        assert_eq!(result.contraction_cm, 13.0);
        assert!((result.target_distance_m - 1.0).abs() < 1e-12);
    }

    #[test]
    fn acute_clamps_at_spring_travel_ceiling() {
        let result = for_coordinates(AngleSetting::Acute, 200.0, 0.0);
        assert_eq!(result.contraction_cm, 15.0);
    }

    #[test]
    fn obtuse_back_wall_edge_lane() {
        // depth 300 cm: 9.5 + 8.25 + 1.0 = 18.75, rounded to 18.8
        let result = for_coordinates(AngleSetting::Obtuse, 200.0, 0.0);
        assert_eq!(result.contraction_cm, 18.8);
    }

    #[test]
    fn preset_reuses_coordinate_distance_formula() {
        let preset = for_preset(AngleSetting::Acute, TargetType::MidLine);
        let coords = for_coordinates(AngleSetting::Acute, 100.0, 100.0);
        assert_eq!(preset.target_distance_m, coords.target_distance_m);
        assert_eq!(preset.target_x_cm, Some(100.0));
        assert_eq!(preset.target_y_cm, Some(100.0));
    }

    #[test]
    fn untuned_pair_yields_zero_result() {
        let result = for_preset(AngleSetting::Acute, TargetType::BackLine);
        assert_eq!(result.contraction_cm, 0.0);
        assert_eq!(result.target_distance_m, 0.0);
        assert_eq!(result.target_x_cm, None);
        assert_eq!(result.target_type, Some(TargetType::BackLine));
    }
}
