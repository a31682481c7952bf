use launcher_calculator::contraction::{
    AngleSetting, LaunchParameters, Target, TargetType, calculate,
};

fn geometry(angle_setting: AngleSetting, x_cm: f64, y_cm: f64) -> LaunchParameters {
    LaunchParameters::Geometry {
        angle_setting,
        target: Target::Coordinates { x_cm, y_cm },
    }
}

#[test]
fn geometry_contraction_stays_in_calibrated_range() {
    for angle in [AngleSetting::Acute, AngleSetting::Obtuse] {
        for x in (0..=200).step_by(10) {
            for y in (0..=200).step_by(10) {
                let result = calculate(&geometry(angle, x as f64, y as f64));
                let c = result.contraction_cm;
                match angle {
                    // Base 12 at the near edge, clamped at the 15 cm travel ceiling.
                    AngleSetting::Acute => {
                        assert!((12.0..=15.0).contains(&c), "acute ({x},{y}) gave {c}")
                    }
                    // No clamp: 9.5 at the front line up to 18.75 in the far corners.
                    AngleSetting::Obtuse => {
                        assert!((9.5..=18.8).contains(&c), "obtuse ({x},{y}) gave {c}")
                    }
                }
                // One-decimal rounding holds everywhere.
                assert!((c * 10.0 - (c * 10.0).round()).abs() < 1e-9);
                assert!(result.target_distance_m > 0.0);
            }
        }
    }
}

#[test]
fn geometry_contraction_monotonic_in_depth() {
    for angle in [AngleSetting::Acute, AngleSetting::Obtuse] {
        for y in [0.0, 40.0, 100.0, 160.0, 200.0] {
            let mut previous = f64::NEG_INFINITY;
            for x in (0..=200).step_by(5) {
                let c = calculate(&geometry(angle, x as f64, y)).contraction_cm;
                assert!(
                    c >= previous,
                    "{angle} contraction decreased at ({x},{y}): {previous} -> {c}"
                );
                previous = c;
            }
        }
    }
}

#[test]
fn physics_reference_scenario() {
    let params = LaunchParameters::Physics {
        target_distance_m: 4.5,
        launch_angle_deg: 45.0,
        spring_constant_n_per_m: 100.0,
        projectile_mass_g: Some(50.0),
    };
    let result = calculate(&params);
    // sqrt(2 * 0.5 * 0.05 * 4.5 * 9.81 / 100) m = 14.8568... cm
    assert_eq!(result.contraction_cm, 14.9);
    assert_eq!(result.target_distance_m, 4.5);
    assert_eq!(result.angle_setting, None);
}

#[test]
fn degenerate_angles_return_finite_contraction() {
    for angle in [0.0, 90.0] {
        let params = LaunchParameters::Physics {
            target_distance_m: 4.5,
            launch_angle_deg: angle,
            spring_constant_n_per_m: 100.0,
            projectile_mass_g: None,
        };
        let result = calculate(&params);
        assert!(result.contraction_cm.is_finite());
        assert!(!result.contraction_cm.is_nan());
        assert!(result.contraction_cm >= 0.0);
    }
}

#[test]
fn untuned_pairs_resolve_to_zero_not_error() {
    // The obtuse presets are not calibrated for the acute setting and vice versa.
    for (angle, target) in [
        (AngleSetting::Acute, TargetType::Center),
        (AngleSetting::Acute, TargetType::FrontLine),
        (AngleSetting::Obtuse, TargetType::StartLine),
        (AngleSetting::Obtuse, TargetType::FarSide),
    ] {
        let result = calculate(&LaunchParameters::Geometry {
            angle_setting: angle,
            target: Target::Preset(target),
        });
        assert_eq!(result.contraction_cm, 0.0);
        assert_eq!(result.target_distance_m, 0.0);
    }
}

#[test]
fn calculator_is_deterministic_bit_for_bit() {
    let params = [
        geometry(AngleSetting::Acute, 137.0, 62.0),
        geometry(AngleSetting::Obtuse, 11.0, 191.0),
        LaunchParameters::Physics {
            target_distance_m: 3.3,
            launch_angle_deg: 30.0,
            spring_constant_n_per_m: 75.0,
            projectile_mass_g: Some(42.0),
        },
    ];
    for p in params {
        let first = calculate(&p);
        let second = calculate(&p);
        assert_eq!(
            first.contraction_cm.to_bits(),
            second.contraction_cm.to_bits()
        );
        assert_eq!(
            first.target_distance_m.to_bits(),
            second.target_distance_m.to_bits()
        );
        assert_eq!(first, second);
    }
}
