//! Shared constants, unit conversions, and grid geometry for the launcher
//! calculator workspace.

/// Physical and rig constants. Lengths are centimetres unless stated otherwise.
pub mod constants {
    /// Gravitational acceleration at the workbench (m/s²).
    pub const GRAVITY_M_S2: f64 = 9.81;
    /// Side length of the square target grid (cm).
    pub const GRID_SIZE_CM: f64 = 200.0;
    /// Distance from the launcher to the grid's near edge (cm).
    pub const LAUNCHER_OFFSET_CM: f64 = 100.0;
    /// Transverse coordinate of the launcher's centerline on the grid (cm).
    pub const CENTERLINE_CM: f64 = 100.0;
    /// Lateral offsets within this band of either side wall count as edge lanes (cm).
    pub const EDGE_BAND_CM: f64 = 50.0;
    /// Hard ceiling on spring travel in the acute-angle setting (cm).
    pub const MAX_ACUTE_CONTRACTION_CM: f64 = 15.0;
    /// Fallback projectile mass when none is supplied (grams).
    pub const DEFAULT_PROJECTILE_MASS_G: f64 = 50.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert grams to kilograms.
    #[inline]
    pub fn grams_to_kg(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert centimetres to metres.
    #[inline]
    pub fn cm_to_m(v: f64) -> f64 {
        v / 100.0
    }

    /// Convert metres to centimetres.
    #[inline]
    pub fn m_to_cm(v: f64) -> f64 {
        v * 100.0
    }

    /// Round to one decimal place, the resolution of the spring's scale.
    #[inline]
    pub fn round_to_tenth(v: f64) -> f64 {
        (v * 10.0).round() / 10.0
    }
}

/// Geometry of the target grid relative to the fixed launcher position.
pub mod grid {
    use super::constants::{CENTERLINE_CM, EDGE_BAND_CM, GRID_SIZE_CM, LAUNCHER_OFFSET_CM};
    use super::units::cm_to_m;

    /// Depth from the launcher to a grid x coordinate (cm).
    #[inline]
    pub fn depth_cm(x_cm: f64) -> f64 {
        x_cm + LAUNCHER_OFFSET_CM
    }

    /// Lateral offset of a grid y coordinate from the centerline (cm).
    #[inline]
    pub fn lateral_cm(y_cm: f64) -> f64 {
        (y_cm - CENTERLINE_CM).abs()
    }

    /// Whether a lateral offset falls in the tuned band along either side wall.
    #[inline]
    pub fn in_edge_band(lateral_cm: f64) -> bool {
        lateral_cm < EDGE_BAND_CM || lateral_cm > GRID_SIZE_CM - EDGE_BAND_CM
    }

    /// Straight-line distance from the launcher to a grid coordinate (m).
    pub fn launcher_distance_m(x_cm: f64, y_cm: f64) -> f64 {
        let dx = depth_cm(x_cm);
        let dy = lateral_cm(y_cm);
        cm_to_m((dx * dx + dy * dy).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::{grid, units};

    #[test]
    fn centerline_front_edge_is_one_metre_out() {
        assert!((grid::launcher_distance_m(0.0, 100.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn edge_band_covers_both_walls() {
        assert!(grid::in_edge_band(grid::lateral_cm(0.0)));
        assert!(grid::in_edge_band(grid::lateral_cm(200.0)));
        assert!(!grid::in_edge_band(grid::lateral_cm(100.0)));
        assert!(!grid::in_edge_band(grid::lateral_cm(60.0)));
    }

    #[test]
    fn rounding_matches_spring_scale() {
        assert_eq!(units::round_to_tenth(14.856), 14.9);
        assert_eq!(units::round_to_tenth(12.04), 12.0);
    }
}
