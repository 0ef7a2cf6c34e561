//! Acceleration limit tables, indexed by ego speed in m/s and
//! giving acceleration in m/s^2.
//!
//! The minimum-acceleration tables place breakpoints 0.01 m/s apart
//! to approximate a staircase while staying continuous.

use crate::one_dim::linear::interp;
use crate::one_dim::{sample, Grid1D, GridSample};
use crate::Personality;

/// Speed breakpoints shared by all minimum-acceleration tables
pub const MIN_ACCEL_BP: [f64; 14] = [
    0.0, 3.0, 3.01, 8.0, 8.01, 12.0, 12.01, 16.0, 16.01, 20.0, 20.01, 25.0, 25.01, 30.0,
];

/// Speed breakpoints shared by all maximum-acceleration tables
pub const MAX_ACCEL_BP: [f64; 9] = [0.0, 4.0, 6.0, 8.0, 11.0, 20.0, 25.0, 30.0, 40.0];

const MIN_ACCEL_STOCK_V: [f64; 14] = [
    -0.031, -0.031, -0.011, -0.011, -0.11, -0.11, -0.33, -0.33, -0.63, -0.63, -0.79, -0.79, -1.0,
    -1.0,
];
const MIN_ACCEL_ECO_V: [f64; 14] = [
    -0.030, -0.030, -0.010, -0.010, -0.10, -0.10, -0.32, -0.32, -0.64, -0.64, -0.78, -0.78, -1.0,
    -1.0,
];
const MIN_ACCEL_SPORT_V: [f64; 14] = [
    -0.032, -0.032, -0.012, -0.012, -0.12, -0.12, -0.34, -0.34, -0.66, -0.66, -0.80, -0.80, -1.0,
    -1.0,
];

const MAX_ACCEL_STOCK_V: [f64; 9] = [2.0, 2.0, 2.0, 1.70, 1.30, 0.66, 0.54, 0.38, 0.17];
const MAX_ACCEL_ECO_V: [f64; 9] = [2.0, 2.0, 2.0, 1.40, 1.00, 0.58, 0.46, 0.32, 0.09];
const MAX_ACCEL_SPORT_V: [f64; 9] = [2.0, 2.0, 2.0, 2.00, 1.63, 0.84, 0.70, 0.50, 0.30];

// Stock tables are kept for reference; the limiter defers to the
// caller's own limits when Stock is selected.
pub const MIN_ACCEL_STOCK: BreakpointTable =
    BreakpointTable::new(&MIN_ACCEL_BP, &MIN_ACCEL_STOCK_V);
pub const MIN_ACCEL_ECO: BreakpointTable =
    BreakpointTable::new(&MIN_ACCEL_BP, &MIN_ACCEL_ECO_V);
pub const MIN_ACCEL_SPORT: BreakpointTable =
    BreakpointTable::new(&MIN_ACCEL_BP, &MIN_ACCEL_SPORT_V);

pub const MAX_ACCEL_STOCK: BreakpointTable =
    BreakpointTable::new(&MAX_ACCEL_BP, &MAX_ACCEL_STOCK_V);
pub const MAX_ACCEL_ECO: BreakpointTable =
    BreakpointTable::new(&MAX_ACCEL_BP, &MAX_ACCEL_ECO_V);
pub const MAX_ACCEL_SPORT: BreakpointTable =
    BreakpointTable::new(&MAX_ACCEL_BP, &MAX_ACCEL_SPORT_V);

/// A static breakpoint table, validated when the constant is evaluated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakpointTable {
    bp: &'static [f64],
    vals: &'static [f64],
}

impl BreakpointTable {
    /// Pair breakpoints with values.
    ///
    /// Panics (at compile time, for constants) if the lengths differ,
    /// fewer than two entries are given, or the breakpoints decrease.
    pub const fn new(bp: &'static [f64], vals: &'static [f64]) -> Self {
        assert!(bp.len() == vals.len(), "Length mismatch");
        assert!(bp.len() >= 2, "Table must have at least 2 entries");
        assert!(is_non_decreasing(bp), "Breakpoints must be non-decreasing");

        Self { bp, vals }
    }

    pub fn breakpoints(&self) -> &'static [f64] {
        self.bp
    }

    pub fn values(&self) -> &'static [f64] {
        self.vals
    }

    /// The (breakpoint, value) pair at the low end of the table
    pub fn first(&self) -> (f64, f64) {
        (self.bp[0], self.vals[0])
    }

    /// The (breakpoint, value) pair at the high end of the table
    pub fn last(&self) -> (f64, f64) {
        let i = self.bp.len() - 1;
        (self.bp[i], self.vals[i])
    }

    #[inline]
    pub fn interp(&self, x: f64) -> f64 {
        interp(x, self.bp, self.vals)
    }
}

impl Grid1D<f64> for BreakpointTable {
    #[inline]
    fn at(&self, loc: f64) -> Result<GridSample<f64>, &'static str> {
        Ok(sample(self.bp, self.vals, loc))
    }
}

const fn is_non_decreasing(xs: &[f64]) -> bool {
    let mut i = 1;
    while i < xs.len() {
        // Written so that NaN fails the check
        if !(xs[i - 1] <= xs[i]) {
            return false;
        }
        i += 1;
    }
    true
}

/// The minimum and maximum acceleration tables for one personality
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PersonalityTables {
    pub min: BreakpointTable,
    pub max: BreakpointTable,
}

impl PersonalityTables {
    /// `(min, max)` acceleration at speed `v_ego`
    #[inline]
    pub fn limits_at(&self, v_ego: f64) -> (f64, f64) {
        (self.min.interp(v_ego), self.max.interp(v_ego))
    }
}

pub const STOCK_TABLES: PersonalityTables = PersonalityTables {
    min: MIN_ACCEL_STOCK,
    max: MAX_ACCEL_STOCK,
};

pub const ECO_TABLES: PersonalityTables = PersonalityTables {
    min: MIN_ACCEL_ECO,
    max: MAX_ACCEL_ECO,
};

pub const SPORT_TABLES: PersonalityTables = PersonalityTables {
    min: MIN_ACCEL_SPORT,
    max: MAX_ACCEL_SPORT,
};

/// Select the tables for a personality. Anything other than Eco or
/// Sport gets the stock tables.
pub fn tables_for(personality: Personality) -> PersonalityTables {
    match personality {
        Personality::Eco => ECO_TABLES,
        Personality::Sport => SPORT_TABLES,
        _ => STOCK_TABLES,
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::one_dim::linear::LinearHold1D;
    use crate::one_dim::{Interp1D, RectilinearGrid1D};
    use crate::utils::linspace;
    use crate::Personality;

    use super::*;

    const ALL_TABLES: [BreakpointTable; 6] = [
        MIN_ACCEL_STOCK,
        MIN_ACCEL_ECO,
        MIN_ACCEL_SPORT,
        MAX_ACCEL_STOCK,
        MAX_ACCEL_ECO,
        MAX_ACCEL_SPORT,
    ];

    #[test]
    fn test_tables_are_valid_grids() {
        for t in ALL_TABLES {
            assert!(is_non_decreasing(t.breakpoints()));
            assert!(RectilinearGrid1D::new(t.breakpoints(), t.values()).is_ok());
        }
    }

    #[test]
    fn test_non_decreasing_check() {
        assert!(is_non_decreasing(&[0.0, 1.0, 1.0, 2.0]));
        assert!(!is_non_decreasing(&[0.0, 2.0, 1.0]));
        assert!(!is_non_decreasing(&[0.0, f64::NAN]));
    }

    #[test]
    fn test_min_below_max() {
        let speeds = linspace(-5.0, 50.0, 5501);
        for p in Personality::ALL {
            let tables = tables_for(p);
            for &v in &speeds {
                let (lo, hi) = tables.limits_at(v);
                assert!(lo <= hi, "{p} at {v} m/s: {lo} > {hi}");
            }
        }
    }

    #[test]
    fn test_selection_policy() {
        assert_eq!(tables_for(Personality::Stock), STOCK_TABLES);
        assert_eq!(tables_for(Personality::Eco), ECO_TABLES);
        assert_eq!(tables_for(Personality::Sport), SPORT_TABLES);
    }

    #[test]
    fn test_table_ends() {
        assert_eq!(MIN_ACCEL_ECO.first(), (0.0, -0.030));
        assert_eq!(MAX_ACCEL_ECO.first(), (0.0, 2.0));
        assert_eq!(MIN_ACCEL_SPORT.last(), (30.0, -1.0));
        assert_eq!(MAX_ACCEL_SPORT.last(), (40.0, 0.30));
    }

    #[test]
    fn test_interior_values() {
        // Halfway across the 0.01 m/s step
        assert_abs_diff_eq!(MIN_ACCEL_ECO.interp(3.005), -0.020, epsilon = 1e-9);
        assert_abs_diff_eq!(MAX_ACCEL_ECO.interp(9.5), 1.20, epsilon = 1e-12);
        assert_abs_diff_eq!(MAX_ACCEL_SPORT.interp(15.5), 1.235, epsilon = 1e-12);
        assert_eq!(MIN_ACCEL_STOCK.interp(10.0), -0.11);
    }

    #[test]
    fn test_table_as_grid() {
        let lin = LinearHold1D::new(MAX_ACCEL_STOCK);
        let speeds = linspace(-1.0, 45.0, 93);
        let out = lin.eval_alloc(&speeds).unwrap();
        for (&v, &a) in speeds.iter().zip(out.iter()) {
            assert_eq!(a, MAX_ACCEL_STOCK.interp(v));
        }
    }
}
