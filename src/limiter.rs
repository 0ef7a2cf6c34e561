//! Cruise acceleration limits by personality.

use log::debug;

use crate::tables::tables_for;
use crate::Personality;

/// Holds the selected personality and produces `(min, max)` acceleration
/// limits for each control tick.
///
/// There is no internal synchronization; a host sharing one limiter
/// between threads must serialize access to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccelLimiter {
    personality: Personality,
}

impl AccelLimiter {
    /// A limiter in the Stock personality
    pub const fn new() -> Self {
        Self {
            personality: Personality::Stock,
        }
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// Whether the limiter computes its own limits, i.e. a
    /// personality other than Stock is selected.
    pub fn is_enabled(&self) -> bool {
        self.personality != Personality::Stock
    }

    /// Select a personality, returning whether it is anything but Stock.
    pub fn set_personality(&mut self, personality: Personality) -> bool {
        if personality != self.personality {
            debug!(
                "acceleration personality changed: {} -> {}",
                self.personality, personality
            );
        }
        self.personality = personality;
        self.is_enabled()
    }

    /// Acceleration limits `(min, max)` in m/s^2 at speed `v_ego` in m/s.
    ///
    /// With Stock selected, `fallback_limits` is returned untouched.
    /// Otherwise the personality's tables are interpolated, holding the
    /// end values for speeds outside the tables.
    #[inline]
    pub fn get_accel_limits(&self, v_ego: f64, fallback_limits: (f64, f64)) -> (f64, f64) {
        match self.personality {
            Personality::Stock => fallback_limits,
            personality => tables_for(personality).limits_at(v_ego),
        }
    }
}
