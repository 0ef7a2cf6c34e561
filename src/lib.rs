//! Longitudinal acceleration limits for cruise control, shaped by a
//! selectable driving personality. no-std and no-alloc compatible.
//!
//! [`AccelLimiter`] holds the selected [`Personality`]. With Stock selected
//! it hands back whatever limits the caller already computed; with Eco or
//! Sport it interpolates that personality's speed-indexed tables, holding
//! the end values outside the tabulated speed range.
//!
//! | Personality | Minimum accel. table | Maximum accel. table |
//! |-------------|----------------------|----------------------|
//! | Stock       | caller's limits      | caller's limits      |
//! | Eco         | `MIN_ACCEL_ECO`      | `MAX_ACCEL_ECO`      |
//! | Sport       | `MIN_ACCEL_SPORT`    | `MAX_ACCEL_SPORT`    |
//!
//! Each evaluation is a bisection search over at most 14 breakpoints
//! and performs no allocation.
//!
//! # Example: Per-tick Limits
//! ```rust
//! use accel_personality::{AccelLimiter, Personality};
//!
//! let mut limiter = AccelLimiter::new();
//!
//! // Limits computed elsewhere in the control stack
//! let fallback = (-3.5, 2.0);
//!
//! // Stock defers to the caller
//! assert_eq!(limiter.get_accel_limits(12.0, fallback), fallback);
//!
//! // Personality values arrive from the selector as integers
//! let eco = Personality::try_from(1_i32).unwrap();
//! assert!(limiter.set_personality(eco));
//! assert_eq!(limiter.get_accel_limits(0.0, fallback), (-0.030, 2.0));
//! ```
//!
//! # Example: Interpolating a Breakpoint Table
//! ```rust
//! use accel_personality::one_dim::{linear::interp, Interp1D, RectilinearGrid1D};
//! use accel_personality::LinearHold1D;
//!
//! // Repeated breakpoints make a step
//! let x = [0.0_f64, 1.0, 1.0, 2.0];
//! let y = [0.0_f64, 1.0, 5.0, 6.0];
//!
//! let lin = LinearHold1D::new(RectilinearGrid1D::new(&x, &y).unwrap());
//! assert_eq!(lin.eval_one(0.5).unwrap(), 0.5);
//! assert_eq!(lin.eval_one(9.0).unwrap(), 6.0);
//!
//! // Same rules, without building a grid
//! assert_eq!(interp(1.5, &x, &y), 5.5);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub mod one_dim;
pub use one_dim::{linear::LinearHold1D, RectilinearGrid1D};

pub mod personality;
pub use personality::Personality;

pub mod tables;
pub use tables::{tables_for, BreakpointTable, PersonalityTables};

pub mod limiter;
pub use limiter::AccelLimiter;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
