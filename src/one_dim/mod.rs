//! One-dimensional breakpoint tables and the interpolators that evaluate them.
//!
//! Only non-decreasing breakpoint grids are supported. Repeated breakpoints
//! are allowed and describe a step in the tabulated function.

pub mod linear;

use num_traits::Float;

/// Where an observation point falls relative to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    /// At or below the first breakpoint
    OutsideLow,
    /// At or above the last breakpoint
    OutsideHigh,
}

/// The grid cell containing (or nearest to) an observation point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSample<T> {
    pub x0: T,
    pub y0: T,
    pub x1: T,
    pub y1: T,
    pub extrap: Extrap,
}

/// A tabulated 1D function on a non-decreasing grid.
pub trait Grid1D<T: Float> {
    /// Get the left and right values and their locations
    /// for an observation point.
    ///
    /// For observation points outside the grid, the returned
    /// cell is the first or last one and does not bracket the point.
    fn at(&self, loc: T) -> Result<GridSample<T>, &'static str>;
}

/// A one-dimensional interpolator.
pub trait Interp1D<T: Float> {
    /// Evaluate the interpolant at an observation point.
    fn eval_one(&self, loc: T) -> Result<T, &'static str>;

    /// Evaluate the interpolant at a set of observation points.
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), &'static str> {
        if locs.len() != out.len() {
            return Err("Length mismatch");
        }

        for (loc, o) in locs.iter().zip(out.iter_mut()) {
            *o = self.eval_one(*loc)?;
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Result<Vec<T>, &'static str> {
        let mut out = vec![T::zero(); locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }
}

/// A grid with uneven, possibly repeated, breakpoints.
#[derive(Clone, Copy, Debug)]
pub struct RectilinearGrid1D<'a, T: Float> {
    grid: &'a [T],
    vals: &'a [T],
}

impl<'a, T: Float> RectilinearGrid1D<'a, T> {
    pub fn new(grid: &'a [T], vals: &'a [T]) -> Result<Self, &'static str> {
        if grid.len() != vals.len() {
            return Err("Length mismatch");
        }
        if grid.len() < 2 {
            return Err("Grid must have at least 2 entries");
        }
        if grid
            .windows(2)
            .any(|w| w[0] > w[1] || w[0].is_nan() || w[1].is_nan())
        {
            return Err("Grid must be non-decreasing");
        }

        Ok(Self { grid, vals })
    }

    pub fn grid(&self) -> &'a [T] {
        self.grid
    }

    pub fn vals(&self) -> &'a [T] {
        self.vals
    }
}

impl<T: Float> Grid1D<T> for RectilinearGrid1D<'_, T> {
    #[inline]
    fn at(&self, loc: T) -> Result<GridSample<T>, &'static str> {
        Ok(sample(self.grid, self.vals, loc))
    }
}

/// Find the cell for `loc` on a non-empty, non-decreasing grid.
///
/// Inside the grid the cell satisfies `x0 < loc <= x1`, so it never has
/// zero width. A grid with a single entry yields a zero-width cell.
#[inline]
pub(crate) fn sample<T: Float>(grid: &[T], vals: &[T], loc: T) -> GridSample<T> {
    let n = grid.len();
    let last = n - 1;

    let extrap = match loc {
        x if x <= grid[0] => Extrap::OutsideLow,
        x if x >= grid[last] => Extrap::OutsideHigh,
        _ => Extrap::Inside,
    };

    let i = match extrap {
        Extrap::OutsideLow => 0,
        Extrap::OutsideHigh => n.saturating_sub(2),
        // NaN lands here with a partition point of 0
        Extrap::Inside => grid.partition_point(|v| v < &loc).saturating_sub(1),
    }
    .min(n.saturating_sub(2));
    let j = (i + 1).min(last);

    GridSample {
        x0: grid[i],
        y0: vals[i],
        x1: grid[j],
        y1: vals[j],
        extrap,
    }
}
