//! Linear interpolation with clamped (hold-last) extrapolation.

use num_traits::Float;

use super::{sample, Extrap, Grid1D, GridSample, Interp1D};

/// Linear interpolation with hold-last extrapolation;
/// holds the leftmost value at or below the first breakpoint, and the
/// rightmost value at or above the last breakpoint.
#[derive(Clone, Copy, Debug)]
pub struct LinearHold1D<G> {
    grid: G,
}

impl<G> LinearHold1D<G> {
    pub fn new(grid: G) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }
}

impl<T, G> Interp1D<T> for LinearHold1D<G>
where
    T: Float,
    G: Grid1D<T>,
{
    #[inline]
    fn eval_one(&self, loc: T) -> Result<T, &'static str> {
        Ok(hold(self.grid.at(loc)?, loc))
    }
}

/// Interpolate `x` against breakpoints `bp` and values `v` without
/// constructing a grid.
///
/// `bp` must be non-decreasing and the same length as `v`; neither is
/// checked. Panics if `bp` is empty.
#[inline]
pub fn interp<T: Float>(x: T, bp: &[T], v: &[T]) -> T {
    hold(sample(bp, v, x), x)
}

#[inline]
fn hold<T: Float>(s: GridSample<T>, loc: T) -> T {
    let GridSample {
        x0,
        y0,
        x1,
        y1,
        extrap,
    } = s;

    match extrap {
        Extrap::Inside => blend(loc, x0, y0, x1, y1),
        Extrap::OutsideLow => y0,
        Extrap::OutsideHigh => y1,
    }
}

/// Zero-width cells take the left value.
#[inline]
fn blend<T: Float>(loc: T, x0: T, y0: T, x1: T, y1: T) -> T {
    let dx = x1 - x0;
    if dx == T::zero() {
        return y0;
    }

    y0 + (loc - x0) * (y1 - y0) / dx
}
