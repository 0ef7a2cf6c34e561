//! Convenience methods for building speed sweeps and other evenly
//! spaced observation points.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// `n == 1` gives `[start]` and `n == 0` gives an empty vec.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return (0..n).map(|_| start).collect();
    }

    let steps = T::from(n - 1).unwrap_or_else(T::nan);
    let dx: T = (stop - start) / steps;
    (0..n)
        .map(|i| start + T::from(i).unwrap_or_else(T::nan) * dx)
        .collect()
}

#[cfg(test)]
mod test {
    use super::linspace;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0_f64, 40.0, 5), vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        assert_eq!(linspace(3.0_f64, 9.0, 1), vec![3.0]);
        assert!(linspace(3.0_f64, 9.0, 0).is_empty());

        let v = linspace(-5.0_f64, 50.0, 5501);
        assert_eq!(v.len(), 5501);
        assert_eq!(v[0], -5.0);
        assert!((v[5500] - 50.0).abs() < 1e-12);
        assert!(v.windows(2).all(|w| w[0] < w[1]));
    }
}
