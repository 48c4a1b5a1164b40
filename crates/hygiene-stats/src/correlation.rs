//! Pearson correlation
//!
//! Correlations are computed over pairwise-complete observations: an index
//! contributes only when both series have a value there.
//!
//! # Examples
//!
//! ```
//! use hygiene_stats::correlation::{pairwise_pearson, pearson};
//!
//! let r = pearson([(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//!
//! let x = [Some(1.0), Some(0.0), None, Some(1.0)];
//! let y = [Some(1.0), Some(0.0), Some(1.0), None];
//! let r = pairwise_pearson(&x, &y).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//! ```

/// Pearson correlation coefficient of the given `(x, y)` pairs.
///
/// Returns `None` when fewer than two pairs are given or when either series
/// is constant.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let pairs = pairs.into_iter().collect::<Vec<_>>();
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (sxy, sxx, syy) = pairs.iter().fold((0.0, 0.0, 0.0), |(sxy, sxx, syy), (x, y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (sxy + dx * dy, sxx + dx * dx, syy + dy * dy)
    });
    if sxx <= 0.0 || syy <= 0.0 {
        return None;
    }
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Pearson correlation of two aligned series with missing values.
///
/// # Panics
///
/// Panics if the series have different lengths.
#[must_use]
pub fn pairwise_pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    assert_eq!(xs.len(), ys.len(), "series must have the same length");
    pearson(
        xs.iter()
            .zip(ys)
            .filter_map(|(x, y)| Some(((*x)?, (*y)?))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_negative() {
        let r = pearson([(0.0, 1.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_series() {
        assert_eq!(pearson([(1.0, 0.0), (1.0, 1.0)]), None);
    }

    #[test]
    fn test_too_few_pairs() {
        assert_eq!(pearson([(1.0, 0.0)]), None);
        assert_eq!(pairwise_pearson(&[Some(1.0), None], &[None, Some(1.0)]), None);
    }

    #[test]
    fn test_known_value() {
        // x = [1, 2, 3, 4], y = [1, 3, 2, 4]: r = 0.8
        let r = pearson([(1.0, 1.0), (2.0, 3.0), (3.0, 2.0), (4.0, 4.0)]).unwrap();
        assert!((r - 0.8).abs() < 1e-12);
    }
}
