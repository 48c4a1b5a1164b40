//! Binomial quantiles
//!
//! Discrete inverse-CDF helpers for the binomial distribution. The survey
//! intervals are built from these boundary counts rather than from the
//! continuous Clopper–Pearson integral, so the returned values are always
//! whole numbers of successes.
//!
//! # Examples
//!
//! ```
//! use hygiene_stats::binomial::{central_interval, quantile};
//!
//! // Median number of heads in 10 fair coin flips
//! assert_eq!(quantile(0.5, 10, 0.5), Some(5));
//!
//! // 95% central interval of the same distribution
//! assert_eq!(central_interval(0.95, 10, 0.5), Some((2, 8)));
//! ```

use statrs::distribution::{Binomial, DiscreteCDF};

/// Returns the smallest number of successes `k` in `0..=trials` such that
/// `P(X <= k) >= q` for `X ~ Binomial(trials, p)`.
///
/// Returns `None` if `p` is outside `[0, 1]` or `q` is outside `[0, 1]`.
#[must_use]
pub fn quantile(q: f64, trials: u64, p: f64) -> Option<u64> {
    if !(0.0..=1.0).contains(&q) {
        return None;
    }
    let dist = Binomial::new(p, trials).ok()?;

    // CDF is non-decreasing in k, so binary search for the first k reaching q.
    let mut low = 0;
    let mut high = trials;
    while low < high {
        let mid = low + (high - low) / 2;
        if dist.cdf(mid) >= q {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    Some(low)
}

/// Returns the `(lower, upper)` success counts enclosing the central
/// `confidence` mass of `Binomial(trials, p)`.
///
/// The bounds are the quantiles at `(1 - confidence) / 2` and
/// `(1 + confidence) / 2`.
#[must_use]
pub fn central_interval(confidence: f64, trials: u64, p: f64) -> Option<(u64, u64)> {
    if !(0.0..=1.0).contains(&confidence) {
        return None;
    }
    let lower = quantile((1.0 - confidence) / 2.0, trials, p)?;
    let upper = quantile((1.0 + confidence) / 2.0, trials, p)?;
    Some((lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(quantile(0.5, 10, 1.5), None);
        assert_eq!(quantile(-0.1, 10, 0.5), None);
        assert_eq!(central_interval(1.2, 10, 0.5), None);
    }

    #[test]
    fn test_certain_success() {
        assert_eq!(central_interval(0.95, 12, 1.0), Some((12, 12)));
    }

    #[test]
    fn test_certain_failure() {
        assert_eq!(central_interval(0.95, 12, 0.0), Some((0, 0)));
    }

    #[test]
    fn test_extreme_quantiles() {
        assert_eq!(quantile(0.0, 20, 0.3), Some(0));
        assert_eq!(quantile(1.0, 20, 1.0), Some(20));
    }

    #[test]
    fn test_interval_brackets_mean() {
        for trials in 1..=40_u64 {
            for successes in 0..=trials {
                #[expect(clippy::cast_precision_loss)]
                let p = successes as f64 / trials as f64;
                let (lower, upper) = central_interval(0.95, trials, p).unwrap();
                assert!(lower <= successes, "lower {lower} > {successes}/{trials}");
                assert!(upper >= successes, "upper {upper} < {successes}/{trials}");
                assert!(upper <= trials);
            }
        }
    }
}
