//! Statistical utilities for the hygiene survey tools.
//!
//! This crate provides the domain-free statistics used by the survey engine:
//!
//! - **Descriptive statistics**: count, mean, median, sample variance and standard deviation
//! - **Percentiles**: linearly interpolated percentile values for a dataset
//! - **Numeric summary**: the flat mean/median/std/quartile summary of a numeric column
//! - **Binomial quantiles**: discrete inverse-CDF bounds of a binomial distribution
//! - **Proportions**: category proportions with exact binomial confidence intervals
//! - **Frequency tables**: insertion-ordered category counts
//! - **Correlation**: Pearson correlation over pairwise-complete observations
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation and storage
//! - [`summary`]: Numeric summary combining descriptive statistics and quartiles
//! - [`binomial`]: Binomial quantile function and central intervals
//! - [`proportion`]: Proportion estimates with confidence intervals
//! - [`frequency`]: Frequency tables keyed by category
//! - [`correlation`]: Pearson correlation coefficients
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use hygiene_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use hygiene_stats::percentiles::Percentiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
//! assert_eq!(percentiles.get(50.0), Some(2.5));
//! ```
//!
//! ## Estimating a proportion
//!
//! ```
//! use hygiene_stats::proportion::ProportionEstimate;
//!
//! let estimate = ProportionEstimate::new(7, 20).unwrap();
//! assert_eq!(estimate.proportion, 0.35);
//! assert!(estimate.confidence_interval.lower <= 0.35);
//! assert!(estimate.confidence_interval.upper >= 0.35);
//! ```
//!
//! ## Counting categories
//!
//! ```
//! use hygiene_stats::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::from_values(["b", "a", "b"]);
//! assert_eq!(table.get(&"b"), 2);
//! assert_eq!(table.total(), 3);
//! ```

pub mod binomial;
pub mod correlation;
pub mod descriptive;
pub mod frequency;
pub mod percentiles;
pub mod proportion;
pub mod summary;
