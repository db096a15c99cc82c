//! Rank correlation between data clump counts and bug-introducing changes.
//!
//! Groups the flat release table by project, sums the three clump kinds per
//! row, and correlates the total with the BIC count using Spearman's rho.
//! Degenerate input (too few rows, a constant variable) is reported through
//! [`spearman::Correlation`] rather than as an error.

pub mod analyzer;
pub mod distribution;
pub mod rank;
pub mod report;
pub mod spearman;
