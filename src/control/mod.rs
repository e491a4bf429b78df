//! Control policy.

pub mod chiller;
