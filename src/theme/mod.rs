//! Theme for SureCover.

mod styles;

pub use styles::GLOBAL_STYLES;
