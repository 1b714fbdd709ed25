//! Page components for SureCover.

mod home;

pub use home::Home;
