//! Reusable UI components.

mod button;
mod input;
mod toast;

pub use button::*;
pub use input::*;
pub use toast::*;
