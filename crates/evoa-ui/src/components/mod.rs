//! Reusable UI components.

mod avatar;
mod button;
mod input;
mod modal;
mod tabs;

pub use avatar::*;
pub use button::*;
pub use input::*;
pub use modal::*;
pub use tabs::*;
