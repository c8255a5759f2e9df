//! Page components for EVO-A.

mod feeds;
mod landing;
mod login;
mod not_found;
mod privacy;
mod profile;

pub use feeds::{Incubator, Investor, Viewer};
pub use landing::Landing;
pub use login::Login;
pub use not_found::NotFound;
pub use privacy::Privacy;
pub use profile::Profile;
