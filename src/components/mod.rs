//! UI Components for EVO-A.

mod assistant_dialog;
mod feed_view;
mod icons;
mod nav_bar;
mod pitch_card;
pub mod popups;
mod shell;
mod status_strip;

pub use assistant_dialog::AssistantDialog;
pub use feed_view::FeedView;
pub use icons::{Icon, IconKind};
pub use nav_bar::NavBar;
pub use pitch_card::PitchCard;
pub use shell::Shell;
pub use status_strip::StatusStrip;
