//! Modal popups opened from feed cards and the profile page.
//!
//! Each popup renders static mock content and a local text field. Nothing
//! typed into them is submitted anywhere.

mod comment_popup;
mod connections_popup;
mod message_sender;

pub use comment_popup::CommentPopup;
pub use connections_popup::ConnectionsPopup;
pub use message_sender::MessageSender;
