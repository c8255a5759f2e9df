//! Which pitch a feed popup is open for.
//!
//! Popups own their typed text (comment draft, contact query, message). The
//! feed mounts a popup only while its target is set and keys it by
//! [`PopupTarget::mount_key`], so every opening starts from empty fields and
//! closing drops whatever was typed.

/// Open/closed state of one feed popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupTarget {
    pitch_id: Option<String>,
    openings: u64,
}

impl PopupTarget {
    /// Open for `pitch_id`. Reopening counts as a new opening.
    pub fn open(&mut self, pitch_id: impl Into<String>) {
        self.pitch_id = Some(pitch_id.into());
        self.openings += 1;
    }

    pub fn close(&mut self) {
        self.pitch_id = None;
    }

    pub fn is_open(&self) -> bool {
        self.pitch_id.is_some()
    }

    pub fn pitch_id(&self) -> Option<&str> {
        self.pitch_id.as_deref()
    }

    /// Key for the mounted popup, unique per opening. `None` while closed.
    pub fn mount_key(&self) -> Option<String> {
        self.pitch_id
            .as_ref()
            .map(|id| format!("{}#{}", id, self.openings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_by_default() {
        let target = PopupTarget::default();
        assert!(!target.is_open());
        assert_eq!(target.mount_key(), None);
    }

    #[test]
    fn test_close_unmounts() {
        let mut target = PopupTarget::default();
        target.open("inv-1");
        assert_eq!(target.pitch_id(), Some("inv-1"));

        target.close();
        assert_eq!(target.pitch_id(), None);
        assert_eq!(target.mount_key(), None);
    }

    #[test]
    fn test_each_opening_gets_a_fresh_key() {
        let mut target = PopupTarget::default();

        target.open("inv-1");
        let first = target.mount_key();
        target.close();

        target.open("inv-2");
        let second = target.mount_key();
        target.close();

        target.open("inv-1");
        let third = target.mount_key();

        assert!(first.is_some() && second.is_some() && third.is_some());
        assert_ne!(first, second);
        assert_ne!(first, third);
    }

    #[test]
    fn test_switching_pitch_while_open_remounts() {
        let mut target = PopupTarget::default();
        target.open("inc-1");
        let before = target.mount_key();
        target.open("inc-2");
        assert_ne!(before, target.mount_key());
        assert_eq!(target.pitch_id(), Some("inc-2"));
    }
}
