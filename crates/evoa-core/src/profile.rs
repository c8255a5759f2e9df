//! Mock startup profile for the profile page.

use serde::{Deserialize, Serialize};

use crate::feed::{mock_feed, FeedRole};
use crate::pitch::PitchRecord;

/// Read-only profile of a startup account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartupProfile {
    pub name: String,
    pub handle: String,
    /// `None` renders the bundled placeholder avatar
    pub avatar: Option<String>,
    pub tagline: String,
    pub location: String,
    pub founded: u16,
    pub about: String,
    pub followers: u64,
    pub following: u64,
    pub pitches: Vec<PitchRecord>,
}

impl StartupProfile {
    pub fn pitch_count(&self) -> usize {
        self.pitches.len()
    }

    /// Sum of views over every pitch.
    pub fn total_views(&self) -> u64 {
        self.pitches.iter().map(|p| p.metrics.views).sum()
    }
}

/// The signed-in account's profile.
pub fn mock_profile() -> StartupProfile {
    StartupProfile {
        name: "GreenGrid Energy".to_string(),
        handle: "@greengrid".to_string(),
        avatar: None,
        tagline: "Community solar for apartment blocks".to_string(),
        location: "Bengaluru, India".to_string(),
        founded: 2023,
        about: "GreenGrid installs and operates shared rooftop solar for apartment \
                buildings. Residents subscribe to a share of the array and pay less than \
                their grid tariff from the first month."
            .to_string(),
        followers: 4_820,
        following: 312,
        pitches: mock_feed(FeedRole::Incubator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_totals() {
        let profile = mock_profile();
        assert_eq!(profile.pitch_count(), mock_feed(FeedRole::Incubator).len());
        let expected: u64 = profile.pitches.iter().map(|p| p.metrics.views).sum();
        assert_eq!(profile.total_views(), expected);
        assert!(profile.avatar.is_none());
    }
}
