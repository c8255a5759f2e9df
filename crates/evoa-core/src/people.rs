//! Mock people shown in the popups, and the contact search filter.

use serde::{Deserialize, Serialize};

/// Someone a pitch can be sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

/// An accepted or pending connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub mutual: u32,
}

/// A comment under a pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub text: String,
    /// Relative age as displayed, e.g. "2h"
    pub posted: String,
}

fn avatar(n: u32) -> String {
    format!("https://i.pravatar.cc/150?img={n}")
}

/// Contacts listed in the message sender.
pub fn mock_contacts() -> Vec<Contact> {
    [
        ("c-1", "Aisha Raman", "Partner, Northlight Ventures", 8),
        ("c-2", "Marco Bellini", "Angel investor", 12),
        ("c-3", "Priya Nair", "Founder, MedNova", 47),
        ("c-4", "Jonas Weber", "Principal, Kraftwerk Capital", 15),
        ("c-5", "Lena Okafor", "Founder, Solace Labs", 14),
        ("c-6", "Tomás Ortega", "Scout, Horizon Fund", 59),
    ]
    .into_iter()
    .map(|(id, name, role, img)| Contact {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar(img),
    })
    .collect()
}

/// Accepted connections.
pub fn mock_connections() -> Vec<Connection> {
    [
        ("n-1", "Aisha Raman", "Partner, Northlight Ventures", 8, 14),
        ("n-2", "Daniel Kim", "CTO, Quantia", 53, 6),
        ("n-3", "Sofia Marin", "Founder, Tidal Threads", 19, 3),
        ("n-4", "Ravi Menon", "Operator in residence", 60, 9),
    ]
    .into_iter()
    .map(connection)
    .collect()
}

/// Incoming connection requests.
pub fn mock_connection_requests() -> Vec<Connection> {
    [
        ("r-1", "Hannah Schulz", "Analyst, Alpine Partners", 25, 2),
        ("r-2", "Kwame Mensah", "Founder, FarmFlow", 21, 5),
    ]
    .into_iter()
    .map(connection)
    .collect()
}

fn connection((id, name, role, img, mutual): (&str, &str, &str, u32, u32)) -> Connection {
    Connection {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar(img),
        mutual,
    }
}

/// Comments shown in the comment popup.
pub fn mock_comments() -> Vec<Comment> {
    [
        ("m-1", "Aisha Raman", 8, "What does your CAC look like for the enterprise tier?", "2h"),
        ("m-2", "Marco Bellini", 12, "Love the traction. Happy to intro you to a few logistics operators.", "5h"),
        ("m-3", "Jonas Weber", 15, "Is the 10% on a post-money basis?", "1d"),
    ]
    .into_iter()
    .map(|(id, author, img, text, posted)| Comment {
        id: id.to_string(),
        author: author.to_string(),
        avatar: avatar(img),
        text: text.to_string(),
        posted: posted.to_string(),
    })
    .collect()
}

/// Contacts whose name contains `query`, ignoring case.
///
/// An empty query returns every contact in the original order.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    if query.is_empty() {
        return contacts.iter().collect();
    }
    let needle = query.to_lowercase();
    contacts
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_all() {
        let contacts = mock_contacts();
        assert_eq!(filter_contacts(&contacts, "").len(), contacts.len());
    }

    #[test]
    fn test_unique_substring_case_insensitive() {
        let contacts = mock_contacts();
        let found = filter_contacts(&contacts, "BELLI");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Marco Bellini");
    }

    #[test]
    fn test_shared_substring_matches_many() {
        let contacts = mock_contacts();
        let found = filter_contacts(&contacts, "na");
        let names: Vec<_> = found.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Priya Nair", "Jonas Weber", "Lena Okafor"]);
    }

    #[test]
    fn test_no_match() {
        let contacts = mock_contacts();
        assert!(filter_contacts(&contacts, "zzz").is_empty());
    }

    #[test]
    fn test_non_ascii_name() {
        let contacts = mock_contacts();
        let found = filter_contacts(&contacts, "TOMÁS");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "c-6");
    }

    #[test]
    fn test_mock_lists_populated() {
        assert!(!mock_connections().is_empty());
        assert!(!mock_connection_requests().is_empty());
        assert!(!mock_comments().is_empty());
    }
}
