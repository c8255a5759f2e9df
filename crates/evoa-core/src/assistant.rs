//! Investor assistant: canned keyword responder and the chat session.
//!
//! Replies are not computed remotely; they are picked from a fixed table and
//! delivered after [`REPLY_DELAY`] to feel conversational. A pending reply is
//! tied to the dialog session through a [`CancellationToken`], so closing the
//! dialog (or dropping the chat) guarantees it is never appended.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Delay before the assistant's reply appears.
pub const REPLY_DELAY: Duration = Duration::from_secs(1);

/// First message shown when the dialog is opened on an empty conversation.
pub const WELCOME_MESSAGE: &str = "Hi! I'm your EVO-A deal assistant. Ask me about risks, \
valuation, market, team, traction or deal terms for any pitch in your feed.";

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the assistant conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Local wall-clock time, e.g. "14:05".
    pub fn time_label(&self) -> String {
        self.timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Checked in order; the first rule with any matching keyword wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["risk", "risks", "risky"],
        reply: "Risk assessment: the main risks at this stage are execution (can the team ship \
                on its roadmap), market timing, and concentration in a few early customers. \
                Ask the founders for churn by cohort and their top three customer dependencies.",
    },
    Rule {
        keywords: &["valuation", "valuations", "worth"],
        reply: "Valuation guidance: divide the raise by the equity offered to get the implied \
                post-money valuation, then compare it against 10-20x current ARR for early \
                SaaS. Anything well above that needs exceptional growth to justify it.",
    },
    Rule {
        keywords: &["market", "competition", "competitor"],
        reply: "Market analysis: look for a bottom-up TAM (customers x price) rather than a \
                top-down industry figure, and ask which incumbent loses when this startup wins.",
    },
    Rule {
        keywords: &["team", "founder", "founders"],
        reply: "Team evaluation: check founder-market fit, how long the founders have worked \
                together, and whether the key technical skills are in-house or outsourced.",
    },
    Rule {
        keywords: &["revenue", "traction", "growth", "metrics"],
        reply: "Traction analysis: month-over-month revenue growth above 15% is strong at seed. \
                Pair it with retention and click-through from the pitch to judge real demand.",
    },
    Rule {
        keywords: &["deal", "terms", "equity", "invest"],
        reply: "Deal structure: confirm whether the round is priced or a SAFE, the valuation cap, \
                pro-rata rights, and how much of the round is already committed.",
    },
];

/// Pick the canned reply for `input`.
///
/// Matching is case-insensitive substring search. Input that matches no rule
/// gets a generic reply quoting it back.
pub fn reply_for(input: &str) -> String {
    let lowered = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
        .map(|rule| rule.reply.to_string())
        .unwrap_or_else(|| fallback_reply(input))
}

fn fallback_reply(input: &str) -> String {
    format!(
        "You asked: \"{}\". I can help with risk assessment, valuation, market analysis, \
         team evaluation, traction and deal terms. Try asking about one of those.",
        input.trim()
    )
}

/// A reply waiting out its delay.
///
/// Produced by [`AssistantChat::send`]; await [`PendingReply::wait`] and hand
/// the result to [`AssistantChat::deliver`].
#[derive(Debug)]
pub struct PendingReply {
    reply: ChatMessage,
    token: CancellationToken,
}

impl PendingReply {
    /// Wait out the delay. Returns `None` if the session was closed first.
    pub async fn wait(self) -> Option<ChatMessage> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                tracing::debug!("Assistant reply cancelled");
                None
            }
            _ = tokio::time::sleep(REPLY_DELAY) => {
                if self.token.is_cancelled() {
                    None
                } else {
                    Some(self.reply)
                }
            }
        }
    }
}

/// The assistant dialog's conversation state.
#[derive(Debug)]
pub struct AssistantChat {
    open: bool,
    messages: Vec<ChatMessage>,
    session: CancellationToken,
}

impl Default for AssistantChat {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantChat {
    /// A closed dialog with an empty conversation.
    pub fn new() -> Self {
        let session = CancellationToken::new();
        session.cancel();
        Self {
            open: false,
            messages: Vec::new(),
            session,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Open the dialog and start a new reply session.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.session = CancellationToken::new();
        if self.messages.is_empty() {
            self.messages.push(ChatMessage::assistant(WELCOME_MESSAGE));
        }
        tracing::debug!("Assistant dialog opened");
    }

    /// Close the dialog, cancelling every reply still pending.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.session.cancel();
        tracing::debug!("Assistant dialog closed");
    }

    /// Append the user's message now and schedule the assistant's reply.
    ///
    /// Ignores blank input and input sent while the dialog is closed.
    pub fn send(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() || !self.open {
            return None;
        }

        self.messages.push(ChatMessage::user(text));

        Some(PendingReply {
            reply: ChatMessage::assistant(reply_for(text)),
            token: self.session.child_token(),
        })
    }

    /// Append a reply that survived its delay. Returns whether it was added.
    pub fn deliver(&mut self, reply: ChatMessage) -> bool {
        if !self.open {
            return false;
        }
        self.messages.push(reply);
        true
    }
}

impl Drop for AssistantChat {
    fn drop(&mut self) {
        self.session.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_keyword_any_case() {
        for input in ["What are the risks?", "RISK", "is this risky"] {
            assert!(reply_for(input).starts_with("Risk assessment"), "{input}");
        }
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Mentions both valuation and team; risk is not mentioned.
        let reply = reply_for("Is the team worth the valuation?");
        assert!(reply.starts_with("Valuation guidance"));

        let reply = reply_for("team risk");
        assert!(reply.starts_with("Risk assessment"));
    }

    #[test]
    fn test_fallback_echoes_input() {
        let reply = reply_for("  hello there ");
        assert!(reply.contains("\"hello there\""));
    }

    #[test]
    fn test_send_appends_user_message_immediately() {
        let mut chat = AssistantChat::new();
        chat.open();
        assert_eq!(chat.messages().len(), 1);

        let pending = chat.send("market size?");
        assert!(pending.is_some());
        assert_eq!(chat.messages().len(), 2);
        assert!(chat.messages()[1].is_user());
        assert_eq!(chat.messages()[1].text, "market size?");
    }

    #[test]
    fn test_send_ignored_when_blank_or_closed() {
        let mut chat = AssistantChat::new();
        assert!(chat.send("risk").is_none());

        chat.open();
        assert!(chat.send("   ").is_none());
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_welcome_only_once() {
        let mut chat = AssistantChat::new();
        chat.open();
        chat.close();
        chat.open();
        assert_eq!(chat.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let mut chat = AssistantChat::new();
        chat.open();
        let pending = chat.send("Any risk here?").unwrap();

        let started = tokio::time::Instant::now();
        let reply = pending.wait().await.expect("reply delivered");
        assert!(started.elapsed() >= REPLY_DELAY);

        assert!(chat.deliver(reply));
        let last = chat.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Assistant);
        assert!(last.text.starts_with("Risk assessment"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_cancels_pending_reply() {
        let mut chat = AssistantChat::new();
        chat.open();
        let pending = chat.send("valuation?").unwrap();
        let handle = tokio::spawn(pending.wait());

        tokio::time::advance(Duration::from_millis(400)).await;
        chat.close();

        assert!(handle.await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_reply() {
        let mut chat = AssistantChat::new();
        chat.open();
        let pending = chat.send("traction?").unwrap();
        drop(chat);
        assert!(pending.wait().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reopen_does_not_revive_old_reply() {
        let mut chat = AssistantChat::new();
        chat.open();
        let pending = chat.send("team?").unwrap();
        chat.close();
        chat.open();
        assert!(pending.wait().await.is_none());
    }

    #[test]
    fn test_deliver_rejected_when_closed() {
        let mut chat = AssistantChat::new();
        assert!(!chat.deliver(ChatMessage::assistant("late")));
        assert!(chat.messages().is_empty());
    }
}
