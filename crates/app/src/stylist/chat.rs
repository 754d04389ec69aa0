//! Stylist chat session.

use std::sync::atomic::{AtomicUsize, Ordering};

use carrystation::i18n::Language;
use jiff::Timestamp;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

use super::Stylist;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The shopper
    User,

    /// The AI stylist
    Stylist,
}

/// A message in the chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// Author
    pub role: ChatRole,

    /// Message text
    pub text: String,

    /// When the message was recorded
    pub sent_at: Timestamp,
}

impl ChatMessage {
    fn now(role: ChatRole, text: String) -> Self {
        Self {
            role,
            text,
            sent_at: Timestamp::now(),
        }
    }
}

/// Whether a reply is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatStatus {
    /// Nothing in flight
    Idle,

    /// At least one request awaiting a reply
    Sending,
}

/// Chat log in front of the stylist.
///
/// Several questions may be in flight at once. Replies are appended in the
/// order they complete, not the order they were asked.
#[derive(Debug)]
pub struct StylistChat {
    stylist: Stylist,
    messages: Mutex<Vec<ChatMessage>>,
    in_flight: AtomicUsize,
}

impl StylistChat {
    /// Start an empty chat.
    pub fn new(stylist: Stylist) -> Self {
        Self {
            stylist,
            messages: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Start a chat that opens with a stylist greeting.
    pub fn with_greeting(stylist: Stylist, greeting: &str) -> Self {
        Self {
            stylist,
            messages: Mutex::new(vec![ChatMessage::now(
                ChatRole::Stylist,
                greeting.to_string(),
            )]),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Ask the stylist a question and record both sides of the exchange.
    ///
    /// Blank queries are ignored and return `None`.
    pub async fn ask(&self, query: &str, language: Language) -> Option<ChatMessage> {
        let query = query.trim();

        if query.is_empty() {
            debug!("ignoring blank stylist query");
            return None;
        }

        self.messages
            .lock()
            .await
            .push(ChatMessage::now(ChatRole::User, query.to_string()));

        let reply = {
            let _sending = InFlight::start(&self.in_flight);

            self.stylist.request_advice(query, language).await
        };

        let reply = ChatMessage::now(ChatRole::Stylist, reply);

        self.messages.lock().await.push(reply.clone());

        Some(reply)
    }

    /// Current status.
    pub fn status(&self) -> ChatStatus {
        if self.in_flight.load(Ordering::Acquire) == 0 {
            ChatStatus::Idle
        } else {
            ChatStatus::Sending
        }
    }

    /// Snapshot of the chat log.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().await.clone()
    }
}

/// Counts a request as in flight until dropped, including on cancellation.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use crate::stylist::{AdviceGateway, MockAdviceGateway, StylistError, prompts};

    use super::*;

    fn chat_with(gateway: impl AdviceGateway + 'static) -> StylistChat {
        StylistChat::new(Stylist::new(Arc::new(gateway)))
    }

    /// Answers after a delay taken from the query, e.g. `"slow:50"`.
    struct DelayedGateway;

    #[async_trait]
    impl AdviceGateway for DelayedGateway {
        async fn generate(&self, _: &str, query: &str) -> Result<String, StylistError> {
            let millis = query
                .rsplit_once(':')
                .and_then(|(_, millis)| millis.parse().ok())
                .unwrap_or(0);

            tokio::time::sleep(Duration::from_millis(millis)).await;

            Ok(format!("reply to {query}"))
        }
    }

    /// Holds every request until released.
    struct GatedGateway(Arc<Notify>);

    #[async_trait]
    impl AdviceGateway for GatedGateway {
        async fn generate(&self, _: &str, _: &str) -> Result<String, StylistError> {
            self.0.notified().await;

            Ok("Go for a hobo bag.".to_string())
        }
    }

    #[tokio::test]
    async fn blank_queries_are_ignored() {
        let mut gateway = MockAdviceGateway::new();
        gateway.expect_generate().never();
        let chat = chat_with(gateway);

        assert!(chat.ask("   ", Language::En).await.is_none());
        assert!(chat.messages().await.is_empty());
    }

    #[tokio::test]
    async fn records_question_then_reply() {
        let mut gateway = MockAdviceGateway::new();
        gateway
            .expect_generate()
            .once()
            .returning(|_, _| Ok("A woven tote.".to_string()));
        let chat = chat_with(gateway);

        let reply = chat.ask("  Beach day ", Language::En).await;
        let messages = chat.messages().await;
        let log: Vec<(ChatRole, &str)> = messages
            .iter()
            .map(|message| (message.role, message.text.as_str()))
            .collect();

        assert_eq!(reply.map(|message| message.text), Some("A woven tote.".to_string()));
        assert_eq!(
            log,
            [(ChatRole::User, "Beach day"), (ChatRole::Stylist, "A woven tote.")]
        );
        assert_eq!(chat.status(), ChatStatus::Idle);
    }

    #[tokio::test]
    async fn failures_are_recorded_as_fallback_replies() {
        let mut gateway = MockAdviceGateway::new();
        gateway
            .expect_generate()
            .once()
            .returning(|_, _| Err(StylistError::MissingApiKey));
        let chat = chat_with(gateway);

        let reply = chat.ask("Dinner", Language::Ar).await;

        assert_eq!(
            reply.map(|message| message.text),
            Some(prompts::stylist_busy(Language::Ar).to_string())
        );
        assert_eq!(chat.status(), ChatStatus::Idle);
    }

    #[tokio::test]
    async fn replies_are_appended_in_completion_order() {
        let chat = chat_with(DelayedGateway);

        tokio::join!(
            chat.ask("slow:150", Language::En),
            chat.ask("fast:10", Language::En)
        );

        let texts: Vec<String> = chat
            .messages()
            .await
            .into_iter()
            .map(|message| message.text)
            .collect();

        assert_eq!(
            texts,
            ["slow:150", "fast:10", "reply to fast:10", "reply to slow:150"]
        );
    }

    #[tokio::test]
    async fn status_is_sending_while_a_request_is_pending() {
        let gate = Arc::new(Notify::new());
        let chat = chat_with(GatedGateway(Arc::clone(&gate)));

        assert_eq!(chat.status(), ChatStatus::Idle);

        let ask = chat.ask("Festival", Language::En);
        let observe = async {
            tokio::task::yield_now().await;
            let during = chat.status();
            gate.notify_one();
            during
        };

        let (reply, during) = tokio::join!(ask, observe);

        assert_eq!(during, ChatStatus::Sending);
        assert!(reply.is_some());
        assert_eq!(chat.status(), ChatStatus::Idle);
    }

    #[tokio::test]
    async fn greeting_opens_the_log() {
        let chat = StylistChat::with_greeting(
            Stylist::new(Arc::new(MockAdviceGateway::new())),
            "Hello! How can I help?",
        );

        let messages = chat.messages().await;

        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages.first().map(|message| message.role),
            Some(ChatRole::Stylist)
        );
    }
}
