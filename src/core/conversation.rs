use crate::ai::Reply;
use crate::services::catalog::Product;
use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Одно сообщение переписки. После создания не меняется
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    pub suggestions: Vec<String>,
    pub products: Vec<&'static Product>,
}

impl Message {
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Часы могут уйти назад, время в журнале не убывает
fn next_timestamp(prev: Option<&Message>, now: DateTime<Local>) -> DateTime<Local> {
    match prev {
        Some(prev) if prev.timestamp > now => prev.timestamp,
        _ => now,
    }
}

/// Переписка текущей сессии: сообщения только добавляются в конец
#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn push_user(&mut self, text: &str) -> &Message {
        self.push(Sender::User, text.to_string(), Vec::new(), Vec::new())
    }

    pub fn push_reply(&mut self, reply: Reply) -> &Message {
        self.push(Sender::Assistant, reply.text, reply.suggestions, reply.products)
    }

    fn push(
        &mut self,
        sender: Sender,
        text: String,
        suggestions: Vec<String>,
        products: Vec<&'static Product>,
    ) -> &Message {
        self.push_at(Local::now(), sender, text, suggestions, products)
    }

    fn push_at(
        &mut self,
        now: DateTime<Local>,
        sender: Sender,
        text: String,
        suggestions: Vec<String>,
        products: Vec<&'static Product>,
    ) -> &Message {
        let timestamp = next_timestamp(self.messages.last(), now);

        self.messages.push(Message {
            id: Uuid::now_v7(),
            text,
            sender,
            timestamp,
            suggestions,
            products,
        });

        &self.messages[self.messages.len() - 1]
    }

    pub fn count_by(&self, sender: Sender) -> usize {
        self.messages.iter().filter(|m| m.sender == sender).count()
    }

    pub fn transcript_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ResponseSelector;
    use std::collections::HashSet;

    #[test]
    fn keeps_append_order() {
        let selector = ResponseSelector::default();
        let mut conversation = Conversation::new();

        conversation.push_user("hi");
        conversation.push_reply(selector.select("hi"));
        conversation.push_user("Browse necklaces");
        conversation.push_reply(selector.select("Browse necklaces"));

        let senders: Vec<_> = conversation.messages().iter().map(|m| m.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::Assistant, Sender::User, Sender::Assistant]
        );
        assert_eq!(conversation.messages()[2].text, "Browse necklaces");
        assert_eq!(conversation.count_by(Sender::Assistant), 2);
    }

    #[test]
    fn timestamps_never_decrease_and_ids_are_unique() {
        let mut conversation = Conversation::new();
        for i in 0..50 {
            conversation.push_user(&format!("message {i}"));
        }

        let messages = conversation.messages();
        assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        let ids: HashSet<_> = messages.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), messages.len());
    }

    #[test]
    fn clock_going_backwards_reuses_previous_timestamp() {
        let mut conversation = Conversation::new();
        let start = Local::now();
        let earlier = start - chrono::Duration::seconds(90);

        conversation.push_at(start, Sender::User, "hi".to_string(), Vec::new(), Vec::new());
        let message = conversation.push_at(
            earlier,
            Sender::Assistant,
            "hello".to_string(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(message.timestamp, start);

        let later = start + chrono::Duration::seconds(5);
        let message =
            conversation.push_at(later, Sender::User, "ok".to_string(), Vec::new(), Vec::new());
        assert_eq!(message.timestamp, later);
    }

    #[test]
    fn first_message_takes_current_time() {
        let now = Local::now();
        assert_eq!(next_timestamp(None, now), now);
    }

    #[test]
    fn assistant_message_carries_reply_payload() {
        let selector = ResponseSelector::default();
        let reply = selector.select("Show me engagement rings");
        let expected = reply.clone();

        let mut conversation = Conversation::new();
        let message = conversation.push_reply(reply);

        assert!(!message.is_user());
        assert_eq!(message.text, expected.text);
        assert_eq!(message.suggestions, expected.suggestions);
        assert_eq!(message.products, expected.products);
    }

    #[test]
    fn user_text_is_kept_as_typed() {
        let mut conversation = Conversation::new();
        let message = conversation.push_user("  Hello ");
        assert!(message.is_user());
        assert_eq!(message.text, "  Hello ");
        assert!(message.suggestions.is_empty());
    }

    #[test]
    fn transcript_serializes_senders_lowercase() {
        let mut conversation = Conversation::new();
        conversation.push_user("thank you");

        let json = conversation.transcript_json().unwrap();
        assert!(json.contains("\"sender\": \"user\""));
        assert!(json.contains("\"text\": \"thank you\""));
    }
}
