pub mod app;
pub mod chat;
pub mod chat_bubble;

pub use app::AssistantApp;
