pub mod assistant;
pub mod conversation;
pub mod session;

pub use conversation::{Message, Sender};
pub use session::ChatSession;
