pub mod reply;
pub mod rules;

pub use reply::Reply;
pub use rules::ResponseSelector;
