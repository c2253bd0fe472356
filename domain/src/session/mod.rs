//! Conversation domain.
//!
//! - [`entities::Message`]: a single message within a round (system, user, assistant, tool)
//! - [`entities::Conversation`]: ordered history fed back to the model each turn
//! - [`response::LlmResponse`]: what the chat-completion capability returns

pub mod entities;
pub mod response;
