//! Prompt composition and the in-memory conversation session.

pub mod composer;
pub mod prompts;
pub mod session;

pub use composer::{ComposedPrompt, PromptComposer};
pub use session::{Conversation, Turn};
