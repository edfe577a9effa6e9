//! Wire types for the public API and the upstream chat-completions protocol.

mod chat;
mod section;

pub use chat::*;
pub use section::*;
