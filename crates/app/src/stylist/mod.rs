//! AI Stylist
//!
//! Free-text outfit questions are forwarded to a text-generation backend with
//! a fixed stylist persona. Callers always get a reply: backend failures are
//! replaced with a localized fallback message.

mod advisor;
mod chat;
mod gateway;
mod gemini;
pub mod prompts;

pub use advisor::Stylist;
pub use chat::{ChatMessage, ChatRole, ChatStatus, StylistChat};
pub use gateway::{AdviceGateway, MockAdviceGateway, StylistError};
pub use gemini::{GeminiClient, GeminiConfig};
