//! PromptSmith core engine.
//!
//! Turns a rough task description into a structured intent, a ranked list of
//! recommended external AI tools, and a ready-to-paste prompt. Prompts come
//! from a remote LLM endpoint when one is configured, with local template
//! rendering as the always-available fallback.

pub mod config;
pub mod craft;
pub mod error;
pub mod models;
pub mod remote;
pub mod telemetry;

pub use craft::{CraftedPrompt, Intent, IntentClassifier, PromptEngine, ToolRanker};
pub use error::AppError;

#[cfg(test)]
mod tests;
