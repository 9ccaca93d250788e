//! # Craft Module
//!
//! Pure, stateless prompt-crafting core: classifies a free-text task
//! description into a structured intent, ranks a fixed catalog of external
//! AI tools against it, and renders a usable prompt.
//!
//! ## Components
//! - `intent`: Intent classification using ordered regex pattern tables
//! - `catalog`: Read-only tool profile catalog
//! - `ranker`: Weighted tool ranking with low-confidence fallback
//! - `templates`: Local prompt rendering
//! - `engine`: Main orchestrator

pub mod catalog;
pub mod engine;
pub mod intent;
pub mod ranker;
pub mod templates;

pub use catalog::{default_catalog, ToolProfile};
pub use engine::{CraftedPrompt, PromptEngine};
pub use intent::{
    Audience, Depth, Emotion, Formality, Intent, IntentClassifier, OutputFormat, TaskType, Tone,
    Urgency,
};
pub use ranker::{RankedTool, RankingResult, ToolRanker};
pub use templates::PromptTemplates;
