//! Prompt engine - main orchestrator for the craft module.
//!
//! Wires classification, tool ranking, and prompt rendering into one call.
//! The catalog is injected at construction and stays immutable for the life
//! of the engine; there are no module-level singletons.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::remote::PromptGenerator;

use super::catalog::{default_catalog, ToolProfile};
use super::intent::{Intent, IntentClassifier};
use super::ranker::{RankingResult, ToolRanker};
use super::templates::PromptTemplates;

/// Complete output of one crafting pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftedPrompt {
    /// Unique id for this pass.
    pub id: Uuid,
    /// Original task description.
    pub input: String,
    /// Classified intent.
    pub intent: Intent,
    /// Tool recommendation ranking.
    pub ranking: RankingResult,
    /// Final rendered prompt.
    pub prompt: String,
    /// True when the prompt came from the remote endpoint rather than the
    /// local templates.
    pub remote_generated: bool,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
    /// Timestamp of the pass.
    pub timestamp: DateTime<Utc>,
}

impl CraftedPrompt {
    /// One-line summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "Task: {}, Top tool: {}, Remote: {}, Constraints: {}",
            self.intent.task_type,
            self.ranking
                .top()
                .map(|t| t.tool_id.as_str())
                .unwrap_or("none"),
            if self.remote_generated { "yes" } else { "no" },
            self.intent.constraints.len()
        )
    }
}

/// Main engine that orchestrates classification, ranking, and rendering.
pub struct PromptEngine {
    classifier: IntentClassifier,
    ranker: ToolRanker,
    templates: PromptTemplates,
    catalog: Vec<ToolProfile>,
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

impl PromptEngine {
    /// Create an engine over the given tool catalog. The catalog is read-only
    /// from here on.
    pub fn new(catalog: Vec<ToolProfile>) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            ranker: ToolRanker::new(),
            templates: PromptTemplates::new(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &[ToolProfile] {
        &self.catalog
    }

    /// Classify, rank, and render locally. Synchronous and infallible.
    pub fn craft(&self, text: &str) -> CraftedPrompt {
        let start = Instant::now();

        let intent = self.classifier.classify(text);
        let ranking = self.ranker.rank(&intent, &self.catalog);
        let prompt = self.templates.render(&intent, text);

        let crafted = CraftedPrompt {
            id: Uuid::new_v4(),
            input: text.to_string(),
            intent,
            ranking,
            prompt,
            remote_generated: false,
            processing_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };

        info!("{}", crafted.summary());
        crafted
    }

    /// Like [`craft`](Self::craft), but asks the remote generator for the
    /// prompt text first. Any remote failure falls back to the local
    /// template rendering; the call itself never fails.
    pub async fn craft_with_remote(
        &self,
        text: &str,
        generator: &dyn PromptGenerator,
    ) -> CraftedPrompt {
        let mut crafted = self.craft(text);

        match generator.generate(text).await {
            Ok(prompt) => {
                crafted.prompt = prompt;
                crafted.remote_generated = true;
            }
            Err(err) => {
                warn!(error = %err, "remote generation failed, keeping local prompt");
            }
        }

        crafted
    }
}
