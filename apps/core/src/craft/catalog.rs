//! Static catalog of external AI tool profiles.
//!
//! Profiles are read-only after construction: all per-ranking state (scores,
//! match reasons) lives in the ranking result, never on the catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Static descriptor of an external AI tool used for recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolProfile {
    /// Stable identifier, also used by the ranker's hard-coded rules.
    pub id: String,
    /// Name shown to the user.
    pub display_name: String,
    /// Task-type tags the tool excels at.
    pub strengths: HashSet<String>,
    /// Task-type tags that trigger the weakness penalty.
    pub weaknesses: HashSet<String>,
    pub tone_affinity: HashSet<String>,
    pub format_affinity: HashSet<String>,
    pub depth_affinity: HashSet<String>,
    pub audience_affinity: HashSet<String>,
}

impl ToolProfile {
    /// Builder-style constructor used by the default catalog and tests.
    pub fn new(id: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            strengths: HashSet::new(),
            weaknesses: HashSet::new(),
            tone_affinity: HashSet::new(),
            format_affinity: HashSet::new(),
            depth_affinity: HashSet::new(),
            audience_affinity: HashSet::new(),
        }
    }

    pub fn strengths(mut self, tags: &[&str]) -> Self {
        self.strengths = to_set(tags);
        self
    }

    pub fn weaknesses(mut self, tags: &[&str]) -> Self {
        self.weaknesses = to_set(tags);
        self
    }

    pub fn tones(mut self, tags: &[&str]) -> Self {
        self.tone_affinity = to_set(tags);
        self
    }

    pub fn formats(mut self, tags: &[&str]) -> Self {
        self.format_affinity = to_set(tags);
        self
    }

    pub fn depths(mut self, tags: &[&str]) -> Self {
        self.depth_affinity = to_set(tags);
        self
    }

    pub fn audiences(mut self, tags: &[&str]) -> Self {
        self.audience_affinity = to_set(tags);
        self
    }
}

fn to_set(tags: &[&str]) -> HashSet<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// Builds the fixed tool catalog. Catalog order is the fixed default ranking
/// order the low-confidence guard falls back to.
pub fn default_catalog() -> Vec<ToolProfile> {
    vec![
        ToolProfile::new("chatgpt", "ChatGPT")
            .strengths(&["general", "writing", "email", "business"])
            .weaknesses(&["image_generation"])
            .tones(&["friendly", "professional", "persuasive"])
            .formats(&["email", "paragraph", "bullet_points"])
            .depths(&["detailed", "normal"])
            .audiences(&["general", "beginners"]),
        ToolProfile::new("claude", "Claude")
            .strengths(&["writing", "analysis", "code", "education"])
            .weaknesses(&["image_generation"])
            .tones(&["professional", "authoritative"])
            .formats(&["structured", "paragraph", "code"])
            .depths(&["detailed", "step_by_step"])
            .audiences(&["technical", "experts"]),
        ToolProfile::new("gemini", "Gemini")
            .strengths(&["analysis", "education", "general"])
            .weaknesses(&["fitness"])
            .tones(&["friendly"])
            .formats(&["table", "bullet_points"])
            .depths(&["high_level", "normal"])
            .audiences(&["general", "beginners"]),
        ToolProfile::new("copilot", "GitHub Copilot")
            .strengths(&["code"])
            .weaknesses(&["writing", "email", "image_generation"])
            .tones(&[])
            .formats(&["code", "structured"])
            .depths(&["brief", "step_by_step"])
            .audiences(&["technical"]),
        ToolProfile::new("perplexity", "Perplexity")
            .strengths(&["analysis", "education"])
            .weaknesses(&["image_generation", "code"])
            .tones(&["neutral"])
            .formats(&["bullet_points", "numbered_list"])
            .depths(&["brief", "high_level"])
            .audiences(&["general", "experts"]),
        ToolProfile::new("midjourney", "Midjourney")
            .strengths(&["image_generation"])
            .weaknesses(&["code", "email", "analysis"])
            .tones(&[])
            .formats(&["free"])
            .depths(&["brief"])
            .audiences(&["general"]),
        ToolProfile::new("grok", "Grok")
            .strengths(&["general", "writing"])
            .weaknesses(&["business"])
            .tones(&["humorous", "casual"])
            .formats(&["free", "paragraph"])
            .depths(&["brief", "normal"])
            .audiences(&["general"]),
    ]
}
