//! Tool ranking via weighted rule evaluation.
//!
//! Scores every catalog entry against an [`Intent`] and returns a freshly
//! allocated, descending-sorted result. The catalog is never written to;
//! score and reason state is local to each call, so concurrent rankings
//! cannot corrupt each other.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use super::catalog::ToolProfile;
use super::intent::{Audience, Depth, Intent, OutputFormat, Tone, Urgency};

// Calibration constants. The values were tuned by hand in the original
// heuristic and are preserved exactly; they live here, named, rather than
// inlined at each rule.
const TASK_EXACT: i32 = 15;
const TASK_PARTIAL: i32 = 10;
const TONE_AFFINITY: i32 = 8;
const TONE_SPECIAL: i32 = 10;
const FORMAT_TECHNICAL: i32 = 12;
const FORMAT_AFFINITY: i32 = 6;
const DEPTH_DETAILED: i32 = 10;
const DEPTH_BRIEF: i32 = 8;
const DEPTH_AFFINITY: i32 = 5;
const AUDIENCE_TECHNICAL: i32 = 10;
const AUDIENCE_BEGINNER: i32 = 8;
const AUDIENCE_AFFINITY: i32 = 6;
const URGENCY_FAST: i32 = 10;
const URGENCY_CONCISE: i32 = 8;
const REALTIME_BONUS: i32 = 10;
const BUDGET_BONUS: i32 = 8;
const WEAKNESS_PENALTY: i32 = 12;

/// Low-confidence guard thresholds: if the top two scores are closer than
/// the margin and the top score is under the floor, the ranking falls back
/// to the fixed default catalog order.
const TIE_MARGIN: i32 = 5;
const CONFIDENCE_FLOOR: i32 = 10;

/// How many match reasons are kept per tool for display.
const MAX_REASONS: usize = 3;

/// Constraint-tag specialists: `(tag, tool id, bonus)`.
const SPECIALIST_BONUSES: &[(&str, &str, i32)] = &[
    ("code", "copilot", 20),
    ("creative", "claude", 18),
    ("research", "perplexity", 16),
    ("business", "chatgpt", 15),
    ("education", "gemini", 12),
];

/// Hard-coded `(tone, tool id)` exceptions that outscore the generic
/// tone-affinity rule.
const TONE_SPECIAL_PAIRS: &[(Tone, &str)] = &[
    (Tone::Humorous, "grok"),
    (Tone::Authoritative, "claude"),
    (Tone::Persuasive, "chatgpt"),
];

/// Tools that handle code/structured output and technical audiences.
const TECHNICAL_TOOLS: &[&str] = &["copilot", "claude", "gemini"];
/// Tools suited to long-form, detailed answers.
const LONG_FORM_TOOLS: &[&str] = &["claude", "chatgpt"];
/// Tools that favor short, fast answers.
const CONCISE_TOOLS: &[&str] = &["perplexity", "grok"];
/// General-purpose tools that suit beginners.
const GENERAL_TOOLS: &[&str] = &["chatgpt", "gemini"];
/// Tools with live web access.
const REALTIME_TOOLS: &[&str] = &["gemini", "perplexity", "grok"];
/// Tools with a usable free tier.
const FREE_TIER_TOOLS: &[&str] = &["chatgpt", "gemini"];

/// One scored catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTool {
    pub tool_id: String,
    pub score: i32,
    /// Human-readable reasons the score accumulated, first three only.
    pub match_reasons: Vec<String>,
}

impl RankedTool {
    /// Joined reason string for display.
    pub fn reason_summary(&self) -> String {
        self.match_reasons.join(", ")
    }
}

/// Ordered ranking over a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingResult {
    /// Tools in recommendation order.
    pub entries: Vec<RankedTool>,
    /// True when the low-confidence guard discarded the computed order in
    /// favor of the fixed default catalog order.
    pub default_order: bool,
}

impl RankingResult {
    pub fn top(&self) -> Option<&RankedTool> {
        self.entries.first()
    }
}

/// Ranks tool profiles against an intent.
///
/// Pure given intent and catalog; both stay untouched.
pub struct ToolRanker;

impl Default for ToolRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRanker {
    pub fn new() -> Self {
        Self
    }

    /// Rank `catalog` against `intent`, highest score first. Ties preserve
    /// catalog order (stable sort). An empty catalog yields an empty result.
    pub fn rank(&self, intent: &Intent, catalog: &[ToolProfile]) -> RankingResult {
        // Content sniffing runs over the serialized intent, not the raw
        // input text.
        static REALTIME_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r#""realtime"|real[- ]time|breaking"#).expect("invalid realtime pattern")
        });
        static BUDGET_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r#""budget"|free tier|no cost"#).expect("invalid budget pattern")
        });

        let serialized = serde_json::to_string(intent).unwrap_or_default();
        let wants_realtime = REALTIME_RE.is_match(&serialized);
        let wants_budget = BUDGET_RE.is_match(&serialized);

        let scored: Vec<RankedTool> = catalog
            .iter()
            .map(|tool| self.score_tool(intent, tool, wants_realtime, wants_budget))
            .collect();

        let mut entries = scored.clone();
        entries.sort_by(|a, b| b.score.cmp(&a.score));

        // Low-confidence guard: a near-tie at a low absolute score is noise,
        // fall back to the fixed catalog order.
        let default_order = match (entries.first(), entries.get(1)) {
            (Some(top), Some(second)) => {
                top.score - second.score < TIE_MARGIN && top.score < CONFIDENCE_FLOOR
            }
            _ => false,
        };

        if default_order {
            debug!(
                top = entries.first().map(|e| e.score).unwrap_or(0),
                "ranking signal too weak, using default order"
            );
            entries = scored;
        }

        RankingResult {
            entries,
            default_order,
        }
    }

    fn score_tool(
        &self,
        intent: &Intent,
        tool: &ToolProfile,
        wants_realtime: bool,
        wants_budget: bool,
    ) -> RankedTool {
        let mut score = 0;
        let mut reasons = Vec::new();
        let task = intent.task_type.label();

        // 1. Task-type match: exact strength, else substring fallback.
        if tool.strengths.contains(task) {
            score += TASK_EXACT;
            reasons.push(format!("excels at {}", task));
        } else if tool
            .strengths
            .iter()
            .any(|s| s.contains(task) || task.contains(s.as_str()))
        {
            score += TASK_PARTIAL;
            reasons.push(format!("related strength for {}", task));
        }

        // 2. Tone match, with hard-coded exceptions.
        if TONE_SPECIAL_PAIRS
            .iter()
            .any(|(tone, id)| *tone == intent.tone && tool.id == *id)
        {
            score += TONE_SPECIAL;
            reasons.push(format!("known for a {} voice", intent.tone.label()));
        } else if intent.tone != Tone::Neutral && tool.tone_affinity.contains(intent.tone.label())
        {
            score += TONE_AFFINITY;
            reasons.push(format!("tone fits {}", intent.tone.label()));
        }

        // 3. Format match: code/structured routes to technical tools.
        if matches!(intent.format, OutputFormat::Code | OutputFormat::Structured)
            && TECHNICAL_TOOLS.contains(&tool.id.as_str())
        {
            score += FORMAT_TECHNICAL;
            reasons.push(format!("handles {} output", intent.format.label()));
        } else if tool.format_affinity.contains(intent.format.label()) {
            score += FORMAT_AFFINITY;
            reasons.push(format!("good at {} format", intent.format.label()));
        }

        // 4. Depth match.
        if intent.depth == Depth::Detailed && LONG_FORM_TOOLS.contains(&tool.id.as_str()) {
            score += DEPTH_DETAILED;
            reasons.push("strong long-form answers".to_string());
        } else if intent.depth == Depth::Brief && CONCISE_TOOLS.contains(&tool.id.as_str()) {
            score += DEPTH_BRIEF;
            reasons.push("concise by default".to_string());
        } else if tool.depth_affinity.contains(intent.depth.label()) {
            score += DEPTH_AFFINITY;
            reasons.push(format!("suits {} depth", intent.depth.label()));
        }

        // 5. Audience match.
        if intent.audience == Audience::Technical && TECHNICAL_TOOLS.contains(&tool.id.as_str()) {
            score += AUDIENCE_TECHNICAL;
            reasons.push("technical audience".to_string());
        } else if intent.audience == Audience::Beginners
            && GENERAL_TOOLS.contains(&tool.id.as_str())
        {
            score += AUDIENCE_BEGINNER;
            reasons.push("beginner friendly".to_string());
        } else if tool.audience_affinity.contains(intent.audience.label()) {
            score += AUDIENCE_AFFINITY;
            reasons.push(format!("suits {} audience", intent.audience.label()));
        }

        // 6. Constraint-tag specialist bonuses.
        for (tag, id, bonus) in SPECIALIST_BONUSES {
            if tool.id == *id && intent.has_constraint(tag) {
                score += bonus;
                reasons.push(format!("{} specialist", tag));
            }
        }
        if intent.urgency == Urgency::High {
            if tool.id == "perplexity" {
                score += URGENCY_FAST;
                reasons.push("fast answers for urgent asks".to_string());
            } else if tool.id == "grok" {
                score += URGENCY_CONCISE;
                reasons.push("quick turnaround".to_string());
            }
        }

        // 7. Content-sniffing bonuses over the serialized intent.
        if wants_realtime && REALTIME_TOOLS.contains(&tool.id.as_str()) {
            score += REALTIME_BONUS;
            reasons.push("live web access".to_string());
        }
        if wants_budget && FREE_TIER_TOOLS.contains(&tool.id.as_str()) {
            score += BUDGET_BONUS;
            reasons.push("generous free tier".to_string());
        }

        // 8. Weakness penalty, flat regardless of accumulated bonuses.
        if tool.weaknesses.contains(task) {
            score -= WEAKNESS_PENALTY;
            reasons.push(format!("weaker at {}", task));
        }

        reasons.truncate(MAX_REASONS);

        RankedTool {
            tool_id: tool.id.clone(),
            score,
            match_reasons: reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::craft::catalog::default_catalog;
    use crate::craft::intent::{IntentClassifier, TaskType};

    fn blank_tool(id: &str) -> ToolProfile {
        ToolProfile::new(id, id)
    }

    #[test]
    fn test_empty_catalog_yields_empty_ranking() {
        let ranker = ToolRanker::new();
        let result = ranker.rank(&Intent::default(), &[]);

        assert!(result.entries.is_empty());
        assert!(!result.default_order);
    }

    #[test]
    fn test_exact_task_match_beats_partial() {
        let ranker = ToolRanker::new();
        let intent = Intent {
            task_type: TaskType::Code,
            ..Intent::default()
        };

        let catalog = vec![
            blank_tool("partial").strengths(&["code review"]),
            blank_tool("exact").strengths(&["code"]),
        ];

        let result = ranker.rank(&intent, &catalog);
        assert_eq!(result.entries[0].tool_id, "exact");
        assert_eq!(result.entries[0].score, TASK_EXACT);
        assert_eq!(result.entries[1].score, TASK_PARTIAL);
    }

    #[test]
    fn test_weakness_penalty_is_exactly_twelve() {
        let ranker = ToolRanker::new();
        let intent = Intent {
            task_type: TaskType::Email,
            ..Intent::default()
        };

        // Identical tools except for the weakness tag. Scores must keep the
        // result above the low-confidence floor so no fallback kicks in.
        let clean = blank_tool("clean").strengths(&["email"]);
        let flawed = blank_tool("flawed")
            .strengths(&["email"])
            .weaknesses(&["email"]);

        let result = ranker.rank(&intent, &[clean, flawed]);
        let clean_score = result
            .entries
            .iter()
            .find(|e| e.tool_id == "clean")
            .map(|e| e.score)
            .unwrap();
        let flawed_score = result
            .entries
            .iter()
            .find(|e| e.tool_id == "flawed")
            .map(|e| e.score)
            .unwrap();

        assert_eq!(clean_score - flawed_score, WEAKNESS_PENALTY);
    }

    #[test]
    fn test_ties_preserve_catalog_order() {
        let ranker = ToolRanker::new();
        let intent = Intent {
            task_type: TaskType::Writing,
            ..Intent::default()
        };

        // Both score identically; sort stability keeps catalog order. Scores
        // clear the confidence floor so the guard stays out of the way.
        let catalog = vec![
            blank_tool("first").strengths(&["writing"]),
            blank_tool("second").strengths(&["writing"]),
        ];

        let result = ranker.rank(&intent, &catalog);
        assert!(!result.default_order);
        assert_eq!(result.entries[0].tool_id, "first");
        assert_eq!(result.entries[1].tool_id, "second");
        assert_eq!(result.entries[0].score, result.entries[1].score);
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        let ranker = ToolRanker::new();
        let catalog = default_catalog();
        let snapshot = catalog.clone();

        let classifier = IntentClassifier::new();
        let intent = classifier.classify("urgent: debug this python api for experts, asap");
        let _ = ranker.rank(&intent, &catalog);

        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn test_low_confidence_guard_falls_back_to_catalog_order() {
        let ranker = ToolRanker::new();

        // No tool matches anything: every score is 0, the near-tie sits
        // under the floor, so the result is the exact catalog order.
        let catalog = vec![blank_tool("alpha"), blank_tool("beta"), blank_tool("gamma")];
        let result = ranker.rank(&Intent::default(), &catalog);

        assert!(result.default_order);
        let order: Vec<&str> = result.entries.iter().map(|e| e.tool_id.as_str()).collect();
        assert_eq!(order, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_guard_not_triggered_when_top_is_confident() {
        let ranker = ToolRanker::new();
        let intent = Intent {
            task_type: TaskType::Code,
            ..Intent::default()
        };

        let catalog = vec![blank_tool("weak"), blank_tool("strong").strengths(&["code"])];
        let result = ranker.rank(&intent, &catalog);

        assert!(!result.default_order);
        assert_eq!(result.entries[0].tool_id, "strong");
    }

    #[test]
    fn test_constraint_specialist_bonus() {
        let ranker = ToolRanker::new();
        let classifier = IntentClassifier::new();

        let intent = classifier.classify("debug this function");
        assert!(intent.has_constraint("code"));

        let result = ranker.rank(&intent, &default_catalog());
        assert_eq!(result.entries[0].tool_id, "copilot");
    }

    #[test]
    fn test_realtime_sniffing_boosts_live_tools() {
        let ranker = ToolRanker::new();
        let classifier = IntentClassifier::new();

        let with_realtime = classifier.classify("summarize the latest breaking developments");
        let without = classifier.classify("summarize the developments");

        let boosted = ranker.rank(&with_realtime, &default_catalog());
        let plain = ranker.rank(&without, &default_catalog());

        let score_of = |r: &RankingResult, id: &str| {
            r.entries
                .iter()
                .find(|e| e.tool_id == id)
                .map(|e| e.score)
                .unwrap()
        };

        assert_eq!(
            score_of(&boosted, "perplexity") - score_of(&plain, "perplexity"),
            REALTIME_BONUS
        );
    }

    #[test]
    fn test_reasons_truncated_to_three() {
        let ranker = ToolRanker::new();
        let classifier = IntentClassifier::new();

        // Fires task, format, audience, and constraint rules on copilot.
        let intent = classifier.classify("debug this python function with code examples");
        let result = ranker.rank(&intent, &default_catalog());

        for entry in &result.entries {
            assert!(entry.match_reasons.len() <= 3, "tool {}", entry.tool_id);
        }
        let top = result.top().unwrap();
        assert_eq!(top.tool_id, "copilot");
        assert!(!top.reason_summary().is_empty());
    }

    #[test]
    fn test_humorous_tone_special_case() {
        let ranker = ToolRanker::new();
        let classifier = IntentClassifier::new();

        let intent = classifier.classify("make it funny");
        let result = ranker.rank(&intent, &default_catalog());

        let grok = result
            .entries
            .iter()
            .find(|e| e.tool_id == "grok")
            .unwrap();
        assert!(grok
            .match_reasons
            .iter()
            .any(|r| r.contains("humorous")));
    }
}
