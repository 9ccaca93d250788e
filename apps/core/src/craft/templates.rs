//! Local prompt templates.
//!
//! Fallback generation path: when no remote endpoint is available (or the
//! call fails) the final prompt is assembled from fixed phrasing templates
//! keyed by the classified intent. Pure string work, no I/O.

use super::intent::{Audience, Depth, Intent, OutputFormat, TaskType, Tone, Urgency};

/// Renders a usable prompt from an [`Intent`] and the original task text.
pub struct PromptTemplates;

impl Default for PromptTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptTemplates {
    pub fn new() -> Self {
        Self
    }

    fn persona(task_type: TaskType) -> &'static str {
        match task_type {
            TaskType::General => "You are a capable, well-rounded assistant.",
            TaskType::Email => "You are an experienced professional communicator.",
            TaskType::Code => "You are a senior software engineer.",
            TaskType::Analysis => "You are a rigorous analyst.",
            TaskType::Writing => "You are a skilled writer and editor.",
            TaskType::Fitness => "You are a certified fitness coach.",
            TaskType::Business => "You are a seasoned business strategist.",
            TaskType::Education => "You are a patient, engaging teacher.",
            TaskType::ImageGeneration => {
                "You are an art director writing image generation prompts."
            }
        }
    }

    fn tone_line(tone: Tone) -> Option<&'static str> {
        match tone {
            Tone::Neutral => None,
            Tone::Friendly => Some("Use a warm, friendly tone."),
            Tone::Professional => Some("Keep the tone professional and polished."),
            Tone::Casual => Some("Keep the tone casual and relaxed."),
            Tone::Humorous => Some("Add light humor where it fits."),
            Tone::Persuasive => Some("Make the writing persuasive and compelling."),
            Tone::Authoritative => Some("Write with confident authority."),
        }
    }

    fn format_line(format: OutputFormat) -> Option<&'static str> {
        match format {
            OutputFormat::Free => None,
            OutputFormat::BulletPoints => Some("Format the answer as bullet points."),
            OutputFormat::NumberedList => Some("Format the answer as a numbered list."),
            OutputFormat::Table => Some("Present the answer as a table."),
            OutputFormat::Structured => Some("Use a clearly structured layout with headings."),
            OutputFormat::Paragraph => Some("Write in flowing paragraphs."),
            OutputFormat::Email => Some("Write it as a complete email with subject line."),
            OutputFormat::Code => Some("Answer with working code plus a short explanation."),
        }
    }

    fn depth_line(depth: Depth) -> Option<&'static str> {
        match depth {
            Depth::Normal => None,
            Depth::Detailed => Some("Be thorough and cover edge cases."),
            Depth::Brief => Some("Keep it brief."),
            Depth::HighLevel => Some("Stay at a high level; skip minor details."),
            Depth::StepByStep => Some("Explain step by step."),
        }
    }

    fn audience_line(audience: Audience) -> Option<&'static str> {
        match audience {
            Audience::General => None,
            Audience::Beginners => Some("Assume the reader is a complete beginner."),
            Audience::Experts => Some("Assume an expert reader; skip the basics."),
            Audience::Technical => Some("Assume a technical reader comfortable with jargon."),
            Audience::NonTechnical => Some("Avoid jargon; explain in plain language."),
        }
    }

    /// Assemble the final prompt for the given intent and task description.
    pub fn render(&self, intent: &Intent, text: &str) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(Self::persona(intent.task_type).to_string());
        lines.push(format!("Task: {}", text.trim()));

        if let Some(line) = Self::tone_line(intent.tone) {
            lines.push(line.to_string());
        }
        if let Some(line) = Self::format_line(intent.format) {
            lines.push(line.to_string());
        }
        if let Some(line) = Self::depth_line(intent.depth) {
            lines.push(line.to_string());
        }
        if let Some(line) = Self::audience_line(intent.audience) {
            lines.push(line.to_string());
        }
        if intent.urgency == Urgency::High {
            lines.push("Get to the point quickly.".to_string());
        }
        if intent.has_constraint("examples") {
            lines.push("Include concrete examples.".to_string());
        }
        if intent.has_constraint("short") {
            lines.push("Keep the response short.".to_string());
        }
        if intent.has_constraint("research") {
            lines.push("Cite sources where possible.".to_string());
        }

        lines.join("\n")
    }
}
