//! Intent classification using regex pattern tables.
//!
//! Fast keyword-based classification of a raw task description into a
//! structured [`Intent`]. No ML model required - pure Rust regex matching.
//!
//! Each intent field has its own ordered table of `(pattern, value)` pairs.
//! Within a table the first pattern that matches wins, so precedence is a
//! visible property of the table itself (code detection sits before analysis
//! detection in the task table, and that ordering is load-bearing).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Broad category of the task being described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    #[default]
    General,
    Email,
    Code,
    Analysis,
    Writing,
    Fitness,
    Business,
    Education,
    ImageGeneration,
}

/// Requested tone of voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Neutral,
    Friendly,
    Professional,
    Casual,
    Humorous,
    Persuasive,
    Authoritative,
}

/// Formality register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    VeryFormal,
    Formal,
    #[default]
    Neutral,
    Informal,
    VeryInformal,
}

/// Emotional register detected in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    #[default]
    Neutral,
    Excited,
    Urgent,
    Calm,
    Serious,
}

/// How urgent the request is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    Low,
    #[default]
    Normal,
}

/// Who the output is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    General,
    Beginners,
    Experts,
    Technical,
    NonTechnical,
}

/// Requested output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Free,
    BulletPoints,
    NumberedList,
    Table,
    Structured,
    Paragraph,
    Email,
    Code,
}

/// Requested level of detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    #[default]
    Normal,
    Detailed,
    Brief,
    HighLevel,
    StepByStep,
}

impl TaskType {
    /// Returns the snake_case label used in tool profiles and templates.
    pub fn label(&self) -> &'static str {
        match self {
            TaskType::General => "general",
            TaskType::Email => "email",
            TaskType::Code => "code",
            TaskType::Analysis => "analysis",
            TaskType::Writing => "writing",
            TaskType::Fitness => "fitness",
            TaskType::Business => "business",
            TaskType::Education => "education",
            TaskType::ImageGeneration => "image_generation",
        }
    }
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Humorous => "humorous",
            Tone::Persuasive => "persuasive",
            Tone::Authoritative => "authoritative",
        }
    }
}

impl Audience {
    pub fn label(&self) -> &'static str {
        match self {
            Audience::General => "general",
            Audience::Beginners => "beginners",
            Audience::Experts => "experts",
            Audience::Technical => "technical",
            Audience::NonTechnical => "non_technical",
        }
    }
}

impl OutputFormat {
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Free => "free",
            OutputFormat::BulletPoints => "bullet_points",
            OutputFormat::NumberedList => "numbered_list",
            OutputFormat::Table => "table",
            OutputFormat::Structured => "structured",
            OutputFormat::Paragraph => "paragraph",
            OutputFormat::Email => "email",
            OutputFormat::Code => "code",
        }
    }
}

impl Depth {
    pub fn label(&self) -> &'static str {
        match self {
            Depth::Normal => "normal",
            Depth::Detailed => "detailed",
            Depth::Brief => "brief",
            Depth::HighLevel => "high_level",
            Depth::StepByStep => "step_by_step",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Structured classification of a free-text task description.
///
/// Every field defaults to its neutral value; classification degrades to
/// defaults rather than failing. Produced fresh per input, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Intent {
    pub task_type: TaskType,
    pub tone: Tone,
    pub formality: Formality,
    pub emotion: Emotion,
    pub urgency: Urgency,
    pub audience: Audience,
    pub format: OutputFormat,
    pub depth: Depth,
    /// Additive constraint tags; a single input may carry several.
    pub constraints: Vec<String>,
}

impl Intent {
    /// True if a constraint tag was detected.
    pub fn has_constraint(&self, tag: &str) -> bool {
        self.constraints.iter().any(|c| c == tag)
    }
}

/// Ordered pattern table: first row whose regex matches decides the value.
type FieldTable<T> = Vec<(Regex, T)>;

fn build_table<T: Copy>(rows: &[(&str, T)]) -> FieldTable<T> {
    rows.iter()
        .map(|(pattern, value)| {
            (
                Regex::new(pattern).expect("invalid intent pattern"),
                *value,
            )
        })
        .collect()
}

fn first_match<T: Copy + Default>(table: &FieldTable<T>, text: &str) -> T {
    table
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, value)| *value)
        .unwrap_or_default()
}

// Patterns match against lower-cased input; no stemming, no unicode folding.
// Row order is the precedence order and must not be reshuffled.

static TASK_TABLE: LazyLock<FieldTable<TaskType>> = LazyLock::new(|| {
    build_table(&[
        (
            r"\b(email|e-mail|mail to|inbox|reply to|follow[- ]up email)\b",
            TaskType::Email,
        ),
        // Code sits before analysis: "analyze this python function" is code.
        (
            r"\b(code|coding|program|script|function|debug|bug|compile|refactor|algorithm|python|javascript|typescript|rust|java|sql|api)\b",
            TaskType::Code,
        ),
        (
            r"\b(analy[sz]e|analysis|compare|evaluate|assess|research|statistics|data set|summari[sz]e|report)\b",
            TaskType::Analysis,
        ),
        (
            r"\b(image|picture|photo|illustration|logo|drawing|draw|artwork|midjourney|dall-e)\b",
            TaskType::ImageGeneration,
        ),
        (
            r"\b(workout|exercise|fitness|gym|diet|nutrition|training plan|muscle|weight loss)\b",
            TaskType::Fitness,
        ),
        (
            r"\b(business|startup|marketing|sales|strategy|pitch|revenue|customer|brand)\b",
            TaskType::Business,
        ),
        (
            r"\b(teach|lesson|study|learn|course|quiz|homework|tutorial|curriculum)\b",
            TaskType::Education,
        ),
        (
            r"\b(write|essay|story|blog|article|poem|caption|content|novel)\b",
            TaskType::Writing,
        ),
    ])
});

static TONE_TABLE: LazyLock<FieldTable<Tone>> = LazyLock::new(|| {
    build_table(&[
        (
            r"\b(professional|business-like|corporate|polite|courteous)\b",
            Tone::Professional,
        ),
        (r"\b(friendly|warm|kind|welcoming)\b", Tone::Friendly),
        (
            r"\b(casual|relaxed|chill|laid-back)\b",
            Tone::Casual,
        ),
        (
            r"\b(funny|humorous|joke|witty|playful)\b",
            Tone::Humorous,
        ),
        (
            r"\b(persuasive|convincing|compelling|win over)\b",
            Tone::Persuasive,
        ),
        (
            r"\b(authoritative|assertive|commanding|confident tone)\b",
            Tone::Authoritative,
        ),
    ])
});

static FORMALITY_TABLE: LazyLock<FieldTable<Formality>> = LazyLock::new(|| {
    build_table(&[
        (
            r"\b(very formal|highly formal|ceremonial|legalese)\b",
            Formality::VeryFormal,
        ),
        (
            r"\b(formal|professional|official)\b",
            Formality::Formal,
        ),
        (
            r"\b(slang|very casual|super casual|like a friend)\b",
            Formality::VeryInformal,
        ),
        (
            r"\b(informal|casual|conversational)\b",
            Formality::Informal,
        ),
    ])
});

static EMOTION_TABLE: LazyLock<FieldTable<Emotion>> = LazyLock::new(|| {
    build_table(&[
        (
            r"\b(urgent|asap|emergency|immediately|right away)\b",
            Emotion::Urgent,
        ),
        (
            r"\b(excited|thrilled|amazing|awesome|can't wait)\b",
            Emotion::Excited,
        ),
        (r"\b(calm|soothing|peaceful|gentle)\b", Emotion::Calm),
        (
            r"\b(serious|grave|critical|somber)\b",
            Emotion::Serious,
        ),
    ])
});

static URGENCY_TABLE: LazyLock<FieldTable<Urgency>> = LazyLock::new(|| {
    build_table(&[
        (
            r"\b(urgent|asap|immediately|right now|by today|deadline)\b",
            Urgency::High,
        ),
        (r"\b(soon|this week|shortly)\b", Urgency::Medium),
        (
            r"\b(whenever|no rush|take your time|eventually)\b",
            Urgency::Low,
        ),
    ])
});

static AUDIENCE_TABLE: LazyLock<FieldTable<Audience>> = LazyLock::new(|| {
    build_table(&[
        // Programming vocabulary implies a technical reader.
        (
            r"\b(developers?|engineers?|programmers?|technical|code|coding|debug|python|javascript|rust|function|api)\b",
            Audience::Technical,
        ),
        (
            r"\b(non-technical|layman|laypeople|plain english|simple terms)\b",
            Audience::NonTechnical,
        ),
        (
            r"\b(beginners?|newbies?|novices?|new to|just starting)\b",
            Audience::Beginners,
        ),
        (
            r"\b(experts?|advanced|seasoned|professionals)\b",
            Audience::Experts,
        ),
    ])
});

static FORMAT_TABLE: LazyLock<FieldTable<OutputFormat>> = LazyLock::new(|| {
    build_table(&[
        (r"\b(email|e-mail)\b", OutputFormat::Email),
        (
            r"\b(code|function|script|snippet|program)\b",
            OutputFormat::Code,
        ),
        (
            r"\b(bullet points?|bulleted|bullet list)\b",
            OutputFormat::BulletPoints,
        ),
        (
            r"\b(numbered list|numbered steps)\b",
            OutputFormat::NumberedList,
        ),
        (
            r"\b(table|spreadsheet|columns and rows)\b",
            OutputFormat::Table,
        ),
        (
            r"\b(structured|json|yaml|outline)\b",
            OutputFormat::Structured,
        ),
        (
            r"\b(paragraphs?|prose|essay form)\b",
            OutputFormat::Paragraph,
        ),
    ])
});

static DEPTH_TABLE: LazyLock<FieldTable<Depth>> = LazyLock::new(|| {
    build_table(&[
        (
            r"\b(step[- ]by[- ]step|walk me through|walkthrough)\b",
            Depth::StepByStep,
        ),
        (
            r"\b(detailed|in[- ]depth|comprehensive|thorough|elaborate)\b",
            Depth::Detailed,
        ),
        (
            r"\b(high[- ]level|overview|big picture|bird's eye)\b",
            Depth::HighLevel,
        ),
        (
            r"\b(brief|short|concise|quick|tl;dr)\b",
            Depth::Brief,
        ),
    ])
});

/// Constraint triggers: unlike the field tables these are additive, every
/// matching row appends its tag.
static CONSTRAINT_TABLE: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"\b(act as|you are an?|pretend to be|in the role of)\b",
            "specific-persona",
        ),
        (r"\b(short|brief|concise|one[- ]liner)\b", "short"),
        (r"\b(examples?|sample|for instance|such as)\b", "examples"),
        (
            r"\b(code|function|script|debug|program|snippet)\b",
            "code",
        ),
        (
            r"\b(creative|story|poem|fiction|imaginative)\b",
            "creative",
        ),
        (
            r"\b(research|sources?|citations?|references?|studies)\b",
            "research",
        ),
        (
            r"\b(business|marketing|sales|strategy|pitch)\b",
            "business",
        ),
        (r"\b(teach|lesson|learn|tutorial)\b", "education"),
        (
            r"\b(real[- ]?time|latest|breaking|current events|up[- ]to[- ]date|today'?s news)\b",
            "realtime",
        ),
        (
            r"\b(free|budget|cheap|no cost|without paying)\b",
            "budget",
        ),
    ]
    .iter()
    .map(|(pattern, tag)| {
        (
            Regex::new(pattern).expect("invalid constraint pattern"),
            *tag,
        )
    })
    .collect()
});

/// Classifies free text into an [`Intent`] via per-field pattern tables.
///
/// Pure and deterministic: no I/O, no errors. Unmatched input degrades to the
/// all-defaults intent.
pub struct IntentClassifier;

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a task description. Case handling is a single lower-casing
    /// pass; each field is decided independently by its own table.
    pub fn classify(&self, text: &str) -> Intent {
        let text = text.trim().to_lowercase();

        if text.is_empty() {
            return Intent::default();
        }

        let constraints = CONSTRAINT_TABLE
            .iter()
            .filter(|(re, _)| re.is_match(&text))
            .map(|(_, tag)| (*tag).to_string())
            .collect();

        Intent {
            task_type: first_match(&TASK_TABLE, &text),
            tone: first_match(&TONE_TABLE, &text),
            formality: first_match(&FORMALITY_TABLE, &text),
            emotion: first_match(&EMOTION_TABLE, &text),
            urgency: first_match(&URGENCY_TABLE, &text),
            audience: first_match(&AUDIENCE_TABLE, &text),
            format: first_match(&FORMAT_TABLE, &text),
            depth: first_match(&DEPTH_TABLE, &text),
            constraints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_defaults() {
        let classifier = IntentClassifier::new();

        for input in ["", "   ", "\n\t"] {
            let intent = classifier.classify(input);
            assert_eq!(intent, Intent::default(), "input {:?}", input);
            assert_eq!(intent.task_type, TaskType::General);
            assert!(intent.constraints.is_empty());
        }
    }

    #[test]
    fn test_email_task_detection() {
        let classifier = IntentClassifier::new();

        let intent = classifier.classify("write an email to my boss");
        assert_eq!(intent.task_type, TaskType::Email);
        assert_eq!(intent.format, OutputFormat::Email);
    }

    #[test]
    fn test_code_precedes_analysis() {
        let classifier = IntentClassifier::new();

        // Matches both the code and analysis tables; the code row is listed
        // first in the task table and must win.
        let intent = classifier.classify("analyze this python function");
        assert_eq!(intent.task_type, TaskType::Code);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = IntentClassifier::new();

        let lower = classifier.classify("debug this javascript bug");
        let upper = classifier.classify("DEBUG THIS JAVASCRIPT BUG");
        assert_eq!(lower, upper);
        assert_eq!(lower.task_type, TaskType::Code);
    }

    #[test]
    fn test_tone_detection() {
        let classifier = IntentClassifier::new();

        let intent = classifier.classify("make it funny and playful");
        assert_eq!(intent.tone, Tone::Humorous);

        let intent = classifier.classify("a professional announcement");
        assert_eq!(intent.tone, Tone::Professional);
        assert_eq!(intent.formality, Formality::Formal);
    }

    #[test]
    fn test_urgency_and_emotion() {
        let classifier = IntentClassifier::new();

        let intent = classifier.classify("I need this asap, it's urgent");
        assert_eq!(intent.urgency, Urgency::High);
        assert_eq!(intent.emotion, Emotion::Urgent);
    }

    #[test]
    fn test_audience_detection() {
        let classifier = IntentClassifier::new();

        let intent = classifier.classify("explain recursion for beginners");
        assert_eq!(intent.audience, Audience::Beginners);

        let intent = classifier.classify("debug this python function");
        assert_eq!(intent.audience, Audience::Technical);
    }

    #[test]
    fn test_depth_detection() {
        let classifier = IntentClassifier::new();

        let intent = classifier.classify("give me a detailed comparison");
        assert_eq!(intent.depth, Depth::Detailed);

        let intent = classifier.classify("walk me through deploying a site");
        assert_eq!(intent.depth, Depth::StepByStep);
    }

    #[test]
    fn test_constraints_are_additive() {
        let classifier = IntentClassifier::new();

        let intent =
            classifier.classify("act as a mentor and teach me to debug code with examples");
        assert!(intent.has_constraint("specific-persona"));
        assert!(intent.has_constraint("code"));
        assert!(intent.has_constraint("education"));
        assert!(intent.has_constraint("examples"));
    }

    #[test]
    fn test_first_match_wins_not_highest_count() {
        let classifier = IntentClassifier::new();

        // "story" and "poem" both hit the writing row, but the single email
        // keyword decides because the email row comes first.
        let intent = classifier.classify("email me the story and the poem");
        assert_eq!(intent.task_type, TaskType::Email);
    }

    #[test]
    fn test_classification_never_mutates_input_semantics() {
        let classifier = IntentClassifier::new();

        let a = classifier.classify("plan a workout routine");
        let b = classifier.classify("plan a workout routine");
        assert_eq!(a, b);
        assert_eq!(a.task_type, TaskType::Fitness);
    }
}
