//! Tool domain model and its categorical metadata.
//!
//! A [`Tool`] is one catalogued AI product. Tools are loaded from an injected
//! data source, never mutated afterwards, and owned by the catalog state. The
//! serialized shape uses camelCase keys so existing datasets load unchanged.

use crate::domain::error::ToolshelfError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Functional category a tool belongs to.
///
/// Serialized as the kebab-case identifier (`"text-generation"`). A tool lists
/// one or more categories; category filters match on any overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    TextGeneration,
    ImageGeneration,
    CodeGeneration,
    AudioGeneration,
    VideoGeneration,
    DataAnalysis,
    LanguageTranslation,
    ContentResearch,
    Marketing,
    Productivity,
    Creativity,
    Business,
    Education,
    Development,
    Other,
}

impl ToolCategory {
    /// Every category in catalogue order.
    pub const ALL: [Self; 15] = [
        Self::TextGeneration,
        Self::ImageGeneration,
        Self::CodeGeneration,
        Self::AudioGeneration,
        Self::VideoGeneration,
        Self::DataAnalysis,
        Self::LanguageTranslation,
        Self::ContentResearch,
        Self::Marketing,
        Self::Productivity,
        Self::Creativity,
        Self::Business,
        Self::Education,
        Self::Development,
        Self::Other,
    ];

    /// Stable identifier, identical to the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextGeneration => "text-generation",
            Self::ImageGeneration => "image-generation",
            Self::CodeGeneration => "code-generation",
            Self::AudioGeneration => "audio-generation",
            Self::VideoGeneration => "video-generation",
            Self::DataAnalysis => "data-analysis",
            Self::LanguageTranslation => "language-translation",
            Self::ContentResearch => "content-research",
            Self::Marketing => "marketing",
            Self::Productivity => "productivity",
            Self::Creativity => "creativity",
            Self::Business => "business",
            Self::Education => "education",
            Self::Development => "development",
            Self::Other => "other",
        }
    }

    /// Human-readable name for headings and filter lists.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TextGeneration => "Text Generation",
            Self::ImageGeneration => "Image Generation",
            Self::CodeGeneration => "Code Generation",
            Self::AudioGeneration => "Audio Generation",
            Self::VideoGeneration => "Video Generation",
            Self::DataAnalysis => "Data Analysis",
            Self::LanguageTranslation => "Language Translation",
            Self::ContentResearch => "Content Research",
            Self::Marketing => "Marketing",
            Self::Productivity => "Productivity",
            Self::Creativity => "Creativity",
            Self::Business => "Business",
            Self::Education => "Education",
            Self::Development => "Development",
            Self::Other => "Other",
        }
    }

    /// One-sentence summary shown on category overview pages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TextGeneration => {
                "AI tools that create, edit and improve written content, from articles and stories to emails and code documentation."
            }
            Self::ImageGeneration => {
                "Tools that transform text prompts into visual art, illustrations, and photorealistic imagery."
            }
            Self::CodeGeneration => {
                "AI solutions that help developers write, review, and debug code across various programming languages."
            }
            Self::AudioGeneration => {
                "Tools for creating synthetic speech, sound effects, music, and audio processing."
            }
            Self::VideoGeneration => {
                "AI systems that can create, edit, or enhance video content from text descriptions or existing footage."
            }
            Self::DataAnalysis => {
                "Tools that help analyze, visualize, and derive insights from large datasets."
            }
            Self::LanguageTranslation => {
                "AI-powered translation tools that convert text or speech between different languages."
            }
            Self::ContentResearch => {
                "Tools that help find, organize, and summarize information from various sources."
            }
            Self::Marketing => {
                "AI solutions designed to improve marketing campaigns, copywriting, and audience engagement."
            }
            Self::Productivity => {
                "Tools that streamline workflows, automate repetitive tasks, and increase efficiency."
            }
            Self::Creativity => {
                "AI systems that enhance or inspire creative work across various domains."
            }
            Self::Business => {
                "Tools designed to improve business operations, analysis, and decision-making."
            }
            Self::Education => {
                "AI solutions for learning, teaching, and educational content creation."
            }
            Self::Development => {
                "Tools designed specifically for developers, programmers, and technical workflows."
            }
            Self::Other => {
                "Other innovative AI tools that span multiple categories or create new ones."
            }
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = ToolshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ToolshelfError::Config(format!("unknown category: {s}")))
    }
}

/// Pricing tier of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Free,
    Freemium,
    Paid,
    Enterprise,
}

impl AccessLevel {
    /// Every access level, cheapest first.
    pub const ALL: [Self; 4] = [Self::Free, Self::Freemium, Self::Paid, Self::Enterprise];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Freemium => "freemium",
            Self::Paid => "paid",
            Self::Enterprise => "enterprise",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Paid => "Paid",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = ToolshelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ToolshelfError::Config(format!("unknown access level: {s}")))
    }
}

/// A catalogued AI product entry.
///
/// Optional numeric fields are treated as `0` by filters and sorts; optional
/// flags are treated as unset, which is distinct from `false` for the API
/// availability filter.
///
/// # Examples
///
/// ```
/// use toolshelf::domain::{AccessLevel, Tool, ToolCategory};
///
/// let tool = Tool::new(
///     "gpt",
///     "ChatGPT",
///     "Conversational assistant",
///     vec![ToolCategory::TextGeneration],
///     "https://chat.openai.com",
///     AccessLevel::Freemium,
/// )
/// .with_rating(4.8)
/// .with_tags(["chat", "llm"]);
///
/// assert_eq!(tool.rating_or_zero(), 4.8);
/// assert_eq!(tool.tags(), ["chat".to_string(), "llm".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub categories: Vec<ToolCategory>,
    pub url: String,
    #[serde(default)]
    pub logo_url: String,
    pub access_level: AccessLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Average user rating on a 0 to 5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_trending: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Tool {
    /// Creates a tool with the required fields; every optional field starts unset.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        categories: Vec<ToolCategory>,
        url: impl Into<String>,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            categories,
            url: url.into(),
            logo_url: String::new(),
            access_level,
            pricing_url: None,
            features: Vec::new(),
            rating: None,
            review_count: None,
            popularity_score: None,
            is_new: None,
            is_trending: None,
            tags: None,
            api_available: None,
            api_url: None,
        }
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub fn with_popularity(mut self, score: f64) -> Self {
        self.popularity_score = Some(score);
        self
    }

    #[must_use]
    pub fn with_new(mut self, is_new: bool) -> Self {
        self.is_new = Some(is_new);
        self
    }

    #[must_use]
    pub fn with_api(mut self, available: bool) -> Self {
        self.api_available = Some(available);
        self
    }

    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Rating used for filtering and sorting (`0` when absent).
    #[must_use]
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Popularity used for sorting (`0` when absent).
    #[must_use]
    pub fn popularity_or_zero(&self) -> f64 {
        self.popularity_score.unwrap_or(0.0)
    }

    /// Tags as a slice, empty when the tool has none.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn is_new(&self) -> bool {
        self.is_new.unwrap_or(false)
    }

    #[must_use]
    pub fn is_trending(&self) -> bool {
        self.is_trending.unwrap_or(false)
    }

    #[must_use]
    pub fn in_category(&self, category: ToolCategory) -> bool {
        self.categories.contains(&category)
    }
}
