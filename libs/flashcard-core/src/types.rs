//! Core types for the flashcard trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card category.
///
/// The named variants are the categories offered by the UI. Any other label
/// is kept verbatim as `Custom`; nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Mathematics,
    Science,
    Physics,
    PhysicalEducation,
    InformationTechnology,
    SocialStudies,
    HumanAndSocialBiology,
    History,
    Other,
    Custom(String),
}

impl Category {
    /// Categories offered for selection, in display order.
    pub const KNOWN: [Category; 9] = [
        Category::Mathematics,
        Category::Science,
        Category::Physics,
        Category::PhysicalEducation,
        Category::InformationTechnology,
        Category::SocialStudies,
        Category::HumanAndSocialBiology,
        Category::History,
        Category::Other,
    ];

    /// Get the display label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mathematics => "Mathematics",
            Self::Science => "Science",
            Self::Physics => "Physics",
            Self::PhysicalEducation => "Physical Education",
            Self::InformationTechnology => "Information Technology",
            Self::SocialStudies => "Social Studies",
            Self::HumanAndSocialBiology => "Human and Social Biology",
            Self::History => "History",
            Self::Other => "Other",
            Self::Custom(label) => label.as_str(),
        }
    }

    /// Parse from a label. Matching is exact; unknown labels become `Custom`.
    pub fn from_label(label: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|c| c.as_str() == label)
            .cloned()
            .unwrap_or_else(|| Self::Custom(label.to_string()))
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// Category filter passed to every review and quiz call.
///
/// The empty string selects all cards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a card in `category` passes this filter.
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        if label.is_empty() {
            Self::All
        } else {
            Self::Only(Category::from_label(label))
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(label: Option<String>) -> Self {
        match label {
            Some(label) => Self::from(label.as_str()),
            None => Self::All,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => String::new(),
            CategoryFilter::Only(category) => category.into(),
        }
    }
}

/// A flashcard. Immutable once added to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: u64,
    pub question: String,
    pub answer: String,
    pub category: Category,
    pub added_at: DateTime<Utc>,
}

/// Display state returned by review `advance` and `mark`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewView {
    pub question: String,
    /// Flip prompt, or empty for the no-cards sentinel.
    pub answer: String,
    /// `"{n}/{total} cards"`, or `"0 cards"` for an empty deck.
    pub progress: String,
    pub streak: u32,
}

/// Display state returned by review `flip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipView {
    pub question: String,
    pub answer: String,
}

/// Display state returned by quiz `start` and `submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizView {
    /// Question, feedback plus next question, or the final score.
    pub prompt: String,
    /// Always empty; clears the caller's answer input.
    pub answer_field: String,
}

/// Snapshot of quiz progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProgress {
    pub position: usize,
    pub score: u32,
    pub total: usize,
    pub finished: bool,
    pub started_at: DateTime<Utc>,
}
