//! Review mode cursor.
//!
//! The cursor never holds cards. Each call receives the view freshly filtered
//! from the store, so cards added mid-review are picked up immediately.

use crate::types::{Flashcard, FlipView, ReviewView};
use serde::{Deserialize, Serialize};

/// Answer placeholder shown while the answer is hidden.
pub const FLIP_PROMPT: &str = "Click 'Flip'";

const NO_CARDS_FOUND: &str = "No flashcards found.";
const NO_CARDS_AVAILABLE: &str = "No flashcards available.";

/// Position, answer visibility and streak for self-paced review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewCursor {
    pub position: usize,
    pub answer_visible: bool,
    pub streak: u32,
    /// ID of the card last shown by `show`.
    pub shown_card: Option<u64>,
}

impl ReviewCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the card under the cursor, hiding its answer.
    ///
    /// Running off the end of the view wraps to the first card and forfeits
    /// the streak.
    pub fn show(&mut self, view: &[Flashcard]) -> ReviewView {
        if view.is_empty() {
            return ReviewView {
                question: NO_CARDS_FOUND.to_string(),
                answer: String::new(),
                progress: "0 cards".to_string(),
                streak: self.streak,
            };
        }

        if self.position >= view.len() {
            self.position = 0;
            self.streak = 0;
        }

        let card = &view[self.position];
        self.answer_visible = false;
        self.shown_card = Some(card.id);
        ReviewView {
            question: card.question.clone(),
            answer: FLIP_PROMPT.to_string(),
            progress: format!("{}/{} cards", self.position + 1, view.len()),
            streak: self.streak,
        }
    }

    /// Toggle answer visibility for the card last shown.
    ///
    /// The card is looked up by ID, so a shuffled view still flips the card
    /// `show` displayed. If it is no longer in the view, the card under the
    /// cursor is used instead.
    pub fn flip(&mut self, view: &[Flashcard]) -> FlipView {
        if view.is_empty() {
            return FlipView {
                question: NO_CARDS_AVAILABLE.to_string(),
                answer: String::new(),
            };
        }

        let card = self
            .shown_card
            .and_then(|id| view.iter().find(|c| c.id == id))
            // The view may have shrunk since the last show.
            .unwrap_or(&view[self.position % view.len()]);
        self.answer_visible = !self.answer_visible;
        FlipView {
            question: card.question.clone(),
            answer: if self.answer_visible {
                card.answer.clone()
            } else {
                FLIP_PROMPT.to_string()
            },
        }
    }

    /// Record a self-graded answer and step past the current card.
    ///
    /// `view_len` is the size of the view at the time of marking. The caller
    /// follows up with `show`, which repeats its own wrap check.
    pub fn record(&mut self, is_correct: bool, view_len: usize) {
        if is_correct {
            self.streak = self.streak.saturating_add(1);
        } else {
            self.streak = 0;
        }

        self.position += 1;
        if self.position >= view_len {
            self.position = 0;
        }
    }
}
