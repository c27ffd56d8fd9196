//! In-memory card store.

use crate::types::{Category, CategoryFilter, Flashcard};
use chrono::Utc;

/// Owns every flashcard, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Flashcard>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card and return it. Blank text is accepted as-is.
    pub fn add(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Category,
    ) -> &Flashcard {
        let id = self.cards.len() as u64 + 1;
        self.cards.push(Flashcard {
            id,
            question: question.into(),
            answer: answer.into(),
            category,
            added_at: Utc::now(),
        });
        &self.cards[self.cards.len() - 1]
    }

    /// Cards passing `filter`, in insertion order.
    ///
    /// Returns a fresh Vec so callers may reorder it freely.
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<Flashcard> {
        self.cards
            .iter()
            .filter(|c| filter.matches(&c.category))
            .cloned()
            .collect()
    }

    /// Get a card by ID.
    pub fn get(&self, id: u64) -> Option<&Flashcard> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Confirmation message shown after adding a card.
pub fn added_message(category: &Category) -> String {
    format!("Added to '{}'!", category)
}
