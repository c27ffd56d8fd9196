//! Scored quiz over a fixed snapshot of cards.

use crate::error::{Result, SessionError};
use crate::matching::answers_match;
use crate::types::{Flashcard, QuizProgress, QuizView};
use chrono::{DateTime, Utc};

const NO_CARDS_TO_QUIZ: &str = "No cards to quiz.";
const CORRECT_FEEDBACK: &str = "✔️ Correct!";

/// A quiz in progress.
///
/// The snapshot is taken at start; cards added to the store afterwards do
/// not affect it.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub(crate) snapshot: Vec<Flashcard>,
    position: usize,
    score: u32,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Start a quiz over `snapshot`, already shuffled if requested.
    pub fn start(snapshot: Vec<Flashcard>) -> (Self, QuizView) {
        let prompt = match snapshot.first() {
            Some(card) => card.question.clone(),
            None => NO_CARDS_TO_QUIZ.to_string(),
        };
        let quiz = Self {
            snapshot,
            position: 0,
            score: 0,
            started_at: Utc::now(),
        };
        (quiz, view(prompt))
    }

    /// Grade `user_answer` against the current card and move on.
    ///
    /// Fails with `InvalidState` once every card has been answered, including
    /// a quiz started over an empty snapshot.
    pub fn submit(&mut self, user_answer: &str) -> Result<QuizView> {
        let card = self
            .snapshot
            .get(self.position)
            .ok_or_else(|| SessionError::invalid_state("quiz already finished"))?;

        let feedback = if answers_match(user_answer, &card.answer) {
            self.score += 1;
            CORRECT_FEEDBACK.to_string()
        } else {
            format!("❌ Incorrect! The correct answer was: {}", card.answer)
        };

        self.position += 1;
        match self.snapshot.get(self.position) {
            Some(next) => Ok(view(format!(
                "{}\n\nNext Question: {}",
                feedback, next.question
            ))),
            None => Ok(view(format!(
                "Quiz Done! Score: {}/{}",
                self.score,
                self.snapshot.len()
            ))),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.snapshot.len()
    }

    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            position: self.position,
            score: self.score,
            total: self.snapshot.len(),
            finished: self.is_finished(),
            started_at: self.started_at,
        }
    }
}

fn view(prompt: String) -> QuizView {
    QuizView {
        prompt,
        answer_field: String::new(),
    }
}
