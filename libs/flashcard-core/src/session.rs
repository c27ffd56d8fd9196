//! Study session engine.
//!
//! A `Session` holds everything transient for one learner: the review
//! cursor, the current quiz, the shuffle flag and its random source. The
//! card store is passed in on every call, never cached.

use crate::error::{Result, SessionError};
use crate::quiz::QuizSession;
use crate::review::ReviewCursor;
use crate::store::CardStore;
use crate::types::{CategoryFilter, Flashcard, FlipView, QuizProgress, QuizView, ReviewView};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub struct Session {
    cursor: ReviewCursor,
    quiz: Option<QuizSession>,
    shuffle: bool,
    rng: StdRng,
}

impl Session {
    /// New session with an OS-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// New session with a deterministic shuffle order.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            cursor: ReviewCursor::new(),
            quiz: None,
            shuffle: false,
            rng,
        }
    }

    /// Set the initial shuffle flag.
    pub fn shuffled(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    // === Review mode ===

    /// Show the card under the cursor in a freshly filtered view.
    ///
    /// With shuffle on, the view is permuted before indexing on every call.
    pub fn advance(&mut self, store: &CardStore, filter: &CategoryFilter) -> ReviewView {
        let mut view = store.filtered(filter);
        if self.shuffle {
            shuffle_view(&mut view, &mut self.rng);
        }
        self.cursor.show(&view)
    }

    /// Reveal or hide the answer of the card `advance` last showed.
    pub fn flip(&mut self, store: &CardStore, filter: &CategoryFilter) -> FlipView {
        self.cursor.flip(&store.filtered(filter))
    }

    /// Grade the current card, step forward, then `advance`.
    ///
    /// The cursor wraps here and `advance` checks the bound again; both
    /// checks are kept.
    pub fn mark(
        &mut self,
        is_correct: bool,
        store: &CardStore,
        filter: &CategoryFilter,
    ) -> ReviewView {
        let view_len = store.filtered(filter).len();
        self.cursor.record(is_correct, view_len);
        self.advance(store, filter)
    }

    pub fn cursor(&self) -> &ReviewCursor {
        &self.cursor
    }

    // === Quiz mode ===

    /// Snapshot the filtered view and start a new quiz, replacing any other.
    pub fn start_quiz(&mut self, store: &CardStore, filter: &CategoryFilter) -> QuizView {
        let mut snapshot = store.filtered(filter);
        if self.shuffle {
            shuffle_view(&mut snapshot, &mut self.rng);
        }
        let (quiz, view) = QuizSession::start(snapshot);
        self.quiz = Some(quiz);
        view
    }

    /// Answer the current quiz question.
    pub fn submit_answer(&mut self, user_answer: &str) -> Result<QuizView> {
        self.quiz
            .as_mut()
            .ok_or_else(|| SessionError::invalid_state("no quiz in progress"))?
            .submit(user_answer)
    }

    pub fn quiz_progress(&self) -> Option<QuizProgress> {
        self.quiz.as_ref().map(QuizSession::progress)
    }

    // === Toggles ===

    /// Flip the shuffle flag and return its label.
    pub fn toggle_shuffle(&mut self) -> String {
        self.shuffle = !self.shuffle;
        shuffle_label(self.shuffle)
    }

    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for the shuffle button.
pub fn shuffle_label(enabled: bool) -> String {
    format!("Shuffle: {}", if enabled { "On" } else { "Off" })
}

/// Permute `view` uniformly at random (Fisher-Yates).
pub fn shuffle_view<R: Rng + ?Sized>(view: &mut [Flashcard], rng: &mut R) {
    view.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::FLIP_PROMPT;
    use crate::types::Category;
    use pretty_assertions::assert_eq;

    fn math_store() -> CardStore {
        let mut store = CardStore::new();
        store.add("1+1", "2", Category::Mathematics);
        store.add("2+2", "4", Category::Mathematics);
        store.add("3+3", "6", Category::Mathematics);
        store
    }

    fn numbered_store(n: usize) -> CardStore {
        let mut store = CardStore::new();
        for i in 0..n {
            store.add(format!("q{}", i), format!("a{}", i), Category::Other);
        }
        store
    }

    #[test]
    fn test_advance_empty_store() {
        let store = CardStore::new();
        let mut session = Session::with_seed(1);
        let view = session.advance(&store, &CategoryFilter::All);
        assert_eq!(view.question, "No flashcards found.");
        assert_eq!(view.progress, "0 cards");
        assert_eq!(view.streak, 0);
    }

    #[test]
    fn test_advance_shows_first_card() {
        let store = math_store();
        let mut session = Session::with_seed(1);
        let view = session.advance(&store, &CategoryFilter::from("Mathematics"));
        assert_eq!(
            view,
            ReviewView {
                question: "1+1".to_string(),
                answer: FLIP_PROMPT.to_string(),
                progress: "1/3 cards".to_string(),
                streak: 0,
            }
        );
    }

    #[test]
    fn test_mark_updates_streak() {
        let store = math_store();
        let filter = CategoryFilter::All;
        let mut session = Session::with_seed(1);

        let view = session.mark(true, &store, &filter);
        assert_eq!(view.streak, 1);
        assert_eq!(view.question, "2+2");
        assert_eq!(view.progress, "2/3 cards");

        let view = session.mark(true, &store, &filter);
        assert_eq!(view.streak, 2);

        let view = session.mark(false, &store, &filter);
        assert_eq!(view.streak, 0);
        assert_eq!(view.question, "1+1");
    }

    #[test]
    fn test_marking_through_deck_keeps_streak() {
        // The wrap inside mark does not forfeit the streak; only advance's own
        // out-of-range check does.
        let store = math_store();
        let mut session = Session::with_seed(1);
        for _ in 0..3 {
            session.mark(true, &store, &CategoryFilter::All);
        }
        assert_eq!(session.cursor().position, 0);
        assert_eq!(session.cursor().streak, 3);
    }

    #[test]
    fn test_advance_wraps_when_view_shrinks() {
        let mut store = math_store();
        store.add("Battle of Hastings?", "1066", Category::History);

        let mut session = Session::with_seed(1);
        session.mark(true, &store, &CategoryFilter::All);
        session.mark(true, &store, &CategoryFilter::All);
        assert_eq!(session.cursor().position, 2);
        assert_eq!(session.cursor().streak, 2);

        let view = session.advance(&store, &CategoryFilter::from("History"));
        assert_eq!(view.question, "Battle of Hastings?");
        assert_eq!(view.progress, "1/1 cards");
        assert_eq!(view.streak, 0);
    }

    #[test]
    fn test_mark_on_empty_filter_degrades() {
        let store = math_store();
        let mut session = Session::with_seed(1);
        let view = session.mark(true, &store, &CategoryFilter::from("Physics"));
        assert_eq!(view.question, "No flashcards found.");
        assert_eq!(view.progress, "0 cards");
        assert_eq!(view.streak, 1);
    }

    #[test]
    fn test_review_sees_cards_added_mid_session() {
        let mut store = math_store();
        let mut session = Session::with_seed(1);
        assert_eq!(session.advance(&store, &CategoryFilter::All).progress, "1/3 cards");

        store.add("4+4", "8", Category::Mathematics);
        assert_eq!(session.advance(&store, &CategoryFilter::All).progress, "1/4 cards");
    }

    #[test]
    fn test_double_flip_restores_display() {
        let store = math_store();
        let filter = CategoryFilter::All;
        let mut session = Session::with_seed(1);
        session.mark(true, &store, &filter);
        let before = session.cursor().clone();

        let shown = session.flip(&store, &filter);
        assert_eq!(shown.answer, "4");
        let hidden = session.flip(&store, &filter);
        assert_eq!(hidden.question, "2+2");
        assert_eq!(hidden.answer, FLIP_PROMPT);
        assert_eq!(session.cursor(), &before);
    }

    #[test]
    fn test_toggle_shuffle_labels() {
        let mut session = Session::with_seed(1);
        assert!(!session.shuffle_enabled());
        assert_eq!(session.toggle_shuffle(), "Shuffle: On");
        assert!(session.shuffle_enabled());
        assert_eq!(session.toggle_shuffle(), "Shuffle: Off");
    }

    #[test]
    fn test_shuffled_advance_varies() {
        let store = numbered_store(10);
        let mut session = Session::with_seed(42).shuffled(true);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..30 {
            let view = session.advance(&store, &CategoryFilter::All);
            assert_eq!(view.progress, "1/10 cards");
            seen.insert(view.question);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_shuffled_flip_matches_advanced_card() {
        let store = numbered_store(10);
        let filter = CategoryFilter::All;
        let mut session = Session::with_seed(42).shuffled(true);

        for _ in 0..20 {
            let shown = session.advance(&store, &filter);
            let flipped = session.flip(&store, &filter);
            assert_eq!(flipped.question, shown.question);
            assert_eq!(flipped.answer, shown.question.replacen('q', "a", 1));

            let hidden = session.flip(&store, &filter);
            assert_eq!(hidden.question, shown.question);
            assert_eq!(hidden.answer, FLIP_PROMPT);
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let store = numbered_store(8);
        let mut a = Session::with_seed(7).shuffled(true);
        let mut b = Session::with_seed(7).shuffled(true);
        for _ in 0..5 {
            assert_eq!(
                a.advance(&store, &CategoryFilter::All),
                b.advance(&store, &CategoryFilter::All)
            );
        }
    }

    #[test]
    fn test_math_quiz_scenario() {
        let store = math_store();
        let mut session = Session::with_seed(1);

        let start = session.start_quiz(&store, &CategoryFilter::from("Mathematics"));
        assert_eq!(start.prompt, "1+1");
        assert_eq!(start.answer_field, "");

        let first = session.submit_answer("2").unwrap();
        assert!(first.prompt.contains("Correct"));
        assert!(first.prompt.ends_with("2+2"));

        let second = session.submit_answer("5").unwrap();
        assert!(second.prompt.contains("4"));
        assert!(second.prompt.ends_with("3+3"));

        let done = session.submit_answer("6").unwrap();
        assert_eq!(done.prompt, "Quiz Done! Score: 2/3");

        assert!(matches!(
            session.submit_answer("7"),
            Err(SessionError::InvalidState(_))
        ));
    }

    #[test]
    fn test_submit_without_quiz() {
        let mut session = Session::with_seed(1);
        assert_eq!(
            session.submit_answer("2"),
            Err(SessionError::InvalidState("no quiz in progress".to_string()))
        );
    }

    #[test]
    fn test_start_quiz_empty() {
        let store = CardStore::new();
        let mut session = Session::with_seed(1);
        let view = session.start_quiz(&store, &CategoryFilter::All);
        assert_eq!(view.prompt, "No cards to quiz.");
        assert!(session.submit_answer("x").is_err());
    }

    #[test]
    fn test_quiz_snapshot_ignores_new_cards() {
        let mut store = math_store();
        let mut session = Session::with_seed(1);
        session.start_quiz(&store, &CategoryFilter::All);

        store.add("4+4", "8", Category::Mathematics);
        session.submit_answer("2").unwrap();
        session.submit_answer("4").unwrap();
        let done = session.submit_answer("6").unwrap();
        assert_eq!(done.prompt, "Quiz Done! Score: 3/3");
    }

    #[test]
    fn test_restart_resets_score() {
        let store = math_store();
        let mut session = Session::with_seed(1);
        session.start_quiz(&store, &CategoryFilter::All);
        session.submit_answer("2").unwrap();

        session.start_quiz(&store, &CategoryFilter::All);
        let progress = session.quiz_progress().unwrap();
        assert_eq!(progress.position, 0);
        assert_eq!(progress.score, 0);
        assert_eq!(progress.total, 3);
    }

    #[test]
    fn test_shuffled_quiz_is_permutation() {
        let store = numbered_store(12);
        let mut session = Session::with_seed(3).shuffled(true);
        session.start_quiz(&store, &CategoryFilter::All);

        let mut ids: Vec<u64> = session
            .quiz
            .as_ref()
            .unwrap()
            .snapshot
            .iter()
            .map(|c| c.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=12).collect::<Vec<u64>>());
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = math_store();
        let mut a = Session::with_seed(1);
        let mut b = Session::with_seed(1);
        a.mark(true, &store, &CategoryFilter::All);
        a.toggle_shuffle();

        assert_eq!(b.cursor().streak, 0);
        assert!(!b.shuffle_enabled());
        assert_eq!(b.advance(&store, &CategoryFilter::All).question, "1+1");
    }
}
