//! Core flashcard library shared by the backend and any UI front end.
//!
//! Provides:
//! - In-memory card store with category filtering
//! - Review mode cursor with correctness streak
//! - Scored quiz over a fixed snapshot
//! - Per-learner session engine with seedable shuffle
//! - Answer matching and theme toggle helpers

pub mod error;
pub mod matching;
pub mod quiz;
pub mod review;
pub mod session;
pub mod store;
pub mod theme;
pub mod types;

pub use error::{Result, SessionError};
pub use matching::{answers_match, normalize_answer};
pub use quiz::QuizSession;
pub use review::{ReviewCursor, FLIP_PROMPT};
pub use session::{shuffle_label, shuffle_view, Session};
pub use store::{added_message, CardStore};
pub use theme::{toggle_theme, Theme};
pub use types::{
    Category, CategoryFilter, Flashcard, FlipView, QuizProgress, QuizView, ReviewView,
};
