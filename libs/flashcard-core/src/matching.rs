//! Answer matching for quiz mode.

/// Normalize an answer for comparison (trim and lowercase).
///
/// Interior whitespace is left alone.
pub fn normalize_answer(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Compare a typed answer to the correct answer.
pub fn answers_match(typed: &str, correct: &str) -> bool {
    normalize_answer(typed) == normalize_answer(correct)
}
