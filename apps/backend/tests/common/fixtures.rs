//! Request body factories.

use serde_json::json;

/// Create an add card request body.
pub fn add_card_request(question: &str, answer: &str, category: &str) -> serde_json::Value {
    json!({
        "question": question,
        "answer": answer,
        "category": category
    })
}

/// Create a session request body.
pub fn create_session_request(seed: Option<u64>, shuffle: Option<bool>) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    if let Some(s) = seed {
        obj.insert("seed".to_string(), json!(s));
    }
    if let Some(s) = shuffle {
        obj.insert("shuffle".to_string(), json!(s));
    }
    serde_json::Value::Object(obj)
}

/// Create a category filter request body. Empty means all cards.
pub fn filter_request(category: &str) -> serde_json::Value {
    json!({ "category": category })
}

/// Create a mark request body.
pub fn mark_request(correct: bool, category: &str) -> serde_json::Value {
    json!({ "correct": correct, "category": category })
}

/// Create a quiz answer request body.
pub fn answer_request(answer: &str) -> serde_json::Value {
    json!({ "answer": answer })
}
