//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext owning a fresh in-memory app state and test server
//! - Helpers for adding cards and opening sessions over HTTP

pub mod fixtures;

use axum_test::TestServer;
use serde_json::Value;
use uuid::Uuid;

use brain_bites_backend::config::Config;
use brain_bites_backend::{build_router, AppState};

/// Test context with its own card store and session registry.
pub struct TestContext {
    pub state: AppState,
    pub server: TestServer,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(config);
        let server =
            TestServer::new(build_router(state.clone())).expect("Failed to start test server");
        Self { state, server }
    }

    /// Add a card through the API.
    pub async fn add_card(&self, question: &str, answer: &str, category: &str) -> Value {
        let response = self
            .server
            .post("/api/cards")
            .json(&fixtures::add_card_request(question, answer, category))
            .await;
        response.assert_status_ok();
        response.json()
    }

    /// Open a session with a fixed seed and return its ID.
    pub async fn create_session(&self, seed: u64) -> Uuid {
        let response = self
            .server
            .post("/api/sessions")
            .json(&fixtures::create_session_request(Some(seed), None))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        body["session_id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("session_id should be a UUID")
    }

    /// Add the three-card Mathematics deck used across tests.
    pub async fn seed_math_deck(&self) {
        self.add_card("1+1", "2", "Mathematics").await;
        self.add_card("2+2", "4", "Mathematics").await;
        self.add_card("3+3", "6", "Mathematics").await;
    }

    pub fn session_path(session_id: Uuid, suffix: &str) -> String {
        format!("/api/sessions/{}{}", session_id, suffix)
    }
}
