//! HTTP route handlers.

pub mod cards;
pub mod quiz;
pub mod review;
pub mod sessions;
pub mod theme;
