//! Backend services.

pub mod sessions;

pub use sessions::SessionRegistry;
