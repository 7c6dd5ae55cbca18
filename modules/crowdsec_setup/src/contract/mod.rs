//! Contract layer - public API for the setup form
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::SetupApi;
pub use error::SetupError;
pub use model::{
    is_supported_batch_size, DeliveryMode, SettingsAction, SettingsValue, SubmitOutcome,
    DEFAULT_BATCH_SIZE, SUPPORTED_BATCH_SIZES,
};
