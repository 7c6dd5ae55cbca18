//! Infrastructure layer - remote collaborator implementations

pub mod store;
