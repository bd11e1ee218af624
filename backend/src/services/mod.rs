//! Module for core business logic services.
//!
//! This module encapsulates services that own application state and enforce
//! its rules, such as the activity roster that signup and unregister mutate.

pub mod activity_registry;

pub use activity_registry::{Activity, ActivityRegistry, RegistryError};
