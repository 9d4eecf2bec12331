//! # reaction-service
//!
//! Application layer: reaction operations bound to a registered reaction type,
//! the reaction entity cache, and startup wiring.

pub mod services;

pub use services::{
    bootstrap, registry_from_definitions, ReactionCache, ReactionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
