//! Order Assembly Module
//!
//! This module turns final cart state into the order-creation contract:
//! - Wire models for order items and the submission payload
//! - Submission against the backend with explicit post-success handling

pub mod models;
pub mod service;

// Re-export commonly used types for convenience
pub use models::{OrderItem, OrderSubmission, PlacedOrder};
pub use service::{build_submission, OrderService};
