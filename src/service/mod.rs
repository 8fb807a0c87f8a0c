//! Service layer for business logic orchestration
//!
//! Runs the publish plan on behalf of the CLI layer in main.rs.

pub mod publish;

pub use publish::{PublishPlan, PublishReport, PublishService};
