//! Artifact derivation from the finalized schema.
//!
//! Each deriver is an independent, total function of the enhanced
//! [`DesignSchema`](crate::schema::DesignSchema): it never sees raw
//! signals and never mutates shared state, so the three can run in any
//! order, or not at all, per pipeline configuration.

pub mod ai;
pub mod code;
pub mod docs;

pub use ai::{AiConsumption, AiView, Descriptions};
pub use code::CodeSnippets;
