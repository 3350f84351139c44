//! Rapport Domain Layer
//!
//! This crate contains the core domain model and deterministic score math
//! for Rapport. It is pure computation: no I/O, no clocks, no interior
//! mutability. The only external dependency is serde, so that engine state
//! can round-trip through snapshots.
//!
//! ## Key Concepts
//!
//! - **TrustSample**: one interaction's quality inputs plus the smoothed
//!   trust value immediately after the sample was applied
//! - **Anchor**: a tagged marker of a subjectively novel moment
//! - **EngineState**: the two append-only event sequences; order defines
//!   recency and fully determines the score
//! - **HealthStatus**: three-band classification of the composite score
//!
//! ## Architecture
//!
//! Stateful ingestion and reporting live in `rapport-engine`; this crate
//! only defines the values and the arithmetic.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod anchor;
pub mod sample;
pub mod scoring;
pub mod state;
pub mod status;

// Re-exports for convenience
pub use anchor::Anchor;
pub use sample::TrustSample;
pub use scoring::{ScoreBreakdown, ScoreParams};
pub use state::EngineState;
pub use status::HealthStatus;
