//! Rapport Engine
//!
//! The stateful side of Rapport: a [`ScoreEngine`] owns the accumulated
//! session state and exposes operations to ingest interaction events and
//! to compute or report the composite health score.
//!
//! The engine is a single-writer object. It has no interior mutability and
//! no suspension points; if it is shared across threads the caller must
//! serialize access, since the update sequence is order-sensitive. One
//! engine per session is the intended shape.
//!
//! # Examples
//!
//! ```
//! use rapport_engine::ScoreEngine;
//!
//! let mut engine = ScoreEngine::default_config();
//! engine.record_trust(0.96, 0.97, 0.99)?;
//! engine.record_anchor("brazier_glow", 0.85)?;
//!
//! let score = engine.compute_score();
//! println!("{}", engine.summarize());
//! # assert!(score > 0.0);
//! # Ok::<(), rapport_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod report;
mod session;
mod snapshot;

pub use config::EngineConfig;
pub use engine::ScoreEngine;
pub use error::{EngineError, Result};
pub use report::HealthReport;
pub use session::SessionEvent;
pub use snapshot::{read_snapshot, write_snapshot};
