//! Rapport Sentinel
//!
//! A small keyword-safety screener: given one or two free-text strings,
//! it returns a binary verdict based on case-insensitive substring match
//! against a configurable denylist of harm-related phrases.
//!
//! The sentinel is deliberately independent of the score engine; the two
//! are separate utilities that happen to share a codebase. The engine
//! never consults the sentinel.
//!
//! # Examples
//!
//! ```
//! use rapport_sentinel::{Sentinel, Verdict};
//!
//! let sentinel = Sentinel::default_config();
//! assert_eq!(sentinel.screen("a quiet evening", None), Verdict::Clear);
//! assert!(matches!(
//!     sentinel.screen("they want to destroy it", None),
//!     Verdict::Flagged { .. }
//! ));
//! ```

#![warn(missing_docs)]

mod config;
mod screener;

pub use config::ScreenConfig;
pub use screener::{Sentinel, Verdict};
