//! Scoring engine - pure, deterministic, and testable
//!
//! This crate contains the full ten-pin scoring logic. It has zero
//! dependencies on UI, persistence, or I/O, which keeps it:
//!
//! - **Deterministic**: the same throw tokens always produce the same record
//! - **Testable**: every rule is exercised without a terminal or file system
//! - **Portable**: usable from the TUI, tests, and benchmarks alike
//!
//! # Module structure
//!
//! - [`grammar`]: which tokens are legal per ball, and their canonical symbol
//! - [`sequence`]: the fixed 21-slot pin sequence
//! - [`recorder`]: cursor advance rules, including the frame-ten sub-machine
//! - [`scorer`]: cumulative frame scores with strike/spare lookahead
//! - [`projector`]: best-reachable final score over a scratch completion
//! - [`validate`]: load-time invariant checks with local repair
//! - [`record`]: the game record facade tying the pieces together
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::{GameRecord, ThrowOutcome};
//!
//! let mut record = GameRecord::fresh("demo");
//! assert_eq!(record.record_throw("10"), ThrowOutcome::Recorded);
//! assert_eq!(record.record_throw("7"), ThrowOutcome::Recorded);
//! assert_eq!(record.record_throw("/"), ThrowOutcome::Recorded);
//!
//! // The strike now has its two bonus balls: 10 + 7 + 3.
//! assert_eq!(record.scores.frame(1), Some(20));
//! // An illegal token is rejected and changes nothing.
//! assert_eq!(record.record_throw("99"), ThrowOutcome::Rejected);
//! ```

pub mod grammar;
pub mod projector;
pub mod record;
pub mod recorder;
pub mod scorer;
pub mod sequence;
pub mod validate;

pub use tui_bowling_types as types;

// Re-export commonly used items for convenience
pub use grammar::{normalize, role_at, BallRole};
pub use projector::project_max;
pub use record::{sanitize_name, ArchivedGame, GameRecord, ThrowOutcome};
pub use recorder::record;
pub use scorer::{score, Scoreboard};
pub use sequence::PinSequence;
pub use validate::{repair, RepairReport};
