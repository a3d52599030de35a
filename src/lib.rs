//! Round-robin lunch pairing for small teams.
//!
//! Given an even roster, produces a schedule of working days on which every
//! employee lunches with every other employee exactly once, one partner per
//! day. Pairings come from the circle method over a shuffled roster; lunch
//! days skip the weekend.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `LunchTeam`, `LunchDay`,
//!   `LunchSchedule`, `Calendar`
//! - **`scheduler`**: Round-robin generation and pairing reports
//! - **`validation`**: Roster integrity checks (size, blank and duplicate names)
//! - **`roster`**: Roster sources (static lists, JSON files, placeholder names)
//! - **`store`**: Generated, loaded, and shown schedules with employee filtering
//! - **`persistence`**: JSON snapshots and the on-disk schedule archive
//! - **`worker`**: Off-thread generation for async callers
//! - **`config`**: TOML settings (date format, archive naming, weekend, seed)
//! - **`error`**: The `LunchError` taxonomy
//!
//! # Architecture
//!
//! Generation is a pure function of roster, start date, calendar, and random
//! source. The store owns all mutable state and is driven by explicit calls;
//! each change recomputes the shown schedule and notifies listeners.
//! Persistence is an adapter over the store, never a dependency of it.
//!
//! # References
//!
//! - Lucas (1883), "Récréations mathématiques", Vol. II (circle method)
//! - Dinitz, Froncek, Lamken & Wallis (2006), "Scheduling a Tournament",
//!   in Handbook of Combinatorial Designs

pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod roster;
pub mod scheduler;
pub mod store;
pub mod validation;
pub mod worker;

pub use error::{LunchError, Result};
