//! # Statline
//!
//! Derives a display-ready statistics model from one raw, loosely
//! structured player profile.
//!
//! ## Architecture
//!
//! - **profile**: raw document access with get-or-default semantics
//! - **config**: static tables (prestiges, titles, divisions, classes)
//! - **calculate**: ratio/percentage helpers and the per-game XP curves
//! - **rank**: display-rank resolution
//! - **models**: tables, progress bars, prestige state, stats maps
//! - **games**: the per-mode extractors and the aggregation orchestrator
//!
//! The engine is a pure function of `(RawProfile, StaticConfig)`: it does
//! no I/O and keeps no state between invocations.
//!
//! ```
//! use statline::{derive_stats, RawProfile, StaticConfig};
//!
//! let profile = RawProfile::from_json(r#"{"player": {}}"#).unwrap();
//! let config = StaticConfig::default();
//! let derived = derive_stats(&profile, &config);
//! assert!(derived.get("bedwars.level").is_some());
//! ```

pub mod calculate;
pub mod config;
pub mod games;
pub mod models;
pub mod profile;
pub mod rank;

pub use config::{ConfigError, StaticConfig};
pub use games::{derive_stats, GameMode};
pub use models::{DerivedStats, Stats};
pub use profile::{ProfileError, RawProfile};
pub use rank::{get_rank, Rank};
