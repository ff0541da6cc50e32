//! Correlated purchase/pageview generation engine for shop-loadgen.
//!
//! The engine seeds a relational store with a reference population of users
//! and catalog items, then emits a paced stream of dual writes: one pageview
//! event published to an append-only stream, followed by the matching
//! purchase row inserted into the relational store. Foreign keys in every
//! write resolve against the seeded population, so downstream consumers
//! (CDC pipelines, stream processors) see referentially consistent load.
//!
//! The store and the stream sit behind two narrow traits ([`RelationalSink`]
//! and [`EventSink`]); driver-specific implementations live in sibling
//! crates.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod model;
pub mod rate;
pub mod seed;
pub mod sink;
pub mod testing;

pub use catalog::CatalogCache;
pub use engine::{GenerationConfig, GenerationEngine};
pub use error::{LoadGenError, RunAborted};
pub use model::{CatalogEntry, IdRange, NewItem, NewPurchase, NewUser, PageviewEvent};
pub use rate::{describe, RateSummary};
pub use seed::{seed, SeedOutcome};
pub use sink::{EventSink, RelationalSink};
