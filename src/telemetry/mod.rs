//! Synthetic observability telemetry for the intake demo.
//!
//! # STRUCTURE INVARIANT
//! For a fixed roster, the generated stream's *shape* is deterministic:
//! event kinds, ordering, counts per record, and timestamp offsets never
//! vary between runs. Only metric sample values are randomized, and those
//! come from an injected RNG so tests can pin them.
//!
//! # DERIVATION INVARIANT
//! Every embedded support category is computed fresh through
//! `crate::classify::classify`. The generator never re-derives the
//! threshold arithmetic itself.

pub mod event;
pub mod generator;
pub mod recorder;
