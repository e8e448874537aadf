//! Bucket: shrink-only random-extraction pools.
//!
//! A [`RandomPool`] holds an unordered multiset of items and hands them out
//! one at a time, each remaining item being equally likely. Pools are never
//! refilled. The randomness is an injected [`RandomSource`] so callers can
//! swap the OS-seeded generator for a seeded or scripted one.

mod error;
mod pool;
mod source;

pub use error::{BucketError, Result};
pub use pool::RandomPool;
pub use source::{RandomSource, ScriptedSource, StdRngSource};
