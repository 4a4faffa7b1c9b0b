//! # docex-cache
//!
//! In-process query cache for the document explorer, built on
//! [moka](https://crates.io/crates/moka).
//!
//! The explorer never patches or merges a cached listing. Every mutation
//! invalidates the affected query key, and the next read re-fetches the
//! whole list from the API ("stale-while-invalidate" in its simplest
//! form: invalidation removes the entry outright).

pub mod keys;
pub mod store;

pub use store::QueryCache;
