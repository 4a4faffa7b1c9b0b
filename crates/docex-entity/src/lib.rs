//! # docex-entity
//!
//! Domain entity models for the HMFM document explorer. Every struct in
//! this crate represents an API record or a client-derived value object.
//! All entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod collate;
pub mod file;
pub mod folder;
pub mod session;
