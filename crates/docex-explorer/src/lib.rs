//! # docex-explorer
//!
//! The explorer's interaction core: the per-folder PIN gate and the
//! controller state machine that owns selection, dialog orchestration,
//! upload progress simulation, and cache invalidation.
//!
//! Rendering lives elsewhere; this crate only exposes observable state
//! (active folder, open dialog, progress, toasts) for a view to draw.

pub mod controller;
pub mod dialog;
pub mod feedback;
pub mod gate;
pub mod progress;

pub use controller::Explorer;
pub use dialog::{Dialog, FolderDialogMode};
pub use feedback::{Toast, ToastLevel};
pub use gate::AccessGate;
