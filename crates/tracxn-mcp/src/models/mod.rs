//! Tool input models.
//!
//! All inputs use `#[serde(default)]` so that absent keys become `None` and the
//! dispatcher can report missing arguments with its own wording.

mod inputs;

pub use inputs::*;
