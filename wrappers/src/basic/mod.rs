//!
//! # Basic Data Structures
//!
//! Persistent collections built directly on an [`Engine`](crate::Engine).
//! Each instance lives in its own [`Namespace`](crate::Namespace), so many
//! of them can share one database.
//!

pub mod list;
pub mod queue;
pub mod set;
