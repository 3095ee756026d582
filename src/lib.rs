//! Client-side orchestration layer for the LoadDesk transportation-management
//! backend.
//!
//! The backend owns persistence, validation, business rules, PDF generation
//! and authentication; this crate owns what the screens need between a fetch
//! and a save: the load-editor form state, the derived financial and freight
//! computations that must stay consistent with it, and typed HTTP clients for
//! every endpoint the screens consume.

pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod form;
pub mod logging;
pub mod services;

pub use error::{ClientError, ClientResult};
