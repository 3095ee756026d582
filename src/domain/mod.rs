//! Domain types and wire DTOs
//!
//! These mirror the backend's JSON shapes (camelCase field names, a few
//! legacy spellings like `equipements` preserved on the wire).

pub mod charges;
pub mod checklist;
pub mod customs;
pub mod invoices;
pub mod loads;
pub mod parties;
pub mod users;

// Re-export commonly used types
pub use charges::*;
pub use checklist::*;
pub use customs::*;
pub use invoices::*;
pub use loads::*;
pub use parties::*;
pub use users::*;
