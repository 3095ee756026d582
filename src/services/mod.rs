//! Service layer: typed reqwest clients for the backend REST API plus the
//! few pieces of client-local state (bearer token, checklist progress).

pub mod api_client;
pub mod auth;
pub mod charges;
pub mod checklist;
pub mod documents;
pub mod invoices;
pub mod loads;
pub mod parties;
pub mod poller;
pub mod users;

pub use api_client::ApiClient;
pub use auth::AuthService;
pub use charges::ChargesEditor;
pub use checklist::{ChecklistQuery, ChecklistService, ProgressStore};
pub use documents::DocumentsService;
pub use invoices::InvoicesService;
pub use loads::LoadsService;
pub use parties::PartiesService;
pub use poller::StatusPoller;
pub use users::UsersService;
