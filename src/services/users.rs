//! Administration of back-office user accounts.
//!
//! User ids are opaque strings assigned by the backend; roles are a fixed
//! server-side list the edit form multi-selects from. Callers re-fetch the
//! list after a write rather than trusting a returned body.

use crate::domain::{Role, User, UserPayload};
use crate::error::ClientResult;

use super::api_client::ApiClient;

#[derive(Clone)]
pub struct UsersService {
    api: ApiClient,
}

impl UsersService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn users(&self) -> ClientResult<Vec<User>> {
        self.api.get("/users").await
    }

    pub async fn user(&self, id: &str) -> ClientResult<User> {
        self.api.get(&format!("/users/{id}")).await
    }

    pub async fn roles(&self) -> ClientResult<Vec<Role>> {
        self.api.get("/roles").await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> ClientResult<()> {
        self.api.post_unit("/users", payload).await
    }

    pub async fn update_user(&self, id: &str, payload: &UserPayload) -> ClientResult<()> {
        self.api.put_unit(&format!("/users/{id}"), &[], payload).await
    }

    pub async fn delete_user(&self, id: &str) -> ClientResult<()> {
        self.api.delete(&format!("/users/{id}")).await
    }
}
