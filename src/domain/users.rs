//! Back-office user accounts and roles.

use serde::{Deserialize, Serialize};

/// Role names travel wrapped in single-field objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub role: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub roles: Vec<Role>,
}

impl User {
    /// Flat role names, the shape the edit form's multi-select works with.
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.role.as_str()).collect()
    }
}

/// Submit shape for create and update. The backend assigns `userId`;
/// password is blank on update (the server keeps the existing one).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<Role>,
}

impl UserPayload {
    pub fn new(username: &str, email: &str, password: &str, roles: &[String]) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            roles: roles
                .iter()
                .map(|r| Role { role: r.clone() })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn payload_wraps_role_names_and_omits_user_id() {
        let payload = UserPayload::new(
            "dispatch1",
            "dispatch@example.com",
            "s3cret",
            &["ADMIN".to_string(), "DISPATCH".to_string()],
        );
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "dispatch1",
                "email": "dispatch@example.com",
                "password": "s3cret",
                "roles": [{"role": "ADMIN"}, {"role": "DISPATCH"}],
            })
        );
    }

    #[test]
    fn user_decodes_wire_shape() {
        let user: User = serde_json::from_value(json!({
            "userId": "u-42",
            "username": "dispatch1",
            "email": "dispatch@example.com",
            "roles": [{"role": "DISPATCH"}],
        }))
        .unwrap();
        assert_eq!(user.user_id, "u-42");
        assert_eq!(user.role_names(), vec!["DISPATCH"]);
    }
}
