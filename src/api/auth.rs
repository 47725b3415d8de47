//! Login and registration endpoints.

use serde::{Deserialize, Serialize};

use crate::error::HttpFailure;
use crate::identity::Role;

use super::client::ApiClient;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub dashboard_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployeeRequest {
    pub full_name: String,
    pub email: String,
    pub age: u32,
    pub department_id: i64,
    pub gender: Gender,
}

impl ApiClient {
    /// Authenticate against the backend. Does not touch the session store:
    /// on success the caller feeds the returned token to
    /// `SessionStore::set_session`.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, HttpFailure> {
        self.post("Auth/login", payload).await
    }

    pub async fn register_employee(
        &self,
        payload: &RegisterEmployeeRequest,
    ) -> Result<serde_json::Value, HttpFailure> {
        self.post("UserProfile/register_employee", payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_parses_backend_shape() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"token": "a.b.c", "role": "Admin", "dashboardUrl": "/admin"}"#,
        )
        .unwrap();
        assert_eq!(resp.role, Role::Admin);
        assert_eq!(resp.dashboard_url, "/admin");
    }

    #[test]
    fn register_request_serializes_gender_as_plain_variant() {
        let req = RegisterEmployeeRequest {
            full_name: "A. Person".into(),
            email: "a@corp.test".into(),
            age: 30,
            department_id: 2,
            gender: Gender::Other,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["gender"], "Other");
        assert_eq!(json["departmentId"], 2);
        assert_eq!(json["fullName"], "A. Person");
    }
}
