use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Employee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Pending,
    Approved,
    Rejected,
}

/// The application's view of the logged-in user: token-derived claims plus
/// whatever the locally persisted overlay has filled in since login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalUser {
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
}

impl LocalUser {
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
            status: None,
            profile_complete: None,
            employee_id: None,
            full_name: None,
            department_name: None,
        }
    }

    /// Merge `patch` on top of this user. Defined patch fields win on a
    /// per-field basis; undefined fields never erase what is already present.
    pub fn merged_with(&self, patch: &UserPatch) -> LocalUser {
        LocalUser {
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            role: patch.role.unwrap_or(self.role),
            status: patch.status.or(self.status),
            profile_complete: patch.profile_complete.or(self.profile_complete),
            employee_id: patch.employee_id.or(self.employee_id),
            full_name: patch.full_name.clone().or_else(|| self.full_name.clone()),
            department_name: patch.department_name.clone().or_else(|| self.department_name.clone()),
        }
    }
}

/// Partial user record: the persisted overlay, and the argument shape for
/// local identity updates. All fields optional so an overlay written by an
/// older build (or a sparse one) still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
}

impl From<&LocalUser> for UserPatch {
    fn from(user: &LocalUser) -> Self {
        UserPatch {
            email: Some(user.email.clone()),
            role: Some(user.role),
            status: user.status,
            profile_complete: user.profile_complete,
            employee_id: user.employee_id,
            full_name: user.full_name.clone(),
            department_name: user.department_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_defined_fields_win() {
        let base = LocalUser {
            profile_complete: Some(false),
            full_name: Some("A. Person".into()),
            ..LocalUser::new("a@corp.test", Role::Employee)
        };
        let patch = UserPatch {
            profile_complete: Some(true),
            department_name: Some("Engineering".into()),
            ..UserPatch::default()
        };
        let merged = base.merged_with(&patch);
        assert_eq!(merged.profile_complete, Some(true));
        assert_eq!(merged.department_name.as_deref(), Some("Engineering"));
        // Undefined patch fields keep the base values.
        assert_eq!(merged.full_name.as_deref(), Some("A. Person"));
        assert_eq!(merged.email, "a@corp.test");
        assert_eq!(merged.role, Role::Employee);
    }

    #[test]
    fn merge_empty_patch_is_identity() {
        let base = LocalUser {
            status: Some(UserStatus::Approved),
            employee_id: Some(7),
            ..LocalUser::new("a@corp.test", Role::Admin)
        };
        assert_eq!(base.merged_with(&UserPatch::default()), base);
    }

    #[test]
    fn overlay_serialization_uses_camel_case_keys() {
        let patch = UserPatch {
            email: Some("a@corp.test".into()),
            role: Some(Role::Employee),
            profile_complete: Some(true),
            employee_id: Some(12),
            full_name: Some("A. Person".into()),
            department_name: Some("HR".into()),
            ..UserPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["profileComplete"], true);
        assert_eq!(json["employeeId"], 12);
        assert_eq!(json["fullName"], "A. Person");
        assert_eq!(json["departmentName"], "HR");
        assert_eq!(json["role"], "Employee");
        assert!(json.get("status").is_none());
    }

    #[test]
    fn sparse_overlay_still_loads() {
        let patch: UserPatch = serde_json::from_str(r#"{"fullName":"A. Person"}"#).unwrap();
        assert_eq!(patch.full_name.as_deref(), Some("A. Person"));
        assert_eq!(patch.role, None);
    }
}
