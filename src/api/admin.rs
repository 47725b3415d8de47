//! Admin-only endpoints: pending registration requests and headline counts.

use serde::Deserialize;

use crate::error::HttpFailure;

use super::client::ApiClient;
use super::models::{DeptCount, EmployeeSummary, PendingEmployee};

#[derive(Debug, Deserialize)]
struct PendingEnvelope {
    users: Vec<PendingEmployee>,
}

impl ApiClient {
    /// Registration requests awaiting review; the backend wraps the list in a
    /// `users` envelope.
    pub async fn pending_employees(&self) -> Result<Vec<PendingEmployee>, HttpFailure> {
        let envelope: PendingEnvelope = self.get("UserProfile/get_pending_requests").await?;
        Ok(envelope.users)
    }

    pub async fn approve_employee(&self, user_profile_id: i64) -> Result<(), HttpFailure> {
        let payload = serde_json::json!({
            "userProfileId": user_profile_id,
            "isApproved": true,
        });
        let _: serde_json::Value = self.post("UserProfile/approve_reject_requests", &payload).await?;
        Ok(())
    }

    pub async fn reject_employee(
        &self,
        user_profile_id: i64,
        reason: Option<&str>,
    ) -> Result<(), HttpFailure> {
        let payload = serde_json::json!({
            "userProfileId": user_profile_id,
            "isApproved": false,
            "rejectionReason": reason,
            "generatedPassword": null,
        });
        let _: serde_json::Value = self.post("UserProfile/approve_reject_requests", &payload).await?;
        Ok(())
    }

    pub async fn employee_summary(&self) -> Result<EmployeeSummary, HttpFailure> {
        self.get("Department/employeecounttotal").await
    }

    pub async fn department_employee_counts(&self) -> Result<Vec<DeptCount>, HttpFailure> {
        self.get("Department/departmentwiseemployeecount").await
    }
}
