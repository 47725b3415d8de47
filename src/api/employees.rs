//! Employee endpoints: the signed-in employee's own profile surface plus the
//! admin-facing CRUD and statistics calls.

use crate::error::HttpFailure;

use super::client::ApiClient;
use super::models::{
    ChangePasswordRequest, DeptStat, EmployeeCounts, EmployeeReadDto, PagedEmployees,
};

impl ApiClient {
    pub async fn active_employees(&self) -> Result<Vec<EmployeeReadDto>, HttpFailure> {
        self.get("Employees/getallemployeesactive").await
    }

    pub async fn employee_by_id(&self, id: i64) -> Result<EmployeeReadDto, HttpFailure> {
        self.get(&format!("Employees/{id}")).await
    }

    pub async fn paged_employees(
        &self,
        search: &str,
        page: u32,
        page_size: u32,
        include_inactive: bool,
    ) -> Result<PagedEmployees, HttpFailure> {
        let mut query: Vec<(&str, String)> = vec![
            ("page", page.to_string()),
            ("pageSize", page_size.to_string()),
            ("includeInactive", include_inactive.to_string()),
        ];
        if !search.is_empty() {
            query.push(("search", search.to_string()));
        }
        self.get_with_query("Employees/paged", &query).await
    }

    pub async fn create_employee(
        &self,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, HttpFailure> {
        self.post("Employees", payload).await
    }

    /// Update an employee profile. Multipart because the payload can carry
    /// certificate uploads alongside the fields.
    pub async fn update_employee(
        &self,
        id: i64,
        form: reqwest::multipart::Form,
    ) -> Result<EmployeeReadDto, HttpFailure> {
        self.put_form(&format!("Employees/{id}"), form).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), HttpFailure> {
        self.delete(&format!("Employees/{id}")).await
    }

    pub async fn activate_employee(&self, id: i64) -> Result<(), HttpFailure> {
        self.patch(&format!("Employees/{id}/activate"), &serde_json::json!({}))
            .await
    }

    pub async fn employee_counts(&self) -> Result<EmployeeCounts, HttpFailure> {
        self.get("Employees/counts").await
    }

    pub async fn employees_by_department(&self) -> Result<Vec<DeptStat>, HttpFailure> {
        self.get("Employees/stats/by-department").await
    }

    pub async fn change_password(
        &self,
        payload: &ChangePasswordRequest,
    ) -> Result<serde_json::Value, HttpFailure> {
        self.post("UserProfile/change-password", payload).await
    }
}
