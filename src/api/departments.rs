//! Department endpoints.

use crate::error::HttpFailure;

use super::client::ApiClient;
use super::models::Department;

impl ApiClient {
    pub async fn departments(&self) -> Result<Vec<Department>, HttpFailure> {
        self.get("Department/sp/GetAllDepartments").await
    }

    pub async fn department_by_id(&self, id: i64) -> Result<Department, HttpFailure> {
        self.get(&format!("Department/{id}")).await
    }

    pub async fn search_departments(&self, name: &str) -> Result<Vec<Department>, HttpFailure> {
        self.get_with_query("Department/search", &[("name", name)]).await
    }

    pub async fn active_departments(&self) -> Result<Vec<Department>, HttpFailure> {
        self.get("Department/GetActiveDepartments").await
    }

    /// Create a department. Multipart because the payload can carry the
    /// department image alongside the fields.
    pub async fn create_department(
        &self,
        form: reqwest::multipart::Form,
    ) -> Result<Department, HttpFailure> {
        self.post_form("Department/CreateDepartment", form).await
    }

    pub async fn update_department(
        &self,
        id: i64,
        form: reqwest::multipart::Form,
    ) -> Result<Department, HttpFailure> {
        self.put_form(&format!("Department/UpdateDepartment/{id}"), form).await
    }

    pub async fn delete_department(&self, id: i64) -> Result<(), HttpFailure> {
        self.delete(&format!("Department/DeleteDepartment/{id}")).await
    }
}
