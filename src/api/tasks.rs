//! Task endpoints.

use crate::error::HttpFailure;

use super::client::ApiClient;
use super::models::{
    AssignTaskRequest, EmployeeTasksResponse, Task, TaskCreateRequest, TaskUpdateRequest,
    TaskUpdateStatusRequest,
};

impl ApiClient {
    pub async fn tasks(&self) -> Result<Vec<Task>, HttpFailure> {
        self.get("Task/AllTasks").await
    }

    pub async fn task_by_id(&self, id: i64) -> Result<Task, HttpFailure> {
        self.get(&format!("Task/{id}")).await
    }

    pub async fn tasks_by_project(&self, project_id: i64) -> Result<Vec<Task>, HttpFailure> {
        self.get(&format!("Task/ByProject/{project_id}")).await
    }

    pub async fn tasks_by_employee(
        &self,
        employee_id: i64,
    ) -> Result<EmployeeTasksResponse, HttpFailure> {
        self.get(&format!("Employees/{employee_id}/tasks")).await
    }

    pub async fn create_task(&self, payload: &TaskCreateRequest) -> Result<Task, HttpFailure> {
        self.post("Task/Create", payload).await
    }

    pub async fn update_task(
        &self,
        id: i64,
        payload: &TaskUpdateRequest,
    ) -> Result<Task, HttpFailure> {
        self.put(&format!("Task/Update/{id}"), payload).await
    }

    pub async fn update_task_status(
        &self,
        payload: &TaskUpdateStatusRequest,
    ) -> Result<Task, HttpFailure> {
        self.put("Task/UpdateStatus", payload).await
    }

    pub async fn assign_task(
        &self,
        payload: &AssignTaskRequest,
    ) -> Result<serde_json::Value, HttpFailure> {
        self.post("Task/Assign", payload).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), HttpFailure> {
        self.delete(&format!("Task/Delete/{id}")).await
    }
}
