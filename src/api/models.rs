//! DTOs for the backend REST API, field-for-field with its JSON contract
//! (camelCase keys, nullable strings as options).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeReadDto {
    pub employee_id: i64,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub department_name: String,
    pub phone_no: String,
    pub department_id: i64,
    pub is_profile_completed: bool,
    pub is_active: bool,
    pub degree_certificate_path: Option<String>,
    pub plus_two_certificate_path: Option<String>,
    pub ssl_certificate_path: Option<String>,
    pub experience_certificate_path: Option<String>,
    pub passport_path: Option<String>,
    pub aadhar_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEmployee {
    pub user_profile_id: i64,
    pub full_name: String,
    pub email: String,
    pub gender: String,
    pub age: u32,
    pub department_id: i64,
    pub user_status_id: i64,
    pub user_status: Option<String>,
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedEmployees {
    pub data: Vec<EmployeeReadDto>,
    pub total_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCounts {
    pub departments: i64,
    pub employees_approved: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeptStat {
    pub department: String,
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub total_employees: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_id: i64,
    pub department_name: String,
    pub description: String,
    pub head_of_department: String,
    /// Active / Inactive.
    pub status: String,
    #[serde(default)]
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeptCount {
    pub department_id: i64,
    pub department_name: String,
    pub employee_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: i64,
    pub project_name: String,
    pub deadline: NaiveDateTime,
    pub description: String,
    pub department_id: i64,
    #[serde(default)]
    pub project_status_id: Option<i64>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub manager_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateRequest {
    pub project_name: String,
    pub deadline: NaiveDateTime,
    pub description: String,
    pub department_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdateRequest {
    pub project_id: i64,
    pub project_name: String,
    pub deadline: NaiveDateTime,
    pub description: String,
    pub department_id: i64,
    pub project_status_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_item_id: i64,
    pub task_name: String,
    pub project_id: i64,
    #[serde(default)]
    pub project_name: Option<String>,
    pub assigned_to_employee_id: i64,
    #[serde(default)]
    pub assigned_to_employee_name: Option<String>,
    pub assigned_by_user_id: String,
    #[serde(default)]
    pub assigned_by_user_name: Option<String>,
    pub deadline: NaiveDateTime,
    pub task_priority_id: i64,
    pub priority: String,
    #[serde(default)]
    pub task_priority_name: Option<String>,
    pub description: String,
    pub task_type_id: i64,
    pub task_type_name: String,
    pub task_status_id: i64,
    pub task_status_name: String,
    pub status: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
    #[serde(default)]
    pub spent_time: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateRequest {
    pub task_name: String,
    pub project_id: i64,
    pub assigned_to_employee_id: i64,
    pub deadline: NaiveDateTime,
    pub task_priority_id: i64,
    pub description: String,
    pub task_type_id: i64,
    pub task_status_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateRequest {
    pub task_item_id: i64,
    pub assigned_to_employee_id: i64,
    pub task_name: String,
    pub deadline: NaiveDateTime,
    pub task_priority_id: i64,
    pub description: String,
    pub project_id: i64,
    pub task_type_id: i64,
    pub task_status_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateStatusRequest {
    pub task_item_id: i64,
    pub task_status_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskRequest {
    pub task_item_id: i64,
    pub assigned_to_employee_id: i64,
    pub assigned_by_user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTasksResponse {
    pub employee_id: i64,
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_dto_parses_backend_json() {
        let dto: EmployeeReadDto = serde_json::from_str(
            r#"{
                "employeeId": 4, "fullName": "A. Person", "email": "a@corp.test",
                "username": "aperson", "departmentName": "HR", "phoneNo": "555",
                "departmentId": 2, "isProfileCompleted": true, "isActive": true,
                "degreeCertificatePath": null, "plusTwoCertificatePath": null,
                "sslCertificatePath": null, "experienceCertificatePath": null,
                "passportPath": "/files/p.pdf", "aadharPath": null
            }"#,
        )
        .unwrap();
        assert_eq!(dto.employee_id, 4);
        assert!(dto.is_profile_completed);
        assert_eq!(dto.passport_path.as_deref(), Some("/files/p.pdf"));
    }

    #[test]
    fn project_parses_unzoned_backend_dates() {
        let p: Project = serde_json::from_str(
            r#"{
                "projectId": 1, "projectName": "Intranet", "deadline": "2026-01-31T00:00:00",
                "description": "internal portal", "departmentId": 2,
                "startDate": "2025-11-01T09:30:00"
            }"#,
        )
        .unwrap();
        assert_eq!(p.deadline.format("%Y-%m-%d").to_string(), "2026-01-31");
        assert!(p.start_date.is_some());
        assert!(p.department_name.is_none());
    }

    #[test]
    fn requests_serialize_with_camel_case_keys() {
        let req = TaskUpdateStatusRequest { task_item_id: 9, task_status_id: 3 };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["taskItemId"], 9);
        assert_eq!(json["taskStatusId"], 3);
    }
}
