//! Project endpoints. Listings are enriched client-side with department
//! names, since the backend returns only `departmentId` on project records.

use std::collections::HashMap;

use crate::error::HttpFailure;

use super::client::ApiClient;
use super::models::{Project, ProjectCreateRequest, ProjectUpdateRequest};

const UNKNOWN_DEPARTMENT: &str = "Unknown Department";

impl ApiClient {
    /// All projects, each annotated with its department's name. A failing
    /// department lookup degrades to "Unknown Department" rather than failing
    /// the listing.
    pub async fn projects(&self) -> Result<Vec<Project>, HttpFailure> {
        let mut projects: Vec<Project> = self.get("Project/GetAll").await?;
        let names: HashMap<i64, String> = match self.departments().await {
            Ok(departments) => departments
                .into_iter()
                .map(|d| (d.department_id, d.department_name))
                .collect(),
            Err(e) => {
                tracing::warn!("department lookup for project listing failed: {}", e);
                HashMap::new()
            }
        };
        for project in &mut projects {
            project.department_name = Some(
                names
                    .get(&project.department_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_DEPARTMENT.to_string()),
            );
        }
        Ok(projects)
    }

    pub async fn project_by_id(&self, id: i64) -> Result<Project, HttpFailure> {
        let mut project: Project = self.get(&format!("Project/{id}")).await?;
        project.department_name = match self.department_by_id(project.department_id).await {
            Ok(department) => Some(department.department_name),
            Err(e) => {
                tracing::warn!("department lookup for project {} failed: {}", id, e);
                Some(UNKNOWN_DEPARTMENT.to_string())
            }
        };
        Ok(project)
    }

    pub async fn create_project(
        &self,
        payload: &ProjectCreateRequest,
    ) -> Result<Project, HttpFailure> {
        self.post("Project/Create", payload).await
    }

    pub async fn update_project(
        &self,
        id: i64,
        payload: &ProjectUpdateRequest,
    ) -> Result<Project, HttpFailure> {
        self.put(&format!("Project/Update/{id}"), payload).await
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), HttpFailure> {
        self.delete(&format!("Project/Delete/{id}")).await
    }
}
