//! Typed client for the backend REST API.
//! One `ApiClient` carries the base URL, the HTTP client, and a handle to the
//! session store (for the conditional bearer header); the per-resource
//! modules add thin endpoint wrappers on top of it. All business rules live
//! backend-side; nothing here retries, caches, or transforms beyond the
//! department-name enrichment the project screens need.

mod admin;
mod auth;
mod client;
mod departments;
mod employees;
mod models;
mod projects;
mod tasks;

pub use auth::{Gender, LoginRequest, LoginResponse, RegisterEmployeeRequest};
pub use client::ApiClient;
pub use models::*;
