use std::sync::Arc;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Environment;
use crate::error::{ApiErrorBody, HttpFailure};
use crate::identity::SessionStore;

/// HTTP client for the backend API. Attaches `Authorization: Bearer <token>`
/// if-and-only-if the session store currently holds a token; a request never
/// blocks or waits for one to appear.
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(env: &Environment, session: Arc<SessionStore>) -> Self {
        Self {
            base: env.api_url.clone(),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    fn decorate(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a prepared request; non-2xx responses become `HttpFailure` with
    /// the backend's error envelope parsed when present.
    async fn execute(&self, builder: RequestBuilder) -> Result<reqwest::Response, HttpFailure> {
        let response = self.decorate(builder).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.json::<ApiErrorBody>().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "api request failed");
        Err(HttpFailure::Status { status: status.as_u16(), body })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpFailure> {
        let response = self.execute(self.http.get(self.endpoint(path))).await?;
        Ok(response.json().await?)
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, HttpFailure>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .execute(self.http.get(self.endpoint(path)).query(query))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpFailure>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.http.post(self.endpoint(path)).json(body))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, HttpFailure>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.http.put(self.endpoint(path)).json(body))
            .await?;
        Ok(response.json().await?)
    }

    /// POST a multipart form (file-upload endpoints).
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, HttpFailure> {
        let response = self
            .execute(self.http.post(self.endpoint(path)).multipart(form))
            .await?;
        Ok(response.json().await?)
    }

    /// PUT a multipart form (file-upload endpoints).
    pub async fn put_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, HttpFailure> {
        let response = self
            .execute(self.http.put(self.endpoint(path)).multipart(form))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn patch<B>(&self, path: &str, body: &B) -> Result<(), HttpFailure>
    where
        B: Serialize + ?Sized,
    {
        self.execute(self.http.patch(self.endpoint(path)).json(body))
            .await
            .map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), HttpFailure> {
        self.execute(self.http.delete(self.endpoint(path)))
            .await
            .map(|_| ())
    }
}
