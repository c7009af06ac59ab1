//! Native HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use reqwest::Client;
use serde_json::Value;

use crate::endpoints::Endpoints;
use crate::error::{ErrorKind, Result};
use crate::interface::{HttpClient, RequestApi};
use crate::model::structs::{Course, User};

/// HTTP client for native environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    endpoints: Endpoints,
}

impl NoWasmClient {
    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, endpoints })
    }

    async fn get(&self, url: &str) -> Result<Value> {
        log::debug!("GET {url}");
        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        handle_json_response(resp).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value> {
        log::debug!("POST {url}");
        let resp = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;
        handle_json_response(resp).await
    }

    async fn put(&self, url: &str, body: &Value) -> Result<Value> {
        log::debug!("PUT {url}");
        let resp = self
            .client
            .put(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;
        handle_json_response(resp).await
    }

    async fn delete(&self, url: &str) -> Result<Value> {
        log::debug!("DELETE {url}");
        let resp = self
            .client
            .delete(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        handle_json_response(resp).await
    }
}

/// 2xx with a body parses as JSON, 2xx with an empty body (204
/// deletes) yields Null; anything else surfaces the server's message.
async fn handle_json_response(resp: reqwest::Response) -> Result<Value> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        let message = super::server_message(&text, &status.to_string());
        log::error!("request failed with {status}: {message}");
        return Err(ErrorKind::ApiError {
            status: status.as_u16(),
            message,
        }
        .into());
    }

    if text.is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text)
        .map_err(|_| ErrorKind::ParseError(format!("Invalid JSON response: {text}")).into())
}

impl HttpClient for NoWasmClient {
    async fn new() -> Result<Self> {
        NoWasmClient::with_endpoints(Endpoints::from_env())
    }
}

impl RequestApi for NoWasmClient {
    async fn fetch_users(&self) -> Result<Value> {
        self.get(&self.endpoints.usuarios()).await
    }

    async fn create_user(&self, user: &User) -> Result<Value> {
        let body = serde_json::to_value(user)?;
        self.post(&self.endpoints.usuarios(), &body).await
    }

    async fn update_user(&self, id: i64, user: &User) -> Result<Value> {
        let mut body = serde_json::to_value(user)?;
        body["id"] = Value::from(id);
        self.put(&self.endpoints.usuario(id), &body).await
    }

    async fn delete_user(&self, id: i64) -> Result<Value> {
        self.delete(&self.endpoints.usuario(id)).await
    }

    async fn fetch_courses(&self) -> Result<Value> {
        self.get(&self.endpoints.cursos()).await
    }

    async fn create_course(&self, course: &Course) -> Result<Value> {
        let body = serde_json::to_value(course)?;
        self.post(&self.endpoints.cursos(), &body).await
    }

    async fn update_course(&self, id: i64, course: &Course) -> Result<Value> {
        let mut body = serde_json::to_value(course)?;
        body["id"] = Value::from(id);
        self.put(&self.endpoints.curso(id), &body).await
    }

    async fn delete_course(&self, id: i64) -> Result<Value> {
        self.delete(&self.endpoints.curso(id)).await
    }

    async fn enroll_user(&self, curso_id: i64, user: &User) -> Result<Value> {
        let body = serde_json::to_value(user)?;
        self.post(&self.endpoints.curso(curso_id), &body).await
    }

    async fn remove_enrollment(&self, curso_id: i64, usuario_id: i64) -> Result<Value> {
        self.delete(&self.endpoints.curso_usuario(curso_id, usuario_id))
            .await
    }
}
