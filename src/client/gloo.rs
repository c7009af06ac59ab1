//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's
//! fetch API. Requests go same-origin through the reverse proxy, which
//! rewrites the `/api/...` paths and attaches the CORS headers.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;
use web_sys::RequestMode;

use crate::endpoints::Endpoints;
use crate::error::{ErrorKind, Result};
use crate::interface::{HttpClient, RequestApi};
use crate::model::structs::{Course, User};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    endpoints: Endpoints,
}

impl WasmClient {
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    /// Common headers and request mode for every call
    fn build_request(builder: RequestBuilder) -> RequestBuilder {
        builder
            .mode(RequestMode::Cors)
            .header("Accept", "application/json")
    }

    async fn get(&self, url: &str) -> Result<Value> {
        log::debug!("GET {url}");
        let resp = Self::build_request(Request::get(url)).send().await?;
        handle_json_response(resp).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value> {
        log::debug!("POST {url}");
        let resp = Self::build_request(Request::post(url))
            .json(body)?
            .send()
            .await?;
        handle_json_response(resp).await
    }

    async fn put(&self, url: &str, body: &Value) -> Result<Value> {
        log::debug!("PUT {url}");
        let resp = Self::build_request(Request::put(url))
            .json(body)?
            .send()
            .await?;
        handle_json_response(resp).await
    }

    async fn delete(&self, url: &str) -> Result<Value> {
        log::debug!("DELETE {url}");
        let resp = Self::build_request(Request::delete(url)).send().await?;
        handle_json_response(resp).await
    }
}

/// Same response contract as the native client: 2xx JSON body parses,
/// empty 2xx bodies yield Null, non-2xx surfaces the server message.
async fn handle_json_response(resp: Response) -> Result<Value> {
    let status = resp.status();
    let ok = resp.ok();
    let text = resp.text().await?;

    if !ok {
        let message = super::server_message(&text, &format!("{} {}", status, resp.status_text()));
        log::error!("request failed with {status}: {message}");
        return Err(ErrorKind::ApiError { status, message }.into());
    }

    if text.is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text)
        .map_err(|_| ErrorKind::ParseError(format!("Invalid JSON response: {text}")).into())
}

impl HttpClient for WasmClient {
    async fn new() -> Result<Self> {
        Ok(WasmClient::with_endpoints(Endpoints::same_origin()))
    }
}

impl RequestApi for WasmClient {
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
