// API client module: a small blocking HTTP client for the todo service.
// Each operation performs exactly one request. Building a request is kept
// apart from sending it so the builders can be checked without a network.

use reqwest::blocking::{Client, Request, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;
use crate::token::TokenStore;

/// Blocking client holding the base URL of the API and the token store
/// used for authenticated calls.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: TokenStore,
}

/// Payload for `/api/auth/register`.
#[derive(Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Payload for `/api/auth/login`.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The only part of the login response the client needs. Other fields the
/// server sends are ignored.
#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body for creating or updating a todo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TodoPayload {
    pub task: String,
    pub done: bool,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(ApiClient {
            client,
            base_url: config.base_url.clone(),
            tokens: TokenStore::new(config.config_dir.clone()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn todo_url(&self, id: i64) -> String {
        self.url(&format!("/api/todo/{}", id))
    }

    fn with_json<T: Serialize>(builder: RequestBuilder, body: &T) -> Result<RequestBuilder, ApiError> {
        let bytes = serde_json::to_vec(body)?;
        Ok(builder
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(bytes))
    }

    /// Auth headers from the token store, or `NotLoggedIn`.
    pub fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        self.tokens.auth_headers().ok_or(ApiError::NotLoggedIn)
    }

    pub fn build_register(&self, req: &RegisterRequest) -> Result<Request, ApiError> {
        let builder = self.client.post(self.url("/api/auth/register"));
        Ok(Self::with_json(builder, req)?.build()?)
    }

    pub fn build_login(&self, req: &LoginRequest) -> Result<Request, ApiError> {
        let builder = self.client.post(self.url("/api/auth/login"));
        Ok(Self::with_json(builder, req)?.build()?)
    }

    pub fn build_list_todos(&self, headers: HeaderMap) -> Result<Request, ApiError> {
        Ok(self.client.get(self.url("/api/todo/")).headers(headers).build()?)
    }

    pub fn build_create_todo(&self, todo: &TodoPayload, headers: HeaderMap) -> Result<Request, ApiError> {
        let builder = self.client.post(self.url("/api/todo/")).headers(headers);
        Ok(Self::with_json(builder, todo)?.build()?)
    }

    pub fn build_update_todo(&self, id: i64, todo: &TodoPayload, headers: HeaderMap) -> Result<Request, ApiError> {
        let builder = self.client.put(self.todo_url(id)).headers(headers);
        Ok(Self::with_json(builder, todo)?.build()?)
    }

    pub fn build_delete_todo(&self, id: i64, headers: HeaderMap) -> Result<Request, ApiError> {
        Ok(self.client.delete(self.todo_url(id)).headers(headers).build()?)
    }

    /// Send a request and fail with `Rejected` unless the response carries
    /// `expected`.
    fn send(&self, req: Request, expected: StatusCode) -> Result<reqwest::blocking::Response, ApiError> {
        let method: Method = req.method().clone();
        debug!(%method, url = %req.url(), "sending request");
        let res = self.client.execute(req)?;
        let status = res.status();
        debug!(%method, %status, "received response");
        if status != expected {
            return Err(ApiError::Rejected { status });
        }
        Ok(res)
    }

    /// Register a new user. Succeeds only on 201 Created.
    pub fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        let request = self.build_register(req)?;
        self.send(request, StatusCode::CREATED)?;
        Ok(())
    }

    /// Log in and persist the returned access token. Returns the token.
    /// A success status with a body lacking `access_token` leaves the
    /// token file untouched.
    pub fn login(&self, req: &LoginRequest) -> Result<String, ApiError> {
        let request = self.build_login(req)?;
        let res = self.send(request, StatusCode::OK)?;
        let body: LoginResponse = res
            .json()
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        self.tokens.save(&body.access_token)?;
        Ok(body.access_token)
    }

    /// Fetch the todo list and return the body exactly as the server sent it.
    pub fn list_todos(&self) -> Result<String, ApiError> {
        let headers = self.auth_headers()?;
        let request = self.build_list_todos(headers)?;
        let res = self.send(request, StatusCode::OK)?;
        Ok(res.text()?)
    }

    pub fn create_todo(&self, todo: &TodoPayload) -> Result<(), ApiError> {
        let headers = self.auth_headers()?;
        let request = self.build_create_todo(todo, headers)?;
        self.send(request, StatusCode::CREATED)?;
        Ok(())
    }

    pub fn update_todo(&self, id: i64, todo: &TodoPayload) -> Result<(), ApiError> {
        let headers = self.auth_headers()?;
        let request = self.build_update_todo(id, todo, headers)?;
        self.send(request, StatusCode::OK)?;
        Ok(())
    }

    pub fn delete_todo(&self, id: i64) -> Result<(), ApiError> {
        let headers = self.auth_headers()?;
        let request = self.build_delete_todo(id, headers)?;
        self.send(request, StatusCode::OK)?;
        Ok(())
    }
}
