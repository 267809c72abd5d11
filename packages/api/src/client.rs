//! # HTTP client wrapper
//!
//! [`ApiClient`] is the one configured client every view goes through. It
//! owns the base URL and wraps each call in two interceptors:
//!
//! - **outbound**: if the `token` storage key holds an access token it is
//!   attached as `Authorization: Bearer <token>`; otherwise the request goes
//!   out unauthenticated and the server decides.
//! - **inbound**: a 2xx body is parsed and run through
//!   [`casing::to_client_case`] before being handed to the caller. Non-2xx
//!   responses are returned as [`ApiError::Server`] with whatever message the
//!   server put in the body, untouched by normalisation.
//!
//! There is no retry, timeout or de-duplication: each call is issued once and
//! the caller owns its failure branch.
//!
//! The wire itself sits behind the [`Transport`] trait so the interceptors and
//! endpoint schemas can be exercised without a server. [`ReqwestTransport`]
//! is the real implementation (browser `fetch` on wasm32).

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::{keys, KeyValueStore};

use crate::casing;
use crate::error::{self, ApiError};
use crate::models::{
    LoginRequest, LoginResponse, NewTodo, ProfileForm, RegisterRequest, Todo, TodoList,
    TodoPatch, User,
};

/// A request as seen by the transport, after the outbound interceptor ran.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// Raw response: status code and body text.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single request and returns the raw response.
///
/// Only transport-level failures are errors here; a 4xx/5xx is a
/// successful exchange.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, ApiError>>;
}

/// [`Transport`] backed by `reqwest`.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.http.request(request.method, &request.url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Configured API client.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    storage: S,
    base_url: String,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, storage: S, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            storage,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Outbound interceptor.
    fn authorize(&self, request: &mut HttpRequest) {
        request.bearer = self
            .storage
            .get(keys::TOKEN)
            .filter(|token| !token.is_empty());
    }

    /// Issue a request through both interceptors.
    ///
    /// Returns the normalised body, or `None` when the server sent none.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>, ApiError> {
        let mut request = HttpRequest {
            method,
            url: self.url(path),
            bearer: None,
            body,
        };
        self.authorize(&mut request);
        tracing::debug!(
            method = %request.method,
            path,
            authenticated = request.bearer.is_some(),
            "api request"
        );

        let response = self.transport.send(request).await?;
        normalize(response)
    }

    async fn call<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        let value = self.request(method, path, body).await?;
        Ok(serde_json::from_value(value.unwrap_or(Value::Null))?)
    }

    async fn call_unit<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.request(method, path, body).await.map(|_| ())
    }

    /// `POST /login`
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.call(Method::POST, "/login", Some(credentials)).await
    }

    /// `POST /user`
    pub async fn register(&self, data: &RegisterRequest) -> Result<(), ApiError> {
        self.call_unit(Method::POST, "/user", Some(data)).await
    }

    /// `PUT /user/:id`
    pub async fn update_user(&self, id: u64, form: &ProfileForm) -> Result<User, ApiError> {
        self.call(Method::PUT, &format!("/user/{id}"), Some(form))
            .await
    }

    /// `GET /todos`
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let list: TodoList = self.call(Method::GET, "/todos", None::<&()>).await?;
        Ok(list.into())
    }

    /// `POST /todos`
    pub async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, ApiError> {
        self.call(Method::POST, "/todos", Some(todo)).await
    }

    /// `PUT /todos/:id`
    pub async fn update_todo(&self, id: u64, patch: &TodoPatch) -> Result<(), ApiError> {
        self.call_unit(Method::PUT, &format!("/todos/{id}"), Some(patch))
            .await
    }

    /// `DELETE /todos/:id`
    pub async fn delete_todo(&self, id: u64) -> Result<(), ApiError> {
        self.call_unit(Method::DELETE, &format!("/todos/{id}"), None::<&()>)
            .await
    }
}

/// Inbound interceptor.
fn normalize(response: HttpResponse) -> Result<Option<Value>, ApiError> {
    if !response.is_success() {
        let message = error::server_message(&response.body);
        tracing::warn!(
            status = response.status,
            reason = message.as_deref().unwrap_or_default(),
            "request rejected"
        );
        return Err(ApiError::Server {
            status: response.status,
            message,
        });
    }

    if response.body.trim().is_empty() {
        return Ok(None);
    }
    // A non-JSON success body is handed on as a plain string
    let value = match serde_json::from_str::<Value>(&response.body) {
        Ok(value) => value,
        Err(_) => return Ok(Some(Value::String(response.body))),
    };
    Ok(Some(casing::to_client_case(value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde_json::json;
    use store::MemoryStore;

    fn client(mock: &MockTransport, storage: &MemoryStore) -> ApiClient<MockTransport, MemoryStore> {
        ApiClient::new(mock.clone(), storage.clone(), "http://api.test/api/")
    }

    #[tokio::test]
    async fn test_bearer_attached_when_token_stored() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        storage.set(keys::TOKEN, "tok-123");
        mock.respond(200, r#"{"data": []}"#);

        client(&mock, &storage).list_todos().await.unwrap();

        let sent = mock.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::GET);
        assert_eq!(sent[0].url, "http://api.test/api/todos");
        assert_eq!(sent[0].bearer.as_deref(), Some("tok-123"));
    }

    #[tokio::test]
    async fn test_no_bearer_without_token() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(200, "");

        client(&mock, &storage)
            .register(&RegisterRequest::default())
            .await
            .unwrap();

        assert!(mock.requests()[0].bearer.is_none());
    }

    #[tokio::test]
    async fn test_response_keys_normalized() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(
            200,
            r#"{"data": [{"ID": 1, "text": "a", "done": false, "user_id": 3}]}"#,
        );

        let raw = client(&mock, &storage)
            .request(Method::GET, "todos", None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            raw,
            json!({"Data": [{"Id": 1, "Text": "a", "Done": false, "UserId": 3}]})
        );
    }

    #[tokio::test]
    async fn test_error_body_not_normalized() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(401, r#"{"message": "Invalid email or password"}"#);

        let err = client(&mock, &storage)
            .login(&LoginRequest::new("a@b.c", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Server {
                status: 401,
                message: Some("Invalid email or password".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.fail("connection refused");

        let err = client(&mock, &storage).list_todos().await.unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".to_string()));
    }

    #[tokio::test]
    async fn test_todo_endpoints() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        let api = client(&mock, &storage);

        mock.respond(201, r#"{"id": 10, "text": "new", "done": false}"#);
        let created = api
            .create_todo(&NewTodo {
                text: "new".to_string(),
                user_id: 2,
            })
            .await
            .unwrap();
        assert_eq!(created.id, 10);

        mock.respond(200, r#"{"id": 10, "text": "new", "done": true}"#);
        api.update_todo(10, &TodoPatch::done(true)).await.unwrap();

        mock.respond(204, "");
        api.delete_todo(10).await.unwrap();

        let sent = mock.requests();
        assert_eq!(sent[0].body, Some(json!({"text": "new", "userId": 2})));
        assert_eq!(sent[1].method, Method::PUT);
        assert_eq!(sent[1].url, "http://api.test/api/todos/10");
        assert_eq!(sent[1].body, Some(json!({"done": true})));
        assert_eq!(sent[2].method, Method::DELETE);
        assert!(sent[2].body.is_none());
    }

    #[tokio::test]
    async fn test_update_user_returns_confirmed_record() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(
            200,
            r#"{"ID": 5, "FirstName": "Grace", "LastName": "Hopper", "Email": "g@example.com", "Password": "hash"}"#,
        );

        let form = ProfileForm {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "g@example.com".to_string(),
        };
        let user = client(&mock, &storage).update_user(5, &form).await.unwrap();

        assert_eq!(user.id, 5);
        assert_eq!(user.first_name, "Grace");
        let sent = mock.requests();
        assert_eq!(sent[0].url, "http://api.test/api/user/5");
        assert_eq!(
            sent[0].body,
            Some(json!({"FirstName": "Grace", "LastName": "Hopper", "Email": "g@example.com"}))
        );
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        mock.respond(200, "<html>oops</html>");

        let err = client(&mock, &storage).list_todos().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_plain_text_success_body_passes_through() {
        let mock = MockTransport::new();
        let storage = MemoryStore::new();
        let api = client(&mock, &storage);

        mock.respond(201, "Created");
        api.register(&RegisterRequest::default()).await.unwrap();

        mock.respond(200, "OK");
        api.delete_todo(3).await.unwrap();

        mock.respond(200, "OK");
        let raw = api.request(Method::GET, "/health", None).await.unwrap();
        assert_eq!(raw, Some(Value::String("OK".to_string())));
    }
}
