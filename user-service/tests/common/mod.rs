use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::Principal;
use auth::Role;
use auth::TokenService;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use user_service::domain::user::errors::QueueError;
use user_service::domain::user::errors::UserError;
use user_service::domain::user::models::User;
use user_service::domain::user::models::Username;
use user_service::domain::user::ports::NotificationQueue;
use user_service::domain::user::ports::UserStore;
use user_service::domain::user::service::UserService;
use user_service::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-32-bytes!";

/// In-memory user store keyed by username.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn role_of(&self, username: &str) -> Option<Role> {
        self.users.lock().unwrap().get(username).map(|u| u.role)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.lock().unwrap().contains_key(username)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn exists(&self, username: &Username) -> Result<bool, UserError> {
        Ok(self.users.lock().unwrap().contains_key(username.as_str()))
    }

    async fn insert(&self, user: User) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(user.username.as_str()) {
            return Err(UserError::AlreadyExists(user.username.to_string()));
        }
        users.insert(user.username.as_str().to_string(), user);
        Ok(())
    }

    async fn get(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(username.as_str()).cloned())
    }

    async fn update(&self, user: &User) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(user.username.as_str()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(UserError::NotFound(user.username.to_string())),
        }
    }

    async fn delete(&self, user: &User) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        match users.remove(user.username.as_str()) {
            Some(_) => Ok(()),
            None => Err(UserError::NotFound(user.username.to_string())),
        }
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(users)
    }
}

/// Notification queue that records every message instead of sending it.
#[derive(Default)]
pub struct RecordingQueue {
    messages: Mutex<Vec<String>>,
}

impl RecordingQueue {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationQueue for RecordingQueue {
    async fn send(&self, message: &str) -> Result<(), QueueError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

/// The full user-service router wired to in-memory collaborators.
pub struct TestApp {
    router: Router,
    pub store: Arc<InMemoryUserStore>,
    pub queue: Arc<RecordingQueue>,
    pub tokens: Arc<TokenService>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryUserStore::default());
        let queue = Arc::new(RecordingQueue::default());
        let tokens = Arc::new(TokenService::new(TEST_SECRET));

        let service = Arc::new(UserService::new(
            Arc::clone(&store),
            Arc::clone(&queue),
            Arc::clone(&tokens),
        ));
        let router = create_router(service, Arc::clone(&tokens));

        Self {
            router,
            store,
            queue,
            tokens,
        }
    }

    /// Put a user straight into the store with a real Argon2 hash.
    pub async fn seed_user(&self, username: &str, password: &str, role: Role) {
        let user = User {
            username: Username::new(username.to_string()).unwrap(),
            password_hash: PasswordHasher::new().hash(password).unwrap(),
            role,
        };
        self.store.insert(user).await.unwrap();
    }

    /// Issue a bearer token directly, bypassing login.
    pub fn token_for(&self, username: &str, role: Role) -> String {
        self.tokens.issue(&Principal::new(username, role)).unwrap()
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed")
    }
}

pub fn json_request(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn bare_request(method: Method, path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).expect("Response body is not JSON")
}
