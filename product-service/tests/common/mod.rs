use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
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
use product_service::domain::product::errors::ProductError;
use product_service::domain::product::models::Product;
use product_service::domain::product::models::ProductId;
use product_service::domain::product::ports::ProductStore;
use product_service::domain::product::service::ProductService;
use product_service::inbound::http::router::create_router;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-32-bytes!";

/// In-memory product store keyed by product id.
#[derive(Default)]
pub struct InMemoryProductStore {
    products: Mutex<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    pub fn snapshot(&self, id: &ProductId) -> Option<Product> {
        self.products.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        Ok(self.products.lock().unwrap().get(id).cloned())
    }

    async fn create(&self, product: Product) -> Result<(), ProductError> {
        self.products.lock().unwrap().insert(product.id, product);
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), ProductError> {
        let mut products = self.products.lock().unwrap();
        match products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(())
            }
            None => Err(ProductError::NotFound(product.id.to_string())),
        }
    }

    async fn delete(&self, product: &Product) -> Result<(), ProductError> {
        let mut products = self.products.lock().unwrap();
        match products.remove(&product.id) {
            Some(_) => Ok(()),
            None => Err(ProductError::NotFound(product.id.to_string())),
        }
    }

    async fn list(&self) -> Result<Vec<Product>, ProductError> {
        let mut products: Vec<Product> =
            self.products.lock().unwrap().values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }
}

/// The full product-service router wired to an in-memory store.
pub struct TestApp {
    router: Router,
    pub store: Arc<InMemoryProductStore>,
    pub tokens: Arc<TokenService>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryProductStore::default());
        let tokens = Arc::new(TokenService::new(TEST_SECRET));

        let service = Arc::new(ProductService::new(Arc::clone(&store)));
        let router = create_router(service, Arc::clone(&tokens));

        Self {
            router,
            store,
            tokens,
        }
    }

    /// Put a product straight into the store.
    pub async fn seed_product(&self, name: &str, description: &str, price: i64) -> ProductId {
        let product = Product {
            id: ProductId::new(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            manager: "admin".to_string(),
        };
        let id = product.id;
        self.store.create(product).await.unwrap();
        id
    }

    /// Issue a bearer token directly.
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
