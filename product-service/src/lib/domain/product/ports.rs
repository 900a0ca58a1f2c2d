use async_trait::async_trait;

use crate::product::errors::ProductError;
use crate::product::models::CreateProductCommand;
use crate::product::models::Product;
use crate::product::models::ProductId;
use crate::product::models::UpdateProductCommand;

/// Port for product domain service operations.
///
/// Object-safe so handlers can hold `Arc<dyn ProductServicePort>`.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a product with a generated id, recording the creating admin.
    ///
    /// # Errors
    /// * `Database` - storage operation failed
    async fn create(
        &self,
        command: CreateProductCommand,
        manager: &str,
    ) -> Result<Product, ProductError>;

    /// Retrieve a product by id.
    ///
    /// # Errors
    /// * `NotFound` - product does not exist
    /// * `Database` - storage operation failed
    async fn get(&self, id: &ProductId) -> Result<Product, ProductError>;

    /// Overwrite an existing product's name, description, and price.
    ///
    /// # Errors
    /// * `NotFound` - product does not exist
    /// * `Database` - storage operation failed
    async fn update(&self, command: UpdateProductCommand) -> Result<Product, ProductError>;

    /// Delete a product.
    ///
    /// # Errors
    /// * `NotFound` - product does not exist
    /// * `Database` - storage operation failed
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;

    /// Retrieve all products.
    ///
    /// # Errors
    /// * `Database` - storage operation failed
    async fn list(&self) -> Result<Vec<Product>, ProductError>;
}

/// Persistence operations for the product aggregate.
///
/// Keyed access on the product id, plus a full scan for `list`.
#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    /// Retrieve a product by id (None if absent).
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    /// Persist a new product.
    async fn create(&self, product: Product) -> Result<(), ProductError>;

    /// Persist changes to an existing product.
    ///
    /// # Errors
    /// * `NotFound` - product does not exist
    async fn update(&self, product: &Product) -> Result<(), ProductError>;

    /// Remove a product.
    ///
    /// # Errors
    /// * `NotFound` - product does not exist
    async fn delete(&self, product: &Product) -> Result<(), ProductError>;

    /// Retrieve all products (full scan).
    async fn list(&self) -> Result<Vec<Product>, ProductError>;
}
