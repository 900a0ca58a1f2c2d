use std::sync::Arc;

use async_trait::async_trait;

use crate::product::errors::ProductError;
use crate::product::models::CreateProductCommand;
use crate::product::models::Product;
use crate::product::models::ProductId;
use crate::product::models::UpdateProductCommand;
use crate::product::ports::ProductServicePort;
use crate::product::ports::ProductStore;

/// Domain service implementation for product operations.
pub struct ProductService<S>
where
    S: ProductStore,
{
    store: Arc<S>,
}

impl<S> ProductService<S>
where
    S: ProductStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ProductServicePort for ProductService<S>
where
    S: ProductStore,
{
    async fn create(
        &self,
        command: CreateProductCommand,
        manager: &str,
    ) -> Result<Product, ProductError> {
        let product = Product {
            id: ProductId::new(),
            name: command.name,
            description: command.description,
            price: command.price,
            manager: manager.to_string(),
        };

        self.store.create(product.clone()).await?;

        Ok(product)
    }

    async fn get(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.store
            .get(id)
            .await?
            .ok_or(ProductError::NotFound(id.to_string()))
    }

    async fn update(&self, command: UpdateProductCommand) -> Result<Product, ProductError> {
        let mut product = self
            .store
            .get(&command.id)
            .await?
            .ok_or(ProductError::NotFound(command.id.to_string()))?;

        product.name = command.name;
        product.description = command.description;
        product.price = command.price;

        self.store.update(&product).await?;

        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let product = self
            .store
            .get(id)
            .await?
            .ok_or(ProductError::NotFound(id.to_string()))?;

        self.store.delete(&product).await
    }

    async fn list(&self) -> Result<Vec<Product>, ProductError> {
        self.store.list().await
    }
}
