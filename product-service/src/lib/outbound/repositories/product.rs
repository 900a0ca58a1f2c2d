use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::product::errors::ProductError;
use crate::product::models::Product;
use crate::product::models::ProductId;
use crate::product::ports::ProductStore;

/// Postgres adapter for the product store port.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_product(row: &PgRow) -> Result<Product, ProductError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| ProductError::Database(e.to_string()))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| ProductError::Database(e.to_string()))?;
    let description: String = row
        .try_get("description")
        .map_err(|e| ProductError::Database(e.to_string()))?;
    let price: i64 = row
        .try_get("price")
        .map_err(|e| ProductError::Database(e.to_string()))?;
    let manager: String = row
        .try_get("manager")
        .map_err(|e| ProductError::Database(e.to_string()))?;

    Ok(Product {
        id: ProductId(id),
        name,
        description,
        price,
        manager,
    })
}

#[async_trait]
impl ProductStore for PostgresProductRepository {
    async fn get(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, price, manager
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        row.as_ref().map(row_to_product).transpose()
    }

    async fn create(&self, product: Product) -> Result<(), ProductError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, manager)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(product.id.0)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.manager)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), ProductError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4
            WHERE id = $1
            "#,
        )
        .bind(product.id.0)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, product: &Product) -> Result<(), ProductError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product.id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ProductError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Product>, ProductError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, price, manager
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::Database(e.to_string()))?;

        rows.iter().map(row_to_product).collect()
    }
}
