use std::fmt;

use uuid::Uuid;

use crate::product::errors::ProductError;
use crate::product::errors::ProductIdError;

/// Product aggregate entity.
///
/// `manager` records the admin who created the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub manager: String,
}

/// Product unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub Uuid);

impl ProductId {
    /// Generate a new random product ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a product ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        Uuid::parse_str(s)
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new product.
#[derive(Debug)]
pub struct CreateProductCommand {
    pub name: String,
    pub description: String,
    pub price: i64,
}

impl CreateProductCommand {
    /// Construct a create command, rejecting an empty name.
    ///
    /// # Errors
    /// * `InvalidName` - the product name is empty
    pub fn new(name: String, description: String, price: i64) -> Result<Self, ProductError> {
        if name.is_empty() {
            return Err(ProductError::InvalidName);
        }
        Ok(Self {
            name,
            description,
            price,
        })
    }
}

/// Command to overwrite an existing product's fields.
#[derive(Debug)]
pub struct UpdateProductCommand {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: i64,
}
