pub mod product;

pub use product::PostgresProductRepository;
