pub mod manager;
pub mod models;
pub mod pagination;
pub mod query_builder;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use pagination::{Page, PageRequest, Totals};
pub use repository::{Entity, Repository};
