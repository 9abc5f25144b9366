pub mod aggregate;
pub mod dto;

pub use aggregate::{Product, ProductId};
pub use dto::{ProductListResponse, ProductRecordDto};
