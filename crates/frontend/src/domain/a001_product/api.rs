use contracts::domain::a001_product::{Product, ProductListResponse};
use gloo_net::http::Request;
use thiserror::Error;

/// Причина неудачной загрузки каталога
///
/// Пользователь видит одно общее сообщение, детали уходят в лог.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductFetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Malformed(String),
}

/// Загружает и нормализует полный список товаров
pub async fn fetch_products(url: &str) -> Result<Vec<Product>, ProductFetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ProductFetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ProductFetchError::Status(response.status()));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ProductFetchError::Malformed(e.to_string()))?;

    Ok(ProductListResponse::from_value(body).into_products())
}
