use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::aggregate::Product;

/// Запись товара в том виде, в каком её отдаёт `/api/products`
///
/// Бэкенд не гарантирует типы полей, поэтому все поля хранятся как
/// `serde_json::Value` и приводятся при нормализации.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRecordDto {
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub main_category: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub brand: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub sku_code: Option<Value>,
    #[serde(
        default,
        rename = "marketPlaceSellable",
        deserialize_with = "present"
    )]
    pub market_place_sellable: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub activation_date: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub deactivation_date: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
}

impl ProductRecordDto {
    /// Элемент массива, который не является объектом, считается пустой записью
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Отличает `null` от отсутствующего поля: `Some(Value::Null)` против `None`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Ответ `GET /api/products`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub products: Vec<ProductRecordDto>,
}

impl ProductListResponse {
    /// Разбирает тело ответа. Отсутствующее поле `products` или поле не-массив
    /// дают пустой список.
    pub fn from_value(body: Value) -> Self {
        let products = match body {
            Value::Object(mut map) => match map.remove("products") {
                Some(Value::Array(items)) => {
                    items.into_iter().map(ProductRecordDto::from_value).collect()
                }
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Self { products }
    }

    /// Нормализует записи: id по позиции, даты, цена по умолчанию
    pub fn into_products(self) -> Vec<Product> {
        self.products
            .into_iter()
            .enumerate()
            .map(|(index, record)| Product::normalize(record, index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_products_field_is_empty() {
        let resp = ProductListResponse::from_value(json!({}));
        assert!(resp.products.is_empty());
    }

    #[test]
    fn test_non_array_products_field_is_empty() {
        let resp = ProductListResponse::from_value(json!({ "products": "nope" }));
        assert!(resp.products.is_empty());

        let resp = ProductListResponse::from_value(json!({ "products": { "a": 1 } }));
        assert!(resp.products.is_empty());
    }

    #[test]
    fn test_non_object_body_is_empty() {
        assert!(ProductListResponse::from_value(json!([1, 2, 3])).products.is_empty());
        assert!(ProductListResponse::from_value(Value::Null).products.is_empty());
    }

    #[test]
    fn test_records_are_parsed_in_order() {
        let resp = ProductListResponse::from_value(json!({
            "products": [
                { "name": "Widget A", "marketPlaceSellable": true },
                { "name": "Widget B" }
            ]
        }));
        assert_eq!(resp.products.len(), 2);
        assert_eq!(resp.products[0].name, Some(json!("Widget A")));
        assert_eq!(resp.products[0].market_place_sellable, Some(json!(true)));
        assert_eq!(resp.products[1].name, Some(json!("Widget B")));
    }

    #[test]
    fn test_non_object_element_becomes_empty_record() {
        let resp = ProductListResponse::from_value(json!({ "products": [42] }));
        assert_eq!(resp.products.len(), 1);
        assert!(resp.products[0].name.is_none());

        let products = resp.into_products();
        assert_eq!(products[0].name, "");
        assert_eq!(products[0].price, 0.0);
    }
}
