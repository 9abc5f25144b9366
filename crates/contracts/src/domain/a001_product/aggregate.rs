use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::dto::ProductRecordDto;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара
///
/// Бэкенд может прислать число или строку; если id нет, используется
/// позиция записи в ответе.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl ProductId {
    fn from_index(index: usize) -> Self {
        ProductId::Number(index as i64)
    }

    /// Пустые значения (`null`, `0`, `""`, `false`) заменяются позицией
    fn coerce(raw: Option<&Value>, index: usize) -> Self {
        match raw {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(0) => Self::from_index(index),
                Some(v) => ProductId::Number(v),
                None => match n.as_f64() {
                    Some(f) if f == 0.0 || f.is_nan() => Self::from_index(index),
                    _ => ProductId::Text(n.to_string()),
                },
            },
            Some(Value::String(s)) if !s.is_empty() => ProductId::Text(s.clone()),
            Some(Value::Bool(true)) => ProductId::Text("true".to_string()),
            Some(v @ (Value::Array(_) | Value::Object(_))) => ProductId::Text(v.to_string()),
            _ => Self::from_index(index),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Product
// ============================================================================

/// Товар каталога после нормализации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub main_category: String,
    pub brand: String,
    pub description: String,
    pub sku_code: String,
    #[serde(rename = "marketPlaceSellable")]
    pub market_place_sellable: String,
    /// `None` — невалидная дата
    pub activation_date: Option<DateTime<Utc>>,
    /// `None` — невалидная дата
    pub deactivation_date: Option<DateTime<Utc>>,
    pub price: f64,
}

impl Product {
    /// Приводит сырую запись к отображаемому виду
    pub fn normalize(record: ProductRecordDto, index: usize) -> Self {
        Self {
            id: ProductId::coerce(record.id.as_ref(), index),
            name: display_text(record.name.as_ref()),
            main_category: display_text(record.main_category.as_ref()),
            brand: display_text(record.brand.as_ref()),
            description: display_text(record.description.as_ref()),
            sku_code: display_text(record.sku_code.as_ref()),
            market_place_sellable: display_text(record.market_place_sellable.as_ref()),
            activation_date: coerce_date(record.activation_date.as_ref()),
            deactivation_date: coerce_date(record.deactivation_date.as_ref()),
            price: coerce_price(record.price.as_ref()),
        }
    }
}

/// Скалярное значение JSON как текст ячейки
pub fn display_text(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Приводит значение к дате по правилам конструктора `Date` в браузере.
///
/// Отсутствующее поле и нераспознанная строка дают `None`. `null` — это эпоха,
/// число — миллисекунды от эпохи. Строка без смещения считается UTC.
pub fn coerce_date(raw: Option<&Value>) -> Option<DateTime<Utc>> {
    match raw? {
        Value::Null => DateTime::from_timestamp_millis(0),
        Value::Bool(b) => DateTime::from_timestamp_millis(i64::from(*b)),
        Value::Number(n) => {
            let millis = n.as_f64()?;
            if !millis.is_finite() {
                return None;
            }
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        Value::String(s) => parse_date_str(s.trim()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    // Дата-время без смещения читается как UTC, а не в локальной зоне браузера:
    // отображение не зависит от часового пояса клиента
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.and_utc());
        }
    }
    None
}

/// Цена: пустое или нулевое значение → 0, числовая строка разбирается
pub fn coerce_price(raw: Option<&Value>) -> f64 {
    let price = match raw {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if price.is_finite() {
        price
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use serde_json::json;

    fn record(value: Value) -> ProductRecordDto {
        ProductRecordDto::from_value(value)
    }

    #[test]
    fn test_missing_id_uses_position() {
        let p = Product::normalize(record(json!({ "name": "A" })), 7);
        assert_eq!(p.id, ProductId::Number(7));
    }

    #[test]
    fn test_falsy_id_uses_position() {
        for raw in [json!(null), json!(0), json!(""), json!(false)] {
            let p = Product::normalize(record(json!({ "id": raw })), 3);
            assert_eq!(p.id, ProductId::Number(3));
        }
    }

    #[test]
    fn test_present_id_is_kept() {
        let p = Product::normalize(record(json!({ "id": 42 })), 0);
        assert_eq!(p.id, ProductId::Number(42));

        let p = Product::normalize(record(json!({ "id": "sku-1" })), 0);
        assert_eq!(p.id, ProductId::Text("sku-1".to_string()));
        assert_eq!(p.id.to_string(), "sku-1");
    }

    #[test]
    fn test_price_defaults_to_zero() {
        for raw in [json!(null), json!(0), json!(""), json!(false), json!("abc")] {
            let p = Product::normalize(record(json!({ "price": raw })), 0);
            assert_eq!(p.price, 0.0);
        }
        let p = Product::normalize(record(json!({})), 0);
        assert_eq!(p.price, 0.0);
    }

    #[test]
    fn test_price_is_kept() {
        let p = Product::normalize(record(json!({ "price": 9.99 })), 0);
        assert_eq!(p.price, 9.99);

        let p = Product::normalize(record(json!({ "price": "12.5" })), 0);
        assert_eq!(p.price, 12.5);
    }

    #[test]
    fn test_iso_date_is_utc_midnight() {
        let dt = coerce_date(Some(&json!("2023-01-01"))).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_rfc3339_date_is_converted_to_utc() {
        let dt = coerce_date(Some(&json!("2023-06-01T12:30:00+02:00"))).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 6, 1, 10, 30, 0).unwrap());
    }

    #[test]
    fn test_date_time_without_offset_is_utc() {
        let dt = coerce_date(Some(&json!("2023-06-01T12:30:00"))).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 6, 1, 12, 30, 0).unwrap());
        let dt = coerce_date(Some(&json!("2023-06-01 08:15:00"))).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 6, 1, 8, 15, 0).unwrap());
    }

    #[test]
    fn test_epoch_millis_date() {
        let dt = coerce_date(Some(&json!(86_400_000))).unwrap();
        assert_eq!(dt.day(), 2);
        assert_eq!(dt.year(), 1970);
    }

    #[test]
    fn test_null_date_is_epoch() {
        let dt = coerce_date(Some(&Value::Null)).unwrap();
        assert_eq!(dt.timestamp_millis(), 0);
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(coerce_date(None), None);
        assert_eq!(coerce_date(Some(&json!("not a date"))), None);
        assert_eq!(coerce_date(Some(&json!(""))), None);
        assert_eq!(coerce_date(Some(&json!({ "y": 2023 }))), None);
    }

    #[test]
    fn test_opaque_fields_render_as_text() {
        let p = Product::normalize(
            record(json!({
                "name": "Widget A",
                "brand": null,
                "sku_code": 1001,
                "marketPlaceSellable": true
            })),
            0,
        );
        assert_eq!(p.name, "Widget A");
        assert_eq!(p.brand, "");
        assert_eq!(p.sku_code, "1001");
        assert_eq!(p.market_place_sellable, "true");
        assert_eq!(p.description, "");
    }

    #[test]
    fn test_widget_record_normalizes() {
        let p = Product::normalize(
            record(json!({
                "name": "Widget A",
                "main_category": "Tools",
                "price": 9.99,
                "activation_date": "2023-01-01",
                "deactivation_date": "2023-06-01"
            })),
            0,
        );
        assert_eq!(p.id, ProductId::Number(0));
        assert_eq!(p.main_category, "Tools");
        assert_eq!(p.price, 9.99);
        assert_eq!(
            p.deactivation_date,
            Some(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap())
        );
    }
}
