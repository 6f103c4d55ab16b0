//! consumer 侧 DTO，与 supplier 的线上形状一致

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_dto_mirrors_supplier_shape() {
        let json = r#"{"id": 1, "name": "Phone", "description": "A phone",
                       "price": "999.99", "categoryId": 2}"#;
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.category_id, 2);
        assert_eq!(dto.price, Decimal::new(99999, 2));

        let back = serde_json::to_value(&dto).unwrap();
        assert_eq!(back["categoryId"], 2);
    }

    #[test]
    fn test_category_dto_without_id() {
        let dto: CategoryDto = serde_json::from_str(r#"{"name": "Books"}"#).unwrap();
        assert!(dto.id.is_none());
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("id").is_none());
    }
}
