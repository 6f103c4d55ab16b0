//! 线上传输 DTO，与持久化实体分离

use mall_common::CategoryId;
use mall_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, NewProduct, Product};

/// 分类 DTO
///
/// 入站 payload 中的 `products` 字段被接受但始终忽略（创建/更新只关心 name）。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductDto>>,
}

impl CategoryDto {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Name is mandatory"));
        }
        Ok(())
    }

    pub fn supplied_id(&self) -> Option<CategoryId> {
        self.id.map(CategoryId)
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: Some(category.id.as_i64()),
            name: category.name,
            products: None,
        }
    }
}

/// 商品 DTO
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

impl ProductDto {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Name is mandatory"));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::validation("Description is mandatory"));
        }
        if self.price < Decimal::ZERO {
            return Err(AppError::validation("Price must not be negative"));
        }
        Ok(())
    }

    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: self.price,
            category_id: CategoryId(self.category_id),
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id.as_i64()),
            name: product.name,
            description: product.description,
            price: product.price,
            category_id: product.category_id.as_i64(),
        }
    }
}

pub fn to_product_dtos(products: Vec<Product>) -> Vec<ProductDto> {
    products.into_iter().map(ProductDto::from).collect()
}

pub fn to_category_dtos(categories: Vec<Category>) -> Vec<CategoryDto> {
    categories.into_iter().map(CategoryDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mall_common::ProductId;

    fn product_dto(name: &str, description: &str, price: Decimal) -> ProductDto {
        ProductDto {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            price,
            category_id: 1,
        }
    }

    #[test]
    fn test_product_validation() {
        assert!(product_dto("Phone", "A phone", Decimal::new(99999, 2)).validate().is_ok());
        assert!(product_dto("", "A phone", Decimal::ONE).validate().is_err());
        assert!(product_dto("  ", "A phone", Decimal::ONE).validate().is_err());
        assert!(product_dto("Phone", "", Decimal::ONE).validate().is_err());
        assert!(product_dto("Phone", "A phone", Decimal::NEGATIVE_ONE).validate().is_err());
        assert!(product_dto("Phone", "A phone", Decimal::ZERO).validate().is_ok());
    }

    #[test]
    fn test_category_validation() {
        let dto = CategoryDto { id: None, name: "Electronics".to_string(), products: None };
        assert!(dto.validate().is_ok());

        let empty = CategoryDto { id: None, name: "".to_string(), products: None };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_product_dto_wire_shape() {
        let dto = ProductDto::from(Product {
            id: ProductId(5),
            name: "Phone".to_string(),
            description: "A phone".to_string(),
            price: Decimal::new(99999, 2),
            category_id: CategoryId(1),
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["categoryId"], 1);
        // rust_decimal 默认以字符串形式序列化，避免浮点精度损失
        assert_eq!(json["price"], "999.99");
    }

    #[test]
    fn test_category_dto_ignores_products_payload() {
        let dto: CategoryDto = serde_json::from_str(
            r#"{"id": 1, "name": "Electronics", "products": [
                {"name": "Phone", "description": "A phone", "price": 1.0, "categoryId": 1}
            ]}"#,
        )
        .unwrap();

        assert_eq!(dto.supplied_id(), Some(CategoryId(1)));
        assert_eq!(dto.name, "Electronics");
        // 反序列化保留字段，但业务路径从不读取它
        assert!(dto.products.is_some());
    }
}
