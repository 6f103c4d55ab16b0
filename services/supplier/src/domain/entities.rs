//! 分类与商品实体

use mall_common::{CategoryId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 商品分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// 商品
///
/// `category_id` 始终来自 products 行本身，任何返回商品的路径都不会缺失它。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: CategoryId,
}

/// 待插入的商品（ID 由数据库生成）
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: CategoryId,
}

impl Product {
    /// PUT 只覆盖 name/description/price，分类归属不变
    pub fn apply_update(&mut self, name: String, description: String, price: Decimal) {
        self.name = name;
        self.description = description;
        self.price = price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_apply_update_keeps_category() {
        let mut product = Product {
            id: ProductId(1),
            name: "Phone".to_string(),
            description: "Old".to_string(),
            price: Decimal::new(99999, 2),
            category_id: CategoryId(1),
        };

        product.apply_update(
            "Phone X".to_string(),
            "New".to_string(),
            Decimal::new(129999, 2),
        );

        assert_eq!(product.name, "Phone X");
        assert_eq!(product.description, "New");
        assert_eq!(product.price, Decimal::new(129999, 2));
        assert_eq!(product.category_id, CategoryId(1));
        assert_eq!(product.id, ProductId(1));
    }
}
