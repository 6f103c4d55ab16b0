//! PostgreSQL 商品 Repository 实现
//!
//! 过滤语义：greater/less 为严格比较，BETWEEN 两端包含。

use async_trait::async_trait;
use mall_common::{CategoryId, ProductId};
use mall_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::contains_pattern;
use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, new: &NewProduct) -> AppResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            "INSERT INTO products (name, description, price, category_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, name, description, price, category_id",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(new.category_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert product: {}", e)))?;

        Ok(row.into_product())
    }

    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, category_id FROM products WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find product: {}", e)))?;

        Ok(row.map(|r| r.into_product()))
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, category_id FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list products: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_product()).collect())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        sqlx::query("UPDATE products SET name = $2, description = $3, price = $4 WHERE id = $1")
            .bind(product.id.as_i64())
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update product: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, id: ProductId) -> AppResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete product: {}", e)))?;

        Ok(())
    }

    async fn find_by_price_between(&self, min: Decimal, max: Decimal) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, category_id FROM products \
             WHERE price BETWEEN $1 AND $2",
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to filter by price range: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_product()).collect())
    }

    async fn find_by_price_greater_than(&self, min: Decimal) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, category_id FROM products WHERE price > $1",
        )
        .bind(min)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to filter by price greater: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_product()).collect())
    }

    async fn find_by_price_less_than(&self, max: Decimal) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, category_id FROM products WHERE price < $1",
        )
        .bind(max)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to filter by price less: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_product()).collect())
    }

    async fn find_by_category_id(&self, category_id: CategoryId) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, category_id FROM products \
             WHERE category_id = $1",
        )
        .bind(category_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to search by category: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_product()).collect())
    }

    async fn find_by_name_containing(&self, keyword: &str) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, category_id FROM products WHERE name ILIKE $1",
        )
        .bind(contains_pattern(keyword))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to search by name: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_product()).collect())
    }

    async fn find_by_name_not_containing(&self, keyword: &str) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, category_id FROM products \
             WHERE name NOT ILIKE $1",
        )
        .bind(contains_pattern(keyword))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to search by name not containing: {}", e))
        })?;

        Ok(rows.into_iter().map(|r| r.into_product()).collect())
    }

    async fn find_by_description_containing(&self, keyword: &str) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price, category_id FROM products \
             WHERE description ILIKE $1",
        )
        .bind(contains_pattern(keyword))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to search by description: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_product()).collect())
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: Decimal,
    category_id: i64,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: ProductId(self.id),
            name: self.name,
            description: self.description,
            price: self.price,
            category_id: CategoryId(self.category_id),
        }
    }
}
