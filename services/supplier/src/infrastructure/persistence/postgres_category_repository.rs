//! PostgreSQL 分类 Repository 实现

use async_trait::async_trait;
use mall_common::CategoryId;
use mall_errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entities::Category;
use crate::domain::repositories::CategoryRepository;

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, name: &str) -> AppResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert category: {}", e)))?;

        Ok(row.into_category())
    }

    async fn find_by_id(&self, id: CategoryId) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name FROM categories WHERE id = $1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find category: {}", e)))?;

        Ok(row.map(|r| r.into_category()))
    }

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list categories: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_category()).collect())
    }

    async fn update_name(&self, id: CategoryId, name: &str) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE categories SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id.as_i64())
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update category: {}", e)))?;

        Ok(row.map(|r| r.into_category()))
    }

    async fn delete(&self, id: CategoryId) -> AppResult<()> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete category: {}", e)))?;

        Ok(())
    }

    async fn exists(&self, id: CategoryId) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id.as_i64())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to check category: {}", e)))?;

        Ok(result.0)
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            id: CategoryId(self.id),
            name: self.name,
        }
    }
}
