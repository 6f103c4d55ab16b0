//! PostgreSQL Repository 实现

mod postgres_category_repository;
mod postgres_product_repository;

pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_product_repository::PostgresProductRepository;

/// LIKE/ILIKE 子串匹配模式
pub(crate) fn contains_pattern(keyword: &str) -> String {
    format!("%{}%", keyword)
}
