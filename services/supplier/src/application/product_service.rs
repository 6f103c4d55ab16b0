//! 商品业务逻辑

use std::sync::Arc;

use mall_common::{CategoryId, ProductId};
use mall_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::{CategoryRepository, ProductRepository};

pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self { products, categories }
    }

    /// 创建商品；引用的分类必须已存在
    pub async fn create_product(&self, new: NewProduct) -> AppResult<Product> {
        if self.categories.find_by_id(new.category_id).await?.is_none() {
            warn!(category_id = %new.category_id, "Rejecting product creation: category not found");
            return Err(AppError::not_found(format!(
                "Category with id {} not found",
                new.category_id
            )));
        }

        let product = self.products.insert(&new).await?;
        info!(id = %product.id, category_id = %product.category_id, "Product created");
        Ok(product)
    }

    pub async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        self.products.find_all().await
    }

    pub async fn get_product_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        self.products.find_by_id(id).await
    }

    /// 更新商品
    ///
    /// 目标不存在时返回 Ok(None)（软失败），与存储层错误（Err）严格区分；
    /// 只覆盖 name/description/price，分类归属不变。
    pub async fn update_product(
        &self,
        id: ProductId,
        name: String,
        description: String,
        price: Decimal,
    ) -> AppResult<Option<Product>> {
        let Some(mut product) = self.products.find_by_id(id).await? else {
            return Ok(None);
        };

        product.apply_update(name, description, price);
        self.products.update(&product).await?;
        Ok(Some(product))
    }

    /// 按 ID 删除；不做存在性预检查，目标不存在时不报错
    pub async fn delete_product(&self, id: ProductId) -> AppResult<()> {
        self.products.delete(id).await
    }

    pub async fn filter_by_price_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> AppResult<Vec<Product>> {
        self.products.find_by_price_between(min, max).await
    }

    pub async fn filter_by_price_greater(&self, min: Decimal) -> AppResult<Vec<Product>> {
        self.products.find_by_price_greater_than(min).await
    }

    pub async fn filter_by_price_less(&self, max: Decimal) -> AppResult<Vec<Product>> {
        self.products.find_by_price_less_than(max).await
    }

    pub async fn search_by_category(&self, category_id: CategoryId) -> AppResult<Vec<Product>> {
        self.products.find_by_category_id(category_id).await
    }

    pub async fn search_by_name(&self, keyword: &str) -> AppResult<Vec<Product>> {
        self.products.find_by_name_containing(keyword).await
    }

    pub async fn search_by_name_not_containing(&self, keyword: &str) -> AppResult<Vec<Product>> {
        self.products.find_by_name_not_containing(keyword).await
    }

    pub async fn search_by_description(&self, keyword: &str) -> AppResult<Vec<Product>> {
        self.products.find_by_description_containing(keyword).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CategoryService;
    use crate::application::testing::{
        InMemoryCategoryRepository, InMemoryProductRepository, InMemoryStore,
    };

    struct Fixture {
        categories: CategoryService,
        products: ProductService,
    }

    fn fixture() -> Fixture {
        let store = InMemoryStore::shared();
        let category_repo = Arc::new(InMemoryCategoryRepository::new(store.clone()));
        let product_repo = Arc::new(InMemoryProductRepository::new(store));
        Fixture {
            categories: CategoryService::new(category_repo.clone()),
            products: ProductService::new(product_repo, category_repo),
        }
    }

    fn new_product(name: &str, price: Decimal, category_id: CategoryId) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            category_id,
        }
    }

    async fn seed_category(fx: &Fixture, name: &str) -> CategoryId {
        fx.categories
            .create_category(None, name.to_string())
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_product_requires_existing_category() {
        let fx = fixture();

        let result = fx
            .products
            .create_product(new_product("Phone", Decimal::new(99999, 2), CategoryId(42)))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_product_carries_category_id() {
        let fx = fixture();
        let category_id = seed_category(&fx, "Electronics").await;

        let product = fx
            .products
            .create_product(new_product("Phone", Decimal::new(99999, 2), category_id))
            .await
            .unwrap();

        assert_eq!(product.category_id, category_id);
        assert_eq!(product.name, "Phone");
        assert_eq!(product.id, ProductId(1));
    }

    #[tokio::test]
    async fn test_update_product_missing_id_is_soft_not_found() {
        let fx = fixture();

        let result = fx
            .products
            .update_product(
                ProductId(404),
                "X".to_string(),
                "Y".to_string(),
                Decimal::ONE,
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_product_overwrites_fields_keeps_category() {
        let fx = fixture();
        let category_id = seed_category(&fx, "Electronics").await;
        let product = fx
            .products
            .create_product(new_product("Phone", Decimal::new(99999, 2), category_id))
            .await
            .unwrap();

        let updated = fx
            .products
            .update_product(
                product.id,
                "Phone X".to_string(),
                "Updated".to_string(),
                Decimal::new(149999, 2),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Phone X");
        assert_eq!(updated.description, "Updated");
        assert_eq!(updated.price, Decimal::new(149999, 2));
        assert_eq!(updated.category_id, category_id);
    }

    #[tokio::test]
    async fn test_delete_product_without_existence_check() {
        let fx = fixture();
        fx.products.delete_product(ProductId(404)).await.unwrap();
    }

    #[tokio::test]
    async fn test_category_delete_cascades_to_products() {
        let fx = fixture();
        let category_id = seed_category(&fx, "Electronics").await;
        let product = fx
            .products
            .create_product(new_product("Phone", Decimal::new(99999, 2), category_id))
            .await
            .unwrap();

        fx.categories.delete_category(category_id).await.unwrap();

        let found = fx.products.get_product_by_id(product.id).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_price_filters_strict_and_inclusive() {
        let fx = fixture();
        let category_id = seed_category(&fx, "Electronics").await;
        let price = Decimal::new(99999, 2); // 999.99
        fx.products
            .create_product(new_product("Phone", price, category_id))
            .await
            .unwrap();

        // range 两端包含
        let in_range = fx
            .products
            .filter_by_price_range(Decimal::new(500, 0), Decimal::new(1500, 0))
            .await
            .unwrap();
        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].name, "Phone");

        let at_bound = fx
            .products
            .filter_by_price_range(price, price)
            .await
            .unwrap();
        assert_eq!(at_bound.len(), 1);

        // greater/less 为严格比较
        assert!(fx.products.filter_by_price_greater(price).await.unwrap().is_empty());
        assert!(fx.products.filter_by_price_less(price).await.unwrap().is_empty());
        assert_eq!(
            fx.products
                .filter_by_price_greater(Decimal::new(99998, 2))
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_name_and_description_search() {
        let fx = fixture();
        let category_id = seed_category(&fx, "Electronics").await;
        fx.products
            .create_product(new_product("Phone", Decimal::new(99999, 2), category_id))
            .await
            .unwrap();
        fx.products
            .create_product(new_product("Laptop", Decimal::new(199999, 2), category_id))
            .await
            .unwrap();

        let by_name = fx.products.search_by_name("pho").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Phone");

        let excluded = fx
            .products
            .search_by_name_not_containing("pho")
            .await
            .unwrap();
        assert_eq!(excluded.len(), 1);
        assert_eq!(excluded[0].name, "Laptop");

        let by_description = fx.products.search_by_description("LAPTOP").await.unwrap();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Laptop");
    }

    #[tokio::test]
    async fn test_search_by_category() {
        let fx = fixture();
        let electronics = seed_category(&fx, "Electronics").await;
        let books = seed_category(&fx, "Books").await;
        fx.products
            .create_product(new_product("Phone", Decimal::new(99999, 2), electronics))
            .await
            .unwrap();
        fx.products
            .create_product(new_product("Novel", Decimal::new(999, 2), books))
            .await
            .unwrap();

        let found = fx.products.search_by_category(books).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Novel");
    }
}
