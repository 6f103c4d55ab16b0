//! 内存版 Repository，供业务层测试使用
//!
//! 与 PostgreSQL 实现保持相同语义：ILIKE 不区分大小写、BETWEEN 两端包含、
//! 分类删除级联商品。

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mall_common::{CategoryId, ProductId};
use mall_errors::AppResult;
use rust_decimal::Decimal;

use crate::domain::entities::{Category, NewProduct, Product};
use crate::domain::repositories::{CategoryRepository, ProductRepository};

pub(crate) struct InMemoryStore {
    categories: Mutex<Vec<Category>>,
    products: Mutex<Vec<Product>>,
    next_category_id: AtomicI64,
    next_product_id: AtomicI64,
}

impl InMemoryStore {
    pub(crate) fn shared() -> Arc<Self> {
        Arc::new(Self {
            categories: Mutex::new(Vec::new()),
            products: Mutex::new(Vec::new()),
            next_category_id: AtomicI64::new(1),
            next_product_id: AtomicI64::new(1),
        })
    }
}

pub(crate) struct InMemoryCategoryRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryCategoryRepository {
    pub(crate) fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, name: &str) -> AppResult<Category> {
        let id = CategoryId(self.store.next_category_id.fetch_add(1, Ordering::SeqCst));
        let category = Category { id, name: name.to_string() };
        self.store.categories.lock().unwrap().push(category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: CategoryId) -> AppResult<Option<Category>> {
        Ok(self
            .store
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        Ok(self.store.categories.lock().unwrap().clone())
    }

    async fn update_name(&self, id: CategoryId, name: &str) -> AppResult<Option<Category>> {
        let mut categories = self.store.categories.lock().unwrap();
        match categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.name = name.to_string();
                Ok(Some(category.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: CategoryId) -> AppResult<()> {
        self.store.categories.lock().unwrap().retain(|c| c.id != id);
        // 外键级联的内存版等价
        self.store
            .products
            .lock()
            .unwrap()
            .retain(|p| p.category_id != id);
        Ok(())
    }

    async fn exists(&self, id: CategoryId) -> AppResult<bool> {
        Ok(self
            .store
            .categories
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.id == id))
    }
}

pub(crate) struct InMemoryProductRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryProductRepository {
    pub(crate) fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }

    fn filter(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.store
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, new: &NewProduct) -> AppResult<Product> {
        let id = ProductId(self.store.next_product_id.fetch_add(1, Ordering::SeqCst));
        let product = Product {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            price: new.price,
            category_id: new.category_id,
        };
        self.store.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>> {
        Ok(self
            .store
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.store.products.lock().unwrap().clone())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut products = self.store.products.lock().unwrap();
        if let Some(existing) = products.iter_mut().find(|p| p.id == product.id) {
            existing.name = product.name.clone();
            existing.description = product.description.clone();
            existing.price = product.price;
        }
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> AppResult<()> {
        self.store.products.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn find_by_price_between(&self, min: Decimal, max: Decimal) -> AppResult<Vec<Product>> {
        Ok(self.filter(|p| p.price >= min && p.price <= max))
    }

    async fn find_by_price_greater_than(&self, min: Decimal) -> AppResult<Vec<Product>> {
        Ok(self.filter(|p| p.price > min))
    }

    async fn find_by_price_less_than(&self, max: Decimal) -> AppResult<Vec<Product>> {
        Ok(self.filter(|p| p.price < max))
    }

    async fn find_by_category_id(&self, category_id: CategoryId) -> AppResult<Vec<Product>> {
        Ok(self.filter(|p| p.category_id == category_id))
    }

    async fn find_by_name_containing(&self, keyword: &str) -> AppResult<Vec<Product>> {
        Ok(self.filter(|p| contains_ci(&p.name, keyword)))
    }

    async fn find_by_name_not_containing(&self, keyword: &str) -> AppResult<Vec<Product>> {
        Ok(self.filter(|p| !contains_ci(&p.name, keyword)))
    }

    async fn find_by_description_containing(&self, keyword: &str) -> AppResult<Vec<Product>> {
        Ok(self.filter(|p| contains_ci(&p.description, keyword)))
    }
}
