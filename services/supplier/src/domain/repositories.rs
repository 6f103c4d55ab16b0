//! Repository traits

use async_trait::async_trait;
use mall_common::{CategoryId, ProductId};
use mall_errors::AppResult;
use rust_decimal::Decimal;

use crate::domain::entities::{Category, NewProduct, Product};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// 插入分类，返回带生成 ID 的行
    async fn insert(&self, name: &str) -> AppResult<Category>;

    /// 根据 ID 查找分类
    async fn find_by_id(&self, id: CategoryId) -> AppResult<Option<Category>>;

    /// 查询全部分类
    async fn find_all(&self) -> AppResult<Vec<Category>>;

    /// 只覆盖 name；不存在时返回 None
    async fn update_name(&self, id: CategoryId, name: &str) -> AppResult<Option<Category>>;

    /// 删除分类（商品由外键级联删除）
    async fn delete(&self, id: CategoryId) -> AppResult<()>;

    /// 检查 ID 是否已存在
    async fn exists(&self, id: CategoryId) -> AppResult<bool>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 插入商品，返回带生成 ID 的行
    async fn insert(&self, new: &NewProduct) -> AppResult<Product>;

    /// 根据 ID 查找商品
    async fn find_by_id(&self, id: ProductId) -> AppResult<Option<Product>>;

    /// 查询全部商品
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// 覆盖 name/description/price
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// 按 ID 删除；目标不存在时不报错
    async fn delete(&self, id: ProductId) -> AppResult<()>;

    /// 价格区间过滤，两端包含
    async fn find_by_price_between(&self, min: Decimal, max: Decimal) -> AppResult<Vec<Product>>;

    /// 价格严格大于 min
    async fn find_by_price_greater_than(&self, min: Decimal) -> AppResult<Vec<Product>>;

    /// 价格严格小于 max
    async fn find_by_price_less_than(&self, max: Decimal) -> AppResult<Vec<Product>>;

    /// 按分类 ID 查询
    async fn find_by_category_id(&self, category_id: CategoryId) -> AppResult<Vec<Product>>;

    /// 名称包含关键字（不区分大小写）
    async fn find_by_name_containing(&self, keyword: &str) -> AppResult<Vec<Product>>;

    /// 名称不包含关键字（不区分大小写）
    async fn find_by_name_not_containing(&self, keyword: &str) -> AppResult<Vec<Product>>;

    /// 描述包含关键字（不区分大小写）
    async fn find_by_description_containing(&self, keyword: &str) -> AppResult<Vec<Product>>;
}
