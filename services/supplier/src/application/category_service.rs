//! 分类业务逻辑

use std::sync::Arc;

use mall_common::CategoryId;
use mall_errors::{AppError, AppResult};
use tracing::{info, warn};

use crate::domain::entities::Category;
use crate::domain::repositories::CategoryRepository;

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// 创建分类
    ///
    /// 客户端显式提供的 ID 若已存在则拒绝；插入本身始终使用数据库生成的 ID。
    pub async fn create_category(
        &self,
        supplied_id: Option<CategoryId>,
        name: String,
    ) -> AppResult<Category> {
        if let Some(id) = supplied_id {
            if self.categories.exists(id).await? {
                warn!(%id, "Rejecting category creation: id already exists");
                return Err(AppError::conflict(format!(
                    "Category with id {} already exists",
                    id
                )));
            }
        }

        let category = self.categories.insert(&name).await?;
        info!(id = %category.id, "Category created");
        Ok(category)
    }

    pub async fn get_all_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.find_all().await
    }

    pub async fn get_category_by_id(&self, id: CategoryId) -> AppResult<Option<Category>> {
        self.categories.find_by_id(id).await
    }

    /// 只覆盖 name，payload 中的商品列表被忽略；目标不存在时返回 None
    pub async fn update_category(
        &self,
        id: CategoryId,
        name: String,
    ) -> AppResult<Option<Category>> {
        self.categories.update_name(id, &name).await
    }

    /// 删除分类；其下商品由外键级联删除，目标不存在时静默成功
    pub async fn delete_category(&self, id: CategoryId) -> AppResult<()> {
        if self.categories.find_by_id(id).await?.is_some() {
            self.categories.delete(id).await?;
            info!(%id, "Category deleted");
        }
        Ok(())
    }
}
