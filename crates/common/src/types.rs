//! 通用类型定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 分类 ID（由数据库生成，创建后不可变）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 商品 ID（由数据库生成，创建后不可变）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}
