//! mall-common - 通用类型和工具库

pub mod pagination;
pub mod types;

pub use pagination::*;
pub use types::*;
