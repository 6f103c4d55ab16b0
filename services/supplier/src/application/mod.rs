//! 业务逻辑层

mod category_service;
mod product_service;

pub use category_service::CategoryService;
pub use product_service::ProductService;

#[cfg(test)]
pub(crate) mod testing;
