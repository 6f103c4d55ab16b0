//! supplier 服务的类型化 HTTP 客户端
//!
//! 所有上游失败走同一套映射：传输层错误 → ExternalService，
//! 非 2xx 状态按状态码还原为对应的 AppError。

use std::time::Duration;

use mall_errors::{AppError, AppResult};
use reqwest::{Client, RequestBuilder, Response};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::dto::{CategoryDto, ProductDto};

pub struct SupplierClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl SupplierClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let response = request.timeout(self.timeout).send().await.map_err(|e| {
            error!(error = %e, "Failed to reach supplier service");
            AppError::external_service(format!("Failed to reach supplier service: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::from_upstream_status(
                status.as_u16(),
                format!("Supplier service returned {}: {}", status, detail),
            ));
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.send(self.http.get(self.url(path))).await?;
        response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("Invalid supplier response: {}", e)))
    }

    async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("Invalid supplier response: {}", e)))
    }

    // ---- categories ----

    pub async fn create_category(&self, dto: &CategoryDto) -> AppResult<CategoryDto> {
        let response = self
            .send(self.http.post(self.url("/categories")).json(dto))
            .await?;
        response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("Invalid supplier response: {}", e)))
    }

    pub async fn get_all_categories(&self) -> AppResult<Vec<CategoryDto>> {
        self.get_json("/categories").await
    }

    pub async fn get_category_by_id(&self, id: i64) -> AppResult<CategoryDto> {
        self.get_json(&format!("/categories/{}", id)).await
    }

    pub async fn update_category(&self, id: i64, dto: &CategoryDto) -> AppResult<CategoryDto> {
        let response = self
            .send(self.http.put(self.url(&format!("/categories/{}", id))).json(dto))
            .await?;
        response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("Invalid supplier response: {}", e)))
    }

    pub async fn delete_category(&self, id: i64) -> AppResult<()> {
        self.send(self.http.delete(self.url(&format!("/categories/{}", id))))
            .await?;
        Ok(())
    }

    // ---- products ----

    pub async fn create_product(&self, dto: &ProductDto) -> AppResult<ProductDto> {
        let response = self
            .send(self.http.post(self.url("/products")).json(dto))
            .await?;
        response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("Invalid supplier response: {}", e)))
    }

    pub async fn get_all_products(&self) -> AppResult<Vec<ProductDto>> {
        self.get_json("/products").await
    }

    pub async fn get_product_by_id(&self, id: i64) -> AppResult<ProductDto> {
        self.get_json(&format!("/products/{}", id)).await
    }

    pub async fn update_product(&self, id: i64, dto: &ProductDto) -> AppResult<ProductDto> {
        let response = self
            .send(self.http.put(self.url(&format!("/products/{}", id))).json(dto))
            .await?;
        response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("Invalid supplier response: {}", e)))
    }

    pub async fn delete_product(&self, id: i64) -> AppResult<()> {
        self.send(self.http.delete(self.url(&format!("/products/{}", id))))
            .await?;
        Ok(())
    }

    // ---- filter / search ----

    pub async fn filter_by_price_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> AppResult<Vec<ProductDto>> {
        self.get_json_with_query(
            "/products/price/range/",
            &[("min", min.to_string()), ("max", max.to_string())],
        )
        .await
    }

    pub async fn filter_by_price_greater(&self, min: Decimal) -> AppResult<Vec<ProductDto>> {
        self.get_json_with_query("/products/price/greater/", &[("min", min.to_string())])
            .await
    }

    pub async fn filter_by_price_less(&self, max: Decimal) -> AppResult<Vec<ProductDto>> {
        self.get_json_with_query("/products/price/less/", &[("max", max.to_string())])
            .await
    }

    pub async fn search_by_category(&self, category_id: i64) -> AppResult<Vec<ProductDto>> {
        self.get_json(&format!("/products/search/category/{}", category_id))
            .await
    }

    pub async fn search_by_name(&self, keyword: &str) -> AppResult<Vec<ProductDto>> {
        self.get_json_with_query("/products/search/name/", &[("keyword", keyword.to_string())])
            .await
    }

    pub async fn search_by_name_not_containing(&self, keyword: &str) -> AppResult<Vec<ProductDto>> {
        self.get_json_with_query(
            "/products/search/name/not-containing/",
            &[("keyword", keyword.to_string())],
        )
        .await
    }

    pub async fn search_by_description(&self, keyword: &str) -> AppResult<Vec<ProductDto>> {
        self.get_json_with_query(
            "/products/search/description/",
            &[("keyword", keyword.to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_strips_trailing_slash() {
        let client = SupplierClient::new("http://localhost:8081/", Duration::from_secs(5));
        assert_eq!(client.url("/products"), "http://localhost:8081/products");

        let client = SupplierClient::new("http://localhost:8081", Duration::from_secs(5));
        assert_eq!(
            client.url("/products/price/range/"),
            "http://localhost:8081/products/price/range/"
        );
    }
}
