//! 分页参数
//!
//! 只有 consumer 服务对列表结果应用分页；supplier 始终返回完整结果集。

use serde::Deserialize;

/// 页码/页大小查询参数，默认 page=0、size=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub size: usize,
}

/// 默认页大小
pub fn default_page_size() -> usize {
    10
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: 0, size: default_page_size() }
    }
}

impl PageParams {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }

    /// size 必须至少为 1
    pub fn is_valid(&self) -> bool {
        self.size >= 1
    }

    /// 对完整结果集切片：跳过 page*size 条，取 size 条
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.page.saturating_mul(self.size))
            .take(self.size)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PageParams::default();
        assert_eq!(params.page, 0);
        assert_eq!(params.size, 10);
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let params: PageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, PageParams::default());
    }

    #[test]
    fn test_slice_first_page() {
        let params = PageParams::new(0, 3);
        assert_eq!(params.slice((1..=10).collect()), vec![1, 2, 3]);
    }

    #[test]
    fn test_slice_middle_page() {
        let params = PageParams::new(2, 3);
        assert_eq!(params.slice((1..=10).collect()), vec![7, 8, 9]);
    }

    #[test]
    fn test_slice_past_end() {
        let params = PageParams::new(5, 10);
        assert!(params.slice((1..=10).collect::<Vec<_>>()).is_empty());
    }

    #[test]
    fn test_zero_size_invalid() {
        assert!(!PageParams::new(0, 0).is_valid());
        assert!(PageParams::new(0, 1).is_valid());
    }
}
