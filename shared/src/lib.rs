//! Mercado 共享领域模块
//!
//! 前端与测试共用的纯业务逻辑层，不依赖浏览器 API：
//! - 外部商品 API 的数据模型（serde camelCase 线格式）
//! - 购物车状态机（`cart`）
//! - 分页纯函数（`pagination`）
//! - 表单校验器（`validation`）

use serde::{Deserialize, Serialize};

pub mod cart;
pub mod pagination;
pub mod validation;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 外部商品/认证 API 的固定入口
pub const API_BASE_URL: &str = "https://dummyjson.com";

/// LocalStorage 中持久化登录身份的键
pub const STORAGE_USER_KEY: &str = "mercado_user";

// =========================================================
// 商品目录模型 (Catalog Models)
// =========================================================

/// 商品快照
///
/// 由外部 API 返回的只读数据，本系统不拥有也不修改它。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// 商品分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
}

/// 商品列表响应（`/products` 系列端点的统一形状）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

// =========================================================
// 认证模型 (Auth Models)
// =========================================================

/// 登录成功后的身份记录
///
/// 每个浏览器会话至多一个活跃身份；以 JSON 形式持久化到 LocalStorage。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub image: String,
    pub token: String,
}

impl User {
    /// 序列化为持久化用的 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// 从持久化记录还原身份
    ///
    /// 记录损坏时返回 `Err`，调用方应将其视为"未登录"并删除该记录。
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// 登录请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            username: "emilys".to_string(),
            email: "emily@x.dummyjson.com".to_string(),
            first_name: "Emily".to_string(),
            last_name: "Johnson".to_string(),
            gender: "female".to_string(),
            image: "https://dummyjson.com/icon/emilys/128".to_string(),
            token: "abc.def.ghi".to_string(),
        }
    }

    fn user_wire_json() -> &'static str {
        r#"{
            "id": 1,
            "username": "emilys",
            "email": "emily@x.dummyjson.com",
            "firstName": "Emily",
            "lastName": "Johnson",
            "gender": "female",
            "image": "https://dummyjson.com/icon/emilys/128",
            "token": "abc.def.ghi"
        }"#
    }

    #[test]
    fn test_user_json_round_trip() {
        let user = sample_user();
        let raw = user.to_json().unwrap();
        let restored = User::from_json(&raw).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_user_wire_format_is_camel_case() {
        let user = User::from_json(user_wire_json()).unwrap();
        assert_eq!(user.first_name, "Emily");
        assert_eq!(user.last_name, "Johnson");

        let out = user.to_json().unwrap();
        assert!(out.contains("\"firstName\""));
        assert!(!out.contains("first_name"));
    }

    #[test]
    fn test_corrupt_user_record_is_an_error() {
        assert!(User::from_json("not json at all").is_err());
        assert!(User::from_json("{\"id\":1}").is_err());
        assert!(User::from_json("").is_err());
    }

    #[test]
    fn test_product_parses_wire_format() {
        let raw = r#"{
            "id": 1,
            "title": "Essence Mascara",
            "description": "Popular mascara",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "brand": "Essence",
            "category": "beauty",
            "thumbnail": "https://cdn.dummyjson.com/1.png",
            "images": ["https://cdn.dummyjson.com/1-full.png"]
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.stock, 5);
        assert_eq!(product.discount_percentage, 7.17);
        assert_eq!(product.brand.as_deref(), Some("Essence"));
    }

    #[test]
    fn test_products_page_tolerates_missing_counters() {
        let raw = r#"{"products": []}"#;
        let page: ProductsPage = serde_json::from_str(raw).unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.total, 0);
    }
}
