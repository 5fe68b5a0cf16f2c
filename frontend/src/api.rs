//! 外部商品/认证 API 客户端
//!
//! 对 dummyjson 的固定入口做薄封装。不做超时、重试与并发去重
//! （单线程 UI 事件模型下同一资源不会有重叠请求）。

use gloo_net::http::Request;
use mercado_shared::{API_BASE_URL, Category, LoginRequest, ProductsPage, User};

/// API 错误类型
///
/// 调用方据此区分"凭据错误"与"其余一切"：前者有专属提示，
/// 后者一律降级为通用错误弹窗。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 网络请求失败
    Network(String),
    /// 非 2xx 响应
    Status(u16),
    /// 登录凭据错误 (400)
    BadCredentials,
    /// 响应体解析失败
    Parse(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "error de red: {}", msg),
            ApiError::Status(code) => write!(f, "respuesta inesperada: {}", code),
            ApiError::BadCredentials => write!(f, "credenciales incorrectas"),
            ApiError::Parse(msg) => write!(f, "respuesta ilegible: {}", msg),
        }
    }
}

/// 商品/认证 API 客户端
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketApi {
    base_url: String,
}

impl Default for MarketApi {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl MarketApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 拉取商品列表（`limit`/`skip` 分页窗口）
    pub async fn get_products(&self, limit: u32, skip: u32) -> Result<ProductsPage, ApiError> {
        let url = self.url(&format!("/products?limit={limit}&skip={skip}"));
        Self::fetch_json(&url).await
    }

    /// 拉取分类列表
    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.url("/products/categories");
        Self::fetch_json(&url).await
    }

    /// 按分类拉取商品
    pub async fn get_products_by_category(&self, slug: &str) -> Result<ProductsPage, ApiError> {
        let url = self.url(&format!("/products/category/{slug}"));
        Self::fetch_json(&url).await
    }

    /// 按关键字搜索商品
    pub async fn search_products(&self, query: &str) -> Result<ProductsPage, ApiError> {
        let encoded = String::from(js_sys::encode_uri_component(query));
        let url = self.url(&format!("/products/search?q={encoded}"));
        Self::fetch_json(&url).await
    }

    /// 登录：400 映射为 [`ApiError::BadCredentials`]
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let body = LoginRequest {
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        };

        let res = Request::post(&self.url("/auth/login"))
            .json(&body)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        match res.status() {
            400 => Err(ApiError::BadCredentials),
            _ if !res.ok() => Err(ApiError::Status(res.status())),
            _ => res
                .json::<User>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string())),
        }
    }

    /// GET + JSON 反序列化的公共路径
    async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
        let res = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(ApiError::Status(res.status()));
        }

        res.json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
