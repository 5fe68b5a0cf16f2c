//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由及其守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 商品目录 (需要认证)
    Home,
    /// 购物车 (需要认证)
    Cart,
    /// 订单摘要 (需要认证)
    Summary,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/home" => Self::Home,
            "/cart" => Self::Cart,
            "/summary" => Self::Summary,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Home => "/home",
            Self::Cart => "/cart",
            Self::Summary => "/summary",
            Self::NotFound => "/404",
        }
    }

    /// 核心守卫逻辑：该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Home | Self::Cart | Self::Summary)
    }

    /// 已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_maps_known_routes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/home"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/cart"), AppRoute::Cart);
        assert_eq!(AppRoute::from_path("/summary"), AppRoute::Summary);
        assert_eq!(AppRoute::from_path("/otra-cosa"), AppRoute::NotFound);
    }

    #[test]
    fn test_protected_routes_require_auth() {
        assert!(AppRoute::Home.requires_auth());
        assert!(AppRoute::Cart.requires_auth());
        assert!(AppRoute::Summary.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
    }

    #[test]
    fn test_redirect_targets() {
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Home);
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
    }
}
