//! Mercado 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务 + 认证守卫（核心引擎）
//! - `auth`: 认证状态管理（含 LocalStorage 持久化）
//! - `cart`: 购物车状态容器（包装 `mercado-shared` 的状态机）
//! - `api`: 外部商品/认证 API 客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod cart;
mod components {
    pub mod cart;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod summary;
}

// 原生 Web API 封装模块
// 所有对 window.history / window.localStorage 的操作都集中在此。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use crate::auth::{AuthContext, init_auth};
use crate::cart::CartContext;
use crate::components::cart::CartPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::summary::SummaryPage;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::Summary => view! { <SummaryPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página no encontrada"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证与购物车上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    let cart_ctx = CartContext::new();
    provide_context(cart_ctx);

    // 2. 初始化认证状态（从 LocalStorage 还原身份）
    init_auth(&auth_ctx);

    // 3. 获取守卫信号，注入路由服务（解耦）
    let guard = auth_ctx.guard_signal();

    view! {
        // 4. 路由器组件：注入守卫信号实现受保护路由
        <Router guard=guard>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
