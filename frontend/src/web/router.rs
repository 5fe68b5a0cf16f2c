//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 认证守卫以注入的三态信号实现："加载 -> 验证 -> 重定向/渲染"。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 守卫三态
///
/// 由认证系统派生并注入路由服务，路由层不感知认证细节。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// 身份尚在从持久化存储还原，期间不得做授权决策
    Loading,
    /// 无身份
    Anonymous,
    /// 已认证
    Authenticated,
}

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 注入的守卫信号
    guard: Signal<GuardState>,
}

impl RouterService {
    fn new(guard: Signal<GuardState>) -> Self {
        // 初始路由从当前 URL 解析
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            guard,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 获取守卫信号（路由出口根据它渲染占位符）
    pub fn guard(&self) -> Signal<GuardState> {
        self.guard
    }

    /// 核心方法：导航与守卫
    pub fn navigate(&self, target: AppRoute) {
        self.navigate_to_route(target, true);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `target` - 目标路由
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        match self.guard.get_untracked() {
            // 加载期间不做重定向：先落到目标路由，出口渲染占位符，
            // 加载完成后由守卫 Effect 补做验证
            GuardState::Loading => {}
            GuardState::Anonymous if target.requires_auth() => {
                web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
                return self.apply_route(AppRoute::auth_failure_redirect(), use_push);
            }
            GuardState::Authenticated if target.should_redirect_when_authenticated() => {
                web_sys::console::log_1(&"[Router] Already authenticated. Redirecting home.".into());
                return self.apply_route(AppRoute::auth_success_redirect(), use_push);
            }
            _ => {}
        }

        self.apply_route(target, use_push);
    }

    /// 推入 History 并更新路由信号
    fn apply_route(&self, route: AppRoute, use_push: bool) {
        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let guard = self.guard;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());

            // popstate 时也执行守卫逻辑
            if target.requires_auth() && guard.get_untracked() == GuardState::Anonymous {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 守卫状态变化时的自动重定向
    ///
    /// - 加载完成且无身份：受保护路由跳回登录页
    /// - 登录成功：登录页跳到商品目录
    /// - 登出：任意受保护页面跳回登录页
    fn setup_guard_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let guard = self.guard;

        Effect::new(move |_| {
            let route = current_route.get_untracked();

            match guard.get() {
                GuardState::Loading => {}
                GuardState::Anonymous => {
                    if route.requires_auth() {
                        web_sys::console::log_1(
                            &"[Router] No identity. Redirecting to login.".into(),
                        );
                        let redirect = AppRoute::auth_failure_redirect();
                        replace_history_state(redirect.to_path());
                        set_route.set(redirect);
                    }
                }
                GuardState::Authenticated => {
                    if route.should_redirect_when_authenticated() {
                        let redirect = AppRoute::auth_success_redirect();
                        push_history_state(redirect.to_path());
                        set_route.set(redirect);
                    }
                }
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(guard: Signal<GuardState>) -> RouterService {
    let router = RouterService::new(guard);

    router.init_popstate_listener();
    router.setup_guard_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 守卫信号
    guard: Signal<GuardState>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(guard);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。守卫仍在加载时，
/// 对认证敏感的路由渲染占位符而不触发任何重定向。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        let auth_sensitive =
            current.requires_auth() || current.should_redirect_when_authenticated();

        if auth_sensitive && router.guard().get() == GuardState::Loading {
            view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any()
        } else {
            matcher(current)
        }
    }
}
