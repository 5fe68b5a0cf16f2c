//! 认证模块
//!
//! 管理当前登录身份，与路由系统解耦：
//! 路由服务只消费由此派生的 [`GuardState`] 信号。
//!
//! 身份以 JSON 持久化到 LocalStorage；损坏的记录在初始化时
//! 被静默丢弃并删除，等价于未登录，绝不向用户抛错。

use crate::web::LocalStorage;
use crate::web::router::GuardState;
use leptos::prelude::*;
use mercado_shared::{STORAGE_USER_KEY, User};

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// 当前身份（登录后存在）
    pub user: Option<User>,
    /// 初始还原是否仍在进行；为 true 时不得做授权决策
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 派生守卫信号（用于路由服务注入）
    pub fn guard_signal(&self) -> Signal<GuardState> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                if s.is_loading {
                    GuardState::Loading
                } else if s.user.is_some() {
                    GuardState::Authenticated
                } else {
                    GuardState::Anonymous
                }
            })
        })
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 还原上次的身份；解析失败视为未登录并删除记录。
pub fn init_auth(ctx: &AuthContext) {
    let restored = match LocalStorage::get(STORAGE_USER_KEY) {
        None => None,
        Some(raw) => match User::from_json(&raw) {
            Ok(user) => Some(user),
            Err(_) => {
                // 损坏的持久化记录：丢弃并清理，等价于登出
                web_sys::console::warn_1(
                    &"[Auth] Stored identity is corrupt, discarding.".into(),
                );
                LocalStorage::remove(STORAGE_USER_KEY);
                None
            }
        },
    };

    ctx.set_state.update(|state| {
        state.user = restored;
        state.is_loading = false;
    });
}

/// 登录并保存状态
///
/// 产生身份的网络调用是调用方的职责；给定合法身份本操作必定成功。
pub fn login(ctx: &AuthContext, user: User) {
    if let Ok(raw) = user.to_json() {
        LocalStorage::set(STORAGE_USER_KEY, &raw);
    }

    ctx.set_state.update(|state| {
        state.user = Some(user);
    });
}

/// 注销并清除状态
///
/// 导航由路由服务的守卫监听自动处理，此处不做跳转。
pub fn logout(ctx: &AuthContext) {
    LocalStorage::remove(STORAGE_USER_KEY);

    ctx.set_state.update(|state| {
        state.user = None;
    });
}
