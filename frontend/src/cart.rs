//! 购物车状态容器
//!
//! 把 `mercado-shared` 的纯状态机包装为响应式上下文：
//! 所有变更经由状态机方法完成，组件只读派生信号。
//! 不持久化，刷新页面即回到空车。

use leptos::prelude::*;
use mercado_shared::Product;
use mercado_shared::cart::CartState;

/// 购物车上下文
///
/// `RwSignal` 实现 `Copy`，适合在组件间直接传递。
#[derive(Clone, Copy)]
pub struct CartContext {
    state: RwSignal<CartState>,
}

impl CartContext {
    /// 创建空购物车上下文
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(CartState::new()),
        }
    }

    /// 原始状态信号（供视图做响应式读取）
    pub fn state(&self) -> RwSignal<CartState> {
        self.state
    }

    /// 所有行数量之和（购物车角标）
    pub fn items_count(&self) -> Signal<u32> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items_count()))
    }

    /// 购物车是否为空
    pub fn is_empty(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_empty()))
    }

    /// 总价
    pub fn total(&self) -> Signal<f64> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.total()))
    }

    pub fn add_item(&self, product: Product) {
        self.state.update(|s| s.add_item(product));
    }

    pub fn remove_item(&self, id: u32) {
        self.state.update(|s| s.remove_item(id));
    }

    pub fn increment_item(&self, id: u32) {
        self.state.update(|s| s.increment_item(id));
    }

    pub fn decrement_item(&self, id: u32) {
        self.state.update(|s| s.decrement_item(id));
    }

    pub fn update_quantity(&self, id: u32, quantity: u32) {
        self.state.update(|s| s.update_quantity(id, quantity));
    }

    pub fn clear(&self) {
        self.state.update(|s| s.clear());
    }
}

/// 从 Context 获取购物车上下文
pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext should be provided")
}
