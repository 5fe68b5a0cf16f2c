//! 购物车状态机模块
//!
//! 单线程、同步的 UI 状态机：所有操作都是全函数，
//! 无效输入（未知 id、零数量）静默忽略，绝不失败。
//!
//! 两条核心不变量：
//! - 行数量 `1 ..= stock`，降到 0 的行立即移除，不保留零数量记录
//! - `total` 在每次变更后由 items 完整重算，绝不增量漂移

use crate::Product;

/// 购物车行：商品快照 + 数量
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// 行小计 = 单价 × 数量
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// 购物车状态
///
/// items 按加入顺序排列；字段私有以保证不变量只能经由操作方法变更。
/// 不做持久化，刷新页面即重置为空。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    items: Vec<CartLine>,
    total: f64,
}

impl CartState {
    /// 创建空购物车
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 所有行的数量之和（派生值，不存储）
    pub fn items_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// 加入商品
    ///
    /// - 无库存的商品直接忽略
    /// - 已有同 id 的行则数量 +1，上限为该行记录的库存
    /// - 否则按加入顺序追加数量为 1 的新行
    pub fn add_item(&mut self, product: Product) {
        if product.stock == 0 {
            return;
        }
        match self.line_mut(product.id) {
            Some(line) => line.quantity = (line.quantity + 1).min(line.product.stock),
            None => self.items.push(CartLine {
                product,
                quantity: 1,
            }),
        }
        self.recompute_total();
    }

    /// 整行移除；id 不存在时无事发生
    pub fn remove_item(&mut self, id: u32) {
        self.items.retain(|line| line.product.id != id);
        self.recompute_total();
    }

    /// 数量 +1，上限为库存；id 不存在时无事发生
    pub fn increment_item(&mut self, id: u32) {
        if let Some(line) = self.line_mut(id) {
            line.quantity = (line.quantity + 1).min(line.product.stock);
            self.recompute_total();
        }
    }

    /// 数量 -1；降到 0 时移除整行；id 不存在时无事发生
    pub fn decrement_item(&mut self, id: u32) {
        let Some(line) = self.line_mut(id) else {
            return;
        };
        line.quantity -= 1;
        self.items.retain(|line| line.quantity > 0);
        self.recompute_total();
    }

    /// 直接设置数量
    ///
    /// - `quantity == 0` 等价于 `remove_item`
    /// - 超过库存时收敛到库存上限
    /// - id 不存在时无事发生
    pub fn update_quantity(&mut self, id: u32, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity.min(line.product.stock);
            self.recompute_total();
        }
    }

    /// 清空购物车
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = 0.0;
    }

    fn line_mut(&mut self, id: u32) -> Option<&mut CartLine> {
        self.items.iter_mut().find(|line| line.product.id == id)
    }

    /// 由 items 完整重算总价
    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartLine::subtotal).sum();
    }
}

#[cfg(test)]
mod tests;
