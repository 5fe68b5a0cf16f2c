//! 订单表单状态模块
//!
//! 将零散的 signal 整合为 `OrderFormState` 结构体，负责：
//! - 数据的持有与重置
//! - 提交前的字段级校验（错误信息写回 `errors`）

use leptos::prelude::*;
use mercado_shared::validation;

/// 配送区固定清单
pub const DISTRICTS: [&str; 10] = [
    "Lima",
    "Miraflores",
    "San Isidro",
    "Barranco",
    "Surco",
    "La Molina",
    "Jesús María",
    "Lince",
    "Magdalena",
    "Pueblo Libre",
];

/// 字段级错误信息
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderFormErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// 订单表单状态
///
/// `RwSignal` 实现 `Copy`，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct OrderFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub district: RwSignal<String>,
    pub address: RwSignal<String>,
    /// 参考信息（唯一的可选字段）
    pub reference: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub errors: RwSignal<OrderFormErrors>,
}

impl OrderFormState {
    pub fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            district: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            reference: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            errors: RwSignal::new(OrderFormErrors::default()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.first_name.set(String::new());
        self.last_name.set(String::new());
        self.district.set(String::new());
        self.address.set(String::new());
        self.reference.set(String::new());
        self.phone.set(String::new());
        self.errors.set(OrderFormErrors::default());
    }

    /// 校验全部字段；错误写入 `errors`，全部通过返回 true
    pub fn validate(&self) -> bool {
        const REQUIRED: &str = "Campo obligatorio";
        const BAD_NAME: &str = "Debe ingresar un valor válido";
        const BAD_PHONE: &str = "Debe ingresar un número válido (9 dígitos)";

        let mut errors = OrderFormErrors::default();

        let first_name = self.first_name.get_untracked();
        if !validation::is_filled(&first_name) {
            errors.first_name = Some(REQUIRED.to_string());
        } else if !validation::is_valid_name(&first_name) {
            errors.first_name = Some(BAD_NAME.to_string());
        }

        let last_name = self.last_name.get_untracked();
        if !validation::is_filled(&last_name) {
            errors.last_name = Some(REQUIRED.to_string());
        } else if !validation::is_valid_name(&last_name) {
            errors.last_name = Some(BAD_NAME.to_string());
        }

        if self.district.get_untracked().is_empty() {
            errors.district = Some(REQUIRED.to_string());
        }

        if !validation::is_filled(&self.address.get_untracked()) {
            errors.address = Some(REQUIRED.to_string());
        }

        let phone = self.phone.get_untracked();
        if !validation::is_filled(&phone) {
            errors.phone = Some(REQUIRED.to_string());
        } else if !validation::is_valid_phone(&phone) {
            errors.phone = Some(BAD_PHONE.to_string());
        }

        let ok = errors == OrderFormErrors::default();
        self.errors.set(errors);
        ok
    }
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self::new()
    }
}
