//! 分页状态与控件
//!
//! 状态用 `RwSignal` 包装（`Copy`，便于作为 Props 传递），
//! 切片与页数计算复用 `mercado-shared` 的纯函数。

use leptos::prelude::*;

/// 分页状态
#[derive(Clone, Copy)]
pub struct PaginationState {
    /// 每页条数（固定）
    pub page_size: usize,
    /// 当前页码，1 起
    pub current_page: RwSignal<usize>,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            current_page: RwSignal::new(1),
        }
    }

    /// 上游过滤条件变化后回到第 1 页
    pub fn reset(&self) {
        self.current_page.set(1);
    }

    /// 跳转到指定页；越界请求无事发生
    pub fn go_to_page(&self, page: usize, total: usize) {
        if page >= 1 && page <= total {
            self.current_page.set(page);
        }
    }

    pub fn next_page(&self, total: usize) {
        let current = self.current_page.get_untracked();
        self.go_to_page(current + 1, total);
    }

    pub fn prev_page(&self, total: usize) {
        let current = self.current_page.get_untracked();
        if current > 1 {
            self.go_to_page(current - 1, total);
        }
    }
}

/// 分页控件
///
/// 单页或空数据时不渲染任何内容。
#[component]
pub fn Pagination(
    /// 分页状态
    state: PaginationState,
    /// 总页数（由过滤后的数据集派生）
    #[prop(into)]
    total_pages: Signal<usize>,
) -> impl IntoView {
    view! {
        <Show when={move || total_pages.get() > 1}>
            <div class="join flex justify-center w-full">
                <button
                    class="join-item btn"
                    disabled=move || state.current_page.get() <= 1
                    on:click=move |_| state.prev_page(total_pages.get_untracked())
                >
                    "« Anterior"
                </button>
                <For
                    each=move || 1..=total_pages.get()
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class=move || {
                                    if state.current_page.get() == page {
                                        "join-item btn btn-active"
                                    } else {
                                        "join-item btn"
                                    }
                                }
                                on:click=move |_| state.go_to_page(page, total_pages.get_untracked())
                            >
                                {page}
                            </button>
                        }
                    }
                />
                <button
                    class="join-item btn"
                    disabled=move || state.current_page.get() >= total_pages.get()
                    on:click=move |_| state.next_page(total_pages.get_untracked())
                >
                    "Siguiente »"
                </button>
            </div>
        </Show>
    }
}
