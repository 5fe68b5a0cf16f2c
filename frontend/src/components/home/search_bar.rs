//! 搜索栏组件
//!
//! 提交驱动：查询达到最小长度才上报；清空按钮立即上报空查询。

use crate::components::icons::Search;
use leptos::prelude::*;

#[component]
pub fn SearchBar(
    /// 查询上报（空字符串表示清除搜索）
    #[prop(into)]
    on_search: Callback<String>,
    /// 触发搜索的最小长度
    #[prop(default = 3)]
    min_length: usize,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = query.get();
        if value.chars().count() >= min_length || value.is_empty() {
            on_search.run(value);
        }
    };

    let on_clear = move |_| {
        set_query.set(String::new());
        on_search.run(String::new());
    };

    view! {
        <form class="join w-full max-w-md" on:submit=on_submit>
            <div class="relative join-item flex-1">
                <input
                    type="text"
                    placeholder="Buscar productos... (mín. 3 caracteres)"
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    prop:value=query
                    class="input input-bordered w-full"
                />
                <Show when=move || !query.get().is_empty()>
                    <button
                        type="button"
                        class="btn btn-ghost btn-xs absolute right-2 top-1/2 -translate-y-1/2"
                        on:click=on_clear
                    >
                        "✕"
                    </button>
                </Show>
            </div>
            <button type="submit" class="btn btn-primary join-item">
                <Search attr:class="h-5 w-5" />
            </button>
        </form>
    }
}
