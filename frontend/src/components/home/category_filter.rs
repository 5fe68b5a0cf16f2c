//! 分类过滤组件

use leptos::prelude::*;
use mercado_shared::Category;

#[component]
pub fn CategoryFilter(
    /// 可选分类（含"Todos"哨兵项）
    #[prop(into)]
    categories: Signal<Vec<Category>>,
    /// 当前选中的分类 slug
    #[prop(into)]
    selected: Signal<String>,
    /// 选择变化上报
    #[prop(into)]
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-2">
            <span class="text-sm font-semibold text-base-content/70">"Categorías:"</span>
            <For
                each=move || categories.get()
                key=|category| category.slug.clone()
                children=move |category| {
                    let slug = category.slug.clone();
                    let slug_for_class = slug.clone();
                    view! {
                        <button
                            class=move || {
                                if selected.get() == slug_for_class {
                                    "btn btn-sm btn-primary"
                                } else {
                                    "btn btn-sm btn-ghost"
                                }
                            }
                            on:click=move |_| on_change.run(slug.clone())
                        >
                            {category.name}
                        </button>
                    }
                }
            />
        </div>
    }
}
