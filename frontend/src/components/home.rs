//! 商品目录页面
//!
//! 数据集由服务端提供（全量 / 按分类 / 按关键字搜索），
//! 分类过滤在客户端叠加，分页对过滤结果做定长切片。
//! 搜索或分类变化都会把页码重置到第 1 页；
//! 分类变化同时清除当前搜索（与过滤语义保持一致）。

mod category_filter;
mod pagination;
mod product_card;
mod search_bar;

use crate::api::MarketApi;
use crate::auth::{logout, use_auth};
use crate::cart::use_cart;
use crate::components::icons::{LogOut, ShoppingCart};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mercado_shared::{Category, Product, pagination as paging};

use category_filter::CategoryFilter;
use pagination::{Pagination, PaginationState};
use product_card::ProductCard;
use search_bar::SearchBar;

/// 每页展示的商品数
const PAGE_SIZE: usize = 8;
/// "全部分类" 哨兵 slug
const ALL_CATEGORIES: &str = "all";

#[component]
pub fn HomePage() -> impl IntoView {
    let auth_ctx = use_auth();
    let cart_ctx = use_cart();
    let router = use_router();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (selected_category, set_selected_category) = signal(ALL_CATEGORIES.to_string());
    let (search_query, set_search_query) = signal(String::new());
    let (is_loading, set_is_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);
    // 消息内容, 是否出错
    let (notification, set_notification) = signal(Option::<(String, bool)>::None);

    let pager = PaginationState::new(PAGE_SIZE);

    // 客户端分类过滤（搜索结果之上仍可叠加分类）
    let filtered = Memo::new(move |_| {
        let category = selected_category.get();
        products
            .get()
            .into_iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .collect::<Vec<_>>()
    });

    let total_pages = Signal::derive(move || {
        filtered.with(|list| paging::total_pages(list.len(), PAGE_SIZE))
    });

    let visible = Signal::derive(move || {
        let page = pager.current_page.get();
        filtered.with(|list| paging::page_slice(list, PAGE_SIZE, page).to_vec())
    });

    // 按当前范围重新拉取数据集
    let fetch_scope = move |category: String, query: Option<String>| {
        spawn_local(async move {
            let api = MarketApi::default();
            let result = match (query, category.as_str()) {
                (Some(q), _) => api.search_products(&q).await,
                (None, ALL_CATEGORIES) => api.get_products(100, 0).await,
                (None, slug) => api.get_products_by_category(slug).await,
            };
            match result {
                Ok(page) => set_products.set(page.products),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Home] {}", e).into());
                    set_notification
                        .set(Some(("Error al cargar los productos".to_string(), true)));
                }
            }
        });
    };

    // 首次加载：商品全量 + 分类列表
    spawn_local(async move {
        let api = MarketApi::default();
        let products_res = api.get_products(100, 0).await;
        let categories_res = api.get_categories().await;

        match (products_res, categories_res) {
            (Ok(page), Ok(list)) => {
                set_products.set(page.products);

                let mut all = vec![Category {
                    slug: ALL_CATEGORIES.to_string(),
                    name: "Todos".to_string(),
                }];
                all.extend(list);
                set_categories.set(all);
            }
            _ => set_load_error.set(Some("Error al cargar los productos".to_string())),
        }
        set_is_loading.set(false);
    });

    let handle_search = move |query: String| {
        pager.reset();
        let scope = selected_category.get_untracked();
        if query.is_empty() {
            set_search_query.set(String::new());
            fetch_scope(scope, None);
        } else {
            set_search_query.set(query.clone());
            fetch_scope(scope, Some(query));
        }
    };

    let handle_category = move |slug: String| {
        set_selected_category.set(slug.clone());
        set_search_query.set(String::new());
        pager.reset();
        fetch_scope(slug, None);
    };

    let handle_add_to_cart = move |product: Product| {
        if product.stock > 0 {
            let title = product.title.clone();
            cart_ctx.add_item(product);
            set_notification.set(Some((format!("¡{} agregado al carrito!", title), false)));
        } else {
            set_notification.set(Some((
                format!("No hay stock disponible para {}", product.title),
                true,
            )));
        }
    };

    let on_logout = move |_| {
        // 跳转由路由守卫自动处理
        logout(&auth_ctx);
    };

    // 3 秒后清除通知
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || set_notification.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                    <span class="ml-2">"Cargando productos..."</span>
                </div>
            }
        >
            <Show
                when=move || load_error.get().is_none()
                fallback=move || view! {
                    <div class="flex items-center justify-center min-h-screen">
                        <div role="alert" class="alert alert-error max-w-md">
                            <span>{move || load_error.get().unwrap_or_default()}</span>
                        </div>
                    </div>
                }
            >
                <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
                    <div class="max-w-7xl mx-auto space-y-6">
                        // 通知提示框
                        <Show when=move || notification.get().is_some()>
                            <div class="toast toast-top toast-end z-50">
                                <div class=move || {
                                    let is_err = notification.get().map(|(_, e)| e).unwrap_or(false);
                                    if is_err {
                                        "alert alert-error shadow-lg"
                                    } else {
                                        "alert alert-success shadow-lg"
                                    }
                                }>
                                    <span>
                                        {move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}
                                    </span>
                                </div>
                            </div>
                        </Show>

                        <div class="navbar bg-base-100 rounded-box shadow-xl">
                            <div class="flex-1 gap-2">
                                <a class="btn btn-ghost text-xl">"Mercado"</a>
                                <span class="hidden md:inline text-sm text-base-content/70">
                                    "Encuentra los mejores productos al mejor precio"
                                </span>
                            </div>
                            <div class="flex-none gap-2">
                                <button
                                    class="btn btn-ghost btn-circle"
                                    on:click=move |_| router.navigate(AppRoute::Cart)
                                >
                                    <div class="indicator">
                                        <ShoppingCart attr:class="h-6 w-6" />
                                        <Show when={move || cart_ctx.items_count().get() > 0}>
                                            <span class="badge badge-sm badge-error indicator-item">
                                                {move || cart_ctx.items_count().get()}
                                            </span>
                                        </Show>
                                    </div>
                                </button>
                                <button class="btn btn-outline btn-error gap-2" on:click=on_logout>
                                    <LogOut attr:class="h-4 w-4" /> "Salir"
                                </button>
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body gap-4">
                                <SearchBar on_search=handle_search />
                                <CategoryFilter
                                    categories=categories
                                    selected=selected_category
                                    on_change=handle_category
                                />
                                <Show when=move || !search_query.get().is_empty()>
                                    <p class="text-sm text-base-content/70">
                                        "Resultados para: " {move || search_query.get()}
                                    </p>
                                </Show>
                            </div>
                        </div>

                        <Show
                            when=move || filtered.with(|list| !list.is_empty())
                            fallback=|| view! {
                                <div class="text-center py-12 text-base-content/50">
                                    "No se encontraron productos"
                                </div>
                            }
                        >
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                                <For
                                    each=move || visible.get()
                                    key=|product| product.id
                                    children=move |product| {
                                        view! {
                                            <ProductCard
                                                product=product
                                                on_add_to_cart=handle_add_to_cart
                                            />
                                        }
                                    }
                                />
                            </div>
                            <Pagination state=pager total_pages=total_pages />
                        </Show>
                    </div>
                </div>
            </Show>
        </Show>
    }
}
