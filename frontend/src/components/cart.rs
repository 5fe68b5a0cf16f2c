//! 购物车页面
//!
//! 空车渲染空态提示与"继续购买"动作，绝不渲染行项目表；
//! 非空时展示行项目、数量控制（下限 1、上限库存）、
//! 行小计与总价。

use crate::cart::use_cart;
use crate::components::icons::{Minus, Plus, Trash};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart_ctx = use_cart();
    let router = use_router();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-4xl mx-auto space-y-6">
                <h1 class="text-3xl font-bold">"Carrito de Compras"</h1>

                <Show
                    when=move || !cart_ctx.is_empty().get()
                    fallback=move || view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body items-center text-center py-12 gap-4">
                                <p class="text-base-content/70">"Tu carrito está vacío"</p>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| router.navigate(AppRoute::Home)
                                >
                                    "Continuar Comprando"
                                </button>
                            </div>
                        </div>
                    }
                >
                    <div class="space-y-4">
                        <For
                            each=move || cart_ctx.state().get().items().to_vec()
                            key=|line| (line.product.id, line.quantity)
                            children=move |line| {
                                let id = line.product.id;
                                let quantity = line.quantity;
                                let stock = line.product.stock;
                                view! {
                                    <div class="card bg-base-100 shadow">
                                        <div class="card-body flex-row items-center gap-4">
                                            <img
                                                src=line.product.thumbnail.clone()
                                                alt=line.product.title.clone()
                                                class="h-20 w-20 object-cover rounded-box"
                                            />
                                            <div class="flex-1">
                                                <h3 class="font-bold">{line.product.title.clone()}</h3>
                                                <p class="text-sm">
                                                    "Precio: " {format!("S/ {:.2}", line.product.price)}
                                                </p>
                                                <p class="text-sm text-base-content/50">
                                                    "Stock: " {stock}
                                                </p>
                                            </div>
                                            <div class="join">
                                                <button
                                                    class="join-item btn btn-sm"
                                                    disabled={quantity <= 1}
                                                    on:click=move |_| cart_ctx.decrement_item(id)
                                                >
                                                    <Minus attr:class="h-4 w-4" />
                                                </button>
                                                <span class="join-item btn btn-sm btn-ghost no-animation">
                                                    {quantity}
                                                </span>
                                                <button
                                                    class="join-item btn btn-sm"
                                                    disabled={quantity >= stock}
                                                    on:click=move |_| cart_ctx.increment_item(id)
                                                >
                                                    <Plus attr:class="h-4 w-4" />
                                                </button>
                                            </div>
                                            <div class="w-24 text-right font-mono font-bold">
                                                {format!("S/ {:.2}", line.subtotal())}
                                            </div>
                                            <button
                                                class="btn btn-ghost btn-sm text-error"
                                                on:click=move |_| cart_ctx.remove_item(id)
                                            >
                                                <Trash attr:class="h-4 w-4" /> "Eliminar"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />

                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <h2 class="card-title">"Resumen de Compra"</h2>
                                <p class="text-2xl font-bold">
                                    "Total: "
                                    {move || format!("S/ {:.2}", cart_ctx.total().get())}
                                </p>
                                <div class="card-actions justify-end">
                                    <button
                                        class="btn btn-outline"
                                        on:click=move |_| router.navigate(AppRoute::Home)
                                    >
                                        "Seguir comprando"
                                    </button>
                                    <button
                                        class="btn btn-outline btn-error"
                                        on:click=move |_| cart_ctx.clear()
                                    >
                                        "Vaciar Carrito"
                                    </button>
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| router.navigate(AppRoute::Summary)
                                    >
                                        "Proceder al Pago"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
