//! 订单摘要页面
//!
//! 左侧为购物车回顾（仍可调整数量 / 删除行项目），
//! 右侧为配送信息表单；提交前做字段级校验，
//! 确认成功后清空购物车并返回商品目录页。

mod form_state;

use crate::cart::use_cart;
use crate::components::icons::{Minus, Plus, Trash};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use form_state::{DISTRICTS, OrderFormState};
use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;

#[component]
pub fn SummaryPage() -> impl IntoView {
    let cart_ctx = use_cart();
    let router = use_router();
    let form = OrderFormState::new();
    let (show_confirmation, set_show_confirmation) = signal(false);

    let handle_purchase = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !form.validate() {
            return;
        }
        web_sys::console::log_1(
            &format!(
                "[Summary] Pedido confirmado: {} para {} {}, distrito {}, total S/ {:.2}",
                cart_ctx.items_count().get_untracked(),
                form.first_name.get_untracked(),
                form.last_name.get_untracked(),
                form.district.get_untracked(),
                cart_ctx.total().get_untracked(),
            )
            .into(),
        );
        set_show_confirmation.set(true);
    };

    // 确认后清空购物车并回到目录页
    let handle_confirm = move |_| {
        set_show_confirmation.set(false);
        form.reset();
        cart_ctx.clear();
        router.navigate(AppRoute::Home);
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-6">
                <h1 class="text-3xl font-bold">"Resumen del Pedido"</h1>

                <Show
                    when=move || !cart_ctx.is_empty().get()
                    fallback=move || view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body items-center text-center py-12 gap-4">
                                <p class="text-base-content/70">
                                    "No hay productos en el carrito"
                                </p>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| router.navigate(AppRoute::Home)
                                >
                                    "Seguir comprando"
                                </button>
                            </div>
                        </div>
                    }
                >
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 items-start">
                        // 购物车回顾
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <h2 class="card-title">"Tus Productos"</h2>
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Producto"</th>
                                            <th>"Precio"</th>
                                            <th>"Cantidad"</th>
                                            <th>"Acciones"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        <For
                                            each=move || cart_ctx.state().get().items().to_vec()
                                            key=|line| (line.product.id, line.quantity)
                                            children=move |line| {
                                                let id = line.product.id;
                                                let quantity = line.quantity;
                                                let stock = line.product.stock;
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <div class="flex items-center gap-3">
                                                                <img
                                                                    src=line.product.thumbnail.clone()
                                                                    alt=line.product.title.clone()
                                                                    class="h-12 w-12 object-cover rounded-box"
                                                                />
                                                                <span class="font-semibold">
                                                                    {line.product.title.clone()}
                                                                </span>
                                                            </div>
                                                        </td>
                                                        <td class="font-mono">
                                                            {format!("S/ {:.2}", line.product.price)}
                                                        </td>
                                                        <td>
                                                            <div class="join">
                                                                <button
                                                                    class="join-item btn btn-xs"
                                                                    disabled={quantity <= 1}
                                                                    on:click=move |_| {
                                                                        cart_ctx.update_quantity(id, quantity - 1)
                                                                    }
                                                                >
                                                                    <Minus attr:class="h-3 w-3" />
                                                                </button>
                                                                <span class="join-item btn btn-xs btn-ghost no-animation">
                                                                    {quantity}
                                                                </span>
                                                                <button
                                                                    class="join-item btn btn-xs"
                                                                    disabled={quantity >= stock}
                                                                    on:click=move |_| {
                                                                        cart_ctx.update_quantity(id, quantity + 1)
                                                                    }
                                                                >
                                                                    <Plus attr:class="h-3 w-3" />
                                                                </button>
                                                            </div>
                                                        </td>
                                                        <td>
                                                            <button
                                                                class="btn btn-ghost btn-xs text-error"
                                                                on:click=move |_| cart_ctx.remove_item(id)
                                                            >
                                                                <Trash attr:class="h-3 w-3" /> "Eliminar"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                                <p class="text-xl font-bold text-right mt-2">
                                    "Total a pagar: "
                                    {move || format!("S/ {:.2}", cart_ctx.total().get())}
                                </p>
                            </div>
                        </div>

                        // 配送信息表单
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <h2 class="card-title">"Información de Envío"</h2>
                                <form class="space-y-3" on:submit=handle_purchase>
                                    <div class="form-control">
                                        <label class="label">
                                            <span class="label-text">"Nombre *"</span>
                                        </label>
                                        <input
                                            type="text"
                                            class=move || {
                                                if form.errors.get().first_name.is_some() {
                                                    "input input-bordered input-error w-full"
                                                } else {
                                                    "input input-bordered w-full"
                                                }
                                            }
                                            prop:value=move || form.first_name.get()
                                            on:input=move |ev| {
                                                form.first_name.set(event_target_value(&ev));
                                                form.errors.update(|e| e.first_name = None);
                                            }
                                        />
                                        <span class="label-text-alt text-error">
                                            {move || form.errors.get().first_name}
                                        </span>
                                    </div>

                                    <div class="form-control">
                                        <label class="label">
                                            <span class="label-text">"Apellido *"</span>
                                        </label>
                                        <input
                                            type="text"
                                            class=move || {
                                                if form.errors.get().last_name.is_some() {
                                                    "input input-bordered input-error w-full"
                                                } else {
                                                    "input input-bordered w-full"
                                                }
                                            }
                                            prop:value=move || form.last_name.get()
                                            on:input=move |ev| {
                                                form.last_name.set(event_target_value(&ev));
                                                form.errors.update(|e| e.last_name = None);
                                            }
                                        />
                                        <span class="label-text-alt text-error">
                                            {move || form.errors.get().last_name}
                                        </span>
                                    </div>

                                    <div class="form-control">
                                        <label class="label">
                                            <span class="label-text">"Distrito *"</span>
                                        </label>
                                        <select
                                            class=move || {
                                                if form.errors.get().district.is_some() {
                                                    "select select-bordered select-error w-full"
                                                } else {
                                                    "select select-bordered w-full"
                                                }
                                            }
                                            prop:value=move || form.district.get()
                                            on:change=move |ev| {
                                                form.district.set(event_target_value(&ev));
                                                form.errors.update(|e| e.district = None);
                                            }
                                        >
                                            <option value="">"Seleccione un distrito"</option>
                                            {DISTRICTS
                                                .iter()
                                                .map(|district| {
                                                    view! {
                                                        <option value=*district>{*district}</option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                        <span class="label-text-alt text-error">
                                            {move || form.errors.get().district}
                                        </span>
                                    </div>

                                    <div class="form-control">
                                        <label class="label">
                                            <span class="label-text">"Dirección *"</span>
                                        </label>
                                        <input
                                            type="text"
                                            class=move || {
                                                if form.errors.get().address.is_some() {
                                                    "input input-bordered input-error w-full"
                                                } else {
                                                    "input input-bordered w-full"
                                                }
                                            }
                                            prop:value=move || form.address.get()
                                            on:input=move |ev| {
                                                form.address.set(event_target_value(&ev));
                                                form.errors.update(|e| e.address = None);
                                            }
                                        />
                                        <span class="label-text-alt text-error">
                                            {move || form.errors.get().address}
                                        </span>
                                    </div>

                                    <div class="form-control">
                                        <label class="label">
                                            <span class="label-text">"Referencia"</span>
                                        </label>
                                        <input
                                            type="text"
                                            class="input input-bordered w-full"
                                            prop:value=move || form.reference.get()
                                            on:input=move |ev| {
                                                form.reference.set(event_target_value(&ev));
                                            }
                                        />
                                    </div>

                                    <div class="form-control">
                                        <label class="label">
                                            <span class="label-text">"Celular *"</span>
                                        </label>
                                        <input
                                            type="tel"
                                            class=move || {
                                                if form.errors.get().phone.is_some() {
                                                    "input input-bordered input-error w-full"
                                                } else {
                                                    "input input-bordered w-full"
                                                }
                                            }
                                            prop:value=move || form.phone.get()
                                            on:input=move |ev| {
                                                form.phone.set(event_target_value(&ev));
                                                form.errors.update(|e| e.phone = None);
                                            }
                                        />
                                        <span class="label-text-alt text-error">
                                            {move || form.errors.get().phone}
                                        </span>
                                    </div>

                                    <div class="card-actions justify-end pt-2">
                                        <button
                                            type="button"
                                            class="btn btn-outline"
                                            on:click=move |_| router.navigate(AppRoute::Cart)
                                        >
                                            "Volver al carrito"
                                        </button>
                                        <button type="submit" class="btn btn-primary">
                                            "Realizar Compra"
                                        </button>
                                    </div>
                                </form>
                            </div>
                        </div>
                    </div>
                </Show>

                // 购买成功提示
                <Show when=move || show_confirmation.get()>
                    <div class="modal modal-open">
                        <div class="modal-box text-center">
                            <h3 class="font-bold text-lg">"¡Compra realizada con éxito!"</h3>
                            <p class="py-4">
                                "Gracias por tu compra. Recibirás tu pedido pronto."
                            </p>
                            <div class="modal-action justify-center">
                                <button class="btn btn-primary" on:click=handle_confirm>
                                    "Aceptar"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
