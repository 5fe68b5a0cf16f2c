//! 商品卡片组件

use crate::components::icons::Star;
use leptos::prelude::*;
use mercado_shared::Product;

#[component]
pub fn ProductCard(
    /// 商品快照
    product: Product,
    /// 加入购物车请求（库存判定由父组件负责提示）
    #[prop(into)]
    on_add_to_cart: Callback<Product>,
) -> impl IntoView {
    let out_of_stock = product.stock == 0;
    let for_cart = product.clone();

    view! {
        <div class="card bg-base-100 shadow-xl">
            <figure>
                <img
                    src=product.thumbnail.clone()
                    alt=product.title.clone()
                    class="h-48 w-full object-cover"
                />
            </figure>
            <div class="card-body p-4">
                <h3 class="card-title text-base">{product.title.clone()}</h3>
                <p class="text-sm text-base-content/70 line-clamp-2">
                    {product.description.clone()}
                </p>
                <div class="flex items-center justify-between text-sm mt-1">
                    <span class="font-bold text-primary">
                        {format!("S/ {:.2}", product.price)}
                    </span>
                    <span class="badge badge-ghost">
                        {format!("{} disponibles", product.stock)}
                    </span>
                    <span class="flex items-center gap-1">
                        <Star attr:class="h-4 w-4 text-warning" />
                        {format!("{:.1}", product.rating)}
                    </span>
                </div>
                <div class="card-actions mt-2">
                    <button
                        class="btn btn-primary btn-sm w-full"
                        disabled=out_of_stock
                        on:click=move |_| on_add_to_cart.run(for_cart.clone())
                    >
                        {if out_of_stock { "Sin stock" } else { "Agregar al carrito" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
