//! 登录页面
//!
//! 字段校验（必填、无空格、密码最短长度）在提交前完成并行内提示；
//! 凭据错误 (400) 与其他失败分别弹窗。登录成功后由路由守卫
//! 自动跳转，本组件不做导航。

use crate::api::{ApiError, MarketApi};
use crate::auth::login;
use crate::auth::use_auth;
use crate::components::icons::Store;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mercado_shared::validation;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_ctx = use_auth();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (username_error, set_username_error) = signal(Option::<String>::None);
    let (password_error, set_password_error) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_modal, set_error_modal) = signal(Option::<String>::None);
    let (show_forgot, set_show_forgot) = signal(false);
    let (show_mail_sent, set_show_mail_sent) = signal(false);

    // 字段级校验：全部通过才允许提交
    let validate = move || {
        let mut ok = true;

        let user = username.get();
        if !validation::is_filled(&user) {
            set_username_error.set(Some("El usuario es obligatorio".to_string()));
            ok = false;
        } else if !validation::has_no_spaces(&user) {
            set_username_error.set(Some("No se permiten espacios en blanco".to_string()));
            ok = false;
        } else {
            set_username_error.set(None);
        }

        let pass = password.get();
        if !validation::is_filled(&pass) {
            set_password_error.set(Some("La contraseña es obligatoria".to_string()));
            ok = false;
        } else if !validation::has_min_length(&pass, 3) {
            set_password_error.set(Some("Mínimo 3 caracteres".to_string()));
            ok = false;
        } else {
            set_password_error.set(None);
        }

        ok
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if !validate() {
            return;
        }

        set_is_submitting.set(true);
        set_error_modal.set(None);

        spawn_local(async move {
            let api = MarketApi::default();
            match api
                .login(&username.get_untracked(), &password.get_untracked())
                .await
            {
                Ok(user) => {
                    // 状态变更后守卫 Effect 会跳转到商品目录
                    login(&auth_ctx, user);
                }
                Err(ApiError::BadCredentials) => {
                    set_error_modal.set(Some("Usuario o contraseña incorrectos".to_string()));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Login] {}", e).into());
                    set_error_modal.set(Some("Algo salió mal, inténtelo más tarde".to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Store attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Mercado"</h1>
                        <p class="text-base-content/70">
                            "Inicia sesión para continuar"
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Usuario"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                placeholder="emilys"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                            />
                            <Show when=move || username_error.get().is_some()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || username_error.get().unwrap_or_default()}
                                </span>
                            </Show>
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                            <Show when=move || password_error.get().is_some()>
                                <span class="label-text-alt text-error mt-1">
                                    {move || password_error.get().unwrap_or_default()}
                                </span>
                            </Show>
                        </div>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Iniciando sesión..." }.into_any()
                                } else {
                                    "Iniciar Sesión".into_any()
                                }}
                            </button>
                        </div>

                        <button
                            type="button"
                            class="btn btn-link btn-sm text-base-content/70"
                            on:click=move |_| set_show_forgot.set(true)
                        >
                            "¿Olvidaste tu contraseña?"
                        </button>
                    </form>
                </div>
            </div>

            // 错误弹窗（凭据或服务器）
            <Show when=move || error_modal.get().is_some()>
                <div class="modal modal-open">
                    <div class="modal-box">
                        <h3 class="font-bold text-lg text-error">"Error"</h3>
                        <p class="py-4">{move || error_modal.get().unwrap_or_default()}</p>
                        <div class="modal-action">
                            <button class="btn" on:click=move |_| set_error_modal.set(None)>
                                "Aceptar"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            // 找回密码弹窗
            <ForgotPasswordModal
                open=show_forgot
                on_close=move |_: ()| set_show_forgot.set(false)
                on_send=move |email: String| {
                    // 按需求仅模拟发送
                    web_sys::console::log_1(&format!("[Login] Correo enviado a: {}", email).into());
                    set_show_forgot.set(false);
                    set_show_mail_sent.set(true);
                }
            />

            // 发送成功弹窗
            <Show when=move || show_mail_sent.get()>
                <div class="modal modal-open">
                    <div class="modal-box">
                        <h3 class="font-bold text-lg text-success">"Éxito"</h3>
                        <p class="py-4">
                            "Correo enviado correctamente. Revisa tu bandeja de entrada."
                        </p>
                        <div class="modal-action">
                            <button class="btn" on:click=move |_| set_show_mail_sent.set(false)>
                                "Aceptar"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// 找回密码弹窗
///
/// 邮箱校验在弹窗内部完成；合法时把邮箱交给父组件处理。
#[component]
fn ForgotPasswordModal(
    /// 是否展示
    open: ReadSignal<bool>,
    /// 关闭请求
    #[prop(into)] on_close: Callback<()>,
    /// 校验通过后的发送请求
    #[prop(into)] on_send: Callback<String>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (email_error, set_email_error) = signal(Option::<String>::None);

    let handle_send = move |_| {
        let value = email.get();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            set_email_error.set(Some("El correo electrónico es obligatorio".to_string()));
            return;
        }
        if !validation::is_valid_email(trimmed) {
            set_email_error.set(Some("Ingrese un correo electrónico válido".to_string()));
            return;
        }

        set_email_error.set(None);
        on_send.run(trimmed.to_string());
        set_email.set(String::new());
    };

    let handle_close = move |_| {
        set_email.set(String::new());
        set_email_error.set(None);
        on_close.run(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"Recuperar contraseña"</h3>
                    <p class="py-2">
                        "Ingresa tu correo electrónico para recuperar tu contraseña"
                    </p>

                    <div class="form-control">
                        <label class="label" for="recovery-email">
                            <span class="label-text">"Correo Electrónico"</span>
                        </label>
                        <input
                            id="recovery-email"
                            type="email"
                            placeholder="tu.email@ejemplo.com"
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                // 输入时清除行内错误
                                set_email_error.set(None);
                            }
                            prop:value=email
                            class="input input-bordered"
                        />
                        <Show when=move || email_error.get().is_some()>
                            <span class="label-text-alt text-error mt-1">
                                {move || email_error.get().unwrap_or_default()}
                            </span>
                        </Show>
                    </div>

                    <div class="modal-action">
                        <button class="btn" on:click=handle_close>
                            "Cancelar"
                        </button>
                        <button class="btn btn-primary" on:click=handle_send>
                            "Enviar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
