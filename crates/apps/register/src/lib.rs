//! Registration program hosted in the shell's register frame.

pub mod flow;
pub mod password;

use desktop_app_contract::FrameMessage;
use leptos::*;
use platform_host::HostServices;

pub use flow::{
    login_success_message, submit_registration, RegistrationForm, REGISTRATION_SUCCESS_MESSAGE,
};
pub use password::{validate_registration, PasswordPolicyError};

fn post_to_parent(services: &HostServices, message: &FrameMessage) {
    if let Err(err) = desktop_app_contract::post_to_parent(services.parent_frame.as_ref(), message)
    {
        logging::warn!("post {} to parent failed: {err}", message.kind());
    }
}

#[component]
fn PasswordInput(
    id: &'static str,
    toggle_id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    let shown = create_rw_signal(false);
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <div class="password-field">
                <input
                    id=id
                    type=move || if shown.get() { "text" } else { "password" }
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    id=toggle_id
                    type="button"
                    aria-label="Toggle password visibility"
                    on:click=move |_| shown.update(|shown| *shown = !*shown)
                >
                    {move || if shown.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}

#[component]
/// Registration form with password policy checks and a switch back to login.
pub fn RegisterApp(
    /// Injected browser or headless host bundle.
    host_services: HostServices,
) -> impl IntoView {
    let services = store_value(host_services);
    let email = create_rw_signal(String::new());
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let error = create_rw_signal(String::new());
    let success = create_rw_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());

        let services = services.get_value();
        let form = RegistrationForm {
            email: email.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        spawn_local(async move {
            match submit_registration(services.api.as_ref(), &form).await {
                Ok(user) => {
                    success.set(REGISTRATION_SUCCESS_MESSAGE.to_string());
                    let delay = services.config.timing.post_message_delay();
                    set_timeout(
                        move || {
                            let message = login_success_message(
                                user,
                                services.cookies.as_ref(),
                                &services.config.session.cookie_name,
                            );
                            post_to_parent(&services, &message);
                        },
                        delay,
                    );
                }
                Err(message) => error.set(message),
            }
        });
    };

    let switch_to_login = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        services.with_value(|services| post_to_parent(services, &FrameMessage::SwitchToLogin));
    };

    view! {
        <div class="auth-container">
            <h2>"Register"</h2>
            <form id="registerForm" on:submit=on_submit>
                <div class="form-group">
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <PasswordInput id="password" toggle_id="togglePassword" label="Password" value=password />
                <PasswordInput
                    id="confirmPassword"
                    toggle_id="toggleConfirmPassword"
                    label="Confirm Password"
                    value=confirm_password
                />
                <button type="submit" class="submit-btn">"Register"</button>
            </form>
            <div id="error" class="error-message">{move || error.get()}</div>
            <div id="success" class="success-message">{move || success.get()}</div>
            <p class="switch-link">
                "Already have an account? "
                <a id="switchToLogin" href="#" on:click=switch_to_login>"Login"</a>
            </p>
        </div>
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    let host_services = platform_host_web::build_host_services();
    leptos::mount_to_body(move || view! { <RegisterApp host_services=host_services /> })
}
