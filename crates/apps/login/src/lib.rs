//! Login program hosted in the shell's login frame.

pub mod flow;
pub mod oauth;

use desktop_app_contract::FrameMessage;
use leptos::*;
use platform_host::HostServices;

pub use flow::submit_login;
pub use oauth::google_authorize_url;

/// Posts `message` to the embedding shell after the configured hand-off delay.
fn post_to_parent_later(services: &HostServices, message: FrameMessage) {
    let parent = services.parent_frame.clone();
    let delay = services.config.timing.post_message_delay();
    set_timeout(
        move || {
            if let Err(err) = desktop_app_contract::post_to_parent(parent.as_ref(), &message) {
                logging::warn!("post {} to parent failed: {err}", message.kind());
            }
        },
        delay,
    );
}

#[component]
/// Email/password login form with Google sign-in.
pub fn LoginApp(
    /// Injected browser or headless host bundle.
    host_services: HostServices,
) -> impl IntoView {
    let services = store_value(host_services);
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(String::new());
    let success = create_rw_signal(String::new());
    let show_password = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());

        let services = services.get_value();
        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match submit_login(services.api.as_ref(), &email, &password).await {
                Ok(message) => post_to_parent_later(&services, message),
                Err(message) => error.set(message),
            }
        });
    };

    let google_sign_in = move |_| {
        let services = services.get_value();
        match google_authorize_url(&services.config.oauth) {
            Ok(url) => {
                if let Err(err) = services.parent_frame.navigate_top(url.as_str()) {
                    logging::error!("Google sign-in redirect failed: {err}");
                }
            }
            Err(err) => logging::error!("invalid OAuth authorize url: {err}"),
        }
    };

    view! {
        <div class="auth-container">
            <h2>"Login"</h2>
            <form id="loginForm" on:submit=on_submit>
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
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <div class="password-field">
                        <input
                            id="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            id="togglePassword"
                            type="button"
                            aria-label="Toggle password visibility"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </div>
                <button type="submit" class="submit-btn">"Login"</button>
            </form>
            <div id="error" class="error-message">{move || error.get()}</div>
            <div id="success" class="success-message">{move || success.get()}</div>
            <div class="divider">"or"</div>
            <button id="googleSignInBtn" type="button" class="google-btn" on:click=google_sign_in>
                "Sign in with Google"
            </button>
        </div>
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    let host_services = platform_host_web::build_host_services();
    leptos::mount_to_body(move || view! { <LoginApp host_services=host_services /> })
}
