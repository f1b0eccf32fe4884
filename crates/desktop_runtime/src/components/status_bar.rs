use super::*;

fn indicator_class(connected: bool) -> &'static str {
    if connected {
        "status-indicator connected"
    } else {
        "status-indicator"
    }
}

#[component]
pub(super) fn StatusBar() -> impl IntoView {
    let state = use_desktop_runtime().state;
    let auth = create_memo(move |_| state.with(|desktop| desktop.auth_status.clone()));
    let connection = create_memo(move |_| state.with(|desktop| desktop.connection_status.clone()));

    view! {
        <div class="status-bar">
            <div class="status-item">
                <span id="authIndicator" class=move || indicator_class(auth.with(|s| s.connected))></span>
                <span id="authStatus">{move || auth.with(|s| s.message.clone())}</span>
            </div>
            <div class="status-item">
                <span
                    id="connectionIndicator"
                    class=move || indicator_class(connection.with(|s| s.connected))
                ></span>
                <span id="connectionStatus">{move || connection.with(|s| s.message.clone())}</span>
            </div>
            <div class="status-item">
                <span id="userInfo">{move || state.with(|desktop| desktop.user_info())}</span>
            </div>
        </div>
    }
}
