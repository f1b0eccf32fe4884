//! Desktop shell UI composition: navigation, welcome view, window layer, taskbar, status bar.

mod profile;
mod status_bar;
mod taskbar;
mod window;

use leptos::*;

use self::{status_bar::StatusBar, taskbar::Taskbar, window::DesktopWindow};
use crate::{
    model::{TransitionKind, WindowKind, WindowManagerState},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

pub use crate::runtime_context::{DesktopProvider, DesktopRuntimeContext};

const LOADING_MESSAGE: &str = "Checking session...";

/// Returns the class list for a window element.
///
/// Inactive, non-minimized windows get only the base class, which keeps them hidden.
pub fn window_class(windows: &WindowManagerState, kind: WindowKind) -> String {
    let mut classes = vec!["window"];
    if windows.active.contains(kind) {
        classes.push("active");
        classes.push(if windows.focused == Some(kind) {
            "focused"
        } else {
            "unfocused"
        });
        if let Some(slot) = windows.slot_of(kind) {
            classes.push(slot.css_class());
        }
    }
    if windows.minimized.contains(kind) {
        classes.push("minimized");
    }
    match windows.transition_of(kind) {
        Some(TransitionKind::Minimize) => classes.push("minimizing"),
        Some(TransitionKind::Restore) => classes.push("restoring"),
        _ => {}
    }
    classes.join(" ")
}

/// Returns the class list for a window's navigation button.
pub fn nav_button_class(windows: &WindowManagerState, kind: WindowKind) -> &'static str {
    let minimizing = windows.transition_of(kind) == Some(TransitionKind::Minimize);
    if windows.active.contains(kind) && !minimizing {
        "nav-btn active"
    } else {
        "nav-btn"
    }
}

#[component]
/// Root shell view. Must be rendered inside [`DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    view! {
        <div id="desktop-shell-root" class="desktop-shell">
            <NavBar />
            <main class="desktop">
                <WelcomeScreen />
                <div class="window-layer">
                    {WindowKind::ALL
                        .into_iter()
                        .map(|kind| view! { <DesktopWindow kind=kind /> })
                        .collect_view()}
                </div>
            </main>
            <Taskbar />
            <StatusBar />
            <LoadingOverlay />
        </div>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let authenticated = move || state.with(|desktop| desktop.is_authenticated());

    let nav_button = move |kind: WindowKind| {
        let hidden = move || {
            let guest_only = matches!(kind, WindowKind::Login | WindowKind::Register);
            if guest_only && authenticated() {
                "none"
            } else {
                ""
            }
        };
        view! {
            <button
                id=kind.nav_button_dom_id()
                class=move || state.with(|desktop| nav_button_class(&desktop.windows, kind))
                style:display=hidden
                disabled=move || kind.requires_auth() && !authenticated()
                on:click=move |_| runtime.dispatch_action(DesktopAction::ShowWindow(kind))
            >
                {kind.title()}
            </button>
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-brand">"Transcendence"</span>
            <div class="nav-buttons">
                {WindowKind::ALL.into_iter().map(nav_button).collect_view()}
                <button
                    id="logoutBtn"
                    class="nav-btn logout"
                    style:display=move || if authenticated() { "" } else { "none" }
                    on:click=move |_| runtime.dispatch_action(DesktopAction::Logout)
                >
                    "Logout"
                </button>
            </div>
        </nav>
    }
}

#[component]
fn WelcomeScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let welcome_button = move |kind: WindowKind| {
        view! {
            <button
                id=kind.welcome_button_dom_id()
                class="welcome-btn"
                disabled=move || kind.requires_auth() && !state.with(|desktop| desktop.is_authenticated())
                on:click=move |_| runtime.dispatch_action(DesktopAction::ShowWindow(kind))
            >
                {kind.title()}
            </button>
        }
    };

    view! {
        <section
            id="welcomeScreen"
            class="welcome-screen"
            style:display=move || {
                if state.with(|desktop| desktop.windows.welcome_visible) { "" } else { "none" }
            }
        >
            <h1>"Welcome"</h1>
            <p>"Log in or create an account to play."</p>
            <div class="welcome-buttons">
                {WindowKind::ALL.into_iter().map(welcome_button).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn LoadingOverlay() -> impl IntoView {
    let state = use_desktop_runtime().state;
    view! {
        <div
            id="loading"
            class=move || {
                if state.with(|desktop| desktop.booting) {
                    "loading-overlay"
                } else {
                    "loading-overlay hidden"
                }
            }
        >
            <div class="loading-spinner"></div>
            <p id="loadingMessage">{LOADING_MESSAGE}</p>
        </div>
    }
}
