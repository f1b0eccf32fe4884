use super::{profile::ProfilePanel, *};

#[component]
pub(super) fn DesktopWindow(kind: WindowKind) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let source = runtime
        .host
        .with_value(|host| kind.frame_source(&host.config().frames).map(str::to_string));

    let focus = move |_| {
        let should_focus = state.with_untracked(|desktop| {
            desktop.windows.active.contains(kind) && desktop.windows.focused != Some(kind)
        });
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow(kind));
        }
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::MinimizeWindow(kind));
    };
    let close = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::HideWindow(kind));
    };

    let body = match kind.frame_dom_id() {
        Some(frame_dom_id) => {
            // The source is assigned on first show and kept afterwards so the frame is not reloaded.
            let frame_src = create_memo(move |_| {
                state
                    .with(|desktop| desktop.windows.frame_loaded(kind))
                    .then(|| source.clone())
                    .flatten()
            });
            let on_load = move |_| {
                let Some(session_id) =
                    state.with_untracked(|desktop| desktop.session.session_id.clone())
                else {
                    return;
                };
                runtime
                    .host
                    .with_value(|host| host.send_session_to_frame(kind, &session_id));
            };
            view! {
                <iframe
                    id=frame_dom_id
                    class="window-frame"
                    title=kind.title()
                    src=move || frame_src.get()
                    on:load=on_load
                ></iframe>
            }
            .into_view()
        }
        None => view! { <ProfilePanel /> }.into_view(),
    };

    view! {
        <section
            id=kind.window_dom_id()
            class=move || state.with(|desktop| window_class(&desktop.windows, kind))
            role="dialog"
            aria-label=kind.title()
            on:mousedown=focus
        >
            <header class="window-header">
                <span class="window-title">{kind.title()}</span>
                <div class="window-controls">
                    <button class="window-btn minimize" aria-label="Minimize window" on:click=minimize>
                        "_"
                    </button>
                    <button class="window-btn close" aria-label="Close window" on:click=close>
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-content">{body}</div>
        </section>
    }
}
