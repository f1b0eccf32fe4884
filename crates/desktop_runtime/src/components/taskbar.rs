use super::*;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let item = move |kind: WindowKind| {
        view! {
            <button
                id=kind.taskbar_dom_id()
                class=move || {
                    if state.with(|desktop| desktop.windows.minimized.contains(kind)) {
                        "taskbar-item visible"
                    } else {
                        "taskbar-item"
                    }
                }
                on:click=move |_| runtime.dispatch_action(DesktopAction::RestoreWindow(kind))
            >
                {kind.title()}
            </button>
        }
    };

    view! {
        <footer class="taskbar" role="toolbar" aria-label="Minimized windows">
            {WindowKind::ALL.into_iter().map(item).collect_view()}
        </footer>
    }
}
