use leptos::{create_effect, ev, logging, spawn_local, window_event_listener, Callable, Callback};

use crate::{
    host::DesktopHostContext,
    reducer::DesktopAction,
    router::{route_incoming, FrameOriginPolicy, RouteOutcome},
    session,
};

pub(super) fn install_session_check(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let action = session::check_existing_session(host.api().as_ref()).await;
            dispatch.call(action);
        });
    });
}

/// Installs the page-lifetime `message` listener.
pub(super) fn install_message_listener(
    host: DesktopHostContext,
    dispatch: Callback<DesktopAction>,
) {
    let policy = FrameOriginPolicy::new(
        platform_host_web::current_origin(),
        &host.config().frames,
    );
    logging::log!("accepting frame messages from {:?}", policy.allowed());

    // Lives as long as the page; the handle is intentionally not kept.
    let _ = window_event_listener(ev::message, move |event| {
        let Some((origin, payload)) = platform_host_web::message_event_payload(&event) else {
            return;
        };
        match route_incoming(&policy, &origin, payload) {
            RouteOutcome::Rejected { origin } => {
                logging::warn!("ignored frame message from foreign origin {origin}");
            }
            RouteOutcome::Ignored(_) => {}
            RouteOutcome::Dispatch(actions) => {
                for action in actions {
                    dispatch.call(action);
                }
            }
        }
    });
}
