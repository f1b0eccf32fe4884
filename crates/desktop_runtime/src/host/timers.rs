//! Cancellable transition timers keyed by [`TransitionKey`].

use leptos::{logging, set_timeout_with_handle, Callable};

use crate::{
    host::DesktopHostContext, model::TransitionKey, reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

/// Starts the transition-delay timer for `key`, replacing any timer already running for it.
pub(super) fn schedule(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    key: TransitionKey,
    ticket: u64,
) {
    let delay = host.config().timing.transition_delay();
    let timers = host.timers.clone();
    let dispatch = runtime.dispatch;
    let fire = move || {
        timers.borrow_mut().remove(&key);
        dispatch.call(DesktopAction::CompleteTransition { key, ticket });
    };

    match set_timeout_with_handle(fire, delay) {
        Ok(handle) => {
            if let Some(previous) = host.timers.borrow_mut().insert(key, handle) {
                previous.clear();
            }
        }
        Err(err) => {
            logging::warn!("transition timer unavailable, completing immediately: {err:?}");
            dispatch.call(DesktopAction::CompleteTransition { key, ticket });
        }
    }
}

/// Clears the running timer for `key`, if any.
pub(super) fn cancel(host: &DesktopHostContext, key: TransitionKey) {
    if let Some(handle) = host.timers.borrow_mut().remove(&key) {
        handle.clear();
    }
}
