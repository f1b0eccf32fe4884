//! Window-manager transition helpers used by the desktop reducer.
//!
//! Every operation here is total: unmet preconditions reroute to the login window instead of
//! failing. Delayed halves of minimize/restore and the idle welcome fallback are expressed as
//! [`RuntimeEffect::ScheduleTransition`] tickets that the host turns into timers.

use crate::{
    model::{
        DesktopState, GridSlot, PendingTransition, StatusLine, TransitionKey, TransitionKind,
        WindowKind, WindowManagerState, LOGIN_REQUIRED_STATUS,
    },
    reducer::{ReducerError, RuntimeEffect},
};

/// Assigns grid slots to active windows in insertion order.
///
/// Windows beyond the fourth get no slot. With nothing active, focus is cleared.
pub fn arrange(windows: &mut WindowManagerState) {
    let count = windows.active.len();
    windows.layout = windows
        .active
        .iter()
        .take(4)
        .enumerate()
        .map(|(index, kind)| {
            let position = (index + 1) as u8;
            let slot = match count {
                1 => GridSlot::Single,
                2 => GridSlot::HalfOf2(position),
                3 => GridSlot::ThirdOf3(position),
                _ => GridSlot::QuarterOf4(position),
            };
            (kind, slot)
        })
        .collect();
    if count == 0 {
        windows.focused = None;
    }
}

/// Focuses `kind` when it is active; otherwise leaves focus untouched.
pub fn focus(windows: &mut WindowManagerState, kind: WindowKind) -> bool {
    if !windows.active.contains(kind) {
        return false;
    }
    windows.focused = Some(kind);
    true
}

/// Shows the welcome view when no window is active or minimized.
pub fn show_welcome_if_idle(windows: &mut WindowManagerState) {
    if windows.is_idle() {
        windows.welcome_visible = true;
        windows.focused = None;
    }
}

pub fn show(state: &mut DesktopState, kind: WindowKind, effects: &mut Vec<RuntimeEffect>) {
    state.windows.welcome_visible = false;
    cancel(&mut state.windows, TransitionKey::Welcome, effects);

    if state.windows.active.contains(kind) {
        cancel(&mut state.windows, TransitionKey::Window(kind), effects);
        focus(&mut state.windows, kind);
        arrange(&mut state.windows);
        return;
    }
    if state.windows.minimized.contains(kind) {
        restore(state, kind, effects);
        return;
    }

    cancel(&mut state.windows, TransitionKey::Window(kind), effects);
    if kind.requires_auth() && !state.is_authenticated() {
        reroute_to_login(state, effects);
        return;
    }

    if kind.frame_dom_id().is_some() && !state.windows.frame_loaded(kind) {
        state.windows.loaded_frames.push(kind);
    }
    if kind == WindowKind::Profile {
        sync_profile_fields(state);
    }
    state.windows.active.insert(kind);
    focus(&mut state.windows, kind);
    arrange(&mut state.windows);
}

pub fn hide(state: &mut DesktopState, kind: WindowKind, effects: &mut Vec<RuntimeEffect>) {
    cancel(&mut state.windows, TransitionKey::Window(kind), effects);
    let windows = &mut state.windows;
    let was_active = windows.active.remove(kind);
    let was_minimized = windows.minimized.remove(kind);
    if !was_active && !was_minimized {
        return;
    }

    if windows.focused == Some(kind) {
        windows.focused = windows.active.first();
    }
    arrange(windows);
    if windows.is_idle() {
        schedule(windows, TransitionKey::Welcome, TransitionKind::WelcomeFallback, effects);
    }
}

pub fn minimize(state: &mut DesktopState, kind: WindowKind, effects: &mut Vec<RuntimeEffect>) {
    if !state.windows.active.contains(kind) {
        return;
    }
    cancel(&mut state.windows, TransitionKey::Window(kind), effects);
    schedule(
        &mut state.windows,
        TransitionKey::Window(kind),
        TransitionKind::Minimize,
        effects,
    );
}

pub fn restore(state: &mut DesktopState, kind: WindowKind, effects: &mut Vec<RuntimeEffect>) {
    state.windows.welcome_visible = false;
    cancel(&mut state.windows, TransitionKey::Welcome, effects);

    if kind.requires_auth() && !state.is_authenticated() {
        reroute_to_login(state, effects);
        return;
    }
    if !state.windows.minimized.contains(kind) {
        show(state, kind, effects);
        return;
    }

    cancel(&mut state.windows, TransitionKey::Window(kind), effects);
    state.windows.minimized.remove(kind);
    state.windows.active.insert(kind);
    if kind == WindowKind::Profile {
        sync_profile_fields(state);
    }
    schedule(
        &mut state.windows,
        TransitionKey::Window(kind),
        TransitionKind::Restore,
        effects,
    );
}

/// Applies the delayed half of a scheduled transition.
///
/// # Errors
///
/// Returns [`ReducerError::StaleTransition`] when `ticket` is not the pending ticket for `key`.
pub fn complete_transition(
    state: &mut DesktopState,
    key: TransitionKey,
    ticket: u64,
) -> Result<(), ReducerError> {
    let windows = &mut state.windows;
    let pending = match windows.pending.get(&key) {
        Some(pending) if pending.ticket == ticket => *pending,
        _ => return Err(ReducerError::StaleTransition),
    };
    windows.pending.remove(&key);

    match (key, pending.kind) {
        (TransitionKey::Window(kind), TransitionKind::Minimize) => {
            if windows.active.remove(kind) {
                windows.minimized.insert(kind);
                if windows.focused == Some(kind) {
                    windows.focused = windows.active.last();
                }
            }
            arrange(windows);
        }
        (TransitionKey::Window(kind), TransitionKind::Restore) => {
            focus(windows, kind);
            arrange(windows);
        }
        (_, TransitionKind::WelcomeFallback) => show_welcome_if_idle(windows),
        (TransitionKey::Welcome, _) => {}
    }
    Ok(())
}

/// Sets the login-required status and brings up the login window instead.
fn reroute_to_login(state: &mut DesktopState, effects: &mut Vec<RuntimeEffect>) {
    state.auth_status = StatusLine::new(LOGIN_REQUIRED_STATUS, false);
    if state.windows.minimized.contains(WindowKind::Login) {
        restore(state, WindowKind::Login, effects);
    } else {
        show(state, WindowKind::Login, effects);
    }
}

/// Refreshes the editable profile fields from the held user.
pub fn sync_profile_fields(state: &mut DesktopState) {
    state.profile.wallet_draft = state
        .session
        .current_user
        .as_ref()
        .and_then(|user| user.wallet_address.clone())
        .unwrap_or_default();
    state.profile.wallet_notice = None;
}

fn schedule(
    windows: &mut WindowManagerState,
    key: TransitionKey,
    kind: TransitionKind,
    effects: &mut Vec<RuntimeEffect>,
) {
    let ticket = windows.next_ticket;
    windows.next_ticket += 1;
    windows
        .pending
        .insert(key, PendingTransition { ticket, kind });
    effects.push(RuntimeEffect::ScheduleTransition { key, ticket });
}

/// Drops the pending transition for `key`, asking the host to clear its timer.
pub fn cancel(windows: &mut WindowManagerState, key: TransitionKey, effects: &mut Vec<RuntimeEffect>) {
    if windows.pending.remove(&key).is_some() {
        effects.push(RuntimeEffect::CancelTransition { key });
    }
}
