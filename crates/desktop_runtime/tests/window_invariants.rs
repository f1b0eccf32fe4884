use desktop_runtime::{reduce_desktop, DesktopAction, DesktopState, WindowKind};

fn operations() -> Vec<DesktopAction> {
    WindowKind::ALL
        .into_iter()
        .flat_map(|kind| {
            [
                DesktopAction::ShowWindow(kind),
                DesktopAction::HideWindow(kind),
                DesktopAction::MinimizeWindow(kind),
                DesktopAction::RestoreWindow(kind),
            ]
        })
        .collect()
}

fn settle_timers(state: &mut DesktopState) {
    let pending: Vec<_> = state
        .windows
        .pending
        .iter()
        .map(|(key, pending)| (*key, pending.ticket))
        .collect();
    for (key, ticket) in pending {
        reduce_desktop(state, DesktopAction::CompleteTransition { key, ticket })
            .expect("pending ticket completes");
    }
}

fn check(state: &DesktopState, trace: &[DesktopAction]) {
    let windows = &state.windows;
    for kind in WindowKind::ALL {
        assert!(
            !(windows.active.contains(kind) && windows.minimized.contains(kind)),
            "{kind:?} both active and minimized after {trace:?}"
        );
        if kind.requires_auth() && !state.is_authenticated() {
            assert!(
                !windows.active.contains(kind) && !windows.minimized.contains(kind),
                "{kind:?} opened without a session after {trace:?}"
            );
        }
    }
    if let Some(focused) = windows.focused {
        assert!(
            windows.active.contains(focused),
            "focus on inactive {focused:?} after {trace:?}"
        );
    }
    assert!(
        !windows.welcome_visible || windows.is_idle(),
        "welcome view shown with open windows after {trace:?}"
    );
}

/// Layout only catches up once pending restores complete.
fn check_settled(state: &DesktopState, trace: &[DesktopAction]) {
    check(state, trace);
    let windows = &state.windows;
    assert!(windows.pending.is_empty(), "timers left after {trace:?}");
    let laid_out: Vec<WindowKind> = windows.layout.iter().map(|(kind, _)| *kind).collect();
    let expected: Vec<WindowKind> = windows.active.iter().take(4).collect();
    assert_eq!(laid_out, expected, "layout out of sync after {trace:?}");
}

fn explore(state: &DesktopState, trace: &mut Vec<DesktopAction>, depth: usize) {
    if depth == 0 {
        return;
    }
    for action in operations() {
        let mut next = state.clone();
        trace.push(action.clone());
        reduce_desktop(&mut next, action).expect("window operations are total");
        check(&next, trace);
        settle_timers(&mut next);
        check_settled(&next, trace);
        explore(&next, trace, depth - 1);
        trace.pop();
    }
}

#[test]
fn window_sets_stay_disjoint_for_every_short_sequence() {
    let mut guest = DesktopState::default();
    reduce_desktop(&mut guest, DesktopAction::SessionRejected).expect("boot");
    explore(&guest, &mut Vec::new(), 3);

    let mut member = DesktopState::default();
    reduce_desktop(
        &mut member,
        DesktopAction::SessionEstablished {
            user: None,
            session_id: None,
        },
    )
    .expect("login");
    explore(&member, &mut Vec::new(), 3);
}

#[test]
fn unsettled_transitions_are_superseded_by_later_operations() {
    let mut state = DesktopState::default();
    reduce_desktop(
        &mut state,
        DesktopAction::SessionEstablished {
            user: None,
            session_id: None,
        },
    )
    .expect("login");
    let mut trace = Vec::new();
    for action in operations().into_iter().cycle().take(64) {
        trace.push(action.clone());
        reduce_desktop(&mut state, action).expect("window operations are total");
        check(&state, &trace);
    }
    settle_timers(&mut state);
    check_settled(&state, &trace);
}

#[test]
fn restore_defers_layout_until_its_transition_completes() {
    let mut state = DesktopState::default();
    let trace = vec![
        DesktopAction::ShowWindow(WindowKind::Login),
        DesktopAction::MinimizeWindow(WindowKind::Login),
        DesktopAction::ShowWindow(WindowKind::Login),
    ];
    for (step, action) in trace.iter().enumerate() {
        reduce_desktop(&mut state, action.clone()).expect("window operations are total");
        if step == 1 {
            settle_timers(&mut state);
        }
    }
    check(&state, &trace);
    assert!(state.windows.active.contains(WindowKind::Login));
    assert!(state.windows.layout.is_empty());

    settle_timers(&mut state);
    check_settled(&state, &trace);
    assert_eq!(state.windows.focused, Some(WindowKind::Login));
}
