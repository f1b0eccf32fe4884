//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::{GameRecord, Transaction, User};
use thiserror::Error;

use crate::{
    model::{
        DesktopState, LoadState, ProfileState, ProfileTab, StatusLine, TransitionKey,
        WalletNotice, WindowKind, AUTHENTICATED_STATUS, AUTH_FAILED_STATUS,
        LOGIN_REQUIRED_STATUS, NOT_AUTHENTICATED_STATUS,
    },
    profile::WALLET_UPDATED_MESSAGE,
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or focus/restore) a window.
    ShowWindow(WindowKind),
    /// Close a window, removing it from both the active and minimized sets.
    HideWindow(WindowKind),
    /// Start minimizing an active window.
    MinimizeWindow(WindowKind),
    /// Bring a minimized window back.
    RestoreWindow(WindowKind),
    /// Focus an active window.
    FocusWindow(WindowKind),
    /// A scheduled transition timer fired.
    CompleteTransition {
        /// Transition slot.
        key: TransitionKey,
        /// Ticket handed out when the transition was scheduled.
        ticket: u64,
    },
    /// Session check, login, or registration succeeded.
    SessionEstablished {
        /// Authenticated user, when the sender supplied one.
        user: Option<User>,
        /// Backend session id, when known.
        session_id: Option<String>,
    },
    /// The startup session check found no usable session.
    SessionRejected,
    /// A frame reported an authentication failure.
    AuthFailed,
    /// User or frame requested logout; the backend is notified first.
    Logout,
    /// Backend logout settled (successfully or not).
    LogoutCompleted,
    /// Update the game connection status line.
    SetConnectionStatus {
        /// Status text.
        message: String,
        /// Indicator state.
        connected: bool,
    },
    /// Switch the profile pane tab, loading its list when needed.
    SwitchProfileTab(ProfileTab),
    /// Transactions fetch finished.
    TransactionsLoaded {
        /// Request id from [`RuntimeEffect::FetchTransactions`].
        request: u64,
        /// Records or a display-ready error.
        result: Result<Vec<Transaction>, String>,
    },
    /// Recent games fetch finished.
    GamesLoaded {
        /// Request id from [`RuntimeEffect::FetchGames`].
        request: u64,
        /// Records or a display-ready error.
        result: Result<Vec<GameRecord>, String>,
    },
    /// Edit the wallet address input.
    SetWalletDraft(String),
    /// Submit the wallet address input.
    SubmitWallet,
    /// Wallet update finished.
    WalletUpdateFinished {
        /// Request id from [`RuntimeEffect::UpdateWallet`].
        request: u64,
        /// Address that was submitted.
        address: String,
        /// Success, or a display-ready error.
        result: Result<(), String>,
    },
}

impl DesktopAction {
    /// Returns `(operation, window)` for window-manager actions, used for dispatch logging.
    pub fn window_operation(&self) -> Option<(&'static str, WindowKind)> {
        match self {
            Self::ShowWindow(kind) => Some(("show", *kind)),
            Self::HideWindow(kind) => Some(("hide", *kind)),
            Self::MinimizeWindow(kind) => Some(("minimize", *kind)),
            Self::RestoreWindow(kind) => Some(("restore", *kind)),
            Self::FocusWindow(kind) => Some(("focus", *kind)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Start the transition-delay timer for `key`.
    ScheduleTransition {
        /// Transition slot.
        key: TransitionKey,
        /// Ticket to echo back in [`DesktopAction::CompleteTransition`].
        ticket: u64,
    },
    /// Clear the pending timer for `key`.
    CancelTransition {
        /// Transition slot.
        key: TransitionKey,
    },
    /// Best-effort backend logout, followed by [`DesktopAction::LogoutCompleted`].
    LogoutBackend,
    /// Fetch the transactions list.
    FetchTransactions {
        /// Request id.
        request: u64,
    },
    /// Fetch the recent games list.
    FetchGames {
        /// Request id.
        request: u64,
    },
    /// Submit a wallet address.
    UpdateWallet {
        /// Request id.
        request: u64,
        /// Trimmed address.
        address: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that no longer apply to the current state.
pub enum ReducerError {
    /// The transition ticket was cancelled or superseded.
    #[error("stale transition ticket")]
    StaleTransition,
    /// A fetch response arrived for a request that is no longer in flight.
    #[error("stale profile response")]
    StaleResponse,
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for window management, session
/// state, and the profile pane.
///
/// # Errors
///
/// Returns [`ReducerError`] when a timer or fetch completion no longer matches the state that
/// requested it.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::ShowWindow(kind) => window_manager::show(state, kind, &mut effects),
        DesktopAction::HideWindow(kind) => window_manager::hide(state, kind, &mut effects),
        DesktopAction::MinimizeWindow(kind) => {
            window_manager::minimize(state, kind, &mut effects)
        }
        DesktopAction::RestoreWindow(kind) => window_manager::restore(state, kind, &mut effects),
        DesktopAction::FocusWindow(kind) => {
            window_manager::focus(&mut state.windows, kind);
        }
        DesktopAction::CompleteTransition { key, ticket } => {
            window_manager::complete_transition(state, key, ticket)?;
        }
        DesktopAction::SessionEstablished { user, session_id } => {
            state.session.current_user = user;
            state.session.is_authenticated = true;
            if session_id.is_some() {
                state.session.session_id = session_id;
            }
            state.auth_status = StatusLine::new(AUTHENTICATED_STATUS, true);
            state.booting = false;
            window_manager::hide(state, WindowKind::Login, &mut effects);
            window_manager::hide(state, WindowKind::Register, &mut effects);
        }
        DesktopAction::SessionRejected | DesktopAction::LogoutCompleted => {
            enter_unauthenticated(state, NOT_AUTHENTICATED_STATUS, &mut effects);
        }
        DesktopAction::AuthFailed => {
            enter_unauthenticated(state, AUTH_FAILED_STATUS, &mut effects);
        }
        DesktopAction::Logout => effects.push(RuntimeEffect::LogoutBackend),
        DesktopAction::SetConnectionStatus { message, connected } => {
            state.connection_status = StatusLine::new(message, connected);
        }
        DesktopAction::SwitchProfileTab(tab) => switch_profile_tab(state, tab, &mut effects),
        DesktopAction::TransactionsLoaded { request, result } => {
            settle(&mut state.profile.transactions, request, result)?;
        }
        DesktopAction::GamesLoaded { request, result } => {
            settle(&mut state.profile.games, request, result)?;
        }
        DesktopAction::SetWalletDraft(draft) => state.profile.wallet_draft = draft,
        DesktopAction::SubmitWallet => {
            if state.is_authenticated() && state.profile.wallet_request.is_none() {
                let request = state.profile.next_request;
                state.profile.next_request += 1;
                state.profile.wallet_request = Some(request);
                state.profile.wallet_notice = None;
                effects.push(RuntimeEffect::UpdateWallet {
                    request,
                    address: state.profile.wallet_draft.trim().to_string(),
                });
            }
        }
        DesktopAction::WalletUpdateFinished {
            request,
            address,
            result,
        } => {
            if state.profile.wallet_request != Some(request) {
                return Err(ReducerError::StaleResponse);
            }
            state.profile.wallet_request = None;
            state.profile.wallet_notice = Some(match result {
                Ok(()) => {
                    if let Some(user) = state.session.current_user.as_mut() {
                        user.wallet_address = Some(address);
                    }
                    WalletNotice::Success(WALLET_UPDATED_MESSAGE.to_string())
                }
                Err(message) => WalletNotice::Failure(message),
            });
        }
    }
    Ok(effects)
}

/// Clears the session and closes authenticated windows.
fn enter_unauthenticated(state: &mut DesktopState, status: &str, effects: &mut Vec<RuntimeEffect>) {
    state.session = Default::default();
    state.auth_status = StatusLine::new(status, false);
    state.booting = false;
    window_manager::hide(state, WindowKind::Game, effects);
    window_manager::hide(state, WindowKind::Profile, effects);
    // Request ids keep counting so responses sent for the previous session stay stale.
    state.profile = ProfileState {
        next_request: state.profile.next_request,
        ..ProfileState::default()
    };
    if state.windows.is_idle() {
        window_manager::cancel(&mut state.windows, TransitionKey::Welcome, effects);
        window_manager::show_welcome_if_idle(&mut state.windows);
    }
}

fn switch_profile_tab(state: &mut DesktopState, tab: ProfileTab, effects: &mut Vec<RuntimeEffect>) {
    if !state.is_authenticated() {
        state.auth_status = StatusLine::new(LOGIN_REQUIRED_STATUS, false);
        window_manager::show(state, WindowKind::Login, effects);
        return;
    }

    let profile = &mut state.profile;
    profile.tab = tab;
    let request = profile.next_request;
    match tab {
        ProfileTab::Info => return,
        ProfileTab::Transactions => {
            profile.transactions = LoadState::Loading { request };
            effects.push(RuntimeEffect::FetchTransactions { request });
        }
        ProfileTab::Games => {
            profile.games = LoadState::Loading { request };
            effects.push(RuntimeEffect::FetchGames { request });
        }
    }
    profile.next_request += 1;
}

fn settle<T>(
    slot: &mut LoadState<T>,
    request: u64,
    result: Result<Vec<T>, String>,
) -> Result<(), ReducerError> {
    match slot {
        LoadState::Loading { request: pending } if *pending == request => {
            *slot = match result {
                Ok(records) => LoadState::Loaded(records),
                Err(message) => LoadState::Failed(message),
            };
            Ok(())
        }
        _ => Err(ReducerError::StaleResponse),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{SessionState, TransitionKind, WindowSet};

    fn user(name: &str) -> User {
        User {
            id: 1,
            username: name.to_string(),
            email: format!("{name}@example.test"),
            wallet_address: Some("0xabc".to_string()),
        }
    }

    fn reduce(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(state, action).expect("reduce")
    }

    fn authenticated() -> DesktopState {
        let mut state = DesktopState::default();
        reduce(
            &mut state,
            DesktopAction::SessionEstablished {
                user: Some(user("marvin")),
                session_id: None,
            },
        );
        state
    }

    /// Fires every pending transition timer, in key order.
    fn settle_timers(state: &mut DesktopState) {
        let pending: Vec<_> = state
            .windows
            .pending
            .iter()
            .map(|(key, pending)| (*key, pending.ticket))
            .collect();
        for (key, ticket) in pending {
            reduce(state, DesktopAction::CompleteTransition { key, ticket });
        }
    }

    #[test]
    fn show_focuses_and_arranges_new_window() {
        let mut state = DesktopState::default();
        assert!(state.windows.welcome_visible);

        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Login));
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Register));

        assert!(!state.windows.welcome_visible);
        assert_eq!(state.windows.focused, Some(WindowKind::Register));
        assert_eq!(
            state.windows.active,
            WindowSet::from([WindowKind::Login, WindowKind::Register])
        );
        assert_eq!(
            state.windows.slot_of(WindowKind::Login).map(|s| s.css_class()),
            Some("grid-2-1")
        );
    }

    #[test]
    fn show_is_idempotent_for_active_window() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Login));
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Register));
        let effects = reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Login));

        assert!(effects.is_empty());
        assert_eq!(state.windows.active.len(), 2);
        assert_eq!(state.windows.focused, Some(WindowKind::Login));
    }

    #[test]
    fn protected_windows_reroute_to_login_when_unauthenticated() {
        for kind in [WindowKind::Game, WindowKind::Profile] {
            let mut state = DesktopState::default();
            reduce(&mut state, DesktopAction::ShowWindow(kind));

            assert!(!state.windows.active.contains(kind));
            assert!(state.windows.active.contains(WindowKind::Login));
            assert_eq!(state.auth_status.message, LOGIN_REQUIRED_STATUS);
            assert!(!state.auth_status.connected);
        }
    }

    #[test]
    fn restore_of_protected_window_restores_minimized_login() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Login));
        reduce(&mut state, DesktopAction::MinimizeWindow(WindowKind::Login));
        settle_timers(&mut state);
        assert!(state.windows.minimized.contains(WindowKind::Login));

        let effects = reduce(&mut state, DesktopAction::RestoreWindow(WindowKind::Game));

        assert!(state.windows.active.contains(WindowKind::Login));
        assert!(!state.windows.minimized.contains(WindowKind::Login));
        assert_eq!(
            state.windows.transition_of(WindowKind::Login),
            Some(TransitionKind::Restore)
        );
        assert!(matches!(
            effects.as_slice(),
            [RuntimeEffect::ScheduleTransition { key: TransitionKey::Window(WindowKind::Login), .. }]
        ));
    }

    #[test]
    fn minimize_moves_window_after_transition_and_refocuses_last_active() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Login));
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Register));
        reduce(&mut state, DesktopAction::FocusWindow(WindowKind::Login));

        let effects = reduce(&mut state, DesktopAction::MinimizeWindow(WindowKind::Login));
        let [RuntimeEffect::ScheduleTransition { key, ticket }] = effects.as_slice() else {
            panic!("expected one scheduled transition, got {effects:?}");
        };
        assert!(state.windows.active.contains(WindowKind::Login));

        reduce(
            &mut state,
            DesktopAction::CompleteTransition {
                key: *key,
                ticket: *ticket,
            },
        );
        assert!(state.windows.minimized.contains(WindowKind::Login));
        assert!(!state.windows.active.contains(WindowKind::Login));
        assert_eq!(state.windows.focused, Some(WindowKind::Register));
        assert_eq!(
            state.windows.slot_of(WindowKind::Register).map(|s| s.css_class()),
            Some("grid-1")
        );
    }

    #[test]
    fn new_action_cancels_pending_transition_and_stale_ticket_is_rejected() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Login));
        let effects = reduce(&mut state, DesktopAction::MinimizeWindow(WindowKind::Login));
        let RuntimeEffect::ScheduleTransition { key, ticket } = effects[0].clone() else {
            panic!("expected scheduled transition");
        };

        let effects = reduce(&mut state, DesktopAction::HideWindow(WindowKind::Login));
        assert_eq!(effects[0], RuntimeEffect::CancelTransition { key });
        assert_eq!(
            reduce_desktop(&mut state, DesktopAction::CompleteTransition { key, ticket }),
            Err(ReducerError::StaleTransition)
        );
        assert!(!state.windows.minimized.contains(WindowKind::Login));
    }

    #[test]
    fn hide_moves_focus_to_first_remaining_window() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Login));
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Register));
        reduce(&mut state, DesktopAction::HideWindow(WindowKind::Register));
        assert_eq!(state.windows.focused, Some(WindowKind::Login));
        assert!(reduce(&mut state, DesktopAction::HideWindow(WindowKind::Game)).is_empty());
    }

    #[test]
    fn hiding_last_window_defers_welcome_view() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Login));
        let effects = reduce(&mut state, DesktopAction::HideWindow(WindowKind::Login));

        assert!(matches!(
            effects.as_slice(),
            [RuntimeEffect::ScheduleTransition { key: TransitionKey::Welcome, .. }]
        ));
        assert!(!state.windows.welcome_visible);
        settle_timers(&mut state);
        assert!(state.windows.welcome_visible);
    }

    #[test]
    fn showing_a_window_cancels_pending_welcome() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Login));
        reduce(&mut state, DesktopAction::HideWindow(WindowKind::Login));
        let effects = reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Register));

        assert_eq!(
            effects,
            vec![RuntimeEffect::CancelTransition {
                key: TransitionKey::Welcome
            }]
        );
        assert!(state.windows.pending.is_empty());
        assert!(!state.windows.welcome_visible);
    }

    #[test]
    fn session_established_closes_auth_windows() {
        let mut state = DesktopState::default();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Login));
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Register));
        reduce(
            &mut state,
            DesktopAction::SessionEstablished {
                user: Some(user("marvin")),
                session_id: Some("s-1".to_string()),
            },
        );

        assert!(state.is_authenticated());
        assert!(!state.booting);
        assert!(state.windows.active.is_empty());
        assert!(state.windows.minimized.is_empty());
        assert_eq!(state.auth_status, StatusLine::new(AUTHENTICATED_STATUS, true));
        assert_eq!(state.session.session_id.as_deref(), Some("s-1"));
        assert_eq!(state.user_info(), "User: marvin");
    }

    #[test]
    fn logout_notifies_backend_before_clearing_session() {
        let mut state = authenticated();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Game));
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Profile));

        let effects = reduce(&mut state, DesktopAction::Logout);
        assert_eq!(effects, vec![RuntimeEffect::LogoutBackend]);
        assert!(state.is_authenticated());

        reduce(&mut state, DesktopAction::LogoutCompleted);
        assert!(!state.is_authenticated());
        assert_eq!(state.session, SessionState::default());
        assert!(state.windows.active.is_empty());
        assert!(state.windows.pending.is_empty());
        assert!(state.windows.welcome_visible);
        assert_eq!(state.auth_status, StatusLine::new(NOT_AUTHENTICATED_STATUS, false));
    }

    #[test]
    fn auth_failed_keeps_unprotected_windows_open() {
        let mut state = authenticated();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Game));
        reduce(&mut state, DesktopAction::MinimizeWindow(WindowKind::Game));
        settle_timers(&mut state);
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Register));

        reduce(&mut state, DesktopAction::AuthFailed);
        assert_eq!(state.auth_status, StatusLine::new(AUTH_FAILED_STATUS, false));
        assert!(!state.windows.minimized.contains(WindowKind::Game));
        assert!(state.windows.active.contains(WindowKind::Register));
        assert!(!state.windows.welcome_visible);
    }

    #[test]
    fn connection_status_is_replaced() {
        let mut state = DesktopState::default();
        reduce(
            &mut state,
            DesktopAction::SetConnectionStatus {
                message: "Connected to Game".to_string(),
                connected: true,
            },
        );
        assert_eq!(state.connection_status, StatusLine::new("Connected to Game", true));
    }

    #[test]
    fn profile_tabs_request_lists_and_ignore_stale_responses() {
        let mut state = authenticated();
        let effects = reduce(&mut state, DesktopAction::SwitchProfileTab(ProfileTab::Transactions));
        assert_eq!(effects, vec![RuntimeEffect::FetchTransactions { request: 1 }]);
        let effects = reduce(&mut state, DesktopAction::SwitchProfileTab(ProfileTab::Transactions));
        assert_eq!(effects, vec![RuntimeEffect::FetchTransactions { request: 2 }]);

        assert_eq!(
            reduce_desktop(
                &mut state,
                DesktopAction::TransactionsLoaded {
                    request: 1,
                    result: Ok(Vec::new()),
                }
            ),
            Err(ReducerError::StaleResponse)
        );
        reduce(
            &mut state,
            DesktopAction::TransactionsLoaded {
                request: 2,
                result: Err("Failed to load transactions".to_string()),
            },
        );
        assert_eq!(
            state.profile.transactions,
            LoadState::Failed("Failed to load transactions".to_string())
        );

        let effects = reduce(&mut state, DesktopAction::SwitchProfileTab(ProfileTab::Games));
        assert_eq!(effects, vec![RuntimeEffect::FetchGames { request: 3 }]);
        reduce(
            &mut state,
            DesktopAction::GamesLoaded {
                request: 3,
                result: Ok(Vec::new()),
            },
        );
        assert_eq!(state.profile.games, LoadState::Loaded(Vec::new()));
        assert!(reduce(&mut state, DesktopAction::SwitchProfileTab(ProfileTab::Info)).is_empty());
        assert_eq!(state.profile.tab, ProfileTab::Info);
    }

    #[test]
    fn profile_tab_without_session_redirects_to_login() {
        let mut state = DesktopState::default();
        let effects = reduce(&mut state, DesktopAction::SwitchProfileTab(ProfileTab::Games));
        assert!(effects.is_empty());
        assert!(state.windows.active.contains(WindowKind::Login));
        assert_eq!(state.profile.games, LoadState::Idle);
    }

    #[test]
    fn opening_profile_syncs_wallet_draft() {
        let mut state = authenticated();
        state.profile.wallet_draft = "stale".to_string();
        reduce(&mut state, DesktopAction::ShowWindow(WindowKind::Profile));
        assert_eq!(state.profile.wallet_draft, "0xabc");
    }

    #[test]
    fn wallet_submit_trims_and_updates_user_on_success() {
        let mut state = authenticated();
        reduce(&mut state, DesktopAction::SetWalletDraft("  0xdef  ".to_string()));
        let effects = reduce(&mut state, DesktopAction::SubmitWallet);
        assert_eq!(
            effects,
            vec![RuntimeEffect::UpdateWallet {
                request: 1,
                address: "0xdef".to_string()
            }]
        );
        assert!(reduce(&mut state, DesktopAction::SubmitWallet).is_empty());

        reduce(
            &mut state,
            DesktopAction::WalletUpdateFinished {
                request: 1,
                address: "0xdef".to_string(),
                result: Ok(()),
            },
        );
        assert_eq!(state.profile.wallet_request, None);
        assert_eq!(
            state
                .session
                .current_user
                .as_ref()
                .and_then(|u| u.wallet_address.as_deref()),
            Some("0xdef")
        );
        assert_eq!(
            state.profile.wallet_notice,
            Some(WalletNotice::Success(WALLET_UPDATED_MESSAGE.to_string()))
        );
    }

    #[test]
    fn wallet_failure_keeps_user_wallet() {
        let mut state = authenticated();
        reduce(&mut state, DesktopAction::SubmitWallet);
        reduce(
            &mut state,
            DesktopAction::WalletUpdateFinished {
                request: 1,
                address: String::new(),
                result: Err("Failed to update wallet: Unknown error".to_string()),
            },
        );
        assert_eq!(
            state
                .session
                .current_user
                .as_ref()
                .and_then(|u| u.wallet_address.as_deref()),
            Some("0xabc")
        );
        assert!(matches!(
            state.profile.wallet_notice,
            Some(WalletNotice::Failure(_))
        ));
    }

    fn sign_in(state: &mut DesktopState, name: &str) {
        reduce(
            state,
            DesktopAction::SessionEstablished {
                user: Some(user(name)),
                session_id: None,
            },
        );
    }

    fn sign_out(state: &mut DesktopState) {
        reduce(state, DesktopAction::Logout);
        reduce(state, DesktopAction::LogoutCompleted);
    }

    #[test]
    fn list_responses_from_a_previous_session_are_stale() {
        let mut state = DesktopState::default();
        sign_in(&mut state, "alice");
        let effects = reduce(&mut state, DesktopAction::SwitchProfileTab(ProfileTab::Transactions));
        assert_eq!(effects, vec![RuntimeEffect::FetchTransactions { request: 1 }]);

        sign_out(&mut state);
        sign_in(&mut state, "bob");
        let effects = reduce(&mut state, DesktopAction::SwitchProfileTab(ProfileTab::Transactions));
        assert_eq!(effects, vec![RuntimeEffect::FetchTransactions { request: 2 }]);

        let late = Transaction {
            id: 999,
            ..Transaction::default()
        };
        assert_eq!(
            reduce_desktop(
                &mut state,
                DesktopAction::TransactionsLoaded {
                    request: 1,
                    result: Ok(vec![late]),
                }
            ),
            Err(ReducerError::StaleResponse)
        );
        assert_eq!(state.profile.transactions, LoadState::Loading { request: 2 });
    }

    #[test]
    fn wallet_result_from_a_previous_session_is_stale() {
        let mut state = DesktopState::default();
        sign_in(&mut state, "alice");
        reduce(&mut state, DesktopAction::SetWalletDraft("0xALICE".to_string()));
        let effects = reduce(&mut state, DesktopAction::SubmitWallet);
        assert_eq!(
            effects,
            vec![RuntimeEffect::UpdateWallet {
                request: 1,
                address: "0xALICE".to_string()
            }]
        );

        sign_out(&mut state);
        sign_in(&mut state, "bob");
        assert_eq!(
            reduce_desktop(
                &mut state,
                DesktopAction::WalletUpdateFinished {
                    request: 1,
                    address: "0xALICE".to_string(),
                    result: Ok(()),
                }
            ),
            Err(ReducerError::StaleResponse)
        );
        assert_eq!(
            state
                .session
                .current_user
                .as_ref()
                .and_then(|u| u.wallet_address.as_deref()),
            Some("0xabc")
        );
        assert_eq!(state.profile.wallet_notice, None);
    }
}
