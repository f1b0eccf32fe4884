//! Runtime-effect dispatch for the desktop host boundary.

use leptos::{spawn_local, Callable};

use crate::{
    host::{timers, DesktopHostContext},
    profile,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
    session,
};

pub(super) fn run_runtime_effect(
    host: DesktopHostContext,
    runtime: DesktopRuntimeContext,
    effect: RuntimeEffect,
) {
    let dispatch = runtime.dispatch;
    match effect {
        RuntimeEffect::ScheduleTransition { key, ticket } => {
            timers::schedule(host, runtime, key, ticket)
        }
        RuntimeEffect::CancelTransition { key } => timers::cancel(&host, key),
        RuntimeEffect::LogoutBackend => spawn_local(async move {
            session::notify_logout(host.api().as_ref()).await;
            dispatch.call(DesktopAction::LogoutCompleted);
        }),
        RuntimeEffect::FetchTransactions { request } => spawn_local(async move {
            let result = profile::load_transactions(host.api().as_ref()).await;
            dispatch.call(DesktopAction::TransactionsLoaded { request, result });
        }),
        RuntimeEffect::FetchGames { request } => spawn_local(async move {
            let result = profile::load_recent_games(host.api().as_ref()).await;
            dispatch.call(DesktopAction::GamesLoaded { request, result });
        }),
        RuntimeEffect::UpdateWallet { request, address } => spawn_local(async move {
            let result = profile::update_wallet(host.api().as_ref(), &address).await;
            dispatch.call(DesktopAction::WalletUpdateFinished {
                request,
                address,
                result,
            });
        }),
    }
}
