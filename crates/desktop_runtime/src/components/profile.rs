use platform_host::{format_timestamp_local, GameRecord, Transaction};

use super::*;
use crate::{
    model::{LoadState, ProfileTab, WalletNotice},
    profile::{NO_GAMES_MESSAGE, NO_TRANSACTIONS_MESSAGE},
};

fn loading_view(label: &'static str) -> View {
    view! {
        <div class="loading-state">
            <div class="loading-spinner-small"></div>
            <p>{label}</p>
        </div>
    }
    .into_view()
}

fn empty_view(message: String) -> View {
    view! { <div class="empty-state">{message}</div> }.into_view()
}

fn transaction_item(tx: Transaction) -> impl IntoView {
    let status_class = format!("transaction-status {}", tx.status_kind().css_class());
    view! {
        <div class="transaction-item">
            <div class="transaction-header">
                <span>{tx.type_label().to_string()}</span>
                <span class=status_class>{tx.status_label().to_string()}</span>
            </div>
            <div class="transaction-details">
                <div>{format!("Amount: {} tokens", tx.amount)}</div>
                <div>{format!("Date: {}", format_timestamp_local(&tx.created_at))}</div>
                {tx.short_hash().map(|hash| view! { <div>{format!("Hash: {hash}")}</div> })}
            </div>
        </div>
    }
}

fn game_item(game: GameRecord) -> impl IntoView {
    view! {
        <div class="game-item">
            <div class="game-header">
                <span>{game.display_name()}</span>
            </div>
            <div class="game-details">
                <div>{format!("Placement: {}", game.placement_label())}</div>
                <div>{format!("Date: {}", format_timestamp_local(&game.created_at))}</div>
            </div>
        </div>
    }
}

fn transactions_view(load: LoadState<Transaction>) -> View {
    match load {
        LoadState::Idle => ().into_view(),
        LoadState::Loading { .. } => loading_view("Loading transactions..."),
        LoadState::Failed(message) => empty_view(message),
        LoadState::Loaded(items) if items.is_empty() => {
            empty_view(NO_TRANSACTIONS_MESSAGE.to_string())
        }
        LoadState::Loaded(items) => view! {
            <div class="transaction-list">
                {items.into_iter().map(transaction_item).collect_view()}
            </div>
        }
        .into_view(),
    }
}

fn games_view(load: LoadState<GameRecord>) -> View {
    match load {
        LoadState::Idle => ().into_view(),
        LoadState::Loading { .. } => loading_view("Loading games..."),
        LoadState::Failed(message) => empty_view(message),
        LoadState::Loaded(items) if items.is_empty() => empty_view(NO_GAMES_MESSAGE.to_string()),
        LoadState::Loaded(items) => view! {
            <div class="game-list">{items.into_iter().map(game_item).collect_view()}</div>
        }
        .into_view(),
    }
}

#[component]
pub(super) fn ProfilePanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let active_tab = create_memo(move |_| state.with(|desktop| desktop.profile.tab));
    let user = create_memo(move |_| state.with(|desktop| desktop.session.current_user.clone()));

    let tab_button = move |tab: ProfileTab| {
        view! {
            <button
                class=move || if active_tab.get() == tab { "profile-tab active" } else { "profile-tab" }
                on:click=move |_| runtime.dispatch_action(DesktopAction::SwitchProfileTab(tab))
            >
                {tab.label()}
            </button>
        }
    };
    let section_class = move |tab: ProfileTab| {
        move || {
            if active_tab.get() == tab {
                "profile-section active"
            } else {
                "profile-section"
            }
        }
    };

    view! {
        <div class="profile-panel">
            <div class="profile-tabs">{ProfileTab::ALL.into_iter().map(tab_button).collect_view()}</div>

            <div id=ProfileTab::Info.section_dom_id() class=section_class(ProfileTab::Info)>
                <div class="profile-field">
                    <label>"Username"</label>
                    <span id="profileUsername">
                        {move || user.with(|u| u.as_ref().map(|u| u.username.clone()).unwrap_or_default())}
                    </span>
                </div>
                <div class="profile-field">
                    <label>"Email"</label>
                    <span id="profileEmail">
                        {move || user.with(|u| u.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                    </span>
                </div>
                <div class="profile-field">
                    <label for="profileWalletInput">"Wallet Address"</label>
                    <input
                        id="profileWalletInput"
                        type="text"
                        placeholder="0x..."
                        prop:value=move || state.with(|desktop| desktop.profile.wallet_draft.clone())
                        on:input=move |ev| {
                            runtime.dispatch_action(DesktopAction::SetWalletDraft(event_target_value(&ev)))
                        }
                    />
                    <button
                        id="updateWalletBtn"
                        disabled=move || state.with(|desktop| desktop.profile.wallet_request.is_some())
                        on:click=move |_| runtime.dispatch_action(DesktopAction::SubmitWallet)
                    >
                        "Update Wallet"
                    </button>
                </div>
                {move || {
                    state
                        .with(|desktop| desktop.profile.wallet_notice.clone())
                        .map(|notice| match notice {
                            WalletNotice::Success(message) => {
                                view! { <div id="walletMessage" class="success-message">{message}</div> }
                            }
                            WalletNotice::Failure(message) => {
                                view! { <div id="walletMessage" class="error-message">{message}</div> }
                            }
                        })
                }}
            </div>

            <div
                id=ProfileTab::Transactions.section_dom_id()
                class=section_class(ProfileTab::Transactions)
            >
                <div id="transactionsContainer">
                    {move || transactions_view(state.with(|desktop| desktop.profile.transactions.clone()))}
                </div>
            </div>

            <div id=ProfileTab::Games.section_dom_id() class=section_class(ProfileTab::Games)>
                <div id="gamesContainer">
                    {move || games_view(state.with(|desktop| desktop.profile.games.clone()))}
                </div>
            </div>
        </div>
    }
}
