use std::collections::BTreeMap;

use platform_host::{FrameConfig, GameRecord, Transaction, User};
use serde::{Deserialize, Serialize};

pub const AUTHENTICATED_STATUS: &str = "Authenticated";
pub const NOT_AUTHENTICATED_STATUS: &str = "Not Authenticated";
pub const AUTH_FAILED_STATUS: &str = "Authentication failed";
pub const LOGIN_REQUIRED_STATUS: &str = "Please login first";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The four panes managed by the shell.
pub enum WindowKind {
    Login,
    Register,
    Game,
    Profile,
}

impl WindowKind {
    pub const ALL: [Self; 4] = [Self::Login, Self::Register, Self::Game, Self::Profile];

    pub const fn token(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Game => "game",
            Self::Profile => "profile",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Game => "Game",
            Self::Profile => "Profile",
        }
    }

    pub const fn window_dom_id(self) -> &'static str {
        match self {
            Self::Login => "loginWindow",
            Self::Register => "registerWindow",
            Self::Game => "gameWindow",
            Self::Profile => "profileWindow",
        }
    }

    pub const fn nav_button_dom_id(self) -> &'static str {
        match self {
            Self::Login => "loginBtn",
            Self::Register => "registerBtn",
            Self::Game => "gameBtn",
            Self::Profile => "profileBtn",
        }
    }

    pub const fn welcome_button_dom_id(self) -> &'static str {
        match self {
            Self::Login => "welcomeLoginBtn",
            Self::Register => "welcomeRegisterBtn",
            Self::Game => "welcomeGameBtn",
            Self::Profile => "welcomeProfileBtn",
        }
    }

    pub const fn taskbar_dom_id(self) -> &'static str {
        match self {
            Self::Login => "loginTaskbar",
            Self::Register => "registerTaskbar",
            Self::Game => "gameTaskbar",
            Self::Profile => "profileTaskbar",
        }
    }

    /// Iframe element id; the profile pane is rendered natively.
    pub const fn frame_dom_id(self) -> Option<&'static str> {
        match self {
            Self::Login => Some("loginFrame"),
            Self::Register => Some("registerFrame"),
            Self::Game => Some("gameFrame"),
            Self::Profile => None,
        }
    }

    /// Game and profile are only reachable with an authenticated session.
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Game | Self::Profile)
    }

    pub fn frame_source(self, frames: &FrameConfig) -> Option<&str> {
        match self {
            Self::Login => Some(frames.login_src.as_str()),
            Self::Register => Some(frames.register_src.as_str()),
            Self::Game => Some(frames.game_src.as_str()),
            Self::Profile => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Insertion-ordered set of windows.
pub struct WindowSet(Vec<WindowKind>);

impl WindowSet {
    pub fn contains(&self, kind: WindowKind) -> bool {
        self.0.contains(&kind)
    }

    /// Appends `kind` unless present. Returns whether it was inserted.
    pub fn insert(&mut self, kind: WindowKind) -> bool {
        if self.contains(kind) {
            return false;
        }
        self.0.push(kind);
        true
    }

    /// Returns whether `kind` was present.
    pub fn remove(&mut self, kind: WindowKind) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| *existing != kind);
        self.0.len() != before
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<WindowKind> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<WindowKind> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = WindowKind> + '_ {
        self.0.iter().copied()
    }
}

impl<const N: usize> From<[WindowKind; N]> for WindowSet {
    fn from(kinds: [WindowKind; N]) -> Self {
        let mut set = Self::default();
        for kind in kinds {
            set.insert(kind);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Grid slot assigned to an active window; carries its CSS class.
pub enum GridSlot {
    Single,
    HalfOf2(u8),
    ThirdOf3(u8),
    QuarterOf4(u8),
}

impl GridSlot {
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Single => "grid-1",
            Self::HalfOf2(1) => "grid-2-1",
            Self::HalfOf2(_) => "grid-2-2",
            Self::ThirdOf3(1) => "grid-3-1",
            Self::ThirdOf3(2) => "grid-3-2",
            Self::ThirdOf3(_) => "grid-3-3",
            Self::QuarterOf4(1) => "grid-4-1",
            Self::QuarterOf4(2) => "grid-4-2",
            Self::QuarterOf4(3) => "grid-4-3",
            Self::QuarterOf4(_) => "grid-4-4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Key for a cancellable delayed transition.
pub enum TransitionKey {
    Window(WindowKind),
    Welcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Minimize,
    Restore,
    WelcomeFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub ticket: u64,
    pub kind: TransitionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowManagerState {
    pub active: WindowSet,
    pub minimized: WindowSet,
    pub focused: Option<WindowKind>,
    pub layout: Vec<(WindowKind, GridSlot)>,
    pub welcome_visible: bool,
    /// Windows whose iframe source has been assigned; never shrinks.
    pub loaded_frames: Vec<WindowKind>,
    pub pending: BTreeMap<TransitionKey, PendingTransition>,
    pub next_ticket: u64,
}

impl Default for WindowManagerState {
    fn default() -> Self {
        Self {
            active: WindowSet::default(),
            minimized: WindowSet::default(),
            focused: None,
            layout: Vec::new(),
            welcome_visible: true,
            loaded_frames: Vec::new(),
            pending: BTreeMap::new(),
            next_ticket: 1,
        }
    }
}

impl WindowManagerState {
    pub fn is_idle(&self) -> bool {
        self.active.is_empty() && self.minimized.is_empty()
    }

    pub fn slot_of(&self, kind: WindowKind) -> Option<GridSlot> {
        self.layout
            .iter()
            .find(|(window, _)| *window == kind)
            .map(|(_, slot)| *slot)
    }

    pub fn frame_loaded(&self, kind: WindowKind) -> bool {
        self.loaded_frames.contains(&kind)
    }

    /// Returns the in-flight transition for `kind`, if any.
    pub fn transition_of(&self, kind: WindowKind) -> Option<TransitionKind> {
        self.pending
            .get(&TransitionKey::Window(kind))
            .map(|pending| pending.kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub is_authenticated: bool,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Text plus indicator state for one status-bar segment.
pub struct StatusLine {
    pub message: String,
    pub connected: bool,
}

impl StatusLine {
    pub fn new(message: impl Into<String>, connected: bool) -> Self {
        Self {
            message: message.into(),
            connected,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Info,
    Transactions,
    Games,
}

impl ProfileTab {
    pub const ALL: [Self; 3] = [Self::Info, Self::Transactions, Self::Games];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Transactions => "Transactions",
            Self::Games => "Recent Games",
        }
    }

    pub const fn section_dom_id(self) -> &'static str {
        match self {
            Self::Info => "profileSectionInfo",
            Self::Transactions => "profileSectionTransactions",
            Self::Games => "profileSectionGames",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// One on-demand list fetch. `request` ties a response to the fetch that asked for it.
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading {
        request: u64,
    },
    Loaded(Vec<T>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletNotice {
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    pub tab: ProfileTab,
    pub transactions: LoadState<Transaction>,
    pub games: LoadState<GameRecord>,
    pub next_request: u64,
    pub wallet_draft: String,
    pub wallet_notice: Option<WalletNotice>,
    /// Request id of the in-flight wallet update, if any.
    pub wallet_request: Option<u64>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            tab: ProfileTab::Info,
            transactions: LoadState::Idle,
            games: LoadState::Idle,
            next_request: 1,
            wallet_draft: String::new(),
            wallet_notice: None,
            wallet_request: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub windows: WindowManagerState,
    pub session: SessionState,
    pub auth_status: StatusLine,
    pub connection_status: StatusLine,
    pub profile: ProfileState,
    /// True until the startup session check settles.
    pub booting: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: WindowManagerState::default(),
            session: SessionState::default(),
            auth_status: StatusLine::new(NOT_AUTHENTICATED_STATUS, false),
            connection_status: StatusLine::new("Disconnected", false),
            profile: ProfileState::default(),
            booting: true,
        }
    }
}

impl DesktopState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    /// Status-bar user label, empty without a user.
    pub fn user_info(&self) -> String {
        self.session
            .current_user
            .as_ref()
            .map(|user| format!("User: {}", user.username))
            .unwrap_or_default()
    }
}
