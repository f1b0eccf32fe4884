//! Typed host-domain contracts and shared models used across the shell runtime and its framed
//! apps.
//!
//! This crate is the API-first boundary for platform services. It exposes the backend endpoint
//! catalog and records, the embedded shell configuration, parent-frame and cookie contracts, and
//! the [`HostServices`] bundle. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod config;
pub mod cookies;
pub mod frame;
pub mod host;
pub mod time;

pub use api::endpoint::{ApiError, ApiRequest, ApiResponse, BackendEndpoint, HttpMethod};
pub use api::records::{
    AuthEnvelope, GameRecord, PlayerPlacement, TournamentsEnvelope, Transaction,
    TransactionStatus, TransactionsEnvelope, User,
};
pub use api::service::{BackendApi, BackendApiFuture, MemoryBackendApi, NoopBackendApi};
pub use config::{
    ApiConfig, FrameConfig, OAuthConfig, SessionConfig, ShellConfig, TimingConfig,
    SHELL_CONFIG_JSON,
};
pub use cookies::{cookie_value, CookieReader, MemoryCookieReader};
pub use frame::{url_origin, MemoryParentFrame, NoopParentFrame, ParentFrameService};
pub use host::{HostServices, HostStrategy};
pub use time::format_timestamp_local;
