//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the backend API, the
//! parent-frame channel, cookie access, and cross-frame message helpers. Every adapter compiles
//! on native targets too, where it reports the browser API as unavailable.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host-service bundle factory.
pub mod adapters;
pub mod api;
pub mod cookies;
pub mod frame;

pub use adapters::{build_host_services, selected_host_strategy, shell_config};
pub use api::WebBackendApi;
pub use cookies::WebCookieReader;
pub use frame::{current_origin, message_event_payload, post_to_frame, WebParentFrame};
