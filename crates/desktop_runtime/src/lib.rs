//! Desktop shell runtime: window manager, auth/session transitions, cross-frame routing, the
//! profile loader, and the Leptos components that render them.

pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod profile;
pub mod reducer;
pub mod router;
mod runtime_context;
pub mod session;
pub mod window_manager;

pub use components::{
    nav_button_class, window_class, DesktopProvider, DesktopRuntimeContext, DesktopShell,
};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use router::{route_frame_message, route_incoming, FrameOriginPolicy, RouteOutcome};
pub use runtime_context::use_desktop_runtime;
