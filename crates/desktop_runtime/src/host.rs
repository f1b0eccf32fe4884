//! Host-side runtime helpers for executing reducer effects and talking to the browser.
//!
//! Reducer semantics stay pure; everything that touches timers, the network, or other frames
//! goes through [`DesktopHostContext`], which wraps the injected [`HostServices`] bundle.

mod boot;
mod effects;
mod timers;

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use leptos::{leptos_dom::helpers::TimeoutHandle, logging, Callback};
use platform_host::{url_origin, BackendApi, HostServices, ShellConfig};

use crate::{
    model::{TransitionKey, WindowKind},
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle plus live timer handles for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
    timers: Rc<RefCell<HashMap<TransitionKey, TimeoutHandle>>>,
}

impl DesktopHostContext {
    /// Wraps an injected host-service bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            services,
            timers: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Returns the configured backend API.
    pub fn api(&self) -> Rc<dyn BackendApi> {
        self.services.api.clone()
    }

    /// Returns the embedded shell configuration.
    pub fn config(&self) -> &ShellConfig {
        &self.services.config
    }

    /// Installs the cross-frame message listener and starts the startup session check.
    pub fn install_boot(&self, dispatch: Callback<DesktopAction>) {
        boot::install_message_listener(self.clone(), dispatch);
        boot::install_session_check(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        effects::run_runtime_effect(self.clone(), runtime, effect);
    }

    /// Sends the current session id into a freshly loaded frame.
    ///
    /// The target origin is the frame's own origin when its source is absolute, otherwise the
    /// shell's origin.
    pub fn send_session_to_frame(&self, kind: WindowKind, session_id: &str) {
        let Some(frame_dom_id) = kind.frame_dom_id() else {
            return;
        };
        let target_origin = kind
            .frame_source(&self.config().frames)
            .and_then(url_origin)
            .or_else(platform_host_web::current_origin)
            .unwrap_or_else(|| "/".to_string());
        let message = desktop_app_contract::FrameMessage::SessionId {
            session_id: session_id.to_string(),
        };
        if let Err(err) =
            platform_host_web::post_to_frame(frame_dom_id, &message.to_value(), &target_origin)
        {
            logging::warn!("send session to {} frame failed: {err}", kind.token());
        }
    }
}
