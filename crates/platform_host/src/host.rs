//! Shared host-bundle model injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    BackendApi, CookieReader, MemoryBackendApi, MemoryCookieReader, MemoryParentFrame,
    ParentFrameService, ShellConfig,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// In-memory composition used by tests and non-browser targets.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the shared desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime and the framed apps decoupled from browser
/// adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Credentialed backend API.
    pub api: Rc<dyn BackendApi>,
    /// Embedding-window channel, used by framed apps.
    pub parent_frame: Rc<dyn ParentFrameService>,
    /// Cookie access for the current document.
    pub cookies: Rc<dyn CookieReader>,
    /// Build-time shell configuration.
    pub config: ShellConfig,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds an all-in-memory bundle around `config`.
    pub fn headless(config: ShellConfig) -> Self {
        Self {
            api: Rc::new(MemoryBackendApi::default()),
            parent_frame: Rc::new(MemoryParentFrame::default()),
            cookies: Rc::new(MemoryCookieReader::default()),
            config,
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("config", &self.config)
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
