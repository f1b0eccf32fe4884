use std::rc::Rc;

use platform_host::{
    BackendApi, CookieReader, HostServices, HostStrategy, MemoryCookieReader, MemoryParentFrame,
    NoopBackendApi, ParentFrameService, ShellConfig,
};

use crate::{WebBackendApi, WebCookieReader, WebParentFrame};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Loads the embedded shell configuration, falling back to built-in defaults when it does not
/// decode.
pub fn shell_config() -> ShellConfig {
    ShellConfig::embedded().unwrap_or_else(|err| {
        let message = format!("embedded shell config invalid, using defaults: {err}");
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&message.into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = message;
        ShellConfig::default()
    })
}

/// Builds the host-service bundle for the compile-time selected host strategy.
pub fn build_host_services() -> HostServices {
    let config = shell_config();
    let (api, parent_frame, cookies): (
        Rc<dyn BackendApi>,
        Rc<dyn ParentFrameService>,
        Rc<dyn CookieReader>,
    ) = match selected_host_strategy() {
        HostStrategy::Browser => (
            Rc::new(WebBackendApi::new(config.api.clone())),
            Rc::new(WebParentFrame),
            Rc::new(WebCookieReader),
        ),
        HostStrategy::Headless => (
            Rc::new(NoopBackendApi),
            Rc::new(MemoryParentFrame::default()),
            Rc::new(MemoryCookieReader::default()),
        ),
    };

    HostServices {
        api,
        parent_frame,
        cookies,
        config,
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_builds_select_headless_services() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Headless);
        assert_eq!(services.host_strategy.as_str(), "headless");
        assert_eq!(services.config.schema_version, 1);
    }
}
