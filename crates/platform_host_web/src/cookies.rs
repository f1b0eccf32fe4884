//! `document.cookie` reader.

use platform_host::CookieReader;

#[derive(Debug, Clone, Copy, Default)]
/// Browser cookie reader backed by `document.cookie`.
pub struct WebCookieReader;

impl WebCookieReader {
    /// Returns the raw `document.cookie` string, or an empty string when unavailable.
    pub fn raw(self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
                .and_then(|document| document.cookie().ok())
                .unwrap_or_default()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            String::new()
        }
    }
}

impl CookieReader for WebCookieReader {
    fn cookie(&self, name: &str) -> Option<String> {
        platform_host::cookie_value(&self.raw(), name)
    }
}
