//! Cross-frame messaging: the parent-frame adapter and shell-side helpers.

use platform_host::ParentFrameService;
use serde_json::Value;

/// Target origin meaning "same origin as the posting document".
pub const SAME_ORIGIN_TARGET: &str = "/";

#[derive(Debug, Clone, Copy, Default)]
/// Parent-frame adapter backed by `window.parent` and `window.top`.
///
/// Messages are posted with a same-origin target, so a framed app only ever talks to a shell
/// served from its own origin.
pub struct WebParentFrame;

impl ParentFrameService for WebParentFrame {
    fn post_to_parent(&self, payload: &Value) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            let parent = window
                .parent()
                .map_err(|err| format!("window.parent failed: {err:?}"))?
                .ok_or_else(|| "no parent window".to_string())?;
            parent
                .post_message(&to_js(payload)?, SAME_ORIGIN_TARGET)
                .map_err(|err| format!("postMessage failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = payload;
            Err(unsupported())
        }
    }

    fn navigate_top(&self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            let top = window
                .top()
                .map_err(|err| format!("window.top failed: {err:?}"))?
                .unwrap_or(window);
            top.location()
                .set_href(url)
                .map_err(|err| format!("navigation failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Err(unsupported())
        }
    }
}

/// Returns the origin of the current document.
pub fn current_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().origin().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Extracts `(origin, data)` from a `message` event. Returns `None` when the data is not
/// JSON-compatible.
pub fn message_event_payload(event: &web_sys::MessageEvent) -> Option<(String, Value)> {
    let data: Value = serde_wasm_bindgen::from_value(event.data()).ok()?;
    Some((event.origin(), data))
}

/// Posts `payload` into the content window of the iframe with DOM id `frame_dom_id`.
///
/// # Errors
///
/// Returns an error when the iframe is missing, not yet attached, or the post fails.
pub fn post_to_frame(frame_dom_id: &str, payload: &Value, target_origin: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let frame = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(frame_dom_id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlIFrameElement>().ok())
            .ok_or_else(|| format!("frame `{frame_dom_id}` not found"))?;
        let target = frame
            .content_window()
            .ok_or_else(|| format!("frame `{frame_dom_id}` has no content window"))?;
        target
            .post_message(&to_js(payload)?, target_origin)
            .map_err(|err| format!("postMessage failed: {err:?}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (frame_dom_id, payload, target_origin);
        Err(unsupported())
    }
}

#[cfg(target_arch = "wasm32")]
fn to_js(payload: &Value) -> Result<wasm_bindgen::JsValue, String> {
    use serde::Serialize;

    payload
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| format!("payload serialization failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn unsupported() -> String {
    "Browser window APIs are only available when compiled for wasm32".to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn native_parent_frame_is_unavailable() {
        let frame = WebParentFrame;
        assert!(frame.post_to_parent(&json!({ "type": "LOGOUT" })).is_err());
        assert!(frame.navigate_top("https://example.test").is_err());
        assert!(post_to_frame("gameFrame", &json!({}), "/").is_err());
        assert_eq!(current_origin(), None);
    }
}
