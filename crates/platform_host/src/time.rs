//! Time helpers shared across host contracts and adapters.

/// Formats an ISO 8601 timestamp in the viewer's locale.
///
/// Unparseable input is returned unchanged. Non-browser targets have no locale data and always
/// return the input.
pub fn format_timestamp_local(raw: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return raw.to_string();
        }
        date.to_locale_string("default", &js_sys::Object::new())
            .as_string()
            .unwrap_or_else(|| raw.to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_formatting_passes_input_through() {
        assert_eq!(
            format_timestamp_local("2024-05-01T10:00:00Z"),
            "2024-05-01T10:00:00Z"
        );
        assert_eq!(format_timestamp_local("not a date"), "not a date");
    }
}
