//! Cookie lookup contract and `document.cookie` parsing.

use std::{cell::RefCell, rc::Rc};

/// Host service for reading cookies visible to the current document.
pub trait CookieReader {
    /// Returns the value of cookie `name`, if set.
    fn cookie(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory cookie jar holding a raw `document.cookie` string.
pub struct MemoryCookieReader {
    raw: Rc<RefCell<String>>,
}

impl MemoryCookieReader {
    /// Replaces the raw cookie string.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.raw.borrow_mut() = raw.into();
    }
}

impl CookieReader for MemoryCookieReader {
    fn cookie(&self, name: &str) -> Option<String> {
        cookie_value(&self.raw.borrow(), name)
    }
}

/// Extracts cookie `name` from a raw `a=1; b=2` cookie string.
///
/// Returns `None` when the cookie is absent or appears more than once.
pub fn cookie_value(raw: &str, name: &str) -> Option<String> {
    let mut matches = raw
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string());
    let first = matches.next()?;
    matches.next().is_none().then_some(first)
}
