//! Embedding-window contracts used by framed apps, plus origin helpers.

use std::{cell::RefCell, rc::Rc};

use serde_json::Value;

/// Operations an embedded frame performs on the window that embeds it.
pub trait ParentFrameService {
    /// Posts a structured-clone JSON payload to the parent window.
    fn post_to_parent(&self, payload: &Value) -> Result<(), String>;

    /// Navigates the top-level window (not the frame) to `url`.
    fn navigate_top(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Parent-frame service for documents that are not embedded.
pub struct NoopParentFrame;

impl ParentFrameService for NoopParentFrame {
    fn post_to_parent(&self, _payload: &Value) -> Result<(), String> {
        Err("no parent frame".to_string())
    }

    fn navigate_top(&self, _url: &str) -> Result<(), String> {
        Err("no top-level window".to_string())
    }
}

#[derive(Debug, Clone, Default)]
/// Recording parent-frame service for tests and headless hosts.
pub struct MemoryParentFrame {
    posted: Rc<RefCell<Vec<Value>>>,
    navigations: Rc<RefCell<Vec<String>>>,
}

impl MemoryParentFrame {
    /// Returns every payload posted so far.
    pub fn posted(&self) -> Vec<Value> {
        self.posted.borrow().clone()
    }

    /// Returns every top-level navigation requested so far.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl ParentFrameService for MemoryParentFrame {
    fn post_to_parent(&self, payload: &Value) -> Result<(), String> {
        self.posted.borrow_mut().push(payload.clone());
        Ok(())
    }

    fn navigate_top(&self, url: &str) -> Result<(), String> {
        self.navigations.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Returns the serialized origin (`scheme://host[:port]`) of an absolute URL.
///
/// Relative URLs and opaque origins yield `None`.
pub fn url_origin(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw).ok()?;
    let origin = parsed.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}
