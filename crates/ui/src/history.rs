//! Hash-fragment history provider for the Dioxus router
//!
//! The router sees `/iou?x=1` while the address bar shows `#/iou?x=1`.
//! Where the fragment lives is behind [`HashLocation`]: the browser's
//! `window.location` on wasm, an in-memory stack everywhere else.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use dioxus::history::History;
use navigation::{route_from_fragment, RouterOptions};

pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// Storage for the URL fragment and its history entries
pub trait HashLocation {
    /// Current fragment without the leading `#`
    fn fragment(&self) -> String;
    /// Add an entry. Does not fire change callbacks.
    fn push(&self, fragment: &str);
    /// Overwrite the current entry. Does not fire change callbacks.
    fn replace(&self, fragment: &str);
    fn back(&self);
    fn forward(&self);
    fn can_go_back(&self) -> bool {
        true
    }
    fn can_go_forward(&self) -> bool {
        true
    }
    /// Register a callback for fragment changes the router did not make
    fn on_change(&self, callback: ChangeCallback);
    fn external(&self, _url: &str) -> bool {
        false
    }
}

/// Router history that keeps the route in the URL fragment
pub struct HashHistory {
    location: Rc<dyn HashLocation>,
    prefix: String,
}

impl HashHistory {
    pub fn new(location: Rc<dyn HashLocation>, options: &RouterOptions) -> Self {
        Self {
            location,
            prefix: options.href(""),
        }
    }

    /// Browser-backed history on wasm, in-memory elsewhere
    pub fn platform(options: &RouterOptions) -> Self {
        Self::new(platform_location(options), options)
    }
}

#[cfg(target_arch = "wasm32")]
fn platform_location(options: &RouterOptions) -> Rc<dyn HashLocation> {
    match browser::BrowserLocation::new(options.scroll_restoration) {
        Some(location) => Rc::new(location),
        None => {
            tracing::warn!("no browser window; falling back to in-memory history");
            Rc::new(MemoryLocation::default())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_location(_options: &RouterOptions) -> Rc<dyn HashLocation> {
    Rc::new(MemoryLocation::default())
}

impl History for HashHistory {
    fn current_route(&self) -> String {
        route_from_fragment(&self.location.fragment())
    }

    fn current_prefix(&self) -> Option<String> {
        Some(self.prefix.clone())
    }

    fn can_go_back(&self) -> bool {
        self.location.can_go_back()
    }

    fn go_back(&self) {
        self.location.back();
    }

    fn can_go_forward(&self) -> bool {
        self.location.can_go_forward()
    }

    fn go_forward(&self) {
        self.location.forward();
    }

    fn push(&self, route: String) {
        if route == self.current_route() {
            return;
        }
        self.location.push(&route);
    }

    fn replace(&self, route: String) {
        self.location.replace(&route);
    }

    fn external(&self, url: String) -> bool {
        self.location.external(&url)
    }

    fn updater(&self, callback: ChangeCallback) {
        self.location.on_change(callback);
    }
}

/// Fragment history kept in memory. Clones share the same stack.
#[derive(Clone)]
pub struct MemoryLocation {
    inner: Rc<MemoryInner>,
}

struct MemoryInner {
    entries: RefCell<Vec<String>>,
    position: Cell<usize>,
    callbacks: RefCell<Vec<ChangeCallback>>,
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialEq for MemoryLocation {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl MemoryLocation {
    pub fn new(fragment: &str) -> Self {
        Self {
            inner: Rc::new(MemoryInner {
                entries: RefCell::new(vec![fragment.to_string()]),
                position: Cell::new(0),
                callbacks: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Change the fragment as the address bar would, firing change callbacks
    pub fn set_fragment(&self, fragment: &str) {
        HashLocation::push(self, fragment.strip_prefix('#').unwrap_or(fragment));
        self.notify();
    }

    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.borrow().is_empty()
    }

    fn notify(&self) {
        let callbacks = self.inner.callbacks.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

impl HashLocation for MemoryLocation {
    fn fragment(&self) -> String {
        self.inner.entries.borrow()[self.inner.position.get()].clone()
    }

    fn push(&self, fragment: &str) {
        let mut entries = self.inner.entries.borrow_mut();
        let position = self.inner.position.get();
        entries.truncate(position + 1);
        entries.push(fragment.to_string());
        self.inner.position.set(position + 1);
    }

    fn replace(&self, fragment: &str) {
        let position = self.inner.position.get();
        self.inner.entries.borrow_mut()[position] = fragment.to_string();
    }

    fn back(&self) {
        if self.can_go_back() {
            self.inner.position.set(self.inner.position.get() - 1);
            self.notify();
        }
    }

    fn forward(&self) {
        if self.can_go_forward() {
            self.inner.position.set(self.inner.position.get() + 1);
            self.notify();
        }
    }

    fn can_go_back(&self) -> bool {
        self.inner.position.get() > 0
    }

    fn can_go_forward(&self) -> bool {
        self.inner.position.get() + 1 < self.inner.entries.borrow().len()
    }

    fn on_change(&self, callback: ChangeCallback) {
        self.inner.callbacks.borrow_mut().push(callback);
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Event, Window};

    use super::{ChangeCallback, HashLocation};

    /// `window.location.hash` driven through the History API
    pub struct BrowserLocation {
        window: Window,
        history: web_sys::History,
        scroll_to_top: bool,
    }

    impl BrowserLocation {
        pub fn new(scroll_to_top: bool) -> Option<Self> {
            let window = web_sys::window()?;
            let history = window.history().ok()?;
            Some(Self {
                window,
                history,
                scroll_to_top,
            })
        }

        fn after_navigation(&self, result: Result<(), JsValue>) {
            match result {
                Ok(()) if self.scroll_to_top => self.window.scroll_to_with_x_and_y(0.0, 0.0),
                Ok(()) => {}
                Err(err) => tracing::error!(?err, "failed to update history state"),
            }
        }
    }

    impl HashLocation for BrowserLocation {
        fn fragment(&self) -> String {
            let hash = self.window.location().hash().unwrap_or_default();
            hash.strip_prefix('#').unwrap_or(&hash).to_string()
        }

        // pushState keeps hashchange quiet, like a router-driven navigation should
        fn push(&self, fragment: &str) {
            let url = format!("#{fragment}");
            self.after_navigation(self.history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
        }

        fn replace(&self, fragment: &str) {
            let url = format!("#{fragment}");
            self.after_navigation(self.history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        }

        fn back(&self) {
            if let Err(err) = self.history.back() {
                tracing::error!(?err, "failed to go back");
            }
        }

        fn forward(&self) {
            if let Err(err) = self.history.forward() {
                tracing::error!(?err, "failed to go forward");
            }
        }

        fn on_change(&self, callback: ChangeCallback) {
            let listener = Closure::wrap(Box::new(move |_: Event| callback()) as Box<dyn FnMut(Event)>);
            if let Err(err) = self
                .window
                .add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
            {
                tracing::error!(?err, "failed to listen for hashchange");
            }
            // lives as long as the page
            listener.forget();
        }

        fn external(&self, url: &str) -> bool {
            self.window.location().set_href(url).is_ok()
        }
    }
}
