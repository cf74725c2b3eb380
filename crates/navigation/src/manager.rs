//! Navigation manager modelling hash-fragment history
//!
//! The browser owns the real history stack; this type mirrors it so the
//! application can resolve the active route, generate links and notify
//! listeners without touching the DOM.

use tracing::{debug, warn};

use crate::error::NavigationError;
use crate::options::RouterOptions;
use crate::table::{Location, RouteTable};

/// How a navigation was triggered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
    Traverse,
    /// A fragment change the manager did not initiate (address bar, link)
    Observed,
}

/// Passed to listeners after every successful navigation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEvent<V> {
    pub from: Location<V>,
    pub to: Location<V>,
    pub kind: NavigationKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<V> = Box<dyn FnMut(&NavigationEvent<V>)>;

pub struct NavigationManager<V> {
    table: RouteTable<V>,
    options: RouterOptions,
    entries: Vec<Location<V>>,
    position: usize,
    listeners: Vec<(ListenerId, Listener<V>)>,
    next_listener: u64,
}

impl<V: Copy + PartialEq> NavigationManager<V> {
    /// Start at `/` with a single history entry
    pub fn new(table: RouteTable<V>, options: RouterOptions) -> Self {
        let start = table.resolve("/");
        Self {
            table,
            options,
            entries: vec![start],
            position: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn current(&self) -> &Location<V> {
        &self.entries[self.position]
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Link target for a named route
    pub fn href(&self, name: &str) -> Result<String, NavigationError> {
        let route = self
            .table
            .by_name(name)
            .ok_or_else(|| NavigationError::UnknownName(name.to_string()))?;
        Ok(self.options.href(route.path))
    }

    /// Add a new history entry, dropping any forward entries
    pub fn push(&mut self, fragment: &str) -> Result<&Location<V>, NavigationError> {
        let to = self.table.resolve(fragment);
        if self.table.same_location(&to, self.current()) {
            return Err(NavigationError::Duplicated(to.full_path()));
        }
        self.commit(to, NavigationKind::Push);
        Ok(self.current())
    }

    /// Swap the current entry without growing history
    pub fn replace(&mut self, fragment: &str) -> Result<&Location<V>, NavigationError> {
        let to = self.table.resolve(fragment);
        if self.table.same_location(&to, self.current()) {
            return Err(NavigationError::Duplicated(to.full_path()));
        }
        self.commit(to, NavigationKind::Replace);
        Ok(self.current())
    }

    pub fn push_named(&mut self, name: &str) -> Result<&Location<V>, NavigationError> {
        let path = self.path_for(name)?;
        self.push(path)
    }

    pub fn replace_named(&mut self, name: &str) -> Result<&Location<V>, NavigationError> {
        let path = self.path_for(name)?;
        self.replace(path)
    }

    /// Record a fragment change made outside the manager.
    ///
    /// Returns `None` when the fragment resolves to the current location.
    pub fn observe(&mut self, fragment: &str) -> Option<&Location<V>> {
        let to = self.table.resolve(fragment);
        if self.table.same_location(&to, self.current()) {
            return None;
        }
        self.commit(to, NavigationKind::Observed);
        Some(self.current())
    }

    pub fn back(&mut self) -> Option<&Location<V>> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&Location<V>> {
        self.go(1)
    }

    /// Move `delta` entries through history. Out of range moves do nothing.
    pub fn go(&mut self, delta: isize) -> Option<&Location<V>> {
        let target = self.position.checked_add_signed(delta)?;
        if target >= self.entries.len() || delta == 0 {
            return None;
        }
        let from = self.current().clone();
        self.position = target;
        let to = self.current().clone();
        debug!(from = %from.full_path(), to = %to.full_path(), "history traversal");
        self.notify(NavigationEvent {
            from,
            to,
            kind: NavigationKind::Traverse,
        });
        Some(self.current())
    }

    pub fn listen(&mut self, listener: impl FnMut(&NavigationEvent<V>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the listener was not registered
    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    fn path_for(&self, name: &str) -> Result<&'static str, NavigationError> {
        self.table
            .by_name(name)
            .map(|r| r.path)
            .ok_or_else(|| NavigationError::UnknownName(name.to_string()))
    }

    fn commit(&mut self, to: Location<V>, kind: NavigationKind) {
        if !to.is_matched() {
            warn!(path = %to.path(), "no route matches location");
        }
        debug!(to = %to.full_path(), ?kind, "navigating");

        let from = self.current().clone();
        match kind {
            NavigationKind::Replace => self.entries[self.position] = to.clone(),
            _ => {
                self.entries.truncate(self.position + 1);
                self.entries.push(to.clone());
                self.position += 1;
            }
        }
        self.notify(NavigationEvent { from, to, kind });
    }

    fn notify(&mut self, event: NavigationEvent<V>) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{View, ROUTES};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn manager() -> NavigationManager<View> {
        let table = RouteTable::new(ROUTES.to_vec()).expect("static routes are valid");
        NavigationManager::new(table, RouterOptions::default())
    }

    #[test]
    fn starts_at_home() {
        let nav = manager();
        assert_eq!(nav.current().name(), Some("Home"));
        assert_eq!(nav.history_len(), 1);
    }

    #[test]
    fn push_and_traverse() {
        let mut nav = manager();
        nav.push("#/image-similarity").expect("push");
        nav.push("#/iou").expect("push");
        assert_eq!(nav.history_len(), 3);

        assert_eq!(nav.back().and_then(|l| l.name()), Some("ImageSimilarity"));
        assert_eq!(nav.back().and_then(|l| l.name()), Some("Home"));
        assert!(nav.back().is_none());
        assert_eq!(nav.position(), 0);

        assert_eq!(nav.go(2).and_then(|l| l.name()), Some("IoU"));
        assert!(nav.forward().is_none());
        assert!(nav.go(-5).is_none());
        assert_eq!(nav.current().name(), Some("IoU"));
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let mut nav = manager();
        nav.push("#/iou").expect("push");
        nav.back();
        nav.push("#/color-histogram").expect("push");
        assert_eq!(nav.history_len(), 2);
        assert!(nav.forward().is_none());
    }

    #[test]
    fn replace_keeps_history_length() {
        let mut nav = manager();
        nav.push("#/iou").expect("push");
        nav.replace("#/color-histogram").expect("replace");
        assert_eq!(nav.history_len(), 2);
        assert_eq!(nav.current().name(), Some("ColorHistogram"));
    }

    #[test]
    fn duplicate_push_is_rejected() {
        let mut nav = manager();
        nav.push("#/iou").expect("push");
        assert_eq!(
            nav.push("#/iou").unwrap_err(),
            NavigationError::Duplicated("/iou".into())
        );
        assert_eq!(nav.history_len(), 2);
        // different query is a different location
        assert!(nav.push("#/iou?threshold=0.7").is_ok());
    }

    #[test]
    fn equivalent_spelling_is_a_duplicate() {
        let mut nav = manager();
        nav.push("#/iou").expect("push");
        assert_eq!(
            nav.push("#/IOU/").unwrap_err(),
            NavigationError::Duplicated("/IOU/".into())
        );
        assert_eq!(nav.history_len(), 2);

        nav.push("#/iou?name=a%20b").expect("push");
        assert!(nav.push("#/iou?name=a+b").is_err());
        assert!(nav.observe("#/Iou?name=a%20b").is_none());
        assert_eq!(nav.history_len(), 3);
    }

    #[test]
    fn replace_with_current_location_is_rejected() {
        let mut nav = manager();
        nav.push("#/color-histogram").expect("push");
        assert_eq!(
            nav.replace("#/color-histogram").unwrap_err(),
            NavigationError::Duplicated("/color-histogram".into())
        );
        assert_eq!(nav.history_len(), 2);
        assert_eq!(nav.current().name(), Some("ColorHistogram"));
    }

    #[test]
    fn replace_named_swaps_current_entry() {
        let mut nav = manager();
        nav.push("#/iou").expect("push");
        assert_eq!(
            nav.replace_named("ImageSimilarity").map(|l| l.path().to_string()),
            Ok("/image-similarity".into())
        );
        assert_eq!(nav.history_len(), 2);
        assert_eq!(
            nav.replace_named("Histogram").unwrap_err(),
            NavigationError::UnknownName("Histogram".into())
        );
        assert_eq!(nav.current().name(), Some("ImageSimilarity"));
    }

    #[test]
    fn go_zero_does_nothing() {
        let mut nav = manager();
        nav.push("#/iou").expect("push");
        let fired = Rc::new(RefCell::new(0));
        let counter = fired.clone();
        nav.listen(move |_| *counter.borrow_mut() += 1);

        assert!(nav.go(0).is_none());
        assert_eq!(nav.position(), 1);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn named_navigation() {
        let mut nav = manager();
        assert_eq!(nav.push_named("ColorHistogram").map(|l| l.path().to_string()), Ok("/color-histogram".into()));
        assert_eq!(
            nav.push_named("Missing").unwrap_err(),
            NavigationError::UnknownName("Missing".into())
        );
        assert_eq!(nav.href("IoU"), Ok("#/iou".to_string()));
    }

    #[test]
    fn unmatched_navigation_is_recorded() {
        let mut nav = manager();
        let loc = nav.push("#/unknown").expect("push");
        assert!(!loc.is_matched());
        assert_eq!(nav.history_len(), 2);
    }

    #[test]
    fn observe_ignores_current_location() {
        let mut nav = manager();
        assert!(nav.observe("#/").is_none());
        assert_eq!(nav.observe("#/iou").and_then(|l| l.name()), Some("IoU"));
        assert!(nav.observe("https://host/app#/iou").is_none());
        assert_eq!(nav.history_len(), 2);
    }

    #[test]
    fn listeners_fire_once_per_navigation() {
        let mut nav = manager();
        let seen: Rc<RefCell<Vec<(Option<&'static str>, NavigationKind)>>> = Rc::default();
        let sink = seen.clone();
        let id = nav.listen(move |event| sink.borrow_mut().push((event.to.name(), event.kind)));

        nav.push("#/iou").expect("push");
        let _ = nav.push("#/iou");
        nav.back();
        nav.observe("#/color-histogram");

        assert_eq!(
            *seen.borrow(),
            vec![
                (Some("IoU"), NavigationKind::Push),
                (Some("Home"), NavigationKind::Traverse),
                (Some("ColorHistogram"), NavigationKind::Observed),
            ]
        );

        assert!(nav.unlisten(id));
        assert!(!nav.unlisten(id));
        nav.push("#/iou").expect("push");
        assert_eq!(seen.borrow().len(), 3);
    }
}
