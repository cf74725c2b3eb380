//! Validated, ordered route table and path matching

use std::collections::HashSet;

use crate::descriptor::RouteDescriptor;
use crate::error::RouteTableError;
use crate::fragment::{parse_fragment, RawLocation};
use crate::options::MatchOptions;

/// The descriptor a location resolved to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMatch<V> {
    pub index: usize,
    pub name: &'static str,
    pub path: &'static str,
    pub view: V,
}

/// A resolved location: the parsed fragment plus its matched route, if any
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location<V> {
    pub raw: RawLocation,
    pub matched: Option<RouteMatch<V>>,
}

impl<V> Location<V> {
    pub fn path(&self) -> &str {
        &self.raw.path
    }

    pub fn full_path(&self) -> String {
        self.raw.full_path()
    }

    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }

    pub fn name(&self) -> Option<&'static str> {
        self.matched.as_ref().map(|m| m.name)
    }

    /// Full path spelled with the declared route path, `None` when unmatched
    pub fn canonical_path(&self) -> Option<String> {
        let matched = self.matched.as_ref()?;
        let raw = RawLocation {
            path: matched.path.to_string(),
            ..self.raw.clone()
        };
        Some(raw.full_path())
    }
}

/// Immutable route table. Paths and names are unique.
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    routes: Vec<RouteDescriptor<V>>,
    options: MatchOptions,
}

impl<V: Copy + PartialEq> RouteTable<V> {
    pub fn new(routes: Vec<RouteDescriptor<V>>) -> Result<Self, RouteTableError> {
        Self::with_options(routes, MatchOptions::default())
    }

    pub fn with_options(
        routes: Vec<RouteDescriptor<V>>,
        options: MatchOptions,
    ) -> Result<Self, RouteTableError> {
        if routes.is_empty() {
            return Err(RouteTableError::Empty);
        }

        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for (index, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::MissingLeadingSlash(route.path.to_string()));
            }
            if route.path.contains(':') || route.path.contains('*') {
                return Err(RouteTableError::DynamicSegment(route.path.to_string()));
            }
            if route.name.is_empty() {
                return Err(RouteTableError::EmptyName(index));
            }
            if !paths.insert(options.normalize(route.path)) {
                return Err(RouteTableError::DuplicatePath(route.path.to_string()));
            }
            if !names.insert(route.name) {
                return Err(RouteTableError::DuplicateName(route.name.to_string()));
            }
        }

        Ok(Self { routes, options })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor<V>> {
        self.routes.iter()
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn by_view(&self, view: V) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|r| r.view == view)
    }

    /// First descriptor whose path matches `path`, in declaration order
    pub fn by_path(&self, path: &str) -> Option<RouteMatch<V>> {
        let wanted = self.options.normalize(path);
        self.routes
            .iter()
            .enumerate()
            .find(|(_, r)| self.options.normalize(r.path) == wanted)
            .map(|(index, r)| RouteMatch {
                index,
                name: r.name,
                path: r.path,
                view: r.view,
            })
    }

    /// Parse a fragment and match its path against the table
    pub fn resolve(&self, fragment: &str) -> Location<V> {
        let raw = parse_fragment(fragment);
        let matched = self.by_path(&raw.path);
        Location { raw, matched }
    }

    /// Whether two locations render the same route with the same query and hash.
    /// Unmatched locations compare by normalized path.
    pub fn same_location(&self, a: &Location<V>, b: &Location<V>) -> bool {
        let same_target = match (&a.matched, &b.matched) {
            (Some(x), Some(y)) => x.index == y.index,
            (None, None) => self.options.normalize(a.path()) == self.options.normalize(b.path()),
            _ => false,
        };
        same_target && a.raw.query == b.raw.query && a.raw.hash == b.raw.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{View, ROUTES};

    fn table() -> RouteTable<View> {
        RouteTable::new(ROUTES.to_vec()).expect("static routes are valid")
    }

    #[test]
    fn each_declared_path_selects_its_view_exactly_once() {
        let table = table();
        for route in ROUTES.iter() {
            let loc = table.resolve(&format!("#{}", route.path));
            let hits: Vec<_> = table
                .iter()
                .filter(|r| Some(r.name) == loc.name())
                .collect();
            assert_eq!(hits.len(), 1);
            assert_eq!(loc.matched.map(|m| m.view), Some(route.view));
        }
    }

    #[test]
    fn color_histogram_fragment_resolves_by_name() {
        let loc = table().resolve("#/color-histogram");
        assert_eq!(loc.name(), Some("ColorHistogram"));
        assert_eq!(loc.matched.map(|m| m.index), Some(2));
    }

    #[test]
    fn unknown_fragment_matches_nothing() {
        let loc = table().resolve("#/unknown");
        assert!(!loc.is_matched());
        assert_eq!(loc.path(), "/unknown");
    }

    #[test]
    fn prefixes_do_not_match() {
        let table = table();
        assert!(!table.resolve("#/iou/extra").is_matched());
        assert!(!table.resolve("#/io").is_matched());
    }

    #[test]
    fn default_options_tolerate_trailing_slash_and_case() {
        let table = table();
        assert_eq!(table.resolve("#/IOU/").name(), Some("IoU"));
        assert_eq!(table.resolve("#/iou?threshold=0.5").name(), Some("IoU"));
    }

    #[test]
    fn strict_sensitive_table_requires_exact_path() {
        let table = RouteTable::with_options(
            ROUTES.to_vec(),
            MatchOptions {
                strict: true,
                sensitive: true,
            },
        )
        .expect("static routes are valid");
        assert!(!table.resolve("#/IOU").is_matched());
        assert!(!table.resolve("#/iou/").is_matched());
        assert!(table.resolve("#/iou").is_matched());
    }

    #[test]
    fn canonical_path_uses_declared_spelling() {
        let table = table();
        assert_eq!(
            table.resolve("#/Color-Histogram/?bins=32").canonical_path(),
            Some("/color-histogram?bins=32".to_string())
        );
        assert_eq!(table.resolve("#/unknown").canonical_path(), None);
    }

    #[test]
    fn same_location_compares_resolved_parts() {
        let table = table();
        let iou = table.resolve("#/iou");
        assert!(table.same_location(&iou, &table.resolve("#/IOU/")));
        assert!(!table.same_location(&iou, &table.resolve("#/iou?x=1")));
        assert!(!table.same_location(&iou, &table.resolve("#/iou#box")));
        assert!(table.same_location(
            &table.resolve("#/iou?name=a%20b"),
            &table.resolve("#/iou?name=a+b")
        ));
        assert!(table.same_location(&table.resolve("#/Nope/"), &table.resolve("#/nope")));
        assert!(!table.same_location(&table.resolve("#/nope"), &table.resolve("#/other")));
    }

    #[test]
    fn lookups_by_name_and_view() {
        let table = table();
        assert_eq!(table.by_name("IoU").map(|r| r.path), Some("/iou"));
        assert_eq!(table.by_view(View::Home).map(|r| r.name), Some("Home"));
        assert!(table.by_name("iou").is_none());
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn rejects_invalid_tables() {
        assert_eq!(
            RouteTable::<View>::new(Vec::new()).unwrap_err(),
            RouteTableError::Empty
        );
        assert_eq!(
            RouteTable::new(vec![RouteDescriptor::new("iou", "IoU", View::IoU)]).unwrap_err(),
            RouteTableError::MissingLeadingSlash("iou".into())
        );
        assert_eq!(
            RouteTable::new(vec![RouteDescriptor::new("/img/:id", "Img", View::Home)])
                .unwrap_err(),
            RouteTableError::DynamicSegment("/img/:id".into())
        );
        assert_eq!(
            RouteTable::new(vec![RouteDescriptor::new("/", "", View::Home)]).unwrap_err(),
            RouteTableError::EmptyName(0)
        );
        assert_eq!(
            RouteTable::new(vec![
                RouteDescriptor::new("/iou", "IoU", View::IoU),
                RouteDescriptor::new("/IoU/", "Other", View::Home),
            ])
            .unwrap_err(),
            RouteTableError::DuplicatePath("/IoU/".into())
        );
        assert_eq!(
            RouteTable::new(vec![
                RouteDescriptor::new("/", "Home", View::Home),
                RouteDescriptor::new("/home", "Home", View::Home),
            ])
            .unwrap_err(),
            RouteTableError::DuplicateName("Home".into())
        );
    }
}
