use super::*;

/// Stand-in for a mounted carousel: a name and whether the pointer is over
/// its viewport right now.
#[derive(Debug, PartialEq)]
struct Widget {
    name: &'static str,
    under_pointer: bool,
}

fn widget(name: &'static str, under_pointer: bool) -> Widget {
    Widget { name, under_pointer }
}

#[test]
fn new_registry_is_empty() {
    let registry: Registry<&str> = Registry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.find(|_| true).is_none());
}

#[test]
fn insert_hands_out_distinct_ids() {
    let mut registry = Registry::new();
    let a = registry.insert("a");
    let b = registry.insert("b");
    assert_ne!(a, b);
    assert_eq!(registry.get(a), Some(&"a"));
    assert_eq!(registry.get(b), Some(&"b"));
    assert_eq!(registry.len(), 2);
}

#[test]
fn pointer_already_over_widget_at_mount_is_found() {
    // No enter event was ever seen; the live test alone decides.
    let mut registry = Registry::new();
    registry.insert(widget("features", true));
    let found = registry.find(|w| w.under_pointer);
    assert_eq!(found.map(|w| w.name), Some("features"));
}

#[test]
fn key_routes_to_widget_under_pointer_only() {
    let mut registry = Registry::new();
    registry.insert(widget("features", false));
    registry.insert(widget("news", true));
    assert_eq!(registry.find(|w| w.under_pointer).map(|w| w.name), Some("news"));
}

#[test]
fn no_widget_under_pointer_routes_nowhere() {
    let mut registry = Registry::new();
    registry.insert(widget("features", false));
    registry.insert(widget("news", false));
    assert!(registry.find(|w| w.under_pointer).is_none());
}

#[test]
fn find_prefers_mount_order() {
    let mut registry = Registry::new();
    registry.insert(widget("outer", true));
    registry.insert(widget("inner", true));
    assert_eq!(registry.find(|w| w.under_pointer).map(|w| w.name), Some("outer"));
}

#[test]
fn retain_prunes_entries() {
    let mut registry = Registry::new();
    let a = registry.insert(1);
    registry.insert(2);
    registry.insert(3);

    registry.retain(|value| *value != 1);

    assert_eq!(registry.len(), 2);
    assert!(!registry.contains(a));
    assert_eq!(registry.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn pruned_widget_is_never_found() {
    let mut registry = Registry::new();
    registry.insert(widget("removed", true));
    registry.insert(widget("kept", false));

    registry.retain(|w| w.name != "removed");
    assert!(registry.find(|w| w.under_pointer).is_none());
}
