//! Canonical ordering of catalog-shaped records by their identifier.
//!
//! # Design
//! `compare_identifiers` reproduces the service SDKs' comparator exactly: an
//! absent identifier sorts first, and two absent identifiers compare as
//! `Greater` rather than `Equal`. That relation is not a total order, and the
//! standard sorts may panic when handed one, so `sort_by_identifier` sorts on
//! the `Option` key instead. The two agree on every pair except two absent
//! identifiers, which the stable sort leaves in input order.

use std::cmp::Ordering;

use crate::models::client::{CatalogItem, ItemInstance, StoreItem};

/// A record that is ordered by one identifier field.
pub trait Identified {
    fn identifier(&self) -> Option<&str>;
}

impl Identified for CatalogItem {
    fn identifier(&self) -> Option<&str> {
        self.item_id.as_deref()
    }
}

impl Identified for StoreItem {
    fn identifier(&self) -> Option<&str> {
        self.item_id.as_deref()
    }
}

impl Identified for ItemInstance {
    fn identifier(&self) -> Option<&str> {
        self.item_instance_id.as_deref()
    }
}

pub fn compare_identifiers(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (_, None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

pub fn compare<T: Identified>(a: &T, b: &T) -> Ordering {
    compare_identifiers(a.identifier(), b.identifier())
}

/// Stable sort: absent identifiers first, then ascending.
pub fn sort_by_identifier<T: Identified>(items: &mut [T]) {
    items.sort_by(|a, b| a.identifier().cmp(&b.identifier()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: Option<&str>) -> CatalogItem {
        CatalogItem {
            item_id: id.map(str::to_string),
            ..Default::default()
        }
    }

    fn ids(items: &[CatalogItem]) -> Vec<Option<&str>> {
        items.iter().map(|i| i.identifier()).collect()
    }

    #[test]
    fn absent_identifier_sorts_first() {
        let mut items = vec![item(Some("b")), item(None), item(Some("a"))];
        sort_by_identifier(&mut items);
        assert_eq!(ids(&items), vec![None, Some("a"), Some("b")]);
    }

    #[test]
    fn two_absent_identifiers_compare_greater() {
        assert_eq!(compare(&item(None), &item(None)), Ordering::Greater);
    }

    #[test]
    fn comparator_matches_sort_key_for_present_identifiers() {
        assert_eq!(compare(&item(Some("a")), &item(Some("b"))), Ordering::Less);
        assert_eq!(compare(&item(Some("b")), &item(Some("b"))), Ordering::Equal);
        assert_eq!(compare(&item(Some("a")), &item(None)), Ordering::Greater);
        assert_eq!(compare(&item(None), &item(Some("a"))), Ordering::Less);
    }

    #[test]
    fn sort_keeps_absent_identifiers_in_input_order() {
        let mut items = vec![
            CatalogItem {
                display_name: Some("first".to_string()),
                ..item(None)
            },
            item(Some("z")),
            CatalogItem {
                display_name: Some("second".to_string()),
                ..item(None)
            },
        ];
        sort_by_identifier(&mut items);
        assert_eq!(items[0].display_name.as_deref(), Some("first"));
        assert_eq!(items[1].display_name.as_deref(), Some("second"));
        assert_eq!(items[2].identifier(), Some("z"));
    }

    #[test]
    fn instances_sort_by_instance_id() {
        let mut inventory = vec![
            ItemInstance {
                item_id: Some("sword".to_string()),
                item_instance_id: Some("I-2".to_string()),
                ..Default::default()
            },
            ItemInstance {
                item_id: Some("axe".to_string()),
                item_instance_id: Some("I-1".to_string()),
                ..Default::default()
            },
        ];
        sort_by_identifier(&mut inventory);
        assert_eq!(inventory[0].item_id.as_deref(), Some("axe"));
    }

    #[test]
    fn store_items_use_item_id() {
        let a = StoreItem {
            item_id: Some("gem".to_string()),
            ..Default::default()
        };
        let b = StoreItem::default();
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);
    }
}
