//! Id/label projections used to populate selection controls.

use serde::Serialize;

use crate::types::DbId;

/// One selectable entry: the record's id and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceItem {
    pub id: DbId,
    pub label: String,
}

/// Ordered list of [`ReferenceItem`]s.
///
/// Keeps entries in the order they were added; no sorting or de-duplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReferenceList(Vec<ReferenceItem>);

impl ReferenceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, id: DbId, label: impl Into<String>) {
        self.0.push(ReferenceItem {
            id,
            label: label.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceItem> {
        self.0.iter()
    }

    /// Label of the entry with the given id, if present.
    pub fn label_of(&self, id: DbId) -> Option<&str> {
        self.0
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.label.as_str())
    }

    pub fn into_inner(self) -> Vec<ReferenceItem> {
        self.0
    }
}

impl FromIterator<(DbId, String)> for ReferenceList {
    fn from_iter<I: IntoIterator<Item = (DbId, String)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, label)| ReferenceItem { id, label })
                .collect(),
        )
    }
}

impl IntoIterator for ReferenceList {
    type Item = ReferenceItem;
    type IntoIter = std::vec::IntoIter<ReferenceItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReferenceList {
    type Item = &'a ReferenceItem;
    type IntoIter = std::slice::Iter<'a, ReferenceItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut list = ReferenceList::new();
        list.add_item(3, "Summer");
        list.add_item(1, "Spring");
        list.add_item(2, "Autumn");

        let ids: Vec<DbId> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn collects_from_pairs() {
        let list: ReferenceList = vec![(1, "a".to_string()), (2, "b".to_string())]
            .into_iter()
            .collect();
        assert_eq!(list.label_of(2), Some("b"));
        assert_eq!(list.label_of(9), None);
    }

    #[test]
    fn empty_list() {
        let list = ReferenceList::new();
        assert!(list.is_empty());
        assert_eq!(list.into_inner(), Vec::<ReferenceItem>::new());
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut list = ReferenceList::new();
        list.add_item(7, "Theme");
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json, serde_json::json!([{ "id": 7, "label": "Theme" }]));
    }
}
