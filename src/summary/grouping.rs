use std::collections::HashMap;

use crate::schemas::{ObjectChange, OwnerKind};

/// A change paired with the ownership kind it was grouped under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnedChange<'a> {
    pub change: &'a ObjectChange,
    pub kind: OwnerKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnerGroup<'a> {
    pub key: String,
    pub changes: Vec<OwnedChange<'a>>,
}

impl<'a> OwnerGroup<'a> {
    /// Kind of the first change in the group; drives how the owner is displayed.
    pub fn kind(&self) -> OwnerKind {
        self.changes.first().map(|c| c.kind).unwrap_or(OwnerKind::Unknown)
    }

    pub fn objects(&self) -> impl Iterator<Item = &'a ObjectChange> + '_ {
        self.changes.iter().map(|c| c.change)
    }
}

/// Changes bucketed by resolved owner key, in first-seen key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedChanges<'a> {
    groups: Vec<OwnerGroup<'a>>,
    index: HashMap<String, usize>,
}

impl<'a> GroupedChanges<'a> {
    fn push(&mut self, key: String, owned: OwnedChange<'a>) {
        match self.index.get(&key) {
            Some(&i) => self.groups[i].changes.push(owned),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push(OwnerGroup { key, changes: vec![owned] });
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&OwnerGroup<'a>> {
        self.index.get(key).map(|&i| &self.groups[i])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OwnerGroup<'a>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for GroupedChanges<'a> {
    type Item = OwnerGroup<'a>;
    type IntoIter = std::vec::IntoIter<OwnerGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'g, 'a> IntoIterator for &'g GroupedChanges<'a> {
    type Item = &'g OwnerGroup<'a>;
    type IntoIter = std::slice::Iter<'g, OwnerGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition `changes` by owner. Absent input yields an empty grouping.
pub fn group_by_owner(changes: Option<&[ObjectChange]>) -> GroupedChanges<'_> {
    let mut grouped = GroupedChanges::default();
    for change in changes.unwrap_or_default() {
        let (key, kind) = change.owner.resolve(&change.object_id);
        if kind == OwnerKind::Unknown {
            tracing::debug!(object_id = %change.object_id, key = %key, "unrecognized owner shape");
        }
        grouped.push(key, OwnedChange { change, kind });
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Owner;

    fn change(id: &str, owner: Owner) -> ObjectChange {
        ObjectChange {
            object_id: id.to_string(),
            object_type: "0x2::coin::Coin<0x2::sui::SUI>".to_string(),
            owner,
            version: None,
            digest: None,
            sender: None,
        }
    }

    fn addr(a: &str) -> Owner {
        Owner::AddressOwner(a.to_string())
    }

    #[test]
    fn empty_and_absent_input_group_to_nothing() {
        assert!(group_by_owner(None).is_empty());
        assert!(group_by_owner(Some(&[][..])).is_empty());
    }

    #[test]
    fn address_owner_groups_under_address() {
        let changes = vec![change("0x1", addr("0xA"))];
        let grouped = group_by_owner(Some(changes.as_slice()));
        let g = grouped.get("0xA").expect("group");
        assert_eq!(g.kind(), OwnerKind::AddressOwner);
        assert_eq!(g.changes[0].change.object_id, "0x1");
    }

    #[test]
    fn object_owner_groups_under_owner_object() {
        let changes = vec![change("0x1", Owner::ObjectOwner("0xB".to_string()))];
        let grouped = group_by_owner(Some(changes.as_slice()));
        assert_eq!(grouped.get("0xB").map(|g| g.kind()), Some(OwnerKind::ObjectOwner));
    }

    #[test]
    fn shared_groups_under_own_object_id() {
        let changes = vec![change("0xC", Owner::Shared), change("0xD", Owner::Shared)];
        let grouped = group_by_owner(Some(changes.as_slice()));
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["0xC", "0xD"]);
        assert_eq!(grouped.get("0xC").map(|g| g.kind()), Some(OwnerKind::Shared));
    }

    #[test]
    fn unrecognized_owner_falls_back_to_unknown() {
        let changes = vec![change("0x1", Owner::Unknown("Immutable".to_string()))];
        let grouped = group_by_owner(Some(changes.as_slice()));
        // the fallback key is best-effort; only the kind is load-bearing
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped.iter().next().map(|g| g.kind()), Some(OwnerKind::Unknown));
    }

    #[test]
    fn grouping_is_a_stable_partition() {
        let changes = vec![
            change("0x1", addr("0xA")),
            change("0x2", addr("0xB")),
            change("0x3", Owner::Shared),
            change("0x4", addr("0xA")),
            change("0x5", Owner::ObjectOwner("0xB".to_string())),
            change("0x6", addr("0xB")),
        ];
        let grouped = group_by_owner(Some(changes.as_slice()));

        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["0xA", "0xB", "0x3"]);

        let ids = |key: &str| -> Vec<String> {
            grouped
                .get(key)
                .map(|g| g.objects().map(|c| c.object_id.clone()).collect())
                .unwrap_or_default()
        };
        assert_eq!(ids("0xA"), vec!["0x1", "0x4"]);
        assert_eq!(ids("0xB"), vec!["0x2", "0x5", "0x6"]);

        let mut all: Vec<&str> = grouped
            .iter()
            .flat_map(|g| g.changes.iter().map(|c| c.change.object_id.as_str()))
            .collect();
        assert_eq!(all.len(), changes.len());
        all.sort();
        assert_eq!(all, vec!["0x1", "0x2", "0x3", "0x4", "0x5", "0x6"]);
    }

    #[test]
    fn colliding_keys_keep_each_record_kind() {
        let changes =
            vec![change("0x1", addr("0xB")), change("0x2", Owner::ObjectOwner("0xB".to_string()))];
        let grouped = group_by_owner(Some(changes.as_slice()));
        let g = grouped.get("0xB").expect("group");
        assert_eq!(g.kind(), OwnerKind::AddressOwner);
        assert_eq!(g.changes[1].kind, OwnerKind::ObjectOwner);
    }
}
