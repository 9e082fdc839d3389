//! Item identity and the ordered item store.

/// Identifier for a carousel item, assigned by the store's monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

impl ItemId {
    /// Raw numeric value of the id.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A carousel entry. Carries only its identity; label and palette slot
/// derive deterministically from the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
}

impl Item {
    /// The item's identifier.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Display label for the item.
    pub fn label(&self) -> String {
        format!("Item {}", self.id)
    }

    /// Index into a palette of `palette_len` colors.
    ///
    /// `palette_len` must be non-zero.
    pub fn palette_slot(&self, palette_len: usize) -> usize {
        self.id.0 as usize % palette_len
    }
}

/// Ordered sequence of items; order is display order.
///
/// Seeded once at startup and immutable afterwards. Invariant: non-empty
/// after initialization.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u32,
}

impl ItemStore {
    /// Create a store seeded with `count` sequential items (ids `0..count`).
    pub fn seeded(count: u32) -> Self {
        let mut store = Self {
            items: Vec::with_capacity(count as usize),
            next_id: 0,
        };
        for _ in 0..count {
            store.append();
        }
        store
    }

    fn append(&mut self) {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(Item { id });
    }

    /// Number of items in the store.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items. Always false after seeding.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Iterate over the items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_assigns_sequential_ids() {
        let store = ItemStore::seeded(5);
        assert_eq!(store.len(), 5);
        for (index, item) in store.iter().enumerate() {
            assert_eq!(item.id().as_u32() as usize, index);
        }
    }

    #[test]
    fn labels_derive_from_id() {
        let store = ItemStore::seeded(3);
        assert_eq!(store.get(0).unwrap().label(), "Item 0");
        assert_eq!(store.get(2).unwrap().label(), "Item 2");
    }

    #[test]
    fn palette_slot_wraps() {
        let store = ItemStore::seeded(7);
        assert_eq!(store.get(1).unwrap().palette_slot(5), 1);
        assert_eq!(store.get(5).unwrap().palette_slot(5), 0);
        assert_eq!(store.get(6).unwrap().palette_slot(5), 1);
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let store = ItemStore::seeded(5);
        assert!(store.get(5).is_none());
    }
}
