//! LR(0) items and item sets (spec §4.B, component B).

use std::collections::HashSet;

use slr_runtime::index::{ProdIndex, SymbolIndex};

use crate::normalize::NormalizedGrammar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub production: ProdIndex,
    pub dot: usize,
}

impl Item {
    pub fn start(production: ProdIndex) -> Self {
        Item { production, dot: 0 }
    }

    /// `dot = |rhs|`: nothing left to shift over, the item is ready
    /// to reduce.
    pub fn is_reducible(&self, grammar: &NormalizedGrammar) -> bool {
        self.dot == grammar.productions[self.production].rhs.len()
    }

    /// The symbol immediately after the dot, or `None` if the item is
    /// reducible.
    pub fn symbol_after_dot(&self, grammar: &NormalizedGrammar) -> Option<SymbolIndex> {
        grammar.productions[self.production].rhs.get(self.dot).copied()
    }

    pub fn advanced(&self) -> Item {
        Item {
            production: self.production,
            dot: self.dot + 1,
        }
    }
}

/// Set semantics over `(production, dot)` pairs (spec §4.B). Backed by
/// a `HashSet` rather than a linear-scan slice: item sets here can
/// grow past the "typically ≤ dozens" case on larger generated
/// grammars, and `HashSet`'s `PartialEq` already implements
/// cardinality-plus-mutual-containment equality, which is exactly
/// spec §4.B's item-set equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSet(HashSet<Item>);

impl ItemSet {
    pub fn new() -> Self {
        ItemSet(HashSet::new())
    }

    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        ItemSet(items.into_iter().collect())
    }

    pub fn insert(&mut self, item: Item) -> bool {
        self.0.insert(item)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.0.contains(item)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::collections::hash_set::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_sets_compare_by_membership_not_insertion_order() {
        let a = ItemSet::from_items([Item::start(ProdIndex(0)), Item::start(ProdIndex(1))]);
        let b = ItemSet::from_items([Item::start(ProdIndex(1)), Item::start(ProdIndex(0))]);
        assert_eq!(a, b);
    }

    #[test]
    fn advancing_moves_the_dot_by_one() {
        let item = Item::start(ProdIndex(3));
        let advanced = item.advanced();
        assert_eq!(advanced.production, ProdIndex(3));
        assert_eq!(advanced.dot, 1);
    }
}
