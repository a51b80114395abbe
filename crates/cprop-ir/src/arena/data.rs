use super::id::{Id, Identifier};

/// Append-only storage addressed by a typed [`Identifier`].
#[derive(Debug, Clone)]
pub struct Arena<I: Identifier, T> {
    items: Vec<T>,
    marker: std::marker::PhantomData<I>,
}

impl<I: Identifier, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            marker: std::marker::PhantomData,
        }
    }
}

impl<I: Identifier, T> Arena<I, T> {
    pub fn next_id(&self) -> I {
        I::from(Id(self.items.len()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocate a new item in the arena and return its identifier.
    pub fn alloc(&mut self, item: T) -> I {
        let id = self.next_id();
        self.items.push(item);
        id
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.items.get(id.into().raw())
    }

    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.items.get_mut(id.into().raw())
    }

    /// Iterate over `(id, item)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (I::from(Id(index)), item))
    }
}

impl<I: Identifier, T> std::ops::Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, index: I) -> &Self::Output {
        &self.items[index.into().raw()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::identifier! {
        struct Slot
    }

    #[test]
    fn alloc_hands_out_sequential_ids() {
        let mut arena: Arena<Slot, &str> = Arena::default();
        assert!(arena.is_empty());
        assert_eq!(arena.next_id().index(), 0);

        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[b], "b");
        assert_eq!(arena.get(Slot::from(Id(7))), None);

        let collected: Vec<_> = arena.iter().map(|(id, item)| (id.index(), *item)).collect();
        assert_eq!(collected, vec![(0, "a"), (1, "b")]);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena: Arena<Slot, usize> = Arena::default();
        let id = arena.alloc(1);
        *arena.get_mut(id).unwrap() += 41;
        assert_eq!(arena[id], 42);
    }
}
