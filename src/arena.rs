//! Node storage for [`Tree`](crate::tree::Tree). Nodes point at their
//! children with a [`Handle`] into a `Vec` rather than with a `Box`, so a
//! removal re-links a subtree by copying a `u32` and the vacated slot is
//! handed to the next insertion.

use std::fmt;
use std::num::NonZeroU32;

/// Position of a live node in an [`Arena`]. Slot `n` is stored as `n + 1`
/// so that `Option<Handle>` needs no extra tag.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub(crate) struct Handle(NonZeroU32);

impl Handle {
    /// The handle for `slot`, or `None` if `slot` is past the last one a
    /// `u32` can address.
    pub(crate) fn new(slot: usize) -> Option<Self> {
        let raw = u32::try_from(slot).ok()?.checked_add(1)?;
        NonZeroU32::new(raw).map(Self)
    }

    pub(crate) fn slot(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.slot())
    }
}

/// Slots of nodes plus a stack of the vacant ones.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    /// Stores `node`, reusing the most recently vacated slot if there is one.
    ///
    /// # Panics
    ///
    /// If every one of the `u32::MAX` addressable slots is live.
    pub(crate) fn insert(&mut self, node: T) -> Handle {
        if let Some(handle) = self.vacant.pop() {
            self.slots[handle.slot()] = Some(node);
            return handle;
        }

        match Handle::new(self.slots.len()) {
            Some(handle) => {
                self.slots.push(Some(node));
                handle
            }
            None => panic!("tree is full: no node slot left to hand out"),
        }
    }

    pub(crate) fn get(&self, handle: Handle) -> &T {
        match self.slots.get(handle.slot()) {
            Some(Some(node)) => node,
            _ => panic!("dangling node handle {:?}", handle),
        }
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match self.slots.get_mut(handle.slot()) {
            Some(Some(node)) => node,
            _ => panic!("dangling node handle {:?}", handle),
        }
    }

    /// Moves the node out and vacates its slot. `handle` is dangling
    /// afterwards until the slot is handed out again.
    pub(crate) fn remove(&mut self, handle: Handle) -> T {
        match self.slots.get_mut(handle.slot()).and_then(Option::take) {
            Some(node) => {
                self.vacant.push(handle);
                node
            }
            None => panic!("dangling node handle {:?}", handle),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_handle_costs_nothing() {
        assert_eq!(
            std::mem::size_of::<Handle>(),
            std::mem::size_of::<Option<Handle>>()
        );
    }

    #[test]
    fn handle_addresses_every_u32_slot() {
        for slot in [0, 1, 41, u32::MAX as usize - 1] {
            assert_eq!(Handle::new(slot).map(Handle::slot), Some(slot));
        }
        assert_eq!(Handle::new(u32::MAX as usize), None);
        assert_eq!(Handle::new(usize::MAX), None);
    }

    #[test]
    fn handle_debug_shows_slot() {
        assert_eq!(format!("{:?}", Handle::new(7).unwrap()), "#7");
    }

    #[test]
    fn vacated_slot_is_handed_out_next() {
        let mut arena = Arena::new();
        let cat = arena.insert("cat");
        let dog = arena.insert("dog");
        assert_eq!(arena.len(), 2);

        assert_eq!(arena.remove(cat), "cat");
        assert_eq!(arena.len(), 1);

        let eel = arena.insert("eel");
        assert_eq!(eel, cat);
        assert_eq!(*arena.get(eel), "eel");
        assert_eq!(*arena.get(dog), "dog");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut arena = Arena::new();
        let handle = arena.insert(1);
        *arena.get_mut(handle) += 41;
        assert_eq!(*arena.get(handle), 42);
    }

    #[test]
    #[should_panic(expected = "dangling node handle #0")]
    fn removed_handle_dangles() {
        let mut arena = Arena::new();
        let handle = arena.insert(1);
        arena.remove(handle);
        arena.get(handle);
    }

    #[test]
    #[should_panic(expected = "dangling node handle #0")]
    fn double_remove_panics() {
        let mut arena = Arena::new();
        let handle = arena.insert(1);
        arena.remove(handle);
        arena.remove(handle);
    }

    #[test]
    fn clear_forgets_vacant_slots() {
        let mut arena = Arena::new();
        let first = arena.insert(1);
        arena.insert(2);
        arena.remove(first);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.insert(3).slot(), 0);
        assert_eq!(arena.len(), 1);
    }
}
