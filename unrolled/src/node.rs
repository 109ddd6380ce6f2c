//! Entry-holding chain nodes.

use crate::iter::ChainIter;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A handle to one node of a chain.
///
/// A node holds an ordered run of entries and an optional link to a
/// successor node. Handles are cheap to clone and share the node they
/// point to; a node is freed once no handle and no iterator refers to it
/// any more.
///
/// The successor link may be rewired at any time via [`Node::set_next`]
/// or [`Node::append`]. Chains must stay acyclic: linking a node back
/// into its own chain makes [`Node::last`], [`Node::append`], and
/// iteration loop forever.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node<T>(Rc<Record<T>>);

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Record<T> {
    entries: Vec<T>,
    next: RefCell<Option<Node<T>>>,
}

impl<T> Node<T> {
    /// Create a node from a sequence of entries.
    pub fn new(entries: impl IntoIterator<Item = T>) -> Self {
        Self(Rc::new(Record {
            entries: entries.into_iter().collect(),
            next: RefCell::new(None),
        }))
    }

    /// Create a node holding exactly one entry.
    ///
    /// This is the constructor for a bare value: `Node::once(s)` of a
    /// string holds one entry, whereas `Node::new(s.chars())` holds one
    /// entry per character.
    pub fn once(entry: T) -> Self {
        Self::new(core::iter::once(entry))
    }

    /// Create a node with no entries.
    ///
    /// Such a node yields nothing itself; iteration passes through it
    /// into its successors.
    pub fn empty() -> Self {
        Self::new(core::iter::empty())
    }

    /// The entries stored in this node.
    pub fn entries(&self) -> &[T] {
        &self.0.entries
    }

    /// A handle to the successor of this node, if any.
    pub fn next(&self) -> Option<Self> {
        self.0.next.borrow().clone()
    }

    /// Replace the successor link of this node.
    ///
    /// Iterators that have not yet moved past this node observe the new
    /// link; iterators already beyond it are unaffected.
    pub fn set_next(&self, next: Option<Self>) {
        *self.0.next.borrow_mut() = next;
    }

    /// The last node of the chain starting at this node.
    pub fn last(&self) -> Self {
        let mut cur = self.clone();
        while let Some(next) = cur.next() {
            cur = next;
        }
        cur
    }

    /// Link the given node after the last node of this chain.
    ///
    /// Takes time proportional to the chain length; links before the
    /// tail are left untouched.
    pub fn append(&self, node: Self) {
        self.last().set_next(Some(node));
    }

    /// Return a fresh iterator over all entries reachable from this node.
    ///
    /// Every call returns an independent cursor positioned at this
    /// node's first entry.
    pub fn iter(&self) -> ChainIter<T> {
        ChainIter::new(self.clone())
    }

    /// True if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Node")
            .field("entries", &self.0.entries)
            .field("next", &self.0.next.borrow())
            .finish()
    }
}

#[test]
fn test() {
    let head = Node::new([1, 2]);
    assert_eq!(head.entries(), [1, 2]);
    assert!(head.next().is_none());

    let mid = Node::once(3);
    let tail = Node::empty();
    head.set_next(Some(mid.clone()));
    head.append(tail.clone());

    assert!(head.next().map_or(false, |n| n.ptr_eq(&mid)));
    assert!(mid.next().map_or(false, |n| n.ptr_eq(&tail)));
    assert!(head.last().ptr_eq(&tail));
    assert!(!head.ptr_eq(&mid));
}
