//! Singly linked chains of entry-holding nodes.
//!
//! A [`Node`] stores an ordered run of entries together with an optional
//! link to a successor node, forming a chain. A [`ChainIter`] flattens a
//! chain into one linear sequence: it yields the entries of each node in
//! order before following the link to the next node.
//!
//! ~~~
//! use unrolled::Node;
//!
//! let head = Node::new(["a", "b"]);
//! head.append(Node::new(["c", "d"]));
//! head.append(Node::once("e"));
//!
//! let entries: Vec<_> = head.iter().collect();
//! assert_eq!(entries, ["a", "b", "c", "d", "e"]);
//!
//! // every iterator is an independent cursor over the live structure
//! let mut cursor = head.iter();
//! assert_eq!(cursor.next(), Some("a"));
//! assert_eq!(head.iter().count(), 5);
//! assert_eq!(cursor.next(), Some("b"));
//! ~~~
//!
//! Chains must be acyclic; see [`Node`] for the caller contract.
#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

mod iter;
mod node;

pub use iter::ChainIter;
pub use node::Node;
