//! Chains serialize as nested records of entries and successor.
#![cfg(feature = "serde")]

use serde_json::json;
use unrolled::Node;

#[test]
fn chain_round_trips_as_nested_records() {
    let head = Node::new(["a", "b"]);
    head.append(Node::once("c"));

    let value = serde_json::to_value(&head).unwrap();
    assert_eq!(
        value,
        json!({
            "entries": ["a", "b"],
            "next": { "entries": ["c"], "next": null }
        })
    );

    // deserialization rebuilds the chain without sharing
    let rebuilt: Node<String> = serde_json::from_value(value).unwrap();
    itertools::assert_equal(rebuilt.iter(), ["a", "b", "c"].map(String::from));
}
