//! The chain iterator as an explicit cursor object.
//!
//! Run with:
//!
//!     LOG=debug cargo run --example cursor

use unrolled::{ChainIter, Node};

fn main() {
    use env_logger::Env;
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "info")).init();

    let head = Node::new(["first", "second"]);
    head.append(Node::once("third"));
    head.append(Node::new(["fourth", "fifth"]));
    println!("chain: {:?}", head.iter().collect::<Vec<_>>());

    println!("1. every call to iter() makes a fresh cursor:");
    let mut one: ChainIter<&str> = head.iter();
    let mut two = head.iter();
    println!("   one.next() = {:?}", one.next());
    println!("   one.next() = {:?}", one.next());
    println!("   two.next() = {:?}", two.next());
    println!("   one.next() = {:?}", one.next());

    println!("2. a cursor is itself iterable and resumes where it stopped:");
    let mut cursor = head.iter();
    cursor.next();
    for entry in cursor {
        println!("   {entry}");
    }

    println!("3. exhaustion is permanent:");
    let mut cursor = Node::once("only").iter();
    println!("   next() = {:?}", cursor.next());
    println!("   next() = {:?}", cursor.next());
    println!("   next() = {:?}", cursor.next());

    println!("4. cursors read links live:");
    let chain = Node::once(1);
    let mut cursor = chain.iter();
    println!("   next() = {:?}", cursor.next());
    log::debug!("cursor drained the head, extending the chain");
    chain.append(Node::new([2, 3]));
    println!("   after append: {:?}", cursor.collect::<Vec<_>>());

    println!("5. forked cursors advance independently:");
    let mut cursor = head.iter();
    cursor.next();
    let fork = cursor.clone();
    println!("   original: {:?}", cursor.collect::<Vec<_>>());
    println!("   fork:     {:?}", fork.collect::<Vec<_>>());
}
