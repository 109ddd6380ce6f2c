//! Walkthrough of chain construction and flattening iteration.
//!
//! Run with:
//!
//!     LOG=debug cargo run --example chain

use unrolled::Node;

fn main() {
    use env_logger::Env;
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "info")).init();

    println!("1. nodes with different entry runs:");
    let fruit1 = Node::new(["apple", "banana"]);
    let fruit2 = Node::once("cherry");
    let fruit3 = Node::new(["date", "elderberry", "fig"]);
    println!("   fruit1: {:?}", fruit1.entries());
    println!("   fruit2: {:?}", fruit2.entries());
    println!("   fruit3: {:?}", fruit3.entries());

    println!("2. linking the nodes:");
    fruit1.set_next(Some(fruit2.clone()));
    fruit2.set_next(Some(fruit3.clone()));
    println!("   fruit1 -> fruit2 -> fruit3");
    log::debug!("chain now ends at {:?}", fruit1.last().entries());

    println!("3. for-loop over the chain:");
    for entry in &fruit1 {
        println!("   {entry}");
    }

    println!("4. collecting the whole chain:");
    let all: Vec<_> = fruit1.iter().collect();
    println!("   {all:?}");

    println!("5. traversal is repeatable:");
    println!("   first pass:  {:?}", fruit1.iter().collect::<Vec<_>>());
    println!("   second pass: {:?}", fruit1.iter().collect::<Vec<_>>());

    println!("6. driving an iterator by hand:");
    let mut entries = fruit1.iter();
    println!("   next() = {:?}", entries.next());
    println!("   next() = {:?}", entries.next());
    println!("   remaining: {:?}", entries.collect::<Vec<_>>());

    println!("7. numeric chains:");
    let nums = Node::new([1, 2, 3]);
    nums.append(Node::once(4));
    println!("   entries: {:?}", nums.iter().collect::<Vec<_>>());
    println!("   sum: {}", nums.iter().sum::<i32>());
    println!("   max: {:?}", nums.iter().max());

    println!("8. a lonely node:");
    let lonely = Node::once("lonely");
    println!("   {:?}", lonely.iter().collect::<Vec<_>>());
}
