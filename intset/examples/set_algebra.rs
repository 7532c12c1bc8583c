//! Walk through insertion, removal and the four set-algebra operators

use intset::{IntSet, IntSetError, WordStorage};
use std::time::Instant;

fn main() -> intset::Result<()> {
    env_logger::init();

    println!("Building a set from [1, 9, 144]...");
    let mut set = IntSet::new();
    set.add_all([1, 9, 144])?;
    println!("   {set} (len {}, {} words)", set.len(), set.word_len());

    set.add(9)?;
    println!("Added 9 again: {set} (len {})", set.len());

    set.remove(9)?;
    println!("Removed 9: {set}");

    set.clear();
    println!("Cleared: {set} (len {}, {} words kept)", set.len(), set.word_len());

    // Errors are reported, never swallowed
    match set.add(-3) {
        Err(IntSetError::OutOfDomain) => println!("add(-3) rejected: {}", IntSetError::OutOfDomain),
        other => println!("unexpected result for add(-3): {other:?}"),
    }
    match set.remove(10_000) {
        Err(err) => println!("remove(10000) rejected: {err}"),
        Ok(()) => println!("remove(10000) unexpectedly succeeded"),
    }

    let a: IntSet = "{1 5 9}".parse()?;
    let b: IntSet = "{5 9 10}".parse()?;
    println!("\nA = {a}, B = {b}");

    let mut union = a.copy()?;
    union.union_with(&b)?;
    println!("   A ∪ B = {union}");

    let mut intersection = a.copy()?;
    intersection.intersect_with(&b);
    println!("   A ∩ B = {intersection}");

    let mut difference = a.copy()?;
    difference.difference_with(&b);
    println!("   A \\ B = {difference}");

    let mut symmetric = a.copy()?;
    symmetric.symmetric_difference_with(&b)?;
    println!("   A △ B = {symmetric}");

    println!("\nFilling every third integer below 1,000,000...");
    let start = Instant::now();
    let mut large = IntSet::new();
    large.add_all((0..1_000_000).step_by(3))?;
    println!(
        "   {} members in {} words ({} bytes), built in {:.3}ms",
        large.len(),
        large.word_len(),
        large.as_bytes().len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
