//! Record a set as a JSON snapshot and compare it against later states

use intset::{IntSet, SetSnapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut set = IntSet::from_elements([144, 9, 1])?;
    let snapshot = SetSnapshot::capture(&set);
    let json = snapshot.to_json()?;
    println!("Snapshot of {set}:\n{json}");

    let restored = SetSnapshot::from_json(&json)?;
    println!("\nRestored set: {}", restored.to_set()?);
    println!("Matches live set: {}", restored.matches(&set));

    set.add(10)?;
    println!("After add(10): {set}, matches snapshot: {}", restored.matches(&set));

    Ok(())
}
