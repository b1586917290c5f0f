//! Ordering records by several fields with a custom comparator.

use std::{cmp::Ordering, fmt};

use ranked_skiplist::RankedSkipList;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Person {
    name: &'static str,
    age: u32,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

/// Youngest first, then alphabetically.
fn by_age_then_name(a: &Person, b: &Person) -> Ordering {
    a.age.cmp(&b.age).then_with(|| a.name.cmp(b.name))
}

fn main() {
    let mut sl = RankedSkipList::with_comparator(by_age_then_name);

    let people = [
        Person { name: "Alice", age: 30 },
        Person { name: "Bob", age: 25 },
        Person { name: "Charlie", age: 35 },
        Person { name: "David", age: 25 },
        Person { name: "Eve", age: 30 },
    ];

    println!("Adding people:");
    for person in people {
        println!("  {person}");
        sl.insert(person);
    }

    println!("\nBy age, then name:");
    for (rank, person) in sl.iter().enumerate() {
        println!("  {}. {person}", rank + 1);
    }

    let bob = Person { name: "Bob", age: 25 };
    if sl.contains(&bob) {
        println!("\nFound {bob}");
    }

    if let (Some(youngest), Some(oldest)) = (sl.first(), sl.last()) {
        println!("\nYoungest: {youngest}");
        println!("Oldest: {oldest}");
    }

    // Everyone aged 30 or over, starting from the youngest of them.
    let threshold = Person { name: "", age: 30 };
    if let Some(rank) = sl.lower_bound(&threshold).and_then(|p| sl.rank(p)) {
        println!("\n{} people are 30 or over", sl.len() - rank + 1);
    }

    sl.remove(&Person { name: "Charlie", age: 35 });
    println!("\nAfter removing Charlie: {} people", sl.len());
}
