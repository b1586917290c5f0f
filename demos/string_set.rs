//! A sorted set of strings, with ranked lookups and early-stopping visits.

use ranked_skiplist::RankedSkipList;

fn main() {
    let languages = [
        "Go",
        "Python",
        "JavaScript",
        "Rust",
        "Java",
        "C++",
        "TypeScript",
        "Ruby",
        "Swift",
        "Kotlin",
    ];
    let mut sl: RankedSkipList<String> = languages.iter().map(ToString::to_string).collect();
    println!("Total languages: {}\n", sl.len());

    println!("Alphabetical order:");
    sl.for_each_while(|lang| {
        println!("  - {lang}");
        true
    });

    println!("\nSearching:");
    for term in ["Go", "Python", "Haskell", "Rust"] {
        match sl.rank(&term.to_owned()) {
            Some(rank) => println!("  found {term} at rank {rank}"),
            None => println!("  {term} not found"),
        }
    }

    println!("\nFirst three by rank:");
    for rank in 1..=3 {
        if let Some(lang) = sl.get_by_rank(rank) {
            println!("  {rank}: {lang}");
        }
    }

    println!("\nRemoving JavaScript and Java...");
    sl.remove(&"JavaScript".to_owned());
    sl.remove(&"Java".to_owned());
    println!("Remaining languages: {}", sl.len());

    println!("\nFirst five after removal:");
    let mut count = 0;
    sl.for_each_while(|lang| {
        count += 1;
        println!("  {count}. {lang}");
        count < 5
    });
}
