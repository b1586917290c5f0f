//! Inserting, looking up and removing integers, by value and by rank.

use ranked_skiplist::RankedSkipList;

fn main() {
    let mut sl = RankedSkipList::new();

    println!("Adding values: 10, 5, 20, 15, 30");
    sl.extend([10, 5, 20, 15, 30]);
    println!("Length: {}", sl.len());

    if let Some(v) = sl.get(&15) {
        println!("Found {v}, at rank {:?}", sl.rank(v));
    }

    if sl.contains(&25) {
        println!("25 is present");
    } else {
        println!("25 is absent; the next value up is {:?}", sl.lower_bound(&25));
    }

    println!("In order: {sl}");

    if let Some(v) = sl.get_by_rank(3) {
        println!("The 3rd value is {v}");
    }

    sl.remove(&15);
    println!("After removing 15: {sl} (length {})", sl.len());

    sl.clear();
    println!("After clearing: length {}, empty: {}", sl.len(), sl.is_empty());
}
