#[macro_use]
extern crate criterion;

mod ranked_skiplist;

criterion_group!(
    benches,
    crate::ranked_skiplist::insert,
    crate::ranked_skiplist::remove,
    crate::ranked_skiplist::rank,
    crate::ranked_skiplist::get_by_rank,
    crate::ranked_skiplist::lower_bound,
    crate::ranked_skiplist::iter,
    crate::btreeset::insert,
    crate::btreeset::remove,
    crate::btreeset::rank,
    crate::btreeset::get_by_rank,
    crate::btreeset::lower_bound,
    crate::btreeset::iter,
);
criterion_main!(benches);
