//! Property tests for the reducer contract

use proptest::prelude::*;
use tally_core::reducers::{CharToString, Counting, Distinct, GroupingBy, Joining, ToVec};
use tally_core::{reduce_all, tree_merge, Reduction, SequenceReducer};

/// Reduce `elements` as contiguous shards of `shard_len`, merged pairwise.
fn reduce_sharded<T, R>(reducer: &R, elements: Vec<T>, shard_len: usize) -> R::Output
where
    T: Clone,
    R: SequenceReducer<T>,
{
    let shards: Vec<_> = elements
        .chunks(shard_len.max(1))
        .enumerate()
        .map(|(i, shard)| {
            Reduction::starting_at(reducer, i * shard_len.max(1))
                .extend(shard.to_vec())
                .unwrap()
        })
        .collect();

    match tree_merge(shards, |left, right| left.merge(right)) {
        Some(merged) => merged.finish().unwrap(),
        None => Reduction::new(reducer).finish().unwrap(),
    }
}

#[test]
fn test_empty_sequence_is_identity() {
    assert_eq!(reduce_all(&CharToString, Vec::<char>::new()).unwrap(), "");
}

#[test]
fn test_hello_sequential_and_sharded() {
    let chars = vec!['H', 'e', 'l', 'l', 'o'];
    assert_eq!(reduce_all(&CharToString, chars.clone()).unwrap(), "Hello");

    let left = Reduction::new(&CharToString).extend(vec!['H', 'e']).unwrap();
    let right = Reduction::starting_at(&CharToString, 2)
        .extend(vec!['l', 'l', 'o'])
        .unwrap();
    assert_eq!(left.merge(right).finish().unwrap(), "Hello");
}

#[test]
fn test_every_split_point() {
    let text: Vec<char> = "abcdefg".chars().collect();
    let expected = reduce_all(&CharToString, text.clone()).unwrap();

    for k in 0..=text.len() {
        let left = Reduction::new(&CharToString)
            .extend(text[..k].to_vec())
            .unwrap();
        let right = Reduction::starting_at(&CharToString, k)
            .extend(text[k..].to_vec())
            .unwrap();
        assert_eq!(left.merge(right).finish().unwrap(), expected, "split at {k}");
    }
}

#[test]
fn test_concurrent_reductions_are_isolated() {
    let reducer = CharToString;
    let handles: Vec<_> = ["first", "second", "third"]
        .into_iter()
        .map(|word| {
            std::thread::spawn(move || reduce_all(&reducer, word.chars()).unwrap())
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["first", "second", "third"]);
}

proptest! {
    #[test]
    fn prop_merge_matches_sequential(text in ".{0,64}", split in 0usize..64) {
        let chars: Vec<char> = text.chars().collect();
        let k = split.min(chars.len());

        let left = Reduction::new(&CharToString).extend(chars[..k].to_vec()).unwrap();
        let right = Reduction::starting_at(&CharToString, k).extend(chars[k..].to_vec()).unwrap();

        prop_assert_eq!(left.merge(right).finish().unwrap(), text);
    }

    #[test]
    fn prop_merge_is_associative(
        a in prop::collection::vec(any::<u8>(), 0..16),
        b in prop::collection::vec(any::<u8>(), 0..16),
        c in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let reducer = ToVec;
        let part = |items: &Vec<u8>| Reduction::new(&reducer).extend(items.clone()).unwrap();

        let left_first = part(&a).merge(part(&b)).merge(part(&c)).finish().unwrap();
        let right_first = part(&a).merge(part(&b).merge(part(&c))).finish().unwrap();

        prop_assert_eq!(left_first, right_first);
    }

    #[test]
    fn prop_no_element_lost_or_duplicated(
        items in prop::collection::vec(any::<i32>(), 0..200),
        shard_len in 1usize..32,
    ) {
        let collected = reduce_sharded(&ToVec, items.clone(), shard_len);
        prop_assert_eq!(&collected, &items);

        let counted = reduce_sharded(&Counting, items.clone(), shard_len);
        prop_assert_eq!(counted, items.len() as u64);

        let reduction = Reduction::new(&Counting).extend(items.clone()).unwrap();
        prop_assert_eq!(reduction.consumed(), items.len());
    }

    #[test]
    fn prop_sharded_reducers_agree_with_sequential(
        words in prop::collection::vec("[a-z]{0,4}", 0..40),
        shard_len in 1usize..8,
    ) {
        let joining = Joining::with_affixes(",", "[", "]");
        prop_assert_eq!(
            reduce_sharded(&joining, words.clone(), shard_len),
            reduce_all(&joining, words.clone()).unwrap()
        );

        prop_assert_eq!(
            reduce_sharded(&Distinct, words.clone(), shard_len),
            reduce_all(&Distinct, words.clone()).unwrap()
        );

        let grouping = GroupingBy::new(|w: &String| w.len(), ToVec);
        prop_assert_eq!(
            reduce_sharded(&grouping, words.clone(), shard_len),
            reduce_all(&grouping, words).unwrap()
        );
    }
}
