//! Pipelines over a flat user record
//!
//! Plain transformations use iterators directly; every aggregation is
//! expressed as a reducer so it behaves the same when sharded.

use crate::error::Result;
use rand::Rng;
use std::collections::BTreeMap;
use tally_core::reduce_all;
use tally_core::reducers::{
    Counting, Distinct, Filtering, GroupingBy, Joining, Mapping, MaxBy, Partitioned,
    PartitioningBy, Summarizing, Summing, SummaryStatistics, ToVec,
};
use tally_core::Maybe;

/// A person record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Full name
    pub name: String,
    /// Age in years
    pub age: i32,
    /// Gender flag
    pub male: bool,
}

impl User {
    /// Create a user
    pub fn new(name: impl Into<String>, age: i32, male: bool) -> Self {
        Self {
            name: name.into(),
            age,
            male,
        }
    }
}

/// Integer square root of every number, truncated toward zero.
/// Negative inputs map to `0`.
pub fn square_roots(numbers: &[i32]) -> Vec<i32> {
    numbers
        .iter()
        .map(|&n| f64::from(n).sqrt() as i32)
        .collect()
}

/// Ages of all users, in input order
pub fn ages(users: &[User]) -> Vec<i32> {
    users.iter().map(|u| u.age).collect()
}

/// Ages with duplicates removed, first occurrence wins
pub fn distinct_ages(users: &[User]) -> Result<Vec<i32>> {
    Ok(reduce_all(&Distinct, users.iter().map(|u| u.age))?)
}

/// At most the first `limit` users
pub fn limit(users: &[User], limit: usize) -> Vec<User> {
    users.iter().take(limit).cloned().collect()
}

/// Number of users strictly older than 25
pub fn count_older_than_25(users: &[User]) -> Result<u64> {
    let reducer = Filtering::new(|u: &&User| u.age > 25, Counting);
    Ok(reduce_all(&reducer, users)?)
}

/// Upper-case every string
pub fn to_upper_case(strings: &[String]) -> Vec<String> {
    strings.iter().map(|s| s.to_uppercase()).collect()
}

/// Sum of all integers
pub fn sum(integers: &[i32]) -> Result<i64> {
    Ok(reduce_all(&Summing, integers.iter().copied())?)
}

/// Everything after the first `count` integers
pub fn skip(integers: &[i32], count: usize) -> Vec<i32> {
    integers.iter().skip(count).copied().collect()
}

/// The part of each name before the first space
pub fn first_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.split(' ').next().unwrap_or_default().to_string())
        .collect()
}

/// Every distinct character across all names, in first-seen order
pub fn distinct_letters(names: &[String]) -> Result<Vec<char>> {
    Ok(reduce_all(&Distinct, names.iter().flat_map(|n| n.chars()))?)
}

/// User names separated by `", "`
pub fn names_joined(users: &[User]) -> Result<String> {
    let reducer = Mapping::new(|u: &User| u.name.clone(), Joining::new(", "));
    Ok(reduce_all(&reducer, users)?)
}

/// Count, sum, minimum, maximum and average of the ages
pub fn age_statistics(users: &[User]) -> Result<SummaryStatistics> {
    Ok(reduce_all(&Summarizing::new(), users.iter().map(|u| u.age))?)
}

/// Mean age, or `-1.0` when there are no users
pub fn average_age(users: &[User]) -> Result<f64> {
    Ok(age_statistics(users)?.average().value_or(-1.0))
}

/// Highest age, or `-1` when there are no users
pub fn max_age(users: &[User]) -> Result<i32> {
    Ok(age_extreme(age_statistics(users)?.max()))
}

/// Lowest age, or `-1` when there are no users
pub fn min_age(users: &[User]) -> Result<i32> {
    Ok(age_extreme(age_statistics(users)?.min()))
}

fn age_extreme(value: Maybe<i64>) -> i32 {
    value
        .chain(|v| Maybe::from_option(i32::try_from(v).ok()))
        .value_or(-1)
}

/// Sum of all ages
pub fn sum_of_ages(users: &[User]) -> Result<i64> {
    Ok(reduce_all(&Summing, users.iter().map(|u| u.age))?)
}

/// Split users into men (`accepted`) and women (`rejected`)
pub fn partition_by_gender(users: &[User]) -> Result<Partitioned<Vec<&User>>> {
    let reducer = PartitioningBy::new(|u: &&User| u.male, ToVec);
    Ok(reduce_all(&reducer, users)?)
}

/// Users grouped by age, keys ascending
pub fn group_by_age(users: &[User]) -> Result<BTreeMap<i32, Vec<&User>>> {
    let reducer = GroupingBy::new(|u: &&User| u.age, ToVec);
    Ok(reduce_all(&reducer, users)?)
}

/// Users grouped by gender, then by age
pub fn group_by_gender_and_age(
    users: &[User],
) -> Result<BTreeMap<bool, BTreeMap<i32, Vec<&User>>>> {
    let reducer = GroupingBy::new(
        |u: &&User| u.male,
        GroupingBy::new(|u: &&User| u.age, ToVec),
    );
    Ok(reduce_all(&reducer, users)?)
}

/// Number of users per gender
pub fn count_by_gender(users: &[User]) -> Result<BTreeMap<bool, u64>> {
    let reducer = GroupingBy::new(|u: &&User| u.male, Counting);
    Ok(reduce_all(&reducer, users)?)
}

/// True if any user has exactly `age`
pub fn any_match_age(users: &[User], age: i32) -> bool {
    users.iter().any(|u| u.age == age)
}

/// True if no user has exactly `age`
pub fn none_match_age(users: &[User], age: i32) -> bool {
    !any_match_age(users, age)
}

/// First user called `name`
pub fn find_by_name(users: &[User], name: &str) -> Maybe<User> {
    users.iter().find(|u| u.name == name).cloned().into()
}

/// Users sorted by ascending age; equal ages keep their input order
pub fn sort_by_age(mut users: Vec<User>) -> Vec<User> {
    users.sort_by_key(|u| u.age);
    users
}

/// The oldest user; the first one wins on ties
pub fn oldest(users: &[User]) -> Result<Maybe<&User>> {
    Ok(reduce_all(&MaxBy::new(|u: &&User| u.age), users)?)
}

/// Trial-division primality test
///
/// 0 and 1 are not prime, unlike a bare "no divisor in `2..=n/2`" check
/// which would accept them.
pub fn is_prime(number: u64) -> bool {
    if number < 2 {
        return false;
    }
    (2..=number / 2).all(|d| number % d != 0)
}

/// The first `count` prime numbers, ascending
pub fn first_primes(count: usize) -> Vec<u64> {
    (2..).filter(|&n| is_prime(n)).take(count).collect()
}

/// `count` random integers from the thread-local generator
pub fn random_numbers(count: usize) -> Vec<i32> {
    random_numbers_with(&mut rand::thread_rng(), count)
}

/// `count` random integers drawn from `rng`
pub fn random_numbers_with<G: Rng>(rng: &mut G, count: usize) -> Vec<i32> {
    (0..count).map(|_| rng.gen()).collect()
}
