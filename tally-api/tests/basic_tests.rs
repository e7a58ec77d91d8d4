//! Basic tests for tally-api

use tally_api::calendar;
use tally_api::callbacks::{self, RecordingTask, TransactionState};
use tally_api::records::{self, User};
use tally_api::reducers::{CharToString, Joining, Summing, TryMapping};
use tally_api::shapes::{self, Point, Positioned, Rectangle, ShapeError};
use tally_api::*;

fn users() -> Vec<User> {
    vec![
        User::new("Ada Lovelace", 36, false),
        User::new("Alan Turing", 41, true),
        User::new("Grace Hopper", 36, false),
        User::new("Edsger Dijkstra", 72, true),
        User::new("Barbara Liskov", 24, false),
    ]
}

#[test]
fn test_collect_hello() {
    assert_eq!(collect(&CharToString, "Hello".chars()).unwrap(), "Hello");
    assert_eq!(chars_to_string(Vec::new()).unwrap(), "");
}

#[test]
fn test_collector_modes_agree() {
    let collector = Config::builder()
        .shard_size(2)
        .build_collector()
        .unwrap();
    let words = ["alpha", "beta", "gamma", "delta", "epsilon"];
    let reducer = Joining::with_affixes(" | ", "<", ">");

    let sequential = collector
        .collect_with_mode(&reducer, words, ExecutionMode::Sequential)
        .unwrap();
    let parallel = collector
        .collect_with_mode(&reducer, words, ExecutionMode::Parallel)
        .unwrap();

    assert_eq!(sequential, "<alpha | beta | gamma | delta | epsilon>");
    assert_eq!(sequential, parallel);
}

#[test]
fn test_collect_with_metadata() {
    let collector = Collector::with_config(Config::sequential()).unwrap();
    let collected = collector
        .collect_with_metadata(&Summing, 1..=10i64)
        .unwrap();

    assert_eq!(collected.value, 55);
    assert_eq!(collected.metadata.elements_processed, 10);
    assert_eq!(collected.metadata.mode_used, "sequential");
    assert_eq!(collected.metadata.thread_count, 1);
}

#[test]
fn test_element_error_surfaces() {
    let reducer = TryMapping::new(|s: &str| s.parse::<i64>(), Summing);
    let err = collect(&reducer, ["4", "2", "x"]).unwrap_err();

    assert!(err.as_core().is_some_and(|e| e.is_element_error()));
    assert!(err.to_string().starts_with("engine error"));
}

#[test]
fn test_user_pipelines() {
    let users = users();

    assert_eq!(records::ages(&users), vec![36, 41, 36, 72, 24]);
    assert_eq!(records::distinct_ages(&users).unwrap(), vec![36, 41, 72, 24]);
    assert_eq!(records::count_older_than_25(&users).unwrap(), 4);
    assert_eq!(records::limit(&users, 2).len(), 2);
    assert_eq!(records::sum_of_ages(&users).unwrap(), 209);
    assert_eq!(records::max_age(&users).unwrap(), 72);
    assert_eq!(records::min_age(&users).unwrap(), 24);
    assert!((records::average_age(&users).unwrap() - 41.8).abs() < 1e-9);
    assert_eq!(
        records::names_joined(&users[..2]).unwrap(),
        "Ada Lovelace, Alan Turing"
    );
}

#[test]
fn test_user_groupings() {
    let users = users();

    let partition = records::partition_by_gender(&users).unwrap();
    assert_eq!(partition.get(true).len(), 2);
    assert_eq!(partition.rejected.len(), 3);

    let by_age = records::group_by_age(&users).unwrap();
    assert_eq!(by_age.keys().copied().collect::<Vec<_>>(), vec![24, 36, 41, 72]);
    let thirty_six: Vec<&str> = by_age[&36].iter().map(|u| u.name.as_str()).collect();
    assert_eq!(thirty_six, vec!["Ada Lovelace", "Grace Hopper"]);

    let nested = records::group_by_gender_and_age(&users).unwrap();
    assert_eq!(nested[&false][&36].len(), 2);
    assert_eq!(nested[&true].len(), 2);

    let counts = records::count_by_gender(&users).unwrap();
    assert_eq!(counts[&true], 2);
    assert_eq!(counts[&false], 3);
}

#[test]
fn test_user_lookups() {
    let users = users();

    assert!(records::any_match_age(&users, 41));
    assert!(records::none_match_age(&users, 99));

    let grace = records::find_by_name(&users, "Grace Hopper");
    assert_eq!(grace.map(|u| u.age).value_or(0), 36);
    assert!(records::find_by_name(&users, "Nobody").is_absent());

    let oldest = records::oldest(&users).unwrap().value().unwrap();
    assert_eq!(oldest.name, "Edsger Dijkstra");

    let sorted = records::sort_by_age(users);
    let names: Vec<&str> = sorted.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Barbara Liskov",
            "Ada Lovelace",
            "Grace Hopper",
            "Alan Turing",
            "Edsger Dijkstra"
        ]
    );
}

#[test]
fn test_age_statistics() {
    let stats = records::age_statistics(&users()).unwrap();
    assert_eq!(stats.count(), 5);
    assert_eq!(stats.sum(), 209);
    assert_eq!(stats.min().value_or(0), 24);
    assert_eq!(stats.max().value_or(0), 72);
}

#[test]
fn test_number_and_string_pipelines() {
    assert_eq!(records::sum(&[1, 2, 3, 4]).unwrap(), 10);
    assert_eq!(records::skip(&[1, 2, 3, 4], 3), vec![4]);
    assert_eq!(
        records::first_primes(10),
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
    );
    assert_eq!(records::random_numbers(10).len(), 10);

    let strings = vec!["abc".to_string(), "Def".to_string()];
    assert_eq!(records::to_upper_case(&strings), vec!["ABC", "DEF"]);

    let names = vec!["Bob".to_string(), "Bill".to_string()];
    assert_eq!(
        records::distinct_letters(&names).unwrap(),
        vec!['B', 'o', 'b', 'i', 'l']
    );
}

#[test]
fn test_callbacks() {
    let input = vec!["This", "is", "java", "8", "!!!"];
    let short = callbacks::filter(&input, |s| s.len() < 4);
    assert_eq!(short, vec!["is", "8", "!!!"]);

    let sorted = callbacks::sort_with(vec!["C", "F", "A", "D", "B", "E"], |a, b| a.cmp(b));
    assert_eq!(sorted, vec!["A", "B", "C", "D", "E", "F"]);

    assert_eq!(callbacks::create(|| "Hello".to_string()), "Hello");
    assert_eq!(callbacks::apply("This is great", str::len), 13);
    assert_eq!(callbacks::combine(5, 6, |a, b| a * b), 30);

    let mut task = RecordingTask::new();
    let transaction = callbacks::within_transaction(&mut task);
    assert!(task.is_consumed());
    assert_eq!(transaction.state(), TransactionState::Finished);
}

#[test]
fn test_shapes() {
    let mut rectangle = Rectangle::new(0, 0, 3, 4);
    let mut point = Point::default();
    shapes::move_to(&mut rectangle, 2, 2);
    shapes::shift_all_x([&mut rectangle as &mut dyn Positioned, &mut point], 10);

    assert_eq!(shapes::describe(&rectangle), "rectangle at (12, 2)");
    assert_eq!(point.x(), 10);
    assert_eq!(rectangle.area(), 12);

    let err: ApiError = shapes::unsupported_operation(&point).unwrap_err().into();
    assert!(matches!(err, ApiError::Shape(ShapeError::Unsupported { .. })));
}

#[test]
fn test_calendar() {
    let from = calendar::date(2017, 1, 1).unwrap();
    let friday = calendar::next_friday_13th(from).unwrap();
    assert_eq!(calendar::format_iso_date(friday), "2017-01-13");

    let eve = calendar::parse_iso_date("2017-12-31").unwrap();
    assert_eq!(
        calendar::format_iso_date(calendar::with_year(eve, 2018).unwrap()),
        "2018-12-31"
    );

    let err: ApiError = calendar::parse_iso_time("2017-12-31").unwrap_err().into();
    assert!(matches!(err, ApiError::Calendar(_)));

    let weekday = calendar::parse_weekday("friday").unwrap();
    assert_eq!(
        calendar::next_weekday(friday, weekday).unwrap(),
        calendar::date(2017, 1, 20).unwrap()
    );
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sort_by_age_is_stable(ages in prop::collection::vec(0i32..10, 0..40)) {
            let users: Vec<User> = ages
                .iter()
                .enumerate()
                .map(|(i, age)| User::new(format!("u{i}"), *age, i % 2 == 0))
                .collect();

            let sorted = records::sort_by_age(users.clone());
            prop_assert_eq!(sorted.len(), users.len());
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].age <= pair[1].age);
                if pair[0].age == pair[1].age {
                    let index = |u: &User| u.name[1..].parse::<usize>().unwrap();
                    prop_assert!(index(&pair[0]) < index(&pair[1]));
                }
            }
        }

        #[test]
        fn collector_modes_agree(values in prop::collection::vec(any::<i32>(), 0..500)) {
            let collector = Config::builder().shard_size(7).build_collector().unwrap();
            let sequential = collector
                .collect_with_mode(&Summing, values.clone(), ExecutionMode::Sequential)
                .unwrap();
            let parallel = collector
                .collect_with_mode(&Summing, values.clone(), ExecutionMode::Parallel)
                .unwrap();

            prop_assert_eq!(sequential, parallel);
            prop_assert_eq!(sequential, values.iter().map(|v| i64::from(*v)).sum::<i64>());
        }
    }
}
