use approx::assert_relative_eq;
use minitools::core::presets::{ALWAYS_READY, TOUGH_CELL, battery_lifespans};
use minitools::core::stats::DEFAULT_EXTENT;
use minitools::core::{
    Dataset, Grouping, Observation, SortOrder, combined_extent, domain_guides,
    grouping_separators, observation_values, quartiles,
};
use proptest::prelude::*;

#[test]
fn sort_by_value_leaves_source_untouched() {
    let mut dataset = Dataset::from_values(&[30.0, 10.0, 20.0]);
    dataset.sort_by(SortOrder::ByValue);

    assert_eq!(dataset.values(), vec![10.0, 20.0, 30.0]);
    assert_eq!(observation_values(dataset.source()), vec![30.0, 10.0, 20.0]);
    assert_eq!(dataset.order(), SortOrder::ByValue);
}

#[test]
fn sort_by_label_is_stable_and_unlabeled_first() {
    let mut dataset = Dataset::new(vec![
        Observation::labeled(3.0, "b"),
        Observation::new(9.0),
        Observation::labeled(1.0, "a"),
        Observation::labeled(2.0, "b"),
    ]);
    dataset.sort_by(SortOrder::ByLabel);

    assert_eq!(dataset.values(), vec![9.0, 1.0, 3.0, 2.0]);
    assert_eq!(dataset.view()[0].label_or_empty(), "");
}

#[test]
fn reset_restores_loaded_order() {
    let mut dataset = Dataset::new(battery_lifespans());
    let loaded = dataset.values();

    dataset.sort_by(SortOrder::ByValue);
    dataset.sort_by(SortOrder::ByLabel);
    dataset.sort_by(SortOrder::ByValue);
    dataset.reset();

    assert_eq!(dataset.values(), loaded);
    assert_eq!(dataset.order(), SortOrder::Original);
}

#[test]
fn replace_swaps_source_and_resets_view() {
    let mut dataset = Dataset::from_values(&[3.0, 1.0]);
    dataset.sort_by(SortOrder::ByValue);
    dataset.replace(vec![Observation::new(7.0)]);

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.order(), SortOrder::Original);
    assert_eq!(dataset.values(), vec![7.0]);
}

#[test]
fn battery_presets_list_tough_cell_first() {
    let batteries = battery_lifespans();

    assert_eq!(batteries.len(), 20);
    assert!(batteries[..10].iter().all(|b| b.label.as_deref() == Some(TOUGH_CELL)));
    assert!(batteries[10..].iter().all(|b| b.label.as_deref() == Some(ALWAYS_READY)));
}

#[test]
fn quartiles_follow_index_rules_for_even_count() {
    let stats = quartiles(&[8.0, 1.0, 7.0, 2.0, 6.0, 3.0, 5.0, 4.0]);

    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.q1, 3.0);
    assert_relative_eq!(stats.median, 4.5);
    assert_eq!(stats.q3, 6.0);
    assert_eq!(stats.max, 8.0);
}

#[test]
fn quartiles_follow_index_rules_for_odd_count() {
    let stats = quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);

    assert_eq!((stats.q1, stats.median, stats.q3), (2.0, 4.0, 6.0));
}

#[test]
fn quartiles_of_empty_dataset_are_zero() {
    let stats = quartiles(&[]);

    assert_eq!(stats.median, 0.0);
    assert_eq!(stats.max, 0.0);
}

#[test]
fn grouping_separators_follow_grouping() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

    assert!(grouping_separators(&values, Grouping::None).is_empty());
    assert_eq!(
        grouping_separators(&values, Grouping::Median),
        vec![1.0, 4.0, 7.0]
    );
    assert_eq!(
        grouping_separators(&values, Grouping::Quartiles),
        vec![1.0, 2.0, 4.0, 6.0, 7.0]
    );
    assert!(grouping_separators(&[], Grouping::Median).is_empty());
}

#[test]
fn domain_guides_split_domain_evenly() {
    assert_eq!(
        domain_guides(0.0, 100.0, Grouping::Quartiles),
        vec![0.0, 25.0, 50.0, 75.0, 100.0]
    );
    assert_eq!(domain_guides(40.0, 60.0, Grouping::Median), vec![40.0, 50.0, 60.0]);
    assert!(domain_guides(10.0, 0.0, Grouping::Median).is_empty());
}

#[test]
fn combined_extent_spans_all_datasets() {
    let before = [48.0, 52.0, 63.8];
    let after = [45.5, 60.0];

    assert_eq!(combined_extent(&[&before[..], &after[..]]), (45.5, 63.8));
    assert_eq!(combined_extent::<Vec<f64>>(&[]), DEFAULT_EXTENT);
    assert_eq!(combined_extent(&[Vec::<f64>::new()]), DEFAULT_EXTENT);
}

proptest! {
    #[test]
    fn reset_is_idempotent_after_any_sort_sequence(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 0..60),
        orders in prop::collection::vec(
            prop_oneof![Just(SortOrder::ByValue), Just(SortOrder::ByLabel), Just(SortOrder::Original)],
            0..12
        )
    ) {
        let mut dataset = Dataset::from_values(&values);
        for order in orders {
            dataset.sort_by(order);
        }
        dataset.reset();
        dataset.reset();

        prop_assert_eq!(dataset.values(), values);
    }

    #[test]
    fn quartiles_are_ordered(values in prop::collection::vec(-500.0f64..500.0, 1..80)) {
        let stats = quartiles(&values);

        prop_assert!(stats.min <= stats.q1);
        prop_assert!(stats.q1 <= stats.median);
        prop_assert!(stats.median <= stats.q3);
        prop_assert!(stats.q3 <= stats.max);
    }
}
