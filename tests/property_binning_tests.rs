use minitools::core::{bin_dataset, compute_interval_bins};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_value_lands_in_exactly_one_bin(
        values in prop::collection::vec(-500.0f64..500.0, 1..200),
        interval_width in 0.5f64..120.0
    ) {
        let bins = bin_dataset(&values, interval_width);

        prop_assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), values.len());
        for value in &values {
            let owners = bins.iter().filter(|bin| bin.contains(*value)).count();
            prop_assert_eq!(owners, 1);
        }
    }

    #[test]
    fn bins_are_contiguous_and_cover_domain(
        domain_min in -1_000.0f64..1_000.0,
        domain_span in 0.0f64..1_000.0,
        interval_width in 0.25f64..250.0
    ) {
        let domain_max = domain_min + domain_span;
        let bins = compute_interval_bins(&[domain_min], interval_width, domain_min, domain_max);

        prop_assert!(!bins.is_empty());
        let first = bins[0];
        let last = bins[bins.len() - 1];
        prop_assert!(first.value_min <= domain_min);
        prop_assert!(last.value_max > domain_max);
        prop_assert!(bins.windows(2).all(|pair| pair[0].value_max == pair[1].value_min));
    }
}
