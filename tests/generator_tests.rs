use minitools::ChartError;
use minitools::core::generate::MAX_BATTERY_LIFESPAN;
use minitools::core::presets::{ALWAYS_READY, TOUGH_CELL};
use minitools::core::primitives::round_to_places;
use minitools::core::{
    BatterySpec, UniformSpec, generate_battery_data, generate_cholesterol_data,
    generate_speed_trap_data,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn battery_spec() -> BatterySpec {
    BatterySpec {
        tough_cell_count: 6,
        always_ready_count: 4,
        min_lifespan: 40.0,
        max_lifespan: 130.0,
    }
}

#[test]
fn cholesterol_values_have_one_decimal_and_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let values = generate_cholesterol_data(UniformSpec::new(200, 45.0, 65.0), &mut rng)
        .expect("valid spec");

    assert_eq!(values.len(), 200);
    for value in values {
        assert!((45.0..=65.0).contains(&value));
        assert_eq!(round_to_places(value, 1), value);
    }
}

#[test]
fn speed_values_are_whole_numbers() {
    let mut rng = StdRng::seed_from_u64(7);
    let values = generate_speed_trap_data(UniformSpec::new(150, 20.0, 80.0), &mut rng)
        .expect("valid spec");

    assert_eq!(values.len(), 150);
    assert!(values.iter().all(|value| value.fract() == 0.0));
    assert!(values.iter().all(|value| (20.0..=80.0).contains(value)));
}

#[test]
fn same_seed_reproduces_dataset() {
    let spec = UniformSpec::new(25, 0.0, 100.0);
    let first = generate_cholesterol_data(spec, &mut StdRng::seed_from_u64(3)).expect("valid spec");
    let second =
        generate_cholesterol_data(spec, &mut StdRng::seed_from_u64(3)).expect("valid spec");

    assert_eq!(first, second);
}

#[test]
fn uniform_generators_reject_invalid_specs() {
    let mut rng = StdRng::seed_from_u64(1);

    for spec in [
        UniformSpec::new(0, 0.0, 10.0),
        UniformSpec::new(5, 10.0, 10.0),
        UniformSpec::new(5, 12.0, 10.0),
        UniformSpec::new(5, f64::NAN, 10.0),
    ] {
        let err = generate_speed_trap_data(spec, &mut rng).expect_err("spec must be rejected");
        assert!(matches!(err, ChartError::InvalidGeneratorInput(_)));
    }
}

#[test]
fn battery_generator_labels_brands_in_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let batteries = generate_battery_data(battery_spec(), &mut rng).expect("valid spec");

    assert_eq!(batteries.len(), 10);
    assert!(batteries[..6].iter().all(|b| b.label.as_deref() == Some(TOUGH_CELL)));
    assert!(batteries[6..].iter().all(|b| b.label.as_deref() == Some(ALWAYS_READY)));
    assert!(batteries
        .iter()
        .all(|b| b.value.fract() == 0.0 && (40.0..=MAX_BATTERY_LIFESPAN).contains(&b.value)));
}

#[test]
fn battery_generator_rejects_out_of_range_parameters() {
    let mut rng = StdRng::seed_from_u64(5);
    let invalid = [
        BatterySpec {
            min_lifespan: -1.0,
            ..battery_spec()
        },
        BatterySpec {
            min_lifespan: 90.0,
            max_lifespan: 90.0,
            ..battery_spec()
        },
        BatterySpec {
            max_lifespan: 131.0,
            ..battery_spec()
        },
        BatterySpec {
            tough_cell_count: 0,
            ..battery_spec()
        },
        BatterySpec {
            always_ready_count: 11,
            ..battery_spec()
        },
    ];

    for spec in invalid {
        assert!(spec.validate().is_err());
        assert!(generate_battery_data(spec, &mut rng).is_err());
    }
}

#[test]
fn battery_generator_rejects_bounds_without_whole_hour() {
    let spec = BatterySpec {
        tough_cell_count: 3,
        always_ready_count: 3,
        min_lifespan: 10.5,
        max_lifespan: 10.7,
    };
    let mut rng = StdRng::seed_from_u64(1);

    assert!(matches!(
        spec.validate(),
        Err(ChartError::InvalidGeneratorInput(_))
    ));
    assert!(generate_battery_data(spec, &mut rng).is_err());
}

#[test]
fn battery_generator_stays_inside_fractional_bounds() {
    let spec = BatterySpec {
        tough_cell_count: 10,
        always_ready_count: 10,
        min_lifespan: 10.5,
        max_lifespan: 12.7,
    };
    let mut rng = StdRng::seed_from_u64(1);
    let batteries = generate_battery_data(spec, &mut rng).expect("valid spec");

    assert!(batteries.iter().all(|b| (11.0..=12.0).contains(&b.value)));
}

#[test]
fn round_to_places_rounds_halves_away_from_zero() {
    assert_eq!(round_to_places(2.25, 1), 2.3);
    assert_eq!(round_to_places(-2.5, 0), -3.0);
    assert_eq!(round_to_places(48.04, 1), 48.0);
    assert!(round_to_places(f64::NAN, 1).is_nan());
}
