use flightcalc_lib::{compute_remaining_fuel, Error, Kilograms, KilogramsPerSecond, Seconds};

#[test]
fn burning_for_one_hour_leaves_3200_kg() {
    let remaining =
        compute_remaining_fuel(Kilograms(5000.0), KilogramsPerSecond(0.5), Seconds(3600.0))
            .expect("enough fuel");
    assert_eq!(remaining, Kilograms(3200.0));
}

#[test]
fn burning_more_than_available_is_depleted() {
    let err = compute_remaining_fuel(Kilograms(100.0), KilogramsPerSecond(0.5), Seconds(3600.0))
        .unwrap_err();
    assert!(matches!(err, Error::FuelDepleted { .. }));
    let message = err.to_string();
    assert!(message.contains("1800"), "{message}");
    assert!(message.contains("100"), "{message}");
}

#[test]
fn depleted_exactly_when_burn_exceeds_fuel() {
    let cases = [
        (1000.0, 1.0, 999.0),
        (1000.0, 1.0, 1000.0),
        (1000.0, 1.0, 1001.0),
        (0.0, 0.0, 1e6),
        (0.0, 0.1, 1.0),
        (250.0, 2.5, 120.0),
    ];

    for (fuel, rate, duration) in cases {
        let result =
            compute_remaining_fuel(Kilograms(fuel), KilogramsPerSecond(rate), Seconds(duration));
        if rate * duration > fuel {
            assert!(
                matches!(result, Err(Error::FuelDepleted { .. })),
                "fuel={fuel} rate={rate} t={duration}: {result:?}"
            );
        } else {
            let remaining = result.expect("enough fuel");
            assert!(remaining.0 >= 0.0);
            assert!((remaining.0 - (fuel - rate * duration)).abs() < 1e-9);
        }
    }
}

#[test]
fn negative_fuel_is_invalid_not_depleted() {
    let err = compute_remaining_fuel(Kilograms(-1.0), KilogramsPerSecond(0.0), Seconds(0.0))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { ref name, .. } if name == "fuel_kg"));
}
