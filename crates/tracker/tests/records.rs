//! End-to-end checks of the public record API.

use time::Duration;
use tracker::metrics::{distance, mean_speed, running_calories, walking_calories};
use tracker::record::parse_day_record;
use tracker::{
    ActivityKind, ActivityLabels, BodyProfile, Field, TrackerError, describe_day_steps,
    describe_training, training_info,
};

#[test]
fn running_record_distance_follows_height_formula() {
    let summary = training_info(
        "1000,Running,40m",
        BodyProfile::new(75.0, 175.0),
        &ActivityLabels::default(),
    )
    .expect("record should summarize");

    assert!((summary.distance_km - 175.0 * 0.45 * 1000.0 / 1000.0).abs() < 1e-9);
    assert!(summary.calories.is_finite() && summary.calories > 0.0);
    assert_eq!(summary.kind, ActivityKind::Running);
}

#[test]
fn zero_duration_speed_is_zero() {
    for (steps, height) in [(1, 1.0), (1000, 1.75), (50_000, 2.1)] {
        assert_eq!(mean_speed(steps, height, Duration::ZERO), 0.0);
    }
}

#[test]
fn walking_burns_half_of_running() {
    let elapsed = Duration::minutes(47);
    let running = running_calories(8200, 68.0, 1.72, elapsed).unwrap();
    let walking = walking_calories(8200, 68.0, 1.72, elapsed).unwrap();
    assert!((walking * 2.0 - running).abs() < 1e-9);
}

#[test]
fn distance_is_linear_in_steps() {
    let one = distance(1, 1.8);
    assert!((distance(12_000, 1.8) - one * 12_000.0).abs() < 1e-9);
}

#[test]
fn malformed_day_records_report_their_kind() {
    assert_eq!(
        parse_day_record("abc,40m"),
        Err(TrackerError::InvalidFormat("abc".to_string()))
    );
    assert!(matches!(
        parse_day_record("0,40m"),
        Err(TrackerError::ZeroOrNegativeValue { field: Field::Steps, .. })
    ));
    assert!(matches!(
        parse_day_record("1000,40m,extra"),
        Err(TrackerError::InvalidArgumentsCount(input)) if input == "1000,40m,extra"
    ));
}

#[test]
fn unknown_training_type_names_the_label() {
    let err = describe_training("500,Swimming,30m", 75.0, 1.75).unwrap_err();
    assert_eq!(err, TrackerError::UnknownTrainingType("Swimming".to_string()));
    assert!(err.to_string().contains("Swimming"));
}

#[test]
fn running_summary_template() {
    // 12000 steps at 1.75 m: 9.45 km in 1 h. 70 * 9.45 * 60 / 60 = 661.5
    let text = describe_training("12000,Running,1h", 70.0, 1.75).unwrap();
    assert_eq!(
        text,
        "Training type: Running\n\
         Duration: 1.00 h.\n\
         Distance: 9.45 km.\n\
         Speed: 9.45 km/h\n\
         Calories burned: 661.50\n"
    );
}

#[test]
fn day_steps_never_fail() {
    for record in [
        "abc,40m",
        "0,40m",
        "1000,40m,extra",
        "1000",
        ",",
        "1000,",
        "1000,40",
        "-20,40m",
        "20,-40m",
    ] {
        assert_eq!(describe_day_steps(record, 75.0, 1.75), "", "record {record:?}");
    }
}

#[test]
fn day_steps_template() {
    let text = describe_day_steps("678,0h50m", 75.0, 1.75);
    assert!(text.starts_with("Steps: 678.\nDistance: 0.44 km.\n"));
    assert!(text.ends_with(" kcal.\n"));
}
