use prayer_times::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── FormatTime ──

#[test]
fn test_half_past_five_in_every_format() {
    let value = TimeValue::Valid(5.5);
    assert_eq!(format_time(value, TimeFormat::Hour24), "05:30");
    assert_eq!(format_time(value, TimeFormat::Hour12), "5:30 am");
    assert_eq!(format_time(value, TimeFormat::Hour12NoSuffix), "5:30");
    assert_eq!(format_time(value, TimeFormat::FloatHours), "5.50");
}

#[test]
fn test_unsolvable_renders_placeholder() {
    for format in [
        TimeFormat::Hour24,
        TimeFormat::Hour12,
        TimeFormat::Hour12NoSuffix,
        TimeFormat::FloatHours,
    ] {
        assert_eq!(format_time(TimeValue::Unsolvable, format), INVALID_TIME);
    }
}

#[test]
fn test_twelve_hour_noon_and_midnight() {
    assert_eq!(format_time(TimeValue::Valid(0.25), TimeFormat::Hour12), "12:15 am");
    assert_eq!(format_time(TimeValue::Valid(12.0), TimeFormat::Hour12), "12:00 pm");
    assert_eq!(format_time(TimeValue::Valid(13.75), TimeFormat::Hour12), "1:45 pm");
    assert_eq!(format_time(TimeValue::Valid(23.5), TimeFormat::Hour12NoSuffix), "11:30");
}

#[test]
fn test_minute_rounding_carries_into_hour() {
    // 59.6 minutes past six rounds up to seven o'clock.
    let value = TimeValue::Valid(6.0 + 59.6 / 60.0);
    assert_eq!(format_time(value, TimeFormat::Hour24), "07:00");
    assert_eq!(format_time(TimeValue::Valid(6.0 + 29.4 / 60.0), TimeFormat::Hour24), "06:29");
    assert_eq!(format_time(TimeValue::Valid(6.0 + 29.6 / 60.0), TimeFormat::Hour24), "06:30");
}

#[test]
fn test_values_past_midnight_wrap() {
    assert_eq!(format_time(TimeValue::Valid(24.5), TimeFormat::Hour24), "00:30");
    assert_eq!(format_time(TimeValue::Valid(-0.5), TimeFormat::Hour24), "23:30");
}

#[test]
fn test_clock_parts() {
    assert_eq!(clock_parts(5.5), (5, 30));
    assert_eq!(clock_parts(23.999), (0, 0));
    assert_eq!(clock_parts(13.0 + 1.0 / 60.0), (13, 1));
}

#[test]
fn test_format_all_keeps_slot_order() {
    let times = RawTimes::from_array([
        TimeValue::Valid(5.0),
        TimeValue::Valid(6.5),
        TimeValue::Valid(12.25),
        TimeValue::Valid(15.75),
        TimeValue::Valid(18.5),
        TimeValue::Valid(18.5),
        TimeValue::Unsolvable,
    ]);
    assert_eq!(
        format_all(&times, TimeFormat::Hour24),
        vec!["05:00", "06:30", "12:15", "15:45", "18:30", "18:30", "-----"]
    );
}

// ── ParseTime ──

#[test]
fn test_parse_each_format() {
    assert_eq!(parse_time("05:30").unwrap(), TimeValue::Valid(5.5));
    assert_eq!(parse_time("5:30 am").unwrap(), TimeValue::Valid(5.5));
    assert_eq!(parse_time("5:30 pm").unwrap(), TimeValue::Valid(17.5));
    assert_eq!(parse_time("12:15 am").unwrap(), TimeValue::Valid(0.25));
    assert_eq!(parse_time("12:00 pm").unwrap(), TimeValue::Valid(12.0));
    assert_eq!(parse_time("5.50").unwrap(), TimeValue::Valid(5.5));
    assert_eq!(parse_time(INVALID_TIME).unwrap(), TimeValue::Unsolvable);
}

#[test]
fn test_parse_rejects_garbage() {
    for text in ["", "abc", "25:00", "10:61", "13:00 pm", "0:30 am", "pm", "nan"] {
        assert!(
            matches!(parse_time(text), Err(PrayerError::ParseTime(_))),
            "{:?} should not parse",
            text
        );
    }
}

#[test]
fn test_float_round_trip_within_a_minute() {
    for &h in &[0.0, 4.123, 5.5, 12.999, 19.291379, 23.4] {
        let text = format_time(TimeValue::Valid(h), TimeFormat::FloatHours);
        let back = parse_time(&text).unwrap().hours().unwrap();
        assert_approx!(back, h, 1.0 / 60.0);
    }
}

// ── Tuning ──

#[test]
fn test_tune_times_adds_minutes() {
    let times = RawTimes::from_array([TimeValue::Valid(10.0); Prayer::COUNT]);
    let offsets = Offsets::default()
        .with(Prayer::Fajr, -30.0)
        .with(Prayer::Asr, 15.0);
    let tuned = tune_times(&times, &offsets);
    assert_eq!(tuned.fajr, TimeValue::Valid(9.5));
    assert_eq!(tuned.asr, TimeValue::Valid(10.25));
    assert_eq!(tuned.dhuhr, TimeValue::Valid(10.0));
}

#[test]
fn test_tune_times_skips_unsolvable() {
    let mut times = RawTimes::from_array([TimeValue::Valid(10.0); Prayer::COUNT]);
    times.isha = TimeValue::Unsolvable;
    let tuned = tune_times(&times, &Offsets::new([5.0; Prayer::COUNT]));
    assert_eq!(tuned.isha, TimeValue::Unsolvable);
}

#[test]
fn test_isha_offset_shifts_only_isha() {
    let moment = GeoMoment::new(2024, 5, 15, 3.1667, 101.7, 8.0);
    let base = compute_times(&moment, &Config::default());
    let tuned = compute_times(
        &moment,
        &Config::builder().offset(Prayer::Isha, 5.0).build().unwrap(),
    );
    for prayer in Prayer::ALL {
        let i = prayer.index();
        if prayer == Prayer::Isha {
            let before = parse_time(&base[i]).unwrap().hours().unwrap();
            let after = parse_time(&tuned[i]).unwrap().hours().unwrap();
            assert_approx!(after - before, 5.0 / 60.0, 1e-9);
        } else {
            assert_eq!(base[i], tuned[i], "{}", prayer);
        }
    }
    assert_eq!(tuned[Prayer::Isha.index()], "20:31");
}
