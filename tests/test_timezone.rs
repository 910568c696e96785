use chrono::{NaiveDate, TimeZone};
use chrono_tz::Asia::{Kolkata, Kuala_Lumpur};
use chrono_tz::Australia::Sydney;
use chrono_tz::Europe::London;
use chrono_tz::Pacific::Apia;

use prayer_times::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ── Offsets ──

#[test]
fn test_fixed_offset_zones() {
    assert_eq!(utc_offset_hours(&Kuala_Lumpur, date(2024, 5, 15)), 8.0);
    assert_eq!(utc_offset_hours(&Kolkata, date(2024, 5, 15)), 5.5);
}

#[test]
fn test_london_summer_time() {
    assert_eq!(utc_offset_hours(&London, date(2024, 1, 15)), 0.0);
    assert_eq!(utc_offset_hours(&London, date(2024, 7, 1)), 1.0);
}

#[test]
fn test_offset_sampled_at_local_noon() {
    // Samoa left summer time at 04:00 on 2011-04-02: noon UTC that day was
    // still 02:00 at UTC-10, local noon was already UTC-11.
    assert_eq!(utc_offset_hours(&Apia, date(2011, 4, 2)), -11.0);
    assert_eq!(utc_offset_hours(&Apia, date(2011, 4, 1)), -10.0);
}

#[test]
fn test_local_offset_is_plausible() {
    let offset = local_utc_offset_hours();
    assert!((-12.0..=14.0).contains(&offset), "offset={}", offset);
    assert_eq!((offset * 4.0).fract(), 0.0);
}

// ── Daylight saving heuristic ──

#[test]
fn test_daylight_saving_northern_hemisphere() {
    assert!(is_daylight_saving(&London, date(2024, 7, 1)));
    assert!(!is_daylight_saving(&London, date(2024, 12, 1)));
}

#[test]
fn test_daylight_saving_southern_hemisphere() {
    assert!(is_daylight_saving(&Sydney, date(2024, 1, 15)));
    assert!(!is_daylight_saving(&Sydney, date(2024, 7, 15)));
}

#[test]
fn test_no_daylight_saving_in_fixed_zone() {
    for month in 1..=12 {
        assert!(!is_daylight_saving(&Kuala_Lumpur, date(2024, month, 1)));
    }
}

// ── GeoMoment adapters ──

#[test]
fn test_from_date() {
    let m = GeoMoment::from_date(date(2024, 5, 15), 3.1667, 101.7, 8.0);
    assert_eq!(m, GeoMoment::new(2024, 5, 15, 3.1667, 101.7, 8.0));
}

#[test]
fn test_from_datetime_takes_zone_offset() {
    let dt = London.with_ymd_and_hms(2024, 7, 1, 9, 30, 0).unwrap();
    let m = GeoMoment::from_datetime(&dt, 51.5, -0.13);
    assert_eq!((m.year, m.month, m.day), (2024, 7, 1));
    assert_eq!(m.timezone, 1.0);
}

#[test]
fn test_in_zone_matches_explicit_offset() {
    let zoned = GeoMoment::in_zone(date(2024, 5, 15), 3.1667, 101.7, &Kuala_Lumpur);
    let explicit = GeoMoment::new(2024, 5, 15, 3.1667, 101.7, 8.0);
    assert_eq!(zoned, explicit);
    assert_eq!(
        compute_times(&zoned, &Config::default()),
        compute_times(&explicit, &Config::default())
    );
}
