use chrono::NaiveDate;
use chrono_tz::Asia::Kuala_Lumpur;

use prayer_times::{
    compute_raw_times, format_time, solar_midnight, CalculationMethod, Config, GeoMoment,
    HighLatitudeMode, Juristic, TimeFormat,
};

fn main() {
    let latitude = 3.1667;
    let longitude = 101.7;

    let Some(date) = NaiveDate::from_ymd_opt(2024, 5, 15) else {
        return;
    };
    let moment = GeoMoment::in_zone(date, latitude, longitude, &Kuala_Lumpur);

    let config = match Config::builder()
        .method(CalculationMethod::Mwl)
        .juristic(Juristic::Shafii)
        .high_latitude(HighLatitudeMode::AngleBased)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bad configuration: {e}");
            return;
        }
    };

    let times = compute_raw_times(&moment, &config);

    println!("=== Prayer Times ===");
    println!(
        "Location: Kuala Lumpur ({:.4}°N, {:.4}°E), UTC{:+}",
        latitude, longitude, moment.timezone
    );
    println!("Date: {}", date);
    println!("Method: {:?}, Asr: {:?}", config.method, config.juristic);
    println!();
    println!(
        "{:<8} {:>6} {:>9} {:>6} {:>6}",
        "", "24h", "12h", "12h", "float"
    );
    for (prayer, value) in times.iter() {
        println!(
            "{:<8} {:>6} {:>9} {:>6} {:>6}",
            prayer.name(),
            format_time(value, TimeFormat::Hour24),
            format_time(value, TimeFormat::Hour12),
            format_time(value, TimeFormat::Hour12NoSuffix),
            format_time(value, TimeFormat::FloatHours),
        );
    }
    println!();
    println!(
        "Solar midnight: {}",
        format_time(solar_midnight(&times), TimeFormat::Hour24)
    );
}
