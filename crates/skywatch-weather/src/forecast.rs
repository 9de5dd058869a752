//! Reduction of 3-hour forecast samples into daily summaries.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Timelike, Utc};

use skywatch_entity::setting::TemperatureUnit;

use crate::model::{DailyForecast, Forecast, ForecastSample, ForecastSlot};
use crate::units::convert_temperature;

/// Local hours each day's snapshots are anchored to, in slot order.
pub const TARGET_HOURS: [u32; 3] = [9, 15, 21];

/// Maximum number of days returned.
pub const MAX_DAYS: usize = 5;

/// Reduce a forecast to at most [`MAX_DAYS`] daily summaries, earliest first.
///
/// Timestamps are shifted into the queried city's own offset before grouping,
/// so day boundaries and slot hours are local to the city, not to the server.
/// For each target hour the unused sample of that day with the closest local
/// hour is picked (earliest on a tie), so a sample fills at most one slot.
pub fn reduce_forecast(forecast: &Forecast, unit: TemperatureUnit) -> Vec<DailyForecast> {
    let offset = FixedOffset::east_opt(forecast.timezone_offset).unwrap_or_else(|| Utc.fix());

    let mut days: BTreeMap<NaiveDate, Vec<(DateTime<FixedOffset>, &ForecastSample)>> =
        BTreeMap::new();
    for sample in &forecast.samples {
        let Some(utc) = DateTime::from_timestamp(sample.timestamp, 0) else {
            continue;
        };
        let local = utc.with_timezone(&offset);
        days.entry(local.date_naive()).or_default().push((local, sample));
    }

    days.into_iter()
        .take(MAX_DAYS)
        .map(|(date, samples)| DailyForecast {
            date,
            label: date.format("%a, %b %d").to_string(),
            slots: pick_slots(&samples, unit),
        })
        .collect()
}

fn pick_slots(
    samples: &[(DateTime<FixedOffset>, &ForecastSample)],
    unit: TemperatureUnit,
) -> Vec<ForecastSlot> {
    let mut used = vec![false; samples.len()];
    let mut slots = Vec::with_capacity(TARGET_HOURS.len());

    for target in TARGET_HOURS {
        let best = samples
            .iter()
            .enumerate()
            .filter(|(i, _)| !used[*i])
            .min_by_key(|(_, (local, _))| local.hour().abs_diff(target));

        let Some((index, (local, sample))) = best else {
            break;
        };
        used[index] = true;

        let description = if sample.description.is_empty() {
            sample.condition.clone()
        } else {
            sample.description.clone()
        };

        slots.push(ForecastSlot {
            label: local.format("%-I %p").to_string(),
            time: local.format("%-I:%M %p").to_string(),
            temperature: convert_temperature(sample.temperature, unit),
            description,
            icon: sample.icon.clone(),
        });
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_at(
        offset: &FixedOffset,
        (y, m, d): (i32, u32, u32),
        hour: u32,
        temp: f64,
    ) -> ForecastSample {
        let local = offset.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap();
        ForecastSample {
            timestamp: local.timestamp(),
            temperature: Some(temp),
            condition: "Clouds".to_string(),
            description: format!("sample {hour}"),
            icon: "04d".to_string(),
        }
    }

    /// Eight 3-hour samples per day starting at local midnight.
    fn full_days(offset_secs: i32, days: u32) -> Forecast {
        let offset = FixedOffset::east_opt(offset_secs).unwrap();
        let mut samples = Vec::new();
        for day in 0..days {
            for hour in (0..24).step_by(3) {
                samples.push(sample_at(&offset, (2024, 3, 4 + day), hour, hour as f64));
            }
        }
        Forecast {
            timezone_offset: offset_secs,
            samples,
        }
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let forecast = Forecast {
            timezone_offset: 0,
            samples: vec![],
        };
        assert!(reduce_forecast(&forecast, TemperatureUnit::Metric).is_empty());
    }

    #[test]
    fn caps_at_five_days_earliest_first() {
        let days = reduce_forecast(&full_days(0, 7), TemperatureUnit::Metric);
        assert_eq!(days.len(), MAX_DAYS);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(days[4].date, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());
        assert_eq!(days[0].label, "Mon, Mar 04");
        assert!(days.iter().all(|d| d.slots.len() == 3));
    }

    #[test]
    fn picks_exact_target_hours_with_labels() {
        let days = reduce_forecast(&full_days(0, 1), TemperatureUnit::Metric);
        let labels: Vec<_> = days[0].slots.iter().map(|s| s.label.as_str()).collect();
        let times: Vec<_> = days[0].slots.iter().map(|s| s.time.as_str()).collect();
        assert_eq!(labels, ["9 AM", "3 PM", "9 PM"]);
        assert_eq!(times, ["9:00 AM", "3:00 PM", "9:00 PM"]);
        assert_eq!(days[0].slots[1].temperature, Some(15.0));
    }

    #[test]
    fn grouping_uses_city_offset_not_utc() {
        // 23:00 UTC on Mar 4 is 08:00 on Mar 5 in UTC+9.
        let utc_23 = Utc.with_ymd_and_hms(2024, 3, 4, 23, 0, 0).unwrap();
        let forecast = Forecast {
            timezone_offset: 9 * 3600,
            samples: vec![ForecastSample {
                timestamp: utc_23.timestamp(),
                temperature: Some(1.0),
                condition: "Clear".to_string(),
                description: String::new(),
                icon: "01n".to_string(),
            }],
        };
        let days = reduce_forecast(&forecast, TemperatureUnit::Metric);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(days[0].slots[0].time, "8:00 AM");
        assert_eq!(days[0].slots[0].description, "Clear");
    }

    #[test]
    fn sample_is_never_reused_within_a_day() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let forecast = Forecast {
            timezone_offset: 0,
            samples: vec![
                sample_at(&offset, (2024, 3, 4), 18, 1.0),
                sample_at(&offset, (2024, 3, 4), 21, 2.0),
            ],
        };
        let days = reduce_forecast(&forecast, TemperatureUnit::Metric);
        let slots = &days[0].slots;
        assert_eq!(slots.len(), 2);
        // 9 -> 18h (closest of the two), 15 -> 21h (only one left).
        assert_eq!(slots[0].time, "6:00 PM");
        assert_eq!(slots[1].time, "9:00 PM");
    }

    #[test]
    fn tie_prefers_the_earlier_unused_sample() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let forecast = Forecast {
            timezone_offset: 0,
            samples: vec![
                sample_at(&offset, (2024, 3, 4), 12, 1.0),
                sample_at(&offset, (2024, 3, 4), 18, 2.0),
            ],
        };
        let days = reduce_forecast(&forecast, TemperatureUnit::Metric);
        let slots = &days[0].slots;
        // 9 -> 12h; 15 is 3h from both 12h and 18h, 12h is taken -> 18h.
        assert_eq!(slots[0].time, "12:00 PM");
        assert_eq!(slots[1].time, "6:00 PM");
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn temperatures_follow_the_unit() {
        let days = reduce_forecast(&full_days(0, 1), TemperatureUnit::Imperial);
        // 9 C -> 48.2 F
        assert_eq!(days[0].slots[0].temperature, Some(48.2));
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let mut forecast = full_days(0, 1);
        forecast.timezone_offset = 200_000;
        let days = reduce_forecast(&forecast, TemperatureUnit::Metric);
        assert_eq!(days[0].slots[0].label, "9 AM");
    }
}
