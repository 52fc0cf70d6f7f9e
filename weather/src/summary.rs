use itertools::Itertools;

use crate::{Forecast, ForecastEntry};

const SECONDS_PER_DAY: i64 = 86_400;

/// A Unix timestamp shifted into a location's local time and split into
/// calendar fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LocalStamp {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl LocalStamp {
    pub fn of(dt: i64, timezone: i64) -> Self {
        let shifted = dt + timezone;
        let days = shifted.div_euclid(SECONDS_PER_DAY);
        let seconds = shifted.rem_euclid(SECONDS_PER_DAY) as u32;
        let (year, month, day) = civil_from_days(days);
        LocalStamp {
            year,
            month,
            day,
            hour: seconds / 3600,
            minute: seconds % 3600 / 60,
        }
    }

    /// `"dd.mm.yyyy, HH:MM"`, the header form for current conditions.
    pub fn date_time(&self) -> String {
        format!(
            "{:02}.{:02}.{}, {:02}:{:02}",
            self.day, self.month, self.year, self.hour, self.minute
        )
    }

    /// `"dd.mm HH:MM"`, the short form for forecast rows.
    pub fn short(&self) -> String {
        format!(
            "{:02}.{:02} {:02}:{:02}",
            self.day, self.month, self.hour, self.minute
        )
    }
}

/// Picks one representative entry per local calendar day: the 12:00 sample
/// when the day has one, otherwise the day's first entry. Days come out in
/// the order the (chronological) forecast list visits them.
pub fn daily_summary(forecast: &Forecast) -> Vec<&ForecastEntry> {
    let timezone = forecast.city.timezone;
    let mut days = Vec::new();
    for (_, group) in &forecast
        .list
        .iter()
        .chunk_by(|entry| (entry.dt + timezone).div_euclid(SECONDS_PER_DAY))
    {
        let entries: Vec<&ForecastEntry> = group.collect();
        let noon = entries
            .iter()
            .find(|entry| LocalStamp::of(entry.dt, timezone).hour == 12)
            .copied();
        days.push(noon.unwrap_or(entries[0]));
    }
    days
}

// Days-since-epoch to (year, month, day), proleptic Gregorian.
// http://howardhinnant.github.io/date_algorithms.html#civil_from_days
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let shifted = days + 719_468;
    let era = (if shifted >= 0 { shifted } else { shifted - 146_096 }) / 146_097;
    let day_of_era = (shifted - era * 146_097) as u64;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let year = year_of_era as i64 + era * 400;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * month_index + 2) / 5 + 1) as u32;
    let month = (if month_index < 10 {
        month_index + 3
    } else {
        month_index - 9
    }) as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}
