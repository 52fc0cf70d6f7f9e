use crate::{daily_summary, CurrentWeather, Forecast, LocalStamp, Readings, WeatherBundle, Wind};

/// Renders current conditions as a small text block.
pub fn render_current(current: &CurrentWeather) -> String {
    let stamp = LocalStamp::of(current.dt, current.timezone);
    let mut result = String::new();

    result += &current.name;
    if let Some(country) = &current.sys.country {
        result += ", ";
        result += country;
    }
    result += " - ";
    result += &stamp.date_time();
    result += "\n";

    result += &format!(
        "  {} (feels like {})\n",
        temperature(current.main.temp),
        temperature(current.main.feels_like)
    );
    if let Some(condition) = current.weather.first() {
        result += &format!("  {}\n", condition.description);
    }
    result += &format!("  {}\n", meta_line(&current.main, &current.wind));
    result
}

/// Renders the daily forecast, one line per day.
pub fn render_forecast(forecast: &Forecast) -> String {
    let timezone = forecast.city.timezone;
    let mut result = String::from("Forecast:\n");
    for entry in daily_summary(forecast) {
        let stamp = LocalStamp::of(entry.dt, timezone);
        let description = entry
            .weather
            .first()
            .map(|condition| condition.description.as_str())
            .unwrap_or("");
        result += &format!(
            "  {}  {:>7}  {}\n",
            stamp.short(),
            temperature(entry.main.temp),
            description
        );
    }
    result
}

/// The full report: current conditions, then the forecast.
pub fn render_bundle(bundle: &WeatherBundle) -> String {
    let mut result = render_current(&bundle.current);
    result += "\n";
    result += &render_forecast(&bundle.forecast);
    result
}

fn temperature(value: Option<f64>) -> String {
    match value {
        Some(degrees) => format!("{:.1}°C", degrees),
        None => String::from("N/A"),
    }
}

fn meta_line(readings: &Readings, wind: &Wind) -> String {
    let humidity = match readings.humidity {
        Some(value) => format!("{}%", value),
        None => String::from("N/A"),
    };
    let pressure = match readings.pressure {
        Some(value) => format!("{} hPa", value),
        None => String::from("N/A"),
    };
    let wind = match (wind.speed, wind.deg) {
        (Some(speed), Some(deg)) => format!("{} m/s, direction {}°", speed, deg.round()),
        (Some(speed), None) => format!("{} m/s", speed),
        _ => String::from("N/A"),
    };
    format!("Humidity: {}   Pressure: {}   Wind: {}", humidity, pressure, wind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Condition, ForecastCity, ForecastEntry, GeoMatch, Sys};

    fn current() -> CurrentWeather {
        CurrentWeather {
            name: String::from("Warsaw"),
            sys: Sys {
                country: Some(String::from("PL")),
            },
            weather: vec![Condition {
                description: String::from("scattered clouds"),
                icon: String::from("03d"),
            }],
            main: Readings {
                temp: Some(15.3),
                feels_like: Some(14.1),
                humidity: Some(62.0),
                pressure: Some(1015.0),
            },
            wind: Wind {
                speed: Some(4.2),
                deg: Some(250.0),
            },
            dt: 1_715_342_400,
            timezone: 7200,
        }
    }

    #[test]
    fn current_block_carries_all_readings() {
        let rendered = render_current(&current());
        assert!(rendered.starts_with("Warsaw, PL - 10.05.2024, 14:00\n"));
        assert!(rendered.contains("15.3°C (feels like 14.1°C)"));
        assert!(rendered.contains("scattered clouds"));
        assert!(rendered.contains("Humidity: 62%"));
        assert!(rendered.contains("Wind: 4.2 m/s, direction 250°"));
    }

    #[test]
    fn missing_readings_render_as_not_available() {
        let mut sparse = current();
        sparse.main = Readings::default();
        sparse.wind = Wind::default();
        sparse.weather.clear();
        let rendered = render_current(&sparse);
        assert!(rendered.contains("N/A (feels like N/A)"));
        assert!(rendered.contains("Wind: N/A"));
    }

    #[test]
    fn forecast_lines_use_the_short_stamp() {
        let forecast = Forecast {
            list: vec![ForecastEntry {
                dt: 1_715_342_400,
                main: Readings {
                    temp: Some(16.0),
                    ..Default::default()
                },
                weather: vec![Condition {
                    description: String::from("light rain"),
                    icon: String::from("10d"),
                }],
                wind: Wind::default(),
            }],
            city: ForecastCity { timezone: 0 },
        };
        let rendered = render_forecast(&forecast);
        assert!(rendered.contains("10.05 12:00"));
        assert!(rendered.contains("16.0°C"));
        assert!(rendered.contains("light rain"));
    }

    #[test]
    fn bundle_report_contains_both_sections() {
        let bundle = WeatherBundle {
            location: GeoMatch {
                name: String::from("Warsaw"),
                lat: 52.2,
                lon: 21.0,
                country: Some(String::from("PL")),
            },
            current: current(),
            forecast: Forecast {
                list: Vec::new(),
                city: ForecastCity::default(),
            },
        };
        let rendered = render_bundle(&bundle);
        assert!(rendered.contains("Warsaw, PL"));
        assert!(rendered.contains("Forecast:"));
    }
}
