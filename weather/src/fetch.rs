use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::{CurrentWeather, Endpoints, Forecast, GeoMatch};

/// Transport used to reach the weather services.
///
/// The crate never opens a socket itself; callers bring whatever can turn a
/// request URL into a response body.
pub trait Fetch {
    fn get(&mut self, url: &str) -> anyhow::Result<String>;
}

/// Everything one lookup produces.
#[derive(Clone, Debug)]
pub struct WeatherBundle {
    pub location: GeoMatch,
    pub current: CurrentWeather,
    pub forecast: Forecast,
}

/// A full lookup for one city: geocode the query, then fetch current
/// conditions and the forecast for the first match.
pub fn lookup<F: Fetch>(
    fetch: &mut F,
    endpoints: &Endpoints,
    city: &str,
) -> anyhow::Result<WeatherBundle> {
    let matches: Vec<GeoMatch> = get_json(fetch, &endpoints.geocode(city), "geocoding")?;
    let Some(location) = matches.into_iter().next() else {
        anyhow::bail!("No location found for '{}'", city);
    };

    let current = get_json(
        fetch,
        &endpoints.current_weather(location.lat, location.lon),
        "current weather",
    )?;
    let forecast = get_json(
        fetch,
        &endpoints.forecast(location.lat, location.lon),
        "forecast",
    )?;

    Ok(WeatherBundle {
        location,
        current,
        forecast,
    })
}

fn get_json<F: Fetch, T: DeserializeOwned>(
    fetch: &mut F,
    url: &str,
    what: &str,
) -> anyhow::Result<T> {
    let body = fetch.get(url)?;
    serde_json::from_str(&body).with_context(|| format!("Unexpected {} response", what))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serves canned bodies keyed by URL substring.
    struct Canned(Vec<(&'static str, &'static str)>);

    impl Fetch for Canned {
        fn get(&mut self, url: &str) -> anyhow::Result<String> {
            for (fragment, body) in &self.0 {
                if url.contains(fragment) {
                    return Ok(String::from(*body));
                }
            }
            anyhow::bail!("Unexpected request: {}", url)
        }
    }

    #[test]
    fn looks_up_the_first_geocoding_match() {
        let mut fetch = Canned(vec![
            (
                "geo/1.0/direct",
                r#"[{"name":"Warsaw","lat":52.2,"lon":21.0,"country":"PL"},
                    {"name":"Warsaw","lat":41.2,"lon":-85.8,"country":"US"}]"#,
            ),
            ("data/2.5/weather", r#"{"dt": 1715342400, "name": "Warsaw"}"#),
            ("data/2.5/forecast", r#"{"list": [], "city": {"timezone": 7200}}"#),
        ]);
        let bundle = lookup(&mut fetch, &Endpoints::new("key"), "Warsaw").unwrap();
        assert_eq!(bundle.location.country.as_deref(), Some("PL"));
        assert_eq!(bundle.forecast.city.timezone, 7200);
    }

    #[test]
    fn an_empty_geocoding_result_is_an_error() {
        let mut fetch = Canned(vec![("geo/1.0/direct", "[]")]);
        let err = lookup(&mut fetch, &Endpoints::new("key"), "Nowhere").unwrap_err();
        assert!(err.to_string().contains("Nowhere"));
    }
}
