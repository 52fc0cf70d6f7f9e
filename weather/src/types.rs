use serde::Deserialize;

/// One geocoding match for a city query.
#[derive(Clone, Debug, Deserialize)]
pub struct GeoMatch {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: Option<String>,
}

/// One entry of a response's `weather` array.
#[derive(Clone, Debug, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// The `main` block of measurements. The service omits fields at times, so
/// everything is optional and the report renders absences as `N/A`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Readings {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
    pub deg: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
}

/// Current conditions at one location.
#[derive(Clone, Debug, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub main: Readings,
    #[serde(default)]
    pub wind: Wind,
    /// Observation time, Unix seconds UTC.
    pub dt: i64,
    /// The location's offset from UTC in seconds.
    #[serde(default)]
    pub timezone: i64,
}

/// One 3-hour step of the forecast.
#[derive(Clone, Debug, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    #[serde(default)]
    pub main: Readings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub wind: Wind,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ForecastCity {
    #[serde(default)]
    pub timezone: i64,
}

/// The 5-day forecast in 3-hour steps, chronological.
#[derive(Clone, Debug, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: ForecastCity,
}
