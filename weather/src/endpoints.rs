pub const GEOCODING_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
pub const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Request URL builders for the geocoding and weather services.
///
/// Only the first geocoding match is ever used, so the query is pinned to
/// `limit=1`; measurements are requested in metric units.
pub struct Endpoints {
    api_key: String,
}

impl Endpoints {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: String::from(api_key),
        }
    }

    pub fn geocode(&self, city: &str) -> String {
        format!(
            "{}?q={}&limit=1&appid={}",
            GEOCODING_URL,
            percent_encode(city),
            self.api_key
        )
    }

    pub fn current_weather(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}?lat={}&lon={}&units=metric&appid={}",
            CURRENT_WEATHER_URL, lat, lon, self.api_key
        )
    }

    pub fn forecast(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}?lat={}&lon={}&units=metric&appid={}",
            FORECAST_URL, lat, lon, self.api_key
        )
    }
}

// Percent-encodes everything outside the RFC 3986 unreserved set.
fn percent_encode(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
