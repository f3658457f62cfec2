//! Best-effort location lookup
//!
//! The backend likes to know roughly where the student is so examples can be
//! localized. This is a single IP-based lookup at startup; any failure falls
//! back to a harmless placeholder.

use serde::Deserialize;

/// Free IP geolocation endpoint, no key required
const GEO_URL: &str = "https://ipapi.co/json/";

/// Shown while the lookup is in flight
pub const LOCATING: &str = "Locating...";

/// Used when the lookup fails or returns nothing useful
pub const FALLBACK: &str = "Earth";

#[derive(Debug, Deserialize)]
struct GeoResponse {
    country_name: Option<String>,
}

/// Resolve the user's country name, falling back to [`FALLBACK`]
pub async fn detect_country() -> String {
    match fetch_country().await {
        Some(country) if !country.trim().is_empty() => country,
        _ => FALLBACK.to_string(),
    }
}

async fn fetch_country() -> Option<String> {
    let response = reqwest::get(GEO_URL).await.ok()?;
    let geo: GeoResponse = response.json().await.ok()?;
    geo.country_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_response_decodes_country() {
        let geo: GeoResponse =
            serde_json::from_str(r#"{"ip":"1.2.3.4","country_name":"Ireland"}"#).unwrap();
        assert_eq!(geo.country_name.as_deref(), Some("Ireland"));
    }

    #[test]
    fn geo_response_tolerates_missing_country() {
        let geo: GeoResponse = serde_json::from_str(r#"{"ip":"1.2.3.4"}"#).unwrap();
        assert_eq!(geo.country_name, None);
    }
}
