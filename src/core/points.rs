use crate::domain::model::PointsDocument;
use crate::utils::error::Result;

/// Extract the forecast URL from a Points API response body.
///
/// Malformed JSON and a missing `properties`/`forecast` key both surface as a
/// parse error carrying serde's diagnostic.
pub fn extract_forecast_url(points_json: &str) -> Result<String> {
    let document: PointsDocument = serde_json::from_str(points_json)?;
    Ok(document.properties.forecast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AgentError;

    #[test]
    fn test_extracts_forecast_url() {
        let body = r#"{
            "id": "https://api.weather.gov/points/47.6062,-122.3321",
            "properties": {
                "gridId": "SEW",
                "forecast": "https://api.weather.gov/gridpoints/SEW/125,68/forecast",
                "forecastHourly": "https://api.weather.gov/gridpoints/SEW/125,68/forecast/hourly"
            }
        }"#;

        let url = extract_forecast_url(body).unwrap();
        assert_eq!(url, "https://api.weather.gov/gridpoints/SEW/125,68/forecast");
    }

    #[test]
    fn test_invalid_json_fails() {
        let err = extract_forecast_url("not json at all").unwrap_err();
        assert!(matches!(err, AgentError::PointsParse(_)));
        assert!(err.to_string().starts_with("Error parsing Points API response:"));
    }

    #[test]
    fn test_missing_properties_fails() {
        let err = extract_forecast_url(r#"{"id": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `properties`"));
    }

    #[test]
    fn test_missing_forecast_key_fails() {
        let err = extract_forecast_url(r#"{"properties": {"gridId": "SEW"}}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `forecast`"));
    }
}
