use crate::domain::ports::TextGenerator;
use crate::utils::error::{AgentError, Result};

/// Required prefix for every planned Points API URL. Anything the model
/// returns without this prefix is rejected with the raw output embedded in
/// the error.
pub const POINTS_API_PREFIX: &str = "https://api.weather.gov/points/";

pub fn build_planning_prompt(location: &str) -> String {
    format!(
        r#"
You are an expert at working with the National Weather Service (NWS) API.

Your task: Generate the NWS API URL to get weather forecast data for "{location}".

Instructions:
1. First, determine the approximate latitude and longitude coordinates for this location
2. Generate the NWS Points API URL: https://api.weather.gov/points/{{lat}},{{lon}}

For the coordinates, use your knowledge to estimate:
- Major cities: Use well-known coordinates
- ZIP codes: Estimate based on the area
- States: Use approximate center coordinates
- In case a location description is provided instead of a location name, please use the most likely city and state name as the location for the coordinates

Example for Seattle:
https://api.weather.gov/points/47.6062,-122.3321

Example for largest city in USA:
Based on your knowledge, you will establish location is New York City
https://api.weather.gov/points/40.7128,-74.0060

Now generate the API call (Points API) for the established location.
Return ONLY the complete Points API URL, nothing else.
Format: https://api.weather.gov/points/LAT,LON
"#
    )
}

/// Ask the model to infer coordinates for `location` and emit a Points API
/// URL. Returns the planned request URLs in execution order (currently always
/// a single Points API call).
///
/// The coordinates themselves are taken on trust; only the URL prefix is
/// checked.
pub async fn plan_points_request<G: TextGenerator>(
    generator: &G,
    location: &str,
) -> Result<Vec<String>> {
    let prompt = build_planning_prompt(location);
    let response = generator.generate(&prompt).await?;

    let api_url = response.trim();
    if api_url.starts_with(POINTS_API_PREFIX) {
        Ok(vec![api_url.to_string()])
    } else {
        Err(AgentError::InvalidPlan {
            output: api_url.to_string(),
        })
    }
}
