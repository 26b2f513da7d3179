use crate::domain::ports::TextGenerator;
use crate::utils::error::Result;

pub fn build_summary_prompt(location: &str, raw_json: &str) -> String {
    format!(
        r#"
You are a weather information specialist. I have raw National Weather Service forecast data for "{location}" that needs to be converted into a clear, helpful summary for a general audience.

Raw NWS API Response:
{raw_json}

Please create a weather summary that includes:
1. A brief introduction with the location
2. Current conditions and today's forecast
3. The next 2-3 days outlook with key details (temperature, precipitation, wind)
4. Any notable weather patterns or alerts
5. Format the response to be easy to read and understand

Make it informative and practical for someone planning their activities. Focus on being helpful and clear.
"#
    )
}

/// Ask the model to turn raw forecast JSON into a readable summary. The
/// model's reply is returned verbatim; its factual accuracy is not checked
/// against the source data.
pub async fn summarize_forecast<G: TextGenerator>(
    generator: &G,
    location: &str,
    raw_json: &str,
) -> Result<String> {
    let prompt = build_summary_prompt(location, raw_json);
    generator.generate(&prompt).await
}
