use serde::{Deserialize, Serialize};

/// The subset of the NWS Points API payload the pipeline consumes.
///
/// The Points API returns much more metadata; everything except the forecast
/// URL is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsDocument {
    pub properties: PointsProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsProperties {
    pub forecast: String,
}
