use serde::Serialize;

pub mod endpoints;
pub use endpoints::*;

/// Full campaign detail document served by `/campaigns/{id}`.
///
/// `id` holds the longest numeric prefix of the requested identifier and is
/// `None` (serialized as `null`) when there is none; the interpolated
/// strings keep the raw identifier either way.
#[derive(Clone, Debug, Serialize)]
pub struct Campaign {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub category: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub requirements: String,
    pub budget: String,
    pub brand: Brand,
    pub views: i64,
    pub applicants: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub logo: String,
}

/// Abbreviated campaign embedded in enriched application responses.
#[derive(Clone, Debug, Serialize)]
pub struct CampaignSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub category: String,
    pub brand: Brand,
}

/// Mock category bucketing: multiples of 3 before multiples of 2, everything
/// else (including non-numeric ids) lands in "Beauty". Kept only for
/// response-shape compatibility with the rendering layer.
pub fn category_for(id: Option<i64>) -> &'static str {
    match id {
        Some(id) if id % 3 == 0 => "Fashion",
        Some(id) if id % 2 == 0 => "Technology",
        _ => "Beauty",
    }
}
