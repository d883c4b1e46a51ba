use serde::Serialize;

pub mod endpoints;
pub use endpoints::*;

/// A creator's request to participate in a campaign, as it sits in the
/// (simulated) database. The wire form adds an embedded campaign summary,
/// see [`endpoints::ApplicationBody`].
#[derive(Clone, Debug, Serialize)]
pub struct Application {
    pub id: i64,
    #[serde(rename = "appliedAt")]
    pub applied_at: String,
    pub status: ApplicationStatus,
    pub campaign_id: i64,
    pub creator_id: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}
