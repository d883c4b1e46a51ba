use serde::Serialize;

pub mod endpoints;
pub use endpoints::*;

/// Join-table-shaped bookmark linking a user to a campaign. Served bare,
/// with no enrichment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SavedCampaignLink {
    pub id: i64,
    pub campaign_id: i64,
    pub user_id: i64,
}
