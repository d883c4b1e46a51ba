use actix_web::web::{Data, Json};
use actix_web::{get, HttpRequest};
use tracing::info;

use crate::auth;
use crate::error::Error;
use crate::store::Store;

use super::SavedCampaignLink;

#[get("/saved-campaign-ids")]
#[tracing::instrument(skip(req, store))]
pub async fn get_saved_campaign_ids(
    req: HttpRequest,
    store: Data<Box<dyn Store>>,
) -> Result<Json<Vec<SavedCampaignLink>>, Error> {
    auth::require_bearer(&req)?;

    info!("received request for saved-campaign-ids");

    let links = store
        .fetch_saved_campaigns()
        .await
        .map_err(|_| Error::FixturesUnavailable)?;

    info!("returning {} saved campaign links", links.len());
    Ok(Json(links))
}
