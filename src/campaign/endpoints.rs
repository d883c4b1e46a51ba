use actix_web::get;
use actix_web::web::{Data, Json, Path};
use tracing::info;

use crate::error::Error;
use crate::store::Store;

use super::Campaign;

#[get("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(store))]
pub async fn get_campaign_by_id(
    store: Data<Box<dyn Store>>,
    params: Path<String>,
) -> Result<Json<Campaign>, Error> {
    let campaign_id = params.into_inner();
    info!("received request for campaign details, id: {}", campaign_id);

    let campaign = store.fetch_campaign_by_id(&campaign_id).await?;

    info!("returning campaign details for id {}", campaign_id);
    Ok(Json(campaign))
}
