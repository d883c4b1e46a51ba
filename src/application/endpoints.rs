use actix_web::get;
use actix_web::web::{Data, Json};
use serde::Serialize;

use crate::campaign::{Brand, CampaignSummary};
use crate::error::Error;
use crate::store::Store;

use super::{Application, ApplicationStatus};

#[derive(Clone, Debug, Serialize)]
pub struct ApplicationBody {
    pub id: i64,
    #[serde(rename = "appliedAt")]
    pub applied_at: String,
    pub status: ApplicationStatus,
    pub campaign_id: i64,
    pub creator_id: i64,
    pub campaign: CampaignSummary,
}

impl ApplicationBody {
    /// The embedded campaign is synthesized from the application itself, so
    /// `campaign.id` always equals `campaign_id`.
    pub fn render(application: Application) -> ApplicationBody {
        ApplicationBody {
            campaign: CampaignSummary {
                id: application.campaign_id,
                title: format!("Campaign #{}", application.campaign_id),
                description: "Campaign description placeholder".to_string(),
                image_url: "/placeholder.svg".to_string(),
                category: "General".to_string(),
                brand: Brand {
                    id: 1,
                    name: "Test Brand".to_string(),
                    logo: "/placeholder.svg".to_string(),
                },
            },
            id: application.id,
            applied_at: application.applied_at,
            status: application.status,
            campaign_id: application.campaign_id,
            creator_id: application.creator_id,
        }
    }
}

#[get("/applications/fallback")]
#[tracing::instrument(skip(store))]
pub async fn get_fallback_applications(
    store: Data<Box<dyn Store>>,
) -> Result<Json<Vec<ApplicationBody>>, Error> {
    let applications = store
        .fetch_my_applications()
        .await
        .map_err(|error| Error::ResponseConstruction(error.to_string()))?;

    let body = applications
        .into_iter()
        .map(ApplicationBody::render)
        .collect();

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_keys_embedded_campaign_by_campaign_id() {
        let application = Application {
            id: 7,
            applied_at: "2025-05-05 08:30:52.410468".to_string(),
            status: ApplicationStatus::Pending,
            campaign_id: 3,
            creator_id: 12,
        };

        let body = ApplicationBody::render(application);

        assert_eq!(body.campaign.id, body.campaign_id);
        assert_eq!(body.campaign.title, "Campaign #3");
        assert_eq!(body.campaign.category, "General");
        assert_eq!(body.campaign.brand.name, "Test Brand");
    }
}
