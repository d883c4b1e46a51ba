use async_trait::async_trait;

use crate::application::{Application, ApplicationStatus};
use crate::campaign::{self, Brand, Campaign};
use crate::error::Error;
use crate::saved_campaign::SavedCampaignLink;

/// Data-access seam for the handlers. Swapping the fixtures for a real
/// database means implementing this trait; no caller changes.
#[async_trait]
pub trait Store: Send + Sync {
    /// The identifier is taken raw from the path: numeric or not, a campaign
    /// document comes back.
    async fn fetch_campaign_by_id(&self, raw_id: &str) -> Result<Campaign, Error>;

    async fn fetch_my_applications(&self) -> Result<Vec<Application>, Error>;

    async fn fetch_saved_campaigns(&self) -> Result<Vec<SavedCampaignLink>, Error>;
}

/// Canned data matching the rows the real backend would return. Everything
/// is rebuilt per call; nothing is stored between requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureStore;

#[async_trait]
impl Store for FixtureStore {
    async fn fetch_campaign_by_id(&self, raw_id: &str) -> Result<Campaign, Error> {
        let id = leading_integer(raw_id);

        Ok(Campaign {
            id,
            title: format!("Campaign {}", raw_id),
            description: format!(
                "This is a detailed description for campaign {}. This content is \
                 coming from our mock API to ensure the saved campaigns are \
                 displayed properly.",
                raw_id
            ),
            image_url: "https://placehold.co/600x400".to_string(),
            // the category bucket coerces the whole identifier, not the
            // prefix, so "42abc" still lands in "Beauty"
            category: campaign::category_for(raw_id.parse::<i64>().ok()).to_string(),
            start_date: "2023-11-01".to_string(),
            end_date: "2023-12-31".to_string(),
            requirements: "Minimum 1000 followers, high engagement rate".to_string(),
            budget: "$500-1000".to_string(),
            brand: Brand {
                id: 1,
                name: "Test Brand".to_string(),
                logo: "https://placehold.co/100x100".to_string(),
            },
            views: 150,
            applicants: 12,
        })
    }

    async fn fetch_my_applications(&self) -> Result<Vec<Application>, Error> {
        Ok(vec![
            Application {
                id: 1,
                applied_at: "2025-05-05 08:30:52.410468".to_string(),
                status: ApplicationStatus::Pending,
                campaign_id: 3,
                creator_id: 12,
            },
            Application {
                id: 2,
                applied_at: "2025-05-05 11:10:34.067198".to_string(),
                status: ApplicationStatus::Pending,
                campaign_id: 1,
                creator_id: 12,
            },
            Application {
                id: 3,
                applied_at: "2025-05-05 11:10:38.330592".to_string(),
                status: ApplicationStatus::Pending,
                campaign_id: 2,
                creator_id: 12,
            },
        ])
    }

    async fn fetch_saved_campaigns(&self) -> Result<Vec<SavedCampaignLink>, Error> {
        Ok(vec![
            SavedCampaignLink {
                id: 1,
                campaign_id: 1,
                user_id: 12,
            },
            SavedCampaignLink {
                id: 2,
                campaign_id: 3,
                user_id: 12,
            },
        ])
    }
}

/// `parseInt`-style parse: optional sign, then the longest run of digits.
/// "42abc" gives 42; a fully non-numeric id gives `None`.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
