//! Web session data shared by the attribution tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::api::JsonBody;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{has_text, require_all};

/// Visitor session fields captured on the landing page.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct WebSessionArgs {
    /// URL of the page the visitor landed on (required).
    pub landing_page_url: Option<String>,

    /// URL that referred the visitor (required).
    pub referrer_url: Option<String>,

    /// Google click ID.
    pub gclid: Option<String>,

    /// Facebook click ID.
    pub fbclid: Option<String>,

    /// Microsoft click ID.
    pub msclkid: Option<String>,

    /// utm_source tracking value.
    pub utm_source: Option<String>,

    /// utm_medium tracking value.
    pub utm_medium: Option<String>,

    /// utm_campaign tracking value.
    pub utm_campaign: Option<String>,

    /// utm_adgroup tracking value.
    pub utm_adgroup: Option<String>,

    /// utm_term tracking value.
    pub utm_term: Option<String>,

    /// utm_content tracking value.
    pub utm_content: Option<String>,
}

impl WebSessionArgs {
    /// Check the required URLs and build the `webSessionData` object.
    pub fn to_body(&self) -> Result<JsonBody, ToolError> {
        require_all(&[
            ("landing_page_url", has_text(&self.landing_page_url)),
            ("referrer_url", has_text(&self.referrer_url)),
        ])?;

        Ok(JsonBody::new()
            .opt("landingPageUrl", self.landing_page_url.as_deref())
            .opt("referrerUrl", self.referrer_url.as_deref())
            .opt("gclid", self.gclid.as_deref())
            .opt("fbclid", self.fbclid.as_deref())
            .opt("msclkid", self.msclkid.as_deref())
            .opt("utmSource", self.utm_source.as_deref())
            .opt("utmMedium", self.utm_medium.as_deref())
            .opt("utmCampaign", self.utm_campaign.as_deref())
            .opt("utmAdgroup", self.utm_adgroup.as_deref())
            .opt("utmTerm", self.utm_term.as_deref())
            .opt("utmContent", self.utm_content.as_deref()))
    }
}
