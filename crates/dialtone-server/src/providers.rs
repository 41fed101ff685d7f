//! Provider construction from stored settings

use dialtone::domain::entities::IntegrationSettings;
use dialtone::domain::value_objects::Medium;
use dialtone::ports::provider::TelephonyProvider;
use dialtone_integration_plivo::{PlivoConfig, PlivoIntegration};
use dialtone_integration_websprix::{WebSprixConfig, WebSprixIntegration};

/// Build the provider adapter for a medium from its settings, reusing
/// the server's HTTP connection pool.
///
/// Settings may be incomplete (empty credentials); the provider's own
/// API calls surface that as credential errors.
pub fn build(
    medium: Medium,
    settings: &IntegrationSettings,
    http: reqwest::Client,
) -> Box<dyn TelephonyProvider> {
    match medium {
        Medium::Plivo => Box::new(PlivoIntegration::with_http(
            PlivoConfig::from_settings(settings),
            http,
        )),
        Medium::WebSprix => Box::new(WebSprixIntegration::with_http(
            WebSprixConfig::from_settings(settings),
            http,
        )),
    }
}

/// The callback URL handed to the provider when placing a call, carrying
/// the integration's webhook verify key
pub fn webhook_url(public_url: &str, medium: Medium, settings: &IntegrationSettings) -> String {
    let key = settings.webhook_verify_token.as_deref().unwrap_or("");
    format!(
        "{}/telephony/{}/webhook?key={}",
        public_url,
        medium.slug(),
        key
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_url_carries_verify_key() {
        let mut settings = IntegrationSettings::disabled(Medium::Plivo);
        settings.webhook_verify_token = Some("tok123".to_string());
        assert_eq!(
            webhook_url("https://crm.example.com", Medium::Plivo, &settings),
            "https://crm.example.com/telephony/plivo/webhook?key=tok123"
        );
    }

    #[test]
    fn test_websprix_slug_in_webhook_url() {
        let settings = IntegrationSettings::disabled(Medium::WebSprix);
        assert_eq!(
            webhook_url("http://localhost:8000", Medium::WebSprix, &settings),
            "http://localhost:8000/telephony/websprix/webhook?key="
        );
    }
}
