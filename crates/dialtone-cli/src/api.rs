//! Dialtone API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for Dialtone
pub struct DialtoneClient {
    client: Client,
    base_url: String,
    api_key: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct MakeCallResponse {
    pub call_id: String,
}

#[derive(Debug, Deserialize)]
pub struct CallLogResponse {
    pub id: String,
    pub direction: String,
    pub from_number: String,
    pub to_number: String,
    pub medium: String,
    pub status: String,
    pub duration: i64,
    pub reference_entity: Option<String>,
    pub reference_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IntegrationStatusResponse {
    pub medium: String,
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct SettingsResponse {
    pub medium: String,
    pub enabled: bool,
    pub auth_id: Option<String>,
    pub base_url: Option<String>,
    pub record_calls: bool,
    pub queue_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ContactMatchResponse {
    pub name: Option<String>,
    pub reference_entity: Option<String>,
    pub reference_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QueueStatusResponse {
    pub joined: bool,
    pub queue_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct MakeCallRequest<'a> {
    agent: &'a str,
    to_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caller_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct QueueActionRequest<'a> {
    agent: &'a str,
}

impl DialtoneClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    async fn parse<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }
        resp.json().await.context("Failed to parse response")
    }

    /// Place an outbound call
    pub async fn make_call(
        &self,
        medium: &str,
        agent: &str,
        to_number: &str,
        from_number: Option<&str>,
        caller_id: Option<&str>,
    ) -> Result<MakeCallResponse> {
        let url = format!("{}/telephony/{}/call", self.base_url, medium);
        let request = MakeCallRequest {
            agent,
            to_number,
            from_number,
            caller_id,
        };

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .context("Failed to connect to Dialtone API")?;

        Self::parse(resp).await
    }

    /// Fetch one call log
    pub async fn get_call(&self, call_id: &str) -> Result<CallLogResponse> {
        let url = format!("{}/telephony/calls/{}", self.base_url, call_id);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Dialtone API")?;

        Self::parse(resp).await
    }

    /// Integration enabled/disabled state
    pub async fn get_status(&self, medium: &str) -> Result<IntegrationStatusResponse> {
        let url = format!("{}/telephony/{}/status", self.base_url, medium);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Dialtone API")?;

        Self::parse(resp).await
    }

    /// Current settings, secrets masked by the server
    pub async fn get_settings(&self, medium: &str) -> Result<SettingsResponse> {
        let url = format!("{}/telephony/{}/settings", self.base_url, medium);
        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Dialtone API")?;

        Self::parse(resp).await
    }

    /// Resolve a phone number to its CRM records
    pub async fn lookup_contact(&self, phone: &str) -> Result<ContactMatchResponse> {
        let url = format!("{}/telephony/contacts", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("phone", phone)])
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Dialtone API")?;

        Self::parse(resp).await
    }

    /// Join the inbound call queue
    pub async fn queue_join(&self, medium: &str, agent: &str) -> Result<QueueStatusResponse> {
        self.queue_action(medium, agent, "join").await
    }

    /// Leave the inbound call queue
    pub async fn queue_leave(&self, medium: &str, agent: &str) -> Result<QueueStatusResponse> {
        self.queue_action(medium, agent, "leave").await
    }

    async fn queue_action(
        &self,
        medium: &str,
        agent: &str,
        action: &str,
    ) -> Result<QueueStatusResponse> {
        let url = format!("{}/telephony/{}/queue/{}", self.base_url, medium, action);
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&QueueActionRequest { agent })
            .send()
            .await
            .context("Failed to connect to Dialtone API")?;

        Self::parse(resp).await
    }

    /// Current queue membership
    pub async fn queue_status(&self, medium: &str, agent: &str) -> Result<QueueStatusResponse> {
        let url = format!("{}/telephony/{}/queue/status", self.base_url, medium);
        let resp = self
            .client
            .get(&url)
            .query(&[("agent", agent)])
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Dialtone API")?;

        Self::parse(resp).await
    }
}
