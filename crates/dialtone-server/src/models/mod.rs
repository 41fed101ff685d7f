//! Request/response DTOs for the HTTP surface

pub mod call;
pub mod contact;
pub mod queue;
pub mod settings;
pub mod webhook;
pub mod websprix;

pub use call::{CallLogResponse, MakeCallRequest, MakeCallResponse};
pub use contact::{ContactMatchResponse, ContactQuery};
pub use queue::{QueueActionRequest, QueueStatusResponse};
pub use settings::{IntegrationStatusResponse, SettingsResponse, UpdateSettingsRequest};
pub use webhook::{WebhookAck, WebhookQuery};
pub use websprix::{TransferTargetsResponse, UserSettingsQuery, UserSettingsResponse};
