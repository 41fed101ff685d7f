//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CallLogResponse, ContactMatchResponse, IntegrationStatusResponse, MakeCallRequest,
    MakeCallResponse, QueueActionRequest, QueueStatusResponse, SettingsResponse,
    TransferTargetsResponse, UpdateSettingsRequest, UserSettingsResponse, WebhookAck,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Webhook endpoints
        super::webhook::handle_webhook,
        // Call endpoints
        super::call::make_call,
        super::calls::get_call,
        // Settings endpoints
        super::settings::get_settings,
        super::settings::update_settings,
        super::settings::get_status,
        // Contact endpoints
        super::contact::lookup_contact,
        // Queue endpoints
        super::queue::join_queue,
        super::queue::leave_queue,
        super::queue::queue_status,
        // WebSprix PBX endpoints
        super::websprix::user_settings,
        super::websprix::transfer_targets,
    ),
    components(schemas(
        MakeCallRequest,
        MakeCallResponse,
        CallLogResponse,
        SettingsResponse,
        UpdateSettingsRequest,
        IntegrationStatusResponse,
        ContactMatchResponse,
        QueueActionRequest,
        QueueStatusResponse,
        UserSettingsResponse,
        TransferTargetsResponse,
        WebhookAck,
    )),
    tags(
        (name = "Webhook", description = "Provider call-event callbacks"),
        (name = "Call", description = "Outbound calls and call logs"),
        (name = "Settings", description = "Integration configuration"),
        (name = "Contact", description = "Phone-number resolution"),
        (name = "Queue", description = "Agent queue membership"),
        (name = "WebSprix", description = "PBX-specific extras")
    ),
    info(
        title = "Dialtone API",
        description = "CRM telephony integration: call logging, outbound calls, provider webhooks"
    )
)]
pub struct ApiDoc;
