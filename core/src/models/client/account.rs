//! Contact details, device reports and push registration, plus the segment,
//! tag, location and membership records of a player.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::{ContinentCode, CountryCode, PushNotificationPlatform, SubscriptionProviderStatus};
use crate::models::Timestamp;

// ---------------------------------------------------------------------------
// Contact and device
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddOrUpdateContactEmailRequest {
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddOrUpdateContactEmailResult {}

/// Free-form device details reported after login.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceInfoRequest {
    pub info: Option<BTreeMap<String, Value>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPhotonAuthenticationTokenRequest {
    pub photon_application_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPhotonAuthenticationTokenResult {
    pub photon_custom_authentication_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoveContactEmailRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoveContactEmailResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetPlayerSecretRequest {
    pub encrypted_request: Option<String>,
    pub player_secret: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetPlayerSecretResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAvatarUrlRequest {
    pub image_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Push notifications
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterForIosPushNotificationRequest {
    pub confirmation_message: Option<String>,
    pub device_token: Option<String>,
    pub send_push_notification_confirmation: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterForIosPushNotificationResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AndroidDevicePushNotificationRegistrationRequest {
    pub confirmation_message: Option<String>,
    pub device_token: Option<String>,
    pub send_push_notification_confirmation: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AndroidDevicePushNotificationRegistrationResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PushNotificationRegistrationModel {
    #[serde(rename = "NotificationEndpointARN")]
    pub notification_endpoint_arn: Option<String>,
    pub platform: Option<PushNotificationPlatform>,
}

// ---------------------------------------------------------------------------
// Segments, tags and memberships
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetPlayerSegmentsRequest {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerSegmentsResult {
    pub segments: Option<Vec<GetSegmentResult>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerTagsRequest {
    pub namespace: Option<String>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerTagsResult {
    pub play_fab_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSegmentResult {
    #[serde(rename = "ABTestParent")]
    pub ab_test_parent: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationModel {
    pub city: Option<String>,
    pub continent_code: Option<ContinentCode>,
    pub country_code: Option<CountryCode>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MembershipModel {
    pub is_active: Option<bool>,
    pub membership_expiration: Option<Timestamp>,
    pub membership_id: Option<String>,
    pub override_expiration: Option<Timestamp>,
    pub subscriptions: Option<Vec<SubscriptionModel>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionModel {
    pub expiration: Option<Timestamp>,
    pub initial_subscription_time: Option<Timestamp>,
    pub is_active: Option<bool>,
    pub status: Option<SubscriptionProviderStatus>,
    pub subscription_id: Option<String>,
    pub subscription_item_id: Option<String>,
    pub subscription_provider: Option<String>,
}
