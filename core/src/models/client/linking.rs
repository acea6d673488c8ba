//! Linking platform identities to the signed-in account, and the
//! per-platform records that `UserAccountInfo` reports back.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{Currency, TitleActivationStatus};

// ---------------------------------------------------------------------------
// Linked identities
// ---------------------------------------------------------------------------

/// An identity from a service PlayFab has no native integration for.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenericServiceId {
    pub service_name: Option<String>,
    pub user_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserFacebookInfo {
    pub facebook_id: Option<String>,
    pub full_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserFacebookInstantGamesIdInfo {
    pub facebook_instant_games_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserGameCenterInfo {
    pub game_center_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserGoogleInfo {
    pub google_email: Option<String>,
    pub google_gender: Option<String>,
    pub google_id: Option<String>,
    pub google_locale: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserIosDeviceInfo {
    pub ios_device_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserKongregateInfo {
    pub kongregate_id: Option<String>,
    pub kongregate_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserNintendoSwitchDeviceIdInfo {
    pub nintendo_switch_device_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserOpenIdInfo {
    pub connection_id: Option<String>,
    pub issuer: Option<String>,
    pub subject: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPsnInfo {
    pub psn_account_id: Option<String>,
    pub psn_online_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserSteamInfo {
    pub steam_activation_status: Option<TitleActivationStatus>,
    pub steam_country: Option<String>,
    pub steam_currency: Option<Currency>,
    pub steam_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserTwitchInfo {
    pub twitch_id: Option<String>,
    pub twitch_user_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserWindowsHelloInfo {
    pub windows_hello_device_name: Option<String>,
    pub windows_hello_public_key_hash: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserXboxInfo {
    pub xbox_user_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Link and unlink
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddGenericIdRequest {
    pub generic_id: Option<GenericServiceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddGenericIdResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkAndroidDeviceIdRequest {
    pub android_device: Option<String>,
    pub android_device_id: Option<String>,
    /// Move the identity over if another account already holds it.
    pub force_link: Option<bool>,
    #[serde(rename = "OS")]
    pub os: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkAndroidDeviceIdResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkFacebookAccountRequest {
    pub access_token: Option<String>,
    pub force_link: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkFacebookAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkFacebookInstantGamesIdRequest {
    pub facebook_instant_games_signature: Option<String>,
    pub force_link: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkFacebookInstantGamesIdResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkGameCenterAccountRequest {
    pub force_link: Option<bool>,
    pub game_center_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkGameCenterAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkGoogleAccountRequest {
    pub force_link: Option<bool>,
    pub server_auth_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkGoogleAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkIosDeviceIdRequest {
    pub device_id: Option<String>,
    pub device_model: Option<String>,
    pub force_link: Option<bool>,
    #[serde(rename = "OS")]
    pub os: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkIosDeviceIdResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkKongregateAccountRequest {
    pub auth_ticket: Option<String>,
    pub force_link: Option<bool>,
    pub kongregate_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkKongregateAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkNintendoSwitchDeviceIdRequest {
    pub force_link: Option<bool>,
    pub nintendo_switch_device_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkNintendoSwitchDeviceIdResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkSteamAccountRequest {
    pub force_link: Option<bool>,
    pub steam_ticket: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkSteamAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkTwitchAccountRequest {
    pub access_token: Option<String>,
    pub force_link: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkTwitchAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkWindowsHelloAccountRequest {
    pub device_name: Option<String>,
    pub force_link: Option<bool>,
    pub public_key: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkWindowsHelloAccountResponse {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkXboxAccountRequest {
    pub force_link: Option<bool>,
    pub xbox_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkXboxAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveGenericIdRequest {
    pub generic_id: Option<GenericServiceId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoveGenericIdResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnlinkAndroidDeviceIdRequest {
    pub android_device_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkAndroidDeviceIdResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkFacebookAccountRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkFacebookAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnlinkFacebookInstantGamesIdRequest {
    pub facebook_instant_games_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkFacebookInstantGamesIdResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkGameCenterAccountRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkGameCenterAccountResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkGoogleAccountRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkGoogleAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnlinkIosDeviceIdRequest {
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkIosDeviceIdResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkKongregateAccountRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkKongregateAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnlinkNintendoSwitchDeviceIdRequest {
    pub nintendo_switch_device_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkNintendoSwitchDeviceIdResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkSteamAccountRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkSteamAccountResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkTwitchAccountRequest {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkTwitchAccountResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnlinkWindowsHelloAccountRequest {
    pub public_key_hint: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkWindowsHelloAccountResponse {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnlinkXboxAccountRequest {
    pub xbox_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkXboxAccountResult {}
