//! Platform logins, registration and the other calls a player makes
//! before holding a session ticket. All of them carry the title id and no
//! credential.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{EntityTokenResponse, GetPlayerCombinedInfoRequestParams, UserSettings};

/// RSA key used to encrypt `EncryptedRequest` payloads of later logins.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitlePublicKeyRequest {
    pub title_id: Option<String>,
    pub title_shared_secret: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitlePublicKeyResult {
    #[serde(rename = "RSAPublicKey")]
    pub rsa_public_key: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetWindowsHelloChallengeRequest {
    pub public_key_hint: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetWindowsHelloChallengeResponse {
    pub challenge: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithFacebookInstantGamesIdRequest {
    pub create_account: Option<bool>,
    pub encrypted_request: Option<String>,
    pub facebook_instant_games_signature: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub player_secret: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithFacebookRequest {
    pub access_token: Option<String>,
    pub create_account: Option<bool>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub player_secret: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithGameCenterRequest {
    pub create_account: Option<bool>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub player_id: Option<String>,
    pub player_secret: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithGoogleAccountRequest {
    pub create_account: Option<bool>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub player_secret: Option<String>,
    pub server_auth_code: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithIosDeviceIdRequest {
    pub create_account: Option<bool>,
    pub device_id: Option<String>,
    pub device_model: Option<String>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    #[serde(rename = "OS")]
    pub os: Option<String>,
    pub player_secret: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithKongregateRequest {
    pub auth_ticket: Option<String>,
    pub create_account: Option<bool>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub kongregate_id: Option<String>,
    pub login_title_player_account_entity: Option<bool>,
    pub player_secret: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithNintendoSwitchDeviceIdRequest {
    pub create_account: Option<bool>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub nintendo_switch_device_id: Option<String>,
    pub player_secret: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithSteamRequest {
    pub create_account: Option<bool>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub player_secret: Option<String>,
    pub steam_ticket: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithTwitchRequest {
    pub access_token: Option<String>,
    pub create_account: Option<bool>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub player_secret: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithWindowsHelloRequest {
    pub challenge_signature: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub public_key_hint: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithXboxRequest {
    pub create_account: Option<bool>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub player_secret: Option<String>,
    pub title_id: Option<String>,
    pub xbox_token: Option<String>,
}

/// Creates a username/password account. `RequireBothUsernameAndEmail`
/// defaults to true on the service.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterPlayFabUserRequest {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub password: Option<String>,
    pub player_secret: Option<String>,
    pub require_both_username_and_email: Option<bool>,
    pub title_id: Option<String>,
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterPlayFabUserResult {
    pub entity_token: Option<EntityTokenResponse>,
    pub play_fab_id: Option<String>,
    pub session_ticket: Option<String>,
    pub settings_for_user: Option<UserSettings>,
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterWithWindowsHelloRequest {
    pub device_name: Option<String>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub player_secret: Option<String>,
    pub public_key: Option<String>,
    pub title_id: Option<String>,
    pub user_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendAccountRecoveryEmailRequest {
    pub email: Option<String>,
    pub email_template_id: Option<String>,
    pub title_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendAccountRecoveryEmailResult {}
