//! Translating platform identifiers into PlayFab ids.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::GenericServiceId;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FacebookInstantGamesPlayFabIdPair {
    pub facebook_instant_games_id: Option<String>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FacebookPlayFabIdPair {
    pub facebook_id: Option<String>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameCenterPlayFabIdPair {
    pub game_center_id: Option<String>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenericPlayFabIdPair {
    pub generic_id: Option<GenericServiceId>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromFacebookIdsRequest {
    #[serde(rename = "FacebookIDs")]
    pub facebook_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromFacebookIdsResult {
    pub data: Option<Vec<FacebookPlayFabIdPair>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromFacebookInstantGamesIdsRequest {
    pub facebook_instant_games_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromFacebookInstantGamesIdsResult {
    pub data: Option<Vec<FacebookInstantGamesPlayFabIdPair>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromGameCenterIdsRequest {
    #[serde(rename = "GameCenterIDs")]
    pub game_center_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromGameCenterIdsResult {
    pub data: Option<Vec<GameCenterPlayFabIdPair>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromGenericIdsRequest {
    #[serde(rename = "GenericIDs")]
    pub generic_ids: Option<Vec<GenericServiceId>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromGenericIdsResult {
    pub data: Option<Vec<GenericPlayFabIdPair>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromGoogleIdsRequest {
    #[serde(rename = "GoogleIDs")]
    pub google_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromGoogleIdsResult {
    pub data: Option<Vec<GooglePlayFabIdPair>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromKongregateIdsRequest {
    #[serde(rename = "KongregateIDs")]
    pub kongregate_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromKongregateIdsResult {
    pub data: Option<Vec<KongregatePlayFabIdPair>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromNintendoSwitchDeviceIdsRequest {
    pub nintendo_switch_device_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromNintendoSwitchDeviceIdsResult {
    pub data: Option<Vec<NintendoSwitchPlayFabIdPair>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromSteamIdsRequest {
    #[serde(rename = "SteamStringIDs")]
    pub steam_string_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromSteamIdsResult {
    pub data: Option<Vec<SteamPlayFabIdPair>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromTwitchIdsRequest {
    pub twitch_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayFabIdsFromTwitchIdsResult {
    pub data: Option<Vec<TwitchPlayFabIdPair>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GooglePlayFabIdPair {
    pub google_id: Option<String>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KongregatePlayFabIdPair {
    pub kongregate_id: Option<String>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NintendoSwitchPlayFabIdPair {
    pub nintendo_switch_device_id: Option<String>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SteamPlayFabIdPair {
    pub play_fab_id: Option<String>,
    pub steam_string_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TwitchPlayFabIdPair {
    pub play_fab_id: Option<String>,
    pub twitch_id: Option<String>,
}
