//! Matchmaking and game-server sessions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{GameInstanceState, MatchmakeStatus, Region};
use crate::models::Timestamp;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CollectionFilter {
    pub excludes: Option<Vec<DataContainer>>,
    pub includes: Option<Vec<DataContainer>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataContainer {
    pub data: Option<BTreeMap<String, String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentGamesRequest {
    pub build_version: Option<String>,
    pub game_mode: Option<String>,
    pub region: Option<Region>,
    pub statistic_name: Option<String>,
    pub tag_filter: Option<CollectionFilter>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentGamesResult {
    pub game_count: Option<i32>,
    pub games: Option<Vec<GameInfo>>,
    pub player_count: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameInfo {
    pub build_version: Option<String>,
    pub game_mode: Option<String>,
    pub game_server_data: Option<String>,
    pub game_server_state_enum: Option<GameInstanceState>,
    pub last_heartbeat: Option<Timestamp>,
    #[serde(rename = "LobbyID")]
    pub lobby_id: Option<String>,
    pub max_players: Option<i32>,
    pub player_user_ids: Option<Vec<String>>,
    pub region: Option<Region>,
    pub run_time: Option<i64>,
    #[serde(rename = "ServerIPV4Address")]
    pub server_ipv4_address: Option<String>,
    #[serde(rename = "ServerIPV6Address")]
    pub server_ipv6_address: Option<String>,
    pub server_port: Option<i32>,
    #[serde(rename = "ServerPublicDNSName")]
    pub server_public_dns_name: Option<String>,
    pub statistic_name: Option<String>,
    pub tags: Option<BTreeMap<String, String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameServerRegionsRequest {
    pub build_version: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameServerRegionsResult {
    pub regions: Option<Vec<RegionInfo>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchmakeRequest {
    pub build_version: Option<String>,
    pub character_id: Option<String>,
    pub game_mode: Option<String>,
    pub lobby_id: Option<String>,
    pub region: Option<Region>,
    pub start_new_if_none_found: Option<bool>,
    pub statistic_name: Option<String>,
    pub tag_filter: Option<CollectionFilter>,
}

/// `Waiting` means the ticket is queued. Poll again after
/// `PollWaitTimeMS`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchmakeResult {
    pub expires: Option<String>,
    #[serde(rename = "LobbyID")]
    pub lobby_id: Option<String>,
    #[serde(rename = "PollWaitTimeMS")]
    pub poll_wait_time_ms: Option<i32>,
    #[serde(rename = "ServerIPV4Address")]
    pub server_ipv4_address: Option<String>,
    #[serde(rename = "ServerIPV6Address")]
    pub server_ipv6_address: Option<String>,
    pub server_port: Option<i32>,
    #[serde(rename = "ServerPublicDNSName")]
    pub server_public_dns_name: Option<String>,
    pub status: Option<MatchmakeStatus>,
    pub ticket: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegionInfo {
    pub available: Option<bool>,
    pub name: Option<String>,
    pub ping_url: Option<String>,
    pub region: Option<Region>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartGameRequest {
    pub build_version: Option<String>,
    pub character_id: Option<String>,
    pub custom_command_line_data: Option<String>,
    pub game_mode: Option<String>,
    pub region: Option<Region>,
    pub statistic_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartGameResult {
    pub expires: Option<String>,
    #[serde(rename = "LobbyID")]
    pub lobby_id: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "ServerIPV4Address")]
    pub server_ipv4_address: Option<String>,
    #[serde(rename = "ServerIPV6Address")]
    pub server_ipv6_address: Option<String>,
    pub server_port: Option<i32>,
    #[serde(rename = "ServerPublicDNSName")]
    pub server_public_dns_name: Option<String>,
    pub ticket: Option<String>,
}
