//! Friend leaderboards, statistic versions, shared-group writes, publisher
//! data and custom events.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::{PlayerLeaderboardEntry, PlayerProfileViewConstraints, UserDataPermission};
use crate::models::Timestamp;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContentDownloadUrlRequest {
    pub http_method: Option<String>,
    pub key: Option<String>,
    #[serde(rename = "ThruCDN")]
    pub thru_cdn: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetContentDownloadUrlResult {
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

/// Leaderboard restricted to the player's friends, centred on the player.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFriendLeaderboardAroundPlayerRequest {
    pub include_facebook_friends: Option<bool>,
    pub include_steam_friends: Option<bool>,
    pub max_results_count: Option<i32>,
    pub play_fab_id: Option<String>,
    pub profile_constraints: Option<PlayerProfileViewConstraints>,
    pub statistic_name: Option<String>,
    pub version: Option<i32>,
    pub xbox_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFriendLeaderboardAroundPlayerResult {
    pub leaderboard: Option<Vec<PlayerLeaderboardEntry>>,
    pub next_reset: Option<Timestamp>,
    pub version: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFriendLeaderboardRequest {
    pub include_facebook_friends: Option<bool>,
    pub include_steam_friends: Option<bool>,
    pub max_results_count: Option<i32>,
    pub profile_constraints: Option<PlayerProfileViewConstraints>,
    pub start_position: Option<i32>,
    pub statistic_name: Option<String>,
    pub version: Option<i32>,
    pub xbox_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLeaderboardAroundPlayerRequest {
    pub max_results_count: Option<i32>,
    pub play_fab_id: Option<String>,
    pub profile_constraints: Option<PlayerProfileViewConstraints>,
    pub statistic_name: Option<String>,
    pub version: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLeaderboardAroundPlayerResult {
    pub leaderboard: Option<Vec<PlayerLeaderboardEntry>>,
    pub next_reset: Option<Timestamp>,
    pub version: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerStatisticVersionsRequest {
    pub statistic_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerStatisticVersionsResult {
    pub statistic_versions: Option<Vec<PlayerStatisticVersion>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPublisherDataRequest {
    pub keys: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPublisherDataResult {
    pub data: Option<BTreeMap<String, String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerStatisticVersion {
    pub activation_time: Option<Timestamp>,
    pub deactivation_time: Option<Timestamp>,
    pub scheduled_activation_time: Option<Timestamp>,
    pub scheduled_deactivation_time: Option<Timestamp>,
    pub statistic_name: Option<String>,
    pub version: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveSharedGroupMembersRequest {
    pub play_fab_ids: Option<Vec<String>>,
    pub shared_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoveSharedGroupMembersResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportPlayerClientRequest {
    pub comment: Option<String>,
    pub reportee_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportPlayerClientResult {
    pub submissions_remaining: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetFriendTagsRequest {
    pub friend_play_fab_id: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetFriendTagsResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSharedGroupDataRequest {
    pub data: Option<BTreeMap<String, String>>,
    pub keys_to_remove: Option<Vec<String>>,
    pub permission: Option<UserDataPermission>,
    pub shared_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSharedGroupDataResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteClientCharacterEventRequest {
    pub body: Option<BTreeMap<String, Value>>,
    pub character_id: Option<String>,
    pub event_name: Option<String>,
    pub timestamp: Option<Timestamp>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteTitleEventRequest {
    pub body: Option<BTreeMap<String, Value>>,
    pub event_name: Option<String>,
    pub timestamp: Option<Timestamp>,
}
