//! Characters owned by a player and the data, statistics, inventory and
//! leaderboards kept per character.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{ItemInstance, UserDataPermission, UserDataRecord, VirtualCurrencyRechargeTime};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterInventory {
    pub character_id: Option<String>,
    pub inventory: Option<Vec<ItemInstance>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterLeaderboardEntry {
    pub character_id: Option<String>,
    pub character_name: Option<String>,
    pub character_type: Option<String>,
    pub display_name: Option<String>,
    pub play_fab_id: Option<String>,
    pub position: Option<i32>,
    pub stat_value: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterResult {
    pub character_id: Option<String>,
    pub character_name: Option<String>,
    pub character_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCharacterDataRequest {
    pub character_id: Option<String>,
    pub if_changed_from_data_version: Option<i64>,
    pub keys: Option<Vec<String>>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCharacterDataResult {
    pub character_id: Option<String>,
    pub data: Option<BTreeMap<String, UserDataRecord>>,
    pub data_version: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCharacterInventoryRequest {
    pub catalog_version: Option<String>,
    pub character_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCharacterInventoryResult {
    pub character_id: Option<String>,
    pub inventory: Option<Vec<ItemInstance>>,
    pub virtual_currency: Option<BTreeMap<String, i32>>,
    pub virtual_currency_recharge_times: Option<BTreeMap<String, VirtualCurrencyRechargeTime>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCharacterLeaderboardRequest {
    pub character_type: Option<String>,
    pub max_results_count: Option<i32>,
    pub start_position: Option<i32>,
    pub statistic_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCharacterLeaderboardResult {
    pub leaderboard: Option<Vec<CharacterLeaderboardEntry>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCharacterStatisticsRequest {
    pub character_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCharacterStatisticsResult {
    pub character_statistics: Option<BTreeMap<String, i32>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLeaderboardAroundCharacterRequest {
    pub character_id: Option<String>,
    pub character_type: Option<String>,
    pub max_results_count: Option<i32>,
    pub statistic_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLeaderboardAroundCharacterResult {
    pub leaderboard: Option<Vec<CharacterLeaderboardEntry>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLeaderboardForUsersCharactersRequest {
    pub max_results_count: Option<i32>,
    pub statistic_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLeaderboardForUsersCharactersResult {
    pub leaderboard: Option<Vec<CharacterLeaderboardEntry>>,
}

/// Consumes a character token item from the player's inventory.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GrantCharacterToUserRequest {
    pub catalog_version: Option<String>,
    pub character_name: Option<String>,
    pub item_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GrantCharacterToUserResult {
    pub character_id: Option<String>,
    pub character_type: Option<String>,
    pub result: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersCharactersRequest {
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersCharactersResult {
    pub characters: Option<Vec<CharacterResult>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCharacterDataRequest {
    pub character_id: Option<String>,
    pub data: Option<BTreeMap<String, String>>,
    pub keys_to_remove: Option<Vec<String>>,
    pub permission: Option<UserDataPermission>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCharacterDataResult {
    pub data_version: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCharacterStatisticsRequest {
    pub character_id: Option<String>,
    pub character_statistics: Option<BTreeMap<String, i32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCharacterStatisticsResult {}
