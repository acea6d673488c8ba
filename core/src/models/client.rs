//! Request and result records for the client API (`/Client/*`).
//!
//! Every field is optional: `None` is omitted from the request body so the
//! server applies its own default, and a key the server leaves out
//! deserializes to `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::timestamp::Timestamp;
use super::EntityKey;
pub use super::EmptyResponse;

mod account;
mod characters;
mod codes;
mod commerce;
mod linking;
mod login;
mod lookup;
mod matchmaking;
mod social;

pub use account::*;
pub use characters::*;
pub use codes::*;
pub use commerce::*;
pub use linking::*;
pub use login::*;
pub use lookup::*;
pub use matchmaking::*;
pub use social::*;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloudScriptRevisionOption {
    Live,
    Latest,
    Specific,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmailVerificationStatus {
    Unverified,
    Pending,
    Confirmed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameInstanceState {
    Open,
    Closed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoginIdentityProvider {
    PlayFab,
    Custom,
    GameCenter,
    GooglePlay,
    Steam,
    XBoxLive,
    #[serde(rename = "PSN")]
    Psn,
    Kongregate,
    Facebook,
    #[serde(rename = "IOSDevice")]
    IosDevice,
    AndroidDevice,
    Twitch,
    WindowsHello,
    GameServer,
    CustomServer,
    NintendoSwitch,
    FacebookInstantGames,
    OpenIdConnect,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchmakeStatus {
    Complete,
    Waiting,
    GameNotFound,
    NoAvailableSlots,
    SessionClosed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PushNotificationPlatform {
    ApplePushNotificationService,
    GoogleCloudMessaging,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "USCentral")]
    UsCentral,
    #[serde(rename = "USEast")]
    UsEast,
    #[serde(rename = "EUWest")]
    EuWest,
    Singapore,
    Japan,
    Brazil,
    Australia,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    Admin,
    BackEnd,
    GameClient,
    GameServer,
    Partner,
    Custom,
    #[serde(rename = "API")]
    Api,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionProviderStatus {
    NoError,
    Cancelled,
    UnknownError,
    BillingError,
    ProductUnavailable,
    CustomerDidNotAcceptPriceChange,
    FreeTrial,
    PaymentPending,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TitleActivationStatus {
    None,
    ActivatedTitleKey,
    PendingSteam,
    ActivatedSteam,
    RevokedSteam,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeStatus {
    Invalid,
    Opening,
    Open,
    Accepting,
    Accepted,
    Filled,
    Cancelled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    CreateCart,
    Init,
    Approved,
    Succeeded,
    FailedByProvider,
    DisputePending,
    RefundPending,
    Refunded,
    RefundFailed,
    ChargedBack,
    FailedByUber,
    FailedByPlayFab,
    Revoked,
    TradePending,
    Traded,
    Upgraded,
    StackPending,
    Stacked,
    Other,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserDataPermission {
    Private,
    Public,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserOrigination {
    Organic,
    Steam,
    Google,
    Amazon,
    Facebook,
    Kongregate,
    GamersFirst,
    #[serde(rename = "IOS")]
    Ios,
    LoadTest,
    Android,
    #[serde(rename = "PSN")]
    Psn,
    GameCenter,
    CustomId,
    XboxLive,
    Parse,
    Twitch,
    WindowsHello,
    ServerCustomId,
    NintendoSwitchDeviceId,
    FacebookInstantGamesId,
    OpenIdConnect,
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Which parts of the player's combined info to return alongside a login.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerCombinedInfoRequestParams {
    pub get_character_inventories: Option<bool>,
    pub get_character_list: Option<bool>,
    pub get_player_profile: Option<bool>,
    pub get_player_statistics: Option<bool>,
    pub get_title_data: Option<bool>,
    pub get_user_account_info: Option<bool>,
    pub get_user_data: Option<bool>,
    pub get_user_inventory: Option<bool>,
    pub get_user_read_only_data: Option<bool>,
    pub get_user_virtual_currency: Option<bool>,
    pub player_statistic_names: Option<Vec<String>>,
    pub profile_constraints: Option<PlayerProfileViewConstraints>,
    pub title_data_keys: Option<Vec<String>>,
    pub user_data_keys: Option<Vec<String>>,
    pub user_read_only_data_keys: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerCombinedInfoResultPayload {
    pub account_info: Option<UserAccountInfo>,
    pub character_inventories: Option<Vec<CharacterInventory>>,
    pub character_list: Option<Vec<CharacterResult>>,
    pub player_profile: Option<PlayerProfileModel>,
    pub player_statistics: Option<Vec<StatisticValue>>,
    pub title_data: Option<BTreeMap<String, String>>,
    pub user_data: Option<BTreeMap<String, UserDataRecord>>,
    pub user_data_version: Option<i64>,
    pub user_inventory: Option<Vec<ItemInstance>>,
    pub user_read_only_data: Option<BTreeMap<String, UserDataRecord>>,
    pub user_read_only_data_version: Option<i64>,
    pub user_virtual_currency: Option<BTreeMap<String, i32>>,
    pub user_virtual_currency_recharge_times: Option<BTreeMap<String, VirtualCurrencyRechargeTime>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerCombinedInfoRequest {
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerCombinedInfoResult {
    pub info_result_payload: Option<GetPlayerCombinedInfoResultPayload>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithCustomIdRequest {
    pub create_account: Option<bool>,
    pub custom_id: Option<String>,
    pub encrypted_request: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub player_secret: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithEmailAddressRequest {
    pub email: Option<String>,
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub password: Option<String>,
    pub title_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithPlayFabRequest {
    pub info_request_parameters: Option<GetPlayerCombinedInfoRequestParams>,
    pub login_title_player_account_entity: Option<bool>,
    pub password: Option<String>,
    pub title_id: Option<String>,
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithAndroidDeviceIdRequest {
    pub android_device: Option<String>,
    pub android_device_id: Option<String>,
    pub create_account: Option<bool>,
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
pub struct EntityTokenResponse {
    pub entity: Option<EntityKey>,
    pub entity_token: Option<String>,
    pub token_expiration: Option<Timestamp>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserSettings {
    pub gather_device_info: Option<bool>,
    pub gather_focus_info: Option<bool>,
    pub needs_attribution: Option<bool>,
}

/// Returned by every `LoginWith*` call.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginResult {
    pub entity_token: Option<EntityTokenResponse>,
    pub info_result_payload: Option<GetPlayerCombinedInfoResultPayload>,
    pub last_login_time: Option<Timestamp>,
    pub newly_created: Option<bool>,
    pub play_fab_id: Option<String>,
    pub session_ticket: Option<String>,
    pub settings_for_user: Option<UserSettings>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeInstallRequest {
    pub adid: Option<String>,
    pub idfa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeInstallResult {}

// ---------------------------------------------------------------------------
// Account management
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddUsernamePasswordRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddUsernamePasswordResult {
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountInfoRequest {
    pub email: Option<String>,
    pub play_fab_id: Option<String>,
    pub title_display_name: Option<String>,
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAccountInfoResult {
    pub account_info: Option<UserAccountInfo>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAndroidDeviceInfo {
    pub android_device_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserCustomIdInfo {
    pub custom_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPrivateAccountInfo {
    pub email: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserTitleInfo {
    pub avatar_url: Option<String>,
    pub created: Option<Timestamp>,
    pub display_name: Option<String>,
    pub first_login: Option<Timestamp>,
    #[serde(rename = "isBanned")]
    pub is_banned: Option<bool>,
    pub last_login: Option<Timestamp>,
    pub origination: Option<UserOrigination>,
    pub title_player_account: Option<EntityKey>,
}

/// The linked identities and title-scoped details of one player account.
///
/// Platform-specific info blocks this SDK does not model are dropped on
/// deserialization.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAccountInfo {
    pub android_device_info: Option<UserAndroidDeviceInfo>,
    pub created: Option<Timestamp>,
    pub custom_id_info: Option<UserCustomIdInfo>,
    pub facebook_info: Option<UserFacebookInfo>,
    pub facebook_instant_games_id_info: Option<UserFacebookInstantGamesIdInfo>,
    pub game_center_info: Option<UserGameCenterInfo>,
    pub google_info: Option<UserGoogleInfo>,
    pub ios_device_info: Option<UserIosDeviceInfo>,
    pub kongregate_info: Option<UserKongregateInfo>,
    pub nintendo_switch_device_id_info: Option<UserNintendoSwitchDeviceIdInfo>,
    pub open_id_info: Option<Vec<UserOpenIdInfo>>,
    pub play_fab_id: Option<String>,
    pub private_info: Option<UserPrivateAccountInfo>,
    pub psn_info: Option<UserPsnInfo>,
    pub steam_info: Option<UserSteamInfo>,
    pub title_info: Option<UserTitleInfo>,
    pub twitch_info: Option<UserTwitchInfo>,
    pub username: Option<String>,
    pub windows_hello_info: Option<UserWindowsHelloInfo>,
    pub xbox_info: Option<UserXboxInfo>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkCustomIdRequest {
    pub custom_id: Option<String>,
    pub force_link: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkCustomIdResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnlinkCustomIdRequest {
    pub custom_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlinkCustomIdResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserTitleDisplayNameRequest {
    pub display_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserTitleDisplayNameResult {
    pub display_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Player profile
// ---------------------------------------------------------------------------

/// Selects which profile fields the server should populate.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerProfileViewConstraints {
    pub show_avatar_url: Option<bool>,
    pub show_banned_until: Option<bool>,
    pub show_campaign_attributions: Option<bool>,
    pub show_contact_email_addresses: Option<bool>,
    pub show_created: Option<bool>,
    pub show_display_name: Option<bool>,
    pub show_last_login: Option<bool>,
    pub show_linked_accounts: Option<bool>,
    pub show_locations: Option<bool>,
    pub show_memberships: Option<bool>,
    pub show_origination: Option<bool>,
    pub show_push_notification_registrations: Option<bool>,
    pub show_statistics: Option<bool>,
    pub show_tags: Option<bool>,
    pub show_total_value_to_date_in_usd: Option<bool>,
    pub show_values_to_date: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdCampaignAttributionModel {
    pub attributed_at: Option<Timestamp>,
    pub campaign_id: Option<String>,
    pub platform: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactEmailInfoModel {
    pub email_address: Option<String>,
    pub name: Option<String>,
    pub verification_status: Option<EmailVerificationStatus>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkedPlatformAccountModel {
    pub email: Option<String>,
    pub platform: Option<LoginIdentityProvider>,
    pub platform_user_id: Option<String>,
    pub username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticModel {
    pub name: Option<String>,
    pub value: Option<i32>,
    pub version: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagModel {
    pub tag_value: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValueToDateModel {
    pub currency: Option<String>,
    pub total_value: Option<i64>,
    pub total_value_as_decimal: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerProfileModel {
    pub ad_campaign_attributions: Option<Vec<AdCampaignAttributionModel>>,
    pub avatar_url: Option<String>,
    pub banned_until: Option<Timestamp>,
    pub contact_email_addresses: Option<Vec<ContactEmailInfoModel>>,
    pub created: Option<Timestamp>,
    pub display_name: Option<String>,
    pub last_login: Option<Timestamp>,
    pub linked_accounts: Option<Vec<LinkedPlatformAccountModel>>,
    pub locations: Option<Vec<LocationModel>>,
    pub memberships: Option<Vec<MembershipModel>>,
    pub origination: Option<LoginIdentityProvider>,
    pub player_id: Option<String>,
    pub publisher_id: Option<String>,
    pub push_notification_registrations: Option<Vec<PushNotificationRegistrationModel>>,
    pub statistics: Option<Vec<StatisticModel>>,
    pub tags: Option<Vec<TagModel>>,
    pub title_id: Option<String>,
    #[serde(rename = "TotalValueToDateInUSD")]
    pub total_value_to_date_in_usd: Option<i64>,
    pub values_to_date: Option<Vec<ValueToDateModel>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerProfileRequest {
    pub play_fab_id: Option<String>,
    pub profile_constraints: Option<PlayerProfileViewConstraints>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerProfileResult {
    pub player_profile: Option<PlayerProfileModel>,
}

// ---------------------------------------------------------------------------
// Friends
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddFriendRequest {
    pub friend_email: Option<String>,
    pub friend_play_fab_id: Option<String>,
    pub friend_title_display_name: Option<String>,
    pub friend_username: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddFriendResult {
    pub created: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveFriendRequest {
    pub friend_play_fab_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoveFriendResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFriendsListRequest {
    pub include_facebook_friends: Option<bool>,
    pub include_steam_friends: Option<bool>,
    pub profile_constraints: Option<PlayerProfileViewConstraints>,
    pub xbox_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FriendInfo {
    pub current_matchmaker_lobby_id: Option<String>,
    pub facebook_info: Option<UserFacebookInfo>,
    pub friend_play_fab_id: Option<String>,
    pub game_center_info: Option<UserGameCenterInfo>,
    pub profile: Option<PlayerProfileModel>,
    #[serde(rename = "PSNInfo")]
    pub psn_info: Option<UserPsnInfo>,
    pub steam_info: Option<UserSteamInfo>,
    pub tags: Option<Vec<String>>,
    pub title_display_name: Option<String>,
    pub username: Option<String>,
    pub xbox_info: Option<UserXboxInfo>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFriendsListResult {
    pub friends: Option<Vec<FriendInfo>>,
}

// ---------------------------------------------------------------------------
// Statistics and leaderboards
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticUpdate {
    pub statistic_name: Option<String>,
    pub value: Option<i32>,
    /// Omit to update the current version.
    pub version: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePlayerStatisticsRequest {
    pub statistics: Option<Vec<StatisticUpdate>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlayerStatisticsResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticNameVersion {
    pub statistic_name: Option<String>,
    pub version: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerStatisticsRequest {
    pub statistic_names: Option<Vec<String>>,
    pub statistic_name_versions: Option<Vec<StatisticNameVersion>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticValue {
    pub statistic_name: Option<String>,
    pub value: Option<i32>,
    pub version: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerStatisticsResult {
    pub statistics: Option<Vec<StatisticValue>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLeaderboardRequest {
    pub max_results_count: Option<i32>,
    pub profile_constraints: Option<PlayerProfileViewConstraints>,
    pub start_position: Option<i32>,
    pub statistic_name: Option<String>,
    pub version: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerLeaderboardEntry {
    pub display_name: Option<String>,
    pub play_fab_id: Option<String>,
    pub position: Option<i32>,
    pub profile: Option<PlayerProfileModel>,
    pub stat_value: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLeaderboardResult {
    pub leaderboard: Option<Vec<PlayerLeaderboardEntry>>,
    pub next_reset: Option<Timestamp>,
    pub version: Option<i32>,
}

// ---------------------------------------------------------------------------
// Title-wide data
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleDataRequest {
    pub keys: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleDataResult {
    pub data: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetTimeRequest {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTimeResult {
    pub time: Option<Timestamp>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleNewsRequest {
    pub count: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TitleNewsItem {
    pub body: Option<String>,
    pub news_id: Option<String>,
    pub timestamp: Option<Timestamp>,
    pub title: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTitleNewsResult {
    pub news: Option<Vec<TitleNewsItem>>,
}

// ---------------------------------------------------------------------------
// Player data
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDataRecord {
    pub last_updated: Option<Timestamp>,
    pub permission: Option<UserDataPermission>,
    pub value: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserDataRequest {
    pub if_changed_from_data_version: Option<i64>,
    pub keys: Option<Vec<String>>,
    pub play_fab_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserDataResult {
    pub data: Option<BTreeMap<String, UserDataRecord>>,
    pub data_version: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserDataRequest {
    pub data: Option<BTreeMap<String, String>>,
    pub keys_to_remove: Option<Vec<String>>,
    pub permission: Option<UserDataPermission>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserDataResult {
    pub data_version: Option<i64>,
}

// ---------------------------------------------------------------------------
// Catalog, inventory and stores
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogItemBundleInfo {
    pub bundled_items: Option<Vec<String>>,
    pub bundled_result_tables: Option<Vec<String>>,
    pub bundled_virtual_currencies: Option<BTreeMap<String, i64>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogItemConsumableInfo {
    pub usage_count: Option<i64>,
    /// Seconds until an instance expires once granted.
    pub usage_period: Option<i64>,
    pub usage_period_group: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogItemContainerInfo {
    pub item_contents: Option<Vec<String>>,
    pub key_item_id: Option<String>,
    pub result_table_contents: Option<Vec<String>>,
    pub virtual_currency_contents: Option<BTreeMap<String, i64>>,
}

/// A purchasable item from the item catalog.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogItem {
    pub bundle: Option<CatalogItemBundleInfo>,
    pub can_become_character: Option<bool>,
    pub catalog_version: Option<String>,
    pub consumable: Option<CatalogItemConsumableInfo>,
    pub container: Option<CatalogItemContainerInfo>,
    pub custom_data: Option<String>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub initial_limited_edition_count: Option<i32>,
    pub is_limited_edition: Option<bool>,
    pub is_stackable: Option<bool>,
    pub is_tradable: Option<bool>,
    pub item_class: Option<String>,
    pub item_id: Option<String>,
    pub item_image_url: Option<String>,
    pub real_currency_prices: Option<BTreeMap<String, i64>>,
    pub tags: Option<Vec<String>>,
    pub virtual_currency_prices: Option<BTreeMap<String, i64>>,
}

/// A unique instance of a catalog item owned by a player.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemInstance {
    pub annotation: Option<String>,
    pub bundle_contents: Option<Vec<String>>,
    pub bundle_parent: Option<String>,
    pub catalog_version: Option<String>,
    pub custom_data: Option<BTreeMap<String, String>>,
    pub display_name: Option<String>,
    pub expiration: Option<Timestamp>,
    pub item_class: Option<String>,
    pub item_id: Option<String>,
    pub item_instance_id: Option<String>,
    pub purchase_date: Option<Timestamp>,
    pub remaining_uses: Option<i32>,
    pub unit_currency: Option<String>,
    pub unit_price: Option<i64>,
    pub uses_incremented_by: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualCurrencyRechargeTime {
    pub recharge_max: Option<i32>,
    pub recharge_time: Option<Timestamp>,
    pub seconds_to_recharge: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCatalogItemsRequest {
    pub catalog_version: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCatalogItemsResult {
    pub catalog: Option<Vec<CatalogItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetUserInventoryRequest {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserInventoryResult {
    pub inventory: Option<Vec<ItemInstance>>,
    pub virtual_currency: Option<BTreeMap<String, i32>>,
    pub virtual_currency_recharge_times: Option<BTreeMap<String, VirtualCurrencyRechargeTime>>,
}

/// A catalog item as listed, and priced, in one store.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoreItem {
    pub custom_data: Option<Value>,
    pub display_position: Option<i64>,
    pub item_id: Option<String>,
    pub real_currency_prices: Option<BTreeMap<String, i64>>,
    pub virtual_currency_prices: Option<BTreeMap<String, i64>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StoreMarketingModel {
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub metadata: Option<Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetStoreItemsRequest {
    pub catalog_version: Option<String>,
    pub store_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetStoreItemsResult {
    pub catalog_version: Option<String>,
    pub marketing_data: Option<StoreMarketingModel>,
    pub source: Option<SourceType>,
    pub store: Option<Vec<StoreItem>>,
    pub store_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseItemRequest {
    pub catalog_version: Option<String>,
    pub character_id: Option<String>,
    pub item_id: Option<String>,
    pub price: Option<i32>,
    pub store_id: Option<String>,
    pub virtual_currency: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseItemResult {
    pub items: Option<Vec<ItemInstance>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsumeItemRequest {
    pub character_id: Option<String>,
    pub consume_count: Option<i32>,
    pub item_instance_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsumeItemResult {
    pub item_instance_id: Option<String>,
    pub remaining_uses: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddUserVirtualCurrencyRequest {
    pub amount: Option<i32>,
    pub virtual_currency: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubtractUserVirtualCurrencyRequest {
    pub amount: Option<i32>,
    pub virtual_currency: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyUserVirtualCurrencyResult {
    pub balance: Option<i32>,
    pub balance_change: Option<i32>,
    pub play_fab_id: Option<String>,
    pub virtual_currency: Option<String>,
}

// ---------------------------------------------------------------------------
// Trading
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeInfo {
    pub accepted_inventory_instance_ids: Option<Vec<String>>,
    pub accepted_player_id: Option<String>,
    pub allowed_player_ids: Option<Vec<String>>,
    pub cancelled_at: Option<Timestamp>,
    pub filled_at: Option<Timestamp>,
    pub invalidated_at: Option<Timestamp>,
    pub offered_catalog_item_ids: Option<Vec<String>>,
    pub offered_inventory_instance_ids: Option<Vec<String>>,
    pub offering_player_id: Option<String>,
    pub opened_at: Option<Timestamp>,
    pub requested_catalog_item_ids: Option<Vec<String>>,
    pub status: Option<TradeStatus>,
    pub trade_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenTradeRequest {
    /// Players allowed to accept. `None` lets anyone accept.
    pub allowed_player_ids: Option<Vec<String>>,
    pub offered_inventory_instance_ids: Option<Vec<String>>,
    pub requested_catalog_item_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenTradeResponse {
    pub trade: Option<TradeInfo>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcceptTradeRequest {
    /// `None` for a gift.
    pub accepted_inventory_instance_ids: Option<Vec<String>>,
    pub offering_player_id: Option<String>,
    pub trade_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcceptTradeResponse {
    pub trade: Option<TradeInfo>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelTradeRequest {
    pub trade_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelTradeResponse {
    pub trade: Option<TradeInfo>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTradeStatusRequest {
    pub offering_player_id: Option<String>,
    pub trade_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTradeStatusResponse {
    pub trade: Option<TradeInfo>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerTradesRequest {
    pub status_filter: Option<TradeStatus>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerTradesResponse {
    pub accepted_trades: Option<Vec<TradeInfo>>,
    pub opened_trades: Option<Vec<TradeInfo>>,
}

// ---------------------------------------------------------------------------
// Shared groups
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSharedGroupRequest {
    pub shared_group_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateSharedGroupResult {
    pub shared_group_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddSharedGroupMembersRequest {
    pub play_fab_ids: Option<Vec<String>>,
    pub shared_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddSharedGroupMembersResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SharedGroupDataRecord {
    pub last_updated: Option<Timestamp>,
    pub last_updated_by: Option<String>,
    pub permission: Option<UserDataPermission>,
    pub value: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSharedGroupDataRequest {
    pub get_members: Option<bool>,
    pub keys: Option<Vec<String>>,
    pub shared_group_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSharedGroupDataResult {
    pub data: Option<BTreeMap<String, SharedGroupDataRecord>>,
    pub members: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// CloudScript and events
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteCloudScriptRequest {
    pub function_name: Option<String>,
    pub function_parameter: Option<Value>,
    pub generate_play_stream_event: Option<bool>,
    pub revision_selection: Option<CloudScriptRevisionOption>,
    /// Only read when `revision_selection` is `Specific`.
    pub specific_revision: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogStatement {
    pub data: Option<Value>,
    pub level: Option<String>,
    pub message: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScriptExecutionError {
    pub error: Option<String>,
    pub message: Option<String>,
    pub stack_trace: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecuteCloudScriptResult {
    #[serde(rename = "APIRequestsIssued")]
    pub api_requests_issued: Option<i32>,
    pub error: Option<ScriptExecutionError>,
    pub execution_time_seconds: Option<f64>,
    pub function_name: Option<String>,
    pub function_result: Option<Value>,
    pub function_result_too_large: Option<bool>,
    pub http_requests_issued: Option<i32>,
    pub logs: Option<Vec<LogStatement>>,
    pub logs_too_large: Option<bool>,
    pub memory_consumed_bytes: Option<i64>,
    pub processor_time_seconds: Option<f64>,
    pub revision: Option<i32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteClientPlayerEventRequest {
    pub body: Option<BTreeMap<String, Value>>,
    pub event_name: Option<String>,
    pub timestamp: Option<Timestamp>,
}

impl WriteClientPlayerEventRequest {
    /// An event stamped with the current time.
    pub fn now(event_name: impl Into<String>, body: BTreeMap<String, Value>) -> Self {
        Self {
            body: Some(body),
            event_name: Some(event_name.into()),
            timestamp: Some(Timestamp::now()),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteEventResponse {
    pub event_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_fields_are_omitted() {
        let req = UpdatePlayerStatisticsRequest {
            statistics: Some(vec![StatisticUpdate {
                statistic_name: Some("level".to_string()),
                value: Some(42),
                version: None,
            }]),
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, json!({"Statistics": [{"StatisticName": "level", "Value": 42}]}));
        assert!(body["Statistics"][0].get("Version").is_none());
    }

    #[test]
    fn empty_request_serializes_to_empty_object() {
        assert_eq!(serde_json::to_string(&GetTitleDataRequest::default()).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&GetTimeRequest {}).unwrap(), "{}");
    }

    #[test]
    fn explicit_empty_is_not_absent() {
        let req = GetTitleDataRequest { keys: Some(Vec::new()) };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"Keys": []}));
    }

    #[test]
    fn missing_keys_deserialize_to_none() {
        let result: LoginResult = serde_json::from_str(r#"{"PlayFabId":"ABC"}"#).unwrap();
        assert_eq!(result.play_fab_id.as_deref(), Some("ABC"));
        assert!(result.session_ticket.is_none());
        assert!(result.settings_for_user.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let result: GetTimeResult =
            serde_json::from_str(r#"{"Time":"2020-01-01T00:00:00Z","AddedLater":true}"#).unwrap();
        assert!(result.time.is_some());
    }

    #[test]
    fn acronym_fields_use_wire_names() {
        let req = LoginWithAndroidDeviceIdRequest {
            os: Some("Android 14".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"OS": "Android 14"}));

        let result: ExecuteCloudScriptResult = serde_json::from_str(r#"{"APIRequestsIssued":3}"#).unwrap();
        assert_eq!(result.api_requests_issued, Some(3));

        let info: UserTitleInfo = serde_json::from_str(r#"{"isBanned":false}"#).unwrap();
        assert_eq!(info.is_banned, Some(false));
    }

    #[test]
    fn enums_use_wire_names() {
        assert_eq!(serde_json::to_value(SourceType::Api).unwrap(), json!("API"));
        assert_eq!(serde_json::to_value(LoginIdentityProvider::Psn).unwrap(), json!("PSN"));
        let status: TradeStatus = serde_json::from_value(json!("Filled")).unwrap();
        assert_eq!(status, TradeStatus::Filled);
    }

    #[test]
    fn dynamic_json_fields_keep_structure() {
        let result: ExecuteCloudScriptResult = serde_json::from_value(json!({
            "FunctionName": "grant",
            "FunctionResult": {"granted": [1, 2], "ok": true, "note": null},
            "Logs": [{"Level": "Info", "Message": "hi", "Data": 5}]
        }))
        .unwrap();
        assert_eq!(result.function_result.unwrap()["granted"][1], json!(2));
        assert_eq!(result.logs.unwrap()[0].data, Some(json!(5)));
    }

    #[test]
    fn login_result_decodes_nested_payload() {
        let result: LoginResult = serde_json::from_value(json!({
            "SessionTicket": "T-1",
            "PlayFabId": "P-1",
            "NewlyCreated": true,
            "SettingsForUser": {"NeedsAttribution": true},
            "EntityToken": {
                "EntityToken": "E-1",
                "Entity": {"Id": "TP-1", "Type": "title_player_account"},
                "TokenExpiration": "2030-01-01T00:00:00Z"
            },
            "InfoResultPayload": {"UserVirtualCurrency": {"GD": 100}}
        }))
        .unwrap();
        assert_eq!(result.session_ticket.as_deref(), Some("T-1"));
        let token = result.entity_token.unwrap();
        assert_eq!(token.entity.unwrap().entity_type.as_deref(), Some("title_player_account"));
        let payload = result.info_result_payload.unwrap();
        assert_eq!(payload.user_virtual_currency.unwrap()["GD"], 100);
    }

    #[test]
    fn client_event_is_stamped() {
        let event = WriteClientPlayerEventRequest::now("level_up", BTreeMap::new());
        let body = serde_json::to_value(&event).unwrap();
        assert_eq!(body["EventName"], "level_up");
        assert!(body["Timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn account_info_reports_every_linked_platform() {
        let info: UserAccountInfo = serde_json::from_value(json!({
            "PlayFabId": "P-1",
            "FacebookInfo": {"FacebookId": "fb-1", "FullName": "Ada"},
            "SteamInfo": {"SteamId": "st-1", "SteamCurrency": "EUR", "SteamActivationStatus": "ActivatedSteam"},
            "PsnInfo": {"PsnAccountId": "psn-1"},
            "XboxInfo": {"XboxUserId": "xb-1"},
            "IosDeviceInfo": {"IosDeviceId": "ios-1"},
            "OpenIdInfo": [{"ConnectionId": "oidc", "Issuer": "https://id.example", "Subject": "s-1"}]
        }))
        .unwrap();
        assert_eq!(info.facebook_info.unwrap().full_name.as_deref(), Some("Ada"));
        let steam = info.steam_info.unwrap();
        assert_eq!(steam.steam_currency, Some(Currency::Eur));
        assert_eq!(steam.steam_activation_status, Some(TitleActivationStatus::ActivatedSteam));
        assert_eq!(info.psn_info.unwrap().psn_account_id.as_deref(), Some("psn-1"));
        assert_eq!(info.xbox_info.unwrap().xbox_user_id.as_deref(), Some("xb-1"));
        assert_eq!(info.ios_device_info.unwrap().ios_device_id.as_deref(), Some("ios-1"));
        assert_eq!(info.open_id_info.unwrap()[0].connection_id.as_deref(), Some("oidc"));
    }

    #[test]
    fn friend_platform_info_uses_wire_names() {
        let friend = FriendInfo {
            friend_play_fab_id: Some("F-1".to_string()),
            psn_info: Some(UserPsnInfo {
                psn_online_id: Some("online".to_string()),
                ..Default::default()
            }),
            steam_info: Some(UserSteamInfo {
                steam_id: Some("st-2".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&friend).unwrap(),
            json!({"FriendPlayFabId": "F-1", "PSNInfo": {"PsnOnlineId": "online"}, "SteamInfo": {"SteamId": "st-2"}})
        );
    }

    #[test]
    fn profile_carries_locations_and_memberships() {
        let profile: PlayerProfileModel = serde_json::from_value(json!({
            "PlayerId": "P-1",
            "Locations": [{"City": "Berlin", "ContinentCode": "EU", "CountryCode": "DE", "Latitude": 52.5}],
            "Memberships": [{
                "MembershipId": "gold",
                "IsActive": true,
                "Subscriptions": [{"SubscriptionId": "sub-1", "Status": "FreeTrial"}]
            }],
            "PushNotificationRegistrations": [{"Platform": "GoogleCloudMessaging", "NotificationEndpointARN": "arn:1"}]
        }))
        .unwrap();
        let location = &profile.locations.unwrap()[0];
        assert_eq!(location.continent_code, Some(ContinentCode::Eu));
        assert_eq!(location.country_code, Some(CountryCode::De));
        assert_eq!(location.latitude, Some(52.5));
        let membership = &profile.memberships.unwrap()[0];
        let subscription = &membership.subscriptions.as_ref().unwrap()[0];
        assert_eq!(subscription.status, Some(SubscriptionProviderStatus::FreeTrial));
        let push = &profile.push_notification_registrations.unwrap()[0];
        assert_eq!(push.platform, Some(PushNotificationPlatform::GoogleCloudMessaging));
        assert_eq!(push.notification_endpoint_arn.as_deref(), Some("arn:1"));
    }

    #[test]
    fn combined_info_lists_characters() {
        let payload: GetPlayerCombinedInfoResultPayload = serde_json::from_value(json!({
            "CharacterList": [{"CharacterId": "C-1", "CharacterName": "Rook", "CharacterType": "knight"}],
            "CharacterInventories": [{"CharacterId": "C-1", "Inventory": [{"ItemId": "sword", "ItemInstanceId": "I-1"}]}]
        }))
        .unwrap();
        assert_eq!(payload.character_list.unwrap()[0].character_name.as_deref(), Some("Rook"));
        let inventory = &payload.character_inventories.unwrap()[0];
        assert_eq!(inventory.inventory.as_ref().unwrap()[0].item_id.as_deref(), Some("sword"));
    }

    #[test]
    fn unlisted_enum_values_decode_as_unknown() {
        let result: GetAccountInfoResult = serde_json::from_value(json!({
            "AccountInfo": {"PlayFabId": "P1", "TitleInfo": {"Origination": "BrandNewPlatform"}}
        }))
        .unwrap();
        let info = result.account_info.unwrap();
        assert_eq!(info.play_fab_id.as_deref(), Some("P1"));
        assert_eq!(info.title_info.unwrap().origination, Some(UserOrigination::Unknown));

        let trade: TradeInfo = serde_json::from_value(json!({"Status": "Escrowed", "TradeId": "T-1"})).unwrap();
        assert_eq!(trade.status, Some(TradeStatus::Unknown));
        assert_eq!(trade.trade_id.as_deref(), Some("T-1"));

        let code: CountryCode = serde_json::from_value(json!("ZZ")).unwrap();
        assert_eq!(code, CountryCode::Unknown);
        let known: LoginIdentityProvider = serde_json::from_value(json!("Unknown")).unwrap();
        assert_eq!(known, LoginIdentityProvider::Unknown);
    }

    #[test]
    fn region_and_code_enums_use_wire_names() {
        let req = StartGameRequest {
            build_version: Some("1.0".to_string()),
            region: Some(Region::UsEast),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"BuildVersion": "1.0", "Region": "USEast"}));
        assert_eq!(serde_json::to_value(Currency::Usd).unwrap(), json!("USD"));
        assert_eq!(serde_json::to_value(CountryCode::Gb).unwrap(), json!("GB"));
    }

    #[test]
    fn matchmake_result_keeps_acronym_fields() {
        let result: MatchmakeResult = serde_json::from_value(json!({
            "LobbyID": "L-1",
            "ServerIPV4Address": "203.0.113.9",
            "ServerPort": 7777,
            "PollWaitTimeMS": 500,
            "Status": "Waiting"
        }))
        .unwrap();
        assert_eq!(result.lobby_id.as_deref(), Some("L-1"));
        assert_eq!(result.server_ipv4_address.as_deref(), Some("203.0.113.9"));
        assert_eq!(result.poll_wait_time_ms, Some(500));
        assert_eq!(result.status, Some(MatchmakeStatus::Waiting));
    }

    #[test]
    fn purchase_flow_records() {
        let req = StartPurchaseRequest {
            items: Some(vec![ItemPurchaseRequest {
                item_id: Some("sword".to_string()),
                quantity: Some(2),
                ..Default::default()
            }]),
            store_id: Some("main".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"Items": [{"ItemId": "sword", "Quantity": 2}], "StoreId": "main"})
        );

        let paid: PayForPurchaseResult = serde_json::from_value(json!({
            "OrderId": "O-1",
            "Status": "Succeeded",
            "VCAmount": {"GO": 10},
            "PurchaseConfirmationPageURL": "https://pay.example/ok"
        }))
        .unwrap();
        assert_eq!(paid.status, Some(TransactionStatus::Succeeded));
        assert_eq!(paid.vc_amount.unwrap()["GO"], 10);
        assert!(paid.purchase_confirmation_page_url.is_some());
    }

    #[test]
    fn shared_group_update_removes_keys() {
        let req = UpdateSharedGroupDataRequest {
            data: Some([("turn".to_string(), "3".to_string())].into()),
            keys_to_remove: Some(vec!["draft".to_string()]),
            permission: Some(UserDataPermission::Public),
            shared_group_id: Some("G-1".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"Data": {"turn": "3"}, "KeysToRemove": ["draft"], "Permission": "Public", "SharedGroupId": "G-1"})
        );
    }

    #[test]
    fn platform_id_lookup_decodes_pairs() {
        let result: GetPlayFabIdsFromSteamIdsResult = serde_json::from_value(json!({
            "Data": [{"SteamStringId": "7656", "PlayFabId": "P-9"}]
        }))
        .unwrap();
        let pair = &result.data.unwrap()[0];
        assert_eq!(pair.steam_string_id.as_deref(), Some("7656"));
        assert_eq!(pair.play_fab_id.as_deref(), Some("P-9"));

        let req = GetPlayFabIdsFromSteamIdsRequest {
            steam_string_ids: Some(vec!["7656".to_string()]),
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"SteamStringIDs": ["7656"]}));
    }
}
