//! Compile-time binding of each request record to its endpoint and result.
//!
//! # Design
//! `ApiRequest` ties a request type to exactly one result type, one endpoint
//! path and one authentication kind, so `PlayFabClient::execute` cannot send
//! a request to the wrong endpoint or decode the wrong shape. The table below
//! is the whole per-endpoint surface; the dispatch itself is generic.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::client::*;
use crate::models::multiplayer::*;
use crate::models::profiles::*;

/// Credential a call must present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    /// Login calls. The title id is filled in instead.
    None,
    /// `X-Authorization: <session ticket>`.
    SessionTicket,
    /// `X-EntityToken: <entity token>`.
    EntityToken,
}

impl AuthKind {
    pub fn header_name(self) -> Option<&'static str> {
        match self {
            AuthKind::None => None,
            AuthKind::SessionTicket => Some("X-Authorization"),
            AuthKind::EntityToken => Some("X-EntityToken"),
        }
    }
}

/// Where a request is sent and what it must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub auth: AuthKind,
    /// Fill `TitleId` from the settings when the request leaves it unset.
    pub title_scoped: bool,
}

impl Endpoint {
    pub const fn login(path: &'static str) -> Self {
        Self {
            path,
            auth: AuthKind::None,
            title_scoped: true,
        }
    }

    pub const fn session(path: &'static str) -> Self {
        Self {
            path,
            auth: AuthKind::SessionTicket,
            title_scoped: false,
        }
    }

    pub const fn entity(path: &'static str) -> Self {
        Self {
            path,
            auth: AuthKind::EntityToken,
            title_scoped: false,
        }
    }
}

/// Calls that take another call's request record and return its result
/// shape. A record binds only one `ApiRequest` endpoint, so these go through
/// `PlayFabClient::call`.
pub mod shared {
    use super::Endpoint;

    /// `GetUserDataRequest` to `GetUserDataResult`.
    pub const GET_USER_READ_ONLY_DATA: Endpoint = Endpoint::session("/Client/GetUserReadOnlyData");
    pub const GET_USER_PUBLISHER_DATA: Endpoint = Endpoint::session("/Client/GetUserPublisherData");
    pub const GET_USER_PUBLISHER_READ_ONLY_DATA: Endpoint =
        Endpoint::session("/Client/GetUserPublisherReadOnlyData");
    /// `UpdateUserDataRequest` to `UpdateUserDataResult`.
    pub const UPDATE_USER_PUBLISHER_DATA: Endpoint = Endpoint::session("/Client/UpdateUserPublisherData");
    /// `GetCharacterDataRequest` to `GetCharacterDataResult`.
    pub const GET_CHARACTER_READ_ONLY_DATA: Endpoint = Endpoint::session("/Client/GetCharacterReadOnlyData");
}

/// A request record with a known endpoint and result shape.
pub trait ApiRequest: Serialize {
    type Result: DeserializeOwned;

    const ENDPOINT: Endpoint;
}

macro_rules! endpoints {
    ($($request:ty => $result:ty, $kind:ident($path:literal);)*) => {
        $(
            impl ApiRequest for $request {
                type Result = $result;

                const ENDPOINT: Endpoint = Endpoint::$kind($path);
            }
        )*
    };
}

endpoints! {
    // Authentication
    LoginWithCustomIdRequest => LoginResult, login("/Client/LoginWithCustomID");
    LoginWithEmailAddressRequest => LoginResult, login("/Client/LoginWithEmailAddress");
    LoginWithPlayFabRequest => LoginResult, login("/Client/LoginWithPlayFab");
    LoginWithAndroidDeviceIdRequest => LoginResult, login("/Client/LoginWithAndroidDeviceID");
    AttributeInstallRequest => AttributeInstallResult, session("/Client/AttributeInstall");
    GetTitlePublicKeyRequest => GetTitlePublicKeyResult, login("/Client/GetTitlePublicKey");
    GetWindowsHelloChallengeRequest => GetWindowsHelloChallengeResponse, login("/Client/GetWindowsHelloChallenge");
    LoginWithFacebookInstantGamesIdRequest => LoginResult, login("/Client/LoginWithFacebookInstantGamesId");
    LoginWithFacebookRequest => LoginResult, login("/Client/LoginWithFacebook");
    LoginWithGameCenterRequest => LoginResult, login("/Client/LoginWithGameCenter");
    LoginWithGoogleAccountRequest => LoginResult, login("/Client/LoginWithGoogleAccount");
    LoginWithIosDeviceIdRequest => LoginResult, login("/Client/LoginWithIOSDeviceID");
    LoginWithKongregateRequest => LoginResult, login("/Client/LoginWithKongregate");
    LoginWithNintendoSwitchDeviceIdRequest => LoginResult, login("/Client/LoginWithNintendoSwitchDeviceId");
    LoginWithSteamRequest => LoginResult, login("/Client/LoginWithSteam");
    LoginWithTwitchRequest => LoginResult, login("/Client/LoginWithTwitch");
    LoginWithWindowsHelloRequest => LoginResult, login("/Client/LoginWithWindowsHello");
    LoginWithXboxRequest => LoginResult, login("/Client/LoginWithXbox");
    RegisterPlayFabUserRequest => RegisterPlayFabUserResult, login("/Client/RegisterPlayFabUser");
    RegisterWithWindowsHelloRequest => LoginResult, login("/Client/RegisterWithWindowsHello");
    SendAccountRecoveryEmailRequest => SendAccountRecoveryEmailResult, login("/Client/SendAccountRecoveryEmail");

    // Account management
    AddUsernamePasswordRequest => AddUsernamePasswordResult, session("/Client/AddUsernamePassword");
    GetAccountInfoRequest => GetAccountInfoResult, session("/Client/GetAccountInfo");
    GetPlayerCombinedInfoRequest => GetPlayerCombinedInfoResult, session("/Client/GetPlayerCombinedInfo");
    GetPlayerProfileRequest => GetPlayerProfileResult, session("/Client/GetPlayerProfile");
    LinkCustomIdRequest => LinkCustomIdResult, session("/Client/LinkCustomID");
    UnlinkCustomIdRequest => UnlinkCustomIdResult, session("/Client/UnlinkCustomID");
    UpdateUserTitleDisplayNameRequest => UpdateUserTitleDisplayNameResult, session("/Client/UpdateUserTitleDisplayName");
    AddOrUpdateContactEmailRequest => AddOrUpdateContactEmailResult, session("/Client/AddOrUpdateContactEmail");
    DeviceInfoRequest => EmptyResponse, session("/Client/ReportDeviceInfo");
    GetPhotonAuthenticationTokenRequest => GetPhotonAuthenticationTokenResult, session("/Client/GetPhotonAuthenticationToken");
    RegisterForIosPushNotificationRequest => RegisterForIosPushNotificationResult, session("/Client/RegisterForIOSPushNotification");
    RemoveContactEmailRequest => RemoveContactEmailResult, session("/Client/RemoveContactEmail");
    SetPlayerSecretRequest => SetPlayerSecretResult, session("/Client/SetPlayerSecret");
    UpdateAvatarUrlRequest => EmptyResponse, session("/Client/UpdateAvatarUrl");
    AndroidDevicePushNotificationRegistrationRequest => AndroidDevicePushNotificationRegistrationResult, session("/Client/AndroidDevicePushNotificationRegistration");
    GetPlayerSegmentsRequest => GetPlayerSegmentsResult, session("/Client/GetPlayerSegments");
    GetPlayerTagsRequest => GetPlayerTagsResult, session("/Client/GetPlayerTags");

    // Linked identities
    AddGenericIdRequest => AddGenericIdResult, session("/Client/AddGenericID");
    LinkAndroidDeviceIdRequest => LinkAndroidDeviceIdResult, session("/Client/LinkAndroidDeviceID");
    LinkFacebookAccountRequest => LinkFacebookAccountResult, session("/Client/LinkFacebookAccount");
    LinkFacebookInstantGamesIdRequest => LinkFacebookInstantGamesIdResult, session("/Client/LinkFacebookInstantGamesId");
    LinkGameCenterAccountRequest => LinkGameCenterAccountResult, session("/Client/LinkGameCenterAccount");
    LinkGoogleAccountRequest => LinkGoogleAccountResult, session("/Client/LinkGoogleAccount");
    LinkIosDeviceIdRequest => LinkIosDeviceIdResult, session("/Client/LinkIOSDeviceID");
    LinkKongregateAccountRequest => LinkKongregateAccountResult, session("/Client/LinkKongregateAccount");
    LinkNintendoSwitchDeviceIdRequest => LinkNintendoSwitchDeviceIdResult, session("/Client/LinkNintendoSwitchDeviceId");
    LinkSteamAccountRequest => LinkSteamAccountResult, session("/Client/LinkSteamAccount");
    LinkTwitchAccountRequest => LinkTwitchAccountResult, session("/Client/LinkTwitchAccount");
    LinkWindowsHelloAccountRequest => LinkWindowsHelloAccountResponse, session("/Client/LinkWindowsHelloAccount");
    LinkXboxAccountRequest => LinkXboxAccountResult, session("/Client/LinkXboxAccount");
    RemoveGenericIdRequest => RemoveGenericIdResult, session("/Client/RemoveGenericID");
    UnlinkAndroidDeviceIdRequest => UnlinkAndroidDeviceIdResult, session("/Client/UnlinkAndroidDeviceID");
    UnlinkFacebookAccountRequest => UnlinkFacebookAccountResult, session("/Client/UnlinkFacebookAccount");
    UnlinkFacebookInstantGamesIdRequest => UnlinkFacebookInstantGamesIdResult, session("/Client/UnlinkFacebookInstantGamesId");
    UnlinkGameCenterAccountRequest => UnlinkGameCenterAccountResult, session("/Client/UnlinkGameCenterAccount");
    UnlinkGoogleAccountRequest => UnlinkGoogleAccountResult, session("/Client/UnlinkGoogleAccount");
    UnlinkIosDeviceIdRequest => UnlinkIosDeviceIdResult, session("/Client/UnlinkIOSDeviceID");
    UnlinkKongregateAccountRequest => UnlinkKongregateAccountResult, session("/Client/UnlinkKongregateAccount");
    UnlinkNintendoSwitchDeviceIdRequest => UnlinkNintendoSwitchDeviceIdResult, session("/Client/UnlinkNintendoSwitchDeviceId");
    UnlinkSteamAccountRequest => UnlinkSteamAccountResult, session("/Client/UnlinkSteamAccount");
    UnlinkTwitchAccountRequest => UnlinkTwitchAccountResult, session("/Client/UnlinkTwitchAccount");
    UnlinkWindowsHelloAccountRequest => UnlinkWindowsHelloAccountResponse, session("/Client/UnlinkWindowsHelloAccount");
    UnlinkXboxAccountRequest => UnlinkXboxAccountResult, session("/Client/UnlinkXboxAccount");

    // Platform id lookups
    GetPlayFabIdsFromFacebookIdsRequest => GetPlayFabIdsFromFacebookIdsResult, session("/Client/GetPlayFabIDsFromFacebookIDs");
    GetPlayFabIdsFromFacebookInstantGamesIdsRequest => GetPlayFabIdsFromFacebookInstantGamesIdsResult, session("/Client/GetPlayFabIDsFromFacebookInstantGamesIds");
    GetPlayFabIdsFromGameCenterIdsRequest => GetPlayFabIdsFromGameCenterIdsResult, session("/Client/GetPlayFabIDsFromGameCenterIDs");
    GetPlayFabIdsFromGenericIdsRequest => GetPlayFabIdsFromGenericIdsResult, session("/Client/GetPlayFabIDsFromGenericIDs");
    GetPlayFabIdsFromGoogleIdsRequest => GetPlayFabIdsFromGoogleIdsResult, session("/Client/GetPlayFabIDsFromGoogleIDs");
    GetPlayFabIdsFromKongregateIdsRequest => GetPlayFabIdsFromKongregateIdsResult, session("/Client/GetPlayFabIDsFromKongregateIDs");
    GetPlayFabIdsFromNintendoSwitchDeviceIdsRequest => GetPlayFabIdsFromNintendoSwitchDeviceIdsResult, session("/Client/GetPlayFabIDsFromNintendoSwitchDeviceIds");
    GetPlayFabIdsFromSteamIdsRequest => GetPlayFabIdsFromSteamIdsResult, session("/Client/GetPlayFabIDsFromSteamIDs");
    GetPlayFabIdsFromTwitchIdsRequest => GetPlayFabIdsFromTwitchIdsResult, session("/Client/GetPlayFabIDsFromTwitchIDs");

    // Friends
    AddFriendRequest => AddFriendResult, session("/Client/AddFriend");
    RemoveFriendRequest => RemoveFriendResult, session("/Client/RemoveFriend");
    GetFriendsListRequest => GetFriendsListResult, session("/Client/GetFriendsList");
    ReportPlayerClientRequest => ReportPlayerClientResult, session("/Client/ReportPlayer");
    SetFriendTagsRequest => SetFriendTagsResult, session("/Client/SetFriendTags");

    // Statistics and leaderboards
    UpdatePlayerStatisticsRequest => UpdatePlayerStatisticsResult, session("/Client/UpdatePlayerStatistics");
    GetPlayerStatisticsRequest => GetPlayerStatisticsResult, session("/Client/GetPlayerStatistics");
    GetLeaderboardRequest => GetLeaderboardResult, session("/Client/GetLeaderboard");
    GetFriendLeaderboardAroundPlayerRequest => GetFriendLeaderboardAroundPlayerResult, session("/Client/GetFriendLeaderboardAroundPlayer");
    GetFriendLeaderboardRequest => GetLeaderboardResult, session("/Client/GetFriendLeaderboard");
    GetLeaderboardAroundPlayerRequest => GetLeaderboardAroundPlayerResult, session("/Client/GetLeaderboardAroundPlayer");
    GetPlayerStatisticVersionsRequest => GetPlayerStatisticVersionsResult, session("/Client/GetPlayerStatisticVersions");

    // Characters
    GetCharacterDataRequest => GetCharacterDataResult, session("/Client/GetCharacterData");
    GetCharacterInventoryRequest => GetCharacterInventoryResult, session("/Client/GetCharacterInventory");
    GetCharacterLeaderboardRequest => GetCharacterLeaderboardResult, session("/Client/GetCharacterLeaderboard");
    GetCharacterStatisticsRequest => GetCharacterStatisticsResult, session("/Client/GetCharacterStatistics");
    GetLeaderboardAroundCharacterRequest => GetLeaderboardAroundCharacterResult, session("/Client/GetLeaderboardAroundCharacter");
    GetLeaderboardForUsersCharactersRequest => GetLeaderboardForUsersCharactersResult, session("/Client/GetLeaderboardForUserCharacters");
    GrantCharacterToUserRequest => GrantCharacterToUserResult, session("/Client/GrantCharacterToUser");
    ListUsersCharactersRequest => ListUsersCharactersResult, session("/Client/ListUsersCharacters");
    UpdateCharacterDataRequest => UpdateCharacterDataResult, session("/Client/UpdateCharacterData");
    UpdateCharacterStatisticsRequest => UpdateCharacterStatisticsResult, session("/Client/UpdateCharacterStatistics");

    // Title-wide data
    GetTitleDataRequest => GetTitleDataResult, session("/Client/GetTitleData");
    GetTimeRequest => GetTimeResult, session("/Client/GetTime");
    GetTitleNewsRequest => GetTitleNewsResult, session("/Client/GetTitleNews");
    GetContentDownloadUrlRequest => GetContentDownloadUrlResult, session("/Client/GetContentDownloadUrl");
    GetPublisherDataRequest => GetPublisherDataResult, session("/Client/GetPublisherData");

    // Player data
    GetUserDataRequest => GetUserDataResult, session("/Client/GetUserData");
    UpdateUserDataRequest => UpdateUserDataResult, session("/Client/UpdateUserData");

    // Catalog, inventory and stores
    GetCatalogItemsRequest => GetCatalogItemsResult, session("/Client/GetCatalogItems");
    GetUserInventoryRequest => GetUserInventoryResult, session("/Client/GetUserInventory");
    GetStoreItemsRequest => GetStoreItemsResult, session("/Client/GetStoreItems");
    PurchaseItemRequest => PurchaseItemResult, session("/Client/PurchaseItem");
    ConsumeItemRequest => ConsumeItemResult, session("/Client/ConsumeItem");
    AddUserVirtualCurrencyRequest => ModifyUserVirtualCurrencyResult, session("/Client/AddUserVirtualCurrency");
    SubtractUserVirtualCurrencyRequest => ModifyUserVirtualCurrencyResult, session("/Client/SubtractUserVirtualCurrency");
    ConfirmPurchaseRequest => ConfirmPurchaseResult, session("/Client/ConfirmPurchase");
    ConsumeXboxEntitlementsRequest => ConsumeXboxEntitlementsResult, session("/Client/ConsumeXboxEntitlements");
    GetPaymentTokenRequest => GetPaymentTokenResult, session("/Client/GetPaymentToken");
    GetPurchaseRequest => GetPurchaseResult, session("/Client/GetPurchase");
    PayForPurchaseRequest => PayForPurchaseResult, session("/Client/PayForPurchase");
    RedeemCouponRequest => RedeemCouponResult, session("/Client/RedeemCoupon");
    RestoreIosPurchasesRequest => RestoreIosPurchasesResult, session("/Client/RestoreIOSPurchases");
    StartPurchaseRequest => StartPurchaseResult, session("/Client/StartPurchase");
    UnlockContainerInstanceRequest => UnlockContainerItemResult, session("/Client/UnlockContainerInstance");
    UnlockContainerItemRequest => UnlockContainerItemResult, session("/Client/UnlockContainerItem");
    ValidateAmazonReceiptRequest => ValidateAmazonReceiptResult, session("/Client/ValidateAmazonReceipt");
    ValidateGooglePlayPurchaseRequest => ValidateGooglePlayPurchaseResult, session("/Client/ValidateGooglePlayPurchase");
    ValidateIosReceiptRequest => ValidateIosReceiptResult, session("/Client/ValidateIOSReceipt");
    ValidateWindowsReceiptRequest => ValidateWindowsReceiptResult, session("/Client/ValidateWindowsReceipt");

    // Trading
    OpenTradeRequest => OpenTradeResponse, session("/Client/OpenTrade");
    AcceptTradeRequest => AcceptTradeResponse, session("/Client/AcceptTrade");
    CancelTradeRequest => CancelTradeResponse, session("/Client/CancelTrade");
    GetTradeStatusRequest => GetTradeStatusResponse, session("/Client/GetTradeStatus");
    GetPlayerTradesRequest => GetPlayerTradesResponse, session("/Client/GetPlayerTrades");

    // Shared groups
    CreateSharedGroupRequest => CreateSharedGroupResult, session("/Client/CreateSharedGroup");
    AddSharedGroupMembersRequest => AddSharedGroupMembersResult, session("/Client/AddSharedGroupMembers");
    GetSharedGroupDataRequest => GetSharedGroupDataResult, session("/Client/GetSharedGroupData");
    RemoveSharedGroupMembersRequest => RemoveSharedGroupMembersResult, session("/Client/RemoveSharedGroupMembers");
    UpdateSharedGroupDataRequest => UpdateSharedGroupDataResult, session("/Client/UpdateSharedGroupData");

    // CloudScript and events
    ExecuteCloudScriptRequest => ExecuteCloudScriptResult, session("/Client/ExecuteCloudScript");
    WriteClientPlayerEventRequest => WriteEventResponse, session("/Client/WritePlayerEvent");
    WriteClientCharacterEventRequest => WriteEventResponse, session("/Client/WriteCharacterEvent");
    WriteTitleEventRequest => WriteEventResponse, session("/Client/WriteTitleEvent");

    // Matchmaking
    CurrentGamesRequest => CurrentGamesResult, session("/Client/GetCurrentGames");
    GameServerRegionsRequest => GameServerRegionsResult, session("/Client/GetGameServerRegions");
    MatchmakeRequest => MatchmakeResult, session("/Client/Matchmake");
    StartGameRequest => StartGameResult, session("/Client/StartGame");

    // Multiplayer servers
    RequestMultiplayerServerRequest => RequestMultiplayerServerResponse, entity("/MultiplayerServer/RequestMultiplayerServer");
    GetMultiplayerServerDetailsRequest => GetMultiplayerServerDetailsResponse, entity("/MultiplayerServer/GetMultiplayerServerDetails");
    ShutdownMultiplayerServerRequest => EmptyResponse, entity("/MultiplayerServer/ShutdownMultiplayerServer");
    ListMultiplayerServersRequest => ListMultiplayerServersResponse, entity("/MultiplayerServer/ListMultiplayerServers");
    ListQosServersRequest => ListQosServersResponse, entity("/MultiplayerServer/ListQosServers");
    ListVirtualMachineSummariesRequest => ListVirtualMachineSummariesResponse, entity("/MultiplayerServer/ListVirtualMachineSummaries");
    CreateBuildWithManagedContainerRequest => GetBuildResponse, entity("/MultiplayerServer/CreateBuildWithManagedContainer");
    CreateBuildWithCustomContainerRequest => GetBuildResponse, entity("/MultiplayerServer/CreateBuildWithCustomContainer");
    GetBuildRequest => GetBuildResponse, entity("/MultiplayerServer/GetBuild");
    DeleteBuildRequest => EmptyResponse, entity("/MultiplayerServer/DeleteBuild");
    UpdateBuildRegionsRequest => EmptyResponse, entity("/MultiplayerServer/UpdateBuildRegions");
    ListBuildSummariesRequest => ListBuildSummariesResponse, entity("/MultiplayerServer/ListBuildSummaries");
    EnableMultiplayerServersForTitleRequest => EnableMultiplayerServersForTitleResponse, entity("/MultiplayerServer/EnableMultiplayerServersForTitle");
    GetTitleEnabledForMultiplayerServersStatusRequest => GetTitleEnabledForMultiplayerServersStatusResponse, entity("/MultiplayerServer/GetTitleEnabledForMultiplayerServersStatus");
    GetAssetUploadUrlRequest => GetAssetUploadUrlResponse, entity("/MultiplayerServer/GetAssetUploadUrl");
    DeleteAssetRequest => EmptyResponse, entity("/MultiplayerServer/DeleteAsset");
    ListAssetSummariesRequest => ListAssetSummariesResponse, entity("/MultiplayerServer/ListAssetSummaries");
    UploadCertificateRequest => EmptyResponse, entity("/MultiplayerServer/UploadCertificate");
    DeleteCertificateRequest => EmptyResponse, entity("/MultiplayerServer/DeleteCertificate");
    ListCertificateSummariesRequest => ListCertificateSummariesResponse, entity("/MultiplayerServer/ListCertificateSummaries");
    ListContainerImagesRequest => ListContainerImagesResponse, entity("/MultiplayerServer/ListContainerImages");
    ListContainerImageTagsRequest => ListContainerImageTagsResponse, entity("/MultiplayerServer/ListContainerImageTags");
    GetContainerRegistryCredentialsRequest => ContainerRegistryCredentials, entity("/MultiplayerServer/GetContainerRegistryCredentials");
    RolloverContainerRegistryCredentialsRequest => ContainerRegistryCredentials, entity("/MultiplayerServer/RolloverContainerRegistryCredentials");
    CreateRemoteUserRequest => CreateRemoteUserResponse, entity("/MultiplayerServer/CreateRemoteUser");
    DeleteRemoteUserRequest => EmptyResponse, entity("/MultiplayerServer/DeleteRemoteUser");
    GetRemoteLoginEndpointRequest => GetRemoteLoginEndpointResponse, entity("/MultiplayerServer/GetRemoteLoginEndpoint");

    // Entity profiles
    GetEntityProfileRequest => GetEntityProfileResponse, entity("/Profile/GetProfile");
    GetEntityProfilesRequest => GetEntityProfilesResponse, entity("/Profile/GetProfiles");
    GetGlobalPolicyRequest => GetGlobalPolicyResponse, entity("/Profile/GetGlobalPolicy");
    SetGlobalPolicyRequest => SetGlobalPolicyResponse, entity("/Profile/SetGlobalPolicy");
    SetEntityProfilePolicyRequest => SetEntityProfilePolicyResponse, entity("/Profile/SetProfilePolicy");
    SetProfileLanguageRequest => SetProfileLanguageResponse, entity("/Profile/SetProfileLanguage");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_endpoints_need_no_credential() {
        let endpoint = <LoginWithCustomIdRequest as ApiRequest>::ENDPOINT;
        assert_eq!(endpoint.path, "/Client/LoginWithCustomID");
        assert_eq!(endpoint.auth, AuthKind::None);
        assert!(endpoint.title_scoped);
    }

    #[test]
    fn client_endpoints_use_session_ticket() {
        let endpoint = <UpdatePlayerStatisticsRequest as ApiRequest>::ENDPOINT;
        assert_eq!(endpoint.path, "/Client/UpdatePlayerStatistics");
        assert_eq!(endpoint.auth.header_name(), Some("X-Authorization"));
        assert!(!endpoint.title_scoped);
    }

    #[test]
    fn entity_endpoints_use_entity_token() {
        assert_eq!(
            <GetEntityProfileRequest as ApiRequest>::ENDPOINT,
            Endpoint::entity("/Profile/GetProfile")
        );
        assert_eq!(
            <ListQosServersRequest as ApiRequest>::ENDPOINT.auth.header_name(),
            Some("X-EntityToken")
        );
    }

    #[test]
    fn auth_headers() {
        assert_eq!(AuthKind::None.header_name(), None);
        assert_eq!(AuthKind::SessionTicket.header_name(), Some("X-Authorization"));
        assert_eq!(AuthKind::EntityToken.header_name(), Some("X-EntityToken"));
    }

    #[test]
    fn platform_logins_carry_title_id() {
        for endpoint in [
            <LoginWithSteamRequest as ApiRequest>::ENDPOINT,
            <LoginWithIosDeviceIdRequest as ApiRequest>::ENDPOINT,
            <RegisterPlayFabUserRequest as ApiRequest>::ENDPOINT,
            <RegisterWithWindowsHelloRequest as ApiRequest>::ENDPOINT,
            <GetTitlePublicKeyRequest as ApiRequest>::ENDPOINT,
            <SendAccountRecoveryEmailRequest as ApiRequest>::ENDPOINT,
        ] {
            assert_eq!(endpoint.auth, AuthKind::None, "{}", endpoint.path);
            assert!(endpoint.title_scoped, "{}", endpoint.path);
        }
        assert_eq!(<LoginWithIosDeviceIdRequest as ApiRequest>::ENDPOINT.path, "/Client/LoginWithIOSDeviceID");
    }

    #[test]
    fn routes_keep_service_spelling() {
        assert_eq!(
            <GetPlayFabIdsFromSteamIdsRequest as ApiRequest>::ENDPOINT.path,
            "/Client/GetPlayFabIDsFromSteamIDs"
        );
        assert_eq!(<DeviceInfoRequest as ApiRequest>::ENDPOINT.path, "/Client/ReportDeviceInfo");
        assert_eq!(<ReportPlayerClientRequest as ApiRequest>::ENDPOINT.path, "/Client/ReportPlayer");
        assert_eq!(<CurrentGamesRequest as ApiRequest>::ENDPOINT.path, "/Client/GetCurrentGames");
        assert_eq!(
            <GetLeaderboardForUsersCharactersRequest as ApiRequest>::ENDPOINT.path,
            "/Client/GetLeaderboardForUserCharacters"
        );
        assert_eq!(
            <GetRemoteLoginEndpointRequest as ApiRequest>::ENDPOINT,
            Endpoint::entity("/MultiplayerServer/GetRemoteLoginEndpoint")
        );
    }

    #[test]
    fn shared_group_writes_use_session_ticket() {
        for endpoint in [
            <UpdateSharedGroupDataRequest as ApiRequest>::ENDPOINT,
            <RemoveSharedGroupMembersRequest as ApiRequest>::ENDPOINT,
        ] {
            assert_eq!(endpoint.auth, AuthKind::SessionTicket);
            assert!(endpoint.path.starts_with("/Client/"));
        }
    }
}
