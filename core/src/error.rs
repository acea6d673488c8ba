//! PlayFab error registry, error value and wire envelopes.
//!
//! # Design
//! `ErrorCode` is the compiled-in catalogue of every failure the service can
//! report, each variant carrying its stable integer as the discriminant.
//! Encoding (`code`) is total; decoding (`from_code`) falls back to
//! `Unknown` so an SDK built against an older catalogue keeps working when
//! the server grows new codes.
//!
//! `PlayFabError` is a value, not a control-flow interruption: every failed
//! call hands one back inside `ApiOutcome::Failure`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Error codes returned by PlayFab APIs.
///
/// `Unknown`, `ConnectionError` and `JsonParseError` are never sent by the
/// server; the client synthesizes them for unrecognized codes, transport
/// failures and malformed bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    Unknown = 1,
    ConnectionError = 2,
    JsonParseError = 3,
    InvalidParams = 1000,
    AccountNotFound = 1001,
    AccountBanned = 1002,
    InvalidUsernameOrPassword = 1003,
    InvalidTitleId = 1004,
    InvalidEmailAddress = 1005,
    EmailAddressNotAvailable = 1006,
    InvalidUsername = 1007,
    InvalidPassword = 1008,
    UsernameNotAvailable = 1009,
    InvalidSteamTicket = 1010,
    AccountAlreadyLinked = 1011,
    LinkedAccountAlreadyClaimed = 1012,
    InvalidFacebookToken = 1013,
    AccountNotLinked = 1014,
    FailedByPaymentProvider = 1015,
    CouponCodeNotFound = 1016,
    InvalidContainerItem = 1017,
    ContainerNotOwned = 1018,
    KeyNotOwned = 1019,
    InvalidItemIdInTable = 1020,
    InvalidReceipt = 1021,
    ReceiptAlreadyUsed = 1022,
    ReceiptCancelled = 1023,
    GameNotFound = 1024,
    GameModeNotFound = 1025,
    InvalidGoogleToken = 1026,
    UserIsNotPartOfDeveloper = 1027,
    InvalidTitleForDeveloper = 1028,
    TitleNameConflicts = 1029,
    UserisNotValid = 1030,
    ValueAlreadyExists = 1031,
    BuildNotFound = 1032,
    PlayerNotInGame = 1033,
    InvalidTicket = 1034,
    InvalidDeveloper = 1035,
    InvalidOrderInfo = 1036,
    RegistrationIncomplete = 1037,
    InvalidPlatform = 1038,
    UnknownError = 1039,
    SteamApplicationNotOwned = 1040,
    WrongSteamAccount = 1041,
    TitleNotActivated = 1042,
    RegistrationSessionNotFound = 1043,
    NoSuchMod = 1044,
    FileNotFound = 1045,
    DuplicateEmail = 1046,
    ItemNotFound = 1047,
    ItemNotOwned = 1048,
    ItemNotRecycleable = 1049,
    ItemNotAffordable = 1050,
    InvalidVirtualCurrency = 1051,
    WrongVirtualCurrency = 1052,
    WrongPrice = 1053,
    NonPositiveValue = 1054,
    InvalidRegion = 1055,
    RegionAtCapacity = 1056,
    ServerFailedToStart = 1057,
    NameNotAvailable = 1058,
    InsufficientFunds = 1059,
    InvalidDeviceID = 1060,
    InvalidPushNotificationToken = 1061,
    NoRemainingUses = 1062,
    InvalidPaymentProvider = 1063,
    PurchaseInitializationFailure = 1064,
    DuplicateUsername = 1065,
    InvalidBuyerInfo = 1066,
    NoGameModeParamsSet = 1067,
    BodyTooLarge = 1068,
    ReservedWordInBody = 1069,
    InvalidTypeInBody = 1070,
    InvalidRequest = 1071,
    ReservedEventName = 1072,
    InvalidUserStatistics = 1073,
    NotAuthenticated = 1074,
    StreamAlreadyExists = 1075,
    ErrorCreatingStream = 1076,
    StreamNotFound = 1077,
    InvalidAccount = 1078,
    PurchaseDoesNotExist = 1080,
    InvalidPurchaseTransactionStatus = 1081,
    APINotEnabledForGameClientAccess = 1082,
    NoPushNotificationARNForTitle = 1083,
    BuildAlreadyExists = 1084,
    BuildPackageDoesNotExist = 1085,
    CustomAnalyticsEventsNotEnabledForTitle = 1087,
    InvalidSharedGroupId = 1088,
    NotAuthorized = 1089,
    MissingTitleGoogleProperties = 1090,
    InvalidItemProperties = 1091,
    InvalidPSNAuthCode = 1092,
    InvalidItemId = 1093,
    PushNotEnabledForAccount = 1094,
    PushServiceError = 1095,
    ReceiptDoesNotContainInAppItems = 1096,
    ReceiptContainsMultipleInAppItems = 1097,
    InvalidBundleID = 1098,
    JavascriptException = 1099,
    InvalidSessionTicket = 1100,
    UnableToConnectToDatabase = 1101,
    InternalServerError = 1110,
    InvalidReportDate = 1111,
    ReportNotAvailable = 1112,
    DatabaseThroughputExceeded = 1113,
    InvalidLobbyId = 1114,
    InvalidGameTicket = 1115,
    ExpiredGameTicket = 1116,
    GameTicketDoesNotMatchLobby = 1117,
    LinkedDeviceAlreadyClaimed = 1118,
    DeviceAlreadyLinked = 1119,
    DeviceNotLinked = 1120,
    PartialFailure = 1121,
    PublisherNotSet = 1122,
    ServiceUnavailable = 1123,
    VersionNotFound = 1124,
    RevisionNotFound = 1125,
    InvalidPublisherId = 1126,
    DownstreamServiceUnavailable = 1127,
    APINotIncludedInTitleUsageTier = 1128,
    DAULimitExceeded = 1129,
    APIRequestLimitExceeded = 1130,
    InvalidAPIEndpoint = 1131,
    BuildNotAvailable = 1132,
    ConcurrentEditError = 1133,
    ContentNotFound = 1134,
    CharacterNotFound = 1135,
    CloudScriptNotFound = 1136,
    ContentQuotaExceeded = 1137,
    InvalidCharacterStatistics = 1138,
    PhotonNotEnabledForTitle = 1139,
    PhotonApplicationNotFound = 1140,
    PhotonApplicationNotAssociatedWithTitle = 1141,
    InvalidEmailOrPassword = 1142,
    FacebookAPIError = 1143,
    InvalidContentType = 1144,
    KeyLengthExceeded = 1145,
    DataLengthExceeded = 1146,
    TooManyKeys = 1147,
    FreeTierCannotHaveVirtualCurrency = 1148,
    MissingAmazonSharedKey = 1149,
    AmazonValidationError = 1150,
    InvalidPSNIssuerId = 1151,
    PSNInaccessible = 1152,
    ExpiredAuthToken = 1153,
    FailedToGetEntitlements = 1154,
    FailedToConsumeEntitlement = 1155,
    TradeAcceptingUserNotAllowed = 1156,
    TradeInventoryItemIsAssignedToCharacter = 1157,
    TradeInventoryItemIsBundle = 1158,
    TradeStatusNotValidForCancelling = 1159,
    TradeStatusNotValidForAccepting = 1160,
    TradeDoesNotExist = 1161,
    TradeCancelled = 1162,
    TradeAlreadyFilled = 1163,
    TradeWaitForStatusTimeout = 1164,
    TradeInventoryItemExpired = 1165,
    TradeMissingOfferedAndAcceptedItems = 1166,
    TradeAcceptedItemIsBundle = 1167,
    TradeAcceptedItemIsStackable = 1168,
    TradeInventoryItemInvalidStatus = 1169,
    TradeAcceptedCatalogItemInvalid = 1170,
    TradeAllowedUsersInvalid = 1171,
    TradeInventoryItemDoesNotExist = 1172,
    TradeInventoryItemIsConsumed = 1173,
    TradeInventoryItemIsStackable = 1174,
    TradeAcceptedItemsMismatch = 1175,
    InvalidKongregateToken = 1176,
    FeatureNotConfiguredForTitle = 1177,
    NoMatchingCatalogItemForReceipt = 1178,
    InvalidCurrencyCode = 1179,
    NoRealMoneyPriceForCatalogItem = 1180,
    TradeInventoryItemIsNotTradable = 1181,
    TradeAcceptedCatalogItemIsNotTradable = 1182,
    UsersAlreadyFriends = 1183,
    LinkedIdentifierAlreadyClaimed = 1184,
    CustomIdNotLinked = 1185,
    TotalDataSizeExceeded = 1186,
    DeleteKeyConflict = 1187,
    InvalidXboxLiveToken = 1188,
    ExpiredXboxLiveToken = 1189,
    ResettableStatisticVersionRequired = 1190,
    NotAuthorizedByTitle = 1191,
    NoPartnerEnabled = 1192,
    InvalidPartnerResponse = 1193,
    APINotEnabledForGameServerAccess = 1194,
    StatisticNotFound = 1195,
    StatisticNameConflict = 1196,
    StatisticVersionClosedForWrites = 1197,
    StatisticVersionInvalid = 1198,
}

impl ErrorCode {
    /// Stable integer for this code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a code by exact integer match. Unrecognized integers map to
    /// `Unknown`.
    pub fn from_code(code: i32) -> Self {
        Self::iter().find(|c| c.code() == code).unwrap_or(Self::Unknown)
    }

    /// Registry name, identical to the variant name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// True for the codes the client synthesizes locally.
    pub fn is_local(self) -> bool {
        matches!(self, Self::Unknown | Self::ConnectionError | Self::JsonParseError)
    }
}

/// A failed PlayFab call.
///
/// `http_code` is 0 when no HTTP response was obtained (transport failure or
/// a request that failed before being sent).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error} ({code}, HTTP {http_code}): {error_message}", code = .error.code())]
pub struct PlayFabError {
    pub http_code: u16,
    pub http_status: String,
    pub error: ErrorCode,
    pub error_message: String,
    pub error_details: Option<BTreeMap<String, Vec<String>>>,
}

impl PlayFabError {
    /// Build an error that never reached the server.
    pub fn local(error: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            http_code: 0,
            http_status: String::new(),
            error,
            error_message: message.into(),
            error_details: None,
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Self::local(ErrorCode::ConnectionError, message)
    }

    /// Malformed body. `http_code` keeps the status of the response that
    /// carried it.
    pub fn json_parse(http_code: u16, message: impl Into<String>) -> Self {
        Self {
            http_code,
            ..Self::local(ErrorCode::JsonParseError, message)
        }
    }

    /// Translate a server error envelope. The status line of the HTTP
    /// response fills in whatever the envelope leaves out.
    pub fn from_envelope(envelope: JsonErrorEnvelope, http_code: u16) -> Self {
        Self {
            http_code: envelope
                .code
                .and_then(|code| u16::try_from(code).ok())
                .unwrap_or(http_code),
            http_status: envelope
                .status
                .or(envelope.error)
                .unwrap_or_default(),
            error: envelope
                .error_code
                .map(ErrorCode::from_code)
                .unwrap_or(ErrorCode::Unknown),
            error_message: envelope.error_message.unwrap_or_default(),
            error_details: envelope.error_details,
        }
    }
}

/// Wire shape of a non-2xx response body.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonErrorEnvelope {
    pub code: Option<i64>,
    pub status: Option<String>,
    pub error: Option<String>,
    pub error_code: Option<i32>,
    pub error_message: Option<String>,
    pub error_details: Option<BTreeMap<String, Vec<String>>>,
}

/// Wire shape of a 2xx response body.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSuccessEnvelope<T> {
    pub code: Option<i64>,
    pub status: Option<String>,
    pub data: Option<T>,
}

/// The transport could not deliver a complete HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// No response arrived: DNS, connect, TLS or a dropped connection before
    /// the status line.
    #[error("transport failed: {0}")]
    Request(String),

    /// The status line arrived but the body could not be read.
    #[error("response body unreadable (HTTP {status}): {message}")]
    Body { status: u16, message: String },
}

impl From<TransportError> for PlayFabError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Request(message) => PlayFabError::connection(message),
            TransportError::Body { status, message } => PlayFabError::json_parse(status, message),
        }
    }
}

/// Settings could not be assembled from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn reserved_codes_have_fixed_integers() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ConnectionError.code(), 2);
        assert_eq!(ErrorCode::JsonParseError.code(), 3);
        assert_eq!(ErrorCode::StatisticVersionInvalid.code(), 1198);
    }

    #[test]
    fn unrecognized_code_falls_back_to_unknown() {
        assert_eq!(ErrorCode::from_code(87654321), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_code(-1), ErrorCode::Unknown);
        // 1079 and 1086 are holes in the catalogue.
        assert_eq!(ErrorCode::from_code(1079), ErrorCode::Unknown);
        assert_eq!(ErrorCode::from_code(1086), ErrorCode::Unknown);
    }

    #[test]
    fn registry_round_trips_every_known_code() {
        for code in ErrorCode::iter() {
            assert_eq!(ErrorCode::from_code(code.code()), code, "{code}");
            assert_eq!(ErrorCode::from_code(code.code()).code(), code.code());
        }
    }

    #[test]
    fn registry_integers_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in ErrorCode::iter() {
            assert!(seen.insert(code.code()), "duplicate integer for {code}");
        }
        assert_eq!(seen.len(), 193);
    }

    #[test]
    fn name_lookup_matches_variant() {
        assert_eq!(ErrorCode::AccountNotFound.name(), "AccountNotFound");
        assert_eq!(ErrorCode::from_str("NotAuthenticated").unwrap(), ErrorCode::NotAuthenticated);
        assert!(ErrorCode::from_str("NoSuchThing").is_err());
    }

    #[test]
    fn local_codes_are_flagged() {
        assert!(ErrorCode::ConnectionError.is_local());
        assert!(!ErrorCode::InvalidParams.is_local());
    }

    #[test]
    fn envelope_maps_error_code() {
        let envelope: JsonErrorEnvelope = serde_json::from_str(
            r#"{"code":400,"status":"BadRequest","error":"AccountNotFound","errorCode":1001,"errorMessage":"User not found"}"#,
        )
        .unwrap();
        let err = PlayFabError::from_envelope(envelope, 400);
        assert_eq!(err.http_code, 400);
        assert_eq!(err.http_status, "BadRequest");
        assert_eq!(err.error, ErrorCode::AccountNotFound);
        assert_eq!(err.error_message, "User not found");
        assert!(err.error_details.is_none());
    }

    #[test]
    fn envelope_without_error_code_is_unknown() {
        let err = PlayFabError::from_envelope(JsonErrorEnvelope::default(), 503);
        assert_eq!(err.http_code, 503);
        assert_eq!(err.error, ErrorCode::Unknown);
    }

    #[test]
    fn envelope_keeps_error_details() {
        let envelope: JsonErrorEnvelope = serde_json::from_str(
            r#"{"code":400,"status":"BadRequest","errorCode":1000,"errorMessage":"Invalid input parameters","errorDetails":{"CustomId":["The CustomId field is required."]}}"#,
        )
        .unwrap();
        let err = PlayFabError::from_envelope(envelope, 400);
        assert_eq!(err.error, ErrorCode::InvalidParams);
        let details = err.error_details.unwrap();
        assert_eq!(details["CustomId"], vec!["The CustomId field is required.".to_string()]);
    }

    #[test]
    fn display_includes_name_and_code() {
        let err = PlayFabError::connection("connection refused");
        assert_eq!(err.to_string(), "ConnectionError (2, HTTP 0): connection refused");
    }

    #[test]
    fn out_of_range_envelope_code_keeps_error_code() {
        for code in [-1, 70000] {
            let envelope: JsonErrorEnvelope = serde_json::from_value(serde_json::json!({
                "code": code,
                "status": "BadRequest",
                "errorCode": 1001,
                "errorMessage": "User not found"
            }))
            .unwrap();
            let err = PlayFabError::from_envelope(envelope, 400);
            assert_eq!(err.http_code, 400, "code {code}");
            assert_eq!(err.error, ErrorCode::AccountNotFound);
            assert_eq!(err.error_message, "User not found");
        }
    }

    #[test]
    fn transport_errors_map_by_stage() {
        let err = PlayFabError::from(TransportError::Request("connection refused".to_string()));
        assert_eq!(err.error, ErrorCode::ConnectionError);
        assert_eq!(err.http_code, 0);

        let err = PlayFabError::from(TransportError::Body {
            status: 200,
            message: "unexpected end of file".to_string(),
        });
        assert_eq!(err.error, ErrorCode::JsonParseError);
        assert_eq!(err.http_code, 200);
    }
}
