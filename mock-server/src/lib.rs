//! In-memory stand-in for the PlayFab client API.
//!
//! Speaks the PlayFab wire envelope (`{"code","status","data"}` on success,
//! `{"code","status","error","errorCode","errorMessage"}` on failure) for a
//! small set of `/Client/*` endpoints. State lives for the lifetime of the
//! router and is never persisted.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const DEFAULT_TITLE_ID: &str = "MOCK";
const ENTITY_TYPE: &str = "title_player_account";

#[derive(Debug, Clone)]
pub struct Config {
    pub title_id: String,
}

impl Config {
    /// `PLAYFAB_MOCK_TITLE_ID`, falling back to [`DEFAULT_TITLE_ID`].
    pub fn from_env() -> Self {
        Self {
            title_id: std::env::var("PLAYFAB_MOCK_TITLE_ID").unwrap_or_else(|_| DEFAULT_TITLE_ID.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title_id: DEFAULT_TITLE_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Player {
    pub play_fab_id: String,
    pub custom_id: String,
    pub created: String,
    pub last_login: Option<String>,
    pub statistics: BTreeMap<String, i32>,
    pub data: BTreeMap<String, DataRecord>,
    pub data_version: u32,
    pub currency: BTreeMap<String, i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataRecord {
    pub value: String,
    pub last_updated: String,
    pub permission: String,
}

#[derive(Debug, Default)]
pub struct World {
    /// Keyed by PlayFab id.
    pub players: HashMap<String, Player>,
    /// Custom id to PlayFab id.
    pub custom_ids: HashMap<String, String>,
    /// Session ticket to PlayFab id.
    pub sessions: HashMap<String, String>,
    pub title_data: BTreeMap<String, String>,
    pub catalog: Vec<Value>,
}

impl World {
    fn seeded() -> Self {
        let title_data = BTreeMap::from([
            ("motd".to_string(), "Welcome to the mock title".to_string()),
            ("maxLevel".to_string(), "50".to_string()),
        ]);
        // Deliberately unordered; clients sort by ItemId.
        let catalog = vec![
            json!({"ItemId": "sword", "ItemClass": "weapon", "DisplayName": "Sword",
                   "VirtualCurrencyPrices": {"GO": 100}, "IsStackable": false}),
            json!({"ItemId": "apple", "ItemClass": "food", "DisplayName": "Apple",
                   "VirtualCurrencyPrices": {"GO": 5}, "IsStackable": true,
                   "Consumable": {"UsageCount": 1}}),
            json!({"ItemId": "shield", "ItemClass": "armor", "DisplayName": "Shield",
                   "VirtualCurrencyPrices": {"GO": 80}}),
        ];
        Self {
            title_data,
            catalog,
            ..Default::default()
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<RwLock<World>>,
    pub config: Arc<Config>,
}

pub fn app() -> Router {
    app_with(Config::default())
}

pub fn app_with(config: Config) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(World::seeded())),
        config: Arc::new(config),
    };
    Router::new()
        .route("/Client/LoginWithCustomID", post(login_with_custom_id))
        .route("/Client/GetPlayerStatistics", post(get_player_statistics))
        .route("/Client/UpdatePlayerStatistics", post(update_player_statistics))
        .route("/Client/GetUserData", post(get_user_data))
        .route("/Client/UpdateUserData", post(update_user_data))
        .route("/Client/GetTitleData", post(get_title_data))
        .route("/Client/GetTime", post(get_time))
        .route("/Client/GetCatalogItems", post(get_catalog_items))
        .route("/Client/GetUserInventory", post(get_user_inventory))
        .route("/Client/AddUserVirtualCurrency", post(add_user_virtual_currency))
        .fallback(unknown_endpoint)
        .with_state(state)
}

pub async fn run(listener: TcpListener, config: Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(config)).await
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// A failure rendered as a PlayFab error envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub error_code: i32,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, error: &'static str, error_code: i32, message: impl Into<String>) -> Self {
        Self {
            status,
            error,
            error_code,
            message: message.into(),
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "InvalidParams", 1000, message)
    }

    fn not_authenticated() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "NotAuthenticated",
            1074,
            "This API method does not allow anonymous callers.",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = self.error, code = self.error_code, "rejecting request");
        let body = json!({
            "code": self.status.as_u16(),
            "status": self.status.canonical_reason().unwrap_or_default().replace(' ', ""),
            "error": self.error,
            "errorCode": self.error_code,
            "errorMessage": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

fn ok(data: impl Serialize) -> Json<Value> {
    Json(json!({"code": 200, "status": "OK", "data": data}))
}

fn parse<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) { b"{}" } else { &body[..] };
    serde_json::from_slice(raw).map_err(|e| ApiError::invalid_params(format!("Invalid input parameters: {e}")))
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// PlayFab id of the caller named by `X-Authorization`.
fn session(world: &World, headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get("X-Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|ticket| world.sessions.get(ticket))
        .cloned()
        .ok_or_else(ApiError::not_authenticated)
}

fn player_mut<'a>(world: &'a mut World, headers: &HeaderMap) -> Result<&'a mut Player, ApiError> {
    let id = session(world, headers)?;
    world.players.get_mut(&id).ok_or_else(ApiError::not_authenticated)
}

fn player<'a>(world: &'a World, headers: &HeaderMap) -> Result<&'a Player, ApiError> {
    let id = session(world, headers)?;
    world.players.get(&id).ok_or_else(ApiError::not_authenticated)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginWithCustomId {
    pub custom_id: Option<String>,
    #[serde(default)]
    pub create_account: bool,
    pub title_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyFilter {
    pub keys: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlayerStatistics {
    pub statistic_names: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatisticUpdate {
    pub statistic_name: String,
    pub value: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePlayerStatistics {
    pub statistics: Option<Vec<StatisticUpdate>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserData {
    /// A `null` value removes the key.
    pub data: Option<BTreeMap<String, Option<String>>>,
    pub keys_to_remove: Option<Vec<String>>,
    pub permission: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddUserVirtualCurrency {
    pub virtual_currency: Option<String>,
    pub amount: Option<i32>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn login_with_custom_id(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let input: LoginWithCustomId = parse(&body)?;
    if input.title_id.as_deref().is_some_and(|t| t != state.config.title_id) {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "InvalidTitleId", 1004, "Invalid title id"));
    }
    let custom_id = input
        .custom_id
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::invalid_params("CustomId is required"))?;

    let mut world = state.db.write().await;
    let existing = world.custom_ids.get(&custom_id).cloned();
    let (play_fab_id, newly_created) = match existing {
        Some(id) => (id, false),
        None if input.create_account => {
            let id = Uuid::new_v4().simple().to_string()[..16].to_uppercase();
            let player = Player {
                play_fab_id: id.clone(),
                custom_id: custom_id.clone(),
                created: now(),
                currency: BTreeMap::from([("GO".to_string(), 0), ("GM".to_string(), 0)]),
                ..Default::default()
            };
            world.players.insert(id.clone(), player);
            world.custom_ids.insert(custom_id, id.clone());
            (id, true)
        }
        None => {
            return Err(ApiError::new(StatusCode::BAD_REQUEST, "AccountNotFound", 1001, "User not found"));
        }
    };

    let ticket = format!("{play_fab_id}-{}", Uuid::new_v4().simple());
    world.sessions.insert(ticket.clone(), play_fab_id.clone());

    let login_time = now();
    let last_login = world
        .players
        .get_mut(&play_fab_id)
        .and_then(|p| p.last_login.replace(login_time.clone()));
    tracing::info!(%play_fab_id, newly_created, "player logged in");

    Ok(ok(json!({
        "PlayFabId": play_fab_id,
        "SessionTicket": ticket,
        "NewlyCreated": newly_created,
        "LastLoginTime": last_login,
        "SettingsForUser": {"NeedsAttribution": false, "GatherDeviceInfo": true},
        "EntityToken": {
            "EntityToken": Uuid::new_v4().to_string(),
            "TokenExpiration": (Utc::now() + chrono::Duration::hours(24)).to_rfc3339_opts(SecondsFormat::Millis, true),
            "Entity": {"Id": play_fab_id, "Type": ENTITY_TYPE},
        },
    })))
}

async fn get_player_statistics(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let input: GetPlayerStatistics = parse(&body)?;
    let world = state.db.read().await;
    let player = player(&world, &headers)?;
    let statistics: Vec<Value> = player
        .statistics
        .iter()
        .filter(|(name, _)| input.statistic_names.as_ref().is_none_or(|names| names.contains(name)))
        .map(|(name, value)| json!({"StatisticName": name, "Value": value, "Version": 0}))
        .collect();
    Ok(ok(json!({ "Statistics": statistics })))
}

async fn update_player_statistics(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let input: UpdatePlayerStatistics = parse(&body)?;
    let updates = input
        .statistics
        .ok_or_else(|| ApiError::invalid_params("Statistics is required"))?;
    let mut world = state.db.write().await;
    let player = player_mut(&mut world, &headers)?;
    for update in updates {
        player.statistics.insert(update.statistic_name, update.value);
    }
    Ok(ok(json!({})))
}

async fn get_user_data(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Json<Value>, ApiError> {
    let input: KeyFilter = parse(&body)?;
    let world = state.db.read().await;
    let player = player(&world, &headers)?;
    let data: BTreeMap<&String, &DataRecord> = player
        .data
        .iter()
        .filter(|(key, _)| input.keys.as_ref().is_none_or(|keys| keys.contains(key)))
        .collect();
    Ok(ok(json!({ "Data": data, "DataVersion": player.data_version })))
}

async fn update_user_data(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let input: UpdateUserData = parse(&body)?;
    let permission = input.permission.unwrap_or_else(|| "Private".to_string());
    let mut world = state.db.write().await;
    let player = player_mut(&mut world, &headers)?;
    let stamp = now();
    for (key, value) in input.data.unwrap_or_default() {
        match value {
            Some(value) => {
                let record = DataRecord {
                    value,
                    last_updated: stamp.clone(),
                    permission: permission.clone(),
                };
                player.data.insert(key, record);
            }
            None => {
                player.data.remove(&key);
            }
        }
    }
    for key in input.keys_to_remove.unwrap_or_default() {
        player.data.remove(&key);
    }
    player.data_version += 1;
    Ok(ok(json!({ "DataVersion": player.data_version })))
}

async fn get_title_data(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Json<Value>, ApiError> {
    let input: KeyFilter = parse(&body)?;
    let world = state.db.read().await;
    session(&world, &headers)?;
    let data: BTreeMap<&String, &String> = world
        .title_data
        .iter()
        .filter(|(key, _)| input.keys.as_ref().is_none_or(|keys| keys.contains(key)))
        .collect();
    Ok(ok(json!({ "Data": data })))
}

async fn get_time(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>, ApiError> {
    let world = state.db.read().await;
    session(&world, &headers)?;
    Ok(ok(json!({ "Time": now() })))
}

async fn get_catalog_items(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>, ApiError> {
    let world = state.db.read().await;
    session(&world, &headers)?;
    Ok(ok(json!({ "Catalog": world.catalog })))
}

async fn get_user_inventory(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>, ApiError> {
    let world = state.db.read().await;
    let player = player(&world, &headers)?;
    Ok(ok(json!({
        "Inventory": [],
        "VirtualCurrency": player.currency,
        "VirtualCurrencyRechargeTimes": {},
    })))
}

async fn add_user_virtual_currency(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let input: AddUserVirtualCurrency = parse(&body)?;
    let (Some(code), Some(amount)) = (input.virtual_currency, input.amount) else {
        return Err(ApiError::invalid_params("VirtualCurrency and Amount are required"));
    };
    if amount < 0 {
        return Err(ApiError::invalid_params("Amount must be non-negative"));
    }
    let mut world = state.db.write().await;
    let player = player_mut(&mut world, &headers)?;
    let Some(balance) = player.currency.get_mut(&code) else {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "InvalidVirtualCurrency",
            1051,
            format!("Unknown virtual currency {code}"),
        ));
    };
    *balance = balance.saturating_add(amount);
    Ok(ok(json!({
        "PlayFabId": player.play_fab_id,
        "VirtualCurrency": code,
        "BalanceChange": amount,
        "Balance": *balance,
    })))
}

async fn unknown_endpoint() -> ApiError {
    ApiError::new(
        StatusCode::NOT_FOUND,
        "InvalidAPIEndpoint",
        1131,
        "The requested API endpoint does not exist",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_defaults_create_account_to_false() {
        let input: LoginWithCustomId = serde_json::from_str(r#"{"CustomId":"abc"}"#).unwrap();
        assert_eq!(input.custom_id.as_deref(), Some("abc"));
        assert!(!input.create_account);
        assert!(input.title_id.is_none());
    }

    #[test]
    fn empty_body_parses_as_empty_object() {
        let input: KeyFilter = parse(&Bytes::from_static(b"  ")).unwrap();
        assert!(input.keys.is_none());
    }

    #[test]
    fn malformed_body_is_invalid_params() {
        let err = parse::<KeyFilter>(&Bytes::from_static(b"{nope")).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code, 1000);
    }

    #[test]
    fn user_data_null_means_delete() {
        let input: UpdateUserData = serde_json::from_str(r#"{"Data":{"a":"1","b":null}}"#).unwrap();
        let data = input.data.unwrap();
        assert_eq!(data["a"].as_deref(), Some("1"));
        assert!(data["b"].is_none());
    }

    #[test]
    fn data_record_uses_wire_names() {
        let record = DataRecord {
            value: "v".to_string(),
            last_updated: "2024-01-01T00:00:00.000Z".to_string(),
            permission: "Public".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Value"], "v");
        assert_eq!(json["Permission"], "Public");
    }

    #[test]
    fn config_defaults_to_mock_title() {
        assert_eq!(Config::default().title_id, DEFAULT_TITLE_ID);
    }
}
