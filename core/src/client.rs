//! Typed request dispatch against the PlayFab REST API.
//!
//! # Design
//! `PlayFabClient` splits every call into `build_call` (request record to
//! `HttpRequest`) and `parse_response` (`HttpResponse` to outcome), with a
//! `Transport` doing the round-trip in between. Hosts that own their HTTP
//! stack can drive the two halves themselves; `call` and `execute` chain them
//! over any `Transport`.
//!
//! The client carries only the shared `Settings` and the credentials issued
//! by a login. It never retries and never refreshes tokens. Every failure,
//! whether local, transport or server, is reported to the settings' error
//! handler exactly once before it is returned.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiRequest, AuthKind, Endpoint};
use crate::error::{ErrorCode, JsonErrorEnvelope, JsonSuccessEnvelope, PlayFabError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::models::client::{AttributeInstallRequest, LoginResult};
use crate::outcome::ApiOutcome;
use crate::settings::{AdvertisingIdType, Settings};

const NOT_LOGGED_IN: &str = "Must be logged in to call this method";
const NO_TITLE_ID: &str = "Must have a title id set to call this method";
const EMPTY_ERROR_BODY: &str = "Empty server error response";

/// Tokens presented in the auth header of non-login calls.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub session_ticket: Option<String>,
    pub entity_token: Option<String>,
}

impl Credentials {
    fn for_auth(&self, auth: AuthKind) -> Option<&str> {
        match auth {
            AuthKind::None => None,
            AuthKind::SessionTicket => self.session_ticket.as_deref(),
            AuthKind::EntityToken => self.entity_token.as_deref(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("session_ticket", &self.session_ticket.is_some())
            .field("entity_token", &self.entity_token.is_some())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct PlayFabClient {
    settings: Arc<Settings>,
    credentials: Credentials,
}

impl PlayFabClient {
    pub fn new(settings: impl Into<Arc<Settings>>) -> Self {
        Self {
            settings: settings.into(),
            credentials: Credentials::default(),
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = credentials;
    }

    /// Keep the session ticket and entity token issued by a login.
    pub fn apply_login(&mut self, login: &LoginResult) {
        if let Some(ticket) = &login.session_ticket {
            self.credentials.session_ticket = Some(ticket.clone());
        }
        if let Some(token) = login.entity_token.as_ref().and_then(|t| t.entity_token.as_ref()) {
            self.credentials.entity_token = Some(token.clone());
        }
    }

    /// The install attribution to report after `login`, if the service asked
    /// for one and the host allows it.
    pub fn attribution_request(&self, login: &LoginResult) -> Option<AttributeInstallRequest> {
        let needs_attribution = login
            .settings_for_user
            .as_ref()
            .and_then(|s| s.needs_attribution)
            .unwrap_or(false);
        if !needs_attribution || self.settings.advertising_disabled() {
            return None;
        }
        let id = self.settings.advertising_id()?;
        if id.value.is_empty() {
            return None;
        }
        let mut request = AttributeInstallRequest::default();
        match id.id_type {
            AdvertisingIdType::Idfa => request.idfa = Some(id.value.clone()),
            AdvertisingIdType::Adid => request.adid = Some(id.value.clone()),
        }
        Some(request)
    }

    pub fn build_call<Req: Serialize>(&self, endpoint: Endpoint, request: &Req) -> Result<HttpRequest, PlayFabError> {
        let mut headers = vec![
            ("content-type".to_string(), "application/json".to_string()),
            ("X-PlayFabSDK".to_string(), self.settings.sdk_version_string().to_string()),
        ];
        if let Some(name) = endpoint.auth.header_name() {
            let token = self
                .credentials
                .for_auth(endpoint.auth)
                .ok_or_else(|| PlayFabError::local(ErrorCode::NotAuthenticated, NOT_LOGGED_IN))?;
            headers.push((name.to_string(), token.to_string()));
        }

        let mut body = serde_json::to_value(request).map_err(|e| PlayFabError::json_parse(0, e.to_string()))?;
        if endpoint.title_scoped {
            self.fill_title_id(&mut body)?;
        }
        let body = serde_json::to_string(&body).map_err(|e| PlayFabError::json_parse(0, e.to_string()))?;

        Ok(HttpRequest {
            url: format!("{}{}", self.settings.url(), endpoint.path),
            headers,
            body,
        })
    }

    pub fn build_request<R: ApiRequest>(&self, request: &R) -> Result<HttpRequest, PlayFabError> {
        self.build_call(R::ENDPOINT, request)
    }

    /// Decode a response, notifying the error handler on failure.
    pub fn parse_response<Res: DeserializeOwned>(&self, response: HttpResponse) -> ApiOutcome<Res> {
        self.finish(decode_response(response))
    }

    pub fn call<Req, Res, T>(&self, transport: &T, endpoint: Endpoint, request: &Req) -> ApiOutcome<Res>
    where
        Req: Serialize,
        Res: DeserializeOwned,
        T: Transport + ?Sized,
    {
        tracing::debug!(path = endpoint.path, "dispatching PlayFab call");
        let result = self.build_call(endpoint, request).and_then(|http_request| {
            let response = transport.send(&http_request)?;
            decode_response(response)
        });
        match &result {
            Ok(_) => tracing::debug!(path = endpoint.path, "PlayFab call succeeded"),
            Err(err) => tracing::warn!(
                path = endpoint.path,
                local = err.error.is_local(),
                error = %err,
                "PlayFab call failed"
            ),
        }
        self.finish(result)
    }

    pub fn execute<R, T>(&self, transport: &T, request: &R) -> ApiOutcome<R::Result>
    where
        R: ApiRequest,
        T: Transport + ?Sized,
    {
        self.call(transport, R::ENDPOINT, request)
    }

    fn fill_title_id(&self, body: &mut Value) -> Result<(), PlayFabError> {
        let Value::Object(fields) = body else {
            return Ok(());
        };
        let has_title = fields.get("TitleId").and_then(Value::as_str).is_some_and(|t| !t.is_empty());
        if has_title {
            return Ok(());
        }
        let title_id = self.settings.title_id();
        if title_id.is_empty() {
            return Err(PlayFabError::local(ErrorCode::InvalidTitleId, NO_TITLE_ID));
        }
        fields.insert("TitleId".to_string(), Value::String(title_id.to_string()));
        Ok(())
    }

    fn finish<R>(&self, result: Result<R, PlayFabError>) -> ApiOutcome<R> {
        if let Err(err) = &result {
            self.notify(err);
        }
        result.into()
    }

    fn notify(&self, err: &PlayFabError) {
        let Some(handler) = self.settings.error_handler() else {
            return;
        };
        if panic::catch_unwind(AssertUnwindSafe(|| handler(err))).is_err() {
            tracing::warn!(error = %err, "PlayFab error handler panicked");
        }
    }
}

fn decode_response<Res: DeserializeOwned>(response: HttpResponse) -> Result<Res, PlayFabError> {
    if !response.is_success() {
        if response.body.trim().is_empty() {
            return Err(PlayFabError {
                http_code: response.status,
                ..PlayFabError::local(ErrorCode::ServiceUnavailable, EMPTY_ERROR_BODY)
            });
        }
        return match serde_json::from_str::<JsonErrorEnvelope>(&response.body) {
            Ok(envelope) => Err(PlayFabError::from_envelope(envelope, response.status)),
            Err(_) => Err(PlayFabError::json_parse(response.status, response.body)),
        };
    }

    let envelope: JsonSuccessEnvelope<Value> =
        serde_json::from_str(&response.body).map_err(|e| PlayFabError::json_parse(response.status, e.to_string()))?;
    let data = match envelope.data {
        None | Some(Value::Null) => Value::Object(Default::default()),
        Some(data) => data,
    };
    serde_json::from_value(data).map_err(|e| PlayFabError::json_parse(response.status, e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::error::TransportError;
    use crate::api::shared;
    use crate::models::client::{
        GetAccountInfoResult, GetTimeRequest, GetTimeResult, GetUserDataRequest, GetUserDataResult,
        LoginWithCustomIdRequest, UpdatePlayerStatisticsRequest, UserOrigination, UserSettings,
    };
    use crate::models::profiles::GetEntityProfileRequest;
    use crate::models::EntityKey;

    /// Answers every request with a canned response and records what it saw.
    struct Canned {
        response: Result<HttpResponse, TransportError>,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl Canned {
        fn ok(status: u16, body: &str) -> Self {
            Self {
                response: Ok(HttpResponse {
                    status,
                    headers: Vec::new(),
                    body: body.to_string(),
                }),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn truncated(status: u16) -> Self {
            Self {
                response: Err(TransportError::Body {
                    status,
                    message: "unexpected end of file".to_string(),
                }),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                response: Err(TransportError::Request("connection refused".to_string())),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for Canned {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            self.response.clone()
        }
    }

    fn settings() -> Settings {
        Settings::new("ABCD").with_base_url("http://127.0.0.1:9999/")
    }

    fn logged_in() -> PlayFabClient {
        PlayFabClient::new(settings()).with_credentials(Credentials {
            session_ticket: Some("ticket".to_string()),
            entity_token: Some("entity".to_string()),
        })
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn login_request_injects_title_id_and_no_auth_header() {
        let client = PlayFabClient::new(settings());
        let req = LoginWithCustomIdRequest {
            custom_id: Some("player-1".to_string()),
            create_account: Some(true),
            ..Default::default()
        };
        let http = client.build_request(&req).unwrap();
        assert_eq!(http.url, "http://127.0.0.1:9999/Client/LoginWithCustomID");
        assert_eq!(http.header("Content-Type"), Some("application/json"));
        assert!(http.header("X-PlayFabSDK").unwrap().starts_with("RustSDK-"));
        assert!(http.header("X-Authorization").is_none());
        let body: Value = serde_json::from_str(&http.body).unwrap();
        assert_eq!(body, json!({"CreateAccount": true, "CustomId": "player-1", "TitleId": "ABCD"}));
    }

    #[test]
    fn explicit_title_id_is_kept() {
        let client = PlayFabClient::new(settings());
        let req = LoginWithCustomIdRequest {
            title_id: Some("OTHER".to_string()),
            ..Default::default()
        };
        let body: Value = serde_json::from_str(&client.build_request(&req).unwrap().body).unwrap();
        assert_eq!(body["TitleId"], "OTHER");
    }

    #[test]
    fn login_without_any_title_id_fails_locally() {
        let client = PlayFabClient::new(Settings::new(""));
        let err = client.build_request(&LoginWithCustomIdRequest::default()).unwrap_err();
        assert_eq!(err.error, ErrorCode::InvalidTitleId);
        assert_eq!(err.http_code, 0);
    }

    #[test]
    fn session_call_sends_ticket_header() {
        let http = logged_in().build_request(&GetTimeRequest::default()).unwrap();
        assert_eq!(http.header("X-Authorization"), Some("ticket"));
        assert_eq!(http.body, "{}");
    }

    #[test]
    fn entity_call_sends_entity_token() {
        let req = GetEntityProfileRequest {
            entity: Some(EntityKey::new("E1", "title_player_account")),
            ..Default::default()
        };
        let http = logged_in().build_request(&req).unwrap();
        assert_eq!(http.url, "http://127.0.0.1:9999/Profile/GetProfile");
        assert_eq!(http.header("X-EntityToken"), Some("entity"));
        assert!(http.header("X-Authorization").is_none());
    }

    #[test]
    fn missing_credential_fails_without_sending() {
        let transport = Canned::ok(200, r#"{"code":200,"status":"OK","data":{}}"#);
        let client = PlayFabClient::new(settings());
        let outcome = client.execute(&transport, &UpdatePlayerStatisticsRequest::default());
        let err = outcome.error().unwrap();
        assert_eq!(err.error, ErrorCode::NotAuthenticated);
        assert_eq!(err.error_message, NOT_LOGGED_IN);
        assert!(transport.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn success_envelope_yields_result() {
        let outcome: ApiOutcome<GetTimeResult> = logged_in().parse_response(response(
            200,
            r#"{"code":200,"status":"OK","data":{"Time":"2024-03-01T10:00:00.000Z"}}"#,
        ));
        let time = outcome.into_result().unwrap().time.unwrap();
        assert_eq!(time.to_string(), "2024-03-01T10:00:00.000Z");
    }

    #[test]
    fn missing_or_null_data_is_an_empty_result() {
        let client = logged_in();
        let missing: ApiOutcome<GetUserDataResult> = client.parse_response(response(200, r#"{"code":200}"#));
        assert_eq!(missing.into_result().unwrap(), GetUserDataResult::default());
        let null: ApiOutcome<GetUserDataResult> = client.parse_response(response(200, r#"{"data":null}"#));
        assert!(null.is_success());
    }

    #[test]
    fn non_json_success_body_is_parse_error() {
        let outcome: ApiOutcome<GetTimeResult> = logged_in().parse_response(response(200, "<html>"));
        let err = outcome.error().unwrap();
        assert_eq!(err.error, ErrorCode::JsonParseError);
        assert_eq!(err.http_code, 200);
    }

    #[test]
    fn shape_mismatch_is_parse_error() {
        let outcome: ApiOutcome<GetTimeResult> =
            logged_in().parse_response(response(200, r#"{"data":{"Time":42}}"#));
        assert_eq!(outcome.error().unwrap().error, ErrorCode::JsonParseError);
    }

    #[test]
    fn error_envelope_maps_code_and_details() {
        let body = r#"{"code":400,"status":"BadRequest","error":"InvalidParams","errorCode":1000,
            "errorMessage":"Invalid input parameters","errorDetails":{"Keys":["too many"]}}"#;
        let outcome: ApiOutcome<GetUserDataResult> = logged_in().parse_response(response(400, body));
        let err = outcome.error().unwrap();
        assert_eq!(err.http_code, 400);
        assert_eq!(err.http_status, "BadRequest");
        assert_eq!(err.error, ErrorCode::InvalidParams);
        assert_eq!(err.error_message, "Invalid input parameters");
        assert_eq!(err.error_details.as_ref().unwrap()["Keys"], vec!["too many".to_string()]);
    }

    #[test]
    fn unrecognized_error_code_becomes_unknown() {
        let outcome: ApiOutcome<GetUserDataResult> =
            logged_in().parse_response(response(500, r#"{"code":500,"errorCode":87654321,"errorMessage":"?"}"#));
        assert_eq!(outcome.error().unwrap().error, ErrorCode::Unknown);
    }

    #[test]
    fn empty_error_body_is_service_unavailable() {
        let outcome: ApiOutcome<GetUserDataResult> = logged_in().parse_response(response(503, "  "));
        let err = outcome.error().unwrap();
        assert_eq!(err.error, ErrorCode::ServiceUnavailable);
        assert_eq!(err.error_message, EMPTY_ERROR_BODY);
        assert_eq!(err.http_code, 503);
    }

    #[test]
    fn unparseable_error_body_keeps_raw_text() {
        let outcome: ApiOutcome<GetUserDataResult> = logged_in().parse_response(response(502, "Bad Gateway"));
        let err = outcome.error().unwrap();
        assert_eq!(err.error, ErrorCode::JsonParseError);
        assert_eq!(err.error_message, "Bad Gateway");
        assert_eq!(err.http_code, 502);
    }

    #[test]
    fn transport_failure_is_connection_error() {
        let transport = Canned::unreachable();
        let outcome = logged_in().execute(&transport, &GetUserDataRequest::default());
        let err = outcome.error().unwrap();
        assert_eq!(err.error, ErrorCode::ConnectionError);
        assert_eq!(err.http_code, 0);
        assert!(err.error_message.contains("connection refused"));
        assert_eq!(transport.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn execute_posts_to_bound_endpoint() {
        let transport = Canned::ok(200, r#"{"code":200,"status":"OK","data":{"Data":{}}}"#);
        let req = GetUserDataRequest {
            keys: Some(vec!["level".to_string()]),
            ..Default::default()
        };
        let outcome = logged_in().execute(&transport, &req);
        assert!(outcome.is_success());
        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].url, "http://127.0.0.1:9999/Client/GetUserData");
        assert_eq!(seen[0].body, r#"{"Keys":["level"]}"#);
    }

    #[test]
    fn handler_sees_every_failure_once() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let settings = settings().with_error_handler(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        let client = PlayFabClient::new(settings);

        // build failure
        let _ = client.execute(&Canned::unreachable(), &GetTimeRequest::default());
        // transport failure
        let client = client.with_credentials(Credentials {
            session_ticket: Some("t".to_string()),
            ..Default::default()
        });
        let _ = client.execute(&Canned::unreachable(), &GetTimeRequest::default());
        // server failure
        let _ = client.execute(&Canned::ok(400, r#"{"errorCode":1000}"#), &GetTimeRequest::default());
        // success does not notify
        let _ = client.execute(&Canned::ok(200, r#"{"data":{}}"#), &GetTimeRequest::default());

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn panicking_handler_does_not_change_outcome() {
        let settings = settings().with_error_handler(|_| panic!("handler bug"));
        let client = PlayFabClient::new(settings);
        let outcome = client.execute(&Canned::unreachable(), &GetTimeRequest::default());
        assert_eq!(outcome.error().unwrap().error, ErrorCode::NotAuthenticated);
    }

    #[test]
    fn apply_login_stores_tokens() {
        let login: LoginResult = serde_json::from_value(json!({
            "PlayFabId": "P1",
            "SessionTicket": "S-1",
            "EntityToken": {"EntityToken": "E-1", "Entity": {"Id": "E1", "Type": "title_player_account"}}
        }))
        .unwrap();
        let mut client = PlayFabClient::new(settings());
        client.apply_login(&login);
        assert_eq!(client.credentials().session_ticket.as_deref(), Some("S-1"));
        assert_eq!(client.credentials().entity_token.as_deref(), Some("E-1"));
    }

    #[test]
    fn attribution_follows_login_flag_and_settings() {
        let login = LoginResult {
            settings_for_user: Some(UserSettings {
                needs_attribution: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let client = PlayFabClient::new(settings().with_advertising_id(AdvertisingIdType::Idfa, "ad-1"));
        let req = client.attribution_request(&login).unwrap();
        assert_eq!(req.idfa.as_deref(), Some("ad-1"));
        assert!(req.adid.is_none());

        let disabled = PlayFabClient::new(
            settings()
                .with_advertising_id(AdvertisingIdType::Adid, "ad-2")
                .with_advertising_disabled(true),
        );
        assert!(disabled.attribution_request(&login).is_none());

        let no_id = PlayFabClient::new(settings());
        assert!(no_id.attribution_request(&login).is_none());

        assert!(client.attribution_request(&LoginResult::default()).is_none());
    }

    #[test]
    fn credentials_debug_hides_tokens() {
        let text = format!("{:?}", logged_in().credentials());
        assert!(!text.contains("\"ticket\""));
        assert!(text.contains("session_ticket: true"));
    }

    #[test]
    fn truncated_body_keeps_status() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let client = PlayFabClient::new(settings().with_error_handler(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .with_credentials(Credentials {
            session_ticket: Some("ticket".to_string()),
            ..Default::default()
        });

        let err = client
            .execute(&Canned::truncated(200), &GetUserDataRequest::default())
            .into_result()
            .unwrap_err();
        assert_eq!(err.error, ErrorCode::JsonParseError);
        assert_eq!(err.http_code, 200);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unlisted_enum_value_does_not_fail_the_call() {
        let body = r#"{"code":200,"status":"OK","data":{"AccountInfo":{"PlayFabId":"P1","TitleInfo":{"Origination":"BrandNewPlatform"}}}}"#;
        let result = logged_in()
            .parse_response::<GetAccountInfoResult>(response(200, body))
            .into_result()
            .unwrap();
        let info = result.account_info.unwrap();
        assert_eq!(info.play_fab_id.as_deref(), Some("P1"));
        assert_eq!(info.title_info.unwrap().origination, Some(UserOrigination::Unknown));
    }

    #[test]
    fn out_of_range_envelope_code_falls_back_to_status() {
        let body = r#"{"code":-1,"status":"BadRequest","error":"AccountNotFound","errorCode":1001,"errorMessage":"User not found"}"#;
        let err = logged_in()
            .parse_response::<GetTimeResult>(response(400, body))
            .into_result()
            .unwrap_err();
        assert_eq!(err.http_code, 400);
        assert_eq!(err.error, ErrorCode::AccountNotFound);
        assert_eq!(err.error_message, "User not found");
    }

    #[test]
    fn shared_endpoint_reuses_request_record() {
        let transport = Canned::ok(200, r#"{"code":200,"status":"OK","data":{"DataVersion":4}}"#);
        let result: GetUserDataResult = logged_in()
            .call(&transport, shared::GET_USER_READ_ONLY_DATA, &GetUserDataRequest::default())
            .into_result()
            .unwrap();
        assert_eq!(result.data_version, Some(4));

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].url, "http://127.0.0.1:9999/Client/GetUserReadOnlyData");
        assert_eq!(seen[0].header("X-Authorization"), Some("ticket"));
    }
}
