//! End-to-end calls against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `PlayFabClient` over
//! real HTTP with `UreqTransport`. Validates that request building, the auth
//! headers and envelope parsing agree with an actual server.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::SocketAddr;

use playfab_core::models::client::{
    AddUserVirtualCurrencyRequest, GetCatalogItemsRequest, GetPlayerStatisticsRequest, GetTitleDataRequest,
    GetUserDataRequest, LoginWithCustomIdRequest, StatisticUpdate, UpdatePlayerStatisticsRequest,
    UpdateUserDataRequest,
};
use playfab_core::{sort_by_identifier, ErrorCode, Identified, PlayFabClient, Settings, UreqTransport};
use playfab_mock_server::{Config, DEFAULT_TITLE_ID};

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            playfab_mock_server::run(listener, Config::default()).await
        })
        .unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr) -> PlayFabClient {
    PlayFabClient::new(Settings::new(DEFAULT_TITLE_ID).with_base_url(format!("http://{addr}")))
}

fn login(client: &mut PlayFabClient, transport: &UreqTransport, custom_id: &str) {
    let req = LoginWithCustomIdRequest {
        custom_id: Some(custom_id.to_string()),
        create_account: Some(true),
        ..Default::default()
    };
    let result = client.execute(transport, &req).into_result().unwrap();
    assert!(result.session_ticket.is_some());
    client.apply_login(&result);
}

#[test]
fn player_session_lifecycle() {
    let addr = start_server();
    let transport = UreqTransport::new();
    let mut client = client_for(addr);

    // Step 1: login creates the account and stores the ticket.
    login(&mut client, &transport, "integration-player");
    assert!(client.credentials().session_ticket.is_some());
    assert!(client.credentials().entity_token.is_some());

    // Step 2: update statistics; the empty result carries no error.
    let req = UpdatePlayerStatisticsRequest {
        statistics: Some(vec![StatisticUpdate {
            statistic_name: Some("level".to_string()),
            value: Some(42),
            ..Default::default()
        }]),
    };
    let outcome = client.execute(&transport, &req);
    assert!(outcome.is_success(), "{:?}", outcome.error());

    // Step 3: read them back.
    let stats = client
        .execute(&transport, &GetPlayerStatisticsRequest::default())
        .into_result()
        .unwrap()
        .statistics
        .unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].statistic_name.as_deref(), Some("level"));
    assert_eq!(stats[0].value, Some(42));

    // Step 4: user data write and read.
    let req = UpdateUserDataRequest {
        data: Some([("class".to_string(), "mage".to_string())].into()),
        ..Default::default()
    };
    let updated = client.execute(&transport, &req).into_result().unwrap();
    assert_eq!(updated.data_version, Some(1));

    let data = client
        .execute(&transport, &GetUserDataRequest::default())
        .into_result()
        .unwrap()
        .data
        .unwrap();
    assert_eq!(data["class"].value.as_deref(), Some("mage"));
    assert!(data["class"].last_updated.is_some());

    // Step 5: virtual currency.
    let req = AddUserVirtualCurrencyRequest {
        virtual_currency: Some("GO".to_string()),
        amount: Some(10),
    };
    let balance = client.execute(&transport, &req).into_result().unwrap();
    assert_eq!(balance.balance, Some(10));

    // Step 6: title data.
    let title = client
        .execute(&transport, &GetTitleDataRequest::default())
        .into_result()
        .unwrap();
    assert!(title.data.unwrap().contains_key("motd"));
}

#[test]
fn catalog_sorts_by_item_id() {
    let addr = start_server();
    let transport = UreqTransport::new();
    let mut client = client_for(addr);
    login(&mut client, &transport, "catalog-player");

    let mut catalog = client
        .execute(&transport, &GetCatalogItemsRequest::default())
        .into_result()
        .unwrap()
        .catalog
        .unwrap();
    sort_by_identifier(&mut catalog);
    let ids: Vec<_> = catalog.iter().map(|item| item.identifier()).collect();
    assert_eq!(ids, vec![Some("apple"), Some("shield"), Some("sword")]);
    assert_eq!(catalog[0].consumable.as_ref().and_then(|c| c.usage_count), Some(1));
}

#[test]
fn unknown_account_maps_server_error() {
    let addr = start_server();
    let transport = UreqTransport::new();
    let client = client_for(addr);

    let req = LoginWithCustomIdRequest {
        custom_id: Some("never-created".to_string()),
        ..Default::default()
    };
    let err = client.execute(&transport, &req).into_result().unwrap_err();
    assert_eq!(err.error, ErrorCode::AccountNotFound);
    assert_eq!(err.http_code, 400);
    assert_eq!(err.error_message, "User not found");
}

#[test]
fn revoked_ticket_is_not_authenticated() {
    let addr = start_server();
    let transport = UreqTransport::new();
    let client = client_for(addr).with_credentials(playfab_core::Credentials {
        session_ticket: Some("not-a-real-ticket".to_string()),
        ..Default::default()
    });

    let err = client
        .execute(&transport, &GetUserDataRequest::default())
        .into_result()
        .unwrap_err();
    assert_eq!(err.error, ErrorCode::NotAuthenticated);
    assert_eq!(err.http_code, 401);
}

#[test]
fn unreachable_server_is_connection_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let transport = UreqTransport::new();
    let client = client_for(addr);

    let outcome = client.execute(&transport, &LoginWithCustomIdRequest::default());
    assert!(outcome.result().is_none());
    let err = outcome.error().unwrap();
    assert_eq!(err.error, ErrorCode::ConnectionError);
    assert_eq!(err.http_code, 0);
}

/// Answers one request with a 200 status line and a body cut short.
fn start_truncating_server() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut body = vec![0; content_length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = reader.into_inner();
        stream
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 64\r\n\r\n{\"code\":200,")
            .unwrap();
    });

    addr
}

#[test]
fn truncated_body_is_parse_error_with_status() {
    let addr = start_truncating_server();
    let transport = UreqTransport::new();
    let client = client_for(addr);

    let req = LoginWithCustomIdRequest {
        custom_id: Some("cut-short".to_string()),
        ..Default::default()
    };
    let err = client.execute(&transport, &req).into_result().unwrap_err();
    assert_eq!(err.error, ErrorCode::JsonParseError);
    assert_eq!(err.http_code, 200);
}

