use mockito::Matcher;
use rust_decimal_macros::dec;
use uuid::Uuid;

use arbdash::api::ApiClient;
use arbdash::models::{NewExchange, SignalStatus, TradeStatus, Venue};

fn client_for(server: &mockito::ServerGuard) -> ApiClient {
    ApiClient::new(reqwest::Client::new(), format!("{}/api", server.url()))
}

#[tokio::test]
async fn get_stats_parses_the_aggregate() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "total_signals": 42,
                "total_trades": 7,
                "open_trades": 2,
                "total_profit": 13.75,
                "today_profit": -1.25,
                "success_rate": 60.0
            }"#,
        )
        .create_async()
        .await;

    let stats = client_for(&server).get_stats().await.unwrap();
    assert_eq!(stats.total_signals, 42);
    assert_eq!(stats.open_trades, 2);
    assert_eq!(stats.total_profit, dec!(13.75));
    assert_eq!(stats.success_rate, dec!(60.0));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_signals_passes_limit_and_keeps_server_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/signals")
        .match_query(Matcher::UrlEncoded("limit".into(), "2".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "id": "2e9b14c0-0000-4000-8000-000000000002",
                    "blockchain": "solana",
                    "token_address": "So1...",
                    "token_symbol": "WIF",
                    "event_type": "large_swap",
                    "price": 2.31,
                    "liquidity": 90000.0,
                    "volume_24h": 400000.0,
                    "spread": 2.8,
                    "timestamp": "2024-05-01T11:00:00Z",
                    "status": "pending"
                },
                {
                    "id": "2e9b14c0-0000-4000-8000-000000000001",
                    "blockchain": "eth",
                    "token_address": "0xabc",
                    "token_symbol": null,
                    "event_type": "pool_creation",
                    "price": 0.5,
                    "liquidity": 15000.0,
                    "volume_24h": null,
                    "spread": null,
                    "timestamp": "2024-05-01T10:00:00Z",
                    "status": "executed"
                }
            ]"#,
        )
        .create_async()
        .await;

    let signals = client_for(&server).get_signals(Some(2)).await.unwrap();
    assert_eq!(signals.len(), 2);
    // Server order (most recent first) must be preserved as-is.
    assert_eq!(signals[0].status, SignalStatus::Pending);
    assert_eq!(signals[1].status, SignalStatus::Executed);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_trades_parses_the_lifecycle_fields() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/trades")
        .match_query(Matcher::UrlEncoded("limit".into(), "10".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "id": "5d1a4c2e-0000-4000-8000-000000000001",
                    "signal_id": "2e9b14c0-0000-4000-8000-000000000001",
                    "exchange": "bybit",
                    "symbol": "WIFUSDT",
                    "side": "buy",
                    "entry_price": 2.31,
                    "exit_price": null,
                    "amount": 100.0,
                    "profit": null,
                    "spread": 2.8,
                    "status": "open",
                    "created_at": "2024-05-01T11:01:00Z",
                    "closed_at": null
                }
            ]"#,
        )
        .create_async()
        .await;

    let trades = client_for(&server).get_trades(Some(10)).await.unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].status, TradeStatus::Open);
    assert!(trades[0].lifecycle_consistent());
}

#[tokio::test]
async fn created_exchange_lists_without_its_secret() {
    let mut server = mockito::Server::new_async().await;

    let create_mock = server
        .mock("POST", "/api/exchanges")
        .match_body(Matcher::Json(serde_json::json!({
            "name": "okx",
            "api_key": "abc123",
            "api_secret": "s3cr3t",
            "is_active": true
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": "9a7b14c0-0000-4000-8000-000000000009",
                "name": "okx",
                "api_key": "abc123",
                "is_active": true,
                "created_at": "2024-05-01T12:00:00Z"
            }"#,
        )
        .create_async()
        .await;

    let list_mock = server
        .mock("GET", "/api/exchanges")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "id": "9a7b14c0-0000-4000-8000-000000000009",
                "name": "okx",
                "api_key": "abc123",
                "is_active": true,
                "created_at": "2024-05-01T12:00:00Z"
            }]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let form = NewExchange {
        name: Venue::Okx,
        api_key: "abc123".into(),
        api_secret: "s3cr3t".into(),
        is_active: true,
    };
    client.create_exchange(&form).await.unwrap();

    let listed = client.get_exchanges().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, Venue::Okx);
    assert_eq!(listed[0].api_key, "abc123");
    // The read model has no secret field at all.
    assert!(!serde_json::to_string(&listed[0]).unwrap().contains("api_secret"));

    create_mock.assert_async().await;
    list_mock.assert_async().await;
}

#[tokio::test]
async fn deleting_an_unknown_exchange_is_a_server_error() {
    let mut server = mockito::Server::new_async().await;
    let id = Uuid::new_v4();
    server
        .mock("DELETE", format!("/api/exchanges/{id}").as_str())
        .with_status(404)
        .with_body(r#"{"detail": "Exchange not found"}"#)
        .create_async()
        .await;

    let err = client_for(&server).delete_exchange(id).await.unwrap_err();
    assert!(err.is_server());
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn config_round_trips_through_get_and_put() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{
        "id": "cfg-1",
        "min_spread": 2.0,
        "max_spread": 3.0,
        "min_liquidity": 10000.0,
        "min_volume_24h": 50000.0,
        "trade_amount": 100.0,
        "auto_trading": false,
        "active_blockchains": ["eth", "bsc"],
        "active_exchanges": ["bybit", "okx"],
        "updated_at": "2024-05-01T12:00:00Z"
    }"#;

    server
        .mock("GET", "/api/config")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;
    let put_mock = server
        .mock("PUT", "/api/config")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = client_for(&server);
    let config = client.get_config().await.unwrap();
    assert_eq!(config.min_spread, dec!(2.0));

    let saved = client.put_config(&config).await.unwrap();
    assert_eq!(saved.active_exchanges, config.active_exchanges);
    put_mock.assert_async().await;
}

#[tokio::test]
async fn non_2xx_maps_to_a_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/stats")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let err = client_for(&server).get_stats().await.unwrap_err();
    assert!(err.is_server());
    assert!(!err.is_network());
    assert_eq!(err.status(), Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn malformed_body_maps_to_a_schema_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/stats")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"totally": "unexpected"}"#)
        .create_async()
        .await;

    let err = client_for(&server).get_stats().await.unwrap_err();
    assert!(err.is_schema());
    assert!(!err.is_server());
}

#[tokio::test]
async fn unreachable_backend_maps_to_a_network_error() {
    // Nothing listens on this port.
    let client = ApiClient::new(reqwest::Client::new(), "http://127.0.0.1:1/api");

    let err = client.get_stats().await.unwrap_err();
    assert!(err.is_network());
    assert!(err.status().is_none());
}
