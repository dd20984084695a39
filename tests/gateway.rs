//! End-to-end tests against a bound gateway.

use locale_gateway::config::{GatewayConfig, UpstreamConfig};
use reqwest::header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, LOCATION};
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_redirect_then_passthrough_to_renderer() {
    let renderer = common::start_mock_renderer().await;

    let mut config = GatewayConfig::default();
    config.upstream = Some(UpstreamConfig {
        address: renderer.to_string(),
    });
    let (gateway, shutdown) = common::start_gateway(config).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/menu?tab=pizzas", gateway))
        .header(ACCEPT_LANGUAGE, "fr-CA,fr;q=0.9,en;q=0.5")
        .send()
        .await
        .expect("Gateway unreachable");
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = res.headers()[LOCATION].to_str().unwrap().to_string();
    assert_eq!(location, "/fr/menu?tab=pizzas");

    // Following the redirect lands on the renderer, whatever the header says.
    let res = client
        .get(format!("http://{}{}", gateway, location))
        .header(ACCEPT_LANGUAGE, "de")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CONTENT_LANGUAGE], "fr");
    let request_id = res.headers()["x-request-id"].to_str().unwrap().to_string();

    let body = res.text().await.unwrap();
    assert_eq!(body, format!("/fr/menu?tab=pizzas|{}", request_id));

    shutdown.trigger();
}

#[tokio::test]
async fn test_assets_bypass_locale_routing() {
    let renderer = common::start_mock_renderer().await;

    let mut config = GatewayConfig::default();
    config.upstream = Some(UpstreamConfig {
        address: renderer.to_string(),
    });
    let (gateway, shutdown) = common::start_gateway(config).await;
    let client = common::client();

    for path in ["/_next/static/chunks/main.js", "/pizza-promotion-3x2.png"] {
        let res = client.get(format!("http://{}{}", gateway, path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{}", path);
        assert!(res.headers().get(CONTENT_LANGUAGE).is_none());
        assert!(res.text().await.unwrap().starts_with(path));
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_prefix_is_prefixed_again() {
    let (gateway, shutdown) = common::start_gateway(GatewayConfig::default()).await;

    let res = common::client()
        .get(format!("http://{}/xx/menu", gateway))
        .header(ACCEPT_LANGUAGE, "it-IT")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()[LOCATION], "/it/xx/menu");

    shutdown.trigger();
}

#[tokio::test]
async fn test_renderer_down_is_bad_gateway() {
    // Bind then drop to get a port with nothing behind it.
    let dead = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let mut config = GatewayConfig::default();
    config.upstream = Some(UpstreamConfig {
        address: dead.to_string(),
    });
    let (gateway, shutdown) = common::start_gateway(config).await;

    let res = common::client()
        .get(format!("http://{}/en/contact", gateway))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    shutdown.trigger();
}

#[tokio::test]
async fn test_custom_locale_set() {
    let config: GatewayConfig = toml::from_str(
        r#"
        [locales]
        supported = ["es", "ca"]
        default = "es"
        "#,
    )
    .unwrap();
    let (gateway, shutdown) = common::start_gateway(config).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/promotions", gateway))
        .header(ACCEPT_LANGUAGE, "en-GB, ca;q=0.3")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()[LOCATION], "/ca/promotions");

    let res = client
        .get(format!("http://{}/en/promotions", gateway))
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()[LOCATION], "/es/en/promotions");

    let catalog: serde_json::Value = client
        .get(format!("http://{}/_locales", gateway))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(catalog["default"], "es");
    assert_eq!(catalog["locales"][1]["code"], "ca");

    shutdown.trigger();
}
