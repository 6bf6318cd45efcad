use hwid_gate::core::document::{DiscordId, Hwid};
use hwid_gate_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_conflict, assert_exists, assert_hwid, assert_invalid_action, assert_method_not_allowed, assert_rejection,
    assert_server_error, assert_success, assert_whitelisted,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_answer_whether_a_hardware_id_is_whitelisted() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA")]).await;

    let client = Client::new(env.bind_address());

    assert_whitelisted(client.check("AAA").await, true).await;
    assert_whitelisted(client.check("BBB").await, false).await;

    env.stop().await;
}

#[tokio::test]
async fn should_answer_negatively_when_the_check_misses_the_hardware_id_param() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA")]).await;

    let client = Client::new(env.bind_address());

    assert_whitelisted(client.query(&[("action", "check")]).await, false).await;
    assert_hwid(client.query(&[("action", "get_hwid")]).await, None).await;

    env.stop().await;
}

#[tokio::test]
async fn should_return_the_hardware_id_bound_to_a_discord_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA")]).await;

    let client = Client::new(env.bind_address());

    assert_hwid(client.get_hwid("123").await, Some("AAA")).await;
    assert_hwid(client.get_hwid("999").await, None).await;

    env.stop().await;
}

#[tokio::test]
async fn should_tell_whether_a_hardware_id_exists() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA")]).await;

    let client = Client::new(env.bind_address());

    assert_exists(client.hwid_exists("AAA").await, true).await;
    assert_exists(client.hwid_exists("BBB").await, false).await;

    env.stop().await;
}

#[tokio::test]
async fn should_reject_an_unknown_or_missing_action() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    assert_invalid_action(client.query(&[("action", "ban"), ("hwid", "AAA")]).await).await;
    assert_invalid_action(client.query(&[("hwid", "AAA")]).await).await;
    assert_invalid_action(client.post_json(serde_json::json!({ "action": "ban", "discord_id": "1" })).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_whitelist_a_new_discord_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    // The store is empty: the first add creates the document.
    assert_success(client.add("123", "AAA").await).await;
    assert_hwid(client.get_hwid("123").await, Some("AAA")).await;

    assert_eq!(
        env.store.document().await.hwid_for(&DiscordId::new("123")),
        Some(&Hwid::new("AAA"))
    );

    env.stop().await;
}

#[tokio::test]
async fn should_not_whitelist_an_already_whitelisted_discord_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA")]).await;

    let client = Client::new(env.bind_address());

    assert_rejection(client.add("123", "BBB").await, "Already whitelisted").await;

    assert_eq!(env.store.document().await.len(), 1);

    env.stop().await;
}

#[tokio::test]
async fn should_not_bind_a_hardware_id_that_is_already_in_use() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA")]).await;

    let client = Client::new(env.bind_address());

    assert_rejection(client.add("456", "AAA").await, "HWID used").await;

    env.stop().await;
}

#[tokio::test]
async fn should_reset_the_hardware_id_of_a_whitelisted_discord_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA"), ("456", "BBB")]).await;

    let client = Client::new(env.bind_address());

    assert_success(client.reset("123", "CCC").await).await;

    let document = env.store.document().await;
    assert_eq!(document.hwid_for(&DiscordId::new("123")), Some(&Hwid::new("CCC")));
    assert_eq!(document.hwid_for(&DiscordId::new("456")), Some(&Hwid::new("BBB")));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_a_noop_reset_to_the_currently_bound_hardware_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA")]).await;

    let client = Client::new(env.bind_address());

    // The requester's own binding is not a collision.
    assert_success(client.reset("123", "AAA").await).await;

    assert_eq!(
        env.store.document().await.hwid_for(&DiscordId::new("123")),
        Some(&Hwid::new("AAA"))
    );

    env.stop().await;
}

#[tokio::test]
async fn should_not_reset_to_a_hardware_id_bound_to_another_discord_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA"), ("456", "BBB")]).await;

    let client = Client::new(env.bind_address());

    assert_rejection(client.reset("123", "BBB").await, "New HWID already used").await;

    assert_eq!(
        env.store.document().await.hwid_for(&DiscordId::new("123")),
        Some(&Hwid::new("AAA"))
    );

    env.stop().await;
}

#[tokio::test]
async fn should_not_reset_a_discord_id_that_is_not_whitelisted() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    assert_rejection(client.reset("999", "AAA").await, "Not whitelisted").await;

    env.stop().await;
}

#[tokio::test]
async fn should_remove_a_whitelisted_discord_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA"), ("456", "BBB")]).await;

    let client = Client::new(env.bind_address());

    assert_success(client.remove("123").await).await;

    let document = env.store.document().await;
    assert!(!document.contains(&DiscordId::new("123")));
    assert!(document.contains(&DiscordId::new("456")));

    env.stop().await;
}

#[tokio::test]
async fn should_not_remove_a_discord_id_that_has_no_entry() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    assert_rejection(client.remove("999").await, "Not found").await;

    env.stop().await;
}

#[tokio::test]
async fn should_accept_a_body_that_was_serialized_twice() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    let body = serde_json::to_string(r#"{"action": "add", "discord_id": "123", "hwid": "AAA"}"#).unwrap();

    assert_success(client.post_body(body).await).await;
    assert_hwid(client.get_hwid("123").await, Some("AAA")).await;

    env.stop().await;
}

#[tokio::test]
async fn should_accept_a_numeric_discord_id() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    assert_success(
        client
            .post_json(serde_json::json!({ "action": "add", "discord_id": 123_456_789_012_345_678_u64, "hwid": "AAA" }))
            .await,
    )
    .await;

    assert_hwid(client.get_hwid("123456789012345678").await, Some("AAA")).await;

    env.stop().await;
}

#[tokio::test]
async fn should_reject_a_mutation_missing_its_fields() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    assert_rejection(
        client.post_json(serde_json::json!({ "action": "add", "discord_id": "123" })).await,
        "Invalid add request",
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_reject_a_malformed_body() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    assert_rejection(client.post_body("discord_id=123".to_string()).await, "Malformed JSON body").await;

    env.stop().await;
}

#[tokio::test]
async fn should_answer_method_not_allowed_for_the_other_methods() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    assert_method_not_allowed(client.put_empty().await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_report_a_conflict_when_the_store_rejects_the_version_token() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA")]).await;

    env.store.force_conflict().await;

    let client = Client::new(env.bind_address());

    assert_conflict(client.add("456", "BBB").await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_report_an_opaque_server_error_when_the_store_is_down() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.store.force_outage().await;

    let client = Client::new(env.bind_address());

    assert_server_error(client.check("AAA").await).await;
    assert_server_error(client.add("123", "AAA").await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_keep_serving_the_unversioned_endpoint_for_the_deployed_clients() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;
    env.seed(&[("123", "AAA")]).await;

    let client = Client::unversioned(env.bind_address());

    assert_whitelisted(client.check("AAA").await, true).await;
    assert_success(client.remove("123").await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_answer_cors_preflight_requests_when_cors_is_enabled() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_with_cors().into()).await;

    let client = Client::new(env.bind_address());

    let response = client.preflight().await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("access-control-allow-origin").unwrap(), "*");

    let allowed_methods = response
        .headers()
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();

    assert!(allowed_methods.contains("GET"));
    assert!(allowed_methods.contains("POST"));

    env.stop().await;
}
