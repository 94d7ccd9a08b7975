//! Shared test helpers

#![allow(dead_code)]

use std::env;
use std::time::Duration;

use namesilo_provider::{NamesiloClient, NamesiloProvider, RecordReconciler};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-key";

/// Skip the test when any of the environment variables is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Start a mock server and a provider pointed at it.
pub async fn setup() -> (MockServer, NamesiloProvider) {
    setup_with_timeout(Duration::from_secs(5)).await
}

/// Same as [`setup`] with a custom request timeout.
pub async fn setup_with_timeout(timeout: Duration) -> (MockServer, NamesiloProvider) {
    let server = MockServer::start().await;
    let client = NamesiloClient::builder(TEST_API_KEY)
        .api_base(server.uri())
        .request_timeout(timeout)
        .build()
        .expect("client should build");
    (server, RecordReconciler::new(client))
}

/// `dnsListRecords` reply; records are (id, type, host, value, ttl).
pub fn list_reply(records: &[(&str, &str, &str, &str, u32)]) -> String {
    let body: String = records
        .iter()
        .map(|(id, rtype, host, value, ttl)| {
            format!(
                "<resource_record><record_id>{id}</record_id><type>{rtype}</type>\
                 <host>{host}</host><value>{value}</value><ttl>{ttl}</ttl>\
                 <distance>0</distance></resource_record>"
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0"?><namesilo><request><operation>dnsListRecords</operation><ip>192.0.2.10</ip></request><reply><code>300</code><detail>success</detail>{body}</reply></namesilo>"#
    )
}

/// Acknowledgement reply.
pub fn ack_reply(code: u32, detail: &str) -> String {
    format!(
        r#"<?xml version="1.0"?><namesilo><reply><code>{code}</code><detail>{detail}</detail></reply></namesilo>"#
    )
}

/// Successful `dnsAddRecord` reply carrying the new record ID.
pub fn add_reply(record_id: &str) -> String {
    format!(
        r#"<?xml version="1.0"?><namesilo><reply><code>300</code><detail>success</detail><record_id>{record_id}</record_id></reply></namesilo>"#
    )
}

/// (path, query pairs) of every request received so far.
pub async fn received(server: &MockServer) -> Vec<(String, Vec<(String, String)>)> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|req| {
            let pairs = req
                .url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            (req.url.path().to_string(), pairs)
        })
        .collect()
}

/// Value of a query parameter.
pub fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Unique record name for live tests.
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// Context for tests against the live API.
pub struct LiveContext {
    pub provider: NamesiloProvider,
    pub zone: String,
}

impl LiveContext {
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("NAMESILO_API_KEY").ok()?;
        let zone = env::var("TEST_DOMAIN").ok()?;
        let provider = NamesiloProvider::with_api_key(api_key).ok()?;
        Some(Self { provider, zone })
    }

    pub fn fqdn(&self, host: &str) -> String {
        format!("{host}.{}", self.zone)
    }
}
