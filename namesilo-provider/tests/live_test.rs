//! Tests against the live NameSilo API
//!
//! Run with:
//! ```bash
//! NAMESILO_API_KEY=xxx TEST_DOMAIN=example.com \
//!     cargo test -p namesilo-provider --test live_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{LiveContext, generate_test_record_name};
use namesilo_provider::{DnsRecordProvider, Record};

#[tokio::test]
#[ignore]
async fn test_namesilo_list_records() {
    skip_if_no_credentials!("NAMESILO_API_KEY", "TEST_DOMAIN");

    let ctx = LiveContext::from_env().expect("failed to create test context");
    let records = ctx.provider.get_records(&ctx.zone).await;
    assert!(records.is_ok(), "get_records failed: {records:?}");

    for record in records.unwrap() {
        assert!(!record.name.ends_with('.'), "name should be zone-relative: {}", record.name);
    }
    println!("✓ get_records passed");
}

#[tokio::test]
#[ignore]
async fn test_namesilo_txt_lifecycle() {
    skip_if_no_credentials!("NAMESILO_API_KEY", "TEST_DOMAIN");

    let ctx = LiveContext::from_env().expect("failed to create test context");
    let name = ctx.fqdn(&generate_test_record_name());
    let record = Record::new("TXT", &name, "integration-test").with_ttl(3600);

    // append
    let created = ctx
        .provider
        .append_records(&ctx.zone, std::slice::from_ref(&record))
        .await
        .expect("append_records failed");
    assert_eq!(created, vec![record.clone()]);

    // set: must update, not create
    let before = ctx.provider.get_records(&ctx.zone).await.expect("listing failed");
    let updated = ctx
        .provider
        .set_records(
            &ctx.zone,
            &[Record::new("TXT", &name, "integration-test-2").with_ttl(3600)],
        )
        .await
        .expect("set_records failed");
    assert_eq!(updated.len(), 1);
    assert!(updated[0].has_id());
    let after = ctx.provider.get_records(&ctx.zone).await.expect("listing failed");
    assert_eq!(before.len(), after.len(), "set must not change the record count");

    // delete
    let deleted = ctx
        .provider
        .delete_records(&ctx.zone, &[record])
        .await
        .expect("delete_records failed");
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].value, "integration-test-2");

    println!("✓ TXT lifecycle passed: {name}");
}
