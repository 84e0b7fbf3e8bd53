use std::sync::Once;

use pretty_assertions::assert_eq;
use visa_qa_core::{
    detect_category, fingerprint, Category, ContentType, Decision, ParsedDetail, StateStore,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(crawl_logging::initialize_for_tests);
}

fn page(url: &str, title: &str, content: &[&str]) -> ParsedDetail {
    ParsedDetail {
        url: url.to_string(),
        title: title.to_string(),
        category: detect_category(title),
        content_type: ContentType::Text,
        content: content.iter().map(|s| s.to_string()).collect(),
        publish_info: vec!["發布日期：2024-05-01".to_string()],
    }
}

const URL: &str = "https://www.boca.gov.tw/cp-181-1-aaaaa-2.html";

#[test]
fn first_sighting_is_changed_and_stored() {
    init_logging();
    let mut store = StateStore::new();

    let decision = store.reconcile(page(URL, "eVisa 申請", &["1. 線上填表"]));

    let Decision::Changed(record) = decision else {
        panic!("expected a changed decision");
    };
    assert_eq!(record.url, URL);
    assert_eq!(record.category, Category::EVisa);
    assert_eq!(
        record.hash,
        fingerprint("eVisa 申請", ContentType::Text, &["1. 線上填表".to_string()])
    );
    assert_eq!(store.get(URL), Some(&record));
    assert_eq!(store.len(), 1);
}

#[test]
fn identical_content_is_unchanged_on_second_pass() {
    init_logging();
    let mut store = StateStore::new();
    let first = store.reconcile(page(URL, "T", &["a", "b"]));
    let stored = store.get(URL).cloned();

    let second = store.reconcile(page(URL, "T", &["a", "b"]));

    assert!(matches!(first, Decision::Changed(_)));
    assert_eq!(second, Decision::Unchanged);
    assert_eq!(store.get(URL).cloned(), stored);
}

#[test]
fn unchanged_decision_leaves_stored_publish_info_alone() {
    init_logging();
    let mut store = StateStore::new();
    store.reconcile(page(URL, "T", &["a"]));

    let mut again = page(URL, "T", &["a"]);
    again.publish_info = vec!["發布日期：2099-01-01".to_string()];

    assert_eq!(store.reconcile(again), Decision::Unchanged);
    assert_eq!(
        store.get(URL).unwrap().publish_info,
        vec!["發布日期：2024-05-01".to_string()]
    );
}

#[test]
fn changed_content_overwrites_the_entry() {
    init_logging();
    let mut store = StateStore::new();
    store.reconcile(page(URL, "T", &["old"]));
    let old_hash = store.get(URL).unwrap().hash.clone();

    let decision = store.reconcile(page(URL, "T", &["new"]));

    let Decision::Changed(record) = decision else {
        panic!("expected a changed decision");
    };
    assert_ne!(record.hash, old_hash);
    assert_eq!(store.get(URL).unwrap().content, vec!["new".to_string()]);
    assert_eq!(store.len(), 1);
}

#[test]
fn stale_urls_are_never_pruned() {
    init_logging();
    let mut store = StateStore::new();
    store.reconcile(page(URL, "T", &["a"]));
    store.reconcile(page("https://www.boca.gov.tw/other.html", "U", &["b"]));

    assert_eq!(store.reconcile(page(URL, "T", &["a"])), Decision::Unchanged);
    assert!(store.get("https://www.boca.gov.tw/other.html").is_some());
    assert_eq!(store.len(), 2);
}

#[test]
fn json_roundtrip_keeps_non_ascii_and_schema() {
    init_logging();
    let mut store = StateStore::new();
    store.reconcile(page(URL, "居留簽證", &["- 護照正本"]));

    let json = store.to_json_pretty().unwrap();
    assert!(json.contains("居留簽證"));
    assert!(json.contains("\n  \"https://www.boca.gov.tw/cp-181-1-aaaaa-2.html\": {"));
    assert!(json.contains("\"content_type\": \"text\""));
    assert!(json.contains("\"category\": \"Visa\""));

    let restored = StateStore::from_json(&json).unwrap();
    assert_eq!(restored, store);
}

#[test]
fn state_written_by_earlier_runs_is_readable() {
    init_logging();
    let json = r#"{
      "https://www.boca.gov.tw/x.html": {
        "title": "APEC 商務旅行卡",
        "category": "APEC",
        "content_type": "image",
        "content": ["https://www.boca.gov.tw/flow.jpg"],
        "publish_info": [],
        "url": "https://www.boca.gov.tw/x.html",
        "hash": "abc"
      }
    }"#;

    let store = StateStore::from_json(json).unwrap();
    let record = store.get("https://www.boca.gov.tw/x.html").unwrap();
    assert_eq!(record.category, Category::Apec);
    assert_eq!(record.content_type, ContentType::Image);
    assert_eq!(record.publish_date(), None);
}

#[test]
fn malformed_state_is_an_error() {
    init_logging();
    assert!(StateStore::from_json("{ not json").is_err());
}
