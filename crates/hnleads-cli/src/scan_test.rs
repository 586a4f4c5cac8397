use std::path::Path;

use hnleads_core::ItemKind;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

const NOW: i64 = 1_760_000_000;

fn app_config() -> AppConfig {
    AppConfig {
        log_level: "info".to_string(),
        queries_path: None,
        search_scope: SearchScope::Both,
        max_results_per_query: 50,
        days_back: 30,
        output_path: PathBuf::from("./leads.json"),
        algolia_base_url: "https://hn.algolia.com/api/v1".to_string(),
        firebase_base_url: "https://hacker-news.firebaseio.com/v0".to_string(),
        request_timeout_secs: 30,
        user_agent: "hnleads-test".to_string(),
        max_concurrent_items: 1,
        inter_request_delay_ms: 0,
        max_retries: 0,
        retry_backoff_base_ms: 1,
    }
}

fn plan(scope: SearchScope) -> ScanPlan {
    ScanPlan {
        queries: vec!["lead generation".to_string()],
        scope,
        max_results: 10,
        days_back: 30,
        output: PathBuf::from("-"),
        concurrency: 2,
    }
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(NOW, 0).unwrap()
}

fn test_client(server: &MockServer) -> HnClient {
    let config = HnClientConfig {
        max_retries: 0,
        retry_backoff_base_ms: 1,
        inter_request_delay_ms: 0,
        ..HnClientConfig::default()
    };
    HnClient::with_base_urls(&config, &server.uri(), &server.uri())
        .expect("client construction should not fail")
}

async fn mount_search(server: &MockServer, tags: &str, hits: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("tags", tags))
        .and(query_param("query", "lead generation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "hits": hits })))
        .mount(server)
        .await;
}

async fn mount_user(server: &MockServer, name: &str, about: &str, karma: i64) {
    Mock::given(method("GET"))
        .and(path(format!("/user/{name}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": name,
            "about": about,
            "karma": karma
        })))
        .mount(server)
        .await;
}

fn comment_hits() -> serde_json::Value {
    serde_json::json!([
        {
            "objectID": "1",
            "author": "bob",
            "comment_text": "I&#x27;m the founder of DataTool, struggling with onboarding users.",
            "created_at_i": NOW - 100
        },
        {
            "objectID": "2",
            "author": "carol",
            "comment_text": "We built this at my last job",
            "created_at_i": NOW - 200
        },
        {
            "objectID": "3",
            "author": null,
            "comment_text": "founder here",
            "created_at_i": NOW - 300
        }
    ])
}

fn story_hits() -> serde_json::Value {
    serde_json::json!([
        {
            "objectID": "4",
            "author": "bob",
            "title": "Show HN: I built DataTool",
            "created_at_i": NOW - 400
        },
        {
            "objectID": "5",
            "author": "dave",
            "story_text": "As a CEO I am building Orbit Labs",
            "title": "Ask HN: pricing?",
            "created_at_i": NOW - 500
        }
    ])
}

async fn mount_users(server: &MockServer) {
    mount_user(server, "bob", "Founder and builder. https:&#x2F;&#x2F;datatool.dev", 1234).await;
    mount_user(server, "carol", "Engineer. Open to offers.", 50).await;
    mount_user(server, "dave", "CEO and co-founder of Orbit Labs", 900).await;
}

#[tokio::test]
async fn scan_produces_ranked_unique_leads() {
    let server = MockServer::start().await;
    mount_search(&server, "comment", comment_hits()).await;
    mount_search(&server, "story", story_hits()).await;
    mount_users(&server).await;

    let report = run_scan(&test_client(&server), &plan(SearchScope::Both), now()).await;

    assert_eq!(report.items_seen, 5);
    assert_eq!(report.leads_found, 3);
    assert_eq!(report.failed_searches, 0);

    let authors: Vec<_> = report.leads.iter().map(|l| l.author.as_str()).collect();
    assert_eq!(authors, vec!["dave", "bob"]);

    let dave = &report.leads[0];
    assert_eq!(dave.confidence, 100);
    assert_eq!(dave.item_kind, ItemKind::Story);
    assert_eq!(dave.company_name.as_deref(), Some("Orbit Labs"));

    let bob = &report.leads[1];
    assert_eq!(bob.confidence, 45);
    assert_eq!(bob.item_id, "1", "equal confidence keeps the first lead");
    assert_eq!(bob.website.as_deref(), Some("https://datatool.dev"));
    assert_eq!(bob.company_name.as_deref(), Some("DataTool"));
    assert_eq!(bob.pain_points, vec!["struggling with onboarding users"]);
    assert_eq!(bob.karma, 1234);
    assert_eq!(bob.search_query, "lead generation");
    assert_eq!(bob.scraped_at, now());
}

#[tokio::test]
async fn comments_scope_never_searches_stories() {
    let server = MockServer::start().await;
    mount_search(&server, "comment", comment_hits()).await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("tags", "story"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "hits": [] })))
        .expect(0)
        .mount(&server)
        .await;
    mount_users(&server).await;

    let report = run_scan(&test_client(&server), &plan(SearchScope::Comments), now()).await;

    assert_eq!(report.items_seen, 3);
    let authors: Vec<_> = report.leads.iter().map(|l| l.author.as_str()).collect();
    assert_eq!(authors, vec!["bob"]);
}

#[tokio::test]
async fn failed_search_is_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("tags", "comment"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_search(&server, "story", story_hits()).await;
    mount_users(&server).await;

    let report = run_scan(&test_client(&server), &plan(SearchScope::Both), now()).await;

    assert_eq!(report.failed_searches, 1);
    assert_eq!(report.items_seen, 2);
    assert_eq!(report.leads.len(), 2);
}

#[tokio::test]
async fn failed_profile_lookup_skips_only_that_item() {
    let server = MockServer::start().await;
    mount_search(&server, "story", story_hits()).await;
    Mock::given(method("GET"))
        .and(path("/user/bob.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_user(&server, "dave", "CEO and co-founder of Orbit Labs", 900).await;

    let report = run_scan(&test_client(&server), &plan(SearchScope::Stories), now()).await;

    let authors: Vec<_> = report.leads.iter().map(|l| l.author.as_str()).collect();
    assert_eq!(authors, vec!["dave"]);
}

#[tokio::test]
async fn search_uses_days_back_cutoff() {
    let server = MockServer::start().await;
    let since = NOW - 7 * 86_400;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("numericFilters", format!("created_at_i>{since}")))
        .and(query_param("hitsPerPage", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "hits": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let mut plan = plan(SearchScope::Stories);
    plan.days_back = 7;
    let report = run_scan(&test_client(&server), &plan, now()).await;
    assert!(report.leads.is_empty());
    assert_eq!(report.failed_searches, 0);
}

#[test]
fn resolve_uses_config_defaults() {
    let plan = ScanPlan::resolve(&ScanArgs::default(), &app_config()).unwrap();
    assert_eq!(plan.queries, QueriesFile::defaults().queries);
    assert_eq!(plan.queries[0], "lead generation");
    assert_eq!(plan.scope, SearchScope::Both);
    assert_eq!(plan.max_results, 50);
    assert_eq!(plan.days_back, 30);
    assert_eq!(plan.output, PathBuf::from("./leads.json"));
    assert_eq!(plan.concurrency, 1);
}

#[test]
fn resolve_prefers_cli_flags() {
    let args = ScanArgs {
        queries: vec![" saas ".to_string(), "hiring".to_string()],
        scope: Some(SearchScope::Comments),
        max_results: Some(5),
        days_back: Some(3),
        output: Some(PathBuf::from("-")),
        concurrency: Some(4),
        ..ScanArgs::default()
    };
    let plan = ScanPlan::resolve(&args, &app_config()).unwrap();
    assert_eq!(plan.queries, vec!["saas", "hiring"]);
    assert_eq!(plan.scope, SearchScope::Comments);
    assert_eq!(plan.max_results, 5);
    assert_eq!(plan.days_back, 3);
    assert_eq!(plan.output, Path::new("-"));
    assert_eq!(plan.concurrency, 4);
}

#[test]
fn resolve_reads_queries_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("queries.yaml");
    std::fs::write(&file, "queries:\n  - founders\n  - cold outreach\n").unwrap();

    let mut config = app_config();
    config.queries_path = Some(file);
    let plan = ScanPlan::resolve(&ScanArgs::default(), &config).unwrap();
    assert_eq!(plan.queries, vec!["founders", "cold outreach"]);
}

#[test]
fn resolve_rejects_duplicate_cli_queries() {
    let args = ScanArgs {
        queries: vec!["SaaS".to_string(), "saas".to_string()],
        ..ScanArgs::default()
    };
    assert!(ScanPlan::resolve(&args, &app_config()).is_err());
}

#[test]
fn resolve_rejects_zero_limits() {
    let args = ScanArgs {
        max_results: Some(0),
        ..ScanArgs::default()
    };
    assert!(ScanPlan::resolve(&args, &app_config()).is_err());

    let args = ScanArgs {
        concurrency: Some(0),
        ..ScanArgs::default()
    };
    assert!(ScanPlan::resolve(&args, &app_config()).is_err());
}

#[test]
fn summary_includes_counts_and_stats() {
    let report = ScanReport {
        leads: Vec::new(),
        items_seen: 7,
        leads_found: 3,
        failed_searches: 0,
    };
    let stats = LeadStats::from_leads(&report.leads);
    let rendered = summary(&report, &stats);
    assert!(rendered.contains("Items scanned:        7"));
    assert!(rendered.contains("Leads before dedup:   3"));
    assert!(rendered.contains("Unique founder leads: 0"));
}

#[tokio::test]
async fn summary_of_real_scan_reports_average() {
    let server = MockServer::start().await;
    mount_search(&server, "comment", comment_hits()).await;
    mount_users(&server).await;

    let report = run_scan(&test_client(&server), &plan(SearchScope::Comments), now()).await;
    let stats = LeadStats::from_leads(&report.leads);
    let rendered = summary(&report, &stats);
    assert!(rendered.contains("Unique founder leads: 1"), "{rendered}");
    assert!(rendered.contains("Average confidence:   45.0%"), "{rendered}");
}

#[test]
fn plan_display_lists_queries() {
    let rendered = plan(SearchScope::Both).to_string();
    assert!(rendered.contains("lead generation"));
    assert!(rendered.contains("scope:       both"));
}
