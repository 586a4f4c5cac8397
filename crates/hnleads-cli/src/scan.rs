//! `scan` command: search, classify, aggregate, write.
//!
//! Search and profile failures are logged and skipped so one bad request
//! does not abort the run. Items of one search are processed through a
//! `buffered` stream, which yields results in input order; the single
//! consuming loop owns the [`LeadCollection`], so tie-breaking does not
//! depend on concurrency.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use hnleads_core::queries::validate_queries;
use hnleads_core::{load_queries, AppConfig, Lead, QueriesFile, RawItem, SearchScope};
use hnleads_detect::{assemble_lead, LeadCollection, LeadStats, Offer};
use hnleads_hn::normalize::cutoff_timestamp;
use hnleads_hn::{HnClient, HnClientConfig};

use crate::output::write_leads;
use crate::ScanArgs;

/// Fully resolved parameters for one scan: CLI flags over env config over
/// built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanPlan {
    pub queries: Vec<String>,
    pub scope: SearchScope,
    pub max_results: u32,
    pub days_back: u32,
    pub output: PathBuf,
    pub concurrency: usize,
}

impl ScanPlan {
    pub(crate) fn resolve(args: &ScanArgs, config: &AppConfig) -> anyhow::Result<Self> {
        let queries = if args.queries.is_empty() {
            match args.queries_file.as_ref().or(config.queries_path.as_ref()) {
                Some(path) => load_queries(path)?.queries,
                None => QueriesFile::defaults().queries,
            }
        } else {
            let queries: Vec<String> = args.queries.iter().map(|q| q.trim().to_string()).collect();
            validate_queries(&queries)?;
            queries
        };

        let max_results = args.max_results.unwrap_or(config.max_results_per_query);
        anyhow::ensure!(max_results > 0, "--max-results must be at least 1");
        let concurrency = args.concurrency.unwrap_or(config.max_concurrent_items);
        anyhow::ensure!(concurrency > 0, "--concurrency must be at least 1");

        Ok(Self {
            queries,
            scope: args.scope.unwrap_or(config.search_scope),
            max_results,
            days_back: args.days_back.unwrap_or(config.days_back),
            output: args
                .output
                .clone()
                .unwrap_or_else(|| config.output_path.clone()),
            concurrency,
        })
    }
}

impl fmt::Display for ScanPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "queries:     {}", self.queries.join(", "))?;
        writeln!(f, "scope:       {}", self.scope)?;
        writeln!(f, "max results: {} per query and kind", self.max_results)?;
        writeln!(f, "days back:   {}", self.days_back)?;
        writeln!(f, "concurrency: {}", self.concurrency)?;
        write!(f, "output:      {}", self.output.display())
    }
}

/// What a scan produced.
#[derive(Debug)]
pub(crate) struct ScanReport {
    /// Unique leads, highest confidence first.
    pub leads: Vec<Lead>,
    pub items_seen: usize,
    /// Leads produced before deduplication.
    pub leads_found: usize,
    pub failed_searches: usize,
}

/// Entry point for `hnleads scan`.
pub(crate) async fn run(config: &AppConfig, args: &ScanArgs) -> anyhow::Result<()> {
    let plan = ScanPlan::resolve(args, config)?;

    if args.dry_run {
        println!("dry-run: would scan Hacker News with\n{plan}");
        return Ok(());
    }

    let client = HnClient::new(&HnClientConfig::from(config))
        .map_err(|e| anyhow::anyhow!("failed to build HN client: {e}"))?;

    tracing::info!(
        queries = plan.queries.len(),
        scope = %plan.scope,
        max_results = plan.max_results,
        days_back = plan.days_back,
        "starting Hacker News lead scan"
    );

    let report = run_scan(&client, &plan, Utc::now()).await;
    let stats = LeadStats::from_leads(&report.leads);

    tracing::info!(
        items_seen = report.items_seen,
        leads_found = report.leads_found,
        unique_leads = stats.total,
        with_website = stats.with_website,
        with_company = stats.with_company,
        with_pain_points = stats.with_pain_points,
        average_confidence = stats.average_confidence.unwrap_or_default(),
        failed_searches = report.failed_searches,
        "scan complete"
    );

    write_leads(&plan.output, &report.leads)?;
    tracing::info!(output = %plan.output.display(), "leads written");
    eprintln!("{}", summary(&report, &stats));
    Ok(())
}

/// Human-readable end-of-scan summary. Printed to stderr so `--output -`
/// stays a clean JSON stream.
pub(crate) fn summary(report: &ScanReport, stats: &LeadStats) -> String {
    format!(
        "Items scanned:        {}\nLeads before dedup:   {}\n{stats}",
        report.items_seen, report.leads_found
    )
}

/// Runs every query over every kind in scope and returns the ranked leads.
pub(crate) async fn run_scan(client: &HnClient, plan: &ScanPlan, now: DateTime<Utc>) -> ScanReport {
    let since = cutoff_timestamp(now, plan.days_back);
    let mut collection = LeadCollection::new();
    let mut items_seen = 0usize;
    let mut failed_searches = 0usize;

    for query in &plan.queries {
        for &kind in plan.scope.kinds() {
            let items = match client
                .search_items(query, kind, plan.max_results, since)
                .await
            {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(query = %query, kind = %kind, error = %e, "search failed, skipping");
                    failed_searches += 1;
                    continue;
                }
            };
            tracing::info!(query = %query, kind = %kind, count = items.len(), "search returned items");
            items_seen += items.len();

            let mut results = std::pin::pin!(stream::iter(items)
                .map(|item| process_item(client, item, query, now))
                .buffered(plan.concurrency));

            while let Some(lead) = results.next().await {
                let Some(lead) = lead else { continue };
                tracing::info!(
                    author = %lead.author,
                    confidence = lead.confidence,
                    query = %query,
                    "found founder lead"
                );
                let author = lead.author.clone();
                match collection.offer(lead) {
                    Offer::Inserted => {}
                    Offer::Replaced {
                        previous_confidence,
                    } => {
                        tracing::debug!(author = %author, previous_confidence, "replaced lower-confidence lead");
                    }
                    Offer::Kept {
                        retained_confidence,
                    } => {
                        tracing::debug!(author = %author, retained_confidence, "kept existing lead");
                    }
                }
            }
        }
    }

    let leads_found = collection.offered();
    ScanReport {
        leads: collection.into_ranked(),
        items_seen,
        leads_found,
        failed_searches,
    }
}

async fn process_item(
    client: &HnClient,
    item: RawItem,
    query: &str,
    scraped_at: DateTime<Utc>,
) -> Option<Lead> {
    let profile = match item.author.as_deref() {
        Some(author) => match client.fetch_user(author).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(author = %author, error = %e, "profile lookup failed, skipping item");
                return None;
            }
        },
        None => None,
    };

    match assemble_lead(&item, profile.as_ref(), query, scraped_at) {
        Ok(lead) => Some(lead),
        Err(rejection) => {
            tracing::debug!(item_id = %item.id, reason = %rejection, "item rejected");
            None
        }
    }
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;
