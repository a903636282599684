//! `show-list` command implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use contracts::NotifyError;
use fanout::{render_view, FanoutService, MemoryStore, PageView};
use notify_index::DestinationIndex;
use observability::{record_resolution, ResolutionStats};
use profile_api::{CreatorResolver, HttpProfileApi, StaticToken};

use crate::cli::ShowListArgs;
use crate::error::CliError;

/// Execute the `show-list` command
///
/// Seeds an in-memory store and the destination index from configuration,
/// resolves the guild's notify list against the live profile API, and prints
/// the requested page. Operator-facing failures (rate limit, outage, unknown
/// guild) are printed in their user-message form before the error exit.
pub async fn run_show_list(args: &ShowListArgs) -> Result<()> {
    info!(
        config = %args.config.display(),
        guild = %args.guild,
        page = args.page,
        "Rendering subscription list"
    );

    if !args.config.exists() {
        return Err(CliError::config_not_found(args.config.display().to_string()).into());
    }

    let config = config_loader::ConfigLoader::load_from_path(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    let token = args.token.clone().ok_or(CliError::MissingToken)?;

    if args.metrics_port > 0 {
        observability::init_metrics_only(args.metrics_port)?;
    }

    let store = MemoryStore::from_seeds(&config.guilds);
    let index = Arc::new(DestinationIndex::new());
    for snapshot in store.snapshots() {
        index.rebuild(&snapshot);
    }

    let api = HttpProfileApi::new(&config.api).context("Failed to build profile API client")?;
    let resolver = CreatorResolver::new(api, StaticToken::new(token), config.api.batch_limit);
    let service = FanoutService::new(store, resolver, index, config.display.page_size);

    let mut stats = ResolutionStats::new();
    let outcome = service
        .subscription_page(&args.guild, args.page, args.page_size)
        .await;

    match &outcome {
        Ok(PageView::Page {
            total_entries,
            unresolved,
            ..
        }) => {
            stats.record_success(*total_entries, *unresolved);
            record_resolution(*total_entries, *unresolved);
        }
        Ok(PageView::Empty) => stats.record_success(0, 0),
        Err(NotifyError::RateLimited { .. }) => stats.record_rate_limited(),
        Err(NotifyError::UpstreamUnavailable { .. }) => stats.record_unavailable(),
        Err(_) => {}
    }

    let summary = stats.summary();
    info!(
        requests = summary.requests,
        resolved = summary.resolved,
        failed = summary.failed,
        rate_limited = summary.rate_limited,
        unavailable = summary.unavailable,
        resolve_rate = format!("{:.2}", summary.resolve_rate),
        "Resolution summary"
    );

    match outcome {
        Ok(view) => {
            let lines = render_view(&view);
            if args.json {
                let json = serde_json::to_string_pretty(&lines)
                    .context("Failed to serialize reply lines")?;
                println!("{}", json);
            } else {
                for line in &lines {
                    println!("{}", line);
                }
            }
            Ok(())
        }
        Err(e) => {
            println!("{}", e.user_message());
            Err(CliError::command_failed(e.to_string()).into())
        }
    }
}
