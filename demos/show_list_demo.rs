//! Subscription List Demo
//!
//! Demonstrates the full request path without touching the live platform:
//! config parsing, store seeding, index construction, batch resolution
//! against the mock profile API, and paginated rendering through the
//! command registry.
//!
//! Run with: cargo run -p show_list_demo

use std::sync::Arc;

use config_loader::{ConfigFormat, ConfigLoader};
use fanout::{CommandRegistry, CommandRequest, FanoutService, MemoryStore, ShowSubscriptions};
use notify_index::DestinationIndex;
use observability::{record_live_event_dispatched, LogFormat, ObservabilityConfig};
use profile_api::{CreatorResolver, MockProfileApi, StaticToken};
use tracing::info;

const DEMO_CONFIG: &str = r#"
[api]
client_id = "demo-client"
batch_limit = 100

[display]
page_size = 3

[[guilds]]
id = "guild-speedrun"
name = "Speedrun Hub"
notify_list = ["101", "102", "103", "104", "105"]

[[guilds.notify_channels]]
id = "chan-1"
name = "stream-alerts"

[[guilds]]
id = "guild-art"
name = "Art Corner"
notify_list = ["101"]

[[guilds.notify_channels]]
id = "chan-9"
name = "live-now"
"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; no Prometheus listener for a one-shot demo
    observability::init_with_config(ObservabilityConfig {
        log_format: LogFormat::Pretty,
        metrics_port: None,
        default_log_level: "info".to_string(),
    })?;

    info!("Starting Subscription List Demo");

    // ==== Stage 1: Load configuration ====
    let config = ConfigLoader::load_from_str(DEMO_CONFIG, ConfigFormat::Toml)?;
    info!(guilds = config.guilds.len(), "Configuration loaded");

    // ==== Stage 2: Seed store and build the index ====
    let store = MemoryStore::from_seeds(&config.guilds);
    let index = Arc::new(DestinationIndex::new());
    for snapshot in store.snapshots() {
        index.rebuild(&snapshot);
    }
    let stats = index.stats();
    info!(
        guilds = stats.guild_count,
        subscriptions = stats.subscription_count,
        destinations = stats.destination_count,
        "Destination index built"
    );

    // ==== Stage 3: Mock profile API (104 deliberately unknown) ====
    let mock = MockProfileApi::new();
    mock.insert_profile("101", "Alice", "alice");
    mock.insert_profile("102", "Bob", "bob");
    mock.insert_profile("103", "Carol", "carol");
    mock.insert_profile("105", "Eve", "eve");

    let resolver = CreatorResolver::new(mock, StaticToken::new("demo-token"), config.api.batch_limit);
    let service = Arc::new(FanoutService::new(
        store,
        resolver,
        index,
        config.display.page_size,
    ));

    // ==== Stage 4: Dispatch through the command registry ====
    let mut registry = CommandRegistry::new();
    registry.register("show-subscriptions", ShowSubscriptions::new(service.clone()));

    for page in 0..2 {
        let request = CommandRequest::new("guild-speedrun").with_arg("page", page.to_string());
        let lines = registry.dispatch("show-subscriptions", request).await?;
        println!("--- guild-speedrun, page {} ---", page + 1);
        for line in &lines {
            println!("{line}");
        }
    }

    // ==== Stage 5: Fan-out lookup across guilds ====
    let destinations = service.index().lookup(&"101".into());
    record_live_event_dispatched("101", destinations.len());
    println!("--- destinations for creator 101 ---");
    for destination in &destinations {
        println!("{} -> #{}", destination.guild_id, destination.channel_name);
    }

    info!("Demo complete");
    Ok(())
}
