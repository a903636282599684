//! # Integration Tests
//!
//! Cross-crate scenarios for the announcer pipeline.
//!
//! Covers:
//! - Contract snapshot checks
//! - End-to-end command flows against the mock profile API
//! - Failure propagation (rate limit, outage, partial resolution)

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        let _ = contracts::ConfigVersion::V1;
    }

    #[test]
    fn test_user_messages_are_operator_safe() {
        use contracts::NotifyError;

        let rate_limited = NotifyError::rate_limited(Some(30));
        assert_eq!(
            rate_limited.user_message(),
            "Rate limit exceeded. Please try again in a few minutes."
        );

        let outage = NotifyError::upstream_unavailable("http status 503");
        assert_eq!(
            outage.user_message(),
            "The streaming service is currently unavailable. Please try again later."
        );

        // Internal detail never leaks into the operator string
        assert!(!outage.user_message().contains("503"));
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::sync::Arc;

    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{CreatorId, NotifyError};
    use fanout::{
        CommandRegistry, CommandRequest, FanoutService, MemoryStore, PageView, ShowSubscriptions,
        EMPTY_LIST_MESSAGE,
    };
    use notify_index::DestinationIndex;
    use profile_api::{
        CreatorResolver, MockApiConfig, MockProfileApi, StaticToken,
    };

    const SEEDED_CONFIG: &str = r#"
[api]
client_id = "test-client"
batch_limit = 100

[display]
page_size = 2

[[guilds]]
id = "g1"
name = "Speedrun Hub"
notify_list = ["s1", "s2", "s3"]

[[guilds.notify_channels]]
id = "c1"
name = "stream-alerts"

[[guilds]]
id = "g2"
name = "Art Corner"
notify_list = ["s1"]

[[guilds.notify_channels]]
id = "c9"
name = "live-now"
"#;

    fn seeded_service(
        mock: MockProfileApi,
        batch_limit: usize,
    ) -> FanoutService<MemoryStore, MockProfileApi, StaticToken> {
        let config = ConfigLoader::load_from_str(SEEDED_CONFIG, ConfigFormat::Toml).unwrap();
        let store = MemoryStore::from_seeds(&config.guilds);
        let index = Arc::new(DestinationIndex::new());
        for snapshot in store.snapshots() {
            index.rebuild(&snapshot);
        }
        let resolver = CreatorResolver::new(mock, StaticToken::new("token"), batch_limit);
        FanoutService::new(store, resolver, index, config.display.page_size)
    }

    /// End-to-end: config seed -> store -> index -> resolve -> registry reply
    #[tokio::test]
    async fn test_e2e_show_subscriptions_from_config() {
        let mock = MockProfileApi::new();
        mock.insert_profile("s1", "Alice", "alice");
        mock.insert_profile("s2", "Bob", "bob");
        mock.insert_profile("s3", "Carol", "carol");

        let service = Arc::new(seeded_service(mock, 100));
        let mut registry = CommandRegistry::new();
        registry.register("show-subscriptions", ShowSubscriptions::new(service));

        let lines = registry
            .dispatch("show-subscriptions", CommandRequest::new("g1"))
            .await
            .unwrap();

        // page_size 2, three creators: page 1 of 2
        assert_eq!(lines[0], "Streamers - page 1/2 (3 total)");
        assert_eq!(lines[1], "**Alice** sending to **#stream-alerts**");
        assert_eq!(lines[2], "**Bob** sending to **#stream-alerts**");

        let second = registry
            .dispatch(
                "show-subscriptions",
                CommandRequest::new("g1").with_arg("page", "1"),
            )
            .await
            .unwrap();
        assert_eq!(second[0], "Streamers - page 2/2 (3 total)");
        assert_eq!(second[1], "**Carol** sending to **#stream-alerts**");
    }

    /// Guilds are isolated: g2 sees its own channel only, never g1's
    #[tokio::test]
    async fn test_e2e_guild_isolation() {
        let mock = MockProfileApi::new();
        mock.insert_profile("s1", "Alice", "alice");

        let service = seeded_service(mock, 100);
        let list = service.resolve_for_display("g2").await.unwrap();

        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.entries[0].channel_name, "live-now");

        // Index-level union still spans both guilds for dispatch
        let destinations = service.index().lookup(&CreatorId::new("s1"));
        assert_eq!(destinations.len(), 2);
    }

    /// Partial resolution: unknown identities are omitted and counted
    #[tokio::test]
    async fn test_e2e_partial_resolution_reported() {
        let mock = MockProfileApi::new();
        mock.insert_profile("s1", "Alice", "alice");
        // s2, s3 unknown upstream

        let service = Arc::new(seeded_service(mock, 100));
        let mut registry = CommandRegistry::new();
        registry.register("show-subscriptions", ShowSubscriptions::new(service));

        let lines = registry
            .dispatch("show-subscriptions", CommandRequest::new("g1"))
            .await
            .unwrap();

        assert_eq!(lines[0], "Streamers - page 1/1 (1 total)");
        assert_eq!(lines[1], "**Alice** sending to **#stream-alerts**");
        assert_eq!(lines[2], "2 creator(s) could not be resolved and were omitted.");
    }

    /// Rate limit aborts the whole request after the first batch
    #[tokio::test]
    async fn test_e2e_rate_limit_single_failure() {
        let mock = MockProfileApi::with_config(MockApiConfig {
            rate_limited: true,
            ..Default::default()
        });

        let service = seeded_service(mock, 1);
        let err = service.resolve_for_display("g1").await.unwrap_err();
        assert!(matches!(err, NotifyError::RateLimited { .. }));

        // one batch issued, never retried across remaining chunks
        assert_eq!(service.resolver().client().call_count(), 1);
    }

    /// Outage propagates as UpstreamUnavailable with the operator message
    #[tokio::test]
    async fn test_e2e_outage_propagates() {
        let mock = MockProfileApi::with_config(MockApiConfig {
            unavailable: true,
            ..Default::default()
        });

        let service = seeded_service(mock, 100);
        let err = service.resolve_for_display("g1").await.unwrap_err();
        assert!(matches!(err, NotifyError::UpstreamUnavailable { .. }));
        assert_eq!(
            err.user_message(),
            "The streaming service is currently unavailable. Please try again later."
        );
    }

    /// Empty notify list renders the explicit empty-state message
    #[tokio::test]
    async fn test_e2e_empty_list_message() {
        let mock = MockProfileApi::new();
        let service = Arc::new(seeded_service(mock, 100));

        service.update_notify_list("g1", vec![]).await.unwrap();

        let mut registry = CommandRegistry::new();
        registry.register("show-subscriptions", ShowSubscriptions::new(service));

        let lines = registry
            .dispatch("show-subscriptions", CommandRequest::new("g1"))
            .await
            .unwrap();
        assert_eq!(lines, vec![EMPTY_LIST_MESSAGE.to_string()]);
    }

    /// Run summaries track pipeline outcomes across mixed requests
    #[tokio::test]
    async fn test_resolution_stats_track_request_outcomes() {
        use observability::ResolutionStats;

        let mut stats = ResolutionStats::new();

        // Request 1: partial success (s2, s3 unknown upstream)
        let mock = MockProfileApi::new();
        mock.insert_profile("s1", "Alice", "alice");
        let service = seeded_service(mock, 100);
        match service.subscription_page("g1", 0, None).await.unwrap() {
            PageView::Page {
                total_entries,
                unresolved,
                ..
            } => stats.record_success(total_entries, unresolved),
            PageView::Empty => stats.record_success(0, 0),
        }

        // Request 2: aborted by rate limiting
        let mock = MockProfileApi::with_config(MockApiConfig {
            rate_limited: true,
            ..Default::default()
        });
        let service = seeded_service(mock, 100);
        match service.subscription_page("g1", 0, None).await {
            Err(NotifyError::RateLimited { .. }) => stats.record_rate_limited(),
            other => panic!("expected rate limit, got {other:?}"),
        }

        let summary = stats.summary();
        assert_eq!(summary.requests, 2);
        assert_eq!(summary.resolved, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.rate_limited, 1);
        assert!((summary.resolve_rate - 1.0 / 3.0).abs() < 1e-9);
    }

    /// A notify-list write is visible in the next page request
    #[tokio::test]
    async fn test_e2e_write_then_read_consistency() {
        let mock = MockProfileApi::new();
        mock.insert_profile("s9", "Newcomer", "newcomer");

        let service = seeded_service(mock, 100);
        service
            .update_notify_list("g1", vec![CreatorId::new("s9")])
            .await
            .unwrap();

        match service.subscription_page("g1", 0, None).await.unwrap() {
            PageView::Page { page, .. } => {
                assert_eq!(page.items.len(), 1);
                assert_eq!(page.items[0].display_name, "Newcomer");
            }
            PageView::Empty => panic!("expected a page"),
        }

        // The replaced creators no longer route anywhere in g1
        assert!(service
            .index()
            .lookup_for_guild(&CreatorId::new("s1"), "g1")
            .is_empty());
    }
}
