//! FanoutService - store read -> resolve -> index lookup -> paginate.

use std::sync::Arc;

use contracts::{CreatorId, GuildSubscriptions, NotifyError, SubscriptionStore};
use metrics::{counter, histogram};
use notify_index::DestinationIndex;
use profile_api::{CreatorResolver, ProfileApi, TokenProvider};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::presenter::{Page, Paginated};

/// One (resolved creator, destination) pairing, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub creator_id: CreatorId,
    pub display_name: String,
    pub channel_id: String,
    pub channel_name: String,
}

/// Resolved, filtered, sorted subscription list for one guild
#[derive(Debug, Default)]
pub struct DisplayList {
    /// Entries sorted by (display name, channel id)
    pub entries: Vec<DisplayEntry>,
    /// Identities that failed to resolve (reported, never shown blank)
    pub unresolved: usize,
    /// Resolved creators dropped for having no destination here (stale index)
    pub dropped: usize,
}

/// One rendered page, or the explicit empty state
#[derive(Debug)]
pub enum PageView {
    /// The guild has nothing to display; callers must render an explicit
    /// empty-state message, not a blank page
    Empty,
    Page {
        page: Page<DisplayEntry>,
        page_count: usize,
        total_entries: usize,
        unresolved: usize,
    },
}

/// Request-driven fan-out pipeline for one bot deployment.
///
/// Owns nothing persistent: the store and the profile API are external
/// collaborators, and the index is shared with whoever rebuilds it.
pub struct FanoutService<S, C, T> {
    store: S,
    resolver: CreatorResolver<C, T>,
    index: Arc<DestinationIndex>,
    default_page_size: usize,
}

impl<S, C, T> FanoutService<S, C, T>
where
    S: SubscriptionStore + Sync,
    C: ProfileApi,
    T: TokenProvider,
{
    pub fn new(
        store: S,
        resolver: CreatorResolver<C, T>,
        index: Arc<DestinationIndex>,
        default_page_size: usize,
    ) -> Self {
        Self {
            store,
            resolver,
            index,
            default_page_size: default_page_size.max(1),
        }
    }

    /// Shared destination index
    pub fn index(&self) -> &Arc<DestinationIndex> {
        &self.index
    }

    /// Underlying subscription store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Underlying creator resolver (test hooks)
    pub fn resolver(&self) -> &CreatorResolver<C, T> {
        &self.resolver
    }

    /// Must be called by the CRUD layer after every successful notify-list
    /// write; rebuilds this guild's index partition from the fresh snapshot.
    pub fn on_subscription_list_changed(&self, guild: &GuildSubscriptions) {
        self.index.rebuild(guild);
    }

    /// Read-modify-write helper: replace a guild's notify list in the store
    /// and rebuild its partition from the post-write snapshot.
    #[instrument(name = "update_notify_list", skip(self, notify_list), fields(creators = notify_list.len()))]
    pub async fn update_notify_list(
        &self,
        guild_id: &str,
        notify_list: Vec<CreatorId>,
    ) -> Result<GuildSubscriptions, NotifyError> {
        self.store.set(guild_id, notify_list).await?;
        let fresh = self.store.get(guild_id).await?;
        self.on_subscription_list_changed(&fresh);
        Ok(fresh)
    }

    /// Drop a guild from the index (community-leave).
    pub fn on_guild_removed(&self, guild_id: &str) {
        self.index.remove_guild(guild_id);
    }

    /// Resolve a guild's subscription list for display.
    ///
    /// Store failures and the two blocking resolver failures (rate limit,
    /// outage) abort the request; partial resolution failures are reflected
    /// in `unresolved` and never abort.
    #[instrument(name = "resolve_for_display", skip(self))]
    pub async fn resolve_for_display(&self, guild_id: &str) -> Result<DisplayList, NotifyError> {
        let started = std::time::Instant::now();
        let guild = self.store.get(guild_id).await?;

        if guild.notify_list.is_empty() {
            debug!(guild_id, "notify list empty, nothing to resolve");
            return Ok(DisplayList::default());
        }

        let resolution = self.resolver.resolve(&guild.notify_list).await?;

        let mut entries = Vec::with_capacity(resolution.resolved.len());
        let mut dropped = 0usize;
        for profile in &resolution.resolved {
            let destinations = self.index.lookup_for_guild(&profile.creator_id, guild_id);
            if destinations.is_empty() {
                dropped += 1;
                continue;
            }
            for destination in destinations {
                entries.push(DisplayEntry {
                    creator_id: profile.creator_id.clone(),
                    display_name: profile.display_name.clone(),
                    channel_id: destination.channel_id,
                    channel_name: destination.channel_name,
                });
            }
        }

        if dropped > 0 {
            warn!(
                guild_id,
                dropped, "dropped resolved creators with no destination in this guild"
            );
            counter!("announcer_display_entries_dropped_total").increment(dropped as u64);
        }

        entries.sort_by(|a, b| {
            a.display_name
                .cmp(&b.display_name)
                .then_with(|| a.channel_id.cmp(&b.channel_id))
        });

        histogram!("announcer_display_resolve_ms")
            .record(started.elapsed().as_secs_f64() * 1000.0);

        Ok(DisplayList {
            entries,
            unresolved: resolution.failed_count,
            dropped,
        })
    }

    /// Operator surface: one page of the subscription list.
    ///
    /// The page size is validated before any I/O. An empty result is the
    /// explicit `PageView::Empty` state; a page index past the end of a
    /// non-empty list is `InvalidArgument`.
    #[instrument(name = "subscription_page", skip(self))]
    pub async fn subscription_page(
        &self,
        guild_id: &str,
        page_index: usize,
        page_size: Option<usize>,
    ) -> Result<PageView, NotifyError> {
        let size = page_size.unwrap_or(self.default_page_size);
        if size == 0 {
            return Err(NotifyError::invalid_argument("page size must be > 0"));
        }

        let list = self.resolve_for_display(guild_id).await?;
        if list.entries.is_empty() {
            return Ok(PageView::Empty);
        }

        let pages = Paginated::new(&list.entries, size)?;
        match pages.page(page_index) {
            Some(page) => {
                counter!("announcer_pages_served_total").increment(1);
                Ok(PageView::Page {
                    page,
                    page_count: pages.page_count(),
                    total_entries: list.entries.len(),
                    unresolved: list.unresolved,
                })
            }
            None => Err(NotifyError::invalid_argument(format!(
                "page {page_index} out of range (0..{})",
                pages.page_count()
            ))),
        }
    }
}
