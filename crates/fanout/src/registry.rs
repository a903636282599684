//! Command registry - the operator surface.
//!
//! A table mapping command name -> handler function over a normalized
//! request context. Handlers are plain boxed async values; adding a command
//! is a `register` call, no inheritance or framework metadata involved.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use contracts::{NotifyError, SubscriptionStore};
use profile_api::{ProfileApi, TokenProvider};
use tracing::instrument;

use crate::service::{FanoutService, PageView};

/// Operator-facing message for an empty subscription list
pub const EMPTY_LIST_MESSAGE: &str = "No creators are on the notify list.";

/// Normalized request context handed to every handler
#[derive(Debug, Clone, Default)]
pub struct CommandRequest {
    /// Guild the command was invoked in
    pub guild_id: String,
    /// Named string arguments, already split by the transport layer
    pub args: HashMap<String, String>,
}

impl CommandRequest {
    pub fn new(guild_id: impl Into<String>) -> Self {
        Self {
            guild_id: guild_id.into(),
            args: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }
}

/// Boxed handler future; output is the rendered reply, line by line
pub type CommandFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<String>, NotifyError>> + Send + 'a>>;

/// A registered command handler
pub trait CommandHandler: Send + Sync {
    fn call<'a>(&'a self, request: CommandRequest) -> CommandFuture<'a>;
}

/// Name -> handler table
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a command name, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, handler: impl CommandHandler + 'static) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Dispatch a request to the named handler
    ///
    /// # Errors
    /// `InvalidArgument` for an unknown command name
    #[instrument(name = "command_dispatch", skip(self, request), fields(guild_id = %request.guild_id))]
    pub async fn dispatch(
        &self,
        name: &str,
        request: CommandRequest,
    ) -> Result<Vec<String>, NotifyError> {
        match self.handlers.get(name) {
            Some(handler) => handler.call(request).await,
            None => Err(NotifyError::invalid_argument(format!(
                "unknown command: {name}"
            ))),
        }
    }
}

/// `show-subscriptions` - render one page of a guild's subscription list
///
/// Args: `page` (zero-based, default 0), `page_size` (default from config).
pub struct ShowSubscriptions<S, C, T> {
    service: Arc<FanoutService<S, C, T>>,
}

impl<S, C, T> ShowSubscriptions<S, C, T> {
    pub fn new(service: Arc<FanoutService<S, C, T>>) -> Self {
        Self { service }
    }
}

impl<S, C, T> CommandHandler for ShowSubscriptions<S, C, T>
where
    S: SubscriptionStore + Send + Sync + 'static,
    C: ProfileApi + 'static,
    T: TokenProvider + 'static,
{
    fn call<'a>(&'a self, request: CommandRequest) -> CommandFuture<'a> {
        Box::pin(async move {
            let page_index = parse_arg(&request, "page")?.unwrap_or(0);
            let page_size = parse_arg(&request, "page_size")?;

            let view = self
                .service
                .subscription_page(&request.guild_id, page_index, page_size)
                .await?;
            Ok(render_view(&view))
        })
    }
}

fn parse_arg(request: &CommandRequest, key: &str) -> Result<Option<usize>, NotifyError> {
    match request.args.get(key) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            NotifyError::invalid_argument(format!(
                "argument '{key}' must be a non-negative integer, got '{raw}'"
            ))
        }),
    }
}

/// Render a page view into operator-facing reply lines.
///
/// Shared by the `show-subscriptions` handler and direct-service callers
/// (the CLI); the empty state and the unresolved footnote render identically
/// everywhere.
pub fn render_view(view: &PageView) -> Vec<String> {
    match view {
        PageView::Empty => vec![EMPTY_LIST_MESSAGE.to_string()],
        PageView::Page {
            page,
            page_count,
            total_entries,
            unresolved,
        } => {
            let mut lines = Vec::with_capacity(page.items.len() + 2);
            lines.push(format!(
                "Streamers - page {}/{} ({} total)",
                page.index + 1,
                page_count,
                total_entries
            ));
            for entry in &page.items {
                lines.push(format!(
                    "**{}** sending to **#{}**",
                    entry.display_name, entry.channel_name
                ));
            }
            if *unresolved > 0 {
                lines.push(format!(
                    "{unresolved} creator(s) could not be resolved and were omitted."
                ));
            }
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_store::MemoryStore;
    use contracts::{CreatorId, GuildSubscriptions, NotifyChannel};
    use notify_index::DestinationIndex;
    use profile_api::{CreatorResolver, MockProfileApi, StaticToken};

    fn registry_with_guild() -> CommandRegistry {
        let guild = GuildSubscriptions {
            id: "g1".into(),
            name: None,
            notify_list: vec![CreatorId::new("s1")],
            notify_channels: vec![NotifyChannel {
                id: "c1".into(),
                name: "stream-alerts".into(),
            }],
        };

        let mock = MockProfileApi::new();
        mock.insert_profile("s1", "Alice", "alice");

        let store = MemoryStore::new();
        let index = Arc::new(DestinationIndex::new());
        index.rebuild(&guild);
        store.insert(guild);

        let service = Arc::new(FanoutService::new(
            store,
            CreatorResolver::new(mock, StaticToken::new("t"), 100),
            index,
            10,
        ));

        let mut registry = CommandRegistry::new();
        registry.register("show-subscriptions", ShowSubscriptions::new(service));
        registry
    }

    #[tokio::test]
    async fn test_dispatch_show_subscriptions() {
        let registry = registry_with_guild();
        let lines = registry
            .dispatch("show-subscriptions", CommandRequest::new("g1"))
            .await
            .unwrap();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("page 1/1"));
        assert_eq!(lines[1], "**Alice** sending to **#stream-alerts**");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_command() {
        let registry = registry_with_guild();
        let err = registry
            .dispatch("does-not-exist", CommandRequest::new("g1"))
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_dispatch_bad_page_argument() {
        let registry = registry_with_guild();
        let request = CommandRequest::new("g1").with_arg("page", "two");
        let err = registry
            .dispatch("show-subscriptions", request)
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::InvalidArgument { .. }));
    }

    #[test]
    fn test_render_view_empty_state() {
        assert_eq!(
            render_view(&PageView::Empty),
            vec![EMPTY_LIST_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_names_sorted() {
        let registry = registry_with_guild();
        assert_eq!(registry.names(), vec!["show-subscriptions"]);
    }
}
