//! The load-more list controller.

use super::keys::LoadMoreKeyMap;
use super::style::{Styles, ELLIPSIS};
use super::types::{ListState, LoadFailedMsg, LoadKind, LoadedMsg};
use crate::config::{Config, MissingPagePolicy};
use crate::error::LoadError;
use crate::loader::PageLoader;
use crate::scroll::{ScrollListener, ScrollMsg};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

// Internal ID management for list instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Callback that receives every failed load.
pub type ErrorHandler = Arc<dyn Fn(&LoadError) + Send + Sync>;

/// Paginated list controller with refresh and load-more.
///
/// The controller keeps the page cursor, the accumulated items and the
/// loading flags. It never fetches data itself: every request returns a
/// `Cmd` that awaits the injected [`PageLoader`] and resolves to a
/// [`LoadedMsg`] or [`LoadFailedMsg`], which must be routed back through
/// [`update`](Model::update).
///
/// Only one request is in flight at a time. Requests made while another is
/// outstanding are dropped and return `None`.
///
/// # Examples
///
/// ```rust
/// use bubbletea_loadmore::loadmore::Model;
/// use bubbletea_loadmore::loader::PageResult;
///
/// let mut list: Model<String> = Model::new(|page: u32| async move {
///     PageResult::Ok(Some(vec![format!("item on page {page}")]))
/// });
///
/// let cmd = list.first_load();
/// assert!(cmd.is_some());
/// assert!(list.is_loading());
///
/// // Nothing else starts while the first load is outstanding.
/// assert!(list.do_refresh().is_none());
///
/// // The Cmd would deliver this through update(); callers may also report directly.
/// list.on_load_success(1, Some(vec!["a".to_string()]));
/// assert_eq!(list.items(), ["a".to_string()]);
/// assert!(list.is_last_page());
/// ```
pub struct Model<T> {
    id: i64,
    config: Config,
    loader: Arc<dyn PageLoader<T>>,
    scroll: ScrollListener,
    state: ListState<T>,
    publisher: watch::Sender<ListState<T>>,
    error_handler: Option<ErrorHandler>,
    /// Key bindings for refresh and load-more.
    pub keymap: LoadMoreKeyMap,
    /// Styles for the rendered view.
    pub styles: Styles,
}

impl<T> Model<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a controller with the default [`Config`].
    pub fn new<L>(loader: L) -> Self
    where
        L: PageLoader<T> + 'static,
    {
        Self::with_config(Config::default(), loader)
    }

    /// Creates a controller with a custom [`Config`].
    pub fn with_config<L>(config: Config, loader: L) -> Self
    where
        L: PageLoader<T> + 'static,
    {
        Self::from_shared(config, Arc::new(loader))
    }

    /// Creates a controller from a loader that is shared with other code.
    pub fn from_shared(config: Config, loader: Arc<dyn PageLoader<T>>) -> Self {
        let state = ListState::default();
        let (publisher, _) = watch::channel(state.clone());
        Self {
            id: next_id(),
            scroll: ScrollListener::new(config.load_more_threshold),
            config,
            loader,
            state,
            publisher,
            error_handler: None,
            keymap: LoadMoreKeyMap::default(),
            styles: Styles::default(),
        }
    }

    /// Installs a handler called with every failed load (builder pattern).
    ///
    /// Failures are always logged through `tracing` first.
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&LoadError) + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(handler));
        self
    }

    /// Unique id of this controller. Messages carry it so several lists can
    /// live in one program.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The pagination settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The scroll listener that triggers load-more.
    pub fn scroll_listener(&self) -> &ScrollListener {
        &self.scroll
    }

    /// The current snapshot.
    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// Subscribes to state snapshots.
    ///
    /// The receiver sees the current snapshot immediately and a new one after
    /// every operation that changes the list.
    pub fn subscribe(&self) -> watch::Receiver<ListState<T>> {
        self.publisher.subscribe()
    }

    /// The accumulated items.
    pub fn items(&self) -> &[T] {
        &self.state.items
    }

    /// The last page loaded successfully; `None` before the first success.
    pub fn current_page(&self) -> Option<u32> {
        self.state.current_page
    }

    /// Whether the initial load is in flight.
    ///
    /// This is the general loading indicator: while it is set, refresh and
    /// load-more requests are dropped as well.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// Whether a refresh is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.state.is_refreshing
    }

    /// Whether a load-more is in flight.
    pub fn is_load_more(&self) -> bool {
        self.state.is_load_more
    }

    /// Whether the last page has been reached.
    pub fn is_last_page(&self) -> bool {
        self.state.is_last_page
    }

    /// Whether a load finished with no items in the list.
    pub fn is_empty_list(&self) -> bool {
        self.state.is_empty_list
    }

    /// The failure of the last load, if it failed.
    pub fn last_error(&self) -> Option<&LoadError> {
        self.state.last_error.as_ref()
    }

    /// Whether any request is outstanding.
    pub fn in_flight(&self) -> bool {
        self.state.in_flight()
    }

    /// True until the first page has been loaded: the cursor is still on the
    /// pre-first page and there are no items.
    pub fn is_first(&self) -> bool {
        self.state.current_page.is_none() && self.state.items.is_empty()
    }

    /// Starts the initial load of the first page.
    ///
    /// Does nothing once a page has been loaded or while a request is
    /// outstanding.
    pub fn first_load(&mut self) -> Option<Cmd> {
        if !self.is_first() || self.in_flight() {
            debug!(id = self.id, "first load skipped");
            return None;
        }
        self.state.is_loading = true;
        self.publish();
        Some(self.request(LoadKind::First, self.config.first_page))
    }

    /// Reloads the list from the first page.
    ///
    /// Does nothing while any request is outstanding.
    pub fn do_refresh(&mut self) -> Option<Cmd> {
        if self.state.is_loading || self.state.is_refreshing || self.state.is_load_more {
            debug!(id = self.id, "refresh skipped");
            return None;
        }
        self.state.is_refreshing = true;
        self.publish();
        Some(self.request(LoadKind::Refresh, self.config.first_page))
    }

    /// Requests the page after the cursor.
    ///
    /// Does nothing while any request is outstanding or once the last page
    /// has been reached.
    pub fn do_load_more(&mut self) -> Option<Cmd> {
        if self.in_flight() || self.state.is_last_page {
            debug!(
                id = self.id,
                last_page = self.state.is_last_page,
                "load more skipped"
            );
            return None;
        }
        self.state.is_load_more = true;
        self.publish();
        Some(self.request(LoadKind::More, self.next_page()))
    }

    /// Re-arms load-more: releases the scroll guard and clears the last page
    /// flag.
    pub fn reset_load_more(&mut self) {
        self.clear_load_more_guards();
        self.publish();
    }

    /// Records a successfully loaded page.
    ///
    /// Loading the first page replaces the list; any other page is appended.
    /// A page shorter than `per_page` marks the last page.
    pub fn on_load_success(&mut self, page: u32, items: Option<Vec<T>>) {
        let items = match items {
            Some(items) => items,
            None => match self.config.missing_page {
                MissingPagePolicy::EmptyPage => {
                    debug!(id = self.id, page, "missing page treated as empty");
                    Vec::new()
                }
                MissingPagePolicy::Error => {
                    self.on_error(LoadError::MissingPage(page));
                    return;
                }
            },
        };

        self.state.current_page = Some(page);
        if page == self.config.first_page {
            self.state.items = Arc::new(Vec::new());
        }
        if self.state.is_refreshing {
            self.clear_load_more_guards();
        }

        let count = items.len();
        if count > 0 {
            Arc::make_mut(&mut self.state.items).extend(items);
        }
        self.state.is_last_page = count < self.config.per_page;

        self.state.is_loading = false;
        self.state.is_refreshing = false;
        self.state.is_load_more = false;
        self.state.last_error = None;
        self.check_empty_list();

        debug!(
            id = self.id,
            page,
            count,
            total = self.state.items.len(),
            last_page = self.state.is_last_page,
            "page loaded"
        );
        self.publish();
    }

    /// Records a failed load.
    ///
    /// The error is logged and passed to the error handler. The cursor, the
    /// items and the last page flag are left alone, so the same page can be
    /// retried.
    pub fn on_error(&mut self, error: LoadError) {
        warn!(
            id = self.id,
            kind = ?self.state.in_flight_kind(),
            error = %error,
            "page load failed"
        );
        if let Some(handler) = &self.error_handler {
            handler(&error);
        }

        self.scroll.reset();
        self.state.is_loading = false;
        self.state.is_refreshing = false;
        self.state.is_load_more = false;
        self.state.last_error = Some(error);
        self.check_empty_list();
        self.publish();
    }

    /// Feeds a scroll position to the scroll listener and starts a load-more
    /// when it crosses the threshold.
    pub fn on_scroll(&mut self, msg: &ScrollMsg) -> Option<Cmd> {
        if msg.id != 0 && msg.id != self.id {
            return None;
        }
        if self.scroll.on_scrolled(msg) {
            return self.do_load_more();
        }
        None
    }

    /// Handles load results, scroll reports and key presses.
    ///
    /// Load results and scroll reports addressed to another controller are
    /// ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<LoadedMsg<T>>() {
            Ok(loaded) => {
                if loaded.id == self.id {
                    let LoadedMsg { page, items, .. } = *loaded;
                    self.on_load_success(page, items);
                }
                return None;
            }
            Err(msg) => msg,
        };

        if let Some(failed) = msg.downcast_ref::<LoadFailedMsg>() {
            if failed.id == self.id {
                self.on_error(failed.error.clone());
            }
            return None;
        }

        if let Some(scroll) = msg.downcast_ref::<ScrollMsg>() {
            return self.on_scroll(scroll);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.refresh.matches(key_msg) {
                return self.do_refresh();
            }
            if self.keymap.load_more.matches(key_msg) {
                return self.do_load_more();
            }
        }

        None
    }

    /// Renders a single status line for the current state.
    ///
    /// Empty when the list is idle and more pages may follow.
    pub fn status_view(&self) -> String {
        let state = &self.state;
        if state.is_loading {
            self.styles.loading.render(&format!("Loading{ELLIPSIS}"))
        } else if state.is_refreshing {
            self.styles.refreshing.render(&format!("Refreshing{ELLIPSIS}"))
        } else if state.is_load_more {
            self.styles
                .loading_more
                .render(&format!("Loading more{ELLIPSIS}"))
        } else if let Some(err) = &state.last_error {
            self.styles.error.render(&format!("Error: {err}"))
        } else if state.is_empty_list {
            self.styles.empty.render("No items")
        } else if state.is_last_page {
            self.styles.end_of_list.render("End of list")
        } else {
            String::new()
        }
    }

    fn next_page(&self) -> u32 {
        self.state
            .current_page
            .map_or(self.config.first_page, |page| page.saturating_add(1))
    }

    fn clear_load_more_guards(&mut self) {
        self.scroll.reset();
        self.state.is_last_page = false;
    }

    fn check_empty_list(&mut self) {
        self.state.is_empty_list = self.state.items.is_empty();
    }

    fn publish(&self) {
        self.publisher.send_replace(self.state.clone());
    }

    fn request(&self, kind: LoadKind, page: u32) -> Cmd {
        let loader = Arc::clone(&self.loader);
        let id = self.id;
        debug!(id, page, %kind, "requesting page");

        Box::pin(async move {
            let msg: Msg = match loader.load_page(page).await {
                Ok(items) => Box::new(LoadedMsg { id, page, items }),
                Err(error) => Box::new(LoadFailedMsg { id, page, error }),
            };
            Some(msg)
        })
    }
}

impl<T> Model<T>
where
    T: fmt::Display + Clone + Send + Sync + 'static,
{
    /// Renders every item on its own line, followed by the status line.
    pub fn view(&self) -> String {
        let mut lines: Vec<String> = self
            .state
            .items
            .iter()
            .map(|item| self.styles.item.render(&item.to_string()))
            .collect();

        let status = self.status_view();
        if !status.is_empty() {
            lines.push(status);
        }
        lines.join("\n")
    }
}

impl<T> fmt::Debug for Model<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("scroll", &self.scroll)
            .field("state", &self.state)
            .field("error_handler", &self.error_handler.is_some())
            .finish()
    }
}
