//! Messages and state snapshots for the load-more list.

use crate::error::LoadError;
use std::fmt;
use std::sync::Arc;

/// Sent when a page request completes successfully.
///
/// Produced by the `Cmd`s the controller returns; route it back through
/// [`Model::update`](super::Model::update).
#[derive(Debug, Clone)]
pub struct LoadedMsg<T> {
    /// Id of the controller that requested the page.
    pub id: i64,
    /// The page that was loaded.
    pub page: u32,
    /// The loaded items. `None` when the source returned no page at all.
    pub items: Option<Vec<T>>,
}

/// Sent when a page request fails.
#[derive(Debug, Clone)]
pub struct LoadFailedMsg {
    /// Id of the controller that requested the page.
    pub id: i64,
    /// The page that failed.
    pub page: u32,
    /// Why it failed.
    pub error: LoadError,
}

/// Which kind of request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// The initial load of the screen.
    First,
    /// Reload from the first page.
    Refresh,
    /// Append the next page.
    More,
}

impl fmt::Display for LoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadKind::First => write!(f, "first load"),
            LoadKind::Refresh => write!(f, "refresh"),
            LoadKind::More => write!(f, "load more"),
        }
    }
}

/// An immutable snapshot of a load-more list.
///
/// A new snapshot is published after every operation that changes the list.
/// Snapshots share item storage, so cloning one is cheap.
pub struct ListState<T> {
    /// Items accumulated across the loaded pages.
    pub items: Arc<Vec<T>>,
    /// The last page loaded successfully; `None` before the first success.
    pub current_page: Option<u32>,
    /// The first load is in flight.
    pub is_loading: bool,
    /// A refresh is in flight.
    pub is_refreshing: bool,
    /// A load-more is in flight.
    pub is_load_more: bool,
    /// The last successful page was short; no more pages will be requested.
    pub is_last_page: bool,
    /// A load finished and the list has no items.
    pub is_empty_list: bool,
    /// The failure of the last load, cleared by the next success.
    pub last_error: Option<LoadError>,
}

impl<T> ListState<T> {
    /// True while any request is outstanding.
    pub fn in_flight(&self) -> bool {
        self.is_loading || self.is_refreshing || self.is_load_more
    }

    /// The kind of the outstanding request, if any.
    pub fn in_flight_kind(&self) -> Option<LoadKind> {
        if self.is_loading {
            Some(LoadKind::First)
        } else if self.is_refreshing {
            Some(LoadKind::Refresh)
        } else if self.is_load_more {
            Some(LoadKind::More)
        } else {
            None
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
            current_page: None,
            is_loading: false,
            is_refreshing: false,
            is_load_more: false,
            is_last_page: false,
            is_empty_list: false,
            last_error: None,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            current_page: self.current_page,
            is_loading: self.is_loading,
            is_refreshing: self.is_refreshing,
            is_load_more: self.is_load_more,
            is_last_page: self.is_last_page,
            is_empty_list: self.is_empty_list,
            last_error: self.last_error.clone(),
        }
    }
}

impl<T> fmt::Debug for ListState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListState")
            .field("items", &self.items.len())
            .field("current_page", &self.current_page)
            .field("is_loading", &self.is_loading)
            .field("is_refreshing", &self.is_refreshing)
            .field("is_load_more", &self.is_load_more)
            .field("is_last_page", &self.is_last_page)
            .field("is_empty_list", &self.is_empty_list)
            .field("last_error", &self.last_error)
            .finish()
    }
}
