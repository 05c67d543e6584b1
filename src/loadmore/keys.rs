//! Key bindings for refreshing and paging a load-more list.
//!
//! - **Refresh**: `r`, `F5`
//! - **Load more**: `ctrl+n`

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings understood by [`Model::update`](super::Model::update).
#[derive(Debug, Clone)]
pub struct LoadMoreKeyMap {
    /// Reload from the first page.
    pub refresh: key::Binding,
    /// Fetch the next page without scrolling.
    pub load_more: key::Binding,
}

impl Default for LoadMoreKeyMap {
    fn default() -> Self {
        Self {
            refresh: key::Binding::new(vec![KeyCode::Char('r'), KeyCode::F(5)])
                .with_help("r/f5", "refresh"),
            load_more: key::Binding::new(vec![(KeyCode::Char('n'), KeyModifiers::CONTROL)])
                .with_help("ctrl+n", "load more"),
        }
    }
}

impl key::KeyMap for LoadMoreKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.refresh, &self.load_more]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.refresh, &self.load_more]]
    }
}
