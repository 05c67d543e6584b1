#![warn(missing_docs)]

//! # bubbletea-loadmore
//!
//! A paginated list controller for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: first load, pull-to-refresh and infinite scrolling over any
//! paged data source.
//!
//! ## Overview
//!
//! A list screen that pages through remote data needs the same bookkeeping
//! every time: which page was loaded last, whether a request is already
//! running, whether the last page has been reached, and whether there is
//! anything to show at all. [`LoadMoreList`] keeps that state, decides which
//! page to request next and hands the actual fetch to an injected
//! [`PageLoader`].
//!
//! Like every bubbletea-rs component it follows the Elm Architecture:
//! requests come back as `Cmd`s, their results arrive as messages through
//! `update()`, and `view()` renders the list.
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`config`] | Page size, first page, load-more threshold |
//! | [`loader`] | The `PageLoader` strategy trait |
//! | [`loadmore`] | The controller, its messages and state snapshots |
//! | [`scroll`] | Threshold detection for infinite scrolling |
//! | [`key`] | Key bindings |
//! | [`error`] | `LoadError` |
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_loadmore::prelude::*;
//!
//! let config = Config::new().with_per_page(2);
//! let mut list: LoadMoreList<&'static str> = LoadMoreList::with_config(config, |page: u32| async move {
//!     let items = match page {
//!         1 => vec!["alpha", "beta"],
//!         2 => vec!["gamma"],
//!         _ => vec![],
//!     };
//!     PageResult::Ok(Some(items))
//! });
//!
//! // Returned Cmds run the loader; results are fed back through update().
//! let _cmd = list.first_load();
//! list.on_load_success(1, Some(vec!["alpha", "beta"]));
//!
//! let _cmd = list.do_load_more();
//! list.on_load_success(2, Some(vec!["gamma"]));
//!
//! assert_eq!(list.items(), ["alpha", "beta", "gamma"]);
//! assert!(list.is_last_page());
//! ```

pub mod config;
pub mod error;
pub mod key;
pub mod loader;
pub mod loadmore;
pub mod scroll;

pub use config::{
    Config, MissingPagePolicy, DEFAULT_FIRST_PAGE, DEFAULT_LOAD_MORE_THRESHOLD, DEFAULT_PER_PAGE,
};
pub use error::LoadError;
pub use key::{Binding, KeyMap, KeyPress};
pub use loader::{PageLoader, PageResult};
pub use loadmore::Model as LoadMoreList;
pub use loadmore::{
    ErrorHandler, ListState, LoadFailedMsg, LoadKind, LoadMoreKeyMap, LoadedMsg,
    Styles as LoadMoreStyles,
};
pub use scroll::{ScrollListener, ScrollMsg};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_loadmore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Config, MissingPagePolicy};
    pub use crate::error::LoadError;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::loader::{PageLoader, PageResult};
    pub use crate::loadmore::Model as LoadMoreList;
    pub use crate::loadmore::{
        ListState, LoadFailedMsg, LoadMoreKeyMap, LoadedMsg, Styles as LoadMoreStyles,
    };
    pub use crate::scroll::{ScrollListener, ScrollMsg};
}
