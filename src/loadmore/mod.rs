//! Paginated list controller with refresh and infinite scrolling.
//!
//! [`Model`] tracks which page was loaded last, the items gathered so far and
//! the flags a screen needs to render loading, refreshing, load-more, empty
//! and end-of-list states. Data comes from an injected
//! [`PageLoader`](crate::loader::PageLoader); requests are returned as `Cmd`s
//! and their results come back through `update()`.
//!
//! # Request rules
//!
//! - `first_load()` runs once, while nothing has been loaded.
//! - `do_refresh()` reloads the first page and replaces the items.
//! - `do_load_more()` appends the page after the cursor until a short page
//!   marks the end.
//! - Only one request runs at a time; overlapping requests are dropped.
//! - A failed request keeps the cursor and items, so the user can retry.
//!
//! # Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_loadmore::loadmore::Model as LoadMoreList;
//! use bubbletea_loadmore::loader::PageResult;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     list: LoadMoreList<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut list = LoadMoreList::new(|page: u32| async move {
//!             let items: Vec<String> =
//!                 (0..20).map(|i| format!("story {}", (page - 1) * 20 + i)).collect();
//!             PageResult::Ok(Some(items))
//!         });
//!         let cmd = list.first_load();
//!         (Self { list }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.list.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//! ```
//!
//! # Observing state
//!
//! Every change publishes an immutable [`ListState`] snapshot:
//!
//! ```rust
//! use bubbletea_loadmore::loadmore::Model;
//! use bubbletea_loadmore::loader::PageResult;
//!
//! let mut list: Model<u32> = Model::new(|_page: u32| async {
//!     PageResult::Ok(Some(Vec::<u32>::new()))
//! });
//! let states = list.subscribe();
//!
//! list.on_load_success(1, Some(vec![]));
//! assert!(states.borrow().is_empty_list);
//! ```

pub mod keys;
pub mod model;
pub mod style;
pub mod types;


pub use keys::LoadMoreKeyMap;
pub use model::{ErrorHandler, Model};
pub use style::Styles;
pub use types::{ListState, LoadFailedMsg, LoadKind, LoadedMsg};
