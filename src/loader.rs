//! The data-fetch strategy injected into a load-more list.
//!
//! A [`PageLoader`] fetches one page of items. The controller never performs
//! I/O itself: it awaits the loader inside a `Cmd` and turns the outcome into
//! a message for the update loop.
//!
//! Any async closure taking the page number is a loader:
//!
//! ```rust,no_run
//! use bubbletea_loadmore::loader::{PageLoader, PageResult};
//!
//! # async fn demo() {
//! let loader = |page: u32| async move {
//!     let items: Vec<String> = (0..3).map(|i| format!("p{page}-{i}")).collect();
//!     PageResult::Ok(Some(items))
//! };
//!
//! let items = loader.load_page(2).await.unwrap().unwrap();
//! assert_eq!(items[0], "p2-0");
//! # }
//! ```

use crate::error::LoadError;
use async_trait::async_trait;
use std::future::Future;

/// Outcome of a single page fetch.
///
/// `Ok(None)` means the source answered without a page; see
/// [`MissingPagePolicy`](crate::config::MissingPagePolicy).
pub type PageResult<T> = Result<Option<Vec<T>>, LoadError>;

/// Fetches pages of items for a load-more list.
#[async_trait]
pub trait PageLoader<T>: Send + Sync {
    /// Loads the given page.
    async fn load_page(&self, page: u32) -> PageResult<T>;
}

#[async_trait]
impl<T, F, Fut> PageLoader<T> for F
where
    T: Send + 'static,
    F: Fn(u32) -> Fut + Send + Sync,
    Fut: Future<Output = PageResult<T>> + Send + 'static,
{
    async fn load_page(&self, page: u32) -> PageResult<T> {
        (self)(page).await
    }
}
