//! Per-screen pagination settings.
//!
//! Every list screen gets a [`Config`]. The defaults cover the common case
//! (pages numbered from 1, twenty items per page, load more when five items
//! from the end) and each value can be overridden with the builder methods.
//!
//! ```rust
//! use bubbletea_loadmore::config::{Config, MissingPagePolicy};
//!
//! let config = Config::new()
//!     .with_first_page(0)
//!     .with_per_page(50)
//!     .with_load_more_threshold(10)
//!     .with_missing_page(MissingPagePolicy::Error);
//!
//! assert_eq!(config.first_page, 0);
//! assert_eq!(config.per_page, 50);
//! ```

/// Page number requested by a first load or a refresh.
pub const DEFAULT_FIRST_PAGE: u32 = 1;

/// Number of items from the end of the list at which a load-more fires.
pub const DEFAULT_LOAD_MORE_THRESHOLD: usize = 5;

/// Number of items a full page holds.
pub const DEFAULT_PER_PAGE: usize = 20;

/// What to do when a loader reports success but returns no page at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPagePolicy {
    /// Treat the result as an empty page. This marks the list as finished.
    #[default]
    EmptyPage,
    /// Treat the result as a failed load.
    Error,
}

/// Pagination settings for one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The first page number. The cursor starts one below it.
    pub first_page: u32,
    /// Remaining items from the end of the list that trigger a load-more.
    pub load_more_threshold: usize,
    /// Items per page. A shorter page marks the last page.
    pub per_page: usize,
    /// Handling for loaders that succeed without a page.
    pub missing_page: MissingPagePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_page: DEFAULT_FIRST_PAGE,
            load_more_threshold: DEFAULT_LOAD_MORE_THRESHOLD,
            per_page: DEFAULT_PER_PAGE,
            missing_page: MissingPagePolicy::default(),
        }
    }
}

impl Config {
    /// Creates a config with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first page number (builder pattern).
    pub fn with_first_page(mut self, first_page: u32) -> Self {
        self.first_page = first_page;
        self
    }

    /// Sets the number of items per page (builder pattern).
    ///
    /// The minimum value is 1; smaller values are clamped.
    ///
    /// ```rust
    /// use bubbletea_loadmore::config::Config;
    ///
    /// assert_eq!(Config::new().with_per_page(0).per_page, 1);
    /// ```
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Sets the load-more threshold (builder pattern).
    pub fn with_load_more_threshold(mut self, threshold: usize) -> Self {
        self.load_more_threshold = threshold;
        self
    }

    /// Sets the missing page policy (builder pattern).
    pub fn with_missing_page(mut self, policy: MissingPagePolicy) -> Self {
        self.missing_page = policy;
        self
    }

    /// The sentinel cursor value meaning "nothing loaded yet".
    ///
    /// This is `first_page - 1`, so it is `-1` when pages start at zero.
    pub fn pre_first_page(&self) -> i64 {
        i64::from(self.first_page) - 1
    }
}
