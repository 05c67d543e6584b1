//! Scroll-position tracking that decides when to load the next page.
//!
//! The host UI owns the actual scrolling widget. Whenever it scrolls, it
//! reports where it is with a [`ScrollMsg`]; the [`ScrollListener`] answers
//! whether the end of the list is close enough to fetch more.
//!
//! The listener holds a guard so that one approach to the end fires exactly
//! once. The guard is released by [`ScrollListener::reset`], or automatically
//! once the list has grown past the size it had when the guard was set.
//!
//! ```rust
//! use bubbletea_loadmore::scroll::{ScrollListener, ScrollMsg};
//!
//! let mut listener = ScrollListener::new(5);
//!
//! // 20 items, showing up to index 9: still far from the end.
//! assert!(!listener.on_scrolled(&ScrollMsg::new(1, 9, 20)));
//!
//! // Showing up to index 16: within 5 of the end.
//! assert!(listener.on_scrolled(&ScrollMsg::new(1, 16, 20)));
//!
//! // Guard is set until the list grows or the listener is reset.
//! assert!(!listener.on_scrolled(&ScrollMsg::new(1, 17, 20)));
//! ```

/// A scroll position report from the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMsg {
    /// Target controller id. Zero addresses every controller.
    pub id: i64,
    /// Scroll movement since the previous report. Positive is towards the end.
    pub delta: i32,
    /// Index of the last item currently visible.
    pub last_visible: usize,
    /// Number of items in the list.
    pub total_items: usize,
}

impl ScrollMsg {
    /// Creates a scroll report addressed to any controller.
    pub fn new(delta: i32, last_visible: usize, total_items: usize) -> Self {
        Self {
            id: 0,
            delta,
            last_visible,
            total_items,
        }
    }

    /// Creates a scroll report for a viewport showing `height` rows from
    /// `offset`, one item per row.
    ///
    /// ```rust
    /// use bubbletea_loadmore::scroll::ScrollMsg;
    ///
    /// let msg = ScrollMsg::from_offset(3, 10, 10, 40);
    /// assert_eq!(msg.last_visible, 19);
    /// ```
    pub fn from_offset(delta: i32, offset: usize, height: usize, total_items: usize) -> Self {
        let last_visible = offset
            .saturating_add(height)
            .saturating_sub(1)
            .min(total_items.saturating_sub(1));
        Self::new(delta, last_visible, total_items)
    }

    /// Addresses this report to one controller (builder pattern).
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// Threshold detector for infinite scrolling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollListener {
    threshold: usize,
    loading: bool,
    armed_total: usize,
}

impl ScrollListener {
    /// Creates a listener that fires when no more than `threshold` items
    /// remain past the last visible one.
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            loading: false,
            armed_total: 0,
        }
    }

    /// The configured threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether the guard is currently set.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Feeds a scroll position and returns `true` when a load-more should
    /// start.
    ///
    /// Reports that do not move towards the end are ignored.
    pub fn on_scrolled(&mut self, msg: &ScrollMsg) -> bool {
        if msg.delta <= 0 {
            return false;
        }

        if self.loading && msg.total_items > self.armed_total {
            self.loading = false;
        }

        if !self.loading && msg.total_items <= msg.last_visible.saturating_add(self.threshold) {
            self.loading = true;
            self.armed_total = msg.total_items;
            return true;
        }
        false
    }

    /// Releases the guard so the next approach to the end fires again.
    pub fn reset(&mut self) {
        self.loading = false;
    }
}

impl Default for ScrollListener {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_LOAD_MORE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upward_scroll_ignored() {
        let mut listener = ScrollListener::new(5);
        assert!(!listener.on_scrolled(&ScrollMsg::new(0, 19, 20)));
        assert!(!listener.on_scrolled(&ScrollMsg::new(-2, 19, 20)));
        assert!(!listener.is_loading());
    }

    #[test]
    fn test_fires_at_threshold() {
        let mut listener = ScrollListener::new(5);
        assert!(!listener.on_scrolled(&ScrollMsg::new(1, 14, 20)));
        assert!(listener.on_scrolled(&ScrollMsg::new(1, 15, 20)));
        assert!(listener.is_loading());
    }

    #[test]
    fn test_guard_until_reset() {
        let mut listener = ScrollListener::new(2);
        assert!(listener.on_scrolled(&ScrollMsg::new(1, 9, 10)));
        assert!(!listener.on_scrolled(&ScrollMsg::new(1, 9, 10)));

        listener.reset();
        assert!(listener.on_scrolled(&ScrollMsg::new(1, 9, 10)));
    }

    #[test]
    fn test_guard_released_when_list_grows() {
        let mut listener = ScrollListener::new(2);
        assert!(listener.on_scrolled(&ScrollMsg::new(1, 9, 10)));

        // The next page arrived; far from the new end, nothing fires.
        assert!(!listener.on_scrolled(&ScrollMsg::new(1, 10, 20)));
        assert!(!listener.is_loading());

        assert!(listener.on_scrolled(&ScrollMsg::new(1, 18, 20)));
    }

    #[test]
    fn test_empty_list_fires() {
        let mut listener = ScrollListener::new(0);
        assert!(listener.on_scrolled(&ScrollMsg::from_offset(1, 0, 10, 0)));
    }

    #[test]
    fn test_from_offset_clamps_to_list() {
        let msg = ScrollMsg::from_offset(1, 35, 10, 40);
        assert_eq!(msg.last_visible, 39);
        assert_eq!(msg.total_items, 40);
        assert_eq!(msg.with_id(7).id, 7);
    }

    #[test]
    fn test_from_offset_far_past_end() {
        let msg = ScrollMsg::from_offset(1, usize::MAX, 1, 10);
        assert_eq!(msg.last_visible, 9);
    }

    #[test]
    fn test_huge_threshold_fires() {
        let mut listener = ScrollListener::new(usize::MAX);
        assert!(listener.on_scrolled(&ScrollMsg::new(1, 3, 20)));
    }
}
