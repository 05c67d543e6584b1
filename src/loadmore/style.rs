//! Styles for the load-more status line.
//!
//! All defaults use `AdaptiveColor` so the status line stays readable on
//! light and dark terminals.

use lipgloss_extras::prelude::*;

/// Unicode ellipsis used in progress messages.
pub const ELLIPSIS: &str = "…";

/// Styling for every status a load-more list can show under its items.
#[derive(Debug, Clone)]
pub struct Styles {
    /// First load in progress.
    pub loading: Style,
    /// Refresh in progress.
    pub refreshing: Style,
    /// Next page in progress.
    pub loading_more: Style,
    /// Last load failed.
    pub error: Style,
    /// Nothing to show.
    pub empty: Style,
    /// All pages loaded.
    pub end_of_list: Style,
    /// Individual item lines.
    pub item: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let progress = AdaptiveColor {
            Light: "#8E8E8E",
            Dark: "#747373",
        };

        Self {
            loading: Style::new().foreground(progress.clone()).padding_left(2),
            refreshing: Style::new().foreground(progress.clone()).padding_left(2),
            loading_more: Style::new().foreground(progress).padding_left(2),
            error: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#D7005F",
                    Dark: "#FF5F87",
                })
                .padding_left(2),
            empty: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#909090",
                    Dark: "#626262",
                })
                .padding_left(2),
            end_of_list: Style::new().foreground(subdued).faint(true).padding_left(2),
            item: Style::new().padding_left(2),
        }
    }
}
