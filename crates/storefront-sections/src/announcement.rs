//! # Announcement Bar
//!
//! The strip of shipping and warranty notices at the top of the page. The
//! markup carries both copies of the messages; the scroll offset comes from
//! a running [`TickerHandle`].

use crate::config::TickerSettings;
use crate::markup::{push_attr, push_escaped, Render};
use crate::ticker::{ScrollingTicker, TickerHandle};

/// Separator between messages in the accessible label.
const LABEL_SEPARATOR: &str = " · ";

/// The announcement bar section.
#[derive(Debug, Clone)]
pub struct AnnouncementBar {
    ticker: ScrollingTicker,
}

impl AnnouncementBar {
    pub fn new(ticker: ScrollingTicker) -> Self {
        AnnouncementBar { ticker }
    }

    pub fn from_settings(settings: &TickerSettings) -> Self {
        Self::new(ScrollingTicker::from_settings(settings))
    }

    pub fn ticker(&self) -> &ScrollingTicker {
        &self.ticker
    }

    /// Starts scrolling. See [`ScrollingTicker::activate`].
    pub fn activate(&self) -> TickerHandle {
        self.ticker.activate()
    }

    /// Renders the bar scrolled to `offset` pixels.
    pub fn render_at(&self, offset: u32, out: &mut String) {
        let strip = self.ticker.strip();
        let layout = self.ticker.layout();

        out.push_str("<div class=\"announcement-bar\" role=\"marquee\"");
        push_attr(out, "aria-label", &strip.messages().join(LABEL_SEPARATOR));
        out.push_str("><div class=\"announcement-bar__track\"");
        push_attr(
            out,
            "style",
            &format!(
                "width: {}px; transform: translateX(-{}px)",
                strip.total_width(layout),
                offset
            ),
        );
        out.push('>');

        // Every item gets a fixed box of exactly its modelled width, so the
        // first copy ends at half of the track whatever the font.
        for segment in strip.segments() {
            out.push_str("<span class=\"announcement-bar__item\"");
            push_attr(
                out,
                "style",
                &format!(
                    "display: inline-block; box-sizing: content-box; width: {}px; \
                     padding-right: {}px; overflow: hidden; white-space: nowrap",
                    layout.text_width(segment),
                    layout.gap_px
                ),
            );
            out.push('>');
            push_escaped(out, segment);
            out.push_str("</span>");
        }

        out.push_str("</div></div>");
    }

    /// Renders the bar at the handle's current offset.
    pub fn render_live(&self, handle: &TickerHandle, out: &mut String) {
        self.render_at(handle.offset(), out);
    }
}

impl Render for AnnouncementBar {
    fn render(&self, out: &mut String) {
        self.render_at(0, out);
    }
}
