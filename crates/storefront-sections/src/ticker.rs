//! # Scrolling Ticker
//!
//! A horizontally scrolling strip of short notices that loops without a
//! visible seam.
//!
//! ## How the Loop Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   offset 0                     half_width                 total_width   │
//! │   │                            │                          │             │
//! │   ▼                            ▼                          ▼             │
//! │   ┌──────┬──────┬──────┐┌──────┬──────┬──────┐                          │
//! │   │  A   │  B   │  C   ││  A   │  B   │  C   │   strip = M ++ M         │
//! │   └──────┴──────┴──────┘└──────┴──────┴──────┘                          │
//! │                                                                         │
//! │   Every tick: offset += step                                           │
//! │   offset >= half_width ──► offset = 0                                  │
//! │                                                                         │
//! │   At the reset point the viewport shows the start of the second copy,   │
//! │   which is identical to the start of the first copy, so the jump back  │
//! │   to 0 is invisible.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! ```text
//! ScrollingTicker::activate() ──► tokio task + TickerHandle
//!                                     │
//!        ┌────────────────────────────┼────────────────────────────┐
//!        ▼                            ▼                            ▼
//!  handle.offset()           handle.deactivate().await      drop(handle)
//!  handle.subscribe()        shutdown signal, task joined   task aborted
//! ```
//!
//! The offset is owned by the task; readers only ever see it through a
//! `watch` channel. Once the task has stopped the channel is closed and the
//! last published offset is frozen.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::TickerSettings;

/// Shortest period the tick task runs at.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

// =============================================================================
// Strip Layout
// =============================================================================

/// Width model for the strip.
///
/// Each message occupies `chars × glyph_width_px` followed by `gap_px` of
/// spacing. Every message, in both copies, gets the same gap, which keeps the
/// two copies the same width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    pub glyph_width_px: u32,
    pub gap_px: u32,
}

impl StripLayout {
    /// Width of a message's text, without the gap.
    pub fn text_width(&self, message: &str) -> u32 {
        let chars = u32::try_from(message.chars().count()).unwrap_or(u32::MAX);
        chars.saturating_mul(self.glyph_width_px)
    }

    /// Width of one message including its trailing gap.
    pub fn message_width(&self, message: &str) -> u32 {
        self.text_width(message).saturating_add(self.gap_px)
    }
}

// =============================================================================
// Ticker Strip
// =============================================================================

/// The ordered messages shown in the ticker.
///
/// Stored once; both rendered copies are derived from the same storage, so
/// the duplicate cannot drift from the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerStrip {
    messages: Vec<String>,
}

impl TickerStrip {
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TickerStrip {
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// The messages, once.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The rendered sequence: every message, then every message again.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages
            .iter()
            .chain(self.messages.iter())
            .map(String::as_str)
    }

    /// Width of a single copy of the messages.
    pub fn copy_width(&self, layout: StripLayout) -> u32 {
        self.messages
            .iter()
            .map(|m| layout.message_width(m))
            .fold(0u32, u32::saturating_add)
    }

    /// Width of the whole rendered strip (both copies).
    pub fn total_width(&self, layout: StripLayout) -> u32 {
        self.copy_width(layout).saturating_mul(2)
    }
}

// =============================================================================
// Scroll State
// =============================================================================

/// The scroll offset and the rule that advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    offset: u32,
    step: u32,
    total_width: u32,
}

impl ScrollState {
    /// Starts at offset 0.
    pub fn new(total_width: u32, step: u32) -> Self {
        ScrollState {
            offset: 0,
            step,
            total_width,
        }
    }

    /// Starts at `offset`, reset to 0 if it is already past the midpoint.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = if offset >= self.half_width() { 0 } else { offset };
        self
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Where the first copy ends and the duplicate begins.
    pub fn half_width(&self) -> u32 {
        self.total_width / 2
    }

    /// Advances by one step and returns the new offset.
    ///
    /// An offset that reaches or passes the midpoint becomes exactly 0 on
    /// the same call; the offset is always in `[0, half_width)`, or 0 when
    /// the strip has no width.
    pub fn advance(&mut self) -> u32 {
        let next = self.offset.saturating_add(self.step);
        self.offset = if next >= self.half_width() { 0 } else { next };
        self.offset
    }
}

// =============================================================================
// Scrolling Ticker
// =============================================================================

/// A ticker ready to be activated.
#[derive(Debug, Clone)]
pub struct ScrollingTicker {
    strip: TickerStrip,
    layout: StripLayout,
    step_px: u32,
    tick_interval: Duration,
}

impl ScrollingTicker {
    /// Builds a ticker for `strip` using the timing and layout from `settings`.
    ///
    /// The interval is raised to [`MIN_TICK_INTERVAL`] if it is shorter, so
    /// unvalidated settings still produce a ticker that scrolls.
    pub fn new(strip: TickerStrip, settings: &TickerSettings) -> Self {
        let requested = settings.tick_interval();
        if requested < MIN_TICK_INTERVAL {
            warn!(
                requested_ms = settings.tick_interval_ms,
                "Tick interval too short, using minimum"
            );
        }

        ScrollingTicker {
            strip,
            layout: settings.layout(),
            step_px: settings.step_px,
            tick_interval: requested.max(MIN_TICK_INTERVAL),
        }
    }

    /// Builds the ticker described entirely by `settings`.
    pub fn from_settings(settings: &TickerSettings) -> Self {
        Self::new(TickerStrip::new(settings.messages.iter().cloned()), settings)
    }

    pub fn strip(&self) -> &TickerStrip {
        &self.strip
    }

    pub fn layout(&self) -> StripLayout {
        self.layout
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// The state a fresh activation starts from.
    pub fn initial_state(&self) -> ScrollState {
        ScrollState::new(self.strip.total_width(self.layout), self.step_px)
    }

    /// Starts ticking and returns the handle that owns the timer.
    ///
    /// Must be called within a Tokio runtime. The first tick fires one
    /// interval after activation.
    pub fn activate(&self) -> TickerHandle {
        let state = self.initial_state();
        let (offset_tx, offset_rx) = watch::channel(state.offset());
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        info!(
            messages = self.strip.messages().len(),
            half_width = state.half_width(),
            step_px = state.step(),
            interval_ms = self.tick_interval.as_millis() as u64,
            "Ticker activated"
        );

        let period = self.tick_interval;
        let task = tokio::spawn(async move {
            run(state, period, offset_tx, shutdown_rx).await;
        });

        TickerHandle {
            offset_rx,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        }
    }
}

/// Main tick loop. Owns the scroll state until shutdown.
async fn run(
    mut state: ScrollState,
    period: Duration,
    offset_tx: watch::Sender<u32>,
    mut shutdown_rx: mpsc::Receiver<()>,
) {
    let mut ticks = interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = shutdown_rx.recv() => {
                debug!(offset = state.offset(), "Ticker received shutdown");
                break;
            }
            _ = ticks.tick() => {
                let previous = state.offset();
                let offset = state.advance();
                if offset < previous {
                    debug!(previous, "Ticker wrapped to start");
                }
                offset_tx.send_replace(offset);
            }
        }
    }
}

// =============================================================================
// Ticker Handle
// =============================================================================

/// Owns a running ticker.
///
/// Call [`TickerHandle::deactivate`] to stop it cleanly. Dropping the handle
/// without deactivating aborts the task, so no timer outlives the handle on
/// any path.
#[derive(Debug)]
pub struct TickerHandle {
    offset_rx: watch::Receiver<u32>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Latest published offset.
    pub fn offset(&self) -> u32 {
        *self.offset_rx.borrow()
    }

    /// A receiver notified on every tick. Closed once the ticker stops.
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.offset_rx.clone()
    }

    /// Whether the tick task is still running.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops the ticker and waits for the task to finish.
    ///
    /// When this returns no further tick can run.
    pub async fn deactivate(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // A closed channel means the task already ended.
            let _ = tx.send(()).await;
        }

        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(?e, "Ticker task ended abnormally");
            }
        }

        info!(offset = self.offset(), "Ticker deactivated");
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Ticker handle dropped while active, aborting task");
            task.abort();
        }
    }
}
