//! Transient alert messages.
//!
//! An [`AlertBoard`] holds the alerts currently shown above a page, newest
//! first. Alerts auto-dismiss: each is visible for a fixed time, then fades
//! out, then is removed.
//!
//! ```text
//! show()            deadline / dismiss()          fade elapsed
//!   ──▶ Visible ───────────────────────▶ ScheduledForRemoval ───────▶ Removed
//! ```
//!
//! The board never reads a clock. Every transition takes `now` from the
//! caller, so the owner decides when to [`AlertBoard::tick`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// How long an alert stays visible before it starts fading out.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// How long the fade-out lasts before the alert is removed.
pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(150);

/// The visual style of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// A completed action.
    Success,
    /// Neutral information.
    Info,
    /// Something needs attention.
    Warning,
    /// A failed action.
    Danger,
}

impl AlertKind {
    /// CSS class the page styles the alert with.
    pub fn css_class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert-success",
            AlertKind::Info => "alert-info",
            AlertKind::Warning => "alert-warning",
            AlertKind::Danger => "alert-danger",
        }
    }
}

/// Identifies an alert on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(u64);

/// Where an alert is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    /// Shown until `dismiss_at`.
    Visible {
        /// When the fade-out starts.
        dismiss_at: Instant,
    },
    /// Fading out until `remove_at`.
    ScheduledForRemoval {
        /// When the alert disappears.
        remove_at: Instant,
    },
    /// Gone from the page.
    Removed,
}

/// Display and fade durations for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTiming {
    /// Time from `show` until the fade-out starts.
    pub display_for: Duration,
    /// Length of the fade-out.
    pub fade_for: Duration,
}

impl Default for AlertTiming {
    fn default() -> Self {
        Self {
            display_for: DEFAULT_DISPLAY_DURATION,
            fade_for: DEFAULT_FADE_DURATION,
        }
    }
}

/// A single alert message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    id: AlertId,
    kind: AlertKind,
    message: String,
    state: AlertState,
}

impl Alert {
    /// Returns the alert id.
    pub fn id(&self) -> AlertId {
        self.id
    }

    /// Returns the alert kind.
    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> AlertState {
        self.state
    }

    /// Whether the alert is still fully shown.
    pub fn is_visible(&self) -> bool {
        matches!(self.state, AlertState::Visible { .. })
    }

    /// Moves the alert along its lifecycle as of `now`.
    ///
    /// A tick that is late by more than the fade duration moves a visible
    /// alert straight to `Removed`.
    fn advance(&mut self, now: Instant, timing: AlertTiming) {
        if let AlertState::Visible { dismiss_at } = self.state {
            if now >= dismiss_at {
                self.state = AlertState::ScheduledForRemoval {
                    remove_at: dismiss_at + timing.fade_for,
                };
            }
        }
        if let AlertState::ScheduledForRemoval { remove_at } = self.state {
            if now >= remove_at {
                self.state = AlertState::Removed;
            }
        }
    }
}

/// The alerts shown on a page, newest first.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use payroll_preview::alerts::{AlertBoard, AlertKind};
///
/// let mut board = AlertBoard::default();
/// let start = Instant::now();
/// board.show(AlertKind::Success, "Payroll processed", start);
///
/// assert_eq!(board.visible().count(), 1);
/// board.tick(start + Duration::from_secs(6));
/// assert!(board.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlertBoard {
    alerts: VecDeque<Alert>,
    timing: AlertTiming,
    next_id: u64,
}

impl AlertBoard {
    /// Creates an empty board with the given timing.
    pub fn with_timing(timing: AlertTiming) -> Self {
        Self {
            alerts: VecDeque::new(),
            timing,
            next_id: 0,
        }
    }

    /// Shows a new alert above all existing ones.
    pub fn show(&mut self, kind: AlertKind, message: impl Into<String>, now: Instant) -> AlertId {
        let id = AlertId(self.next_id);
        self.next_id += 1;

        self.alerts.push_front(Alert {
            id,
            kind,
            message: message.into(),
            state: AlertState::Visible {
                dismiss_at: now + self.timing.display_for,
            },
        });
        debug!(alert_id = id.0, kind = kind.css_class(), "Alert shown");
        id
    }

    /// Shows a success alert.
    pub fn success(&mut self, message: impl Into<String>, now: Instant) -> AlertId {
        self.show(AlertKind::Success, message, now)
    }

    /// Shows an error alert.
    pub fn error(&mut self, message: impl Into<String>, now: Instant) -> AlertId {
        self.show(AlertKind::Danger, message, now)
    }

    /// Starts the fade-out of a visible alert ahead of its deadline.
    ///
    /// Returns `false` if the alert is unknown or already fading.
    pub fn dismiss(&mut self, id: AlertId, now: Instant) -> bool {
        let fade_for = self.timing.fade_for;
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) if alert.is_visible() => {
                alert.state = AlertState::ScheduledForRemoval {
                    remove_at: now + fade_for,
                };
                debug!(alert_id = id.0, "Alert dismissed");
                true
            }
            _ => false,
        }
    }

    /// Advances every alert to `now` and drops the removed ones.
    ///
    /// Returns the ids removed by this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<AlertId> {
        let timing = self.timing;
        let mut removed = Vec::new();

        self.alerts.retain_mut(|alert| {
            alert.advance(now, timing);
            if alert.state == AlertState::Removed {
                removed.push(alert.id);
                false
            } else {
                true
            }
        });

        if !removed.is_empty() {
            debug!(count = removed.len(), "Alerts removed");
        }
        removed
    }

    /// Returns an alert by id.
    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    /// Iterates over all alerts still on the page, newest first.
    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    /// Iterates over the alerts not yet fading, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| a.is_visible())
    }

    /// Number of alerts still on the page.
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Whether the page shows no alerts.
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
