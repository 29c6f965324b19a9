use std::time::{Duration, Instant};

use egui::{Pos2, Rect};
use mcu_dashboard_common::Notification;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: &'static str,
    pub is_error: bool,
    expires_at: Instant,
}

/// Front-end-only state: toasts and the upload timer
#[derive(Debug, Default)]
pub struct UiState {
    toasts: Vec<Toast>,
    last_upload_tick: Option<Instant>,
}

impl UiState {
    pub fn push_notification(&mut self, notification: &Notification, now: Instant) {
        self.toasts.push(Toast {
            message: notification.message(),
            is_error: matches!(notification, Notification::FileRejected(_)),
            expires_at: now + TOAST_DURATION,
        });
    }

    /// Drop expired toasts; returns the time until the next one expires
    pub fn prune_toasts(&mut self, now: Instant) -> Option<Duration> {
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts
            .iter()
            .map(|t| t.expires_at.saturating_duration_since(now))
            .min()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Whether an upload tick is due; the first call only starts the clock
    pub fn upload_tick_due(&mut self, now: Instant, interval: Duration) -> bool {
        match self.last_upload_tick {
            None => {
                self.last_upload_tick = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) >= interval => {
                self.last_upload_tick = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    pub fn stop_upload_clock(&mut self) {
        self.last_upload_tick = None;
    }
}

/// A click landed, and not on the popup or the button that opened it
pub fn clicked_outside(click: Option<Pos2>, keep: &[Rect]) -> bool {
    click.is_some_and(|pos| !keep.iter().any(|rect| rect.contains(pos)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let start = Instant::now();
        let mut state = UiState::default();
        state.push_notification(&Notification::ChangesSaved, start);
        state.push_notification(
            &Notification::FileRejected("a.csv".to_string()),
            start + Duration::from_secs(1),
        );

        assert_eq!(state.prune_toasts(start), Some(TOAST_DURATION));
        assert!(state.toasts()[1].is_error);

        let later = start + Duration::from_millis(3500);
        assert_eq!(state.prune_toasts(later), Some(Duration::from_millis(500)));
        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts()[0].message, "Mohon pilih file format Excel (.xls atau .xlsx)");

        assert_eq!(state.prune_toasts(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_clicked_outside() {
        let button = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 24.0));
        let popup = Rect::from_min_max(Pos2::new(0.0, 24.0), Pos2::new(160.0, 140.0));
        let keep = [button, popup];

        assert!(!clicked_outside(None, &keep));
        assert!(!clicked_outside(Some(Pos2::new(50.0, 10.0)), &keep));
        assert!(!clicked_outside(Some(Pos2::new(150.0, 100.0)), &keep));
        assert!(clicked_outside(Some(Pos2::new(400.0, 300.0)), &keep));
    }

    #[test]
    fn test_upload_tick_due() {
        let start = Instant::now();
        let interval = Duration::from_millis(150);
        let mut state = UiState::default();

        assert!(!state.upload_tick_due(start, interval));
        assert!(!state.upload_tick_due(start + Duration::from_millis(100), interval));
        assert!(state.upload_tick_due(start + Duration::from_millis(150), interval));
        assert!(!state.upload_tick_due(start + Duration::from_millis(200), interval));

        state.stop_upload_clock();
        assert!(!state.upload_tick_due(start + Duration::from_secs(1), interval));
    }
}
