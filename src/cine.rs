use std::time::Duration;

use crate::model::Plane;
use crate::session::ViewerSession;


pub const DEFAULT_CINE_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CineState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Steps all three slices forward on a fixed interval, wrapping at the end
/// of each axis.
///
/// The player owns no clock; the caller feeds elapsed time through
/// [`CinePlayer::update`] and redraws when it returns `true`.
#[derive(Debug, Clone)]
pub struct CinePlayer {
    state: CineState,
    interval: Duration,
    pending: Duration,
}

impl Default for CinePlayer {
    fn default() -> Self {
        Self::new(DEFAULT_CINE_INTERVAL)
    }
}

impl CinePlayer {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: CineState::Stopped,
            interval: interval.max(Duration::from_millis(1)),
            pending: Duration::ZERO,
        }
    }

    pub fn state(&self) -> CineState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == CineState::Playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts playback. Does nothing while no volume is loaded.
    pub fn play(&mut self, session: &ViewerSession) {
        if !session.has_volume() || self.is_playing() {
            return;
        }
        tracing::debug!("cine playing every {:?}", self.interval);
        self.state = CineState::Playing;
        self.pending = Duration::ZERO;
    }

    /// Halts playback and keeps the current slices.
    pub fn pause(&mut self) {
        if self.is_playing() {
            self.state = CineState::Paused;
        }
    }

    /// Halts playback and returns every slice to its midpoint.
    pub fn stop(&mut self, session: &mut ViewerSession) {
        self.state = CineState::Stopped;
        self.pending = Duration::ZERO;
        if let Some(focus) = session.focus_mut() {
            focus.recenter();
        }
    }

    pub fn toggle(&mut self, session: &ViewerSession) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(session);
        }
    }

    /// Advances each plane's slice by one, wrapping to zero past the last.
    pub fn tick(&self, session: &mut ViewerSession) -> bool {
        let Some(focus) = session.focus_mut() else {
            return false;
        };
        let extents = focus.extents();
        let current = focus.focus();
        let mut next = current;
        for plane in Plane::ALL {
            let depth = extents.depth(plane);
            next = next.with_depth(plane, (current.depth(plane) + 1) % depth);
        }
        focus.set_focus_voxel(next);
        true
    }

    /// Accounts for `elapsed` time and ticks at most once. Returns whether
    /// the slices moved.
    pub fn update(&mut self, elapsed: Duration, session: &mut ViewerSession) -> bool {
        if !self.is_playing() {
            return false;
        }
        if !session.has_volume() {
            self.state = CineState::Stopped;
            self.pending = Duration::ZERO;
            return false;
        }
        self.pending += elapsed;
        if self.pending < self.interval {
            return false;
        }
        self.pending -= self.interval;
        // Long frames do not queue a burst of ticks.
        if self.pending >= self.interval {
            self.pending = Duration::ZERO;
        }
        self.tick(session)
    }

    /// Time left until the next tick, for scheduling a repaint.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.is_playing()
            .then(|| self.interval.saturating_sub(self.pending))
    }
}
