//! Time controller for simulation playback

use hifitime::{Duration, Epoch};

/// The fixed simulation epoch: J2000 (2000-01-01T12:00:00 UTC)
pub fn j2000() -> Epoch {
    Epoch::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0)
}

/// Time controller with variable rate playback.
///
/// Owns the current simulation epoch and converts it to the seconds-since-
/// J2000 timestamp the propagation engine consumes.
pub struct TimeController {
    /// Current simulation time
    current: Epoch,
    /// Minimum allowed time (J2000 - 5000 years)
    min_epoch: Epoch,
    /// Maximum allowed time (J2000 + 5000 years)
    max_epoch: Epoch,
    /// Simulation rate (sim seconds per real second)
    rate: f64,
    /// Is simulation paused?
    paused: bool,
}

impl TimeController {
    pub fn new() -> Self {
        let j2000 = j2000();

        Self {
            current: j2000,
            min_epoch: j2000 - Duration::from_days(5000.0 * 365.25),
            max_epoch: j2000 + Duration::from_days(5000.0 * 365.25),
            rate: 1.0,
            paused: false,
        }
    }

    /// Create at specific epoch
    pub fn at_epoch(epoch: Epoch) -> Self {
        let mut tc = Self::new();
        tc.set_time(epoch);
        tc
    }

    /// Get current simulation time
    pub fn current(&self) -> Epoch {
        self.current
    }

    /// Seconds since J2000 at the current simulation time; the engine's
    /// `simulated_seconds` input
    pub fn simulated_seconds(&self) -> f64 {
        (self.current - j2000()).to_seconds()
    }

    /// Set absolute time
    pub fn set_time(&mut self, epoch: Epoch) {
        self.current = epoch.clamp(self.min_epoch, self.max_epoch);
    }

    /// Get current rate
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Set simulation rate (sim seconds per real second)
    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate.clamp(-1e9, 1e9); // Allow reverse time
    }

    /// Pause simulation
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume simulation
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Is paused?
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance simulation by real-world delta time.
    /// Returns new epoch
    pub fn tick(&mut self, real_dt_seconds: f64) -> Epoch {
        if self.paused {
            return self.current;
        }

        let sim_dt = real_dt_seconds * self.rate;
        self.current =
            (self.current + Duration::from_seconds(sim_dt)).clamp(self.min_epoch, self.max_epoch);

        self.current
    }

    /// Jump forward/backward by duration
    pub fn jump(&mut self, duration: Duration) {
        self.current = (self.current + duration).clamp(self.min_epoch, self.max_epoch);
    }

    /// Jump back to the simulation epoch
    pub fn jump_to_j2000(&mut self) {
        self.current = j2000();
    }

    /// Get year (approximate)
    pub fn year(&self) -> f64 {
        2000.0 + self.simulated_seconds() / (365.25 * 86400.0)
    }
}

impl Default for TimeController {
    fn default() -> Self {
        Self::new()
    }
}

/// Preset time rates
pub mod rates {
    /// Real-time
    pub const REALTIME: f64 = 1.0;
    /// 1 minute per second
    pub const MINUTE_PER_SEC: f64 = 60.0;
    /// 1 hour per second
    pub const HOUR_PER_SEC: f64 = 3600.0;
    /// 1 day per second
    pub const DAY_PER_SEC: f64 = 86400.0;
    /// 1 year per second
    pub const YEAR_PER_SEC: f64 = 365.25 * 86400.0;
}
