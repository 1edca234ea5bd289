/// Cancellable repeating timer driven by frame time, the `display_timer`
/// accumulator pattern with explicit stop/start semantics.
///
/// A unit owns exactly one `Interval` per repeating schedule, so stopping and
/// restarting can never leave a stale duplicate ticking alongside the new one.
/// `start` always begins a fresh full period; there is no resume.
pub struct Interval {
    period: f32,
    elapsed: f32,
    running: bool,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            running: true,
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    pub fn start(&mut self) {
        self.running = true;
        self.elapsed = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the timer and reports whether the period elapsed this frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.period {
            self.elapsed -= self.period;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives an interval frame by frame and counts how often it fires.
    fn run(interval: &mut Interval, seconds: f32, dt: f32) -> u32 {
        let mut fired = 0;
        let mut t = 0.0;
        while t < seconds {
            if interval.tick(dt) {
                fired += 1;
            }
            t += dt;
        }
        fired
    }

    #[test]
    fn fires_once_per_period() {
        let mut interval = Interval::new(7.0);
        assert_eq!(run(&mut interval, 6.9, 0.1), 0);
        assert_eq!(run(&mut interval, 14.0, 0.1), 2);
    }

    #[test]
    fn stop_cancels_the_pending_tick() {
        let mut interval = Interval::new(7.0);
        run(&mut interval, 6.9, 0.1);
        interval.stop();
        assert_eq!(run(&mut interval, 1.0, 0.1), 0); // nothing at the old deadline
    }

    #[test]
    fn start_begins_a_fresh_full_period() {
        let mut interval = Interval::new(7.0);
        run(&mut interval, 6.9, 0.1);
        interval.stop();
        interval.start();
        assert_eq!(run(&mut interval, 6.9, 0.1), 0); // not sooner than a full period
        assert_eq!(run(&mut interval, 0.2, 0.1), 1);
    }

    #[test]
    fn restart_does_not_double_schedule() {
        let mut interval = Interval::new(7.0);
        interval.stop();
        interval.start();
        interval.stop();
        interval.start();
        // One fire per period, not one per start call.
        assert_eq!(run(&mut interval, 14.05, 0.1), 2);
    }
}
