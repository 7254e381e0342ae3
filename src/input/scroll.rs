//! Inertial scroll accumulation.
//!
//! Raw wheel deltas are not forwarded directly. They accumulate here and
//! drain exponentially, so a flick keeps scrolling for a few frames and the
//! feel is identical at 30 and 144 fps. Each frame consumes
//! `pending - pending * decay^dt` and forwards exactly that amount; what
//! remains keeps decaying next frame.

use std::time::Instant;

/// Pending scroll momentum for one bridge.
#[derive(Debug)]
pub struct ScrollAccumulator {
    pending_x: f32,
    pending_y: f32,
    last_tick: Instant,
}

impl ScrollAccumulator {
    pub fn new() -> Self {
        Self {
            pending_x: 0.0,
            pending_y: 0.0,
            last_tick: Instant::now(),
        }
    }

    /// Adds a host wheel delta. The host's vertical wheel direction is
    /// inverted relative to the scene's scroll axis.
    pub fn push(&mut self, dx: f32, dy: f32) {
        self.pending_x += dx;
        self.pending_y -= dy;
    }

    /// Consumes this frame's share of the pending momentum.
    ///
    /// `now` must come from a monotonic clock; wall-clock jumps or frame
    /// counters would break frame-rate independence. The consumed amount is
    /// subtracted from the pending balance in the same call, so the
    /// magnitude strictly decreases for any positive elapsed time and never
    /// crosses zero.
    pub fn advance(&mut self, now: Instant, decay: f32) -> (f32, f32) {
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        let keep = decay.powf(dt);
        let consumed_x = self.pending_x - self.pending_x * keep;
        let consumed_y = self.pending_y - self.pending_y * keep;
        self.pending_x -= consumed_x;
        self.pending_y -= consumed_y;
        (consumed_x, consumed_y)
    }

    /// Remaining momentum, for inspection.
    pub fn pending(&self) -> (f32, f32) {
        (self.pending_x, self.pending_y)
    }
}

impl Default for ScrollAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const DECAY: f32 = 0.3;

    fn frames(acc: &mut ScrollAccumulator, start: Instant, count: u32, dt: Duration) -> Vec<(f32, f32)> {
        (1..=count)
            .map(|i| acc.advance(start + dt * i, DECAY))
            .collect()
    }

    #[test]
    fn magnitude_strictly_decreases_and_converges() {
        let start = Instant::now();
        let mut acc = ScrollAccumulator::new();
        acc.push(0.0, -10.0); // pending_y = +10
        // Anchor the accumulator clock at `start`.
        acc.advance(start, DECAY);

        let mut previous = acc.pending().1;
        assert_eq!(previous, 10.0);
        for i in 1..=120 {
            let (_, dy) = acc.advance(start + Duration::from_millis(16) * i, DECAY);
            let pending = acc.pending().1;
            assert!(pending < previous, "pending did not decrease");
            assert!(pending >= 0.0, "pending crossed zero");
            assert!(dy >= 0.0, "consumed delta flipped sign");
            previous = pending;
        }
        assert!(acc.pending().1 < 0.05, "did not converge: {}", acc.pending().1);
    }

    #[test]
    fn decay_is_frame_rate_independent() {
        let start = Instant::now();

        let mut slow = ScrollAccumulator::new();
        slow.push(6.0, 0.0);
        slow.advance(start, DECAY);
        slow.advance(start + Duration::from_secs(1), DECAY);

        let mut fast = ScrollAccumulator::new();
        fast.push(6.0, 0.0);
        fast.advance(start, DECAY);
        frames(&mut fast, start, 60, Duration::from_micros(16_600));

        // One 1s frame and sixty ~16.6ms frames leave the same balance
        // (60 * 16.6ms is 4ms shy of a full second, hence the tolerance).
        let expected = 6.0 * DECAY;
        assert!((slow.pending().0 - expected).abs() < 1e-3);
        assert!((fast.pending().0 - expected).abs() < 2e-2);
    }

    #[test]
    fn wheel_y_is_inverted_on_push() {
        let mut acc = ScrollAccumulator::new();
        acc.push(2.0, 3.0);
        assert_eq!(acc.pending(), (2.0, -3.0));
    }

    #[test]
    fn zero_elapsed_consumes_nothing() {
        let start = Instant::now();
        let mut acc = ScrollAccumulator::new();
        acc.push(5.0, 0.0);
        acc.advance(start, DECAY);
        let (dx, dy) = acc.advance(start, DECAY);
        assert_eq!((dx, dy), (0.0, 0.0));
        assert_eq!(acc.pending().0, 5.0);
    }

    #[test]
    fn negative_momentum_converges_without_oscillation() {
        let start = Instant::now();
        let mut acc = ScrollAccumulator::new();
        acc.push(0.0, 10.0); // pending_y = -10
        acc.advance(start, DECAY);

        let mut previous = acc.pending().1;
        for i in 1..=120 {
            let (_, dy) = acc.advance(start + Duration::from_millis(16) * i, DECAY);
            let pending = acc.pending().1;
            assert!(pending > previous, "magnitude did not shrink");
            assert!(pending <= 0.0, "pending crossed zero");
            assert!(dy <= 0.0, "consumed delta flipped sign");
            previous = pending;
        }
    }
}
