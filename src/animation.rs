//! Frame-driven scroll animations with cancellable handles.
//!
//! A [`ScrollAnimation`] is the ephemeral run value: where it starts, where it
//! ends, when it started and how long it lasts. The [`ScrollAnimator`] owns
//! every run in flight, keyed by the container it drives, and is advanced
//! once per rendered frame. At most one run drives a container: starting a
//! new one cancels the previous run on that container.

use std::collections::HashMap;
use std::hash::Hash;

use crate::easing::Easing;
use crate::traits::ScrollHost;

/// Identifies a started animation so it can be cancelled or queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(u64);

/// One eased interpolation of a scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation<N> {
    /// Container whose scroll offset is animated
    pub container: N,
    pub start_value: f64,
    pub end_value: f64,
    /// Frame clock in milliseconds when the run was created
    pub start_time: f64,
    /// Run length in milliseconds
    pub duration: f64,
    pub easing: Easing,
    /// Round every sampled offset to a whole pixel
    pub round_to_pixel: bool,
}

impl<N> ScrollAnimation<N> {
    /// Normalized progress at `now`, clamped to `[0, 1]`.
    ///
    /// A non-positive duration is already complete.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    /// Scroll offset at `now`. Exactly `end_value` once progress reaches 1.
    pub fn sample(&self, now: f64) -> f64 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.end_value;
        }
        let value = self.start_value + (self.end_value - self.start_value) * self.easing.apply(t);
        if self.round_to_pixel {
            value.round()
        } else {
            value
        }
    }

    /// True once the run has reached its end position.
    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Whether the renderer should schedule another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// At least one run is still in flight
    NextFrame,
    /// Nothing left to animate
    Idle,
}

/// Owns every scroll animation in flight.
#[derive(Debug)]
pub struct ScrollAnimator<N> {
    runs: HashMap<N, (AnimationHandle, ScrollAnimation<N>)>,
    next_handle: u64,
}

impl<N> Default for ScrollAnimator<N> {
    fn default() -> Self {
        Self {
            runs: HashMap::new(),
            next_handle: 0,
        }
    }
}

impl<N: Copy + Eq + Hash + std::fmt::Debug> ScrollAnimator<N> {
    /// Creates an animator with nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `animation`, cancelling any run already driving the same
    /// container.
    pub fn start(&mut self, animation: ScrollAnimation<N>) -> AnimationHandle {
        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;

        log::debug!(
            "scroll animation {:?} on {:?}: {:.1} -> {:.1} over {} ms",
            handle,
            animation.container,
            animation.start_value,
            animation.end_value,
            animation.duration
        );

        if let Some((previous, _)) = self.runs.insert(animation.container, (handle, animation)) {
            log::debug!("scroll animation {:?} superseded by {:?}", previous, handle);
        }
        handle
    }

    /// Cancels the run identified by `handle`. Returns false if it already
    /// finished or was superseded.
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        let container = self
            .runs
            .iter()
            .find(|(_, (h, _))| *h == handle)
            .map(|(container, _)| *container);

        match container {
            Some(container) => {
                self.runs.remove(&container);
                log::debug!("scroll animation {:?} cancelled", handle);
                true
            }
            None => false,
        }
    }

    /// Cancels whatever run is driving `container`.
    pub fn cancel_container(&mut self, container: N) -> Option<AnimationHandle> {
        self.runs.remove(&container).map(|(handle, _)| handle)
    }

    /// True while the run identified by `handle` is in flight.
    pub fn is_running(&self, handle: AnimationHandle) -> bool {
        self.runs.values().any(|(h, _)| *h == handle)
    }

    /// The run currently driving `container`, if any.
    pub fn current(&self, container: N) -> Option<&ScrollAnimation<N>> {
        self.runs.get(&container).map(|(_, run)| run)
    }

    /// Number of runs in flight.
    pub fn active_count(&self) -> usize {
        self.runs.len()
    }

    /// Advances every run to `now`, writing offsets through `host`, and drops
    /// the runs that completed.
    pub fn on_frame<H>(&mut self, now: f64, host: &mut H) -> FrameRequest
    where
        H: ScrollHost<Node = N>,
    {
        self.runs.retain(|container, (handle, run)| {
            host.set_scroll_top(*container, run.sample(now));
            let finished = run.is_finished(now);
            if finished {
                log::debug!("scroll animation {:?} finished", handle);
            }
            !finished
        });

        if self.runs.is_empty() {
            FrameRequest::Idle
        } else {
            FrameRequest::NextFrame
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(container: u32, start: f64, end: f64, easing: Easing) -> ScrollAnimation<u32> {
        ScrollAnimation {
            container,
            start_value: start,
            end_value: end,
            start_time: 1000.0,
            duration: 240.0,
            easing,
            round_to_pixel: false,
        }
    }

    #[test]
    fn test_sample_hits_end_exactly() {
        for easing in [Easing::EaseInOutQuad, Easing::EaseInCubic] {
            let anim = run(0, 13.7, 491.3, easing);
            assert_eq!(anim.sample(1240.0), 491.3);
            assert_eq!(anim.sample(5000.0), 491.3);
        }
    }

    #[test]
    fn test_sample_before_start_stays_at_start() {
        let anim = run(0, 100.0, 500.0, Easing::EaseInOutQuad);
        assert_eq!(anim.sample(900.0), 100.0);
        assert_eq!(anim.sample(1000.0), 100.0);
    }

    #[test]
    fn test_midpoint_of_ease_in_out() {
        let anim = run(0, 0.0, 400.0, Easing::EaseInOutQuad);
        assert!((anim.sample(1120.0) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounded_samples_are_whole_pixels() {
        let mut anim = run(0, 999.0, 0.0, Easing::EaseInCubic);
        anim.round_to_pixel = true;
        for now in [1013.0, 1100.0, 1177.0] {
            let v = anim.sample(now);
            assert_eq!(v, v.round());
        }
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut anim = run(0, 50.0, 10.0, Easing::EaseInOutQuad);
        anim.duration = 0.0;
        assert!(anim.is_finished(1000.0));
        assert_eq!(anim.sample(1000.0), 10.0);
    }

    #[test]
    fn test_restart_cancels_previous_on_same_container() {
        let mut animator = ScrollAnimator::new();
        let first = animator.start(run(7, 0.0, 100.0, Easing::EaseInOutQuad));
        let second = animator.start(run(7, 0.0, 300.0, Easing::EaseInOutQuad));

        assert!(!animator.is_running(first));
        assert!(animator.is_running(second));
        assert_eq!(animator.active_count(), 1);
        assert_eq!(animator.current(7).map(|r| r.end_value), Some(300.0));
    }

    #[test]
    fn test_runs_on_different_containers_coexist() {
        let mut animator = ScrollAnimator::new();
        let a = animator.start(run(1, 0.0, 100.0, Easing::EaseInOutQuad));
        let b = animator.start(run(2, 0.0, 100.0, Easing::EaseInOutQuad));
        assert!(animator.is_running(a));
        assert!(animator.is_running(b));
    }

    #[test]
    fn test_cancel() {
        let mut animator = ScrollAnimator::new();
        let handle = animator.start(run(1, 0.0, 100.0, Easing::EaseInOutQuad));
        assert!(animator.cancel(handle));
        assert!(!animator.cancel(handle));
        assert_eq!(animator.active_count(), 0);
    }
}
