use log::debug;

use super::gesture::Swipe;
use super::scheduler::{Scheduler, TimerSlot, TimerToken};

/// Timing and gesture parameters for one carousel call site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub interval_ms: u32,
    pub cooldown_ms: u32,
    pub swipe_threshold: f64,
}

impl CarouselConfig {
    pub const fn new(interval_ms: u32, cooldown_ms: u32, swipe_threshold: f64) -> Self {
        Self {
            interval_ms,
            cooldown_ms,
            swipe_threshold,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Auto,
    Manual,
}

/// Autoplay controller: owns the active index and every timer that can move it.
pub struct Carousel<S: Scheduler> {
    len: usize,
    index: usize,
    mode: Mode,
    config: CarouselConfig,
    scheduler: S,
    started: bool,
    disposed: bool,
    hovering: bool,
    generation: u64,
    advance: Option<TimerToken>,
    resume: Option<TimerToken>,
}

impl<S: Scheduler> Carousel<S> {
    pub fn new(len: usize, config: CarouselConfig, scheduler: S) -> Self {
        Self {
            len,
            index: 0,
            mode: Mode::Auto,
            config,
            scheduler,
            started: false,
            disposed: false,
            hovering: false,
            generation: 0,
            advance: None,
            resume: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    fn navigable(&self) -> bool {
        !self.disposed && self.len > 1
    }

    /// Arms autoplay. Calling it again while armed does nothing.
    pub fn start(&mut self) {
        if !self.navigable() || self.started {
            return;
        }
        self.started = true;
        if self.mode == Mode::Auto {
            self.arm_advance();
        }
    }

    /// Jumps to `index`. Out-of-range requests are rejected and leave the state untouched.
    pub fn go_to(&mut self, index: usize) -> bool {
        if !self.navigable() {
            return false;
        }
        if index >= self.len {
            debug!("carousel: rejecting go_to({}) with {} slides", index, self.len);
            return false;
        }
        self.index = index;
        self.suspend();
        self.schedule_resume();
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.navigable() {
            return false;
        }
        self.go_to((self.index + 1) % self.len)
    }

    pub fn prev(&mut self) -> bool {
        if !self.navigable() {
            return false;
        }
        self.go_to((self.index + self.len - 1) % self.len)
    }

    /// Pointer down or touch start: stop autoplay until the matching end.
    pub fn interaction_start(&mut self) {
        if !self.navigable() {
            return;
        }
        self.suspend();
        self.cancel(TimerSlot::Resume);
    }

    /// Pointer up or touch end: resume after the cooldown, unless the pointer
    /// is still resting over the carousel.
    pub fn interaction_end(&mut self) {
        if !self.navigable() || self.mode == Mode::Auto {
            return;
        }
        self.schedule_resume();
    }

    /// Pointer entered the carousel. Autoplay stays off until [`Self::hover_end`],
    /// whatever else happens in between.
    pub fn hover_start(&mut self) {
        if !self.navigable() {
            return;
        }
        self.hovering = true;
        self.interaction_start();
    }

    pub fn hover_end(&mut self) {
        if !self.navigable() {
            return;
        }
        self.hovering = false;
        if self.mode == Mode::Manual {
            self.arm_resume();
        }
    }

    pub fn wheel(&mut self) {
        self.interaction_start();
        self.interaction_end();
    }

    /// Ends a drag or swipe with the given net horizontal displacement.
    /// Returns whether the index changed.
    pub fn release(&mut self, displacement: Option<f64>) -> bool {
        let swipe = displacement.and_then(|dx| Swipe::classify(dx, self.config.swipe_threshold));
        match swipe {
            Some(Swipe::Next) => self.next(),
            Some(Swipe::Prev) => self.prev(),
            None => {
                self.interaction_end();
                false
            }
        }
    }

    /// Delivers a timer callback. Stale tokens and callbacks after disposal are ignored.
    /// Returns whether the index changed.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.disposed {
            return false;
        }
        match token.slot {
            TimerSlot::Advance => {
                if self.advance != Some(token) || self.mode != Mode::Auto {
                    return false;
                }
                self.index = (self.index + 1) % self.len;
                true
            }
            TimerSlot::Resume => {
                if self.resume != Some(token) {
                    return false;
                }
                self.resume = None;
                self.mode = Mode::Auto;
                if self.started {
                    self.arm_advance();
                }
                false
            }
        }
    }

    /// Cancels every pending timer. The controller is inert afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.cancel(TimerSlot::Advance);
        self.cancel(TimerSlot::Resume);
        self.disposed = true;
    }

    fn suspend(&mut self) {
        self.mode = Mode::Manual;
        self.cancel(TimerSlot::Advance);
    }

    fn next_token(&mut self, slot: TimerSlot) -> TimerToken {
        self.generation += 1;
        TimerToken {
            slot,
            generation: self.generation,
        }
    }

    fn arm_advance(&mut self) {
        self.cancel(TimerSlot::Advance);
        let token = self.next_token(TimerSlot::Advance);
        self.advance = Some(token);
        self.scheduler.arm(token, self.config.interval_ms);
    }

    fn schedule_resume(&mut self) {
        if self.hovering {
            self.cancel(TimerSlot::Resume);
        } else {
            self.arm_resume();
        }
    }

    fn arm_resume(&mut self) {
        self.cancel(TimerSlot::Resume);
        let token = self.next_token(TimerSlot::Resume);
        self.resume = Some(token);
        self.scheduler.arm(token, self.config.cooldown_ms);
    }

    fn cancel(&mut self, slot: TimerSlot) {
        let armed = match slot {
            TimerSlot::Advance => self.advance.take(),
            TimerSlot::Resume => self.resume.take(),
        };
        if armed.is_some() {
            self.scheduler.cancel(slot);
        }
    }
}

impl<S: Scheduler> Drop for Carousel<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::testing::VirtualScheduler;

    const CONFIG: CarouselConfig = CarouselConfig::new(1000, 3000, 30.0);

    fn carousel(len: usize) -> (Carousel<VirtualScheduler>, VirtualScheduler) {
        let clock = VirtualScheduler::default();
        (Carousel::new(len, CONFIG, clock.clone()), clock)
    }

    #[test]
    fn starts_at_zero_in_auto() {
        let (c, clock) = carousel(4);
        assert_eq!(c.index(), 0);
        assert_eq!(c.mode(), Mode::Auto);
        assert_eq!(clock.armed_count(), 0);
    }

    #[test]
    fn autoplay_steps_once_per_interval_and_wraps() {
        let (mut c, clock) = carousel(3);
        c.start();
        clock.run_for(&mut c, 999);
        assert_eq!(c.index(), 0);
        clock.run_for(&mut c, 1);
        assert_eq!(c.index(), 1);
        clock.run_for(&mut c, 1000);
        assert_eq!(c.index(), 2);
        clock.run_for(&mut c, 1000);
        assert_eq!(c.index(), 0);
        assert_eq!(clock.run_for(&mut c, 5000), 5);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn start_is_idempotent() {
        let (mut c, clock) = carousel(5);
        c.start();
        c.start();
        c.start();
        assert_eq!(clock.armed_count(), 1);
        clock.run_for(&mut c, 1000);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn single_slide_never_arms_or_moves() {
        let (mut c, clock) = carousel(1);
        c.start();
        assert_eq!(clock.armed_count(), 0);
        assert!(!c.next());
        assert!(!c.prev());
        assert!(!c.go_to(0));
        c.interaction_start();
        c.interaction_end();
        c.hover_start();
        c.hover_end();
        assert_eq!(clock.armed_count(), 0);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn index_stays_in_range_for_any_walk() {
        for len in 1..7 {
            let (mut c, _clock) = carousel(len);
            let mut seed: u32 = 0x2545_f491;
            for _ in 0..200 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 2 == 0 {
                    c.next();
                } else {
                    c.prev();
                }
                assert!(c.index() < len);
            }
        }
    }

    #[test]
    fn next_then_prev_round_trips() {
        for len in 2..6 {
            for start in 0..len {
                let (mut c, _clock) = carousel(len);
                c.go_to(start);
                c.next();
                c.prev();
                assert_eq!(c.index(), start);
                c.prev();
                c.next();
                assert_eq!(c.index(), start);
            }
        }
    }

    #[test]
    fn wraps_both_ways() {
        let (mut c, _clock) = carousel(4);
        c.prev();
        assert_eq!(c.index(), 3);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn out_of_range_go_to_is_rejected() {
        let (mut c, clock) = carousel(4);
        c.start();
        c.go_to(2);
        assert!(!c.go_to(4));
        assert!(!c.go_to(usize::MAX));
        assert_eq!(c.index(), 2);
        // the rejected calls must not have pushed the cooldown out
        clock.run_for(&mut c, 3000);
        assert_eq!(c.mode(), Mode::Auto);
    }

    #[test]
    fn interaction_halts_autoplay_until_cooldown_elapses() {
        let (mut c, clock) = carousel(5);
        c.start();
        clock.run_for(&mut c, 1000);
        assert_eq!(c.index(), 1);

        c.interaction_start();
        assert_eq!(c.mode(), Mode::Manual);
        clock.run_for(&mut c, 10_000);
        assert_eq!(c.index(), 1);

        c.interaction_end();
        clock.run_for(&mut c, 2999);
        assert_eq!(c.index(), 1);
        assert_eq!(c.mode(), Mode::Manual);
        clock.run_for(&mut c, 1);
        assert_eq!(c.mode(), Mode::Auto);
        // fresh phase: first step a full interval after resume
        clock.run_for(&mut c, 999);
        assert_eq!(c.index(), 1);
        clock.run_for(&mut c, 1);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn new_interaction_cancels_pending_resume() {
        let (mut c, clock) = carousel(3);
        c.start();
        c.interaction_start();
        c.interaction_end();
        clock.run_for(&mut c, 2000);
        c.interaction_start();
        clock.run_for(&mut c, 5000);
        assert_eq!(c.mode(), Mode::Manual);
        assert!(!clock.is_armed(TimerSlot::Resume));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn navigation_resets_cooldown_instead_of_stacking() {
        let (mut c, clock) = carousel(6);
        c.start();
        c.next();
        clock.run_for(&mut c, 2000);
        c.next();
        clock.run_for(&mut c, 2000);
        assert_eq!(c.mode(), Mode::Manual);
        assert_eq!(clock.armed_count(), 1);
        clock.run_for(&mut c, 1000);
        assert_eq!(c.mode(), Mode::Auto);
        assert_eq!(c.index(), 2);
        clock.run_for(&mut c, 1000);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn never_more_than_one_timer_per_slot() {
        let (mut c, clock) = carousel(4);
        c.start();
        for _ in 0..10 {
            c.next();
            c.interaction_end();
            c.wheel();
            assert!(clock.armed_count() <= 2);
        }
        clock.run_for(&mut c, 3000);
        assert_eq!(clock.armed_count(), 1);
        assert!(clock.is_armed(TimerSlot::Advance));
    }

    #[test]
    fn hover_holds_autoplay_through_taps_and_clicks() {
        let (mut c, clock) = carousel(4);
        c.start();
        c.hover_start();
        c.interaction_start();
        c.release(None);
        clock.run_for(&mut c, 10_000);
        assert_eq!(c.index(), 0);
        assert_eq!(c.mode(), Mode::Manual);
        assert_eq!(clock.armed_count(), 0);

        // arrow and dot clicks while hovering
        c.next();
        c.go_to(3);
        c.interaction_end();
        clock.run_for(&mut c, 10_000);
        assert_eq!(c.index(), 3);
        assert_eq!(clock.armed_count(), 0);

        c.hover_end();
        assert!(clock.is_armed(TimerSlot::Resume));
        clock.run_for(&mut c, 3000);
        assert_eq!(c.mode(), Mode::Auto);
        clock.run_for(&mut c, 1000);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn hover_swallows_a_pending_resume() {
        let (mut c, clock) = carousel(3);
        c.start();
        c.next();
        assert!(clock.is_armed(TimerSlot::Resume));
        c.hover_start();
        assert!(!clock.is_armed(TimerSlot::Resume));
        clock.run_for(&mut c, 10_000);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn swipe_while_hovering_waits_for_leave() {
        let (mut c, clock) = carousel(4);
        c.start();
        c.hover_start();
        c.interaction_start();
        assert!(c.release(Some(-60.0)));
        clock.run_for(&mut c, 10_000);
        assert_eq!(c.index(), 1);
        c.hover_end();
        clock.run_for(&mut c, 4000);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn small_swipe_changes_nothing() {
        let (mut c, _clock) = carousel(4);
        c.interaction_start();
        assert!(!c.release(Some(10.0)));
        assert!(!c.release(Some(-10.0)));
        assert!(!c.release(None));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn leftward_swipe_advances_exactly_once() {
        let (mut c, _clock) = carousel(4);
        c.interaction_start();
        assert!(c.release(Some(-50.0)));
        assert_eq!(c.index(), 1);
        c.interaction_start();
        assert!(c.release(Some(50.0)));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn swipe_release_schedules_resume() {
        let (mut c, clock) = carousel(4);
        c.start();
        c.interaction_start();
        c.release(Some(5.0));
        assert!(clock.is_armed(TimerSlot::Resume));
        clock.run_for(&mut c, 3000);
        assert_eq!(c.mode(), Mode::Auto);
    }

    #[test]
    fn last_writer_wins_within_a_tick() {
        let (mut c, _clock) = carousel(5);
        c.interaction_start();
        c.release(Some(-80.0));
        c.go_to(4);
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn no_mutation_after_dispose() {
        let (mut c, clock) = carousel(3);
        c.start();
        c.next();
        let advance = clock.armed(TimerSlot::Advance);
        let resume = clock.armed(TimerSlot::Resume);
        assert!(resume.is_some());

        c.dispose();
        assert_eq!(clock.armed_count(), 0);
        clock.run_for(&mut c, 60_000);
        if let Some(token) = resume {
            assert!(!c.fire(token));
        }
        if let Some(token) = advance {
            assert!(!c.fire(token));
        }
        c.next();
        c.interaction_start();
        c.start();
        assert_eq!(c.index(), 1);
        assert_eq!(clock.armed_count(), 0);
    }

    #[test]
    fn stale_tokens_are_ignored() {
        let (mut c, clock) = carousel(3);
        c.start();
        let first = clock.armed(TimerSlot::Advance).expect("advance armed");
        c.interaction_start();
        c.interaction_end();
        clock.run_for(&mut c, 3000);
        assert_ne!(clock.armed(TimerSlot::Advance), Some(first));
        assert!(!c.fire(first));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn drop_cancels_timers() {
        let clock = VirtualScheduler::default();
        {
            let mut c = Carousel::new(3, CONFIG, clock.clone());
            c.start();
            c.next();
            assert_eq!(clock.armed_count(), 1);
        }
        assert_eq!(clock.armed_count(), 0);
    }
}
