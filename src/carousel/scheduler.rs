use gloo_timers::callback::{Interval, Timeout};
use yew::Callback;

/// The two timers a carousel may have armed at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Repeating autoplay tick.
    Advance,
    /// One-shot end of the post-interaction cooldown.
    Resume,
}

/// Identifies one arming of a slot. A callback carrying an older generation is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken {
    pub slot: TimerSlot,
    pub generation: u64,
}

/// Timer backend the controller arms and cancels through.
///
/// `Advance` repeats every `delay_ms` until cancelled, `Resume` fires once.
/// Arming a slot that is already armed replaces the previous timer.
pub trait Scheduler {
    fn arm(&mut self, token: TimerToken, delay_ms: u32);
    fn cancel(&mut self, slot: TimerSlot);
}

/// Browser timers. Each handle cancels itself when dropped, so replacing or
/// taking a slot is enough to clear it.
pub struct GlooScheduler {
    advance: Option<Interval>,
    resume: Option<Timeout>,
    sink: Callback<TimerToken>,
}

impl GlooScheduler {
    pub fn new(sink: Callback<TimerToken>) -> Self {
        Self {
            advance: None,
            resume: None,
            sink,
        }
    }
}

impl Scheduler for GlooScheduler {
    fn arm(&mut self, token: TimerToken, delay_ms: u32) {
        let sink = self.sink.clone();
        match token.slot {
            TimerSlot::Advance => {
                self.advance = Some(Interval::new(delay_ms, move || sink.emit(token)));
            }
            TimerSlot::Resume => {
                self.resume = Some(Timeout::new(delay_ms, move || sink.emit(token)));
            }
        }
    }

    fn cancel(&mut self, slot: TimerSlot) {
        match slot {
            TimerSlot::Advance => drop(self.advance.take()),
            TimerSlot::Resume => drop(self.resume.take()),
        }
    }
}
