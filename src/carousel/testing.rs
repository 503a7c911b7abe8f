use std::cell::RefCell;
use std::rc::Rc;

use super::controller::Carousel;
use super::scheduler::{Scheduler, TimerSlot, TimerToken};

struct Armed {
    token: TimerToken,
    deadline: u64,
    period: Option<u64>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    timers: Vec<Armed>,
}

/// Deterministic scheduler on a virtual millisecond clock. Clones share the clock.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl VirtualScheduler {
    pub fn armed_count(&self) -> usize {
        self.clock.borrow().timers.len()
    }

    pub fn is_armed(&self, slot: TimerSlot) -> bool {
        self.armed(slot).is_some()
    }

    pub fn armed(&self, slot: TimerSlot) -> Option<TimerToken> {
        self.clock
            .borrow()
            .timers
            .iter()
            .find(|t| t.token.slot == slot)
            .map(|t| t.token)
    }

    /// Moves the clock forward by `ms`, delivering every due timer to `carousel`
    /// in deadline order. Returns how many deliveries changed the index.
    pub fn run_for(&self, carousel: &mut Carousel<VirtualScheduler>, ms: u64) -> usize {
        let target = self.clock.borrow().now + ms;
        let mut changes = 0;
        loop {
            let due = {
                let mut clock = self.clock.borrow_mut();
                let next = clock
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.deadline <= target)
                    .min_by_key(|(_, t)| t.deadline)
                    .map(|(i, _)| i);
                match next {
                    Some(i) => {
                        let deadline = clock.timers[i].deadline;
                        clock.now = deadline;
                        let token = clock.timers[i].token;
                        match clock.timers[i].period {
                            Some(period) => clock.timers[i].deadline += period,
                            None => {
                                clock.timers.remove(i);
                            }
                        }
                        Some(token)
                    }
                    None => None,
                }
            };
            match due {
                Some(token) => {
                    if carousel.fire(token) {
                        changes += 1;
                    }
                }
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
        changes
    }
}

impl Scheduler for VirtualScheduler {
    fn arm(&mut self, token: TimerToken, delay_ms: u32) {
        let mut clock = self.clock.borrow_mut();
        clock.timers.retain(|t| t.token.slot != token.slot);
        let delay = u64::from(delay_ms);
        let deadline = clock.now + delay;
        let period = match token.slot {
            TimerSlot::Advance => Some(delay.max(1)),
            TimerSlot::Resume => None,
        };
        clock.timers.push(Armed {
            token,
            deadline,
            period,
        });
    }

    fn cancel(&mut self, slot: TimerSlot) {
        self.clock.borrow_mut().timers.retain(|t| t.token.slot != slot);
    }
}
