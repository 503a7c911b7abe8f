use std::rc::Rc;

use chrono::Utc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;
use yew_hooks::prelude::use_interval;

/// How far (px) a section must be inside the viewport before it reveals.
pub const REVEAL_MARGIN: f64 = 100.0;

const FRAME_MS: u32 = 16;

/// Interval period for the count-up ticker; 0 stops it.
fn tick_ms(running: bool) -> u32 {
    if running {
        FRAME_MS
    } else {
        0
    }
}

pub fn entered_viewport(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > margin
}

/// Ease-out cubic count from 0 to `end` over `duration_ms`.
pub fn count_at(end: u32, elapsed_ms: u64, duration_ms: u32) -> u32 {
    if duration_ms == 0 {
        return end;
    }
    let progress = (elapsed_ms as f64 / f64::from(duration_ms)).min(1.0);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (eased * f64::from(end)).round() as u32
}

/// True once the referenced element has scrolled into view. Never reverts.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let check = Rc::new(move || {
                    let Some(element) = node.cast::<Element>() else {
                        return;
                    };
                    let viewport = window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    let rect = element.get_bounding_client_rect();
                    if entered_viewport(rect.top(), rect.bottom(), viewport, REVEAL_MARGIN) {
                        visible.set(true);
                    }
                });

                let on_scroll = {
                    let check = check.clone();
                    Closure::wrap(Box::new(move || check()) as Box<dyn FnMut()>)
                };
                let window = window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }

                // Sections already on screen at load reveal immediately
                check();

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            node,
        );
    }

    *visible
}

/// Counts up to `end` once `active` first becomes true. Shows `end` before that.
#[hook]
pub fn use_count_up(end: u32, duration_ms: u32, active: bool) -> u32 {
    let count = use_state_eq(|| end);
    let running = use_state_eq(|| false);
    let started_at = use_mut_ref(|| None::<i64>);

    {
        let count = count.clone();
        let running = running.clone();
        let started_at = started_at.clone();
        use_effect_with_deps(
            move |active| {
                if *active && started_at.borrow().is_none() {
                    *started_at.borrow_mut() = Some(Utc::now().timestamp_millis());
                    count.set(0);
                    running.set(true);
                }
                || ()
            },
            active,
        );
    }

    {
        let period = tick_ms(*running);
        let count = count.clone();
        let running = running.clone();
        use_interval(
            move || {
                let Some(start) = *started_at.borrow() else {
                    return;
                };
                let elapsed = (Utc::now().timestamp_millis() - start).max(0) as u64;
                count.set(count_at(end, elapsed, duration_ms));
                if elapsed >= u64::from(duration_ms) {
                    running.set(false);
                }
            },
            period,
        );
    }

    *count
}
