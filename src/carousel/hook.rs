use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use super::controller::{Carousel, CarouselConfig};
use super::scheduler::{GlooScheduler, TimerToken};

type SharedCarousel = Rc<RefCell<Option<Carousel<GlooScheduler>>>>;

/// Handle returned by [`use_carousel`]. Every method is a no-op once the
/// owning component has unmounted.
#[derive(Clone)]
pub struct UseCarouselHandle {
    index: UseStateHandle<usize>,
    controller: SharedCarousel,
}

impl UseCarouselHandle {
    pub fn index(&self) -> usize {
        *self.index
    }

    fn with(&self, f: impl FnOnce(&mut Carousel<GlooScheduler>)) {
        let mut slot = self.controller.borrow_mut();
        if let Some(carousel) = slot.as_mut() {
            f(carousel);
            self.index.set(carousel.index());
        }
    }

    pub fn next(&self) {
        self.with(|c| {
            c.next();
        });
    }

    pub fn prev(&self) {
        self.with(|c| {
            c.prev();
        });
    }

    pub fn go_to(&self, index: usize) {
        self.with(|c| {
            c.go_to(index);
        });
    }

    pub fn interaction_start(&self) {
        self.with(|c| c.interaction_start());
    }

    pub fn interaction_end(&self) {
        self.with(|c| c.interaction_end());
    }

    pub fn hover_start(&self) {
        self.with(|c| c.hover_start());
    }

    pub fn hover_end(&self) {
        self.with(|c| c.hover_end());
    }

    pub fn wheel(&self) {
        self.with(|c| c.wheel());
    }

    pub fn release(&self, displacement: Option<f64>) {
        self.with(|c| {
            c.release(displacement);
        });
    }
}

/// Owns one autoplaying [`Carousel`] for the lifetime of the calling component.
///
/// The controller is rebuilt when `len` or `config` change and disposed on
/// unmount. Timer callbacks only hold a weak reference to it.
#[hook]
pub fn use_carousel(len: usize, config: CarouselConfig) -> UseCarouselHandle {
    let index = use_state_eq(|| 0usize);
    let controller: SharedCarousel = use_mut_ref(|| None);

    {
        let index = index.clone();
        let controller = controller.clone();
        use_effect_with_deps(
            move |(len, config)| {
                let weak = Rc::downgrade(&controller);
                let tick_index = index.clone();
                let sink = Callback::from(move |token: TimerToken| {
                    let Some(cell) = weak.upgrade() else {
                        return;
                    };
                    let mut slot = cell.borrow_mut();
                    if let Some(carousel) = slot.as_mut() {
                        if carousel.fire(token) {
                            tick_index.set(carousel.index());
                        }
                    }
                });

                let mut carousel = Carousel::new(*len, *config, GlooScheduler::new(sink));
                carousel.start();
                debug!(
                    "carousel mounted: {} slides, every {}ms",
                    carousel.len(),
                    carousel.config().interval_ms
                );
                index.set(0);
                *controller.borrow_mut() = Some(carousel);

                move || {
                    if let Some(mut carousel) = controller.borrow_mut().take() {
                        carousel.dispose();
                        debug!("carousel disposed at slide {}", carousel.index());
                    }
                }
            },
            (len, config),
        );
    }

    UseCarouselHandle { index, controller }
}
