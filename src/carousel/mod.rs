//! Auto-advancing carousel shared by the services, testimonials and gallery sections.
//!
//! [`controller::Carousel`] is a plain state machine over a
//! [`scheduler::Scheduler`]; the browser binding lives in [`hook`].

pub mod controller;
pub mod gesture;
pub mod hook;
pub mod scheduler;

#[cfg(test)]
pub mod testing;

pub use controller::CarouselConfig;
pub use gesture::SwipeTracker;
pub use hook::use_carousel;
