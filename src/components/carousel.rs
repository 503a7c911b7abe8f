use yew::prelude::*;

use crate::carousel::{use_carousel, CarouselConfig, SwipeTracker};

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub slides: Vec<Html>,
    pub config: CarouselConfig,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub show_arrows: bool,
    #[prop_or(true)]
    pub show_dots: bool,
}

/// Slide track driven by an autoplaying carousel controller.
#[function_component(CarouselView)]
pub fn carousel_view(props: &CarouselProps) -> Html {
    let len = props.slides.len();
    let carousel = use_carousel(len, props.config);
    let tracker = use_mut_ref(SwipeTracker::default);
    let index = carousel.index();

    let ontouchstart = {
        let carousel = carousel.clone();
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                tracker
                    .borrow_mut()
                    .begin(f64::from(touch.client_x()), f64::from(touch.client_y()));
            }
            carousel.interaction_start();
        })
    };

    let ontouchmove = {
        let tracker = tracker.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                let horizontal = tracker
                    .borrow_mut()
                    .update(f64::from(touch.client_x()), f64::from(touch.client_y()));
                if horizontal {
                    e.prevent_default();
                }
            }
        })
    };

    let ontouchend = {
        let carousel = carousel.clone();
        let tracker = tracker.clone();
        Callback::from(move |_: TouchEvent| {
            let displacement = tracker.borrow_mut().finish();
            carousel.release(displacement);
        })
    };

    let ontouchcancel = {
        let carousel = carousel.clone();
        let tracker = tracker.clone();
        Callback::from(move |_: TouchEvent| {
            tracker.borrow_mut().cancel();
            carousel.interaction_end();
        })
    };

    let onmousedown = {
        let carousel = carousel.clone();
        let tracker = tracker.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            tracker
                .borrow_mut()
                .begin(f64::from(e.client_x()), f64::from(e.client_y()));
            carousel.interaction_start();
        })
    };

    let onmousemove = {
        let tracker = tracker.clone();
        Callback::from(move |e: MouseEvent| {
            let mut tracker = tracker.borrow_mut();
            if tracker.is_active() {
                tracker.update(f64::from(e.client_x()), f64::from(e.client_y()));
            }
        })
    };

    // Listens on the whole region so a drag released over an arrow or dot
    // still ends. Plain clicks outside the track have no drag to finish.
    let onmouseup = {
        let carousel = carousel.clone();
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| {
            let dragging = tracker.borrow().is_active();
            if dragging {
                let displacement = tracker.borrow_mut().finish();
                carousel.release(displacement);
            }
        })
    };

    let onmouseenter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.hover_start())
    };

    // Leaving mid-drag ends the drag where the pointer left.
    let onmouseleave = {
        let carousel = carousel.clone();
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| {
            let dragging = tracker.borrow().is_active();
            if dragging {
                let displacement = tracker.borrow_mut().finish();
                carousel.release(displacement);
            }
            carousel.hover_end();
        })
    };

    let onwheel = {
        let carousel = carousel.clone();
        Callback::from(move |e: WheelEvent| {
            if e.delta_x().abs() > e.delta_y().abs() {
                carousel.wheel();
            }
        })
    };

    let onkeydown = {
        let carousel = carousel.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowLeft" => carousel.prev(),
            "ArrowRight" => carousel.next(),
            _ => {}
        })
    };

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.prev())
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.next())
    };

    let track_style = format!("transform: translateX(-{}%);", index * 100);

    html! {
        <div
            class={classes!("carousel", props.class.clone())}
            role="region"
            aria-roledescription="carousel"
            aria-label={props.label.clone()}
            tabindex="0"
            {onmouseenter}
            {onmouseleave}
            {onmousemove}
            {onmouseup}
            {onkeydown}
        >
            <div
                class="carousel-viewport"
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
                {ontouchcancel}
                {onmousedown}
                {onwheel}
            >
                <div class="carousel-track" style={track_style}>
                    { for props.slides.iter().enumerate().map(|(i, slide)| html! {
                        <div
                            class={classes!("carousel-slide", (i == index).then(|| "active"))}
                            aria-hidden={(i != index).to_string()}
                        >
                            { slide.clone() }
                        </div>
                    }) }
                </div>
            </div>
            {
                if props.show_arrows && len > 1 {
                    html! {
                        <>
                            <button class="carousel-arrow prev" aria-label="Anterior" onclick={on_prev}>{"‹"}</button>
                            <button class="carousel-arrow next" aria-label="Próximo" onclick={on_next}>{"›"}</button>
                        </>
                    }
                } else {
                    html! {}
                }
            }
            {
                if props.show_dots && len > 1 {
                    html! {
                        <div class="carousel-dots">
                            { for (0..len).map(|i| {
                                let carousel = carousel.clone();
                                html! {
                                    <button
                                        class={classes!("carousel-dot", (i == index).then(|| "active"))}
                                        aria-label={format!("Ir para o slide {}", i + 1)}
                                        onclick={Callback::from(move |_: MouseEvent| carousel.go_to(i))}
                                    />
                                }
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
