use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::components::whatsapp_button::WhatsAppButton;
use crate::content::NAV_LINKS;
use crate::whatsapp::messages;

const SCROLLED_AFTER: f64 = 20.0;
const ACTIVE_OFFSET: f64 = 100.0;

/// The last section whose top has passed `scroll_y` plus the header offset.
pub fn active_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|(_, top)| *top <= scroll_y + ACTIVE_OFFSET)
        .map(|(id, _)| *id)
}

fn section_offsets() -> Vec<(&'static str, f64)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    NAV_LINKS
        .iter()
        .filter_map(|link| {
            let element = document.get_element_by_id(link.id)?;
            let element = element.dyn_into::<HtmlElement>().ok()?;
            Some((link.id, f64::from(element.offset_top())))
        })
        .collect()
}

fn lock_body_scroll(locked: bool) {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<&'static str>);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > SCROLLED_AFTER);
                    active.set(active_section(&section_offsets(), scroll_y));
                };
                update();

                let scroll_callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                let window = window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            move |open| {
                lock_body_scroll(*open);
                || lock_body_scroll(false)
            },
            *menu_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#inicio" class="nav-logo">
                    <img src="/assets/logo.png" alt="PH Soluções Residenciais" />
                </a>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    { for NAV_LINKS.iter().map(|link| {
                        let is_active = *active == Some(link.id);
                        html! {
                            <a
                                href={format!("#{}", link.id)}
                                class={classes!("nav-link", is_active.then(|| "active"))}
                                onclick={close_menu.clone()}
                            >
                                {link.label}
                            </a>
                        }
                    }) }
                    <WhatsAppButton message={messages::HEADER} label="Orçamento" class="nav-cta" />
                </nav>
            </div>
        </header>
    }
}
