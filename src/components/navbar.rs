use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::mascot::Mascot;
use crate::hooks::media_query::{use_media_query, use_mounted, MOBILE_QUERY};

/// Hide when scrolling down, reappear when scrolling up, always show
/// within 10px of the top.
fn nav_visible_after_scroll(current: f64, last: f64, was_visible: bool) -> bool {
    if current < 10.0 {
        return true;
    }
    if current > last {
        false
    } else if current < last {
        true
    } else {
        was_visible
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_mobile = use_media_query(MOBILE_QUERY);
    let mounted = use_mounted();
    let is_visible = use_state_eq(|| true);

    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let target = window.clone();
                let mut last_y = window.scroll_y().unwrap_or(0.0);
                let mut visible = true;

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = target.scroll_y().unwrap_or(last_y);
                    visible = nav_visible_after_scroll(y, last_y, visible);
                    last_y = y;
                    is_visible.set(visible);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .expect("error attaching scroll listener");

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .expect("error removing scroll listener");
                }
            },
            (),
        );
    }

    /* Pre-mount: render a minimal placeholder to avoid layout shift */
    if !mounted {
        return html! {
            <nav class="navbar navbar-placeholder">
                <span class="brand">{"NextPath"}</span>
            </nav>
        };
    }

    let nav_class = classes!(
        "navbar",
        if *is_visible { "navbar-shown" } else { "navbar-hidden" },
        is_mobile.then_some("navbar-mobile"),
    );

    html! {
        <nav class={nav_class}>
            {
                if is_mobile {
                    html! {
                        <>
                            <a href="/" class="brand">{"NextPath"}</a>

                            // Mascot badge on the right
                            <div class="mascot-badge">
                                <Mascot class="mascot-badge-player" />
                            </div>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <div class="nav-links">
                                <a href="#work">{"Work"}</a>
                                <a href="#about">{"About"}</a>
                                <a href="#services">{"Services"}</a>
                            </div>

                            <a href="/" class="brand brand-centered">{"NextPath"}</a>

                            <div class="nav-actions">
                                <a href="#contact" class="nav-start-link">{"Start a project"}</a>
                                <a href="#contact" class="cta-button cta-filled">
                                    <span>{"Let's Connect"}</span>
                                </a>
                            </div>
                        </>
                    }
                }
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::nav_visible_after_scroll;

    #[test]
    fn hides_when_scrolling_down() {
        assert!(!nav_visible_after_scroll(200.0, 100.0, true));
    }

    #[test]
    fn reappears_when_scrolling_up() {
        assert!(nav_visible_after_scroll(150.0, 300.0, false));
    }

    #[test]
    fn always_shows_near_the_top() {
        assert!(nav_visible_after_scroll(5.0, 8.0, false));
    }

    #[test]
    fn holds_state_when_position_is_unchanged() {
        assert!(!nav_visible_after_scroll(400.0, 400.0, false));
        assert!(nav_visible_after_scroll(400.0, 400.0, true));
    }
}
