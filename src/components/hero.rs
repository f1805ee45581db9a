use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::hooks::media_query::{use_media_query, use_mounted, MOBILE_QUERY};

const ROTATING_WORDS: &[&str] = &["yesterday.", "faster.", "today.", "now."];

// (class, headline figure, caption)
const MOBILE_STATS: &[(&str, &str, &str)] = &[
    ("stat-gold", "14 Days", "Avg. Build"),
    ("stat-red", "24+", "Shipped"),
    ("stat-cream", "100%", "AI-Driven"),
    ("stat-green", "100%", "Impact"),
];

const DESKTOP_STATS: &[(&str, &str, &str)] = &[
    ("stat-gold", "14 Days", "Avg. Build"),
    ("stat-red", "24+", "MVPs Shipped"),
    ("stat-cream", "100%", "AI-Driven"),
];

#[derive(Properties, PartialEq)]
pub struct RibbonProps {
    #[prop_or(80)]
    pub width: u32,
    #[prop_or(AttrValue::Static("#FF3831"))]
    pub color: AttrValue,
}

/// Organic, wavy ribbon accent used across the hero and about sections.
#[function_component(Ribbon)]
pub fn ribbon(props: &RibbonProps) -> Html {
    let height = props.width * 2 / 5;

    html! {
        <svg
            class="ribbon"
            width={props.width.to_string()}
            height={height.to_string()}
            viewBox="0 0 100 40"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                d="M10 25C15 20 25 15 35 22C45 29 55 25 60 20C65 15 75 12 85 18C95 24 90 30 80 28C70 26 62 32 55 35C48 38 38 35 28 32C18 29 5 30 10 25Z"
                fill={props.color.clone()}
            />
            <path
                d="M30 35C35 32 45 30 50 33C55 36 65 38 70 34C75 30 80 28 85 30C90 32 88 36 82 37C76 38 68 39 60 36C52 33 42 34 35 37C28 40 25 38 30 35Z"
                fill={props.color.clone()}
                opacity="0.85"
            />
            <path
                d="M50 15C55 12 65 10 75 13C85 16 95 18 92 12C89 6 80 5 70 8C60 11 52 14 45 12C38 10 35 12 40 15C45 18 45 18 50 15Z"
                fill={props.color.clone()}
                opacity="0.7"
            />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
struct WordRotateProps {
    words: Vec<AttrValue>,
    #[prop_or(2500)]
    interval_ms: u32,
}

/// Next rotation slot, wrapping at the end of the word list.
fn advance_word(position: usize, len: usize) -> usize {
    (position + 1) % len
}

#[function_component(WordRotate)]
fn word_rotate(props: &WordRotateProps) -> Html {
    let index = use_state_eq(|| 0usize);
    // Survives re-subscription so a word-list or timing change keeps
    // rotating from the word currently shown.
    let position = use_mut_ref(|| 0usize);

    {
        let index = index.clone();
        let position = position.clone();
        use_effect_with_deps(
            move |&(len, interval_ms): &(usize, u32)| {
                let timer = (len > 1).then(|| {
                    Interval::new(interval_ms, move || {
                        let next = advance_word(*position.borrow(), len);
                        *position.borrow_mut() = next;
                        index.set(next);
                    })
                });
                move || drop(timer)
            },
            (props.words.len(), props.interval_ms),
        );
    }

    if props.words.is_empty() {
        return html! {};
    }
    let word = props.words[*index % props.words.len()].clone();

    html! {
        <span class="word-rotate">
            // Keyed so the slide-in animation restarts on every swap.
            <span key={*index} class="word-rotate-inner">{ word }</span>
        </span>
    }
}

fn stat_figures(stats: &'static [(&'static str, &'static str, &'static str)]) -> Html {
    stats
        .iter()
        .enumerate()
        .map(|(i, (class, label, sub))| {
            let dark = *class == "stat-cream";
            html! {
                <div key={i} class={classes!("stat", *class, format!("stat-{}", i))}>
                    <div class="stat-shimmer" />
                    <div class={classes!("stat-label", dark.then_some("stat-text-dark"))}>{ *label }</div>
                    <div class={classes!("stat-sub", dark.then_some("stat-text-dark"))}>{ *sub }</div>
                </div>
            }
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let is_mobile = use_media_query(MOBILE_QUERY);
    let mounted = use_mounted();

    /* Pre-mount: render a simple dark placeholder to avoid hydration mismatch */
    if !mounted {
        return html! { <section class="hero hero-placeholder" /> };
    }

    let rotating: Vec<AttrValue> = ROTATING_WORDS
        .iter()
        .map(|&w| AttrValue::Static(w))
        .collect();

    if is_mobile {
        return html! {
            <section key="mobile" class="hero hero-mobile">
                <div class="hero-copy">
                    <h1 class="hero-headline fade-up delay-1">
                        {"We build MVPs"}
                        <br />
                        {"in days,"}
                        <br />
                        <span class="italic">{"not months."}</span>
                    </h1>

                    <div class="hero-ribbon fade-up delay-2">
                        <Ribbon width={80} />
                    </div>

                    <p class="hero-sub fade-up delay-3">
                        {"AI-assisted development"}
                        <br />
                        {"for startups that ship"}
                        <br />
                        <WordRotate words={rotating} />
                        <br />
                        {"Just working product."}
                    </p>

                    <div class="hero-cta-row fade-up delay-4">
                        <a href="#work" class="cta-button cta-outline">
                            <span>{"Our Work"}</span>
                        </a>
                        <p class="hero-note">
                            {"Partnering with ambitious brands & inspiring people."}
                        </p>
                    </div>
                </div>

                // Bottom row of stat bars
                <div class="stat-bars rise-in">
                    { stat_figures(MOBILE_STATS) }
                </div>
            </section>
        };
    }

    html! {
        <section key="desktop" class="hero hero-desktop">
            <div class="hero-copy">
                <h1 class="hero-headline fade-up delay-1">
                    {"We build MVPs"}
                    <br />
                    {"in days,"}
                    <br />
                    <Ribbon width={60} />
                    {" "}
                    <span class="italic">{"not months."}</span>
                    {" "}
                    <Ribbon width={60} />
                </h1>
            </div>

            <div class="hero-grid">
                <div class="hero-pitch fade-up delay-3">
                    <p class="hero-sub">
                        {"AI-assisted development"}
                        <br />
                        {"for startups that need"}
                        <br />
                        {"to ship yesterday. No scope"}
                        <br />
                        {"creep. No 6-month timelines."}
                        <br />
                        {"Just working product."}
                    </p>

                    <div class="hero-cta-row">
                        <a href="#work" class="cta-button cta-outline">
                            <span>{"Our Work"}</span>
                        </a>
                        <p class="hero-note">
                            {"Partnering with ambitious brands & inspiring people."}
                        </p>
                    </div>
                </div>

                // Floating stat cards on the right
                <div class="stat-cards fade-up delay-4">
                    { stat_figures(DESKTOP_STATS) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::advance_word;

    #[test]
    fn rotation_wraps_at_the_end_of_the_list() {
        assert_eq!(advance_word(0, 4), 1);
        assert_eq!(advance_word(2, 4), 3);
        assert_eq!(advance_word(3, 4), 0);
    }

    #[test]
    fn rotation_continues_across_timer_restarts() {
        let position = Rc::new(RefCell::new(0usize));
        let make_tick = |position: Rc<RefCell<usize>>, len: usize| {
            move || {
                let next = advance_word(*position.borrow(), len);
                *position.borrow_mut() = next;
                next
            }
        };

        let tick = make_tick(position.clone(), 4);
        tick();
        assert_eq!(tick(), 2);
        drop(tick);

        // A replacement timer over the same shared position picks up
        // from the displayed word instead of snapping back to the start.
        let tick = make_tick(position, 4);
        assert_eq!(tick(), 3);
    }
}
