use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;
use yew::prelude::*;

/// Breakpoint every section of the site branches on.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

/// Snapshot of one watched media condition.
///
/// Reads as `false` until the first post-render effect has adopted the
/// environment's truth value for the caller's current query, so a
/// pre-rendered pass and the first client pass always agree.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ViewportWatch {
    query: &'static str,
    mounted: bool,
    matches: bool,
}

impl ViewportWatch {
    /// State before the first effect for `query` has run.
    pub(crate) fn idle(query: &'static str) -> Self {
        Self {
            query,
            mounted: false,
            matches: false,
        }
    }

    /// State once the environment has reported `matches` for `query`.
    pub(crate) fn live(query: &'static str, matches: bool) -> Self {
        Self {
            query,
            mounted: true,
            matches,
        }
    }

    /// Value visible to a component currently rendering with `query`.
    /// A query swap reads as unmounted until the new subscription's
    /// first effect commits.
    pub(crate) fn read(&self, query: &str) -> bool {
        self.mounted && self.query == query && self.matches
    }
}

/// True once the component has completed its first client-side render.
/// Gate any markup that differs between a pre-rendered pass and the
/// first client-evaluated pass behind this.
#[hook]
pub fn use_mounted() -> bool {
    let mounted = use_state_eq(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    *mounted
}

/// Tracks a CSS media condition in real time.
///
/// Returns `false` on every render before the first post-mount effect,
/// then the live `matchMedia` value for `query`. Changing `query`
/// drops the old `change` subscription and starts over from the
/// conservative `false` default.
#[hook]
pub fn use_media_query(query: &'static str) -> bool {
    let state = use_state_eq(|| ViewportWatch::idle(query));

    {
        let state = state.clone();
        use_effect_with_deps(
            move |query: &&'static str| {
                let query = *query;
                let media = web_sys::window()
                    .expect("no window")
                    .match_media(query)
                    .expect("error evaluating media query")
                    .expect("matchMedia unavailable");

                // One synchronous read at mount, then change events only.
                state.set(ViewportWatch::live(query, media.matches()));

                let listener = {
                    let state = state.clone();
                    Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                        state.set(ViewportWatch::live(query, event.matches()));
                    }) as Box<dyn FnMut(MediaQueryListEvent)>)
                };
                media
                    .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
                    .expect("error subscribing to media query changes");

                move || {
                    media
                        .remove_event_listener_with_callback(
                            "change",
                            listener.as_ref().unchecked_ref(),
                        )
                        .expect("error unsubscribing from media query changes");
                }
            },
            query,
        );
    }

    state.read(query)
}

#[cfg(test)]
mod tests {
    use super::ViewportWatch;

    const MOBILE: &str = "(max-width: 768px)";
    const WIDE: &str = "(min-width: 1200px)";

    #[test]
    fn idle_reads_false_whatever_the_environment_says() {
        assert!(!ViewportWatch::idle(MOBILE).read(MOBILE));
    }

    #[test]
    fn live_adopts_the_environment_value() {
        assert!(ViewportWatch::live(MOBILE, true).read(MOBILE));
        assert!(!ViewportWatch::live(MOBILE, false).read(MOBILE));
    }

    #[test]
    fn change_events_are_last_write_wins() {
        let mut watch = ViewportWatch::live(MOBILE, true);
        for &matches in &[true, false, true, false] {
            watch = ViewportWatch::live(MOBILE, matches);
        }
        assert!(!watch.read(MOBILE));
    }

    #[test]
    fn query_swap_resets_to_the_conservative_default() {
        let watch = ViewportWatch::live(MOBILE, true);
        assert!(watch.read(MOBILE));
        assert!(!watch.read(WIDE));
    }
}
