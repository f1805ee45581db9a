use yew::prelude::*;

use crate::hooks::media_query::{use_media_query, MOBILE_QUERY};

#[function_component(Footer)]
pub fn footer() -> Html {
    let is_mobile = use_media_query(MOBILE_QUERY);

    html! {
        <footer class={classes!("footer", is_mobile.then_some("footer-mobile"))}>
            <span class="footer-mark">{"NextPath Studio — 2025"}</span>
        </footer>
    }
}
