#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::prelude::*;

use nextpath_site::hooks::media_query::{use_media_query, use_mounted};

wasm_bindgen_test_configure!(run_in_browser);

// Any real viewport satisfies both, so only the reset between them is
// observable as a `false` reading.
const NARROW: &str = "(min-width: 1px)";
const NARROW_TOO: &str = "(min-width: 2px)";

#[function_component(MountedReadout)]
fn mounted_readout() -> Html {
    let mounted = use_mounted();
    html! { <span>{ mounted.to_string() }</span> }
}

#[derive(Properties, PartialEq)]
struct QueryReadoutProps {
    query: &'static str,
}

#[function_component(QueryReadout)]
fn query_readout(props: &QueryReadoutProps) -> Html {
    let matches = use_media_query(props.query);
    html! { <span>{ matches.to_string() }</span> }
}

#[derive(Properties, PartialEq)]
struct SwapReadoutProps {
    log: Rc<RefCell<Vec<bool>>>,
}

/// Watches `NARROW` until clicked, then swaps to `NARROW_TOO`, recording
/// the value seen by every render pass.
#[function_component(SwapReadout)]
fn swap_readout(props: &SwapReadoutProps) -> Html {
    let query = use_state_eq(|| NARROW);
    let matches = use_media_query(*query);
    props.log.borrow_mut().push(matches);

    let onclick = {
        let query = query.clone();
        Callback::from(move |_| query.set(NARROW_TOO))
    };

    html! { <button {onclick}>{ matches.to_string() }</button> }
}

fn mount_point() -> web_sys::Element {
    let document = web_sys::window()
        .expect("no window")
        .document()
        .expect("no document");
    let root = document.create_element("div").expect("error creating root");
    document
        .body()
        .expect("no body")
        .append_child(&root)
        .expect("error attaching root");
    root
}

fn click_button(root: &web_sys::Element) {
    root.query_selector("button")
        .expect("error querying button")
        .expect("no button")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("button is not an html element")
        .click();
}

#[wasm_bindgen_test]
async fn mount_gate_flips_true_after_first_commit() {
    let root = mount_point();
    let handle = yew::Renderer::<MountedReadout>::with_root(root.clone()).render();

    TimeoutFuture::new(50).await;
    assert_eq!(root.text_content().unwrap_or_default(), "true");

    handle.destroy();
}

#[wasm_bindgen_test]
async fn media_query_adopts_environment_truth_after_mount() {
    let root = mount_point();
    let handle = yew::Renderer::<QueryReadout>::with_root_and_props(
        root.clone(),
        QueryReadoutProps { query: NARROW },
    )
    .render();

    TimeoutFuture::new(50).await;
    assert_eq!(root.text_content().unwrap_or_default(), "true");

    handle.destroy();
}

#[wasm_bindgen_test]
async fn media_query_reports_false_for_unmatched_condition() {
    let root = mount_point();
    let handle = yew::Renderer::<QueryReadout>::with_root_and_props(
        root.clone(),
        QueryReadoutProps {
            query: "(min-width: 99999px)",
        },
    )
    .render();

    TimeoutFuture::new(50).await;
    assert_eq!(root.text_content().unwrap_or_default(), "false");

    handle.destroy();
}

#[wasm_bindgen_test]
async fn query_swap_resets_then_adopts_the_new_query() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let root = mount_point();
    let handle = yew::Renderer::<SwapReadout>::with_root_and_props(
        root.clone(),
        SwapReadoutProps { log: log.clone() },
    )
    .render();

    TimeoutFuture::new(50).await;
    assert_eq!(*log.borrow(), vec![false, true]);

    click_button(&root);
    TimeoutFuture::new(50).await;

    // The swap renders once with the conservative default while the old
    // subscription is released, then the new query's first effect
    // adopts the environment value.
    assert_eq!(*log.borrow(), vec![false, true, false, true]);
    assert_eq!(root.text_content().unwrap_or_default(), "true");

    handle.destroy();
}

#[wasm_bindgen_test]
async fn teardown_releases_the_live_subscription() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let root = mount_point();
    let handle = yew::Renderer::<SwapReadout>::with_root_and_props(
        root.clone(),
        SwapReadoutProps { log: log.clone() },
    )
    .render();

    TimeoutFuture::new(50).await;
    let delivered = log.borrow().len();
    handle.destroy();

    // Nothing may reach the component once its subscription is gone.
    TimeoutFuture::new(100).await;
    assert_eq!(log.borrow().len(), delivered);
    assert_eq!(root.text_content().unwrap_or_default(), "");
}
