use yew::prelude::*;

use crate::components::hero::Ribbon;
use crate::components::mascot::Mascot;
use crate::hooks::media_query::{use_media_query, use_mounted, MOBILE_QUERY};

#[function_component(About)]
pub fn about() -> Html {
    let is_mobile = use_media_query(MOBILE_QUERY);
    let mounted = use_mounted();

    /* Pre-mount placeholder */
    if !mounted {
        return html! { <section id="about" class="about about-placeholder" /> };
    }

    html! {
        <section id="about" class={classes!("about", is_mobile.then_some("about-mobile"))}>
            <div class="about-content">
                <div class="about-mascot fade-up delay-0">
                    <Mascot />
                </div>

                <h2 class="about-heading fade-up delay-1">
                    {
                        if is_mobile {
                            html! {
                                <>
                                    {"We build"}
                                    <br />
                                    {"apps,"}
                                    <br />
                                    {"websites &"}
                                    <br />
                                    <span class="italic">{"automations."}</span>
                                </>
                            }
                        } else {
                            html! {
                                <>
                                    {"We build apps,"}
                                    <br />
                                    {"websites "}<span class="italic">{"&"}</span>
                                    <br />
                                    <span class="italic">{"automations."}</span>
                                </>
                            }
                        }
                    }
                </h2>

                <div class="about-ribbon fade-up delay-2">
                    <Ribbon width={if is_mobile { 80 } else { 100 }} />
                </div>

                <p class="about-body fade-up delay-3">
                    {"A high-velocity studio dedicated to shipping digital product. \
                      Whether you need a robust web app, a stunning website, or \
                      seamless workflow automations, we build anything you can \
                      imagine, with the speed and precision that modern builders \
                      demand."}
                </p>

                <div class="fade-up delay-4">
                    <a href="#services" class="cta-button cta-filled cta-raised">
                        <span>{"Agency"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
