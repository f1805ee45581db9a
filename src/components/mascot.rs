use yew::prelude::*;

const PLAYER_MARKUP: &str = r#"<dotlottie-player src="/assets/animations/mascot.lottie" autoplay loop style="width: 100%; height: 100%;"></dotlottie-player>"#;

#[derive(Properties, PartialEq)]
pub struct MascotProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Studio mascot animation. The `<dotlottie-player>` web component is
/// loaded from index.html; this just drops the element into the tree.
#[function_component(Mascot)]
pub fn mascot(props: &MascotProps) -> Html {
    let player = Html::from_html_unchecked(AttrValue::Static(PLAYER_MARKUP));

    html! {
        <div class={classes!("mascot", props.class.clone())}>
            { player }
        </div>
    }
}
