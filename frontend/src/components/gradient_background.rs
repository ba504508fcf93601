use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
}

/// Full-page black-to-charcoal backdrop every section sits on.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    html! {
        <div class={classes!("relative", styles::PAGE)}>
            <div class={styles::PAGE_BACKGROUND}></div>

            // Content container
            <div class="relative z-0">
                {props.children.clone()}
            </div>
        </div>
    }
}
