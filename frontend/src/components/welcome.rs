use ece_shared::content::{WELCOME_TEXT, WELCOME_TITLE};
use yew::prelude::*;

use crate::hooks::use_in_view;
use crate::styles;

#[function_component(Welcome)]
pub fn welcome() -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone());

    html! {
        <section class={styles::SECTION_DARK}>
            <div ref={node} class={if visible { styles::FADE_VISIBLE } else { styles::FADE_HIDDEN }}>
                <h2 class={styles::SECTION_TITLE}>{WELCOME_TITLE}</h2>
                <p class={styles::WELCOME_TEXT}>{WELCOME_TEXT}</p>
            </div>
        </section>
    }
}
