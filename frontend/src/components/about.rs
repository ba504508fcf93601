use ece_shared::content::{ABOUT_BUTTON, ABOUT_IMAGE, ABOUT_IMAGE_ALT, ABOUT_PARAGRAPHS, ABOUT_TITLE};
use log::debug;
use yew::prelude::*;

use crate::config::get_asset_url;
use crate::styles;

#[function_component(About)]
pub fn about() -> Html {
    let image_missing = use_state(|| false);

    // A missing illustration just drops out; the text column carries on
    let on_image_error = {
        let image_missing = image_missing.clone();
        Callback::from(move |_: Event| {
            debug!("about illustration failed to load");
            image_missing.set(true);
        })
    };

    html! {
        <section id="about" class={styles::ABOUT_SECTION}>
            <div class={styles::ABOUT_GRID}>
                <div class="order-first lg:order-none">
                    if !*image_missing {
                        <img
                            class={styles::ABOUT_IMAGE}
                            src={get_asset_url(ABOUT_IMAGE)}
                            alt={ABOUT_IMAGE_ALT}
                            onerror={on_image_error}
                        />
                    }
                </div>
                <div>
                    <h2 class={classes!(styles::SECTION_TITLE, "lg:text-left")}>{ABOUT_TITLE}</h2>
                    { for ABOUT_PARAGRAPHS.iter().map(|text| html! {
                        <p class={classes!(styles::BODY_TEXT, "mb-6")}>{*text}</p>
                    }) }
                    <button class={styles::ABOUT_BUTTON}>{ABOUT_BUTTON}</button>
                </div>
            </div>
        </section>
    }
}
