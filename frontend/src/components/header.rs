use ece_shared::content::{LOGIN_LABEL, LOGO, NAV_ITEMS, PLACEHOLDER_HREF};
use yew::prelude::*;
use crate::styles;

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    html! {
        <header class={styles::NAV}>
            <div class={styles::NAV_BRAND}>{LOGO}</div>
            <nav class={styles::NAV_ITEMS}>
                { for NAV_ITEMS.iter().map(|item| html! {
                    <a class={styles::NAV_LINK} href={PLACEHOLDER_HREF}>{*item}</a>
                }) }
                <button class={styles::NAV_LOGIN}>{LOGIN_LABEL}</button>
            </nav>
        </header>
    }
}
