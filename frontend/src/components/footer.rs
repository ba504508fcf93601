use ece_shared::content::{
    CONTACTS, CONTACT_TITLE, COPYRIGHT, FOOTER_LINKS, FOOTER_MARK, FOOTER_TAGLINE,
    PLACEHOLDER_HREF, QUICK_LINKS, QUICK_LINKS_TITLE, SOCIAL_LINKS,
};
use yew::prelude::*;

use crate::components::icons::{contact_icon, social_icon};
use crate::styles;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer id="contact" class={styles::FOOTER}>
            <div class={styles::FOOTER_GRID}>
                <div>
                    <div class="mb-8">
                        <div class={styles::FOOTER_MARK}>{FOOTER_MARK}</div>
                        <p class={styles::FOOTER_TAGLINE}>{FOOTER_TAGLINE}</p>
                    </div>
                    <div class={styles::FOOTER_SOCIAL}>
                        { for SOCIAL_LINKS.iter().map(|kind| html! {
                            <a class={styles::FOOTER_SOCIAL_LINK} href={PLACEHOLDER_HREF} title={kind.label()}>
                                {social_icon(*kind)}
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h3 class={styles::FOOTER_TITLE}>{CONTACT_TITLE}</h3>
                    <div class="flex flex-col gap-4">
                        { for CONTACTS.iter().map(|item| html! {
                            <div class={styles::FOOTER_CONTACT}>
                                <span class={styles::FOOTER_ICON}>{contact_icon(item.kind)}</span>
                                if let Some(href) = item.href {
                                    <a class={styles::FOOTER_MAP_LINK} href={href}>{item.lines.join(" ")}</a>
                                } else {
                                    <span>
                                        { for item.lines.iter().map(|line| html! { <>{*line}<br /></> }) }
                                    </span>
                                }
                            </div>
                        }) }
                    </div>
                </div>

                <div>
                    <h3 class={styles::FOOTER_TITLE}>{QUICK_LINKS_TITLE}</h3>
                    <div class="grid grid-cols-2 gap-8">
                        { for QUICK_LINKS.iter().map(|column| html! {
                            <div class="flex flex-col gap-4">
                                { for column.iter().map(|label| html! {
                                    <a class={styles::FOOTER_LINK} href={PLACEHOLDER_HREF}>{*label}</a>
                                }) }
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class={styles::FOOTER_BOTTOM}>
                <p class={styles::FOOTER_BOTTOM_TEXT}>{COPYRIGHT}</p>
                <div class="flex gap-8">
                    { for FOOTER_LINKS.iter().map(|label| html! {
                        <a class={styles::FOOTER_BOTTOM_LINK} href={PLACEHOLDER_HREF}>{*label}</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}
