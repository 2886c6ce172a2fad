use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use leptos_meta::Title;

#[cfg(feature = "ssr")]
use crate::site::site_data;
use crate::site::SiteData;

use super::hero::Hero;

#[server(input = GetUrl)]
pub async fn get_site_data() -> Result<SiteData, ServerFnError> {
    Ok(site_data())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let data = Resource::new(
        || (),
        |_| async {
            // the hero still renders its static content without data
            get_site_data().await.unwrap_or_else(|e| {
                log::warn!("couldn't load site data: {e}");
                SiteData::default()
            })
        },
    );

    view! {
        <Title text="Home" />
        <Suspense fallback=move || {
            view! { <section class="hero w-full min-h-screen bg-black"></section> }
        }>
            {move || Suspend::new(async move {
                let data = data.await;
                view! { <Hero data /> }
            })}
        </Suspense>
    }
}
