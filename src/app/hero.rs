use leptos::prelude::*;

use crate::site::SiteData;

use super::animations::Sky;

pub const NAME: &str = "hiroppy";
pub const SPONSOR_URL: &str = "https://github.com/sponsors/hiroppy";
pub const SPONSOR_COLOR: &str = "#e85b46";

/// Landing section. Takes fully resolved data; anything missing is left out.
#[component]
pub fn Hero(data: SiteData) -> impl IntoView {
    let avatar = data.avatar_src().map(str::to_string);
    let links = data.social_links();

    view! {
        <section class="hero relative flex flex-col justify-center items-center w-full min-h-screen overflow-hidden text-center bg-black text-white">
            <Sky />
            {avatar.map(|src| view! { <Avatar src /> })}
            <h1 class="transition text-5xl font-bold">{NAME}</h1>
            <br />
            <AccentLink href=SPONSOR_URL color=SPONSOR_COLOR class="sponsor-link transition text-[2rem]">
                "Support hiroppy as a sponsor"
            </AccentLink>
            <br />
            <h3 class="transition text-2xl">"I am a JavaScript junkie!"</h3>
            <p class="transition">
                "Working on Node.js, webpack, babel, and Japan Node.js Association."
            </p>
            <div class="transition flex flex-wrap justify-center gap-4 my-4">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <AccentLink
                                href=link.url
                                color=link.color
                                class="social-link text-[1.8rem]"
                            >
                                {link.label}
                            </AccentLink>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Avatar(src: String) -> impl IntoView {
    view! {
        <div
            class="avatar transition w-[120px] h-[120px] rounded-full bg-contain bg-center bg-no-repeat"
            style=format!("background-image: url('{src}')")
        ></div>
    }
}

#[component]
fn AccentLink(
    #[prop(into)] href: String,
    #[prop(into)] color: String,
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=format!("accent-link {class}")
            style=format!("--accent: {color}")
        >
            {children()}
        </a>
    }
}
