use leptos::prelude::*;

pub const STAR_COUNT: usize = 29;
pub const METEOR_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeteorKind {
    First,
    Second,
}

impl MeteorKind {
    fn class(self) -> &'static str {
        match self {
            Self::First => "meteor meteor-1",
            Self::Second => "meteor meteor-2",
        }
    }
}

/// The night sky behind the hero. Always the same number of elements.
#[component]
pub fn Sky() -> impl IntoView {
    view! {
        <div>{(0..STAR_COUNT).map(|index| view! { <Star index /> }).collect_view()}</div>
        {(0..METEOR_COUNT)
            .map(|index| view! { <Meteor kind=MeteorKind::First index /> })
            .collect_view()}
        {(0..METEOR_COUNT)
            .map(|index| view! { <Meteor kind=MeteorKind::Second index /> })
            .collect_view()}
    }
}

// scatter is deterministic so server and client markup agree
#[component]
fn Star(index: usize) -> impl IntoView {
    let top = (index * 53 + 17) % 100;
    let left = (index * 29 + 7) % 100;
    let delay = (index % 7) as f32 * 0.4;
    view! {
        <div
            class="star"
            style=format!("top: {top}%; left: {left}%; animation-delay: {delay:.1}s")
        ></div>
    }
}

#[component]
fn Meteor(kind: MeteorKind, index: usize) -> impl IntoView {
    let left = match kind {
        MeteorKind::First => 10 + index * 22,
        MeteorKind::Second => 20 + index * 19,
    };
    let delay = index as f32 * 1.5;
    view! {
        <div
            class=kind.class()
            style=format!("left: {left}%; animation-delay: {delay:.1}s")
        ></div>
    }
}
