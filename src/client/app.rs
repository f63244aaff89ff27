use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, router::Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISY_UI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Course administration and course catalog for Westcoast Education"
        }
        document::Link { rel: "stylesheet", href: DAISY_UI_CSS }
        document::Script { src: TAILWIND_JS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
