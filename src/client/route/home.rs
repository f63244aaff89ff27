use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaBook, FaUsers},
    Icon,
};

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[component]
pub fn Home() -> Element {
    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center gap-8",
            h1 {
                class: "text-2xl sm:text-4xl",
                {SITE_NAME}
            }
            div {
                class: "grid grid-cols-1 md:grid-cols-2 gap-4 w-full max-w-3xl",
                Link {
                    to: Route::AdminUsers {},
                    class: "card bg-base-200 hover:bg-base-300 transition-colors",
                    div {
                        class: "card-body items-center text-center",
                        Icon { width: 40, height: 40, icon: FaUsers }
                        h2 { class: "card-title", "Administration" }
                        p {
                            class: "opacity-70",
                            "Manage students, teachers, courses and enrollments"
                        }
                    }
                }
                Link {
                    to: Route::StudentCatalog {},
                    class: "card bg-base-200 hover:bg-base-300 transition-colors",
                    div {
                        class: "card-body items-center text-center",
                        Icon { width: 40, height: 40, icon: FaBook }
                        h2 { class: "card-title", "Students" }
                        p {
                            class: "opacity-70",
                            "Browse the course catalog and follow your courses"
                        }
                    }
                }
            }
        }
    }
}
