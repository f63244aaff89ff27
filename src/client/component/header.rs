use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaAward, FaBook, FaBookOpen, FaGraduationCap, FaTags, FaUsers},
    Icon,
};

use crate::client::{constant::SITE_NAME, router::Route};

#[component]
pub fn Header() -> Element {
    let route = use_route::<Route>();
    let in_admin = route.to_string().starts_with("/admin");
    let in_student = route.to_string().starts_with("/student");

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 32,
                        height: 32,
                        icon: FaGraduationCap
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if in_admin {
                HeaderLink {
                    to: Route::AdminUsers {},
                    label: "Users",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaUsers })
                }
                HeaderLink {
                    to: Route::AdminCourses {},
                    label: "Courses",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaBook })
                }
                HeaderLink {
                    to: Route::AdminCategories {},
                    label: "Categories",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaTags })
                }
                HeaderLink {
                    to: Route::AdminCompetences {},
                    label: "Competences",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaAward })
                }
            } else if in_student {
                HeaderLink {
                    to: Route::StudentCatalog {},
                    label: "Catalog",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaBook })
                }
                HeaderLink {
                    to: Route::StudentMyCourses {},
                    label: "My courses",
                    icon: rsx!(Icon { width: 16, height: 16, icon: FaBookOpen })
                }
            } else {
                Link {
                    to: Route::AdminUsers {},
                    class: "btn btn-outline",
                    "Admin"
                }
                Link {
                    to: Route::StudentCatalog {},
                    class: "btn btn-outline",
                    "Student"
                }
            }
        }
    })
}

#[component]
fn HeaderLink(to: Route, label: &'static str, icon: Element) -> Element {
    rsx!(
        Link {
            to,
            class: "btn btn-ghost flex gap-2 items-center",
            {icon}
            span { class: "hidden md:inline", "{label}" }
        }
    )
}
