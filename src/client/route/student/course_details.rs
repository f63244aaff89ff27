use dioxus::prelude::*;
use dioxus_logger::tracing;
use pulldown_cmark::{html, Options, Parser};

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::course::CourseDto,
};

#[cfg(feature = "web")]
use crate::client::api::course::get_course;

/// Renders a Markdown course description to HTML
fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Formats the course length, e.g. "5 days, 40 hours"
fn course_length(course: &CourseDto) -> Option<String> {
    let parts: Vec<String> = [
        course.days.map(|d| format!("{} days", d)),
        course.hours.map(|h| format!("{} hours", h)),
    ]
    .into_iter()
    .flatten()
    .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}

#[component]
pub fn StudentCourseDetails(id: i32) -> Element {
    let mut course = use_signal(|| None::<Result<CourseDto, ApiError>>);

    let id = use_memo(use_reactive!(|id| id));

    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_course(id()).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch course: {}", err);
            }
            course.set(Some(result.clone()));
        }
    });

    rsx! {
        match course() {
            Some(Ok(course)) => {
                let description = course.description.as_deref().map(render_markdown);
                let length = course_length(&course);

                rsx! {
                    Title { "{course.name} | {SITE_NAME}" }
                    Page {
                        class: "flex flex-col items-center w-full h-full",
                        div {
                            class: "w-full max-w-3xl flex flex-col gap-4",
                            Link {
                                to: Route::StudentCatalog {},
                                class: "link link-hover text-sm",
                                "Back to catalog"
                            }
                            div {
                                p { class: "text-sm opacity-70", "{course.code} · {course.category_name}" }
                                h1 { class: "text-2xl sm:text-3xl", "{course.name}" }
                            }
                            if let Some(length) = length {
                                span { class: "badge badge-outline", "{length}" }
                            }
                            if let Some(summary) = course.summary.clone() {
                                p { class: "text-lg", "{summary}" }
                            }
                            if let Some(description) = description {
                                div {
                                    class: "markdown",
                                    dangerous_inner_html: "{description}"
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            None => rsx! {
                LoadingPage {}
            },
        }
    }
}
