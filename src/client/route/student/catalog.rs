use dioxus::prelude::*;
use dioxus_logger::tracing;

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
    model::{category::CategoryDto, course::CourseDto},
};

#[cfg(feature = "web")]
use crate::client::api::{
    category::get_categories,
    course::{get_courses, get_courses_by_category},
};

#[component]
pub fn StudentCatalog() -> Element {
    let mut category_filter = use_signal(|| None::<i32>);
    let mut categories = use_signal(Vec::<CategoryDto>::new);
    let mut courses = use_signal(|| None::<Result<Vec<CourseDto>, ApiError>>);

    #[cfg(feature = "web")]
    let categories_future = use_resource(|| async move { get_categories().await });

    #[cfg(feature = "web")]
    use_effect(move || match categories_future.read_unchecked().as_ref() {
        Some(Ok(list)) => categories.set(list.clone()),
        Some(Err(err)) => tracing::error!("Failed to fetch categories: {}", err),
        None => (),
    });

    #[cfg(feature = "web")]
    let courses_future = use_resource(move || async move {
        match category_filter() {
            Some(category_id) => get_courses_by_category(category_id).await,
            None => get_courses().await,
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = courses_future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch courses: {}", err);
            }
            courses.set(Some(result.clone()));
        }
    });

    let selected_value = category_filter()
        .map(|id| id.to_string())
        .unwrap_or_default();

    rsx! {
        Title { "Courses | {SITE_NAME}" }
        match courses() {
            Some(Ok(course_list)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        div {
                            class: "flex items-center justify-between gap-4",
                            h1 { class: "text-lg sm:text-2xl", "Course catalog" }
                            select {
                                class: "select select-bordered",
                                value: "{selected_value}",
                                onchange: move |evt| category_filter.set(evt.value().parse::<i32>().ok()),
                                option { value: "", "All categories" }
                                for category in categories() {
                                    option { value: "{category.id}", "{category.name}" }
                                }
                            }
                        }
                        if course_list.is_empty() {
                            div { class: "text-center py-8 opacity-50", "No courses found" }
                        }
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                            for course in course_list {
                                Link {
                                    key: "{course.id}",
                                    to: Route::StudentCourseDetails { id: course.id },
                                    class: "card bg-base-200 hover:bg-base-300 transition-colors",
                                    div {
                                        class: "card-body",
                                        p { class: "text-sm opacity-70", "{course.code} · {course.category_name}" }
                                        h2 { class: "card-title", "{course.name}" }
                                        if let Some(summary) = course.summary.clone() {
                                            p { "{summary}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            None => rsx! {
                LoadingPage {}
            },
        }
    }
}
