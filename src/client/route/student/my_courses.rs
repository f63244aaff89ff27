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
    model::{app_user::AppUserDto, student_course::StudentCourseDto},
};

#[cfg(feature = "web")]
use crate::client::{
    api::{app_user::get_users, student_course::get_enrollments_by_student},
    model::user_filter::UserFilter,
};

fn status_label(enrollment: &StudentCourseDto) -> &'static str {
    if enrollment.is_completed {
        "Completed"
    } else if enrollment.is_started {
        "In progress"
    } else {
        "Not started"
    }
}

#[component]
pub fn StudentMyCourses() -> Element {
    let mut students = use_signal(|| None::<Result<Vec<AppUserDto>, ApiError>>);
    let mut student_id = use_signal(String::new);
    let mut enrollments = use_signal(|| None::<Result<Vec<StudentCourseDto>, ApiError>>);

    #[cfg(feature = "web")]
    let students_future = use_resource(|| async move { get_users(UserFilter::Students).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = students_future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch students: {}", err);
            }
            students.set(Some(result.clone()));
        }
    });

    #[cfg(feature = "web")]
    let enrollments_future = use_resource(move || async move {
        let student_id = student_id();
        if student_id.is_empty() {
            None
        } else {
            Some(get_enrollments_by_student(&student_id).await)
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || match enrollments_future.read_unchecked().as_ref() {
        Some(Some(result)) => {
            if let Err(err) = result {
                tracing::error!("Failed to fetch enrollments: {}", err);
            }
            enrollments.set(Some(result.clone()));
        }
        Some(None) => enrollments.set(None),
        None => (),
    });

    rsx! {
        Title { "My courses | {SITE_NAME}" }
        match students() {
            Some(Ok(student_list)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-6",
                        div {
                            class: "flex items-center justify-between gap-4",
                            h1 { class: "text-lg sm:text-2xl", "My courses" }
                            select {
                                class: "select select-bordered",
                                value: "{student_id}",
                                onchange: move |evt| student_id.set(evt.value()),
                                option { value: "", "Who are you?" }
                                for student in student_list {
                                    option { value: "{student.id}", "{student.full_name()}" }
                                }
                            }
                        }
                        match enrollments() {
                            Some(Ok(list)) if list.is_empty() => rsx! {
                                div { class: "text-center py-8 opacity-50", "Not enrolled in any course" }
                            },
                            Some(Ok(list)) => rsx! {
                                div {
                                    class: "overflow-x-auto card bg-base-200",
                                    table {
                                        class: "table w-full",
                                        thead {
                                            tr {
                                                th { "Course" }
                                                th { "Status" }
                                                th { "Grade" }
                                            }
                                        }
                                        tbody {
                                            for enrollment in list {
                                                tr {
                                                    key: "{enrollment.course_id}",
                                                    td {
                                                        Link {
                                                            to: Route::StudentCourseDetails { id: enrollment.course_id },
                                                            class: "link link-hover",
                                                            "{enrollment.course_name}"
                                                        }
                                                    }
                                                    td { {status_label(&enrollment)} }
                                                    td { {enrollment.grade.clone().unwrap_or_else(|| "-".to_string())} }
                                                }
                                            }
                                        }
                                    }
                                }
                            },
                            Some(Err(err)) => rsx! {
                                div { class: "alert alert-error", "{err.message}" }
                            },
                            None => rsx! {},
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
