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
    model::{app_user::AppUserDto, course::CourseDto},
};

#[cfg(feature = "web")]
use crate::client::{
    api::{
        app_user::{get_students_by_course, get_teachers_by_course, get_users},
        course::{delete_course, get_course},
        student_course::{enroll_student, unenroll_student},
        teacher_course::{assign_teacher, unassign_teacher},
    },
    model::user_filter::UserFilter,
};

#[derive(Clone, Debug, PartialEq)]
struct CourseDetails {
    course: CourseDto,
    students: Vec<AppUserDto>,
    teachers: Vec<AppUserDto>,
    all_students: Vec<AppUserDto>,
    all_teachers: Vec<AppUserDto>,
}

/// Users of `all` that are not part of `current`
fn not_in(all: &[AppUserDto], current: &[AppUserDto]) -> Vec<AppUserDto> {
    all.iter()
        .filter(|u| !current.iter().any(|c| c.id == u.id))
        .cloned()
        .collect()
}

#[cfg(feature = "web")]
async fn load_course_details(id: i32) -> Result<CourseDetails, ApiError> {
    Ok(CourseDetails {
        course: get_course(id).await?,
        students: get_students_by_course(id).await?,
        teachers: get_teachers_by_course(id).await?,
        all_students: get_users(UserFilter::Students).await?,
        all_teachers: get_users(UserFilter::Teachers).await?,
    })
}

#[derive(Clone, Debug, PartialEq)]
enum CourseAction {
    Enroll(String),
    Unenroll(String),
    Assign(String),
    Unassign(String),
    Delete,
}

#[cfg(feature = "web")]
async fn run_action(course_id: i32, action: CourseAction) -> Result<CourseAction, ApiError> {
    match &action {
        CourseAction::Enroll(student_id) => {
            enroll_student(student_id.clone(), course_id).await?;
        }
        CourseAction::Unenroll(student_id) => unenroll_student(student_id, course_id).await?,
        CourseAction::Assign(teacher_id) => {
            assign_teacher(teacher_id.clone(), course_id).await?;
        }
        CourseAction::Unassign(teacher_id) => unassign_teacher(teacher_id, course_id).await?,
        CourseAction::Delete => delete_course(course_id).await?,
    }

    Ok(action)
}

#[component]
pub fn AdminCourseDetails(id: i32) -> Element {
    let mut details = use_signal(|| None::<Result<CourseDetails, ApiError>>);
    let mut pending_action = use_signal(|| None::<CourseAction>);
    let mut action_error = use_signal(|| None::<String>);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut selected_student = use_signal(String::new);
    let mut selected_teacher = use_signal(String::new);
    let nav = navigator();

    let id = use_memo(use_reactive!(|id| id));

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        load_course_details(id()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch course details: {}", err);
            }
            details.set(Some(result.clone()));
        }
    });

    #[cfg(feature = "web")]
    let action_future = use_resource(move || async move {
        let action = pending_action()?;
        Some(run_action(*id.peek(), action).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = action_future.read_unchecked().as_ref() {
            match result {
                Ok(CourseAction::Delete) => {
                    nav.push(Route::AdminCourses {});
                }
                Ok(_) => {
                    action_error.set(None);
                    selected_student.set(String::new());
                    selected_teacher.set(String::new());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Course action failed: {}", err);
                    action_error.set(Some(err.message.clone()));
                }
            }
            pending_action.set(None);
        }
    });

    let is_busy = pending_action.read().is_some();

    rsx! {
        Title { "Admin - Course | {SITE_NAME}" }
        match details() {
            Some(Ok(details)) => {
                let course = details.course.clone();
                let available_students = not_in(&details.all_students, &details.students);
                let available_teachers = not_in(&details.all_teachers, &details.teachers);

                rsx! {
                    Page {
                        class: "flex flex-col items-center w-full h-full",
                        div {
                            class: "w-full max-w-4xl flex flex-col gap-6",
                            div {
                                class: "flex items-center justify-between gap-4",
                                div {
                                    h1 { class: "text-lg sm:text-2xl", "{course.code} {course.name}" }
                                    p { class: "opacity-70", "{course.category_name}" }
                                }
                                button {
                                    class: "btn btn-error",
                                    disabled: is_busy,
                                    onclick: move |_| pending_action.set(Some(CourseAction::Delete)),
                                    "Delete Course"
                                }
                            }
                            if let Some(message) = action_error() {
                                div { class: "alert alert-error", "{message}" }
                            }
                            if let Some(summary) = course.summary.clone() {
                                p { "{summary}" }
                            }
                            MemberCard {
                                title: "Students",
                                members: details.students.clone(),
                                available: available_students,
                                selected: selected_student,
                                add_label: "Enroll",
                                disabled: is_busy,
                                on_add: move |user_id| pending_action.set(Some(CourseAction::Enroll(user_id))),
                                on_remove: move |user_id| pending_action.set(Some(CourseAction::Unenroll(user_id))),
                            }
                            MemberCard {
                                title: "Teachers",
                                members: details.teachers.clone(),
                                available: available_teachers,
                                selected: selected_teacher,
                                add_label: "Assign",
                                disabled: is_busy,
                                on_add: move |user_id| pending_action.set(Some(CourseAction::Assign(user_id))),
                                on_remove: move |user_id| pending_action.set(Some(CourseAction::Unassign(user_id))),
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

/// Lists the students or teachers of a course with controls to add and remove them
#[component]
fn MemberCard(
    title: &'static str,
    members: Vec<AppUserDto>,
    available: Vec<AppUserDto>,
    mut selected: Signal<String>,
    add_label: &'static str,
    disabled: bool,
    on_add: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                h2 { class: "card-title", "{title}" }
                if members.is_empty() {
                    p { class: "opacity-50", "None" }
                }
                ul {
                    class: "flex flex-col gap-2",
                    for member in members {
                        {
                            let member_id = member.id.clone();
                            rsx! {
                                li {
                                    key: "{member.id}",
                                    class: "flex items-center justify-between gap-2",
                                    Link {
                                        to: Route::AdminUserDetails { id: member.id.clone() },
                                        class: "link link-hover",
                                        "{member.full_name()}"
                                    }
                                    button {
                                        class: "btn btn-xs btn-outline btn-error",
                                        disabled,
                                        onclick: move |_| on_remove.call(member_id.clone()),
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                }
                if !available.is_empty() {
                    div {
                        class: "flex gap-2",
                        select {
                            class: "select select-bordered select-sm",
                            value: "{selected}",
                            onchange: move |evt| selected.set(evt.value()),
                            option { value: "", "Select" }
                            for user in available {
                                option { value: "{user.id}", "{user.full_name()}" }
                            }
                        }
                        button {
                            class: "btn btn-sm btn-primary",
                            disabled: disabled || selected.read().is_empty(),
                            onclick: move |_| on_add.call(selected()),
                            "{add_label}"
                        }
                    }
                }
            }
        }
    }
}
