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
    model::{
        app_user::{AppUserDto, STUDENT_ROLE, TEACHER_ROLE},
        competence::CompetenceDto,
        course::CourseDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    app_user::{delete_user, get_role_names, get_user},
    competence::{get_competences, get_competences_by_teacher},
    course::{get_courses_by_student, get_courses_by_teacher},
    teacher_competence::{add_teacher_competence, remove_teacher_competence},
};

/// Everything the details page shows about one user
#[derive(Clone, Debug, PartialEq)]
struct UserDetails {
    user: AppUserDto,
    role_names: Vec<String>,
    enrolled: Vec<CourseDto>,
    teaching: Vec<CourseDto>,
    competences: Vec<CompetenceDto>,
    all_competences: Vec<CompetenceDto>,
}

impl UserDetails {
    fn has_role(&self, role: &str) -> bool {
        self.role_names.iter().any(|r| r == role)
    }

    /// Competences the teacher does not hold yet
    fn missing_competences(&self) -> Vec<CompetenceDto> {
        self.all_competences
            .iter()
            .filter(|c| !self.competences.iter().any(|held| held.id == c.id))
            .cloned()
            .collect()
    }
}

#[cfg(feature = "web")]
async fn load_user_details(id: String) -> Result<UserDetails, ApiError> {
    let user = get_user(&id).await?;
    let role_names = get_role_names(&id).await?;
    let enrolled = get_courses_by_student(&id).await?;
    let teaching = get_courses_by_teacher(&id).await?;
    let competences = get_competences_by_teacher(&id).await?;
    let all_competences = get_competences().await?;

    Ok(UserDetails {
        user,
        role_names,
        enrolled,
        teaching,
        competences,
        all_competences,
    })
}

#[derive(Clone, Debug, PartialEq)]
enum UserAction {
    AddCompetence(i32),
    RemoveCompetence(i32),
    Delete,
}

#[cfg(feature = "web")]
async fn run_action(user_id: &str, action: UserAction) -> Result<UserAction, ApiError> {
    match &action {
        UserAction::AddCompetence(competence_id) => {
            add_teacher_competence(user_id.to_string(), *competence_id).await?;
        }
        UserAction::RemoveCompetence(competence_id) => {
            remove_teacher_competence(user_id, *competence_id).await?;
        }
        UserAction::Delete => delete_user(user_id).await?,
    }

    Ok(action)
}

#[component]
pub fn AdminUserDetails(id: String) -> Element {
    let mut details = use_signal(|| None::<Result<UserDetails, ApiError>>);
    let mut pending_action = use_signal(|| None::<UserAction>);
    let mut action_error = use_signal(|| None::<String>);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut selected_competence = use_signal(String::new);
    let nav = navigator();

    let id = use_memo(use_reactive!(|id| id));

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        load_user_details(id()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch user details: {}", err);
            }
            details.set(Some(result.clone()));
        }
    });

    #[cfg(feature = "web")]
    let action_future = use_resource(move || async move {
        let action = pending_action()?;
        Some(run_action(&id.peek(), action).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = action_future.read_unchecked().as_ref() {
            match result {
                Ok(UserAction::Delete) => {
                    nav.push(Route::AdminUsers {});
                }
                Ok(_) => {
                    action_error.set(None);
                    selected_competence.set(String::new());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("User action failed: {}", err);
                    action_error.set(Some(err.message.clone()));
                }
            }
            pending_action.set(None);
        }
    });

    let is_busy = pending_action.read().is_some();

    rsx! {
        Title { "Admin - User | {SITE_NAME}" }
        match details() {
            Some(Ok(details)) => {
                let is_student = details.has_role(STUDENT_ROLE);
                let is_teacher = details.has_role(TEACHER_ROLE);
                let missing_competences = details.missing_competences();
                let user = details.user.clone();

                rsx! {
                    Page {
                        class: "flex flex-col items-center w-full h-full",
                        div {
                            class: "w-full max-w-4xl flex flex-col gap-6",
                            div {
                                class: "flex items-center justify-between gap-4",
                                h1 {
                                    class: "text-lg sm:text-2xl",
                                    "{user.full_name()}"
                                }
                                button {
                                    class: "btn btn-error",
                                    disabled: is_busy,
                                    onclick: move |_| pending_action.set(Some(UserAction::Delete)),
                                    "Delete User"
                                }
                            }
                            if let Some(message) = action_error() {
                                div { class: "alert alert-error", "{message}" }
                            }
                            div {
                                class: "card bg-base-200",
                                div {
                                    class: "card-body",
                                    dl {
                                        class: "grid grid-cols-[max-content_1fr] gap-x-6 gap-y-2",
                                        dt { class: "opacity-70", "Email" }
                                        dd { "{user.email}" }
                                        dt { class: "opacity-70", "Phone" }
                                        dd { {user.phone_number.clone().unwrap_or_else(|| "-".to_string())} }
                                        dt { class: "opacity-70", "Address" }
                                        dd { "{user.address_name}" }
                                        dt { class: "opacity-70", "Roles" }
                                        dd {
                                            if details.role_names.is_empty() {
                                                "-"
                                            }
                                            for role in details.role_names.iter() {
                                                span { class: "badge badge-primary mr-2", "{role}" }
                                            }
                                        }
                                    }
                                }
                            }
                            if is_student || !details.enrolled.is_empty() {
                                CourseList { title: "Enrolled courses", courses: details.enrolled.clone() }
                            }
                            if is_teacher || !details.teaching.is_empty() {
                                CourseList { title: "Teaching", courses: details.teaching.clone() }
                            }
                            if is_teacher {
                                div {
                                    class: "card bg-base-200",
                                    div {
                                        class: "card-body gap-4",
                                        h2 { class: "card-title", "Competences" }
                                        div {
                                            class: "flex flex-wrap gap-2",
                                            for competence in details.competences.clone() {
                                                span {
                                                    key: "{competence.id}",
                                                    class: "badge badge-outline gap-2",
                                                    "{competence.name}"
                                                    button {
                                                        class: "btn btn-xs btn-ghost",
                                                        disabled: is_busy,
                                                        onclick: move |_| pending_action.set(Some(UserAction::RemoveCompetence(competence.id))),
                                                        "x"
                                                    }
                                                }
                                            }
                                        }
                                        if !missing_competences.is_empty() {
                                            div {
                                                class: "flex gap-2",
                                                select {
                                                    class: "select select-bordered select-sm",
                                                    value: "{selected_competence}",
                                                    onchange: move |evt| selected_competence.set(evt.value()),
                                                    option { value: "", "Select competence" }
                                                    for competence in missing_competences {
                                                        option { value: "{competence.id}", "{competence.name}" }
                                                    }
                                                }
                                                button {
                                                    class: "btn btn-sm btn-primary",
                                                    disabled: is_busy || selected_competence.read().is_empty(),
                                                    onclick: move |_| {
                                                        if let Ok(competence_id) = selected_competence().parse::<i32>() {
                                                            pending_action.set(Some(UserAction::AddCompetence(competence_id)));
                                                        }
                                                    },
                                                    "Add"
                                                }
                                            }
                                        }
                                    }
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

#[component]
fn CourseList(title: &'static str, courses: Vec<CourseDto>) -> Element {
    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "{title}" }
                if courses.is_empty() {
                    p { class: "opacity-50", "No courses" }
                }
                ul {
                    class: "list-disc pl-6",
                    for course in courses {
                        li {
                            key: "{course.id}",
                            Link {
                                to: Route::AdminCourseDetails { id: course.id },
                                class: "link link-hover",
                                "{course.code} {course.name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
