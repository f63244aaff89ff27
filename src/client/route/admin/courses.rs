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
        category::CategoryDto,
        course::{CourseDto, CreateCourseDto},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    category::get_categories,
    course::{create_course, get_courses},
};

#[cfg(feature = "web")]
async fn load_courses() -> Result<(Vec<CourseDto>, Vec<CategoryDto>), ApiError> {
    Ok((get_courses().await?, get_categories().await?))
}

/// Form field values
#[derive(Clone, Debug, Default, PartialEq)]
struct CourseFormData {
    code: String,
    name: String,
    summary: String,
    description: String,
    days: String,
    hours: String,
    category_id: String,
}

fn optional_text(value: &str) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

impl CourseFormData {
    /// Validates the form and builds the create payload
    fn to_payload(&self) -> Result<CreateCourseDto, String> {
        if self.code.trim().is_empty() || self.name.trim().is_empty() {
            return Err("Code and name are required".to_string());
        }

        let category_id = self
            .category_id
            .parse::<i32>()
            .map_err(|_| "Select a category".to_string())?;

        let days = match optional_text(&self.days) {
            Some(days) => Some(
                days.parse::<i32>()
                    .map_err(|_| "Days must be a whole number".to_string())?,
            ),
            None => None,
        };

        let hours = match optional_text(&self.hours) {
            Some(hours) => Some(
                hours
                    .replace(',', ".")
                    .parse::<f64>()
                    .map_err(|_| "Hours must be a number".to_string())?,
            ),
            None => None,
        };

        Ok(CreateCourseDto {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            summary: optional_text(&self.summary),
            description: optional_text(&self.description),
            days,
            hours,
            category_id,
        })
    }
}

#[component]
pub fn AdminCourses() -> Element {
    let mut data = use_signal(|| None::<Result<(Vec<CourseDto>, Vec<CategoryDto>), ApiError>>);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut form = use_signal(CourseFormData::default);
    let mut submit_payload = use_signal(|| None::<CreateCourseDto>);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        load_courses().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch courses: {}", err);
            }
            data.set(Some(result.clone()));
        }
    });

    #[cfg(feature = "web")]
    let create_future = use_resource(move || async move {
        let payload = submit_payload()?;
        Some(create_course(&payload).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = create_future.read_unchecked().as_ref() {
            match result {
                Ok(_) => {
                    form.set(CourseFormData::default());
                    error.set(None);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to create course: {}", err);
                    error.set(Some(err.message.clone()));
                }
            }
            submit_payload.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        match form.read().to_payload() {
            Ok(payload) => {
                error.set(None);
                submit_payload.set(Some(payload));
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let is_submitting = submit_payload.read().is_some();

    rsx! {
        Title { "Admin - Courses | {SITE_NAME}" }
        match data() {
            Some(Ok((courses, categories))) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl flex flex-col gap-6",
                        h1 { class: "text-lg sm:text-2xl", "Courses" }
                        div {
                            class: "overflow-x-auto card bg-base-200",
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "Code" }
                                        th { "Name" }
                                        th { "Category" }
                                        th { "Days" }
                                        th { "Hours" }
                                    }
                                }
                                tbody {
                                    for course in courses {
                                        tr {
                                            key: "{course.id}",
                                            td { "{course.code}" }
                                            td {
                                                Link {
                                                    to: Route::AdminCourseDetails { id: course.id },
                                                    class: "link link-hover",
                                                    "{course.name}"
                                                }
                                            }
                                            td { "{course.category_name}" }
                                            td { {course.days.map(|d| d.to_string()).unwrap_or_default()} }
                                            td { {course.hours.map(|h| h.to_string()).unwrap_or_default()} }
                                        }
                                    }
                                }
                            }
                        }
                        form {
                            class: "card bg-base-200",
                            onsubmit: on_submit,
                            div {
                                class: "card-body gap-4",
                                h2 { class: "card-title", "New course" }
                                div {
                                    class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                                    input {
                                        class: "input input-bordered",
                                        placeholder: "Code",
                                        value: "{form.read().code}",
                                        oninput: move |evt| form.write().code = evt.value(),
                                    }
                                    input {
                                        class: "input input-bordered",
                                        placeholder: "Name",
                                        value: "{form.read().name}",
                                        oninput: move |evt| form.write().name = evt.value(),
                                    }
                                    select {
                                        class: "select select-bordered",
                                        value: "{form.read().category_id}",
                                        onchange: move |evt| form.write().category_id = evt.value(),
                                        option { value: "", "Select category" }
                                        for category in categories {
                                            option { value: "{category.id}", "{category.name}" }
                                        }
                                    }
                                    input {
                                        class: "input input-bordered",
                                        placeholder: "Days",
                                        value: "{form.read().days}",
                                        oninput: move |evt| form.write().days = evt.value(),
                                    }
                                    input {
                                        class: "input input-bordered",
                                        placeholder: "Hours",
                                        value: "{form.read().hours}",
                                        oninput: move |evt| form.write().hours = evt.value(),
                                    }
                                    input {
                                        class: "input input-bordered",
                                        placeholder: "Summary",
                                        value: "{form.read().summary}",
                                        oninput: move |evt| form.write().summary = evt.value(),
                                    }
                                }
                                textarea {
                                    class: "textarea textarea-bordered h-32",
                                    placeholder: "Description (Markdown)",
                                    value: "{form.read().description}",
                                    oninput: move |evt| form.write().description = evt.value(),
                                }
                                if let Some(message) = error() {
                                    div { class: "alert alert-error", "{message}" }
                                }
                                div {
                                    class: "card-actions justify-end",
                                    button {
                                        r#type: "submit",
                                        class: "btn btn-primary",
                                        disabled: is_submitting,
                                        "Create"
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

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CourseFormData {
        CourseFormData {
            code: "RUST-101".to_string(),
            name: "Rust basics".to_string(),
            category_id: "3".to_string(),
            ..Default::default()
        }
    }

    /// Tests building a payload from a form with optional fields left empty.
    ///
    /// Expected: optional fields are None
    #[test]
    fn builds_payload_without_optional_fields() {
        let payload = form().to_payload().unwrap();

        assert_eq!(payload.category_id, 3);
        assert_eq!(payload.summary, None);
        assert_eq!(payload.days, None);
        assert_eq!(payload.hours, None);
    }

    /// Tests parsing of days and hours, accepting a decimal comma.
    ///
    /// Expected: days 5 and hours 7.5
    #[test]
    fn parses_days_and_hours() {
        let payload = CourseFormData {
            days: "5".to_string(),
            hours: "7,5".to_string(),
            ..form()
        }
        .to_payload()
        .unwrap();

        assert_eq!(payload.days, Some(5));
        assert_eq!(payload.hours, Some(7.5));
    }

    /// Tests that a course without category is rejected.
    ///
    /// Expected: Err asking to select a category
    #[test]
    fn requires_category() {
        let result = CourseFormData {
            category_id: String::new(),
            ..form()
        }
        .to_payload();

        assert_eq!(result, Err("Select a category".to_string()));
    }
}
