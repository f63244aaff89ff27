//! Shared page for the resources that only carry a name: categories and competences.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::{
        page::{ErrorPage, LoadingPage},
        Page,
    },
    constant::SITE_NAME,
    model::error::ApiError,
};

#[cfg(feature = "web")]
use crate::client::api::{category, competence};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NamedResource {
    Category,
    Competence,
}

/// Id and name of one listed item
#[derive(Clone, Debug, PartialEq)]
pub struct NamedItem {
    pub id: i32,
    pub name: String,
}

impl NamedResource {
    fn title(&self) -> &'static str {
        match self {
            Self::Category => "Categories",
            Self::Competence => "Competences",
        }
    }

    fn delete_hint(&self) -> Option<&'static str> {
        match self {
            Self::Category => Some("Deleting a category also deletes its courses."),
            Self::Competence => None,
        }
    }

    #[cfg(feature = "web")]
    async fn list(&self) -> Result<Vec<NamedItem>, ApiError> {
        let items = match self {
            Self::Category => category::get_categories()
                .await?
                .into_iter()
                .map(|c| NamedItem { id: c.id, name: c.name })
                .collect(),
            Self::Competence => competence::get_competences()
                .await?
                .into_iter()
                .map(|c| NamedItem { id: c.id, name: c.name })
                .collect(),
        };

        Ok(items)
    }

    #[cfg(feature = "web")]
    async fn run(&self, action: NamedAction) -> Result<(), ApiError> {
        match (self, action) {
            (Self::Category, NamedAction::Create(name)) => {
                category::create_category(name).await.map(|_| ())
            }
            (Self::Category, NamedAction::Delete(id)) => category::delete_category(id).await,
            (Self::Competence, NamedAction::Create(name)) => {
                competence::create_competence(name).await.map(|_| ())
            }
            (Self::Competence, NamedAction::Delete(id)) => {
                competence::delete_competence(id).await
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum NamedAction {
    Create(String),
    Delete(i32),
}

#[component]
pub fn NamedList(resource: NamedResource) -> Element {
    let mut items = use_signal(|| None::<Result<Vec<NamedItem>, ApiError>>);
    let mut pending_action = use_signal(|| None::<NamedAction>);
    let mut action_error = use_signal(|| None::<String>);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut new_name = use_signal(String::new);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        resource.list().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch {}: {}", resource.title(), err);
            }
            items.set(Some(result.clone()));
        }
    });

    #[cfg(feature = "web")]
    let action_future = use_resource(move || async move {
        let action = pending_action()?;
        Some(resource.run(action).await)
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = action_future.read_unchecked().as_ref() {
            match result {
                Ok(()) => {
                    action_error.set(None);
                    new_name.set(String::new());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("{} action failed: {}", resource.title(), err);
                    action_error.set(Some(err.message.clone()));
                }
            }
            pending_action.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let name = new_name().trim().to_string();
        if name.is_empty() {
            action_error.set(Some("Name is required".to_string()));
            return;
        }
        pending_action.set(Some(NamedAction::Create(name)));
    };

    let is_busy = pending_action.read().is_some();
    let title = resource.title();

    rsx! {
        Title { "Admin - {title} | {SITE_NAME}" }
        match items() {
            Some(Ok(item_list)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-2xl flex flex-col gap-6",
                        h1 { class: "text-lg sm:text-2xl", "{title}" }
                        form {
                            class: "flex gap-2",
                            onsubmit: on_submit,
                            input {
                                class: "input input-bordered flex-1",
                                placeholder: "Name",
                                value: "{new_name}",
                                oninput: move |evt| new_name.set(evt.value()),
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: is_busy,
                                "Add"
                            }
                        }
                        if let Some(message) = action_error() {
                            div { class: "alert alert-error", "{message}" }
                        }
                        if let Some(hint) = resource.delete_hint() {
                            p { class: "text-sm opacity-70", "{hint}" }
                        }
                        div {
                            class: "card bg-base-200",
                            ul {
                                class: "card-body gap-2",
                                if item_list.is_empty() {
                                    li { class: "opacity-50", "Nothing here yet" }
                                }
                                for item in item_list {
                                    li {
                                        key: "{item.id}",
                                        class: "flex items-center justify-between",
                                        span { "{item.name}" }
                                        button {
                                            class: "btn btn-xs btn-outline btn-error",
                                            disabled: is_busy,
                                            onclick: move |_| pending_action.set(Some(NamedAction::Delete(item.id))),
                                            "Delete"
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
