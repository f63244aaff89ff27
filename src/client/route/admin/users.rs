use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::{error::ApiError, user_filter::UserFilter},
        router::Route,
    },
    model::app_user::AppUserDto,
};

#[cfg(feature = "web")]
use crate::client::api::app_user::get_users;

#[component]
pub fn AdminUsers() -> Element {
    let mut filter = use_signal(UserFilter::default);
    let mut users = use_signal(|| None::<Result<Vec<AppUserDto>, ApiError>>);

    // Refetches whenever the filter changes
    #[cfg(feature = "web")]
    let future = use_resource(move || async move { get_users(filter()).await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch users: {}", err);
            }
            users.set(Some(result.clone()));
        }
    });

    rsx! {
        Title { "Admin - Users | {SITE_NAME}" }
        match users() {
            Some(Ok(user_list)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl",
                        div {
                            class: "flex items-center justify-between gap-4 mb-6",
                            h1 {
                                class: "text-lg sm:text-2xl",
                                "Users"
                            }
                            Link {
                                to: Route::AdminUserCreate {},
                                class: "btn btn-primary",
                                "Create User"
                            }
                        }
                        div {
                            role: "tablist",
                            class: "tabs tabs-boxed mb-4",
                            for option in UserFilter::ALL {
                                a {
                                    role: "tab",
                                    class: if filter() == option { "tab tab-active" } else { "tab" },
                                    onclick: move |_| filter.set(option),
                                    "{option.label()}"
                                }
                            }
                        }
                        UserTable { users: user_list }
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

#[component]
fn UserTable(users: Vec<AppUserDto>) -> Element {
    rsx! {
        if users.is_empty() {
            div {
                class: "text-center py-8 opacity-50",
                "No users found"
            }
        } else {
            div {
                class: "overflow-x-auto card bg-base-200",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Phone" }
                            th { "Address" }
                        }
                    }
                    tbody {
                        for user in users {
                            tr {
                                key: "{user.id}",
                                td {
                                    Link {
                                        to: Route::AdminUserDetails { id: user.id.clone() },
                                        class: "link link-hover",
                                        "{user.full_name()}"
                                    }
                                }
                                td { "{user.email}" }
                                td { {user.phone_number.clone().unwrap_or_default()} }
                                td { "{user.address_name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
