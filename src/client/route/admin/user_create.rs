use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::Page, constant::SITE_NAME, router::Route},
    model::{
        address::CreateAddressDto,
        app_user::{CreateAppUserDto, STUDENT_ROLE, TEACHER_ROLE},
    },
};

#[cfg(feature = "web")]
use crate::client::api::app_user::create_user_with_address;

/// Form field values
#[derive(Clone, Debug, Default, PartialEq)]
struct UserFormData {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    street: String,
    street_number: String,
    postal_code: String,
    city: String,
    country: String,
    role_name: String,
}

impl UserFormData {
    fn validate(&self) -> Result<(), String> {
        let required = [
            (&self.first_name, "First name"),
            (&self.last_name, "Last name"),
            (&self.email, "Email"),
            (&self.street, "Street"),
            (&self.street_number, "Street number"),
            (&self.postal_code, "Postal code"),
            (&self.city, "City"),
            (&self.country, "Country"),
        ];

        match required.iter().find(|(value, _)| value.trim().is_empty()) {
            Some((_, label)) => Err(format!("{} is required", label)),
            None => Ok(()),
        }
    }

    /// Splits the form into the address payload and the user payload.
    ///
    /// The user's `address_id` is filled in once the address has been created.
    fn into_payloads(self) -> (CreateAddressDto, CreateAppUserDto) {
        let address = CreateAddressDto {
            street: self.street.trim().to_string(),
            street_number: self.street_number.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            city: self.city.trim().to_string(),
            country: self.country.trim().to_string(),
        };

        let phone_number = Some(self.phone_number.trim().to_string()).filter(|p| !p.is_empty());
        let role_name = Some(self.role_name).filter(|r| !r.is_empty());

        let user = CreateAppUserDto {
            email: self.email.trim().to_string(),
            phone_number,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address_id: 0,
            role_name,
        };

        (address, user)
    }
}

#[component]
pub fn AdminUserCreate() -> Element {
    let mut form = use_signal(|| UserFormData {
        role_name: STUDENT_ROLE.to_string(),
        ..Default::default()
    });
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let nav = navigator();

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            let (address, user) = form.peek().clone().into_payloads();
            Some(create_user_with_address(address, user).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(id) => {
                    nav.push(Route::AdminUserDetails { id: id.clone() });
                }
                Err(err) => {
                    tracing::error!("Creating the user failed: {}", err);
                    error.set(Some(err.message.clone()));
                    should_submit.set(false);
                }
            }
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if let Err(message) = form.read().validate() {
            error.set(Some(message));
            return;
        }

        error.set(None);
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx! {
        Title { "Admin - Create User | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            form {
                class: "card bg-base-200 w-full max-w-3xl",
                onsubmit: on_submit,
                div {
                    class: "card-body gap-4",
                    h1 {
                        class: "card-title text-lg sm:text-2xl",
                        "Create User"
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        TextField {
                            label: "First name",
                            value: form.read().first_name.clone(),
                            disabled: is_submitting,
                            oninput: move |v| form.write().first_name = v,
                        }
                        TextField {
                            label: "Last name",
                            value: form.read().last_name.clone(),
                            disabled: is_submitting,
                            oninput: move |v| form.write().last_name = v,
                        }
                        TextField {
                            label: "Email",
                            value: form.read().email.clone(),
                            disabled: is_submitting,
                            oninput: move |v| form.write().email = v,
                        }
                        TextField {
                            label: "Phone number",
                            value: form.read().phone_number.clone(),
                            disabled: is_submitting,
                            oninput: move |v| form.write().phone_number = v,
                        }
                    }
                    h2 { class: "font-semibold", "Address" }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        TextField {
                            label: "Street",
                            value: form.read().street.clone(),
                            disabled: is_submitting,
                            oninput: move |v| form.write().street = v,
                        }
                        TextField {
                            label: "Street number",
                            value: form.read().street_number.clone(),
                            disabled: is_submitting,
                            oninput: move |v| form.write().street_number = v,
                        }
                        TextField {
                            label: "Postal code",
                            value: form.read().postal_code.clone(),
                            disabled: is_submitting,
                            oninput: move |v| form.write().postal_code = v,
                        }
                        TextField {
                            label: "City",
                            value: form.read().city.clone(),
                            disabled: is_submitting,
                            oninput: move |v| form.write().city = v,
                        }
                        TextField {
                            label: "Country",
                            value: form.read().country.clone(),
                            disabled: is_submitting,
                            oninput: move |v| form.write().country = v,
                        }
                        label {
                            class: "form-control w-full",
                            span { class: "label-text mb-1", "Role" }
                            select {
                                class: "select select-bordered w-full",
                                value: "{form.read().role_name}",
                                disabled: is_submitting,
                                onchange: move |evt| form.write().role_name = evt.value(),
                                option { value: STUDENT_ROLE, {STUDENT_ROLE} }
                                option { value: TEACHER_ROLE, {TEACHER_ROLE} }
                                option { value: "", "No role" }
                            }
                        }
                    }
                    if let Some(message) = error() {
                        div {
                            class: "alert alert-error",
                            "{message}"
                        }
                    }
                    div {
                        class: "card-actions justify-end",
                        Link {
                            to: Route::AdminUsers {},
                            class: "btn btn-ghost",
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting,
                            if is_submitting {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Create"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TextField(
    label: &'static str,
    value: String,
    disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            class: "form-control w-full",
            span { class: "label-text mb-1", "{label}" }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                value: "{value}",
                disabled,
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> UserFormData {
        UserFormData {
            first_name: "Anna".to_string(),
            last_name: "Berg".to_string(),
            email: " anna@westcoast.se ".to_string(),
            phone_number: String::new(),
            street: "Kungsgatan".to_string(),
            street_number: "12".to_string(),
            postal_code: "41119".to_string(),
            city: "Göteborg".to_string(),
            country: "Sweden".to_string(),
            role_name: STUDENT_ROLE.to_string(),
        }
    }

    /// Tests that a form missing a required field fails validation.
    ///
    /// Expected: Err naming the first empty field
    #[test]
    fn rejects_missing_required_field() {
        let form = UserFormData {
            city: "  ".to_string(),
            ..filled_form()
        };

        assert_eq!(form.validate(), Err("City is required".to_string()));
        assert_eq!(filled_form().validate(), Ok(()));
    }

    /// Tests splitting the form into address and user payloads.
    ///
    /// Expected: trimmed values, empty phone number becomes None, role kept
    #[test]
    fn splits_form_into_payloads() {
        let (address, user) = filled_form().into_payloads();

        assert_eq!(address.street, "Kungsgatan");
        assert_eq!(address.postal_code, "41119");
        assert_eq!(user.email, "anna@westcoast.se");
        assert_eq!(user.phone_number, None);
        assert_eq!(user.role_name.as_deref(), Some(STUDENT_ROLE));
    }

    /// Tests that choosing "No role" sends no role name.
    ///
    /// Expected: role_name is None
    #[test]
    fn empty_role_is_omitted() {
        let form = UserFormData {
            role_name: String::new(),
            ..filled_form()
        };

        let (_, user) = form.into_payloads();

        assert_eq!(user.role_name, None);
    }
}
