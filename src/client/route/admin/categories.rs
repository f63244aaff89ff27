use dioxus::prelude::*;

use crate::client::route::admin::named_list::{NamedList, NamedResource};

#[component]
pub fn AdminCategories() -> Element {
    rsx! {
        NamedList { resource: NamedResource::Category }
    }
}
