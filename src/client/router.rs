use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{
    admin::{
        AdminCategories, AdminCompetences, AdminCourseDetails, AdminCourses, AdminUserCreate,
        AdminUserDetails, AdminUsers,
    },
    student::{StudentCatalog, StudentCourseDetails, StudentMyCourses},
    Home, NotFound,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[nest("/admin")]
        #[route("/")]
        AdminUsers {},

        #[route("/users/create")]
        AdminUserCreate {},

        #[route("/users/:id")]
        AdminUserDetails { id: String },

        #[route("/courses")]
        AdminCourses {},

        #[route("/courses/:id")]
        AdminCourseDetails { id: i32 },

        #[route("/categories")]
        AdminCategories {},

        #[route("/competences")]
        AdminCompetences {},
    #[end_nest]

    #[nest("/student")]
        #[route("/")]
        StudentCatalog {},

        #[route("/courses/:id")]
        StudentCourseDetails { id: i32 },

        #[route("/my-courses")]
        StudentMyCourses {},
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
