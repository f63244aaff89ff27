use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        address::{self, ADDRESS_TAG},
        app_user::{self, APP_USER_TAG},
        category::{self, CATEGORY_TAG},
        competence::{self, COMPETENCE_TAG},
        course::{self, COURSE_TAG},
        student_course::{self, STUDENT_COURSE_TAG},
        teacher_competence::{self, TEACHER_COMPETENCE_TAG},
        teacher_course::{self, TEACHER_COURSE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Westcoast Education API", description = "Users, courses and enrollments"),
    tags(
        (name = APP_USER_TAG, description = "Students and teachers"),
        (name = ADDRESS_TAG, description = "User addresses"),
        (name = CATEGORY_TAG, description = "Course categories"),
        (name = COURSE_TAG, description = "Courses"),
        (name = COMPETENCE_TAG, description = "Teacher competences"),
        (name = STUDENT_COURSE_TAG, description = "Enrollments"),
        (name = TEACHER_COURSE_TAG, description = "Teaching assignments"),
        (name = TEACHER_COMPETENCE_TAG, description = "Competences held by teachers")
    )
)]
struct ApiDoc;

/// Builds the `/api` router together with its OpenAPI document and Swagger UI.
///
/// Handlers listed in one `routes!` call share a path and differ by method.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            app_user::get_all_users,
            app_user::create_user,
            app_user::update_user
        ))
        .routes(routes!(app_user::get_user, app_user::delete_user))
        .routes(routes!(app_user::get_students))
        .routes(routes!(app_user::get_teachers))
        .routes(routes!(app_user::get_students_by_course))
        .routes(routes!(app_user::get_teachers_by_course))
        .routes(routes!(app_user::get_teachers_by_competence))
        .routes(routes!(app_user::get_role_names))
        .routes(routes!(
            address::get_all_addresses,
            address::create_address,
            address::update_address
        ))
        .routes(routes!(address::get_address, address::delete_address))
        .routes(routes!(
            category::get_all_categories,
            category::create_category,
            category::update_category
        ))
        .routes(routes!(category::get_category, category::delete_category))
        .routes(routes!(
            course::get_all_courses,
            course::create_course,
            course::update_course
        ))
        .routes(routes!(course::get_course, course::delete_course))
        .routes(routes!(course::get_courses_by_category))
        .routes(routes!(course::get_courses_by_student))
        .routes(routes!(course::get_courses_by_teacher))
        .routes(routes!(
            competence::get_all_competences,
            competence::create_competence,
            competence::update_competence
        ))
        .routes(routes!(
            competence::get_competence,
            competence::delete_competence
        ))
        .routes(routes!(competence::get_competences_by_teacher))
        .routes(routes!(
            student_course::get_all_student_courses,
            student_course::create_student_course,
            student_course::update_student_course
        ))
        .routes(routes!(
            student_course::get_student_course,
            student_course::delete_student_course
        ))
        .routes(routes!(student_course::get_student_courses_by_student))
        .routes(routes!(student_course::get_student_courses_by_course))
        .routes(routes!(
            teacher_course::get_all_teacher_courses,
            teacher_course::create_teacher_course
        ))
        .routes(routes!(
            teacher_course::get_teacher_course,
            teacher_course::delete_teacher_course
        ))
        .routes(routes!(teacher_course::get_teacher_courses_by_teacher))
        .routes(routes!(teacher_course::get_teacher_courses_by_course))
        .routes(routes!(
            teacher_competence::get_all_teacher_competences,
            teacher_competence::create_teacher_competence
        ))
        .routes(routes!(
            teacher_competence::get_teacher_competence,
            teacher_competence::delete_teacher_competence
        ))
        .routes(routes!(
            teacher_competence::get_teacher_competences_by_teacher
        ))
        .routes(routes!(
            teacher_competence::get_teacher_competences_by_competence
        ))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(cors)
}
