use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use schoolhouse_auth::{Claims, Role};
use schoolhouse_models::{
    Classroom, ClassroomSummary, ClassroomWithSchool, CreateClassroomDto, CreateSchoolDto,
    CreateStudentDto, ErrorResponse, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequestDto, School, SchoolSummary, Student, StudentWithClassroom, UpdateClassroomDto,
    UpdateSchoolDto, UpdateStudentDto, User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_me,
        crate::modules::schools::controller::create_school,
        crate::modules::schools::controller::get_all_schools,
        crate::modules::schools::controller::get_school,
        crate::modules::schools::controller::update_school,
        crate::modules::schools::controller::delete_school,
        crate::modules::classrooms::controller::create_classroom,
        crate::modules::classrooms::controller::get_classrooms,
        crate::modules::classrooms::controller::get_classroom,
        crate::modules::classrooms::controller::update_classroom,
        crate::modules::classrooms::controller::delete_classroom,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            User,
            Role,
            Claims,
            RegisterRequestDto,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            School,
            SchoolSummary,
            CreateSchoolDto,
            UpdateSchoolDto,
            Classroom,
            ClassroomSummary,
            ClassroomWithSchool,
            CreateClassroomDto,
            UpdateClassroomDto,
            Student,
            StudentWithClassroom,
            CreateStudentDto,
            UpdateStudentDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and token identity"),
        (name = "Schools", description = "School management, superadmin only for writes"),
        (name = "Classrooms", description = "Classroom management"),
        (name = "Students", description = "Student management")
    ),
    info(
        title = "Schoolhouse API",
        version = "0.1.0",
        description = "Role-gated REST API for schools, classrooms and students, built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
