use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "1.0.0",
        description = "In-memory CRUD over user records.\n\n**Notes:**\n- Identifiers are UUIDs generated by the server\n- A malformed identifier is answered exactly like an unknown one (404)\n- All responses are JSON; errors use `{\"error\": \"...\"}`"
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::UserPayload,
            crate::utils::ErrorResponse,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, read, update and delete user records."),
        (name = "Health", description = "Health check and request counters."),
    )
)]
pub struct ApiDoc;
