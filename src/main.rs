// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_middleware;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas públicas: login e criação de conta. O POST /users aceita um
    // token opcional (admin criando contas Employee).
    let auth_routes = Router::new().route("/login", post(handlers::auth::login));

    let user_routes = Router::new()
        .route(
            "/me",
            get(handlers::users::get_me).put(handlers::users::update_me),
        )
        .route(
            "/{id}",
            get(handlers::users::get_user).put(handlers::users::update_user),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let candidate_routes = Router::new()
        .route(
            "/",
            get(handlers::candidates::list_candidates).post(handlers::candidates::create_candidate),
        )
        .route(
            "/{id}",
            get(handlers::candidates::get_candidate).put(handlers::candidates::update_candidate),
        )
        .route("/bulk-hire", post(handlers::candidates::bulk_hire_candidates))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let job_routes = Router::new()
        .route("/", get(handlers::jobs::list_jobs).post(handlers::jobs::create_job))
        .route("/{id}", get(handlers::jobs::get_job).put(handlers::jobs::update_job))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let applicant_routes = Router::new()
        .route("/", get(handlers::applicants::list_applicants))
        .route("/board/{job_id}", get(handlers::applicants::board))
        .route("/bulk-upsert", post(handlers::applicants::bulk_upsert))
        .route("/bulk-delete", post(handlers::applicants::bulk_delete))
        .route("/bulk-hire", post(handlers::applicants::bulk_hire))
        .route("/apply", post(handlers::applicants::apply))
        .route(
            "/find-hired-job/{candidate_id}",
            get(handlers::applicants::find_hired_job),
        )
        .route(
            "/{id}",
            get(handlers::applicants::get_applicant).put(handlers::applicants::update_applicant),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let employee_routes = Router::new()
        .route("/", get(handlers::employees::list_employees))
        .route("/ratings", post(handlers::employees::create_ratings))
        .route(
            "/ratings/{id}",
            get(handlers::employees::list_ratings).put(handlers::employees::replace_ratings),
        )
        .route(
            "/{id}",
            get(handlers::employees::get_employee).put(handlers::employees::update_employee),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let checklist_routes = Router::new()
        .route("/new-hires", get(handlers::checklist::list_new_hires))
        .route(
            "/{id}",
            get(handlers::checklist::get_checklist).put(handlers::checklist::update_checklist),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let letter_routes = Router::new()
        .route(
            "/",
            get(handlers::letters::list_letters).post(handlers::letters::create_letter),
        )
        .route("/draft-letters", post(handlers::letters::draft_letters))
        .route(
            "/{id}",
            get(handlers::letters::get_letter)
                .put(handlers::letters::update_letter)
                .delete(handlers::letters::delete_letter),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/users", post(handlers::users::create_user))
        .nest("/api/auth", auth_routes)
        .nest("/api/users", user_routes)
        .nest("/api/candidates", candidate_routes)
        .nest("/api/job", job_routes)
        .nest("/api/applicants", applicant_routes)
        .nest("/api/employee", employee_routes)
        .nest("/api/checklist", checklist_routes)
        .nest("/api/letters", letter_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
