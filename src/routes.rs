use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config;
use crate::database::models::{
    Autoridad, CitCategoria, CitCita, CitCliente, CitClienteRegistro, CitDiaInhabil, CitServicio, Distrito,
    Materia, Modulo, Oficina, Permiso, Rol, Usuario, UsuarioRol,
};
use crate::handlers::{protected, public};
use crate::middleware::{current_user_middleware, jwt_auth_middleware};

/// The complete application router
pub fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/token", post(public::token_post))
        // Protected
        .merge(protected_routes())
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

fn protected_routes() -> Router {
    use protected::{detail, list};

    Router::new()
        .route("/profile", get(protected::profile::profile_get))
        .route("/v2/autoridades", get(protected::autoridades::list))
        .route("/v2/autoridades/:id", get(detail::<Autoridad>))
        .route("/v2/cit_categorias", get(list::<CitCategoria>))
        .route("/v2/cit_categorias/:id", get(detail::<CitCategoria>))
        .merge(cit_citas_routes())
        .merge(cit_clientes_routes())
        .route("/v2/cit_dias_disponibles", get(protected::cit_dias_disponibles::list))
        .route("/v2/cit_dias_disponibles/proximo", get(protected::cit_dias_disponibles::proximo))
        .route("/v2/cit_dias_inhabiles", get(list::<CitDiaInhabil>))
        .route("/v2/cit_dias_inhabiles/:id", get(detail::<CitDiaInhabil>))
        .route("/v2/cit_servicios", get(protected::cit_servicios::list))
        .route("/v2/cit_servicios/:id", get(detail::<CitServicio>))
        .route("/v2/distritos", get(list::<Distrito>))
        .route("/v2/distritos/:id", get(detail::<Distrito>))
        .route("/v2/materias", get(list::<Materia>))
        .route("/v2/materias/:id", get(detail::<Materia>))
        .route("/v2/modulos", get(protected::modulos::list))
        .route("/v2/modulos/:id", get(detail::<Modulo>))
        .route("/v2/oficinas", get(protected::oficinas::list))
        .route("/v2/oficinas/:id", get(detail::<Oficina>))
        .route("/v2/permisos", get(protected::permisos::list))
        .route("/v2/permisos/:id", get(detail::<Permiso>))
        .route("/v2/roles", get(list::<Rol>))
        .route("/v2/roles/:id", get(detail::<Rol>))
        .route("/v2/usuarios", get(protected::usuarios::list))
        .route("/v2/usuarios/:id", get(detail::<Usuario>))
        .route("/v2/usuarios_roles", get(protected::usuarios_roles::list))
        .route("/v2/usuarios_roles/:id", get(detail::<UsuarioRol>))
        // Outermost layer runs first: token, then user. Only matched routes are wrapped.
        .route_layer(middleware::from_fn(current_user_middleware))
        .route_layer(middleware::from_fn(jwt_auth_middleware))
}

fn cit_citas_routes() -> Router {
    use protected::cit_citas;

    Router::new()
        .route("/v2/cit_citas", get(cit_citas::list))
        .route(
            "/v2/cit_citas/calcular_cantidades_creados_por_dia",
            get(cit_citas::cantidades_creados_por_dia),
        )
        .route(
            "/v2/cit_citas/calcular_cantidades_agendadas_por_oficina_servicio",
            get(cit_citas::cantidades_agendadas_por_oficina_servicio),
        )
        .route("/v2/cit_citas/:id", get(protected::detail::<CitCita>))
}

fn cit_clientes_routes() -> Router {
    use protected::{cit_clientes, cit_clientes_registros};

    Router::new()
        .route("/v2/cit_clientes", get(cit_clientes::list))
        .route(
            "/v2/cit_clientes/calcular_cantidades_creados_por_dia",
            get(cit_clientes::cantidades_creados_por_dia),
        )
        .route("/v2/cit_clientes/:id", get(protected::detail::<CitCliente>))
        .route("/v2/cit_clientes_registros", get(cit_clientes_registros::list))
        .route(
            "/v2/cit_clientes_registros/calcular_cantidades_creados_por_dia",
            get(cit_clientes_registros::cantidades_creados_por_dia),
        )
        .route("/v2/cit_clientes_registros/:id", get(protected::detail::<CitClienteRegistro>))
}

fn cors_layer() -> CorsLayer {
    let security = &config::config().security;
    if !security.enable_cors {
        return CorsLayer::new();
    }
    let base = CorsLayer::new().allow_methods([Method::GET, Method::POST]).allow_headers(Any);
    if security.cors_origins.is_empty() {
        return base.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> axum::response::Response {
        app().oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn root_welcomes() {
        let response = send(Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn listing_without_token_is_unauthorized() {
        let response = send(Request::get("/v2/distritos").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
    }

    #[tokio::test]
    async fn aggregation_routes_are_protected() {
        let response = send(
            Request::get("/v2/cit_citas/calcular_cantidades_creados_por_dia")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = send(Request::get("/v2/expedientes").body(Body::empty()).unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn token_without_password_is_json_422() {
        let response = send(
            Request::post("/token")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=a"))
                .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], true);
        assert_eq!(body["code"], "UNPROCESSABLE_ENTITY");
    }
}
