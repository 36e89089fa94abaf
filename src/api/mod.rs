//! Reservation API Client
//!
//! Typed async client for the remote reservation REST API.
//!
//! # Endpoints
//!
//! ## Tables
//! - `GET /mesas`, `GET /mesas?disponibles=true`, `GET /mesas?capacidadMinima=N`
//! - `POST /mesas`, `PATCH /mesas/:id`, `DELETE /mesas/:id`
//!
//! ## Customers
//! - `GET /clientes`, `GET /clientes?nombre=...`, `GET /clientes/frecuentes`
//! - `GET /clientes/:id/historial`
//! - `POST /clientes`, `PATCH /clientes/:id`
//!
//! ## Reservations
//! - `GET /reservas`, `GET /reservas?fecha=YYYY-MM-DD`, `GET /reservas/hoy`
//! - `GET /reservas/estadisticas`, `POST /reservas/disponibilidad`
//! - `POST /reservas`, `PATCH /reservas/:id`, `DELETE /reservas/:id`
//! - `PATCH /reservas/:id/confirmar|cancelar|completar`
//!
//! # Example
//!
//! ```rust,ignore
//! use reservas::api::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(ClientConfig::default())?;
//! let dashboard = client.dashboard().await?;
//! println!("{} reservations today", dashboard.today.len());
//! ```

mod client;
mod customers;
mod error;
mod reservations;
mod tables;

pub use client::{ApiClient, ClientConfig};
pub use error::{ClientError, ClientResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityQuery, NewReservation};
    use crate::status::{ReservationStatus, StatusAction};
    use axum::{
        extract::{Path, Query, State},
        http::StatusCode,
        routing::{get, patch, post},
        Json, Router,
    };
    use chrono::{NaiveDate, NaiveTime};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<Value>>>;

    /// Serve `app` under `/api` on an ephemeral port and return a client for it
    async fn spawn(app: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().nest("/api", app);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        ApiClient::new(ClientConfig {
            base_url: format!("http://{}/api", addr),
            request_timeout_ms: 5_000,
        })
        .unwrap()
    }

    fn reservation_json(id: u32, estado: &str) -> Value {
        json!({
            "id": id,
            "fecha": "2024-06-01",
            "hora": "20:30:00",
            "numeroPersonas": 4,
            "estado": estado,
            "mesaId": 3,
            "clienteId": 9,
            "mesa": { "id": 3, "numero": 3, "capacidad": 4, "ubicacion": "Terraza", "disponible": true },
            "cliente": {
                "id": 9, "nombre": "Ana", "apellido": "García",
                "telefono": "555-0101", "email": "ana@example.com", "numeroVisitas": 6
            },
            "fechaCreacion": "2024-05-20T10:00:00.000Z"
        })
    }

    #[tokio::test]
    async fn test_list_tables() {
        let app = Router::new().route(
            "/mesas",
            get(|| async {
                Json(json!([
                    { "id": 1, "numero": 1, "capacidad": 2, "ubicacion": "Ventana", "disponible": true },
                    { "id": 2, "numero": 2, "capacidad": 6, "ubicacion": "Salón principal", "disponible": false }
                ]))
            }),
        );
        let client = spawn(app).await;

        let tables = client.list_tables().await.unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].location, "Salón principal");
        assert!(!tables[1].available);
    }

    #[tokio::test]
    async fn test_create_reservation_sends_wire_formats() {
        let captured: Captured = Arc::default();
        let app = Router::new()
            .route(
                "/reservas",
                post(
                    |State(captured): State<Captured>, Json(body): Json<Value>| async move {
                        captured.lock().unwrap().push(body);
                        (StatusCode::CREATED, Json(reservation_json(41, "pendiente")))
                    },
                ),
            )
            .with_state(captured.clone());
        let client = spawn(app).await;

        let reservation = client
            .create_reservation(&NewReservation {
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                time: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
                party_size: 4,
                customer_id: 9,
                table_id: 3,
                notes: None,
            })
            .await
            .unwrap();

        assert_eq!(reservation.id, 41);
        assert_eq!(reservation.status, ReservationStatus::Pending);

        let bodies = captured.lock().unwrap();
        assert_eq!(
            bodies[0],
            json!({
                "fecha": "2024-06-01",
                "hora": "20:30",
                "numeroPersonas": 4,
                "clienteId": 9,
                "mesaId": 3
            })
        );
    }

    #[tokio::test]
    async fn test_check_availability() {
        let app = Router::new().route(
            "/reservas/disponibilidad",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["numeroPersonas"], 5);
                Json(json!({
                    "mesasDisponibles": [
                        { "id": 4, "numero": 4, "capacidad": 6, "ubicacion": "Terraza", "disponible": true }
                    ],
                    "totalMesasDisponibles": 1
                }))
            }),
        );
        let client = spawn(app).await;

        let response = client
            .check_availability(&AvailabilityQuery {
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
                party_size: 5,
            })
            .await
            .unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.tables[0].option_label(), "Mesa 4 - Terraza (Cap: 6)");
    }

    #[tokio::test]
    async fn test_search_customers_encodes_name() {
        let app = Router::new().route(
            "/clientes",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let name = params.get("nombre").cloned().unwrap_or_default();
                Json(json!([{
                    "id": 1, "nombre": name, "apellido": "Núñez",
                    "telefono": "555", "email": "x@example.com"
                }]))
            }),
        );
        let client = spawn(app).await;

        let found = client.search_customers("  José María ").await.unwrap();
        assert_eq!(found[0].first_name, "José María");
        assert_eq!(found[0].visit_count, 0);

        // blank search lists everyone; the mock echoes an empty name
        let all = client.search_customers("   ").await.unwrap();
        assert_eq!(all[0].first_name, "");
    }

    #[tokio::test]
    async fn test_api_error_message_is_surfaced() {
        let app = Router::new()
            .route(
                "/mesas",
                post(|| async {
                    (
                        StatusCode::CONFLICT,
                        Json(json!({ "statusCode": 409, "message": "Ya existe una mesa con el número 3" })),
                    )
                }),
            )
            .route(
                "/clientes",
                post(|| async {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "statusCode": 400,
                            "message": ["email must be an email", "nombre should not be empty"],
                            "error": "Bad Request"
                        })),
                    )
                }),
            );
        let client = spawn(app).await;

        let err = client
            .create_table(&crate::models::NewTable {
                number: 3,
                capacity: 4,
                location: "Terraza".to_string(),
                available: true,
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(
            err.user_message("Error al guardar la mesa"),
            "Ya existe una mesa con el número 3"
        );

        let err = client
            .create_customer(&crate::models::NewCustomer {
                first_name: String::new(),
                last_name: "Pérez".to_string(),
                phone: "555".to_string(),
                email: "nope".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.user_message("Error al crear el cliente"),
            "email must be an email; nombre should not be empty"
        );
    }

    #[tokio::test]
    async fn test_missing_resource_uses_fallback() {
        let client = spawn(Router::new()).await;

        let err = client.customer_history(404).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.user_message("Error al cargar los datos"), "Error al cargar los datos");
    }

    #[tokio::test]
    async fn test_apply_action_hits_action_route() {
        let app = Router::new().route(
            "/reservas/:id/:action",
            patch(|Path((id, action)): Path<(u32, String)>| async move {
                let estado = match action.as_str() {
                    "confirmar" => "confirmada",
                    "cancelar" => "cancelada",
                    "completar" => "completada",
                    _ => return Err(StatusCode::NOT_FOUND),
                };
                Ok(Json(reservation_json(id, estado)))
            }),
        );
        let client = spawn(app).await;

        let updated = client.apply_action(7, StatusAction::Confirm).await.unwrap();
        assert_eq!(updated.id, 7);
        assert_eq!(updated.status, ReservationStatus::Confirmed);

        let updated = client.apply_action(7, StatusAction::Complete).await.unwrap();
        assert_eq!(updated.status, ReservationStatus::Completed);
    }

    #[tokio::test]
    async fn test_dashboard_fetches_both_resources() {
        let app = Router::new()
            .route(
                "/reservas/hoy",
                get(|| async {
                    Json(json!([reservation_json(1, "confirmada"), reservation_json(2, "pendiente")]))
                }),
            )
            .route(
                "/reservas/estadisticas",
                get(|| async {
                    Json(json!({
                        "totalReservas": 12,
                        "reservasPendientes": 3,
                        "reservasConfirmadas": 5,
                        "reservasCanceladas": 1,
                        "reservasCompletadas": 3
                    }))
                }),
            );
        let client = spawn(app).await;

        let dashboard = client.dashboard().await.unwrap();
        assert_eq!(dashboard.today.len(), 2);
        assert_eq!(dashboard.today[0].customer_name(), "Ana García");
        assert_eq!(dashboard.stats.total, 12);
        assert_eq!(dashboard.stats.count(ReservationStatus::Confirmed), 5);
    }

    #[tokio::test]
    async fn test_dashboard_fails_when_one_call_fails() {
        let app = Router::new().route(
            "/reservas/hoy",
            get(|| async { Json(json!([])) }),
        );
        let client = spawn(app).await;

        let err = client.dashboard().await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_dashboard_server_error_keeps_detail() {
        let app = Router::new()
            .route(
                "/reservas/hoy",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"statusCode": 500, "message": "Internal server error"})),
                    )
                }),
            )
            .route(
                "/reservas/estadisticas",
                get(|| async {
                    Json(json!({
                        "totalReservas": 0,
                        "reservasPendientes": 0,
                        "reservasConfirmadas": 0,
                        "reservasCanceladas": 0,
                        "reservasCompletadas": 0
                    }))
                }),
            );
        let client = spawn(app).await;

        let err = client.dashboard().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        // Server detail stays on the error for the logs
        assert_eq!(err.to_string(), "API error 500: Internal server error");
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(ClientConfig {
            base_url: format!("http://{}/api", addr),
            request_timeout_ms: 2_000,
        })
        .unwrap();

        let err = client.list_reservations().await.unwrap_err();
        assert!(matches!(err, ClientError::Unavailable(_)));
        assert_eq!(
            err.user_message("Error al cargar las reservas"),
            "Error al cargar las reservas"
        );
    }
}
