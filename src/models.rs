//! Reservation API Records
//!
//! Entities and payloads mirrored from the remote reservation API. Field names
//! on the wire are the API's camelCase Spanish names; the Rust side uses
//! English names.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::{api_date, api_time, timestamp_opt};
use crate::status::{ReservationStatus, StatusAction};

// ============================================
// Entities
// ============================================

/// A restaurant table (`mesa`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: u32,
    #[serde(rename = "numero")]
    pub number: u32,
    #[serde(rename = "capacidad")]
    pub capacity: u32,
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "disponible")]
    pub available: bool,
    #[serde(rename = "fechaCreacion", default, with = "timestamp_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "fechaActualizacion", default, with = "timestamp_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Table {
    pub fn label(&self) -> String {
        format!("Mesa {}", self.number)
    }

    /// Option text in the new-reservation table picker
    pub fn option_label(&self) -> String {
        format!("Mesa {} - {} (Cap: {})", self.number, self.location, self.capacity)
    }

    /// Number proposed for a new table: one past the highest in use
    pub fn next_number(tables: &[Table]) -> u32 {
        tables.iter().map(|t| t.number).max().unwrap_or(0) + 1
    }
}

/// A customer (`cliente`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u32,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "fechaRegistro", default, with = "timestamp_opt")]
    pub registered_at: Option<DateTime<Utc>>,
    #[serde(rename = "numeroVisitas", default)]
    pub visit_count: u32,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Option text in the new-reservation customer picker
    pub fn option_label(&self) -> String {
        format!("{} {} - {}", self.first_name, self.last_name, self.phone)
    }
}

/// A reservation (`reserva`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: u32,
    #[serde(rename = "fecha", with = "api_date")]
    pub date: NaiveDate,
    #[serde(rename = "hora", with = "api_time")]
    pub time: NaiveTime,
    #[serde(rename = "numeroPersonas")]
    pub party_size: u32,
    #[serde(rename = "estado")]
    pub status: ReservationStatus,
    #[serde(rename = "notas", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "mesaId", default)]
    pub table_id: u32,
    #[serde(rename = "clienteId", default)]
    pub customer_id: u32,
    #[serde(rename = "mesa", default, skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
    #[serde(rename = "cliente", default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(rename = "fechaCreacion", default, with = "timestamp_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "fechaActualizacion", default, with = "timestamp_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Notes worth showing (absent and blank notes are hidden)
    pub fn visible_notes(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    pub fn table_label(&self) -> String {
        match &self.table {
            Some(table) => table.label(),
            None => format!("Mesa #{}", self.table_id),
        }
    }

    pub fn customer_name(&self) -> String {
        self.customer
            .as_ref()
            .map(Customer::full_name)
            .unwrap_or_default()
    }

    pub fn location(&self) -> &str {
        self.table.as_ref().map(|t| t.location.as_str()).unwrap_or("-")
    }

    /// Actions available for the current status
    pub fn actions(&self) -> &'static [StatusAction] {
        self.status.actions()
    }
}

/// Replace the status of one reservation in a locally held list after the
/// server accepted a transition. Returns whether the reservation was found.
pub fn patch_status(reservations: &mut [Reservation], id: u32, status: ReservationStatus) -> bool {
    match reservations.iter_mut().find(|r| r.id == id) {
        Some(reservation) => {
            reservation.status = status;
            true
        }
        None => false,
    }
}

/// Keep only reservations in `status` (all of them when `None`)
pub fn filter_by_status(
    reservations: &[Reservation],
    status: Option<ReservationStatus>,
) -> Vec<Reservation> {
    reservations
        .iter()
        .filter(|r| status.map_or(true, |s| r.status == s))
        .cloned()
        .collect()
}

/// Reservation counters (`GET /reservas/estadisticas`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "totalReservas", default)]
    pub total: u32,
    #[serde(rename = "reservasPendientes", default)]
    pub pending: u32,
    #[serde(rename = "reservasConfirmadas", default)]
    pub confirmed: u32,
    #[serde(rename = "reservasCanceladas", default)]
    pub cancelled: u32,
    #[serde(rename = "reservasCompletadas", default)]
    pub completed: u32,
}

impl Statistics {
    /// Count for one status
    pub fn count(&self, status: ReservationStatus) -> u32 {
        match status {
            ReservationStatus::Pending => self.pending,
            ReservationStatus::Confirmed => self.confirmed,
            ReservationStatus::Cancelled => self.cancelled,
            ReservationStatus::Completed => self.completed,
        }
    }
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub today: Vec<Reservation>,
    pub stats: Statistics,
}

impl DashboardData {
    /// The only failure text the dashboard shows; server detail goes to the logs
    pub const LOAD_ERROR: &'static str = "Error al cargar los datos del dashboard";
}

// ============================================
// Availability
// ============================================

/// Body of `POST /reservas/disponibilidad`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(rename = "fecha", with = "api_date")]
    pub date: NaiveDate,
    #[serde(rename = "hora", with = "api_time")]
    pub time: NaiveTime,
    #[serde(rename = "numeroPersonas")]
    pub party_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(rename = "mesasDisponibles", default)]
    pub tables: Vec<Table>,
    #[serde(rename = "totalMesasDisponibles", default)]
    pub total: u32,
}

// ============================================
// Write payloads
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTable {
    #[serde(rename = "numero")]
    pub number: u32,
    #[serde(rename = "capacidad")]
    pub capacity: u32,
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "disponible")]
    pub available: bool,
}

/// Partial table update; absent fields are left untouched by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableUpdate {
    #[serde(rename = "numero", skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(rename = "capacidad", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(rename = "ubicacion", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "disponible", skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl From<NewTable> for TableUpdate {
    fn from(table: NewTable) -> Self {
        Self {
            number: Some(table.number),
            capacity: Some(table.capacity),
            location: Some(table.location),
            available: Some(table.available),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCustomer {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomerUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReservation {
    #[serde(rename = "fecha", with = "api_date")]
    pub date: NaiveDate,
    #[serde(rename = "hora", with = "api_time")]
    pub time: NaiveTime,
    #[serde(rename = "numeroPersonas")]
    pub party_size: u32,
    #[serde(rename = "clienteId")]
    pub customer_id: u32,
    #[serde(rename = "mesaId")]
    pub table_id: u32,
    #[serde(rename = "notas", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReservationUpdate {
    #[serde(
        rename = "fecha",
        serialize_with = "api_date::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(
        rename = "hora",
        serialize_with = "api_time::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<NaiveTime>,
    #[serde(rename = "numeroPersonas", skip_serializing_if = "Option::is_none")]
    pub party_size: Option<u32>,
    #[serde(rename = "clienteId", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u32>,
    #[serde(rename = "mesaId", skip_serializing_if = "Option::is_none")]
    pub table_id: Option<u32>,
    #[serde(rename = "notas", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================
// Errors reported by the API
// ============================================

/// JSON error body returned by the API on failure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<ErrorMessage>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `message` is a plain string, or a list when several fields failed validation
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ApiErrorBody {
    /// Parse an error body, ignoring anything that is not the expected JSON
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// Human readable message, if the server supplied one
    pub fn message(&self) -> Option<String> {
        let from_message = match &self.message {
            Some(ErrorMessage::One(msg)) => Some(msg.clone()),
            Some(ErrorMessage::Many(msgs)) if !msgs.is_empty() => Some(msgs.join("; ")),
            _ => None,
        };

        from_message
            .or_else(|| self.error.clone())
            .filter(|msg| !msg.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVATION_JSON: &str = r#"{
        "id": 12,
        "fecha": "2025-05-20",
        "hora": "21:15",
        "numeroPersonas": 4,
        "estado": "pendiente",
        "notas": "Cumpleaños",
        "mesaId": 3,
        "clienteId": 8,
        "mesa": {
            "id": 3, "numero": 5, "capacidad": 4, "ubicacion": "Terraza",
            "disponible": true,
            "fechaCreacion": "2025-01-01T09:00:00.000Z",
            "fechaActualizacion": "2025-01-01T09:00:00.000Z"
        },
        "cliente": {
            "id": 8, "nombre": "Ana", "apellido": "García",
            "telefono": "600111222", "email": "ana@example.com",
            "fechaRegistro": "2024-11-03", "numeroVisitas": 6
        },
        "fechaCreacion": "2025-05-01T12:00:00.000Z",
        "fechaActualizacion": "2025-05-01T12:00:00.000Z"
    }"#;

    #[test]
    fn test_reservation_from_api_json() {
        let r: Reservation = serde_json::from_str(RESERVATION_JSON).unwrap();
        assert_eq!(r.party_size, 4);
        assert_eq!(r.status, ReservationStatus::Pending);
        assert_eq!(r.table_label(), "Mesa 5");
        assert_eq!(r.customer_name(), "Ana García");
        assert_eq!(r.location(), "Terraza");
        assert_eq!(r.visible_notes(), Some("Cumpleaños"));
        assert!(r.customer.unwrap().registered_at.is_some());
    }

    #[test]
    fn test_reservation_without_relations() {
        let json = r#"{"id": 1, "fecha": "2025-05-20", "hora": "13:00:00",
                       "numeroPersonas": 2, "estado": "cancelada", "notas": "  "}"#;
        let r: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(r.table_label(), "Mesa #0");
        assert_eq!(r.customer_name(), "");
        assert_eq!(r.visible_notes(), None);
        assert!(r.actions().is_empty());
    }

    #[test]
    fn test_new_reservation_uses_api_formats() {
        let payload = NewReservation {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            party_size: 3,
            customer_id: 8,
            table_id: 3,
            notes: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["fecha"], "2025-06-01");
        assert_eq!(value["hora"], "20:00");
        assert_eq!(value["numeroPersonas"], 3);
        assert_eq!(value["clienteId"], 8);
        assert_eq!(value["mesaId"], 3);
        assert!(value.get("notas").is_none());
    }

    #[test]
    fn test_update_payloads_skip_absent_fields() {
        let update = ReservationUpdate {
            time: NaiveTime::from_hms_opt(14, 30, 0),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({"hora": "14:30"}));

        let table = TableUpdate {
            available: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            serde_json::json!({"disponible": false})
        );
    }

    #[test]
    fn test_patch_status_and_filter() {
        let base: Reservation = serde_json::from_str(RESERVATION_JSON).unwrap();
        let mut list = vec![base.clone(), Reservation { id: 13, ..base }];

        assert!(patch_status(&mut list, 13, ReservationStatus::Confirmed));
        assert!(!patch_status(&mut list, 99, ReservationStatus::Confirmed));

        let confirmed = filter_by_status(&list, Some(ReservationStatus::Confirmed));
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].id, 13);
        assert_eq!(filter_by_status(&list, None).len(), 2);
    }

    #[test]
    fn test_next_table_number() {
        assert_eq!(Table::next_number(&[]), 1);

        let table: Table = serde_json::from_str(
            r#"{"id": 1, "numero": 7, "capacidad": 2, "ubicacion": "Barra", "disponible": true}"#,
        )
        .unwrap();
        assert_eq!(Table::next_number(&[table]), 8);
    }

    #[test]
    fn test_error_body_messages() {
        let single = ApiErrorBody::parse(r#"{"statusCode": 409, "message": "Mesa ocupada"}"#).unwrap();
        assert_eq!(single.message().as_deref(), Some("Mesa ocupada"));

        let list = ApiErrorBody::parse(
            r#"{"statusCode": 400, "message": ["fecha inválida", "hora inválida"], "error": "Bad Request"}"#,
        )
        .unwrap();
        assert_eq!(list.message().as_deref(), Some("fecha inválida; hora inválida"));

        let bare = ApiErrorBody::parse(r#"{"error": "Not Found"}"#).unwrap();
        assert_eq!(bare.message().as_deref(), Some("Not Found"));

        assert!(ApiErrorBody::parse("<html>502</html>").is_none());
    }
}
