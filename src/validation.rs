//! Form Validation
//!
//! Raw form input (as typed into the pages or passed on the command line)
//! turned into API payloads, or into per-field error messages.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::format::{parse_api_date, parse_api_time};
use crate::models::{
    AvailabilityQuery, Customer, NewCustomer, NewReservation, NewTable, Table,
};

/// Locations offered when creating or editing a table
pub const TABLE_LOCATIONS: [&str; 7] = [
    "Ventana",
    "Centro",
    "Terraza",
    "Salón Privado",
    "Barra",
    "Patio",
    "VIP",
];

pub const MAX_CAPACITY: u32 = 20;
pub const MAX_PARTY_SIZE: u32 = 20;
pub const DEFAULT_PARTY_SIZE: u32 = 2;

/// First bookable time of day
pub fn opening_time() -> NaiveTime {
    NaiveTime::from_hms_opt(11, 0, 0).unwrap_or_default()
}

/// Last bookable time of day
pub fn closing_time() -> NaiveTime {
    NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default()
}

/// Validation failures, keyed by wire field name, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    /// Message for one field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    /// First message, for forms that show a single banner
    pub fn first(&self) -> Option<&str> {
        self.errors.first().map(|(_, msg)| msg.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(f, msg)| (*f, msg.as_str()))
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .errors
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect();
        f.write_str(&joined.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email.trim())
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

// ============================================
// Tables
// ============================================

/// Create/edit table dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableForm {
    pub number: String,
    pub capacity: String,
    pub location: String,
    pub available: bool,
}

impl Default for TableForm {
    fn default() -> Self {
        Self {
            number: "1".to_string(),
            capacity: "2".to_string(),
            location: String::new(),
            available: true,
        }
    }
}

impl TableForm {
    /// Blank form for a new table, numbered after the existing ones
    pub fn for_new(existing: &[Table]) -> Self {
        Self {
            number: Table::next_number(existing).to_string(),
            ..Self::default()
        }
    }

    /// Form pre-filled from a table being edited
    pub fn from_table(table: &Table) -> Self {
        Self {
            number: table.number.to_string(),
            capacity: table.capacity.to_string(),
            location: table.location.clone(),
            available: table.available,
        }
    }

    pub fn validate(&self) -> Result<NewTable, FieldErrors> {
        let mut errors = FieldErrors::new();

        let number = parse_count(&self.number);
        match number {
            None => errors.add("numero", "El número de mesa es requerido"),
            Some(0) => errors.add("numero", "El número de mesa debe ser mayor que 0"),
            Some(_) => {}
        }

        let capacity = parse_count(&self.capacity);
        match capacity {
            None => errors.add("capacidad", "La capacidad es requerida"),
            Some(c) if c < 1 => errors.add("capacidad", "La capacidad debe ser al menos 1"),
            Some(c) if c > MAX_CAPACITY => errors.add(
                "capacidad",
                format!("La capacidad no puede superar {}", MAX_CAPACITY),
            ),
            Some(_) => {}
        }

        let location = self.location.trim().to_string();
        if location.is_empty() {
            errors.add("ubicacion", "La ubicación es requerida");
        }

        errors.into_result(|| NewTable {
            number: number.unwrap_or_default(),
            capacity: capacity.unwrap_or_default(),
            location,
            available: self.available,
        })
    }
}

// ============================================
// Customers
// ============================================

/// New customer dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl CustomerForm {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
        }
    }

    pub fn validate(&self) -> Result<NewCustomer, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let phone = self.phone.trim();
        let email = self.email.trim();

        if first_name.is_empty() {
            errors.add("nombre", "El nombre es requerido");
        }
        if last_name.is_empty() {
            errors.add("apellido", "El apellido es requerido");
        }
        if phone.is_empty() {
            errors.add("telefono", "El teléfono es requerido");
        }
        if email.is_empty() {
            errors.add("email", "El email es requerido");
        } else if !is_valid_email(email) {
            errors.add("email", "Email inválido");
        }

        errors.into_result(|| NewCustomer {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        })
    }
}

// ============================================
// Reservations
// ============================================

/// New reservation form.
///
/// `date` and `time` hold what `<input type="date">` / `<input type="time">`
/// produce (`YYYY-MM-DD`, `HH:MM`); empty strings mean "not chosen yet".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub date: String,
    pub time: String,
    pub party_size: String,
    pub customer_id: Option<u32>,
    pub table_id: Option<u32>,
    pub notes: String,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            party_size: DEFAULT_PARTY_SIZE.to_string(),
            customer_id: None,
            table_id: None,
            notes: String::new(),
        }
    }
}

impl ReservationForm {
    fn parsed_date(&self) -> Option<NaiveDate> {
        if self.date.trim().is_empty() {
            return None;
        }
        parse_api_date(&self.date).ok()
    }

    fn parsed_time(&self) -> Option<NaiveTime> {
        if self.time.trim().is_empty() {
            return None;
        }
        parse_api_time(&self.time).ok()
    }

    fn parsed_party_size(&self) -> Option<u32> {
        parse_count(&self.party_size).filter(|n| *n > 0)
    }

    /// Availability query, once date, time and party size are all filled in
    pub fn availability_query(&self) -> Option<AvailabilityQuery> {
        Some(AvailabilityQuery {
            date: self.parsed_date()?,
            time: self.parsed_time()?,
            party_size: self.parsed_party_size()?,
        })
    }

    /// Validate against `today` (no bookings in the past) and build the
    /// create payload.
    pub fn validate(&self, today: NaiveDate) -> Result<NewReservation, FieldErrors> {
        let mut errors = FieldErrors::new();

        let date = self.parsed_date();
        match date {
            None => errors.add("fecha", "La fecha es requerida"),
            Some(d) if d < today => errors.add("fecha", "La fecha no puede ser anterior a hoy"),
            Some(_) => {}
        }

        let time = self.parsed_time();
        match time {
            None => errors.add("hora", "La hora es requerida"),
            Some(t) if t < opening_time() || t > closing_time() => {
                errors.add("hora", "La hora debe estar entre las 11:00 y las 22:00")
            }
            Some(_) => {}
        }

        let party_size = self.parsed_party_size();
        match party_size {
            Some(n) if n <= MAX_PARTY_SIZE => {}
            _ => errors.add(
                "numeroPersonas",
                format!("El número de personas debe estar entre 1 y {}", MAX_PARTY_SIZE),
            ),
        }

        let customer_id = self.customer_id.filter(|id| *id != 0);
        if customer_id.is_none() {
            errors.add("clienteId", "Debe seleccionar un cliente");
        }

        let table_id = self.table_id.filter(|id| *id != 0);
        if table_id.is_none() {
            errors.add("mesaId", "Debe seleccionar una mesa");
        }

        let notes = Some(self.notes.trim().to_string()).filter(|n| !n.is_empty());

        errors.into_result(|| NewReservation {
            date: date.unwrap_or(today),
            time: time.unwrap_or_else(opening_time),
            party_size: party_size.unwrap_or(DEFAULT_PARTY_SIZE),
            customer_id: customer_id.unwrap_or_default(),
            table_id: table_id.unwrap_or_default(),
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn filled_reservation() -> ReservationForm {
        ReservationForm {
            date: "2025-06-12".to_string(),
            time: "20:30".to_string(),
            party_size: "4".to_string(),
            customer_id: Some(8),
            table_id: Some(3),
            notes: "  Ventana si es posible ".to_string(),
        }
    }

    #[test]
    fn test_valid_reservation_builds_formatted_payload() {
        let payload = filled_reservation().validate(today()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["fecha"], "2025-06-12");
        assert_eq!(json["hora"], "20:30");
        assert_eq!(json["numeroPersonas"], 4);
        assert_eq!(json["clienteId"], 8);
        assert_eq!(json["mesaId"], 3);
        assert_eq!(json["notas"], "Ventana si es posible");
    }

    #[test]
    fn test_missing_reservation_fields_in_form_order() {
        let form = ReservationForm::default();
        let errors = form.validate(today()).unwrap_err();

        assert_eq!(errors.first(), Some("La fecha es requerida"));
        assert_eq!(errors.get("hora"), Some("La hora es requerida"));
        assert_eq!(errors.get("clienteId"), Some("Debe seleccionar un cliente"));
        assert_eq!(errors.get("mesaId"), Some("Debe seleccionar una mesa"));
        assert_eq!(errors.get("numeroPersonas"), None);
    }

    #[test]
    fn test_reservation_limits() {
        let mut form = filled_reservation();
        form.date = "2025-06-09".to_string();
        form.time = "23:00".to_string();
        form.party_size = "21".to_string();

        let errors = form.validate(today()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.get("fecha").is_some());
        assert!(errors.get("hora").is_some());
        assert!(errors.get("numeroPersonas").is_some());

        form = filled_reservation();
        form.time = "22:00".to_string();
        form.date = "2025-06-10".to_string();
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn test_availability_query_needs_all_inputs() {
        let mut form = filled_reservation();
        let query = form.availability_query().unwrap();
        assert_eq!(query.party_size, 4);

        form.party_size = "0".to_string();
        assert!(form.availability_query().is_none());

        form = filled_reservation();
        form.time.clear();
        assert!(form.availability_query().is_none());
    }

    #[test]
    fn test_table_form() {
        let ok = TableForm {
            number: "4".to_string(),
            capacity: "6".to_string(),
            location: "Terraza".to_string(),
            available: false,
        }
        .validate()
        .unwrap();
        assert_eq!(ok.number, 4);
        assert!(!ok.available);

        let errors = TableForm {
            number: "".to_string(),
            capacity: "25".to_string(),
            location: " ".to_string(),
            available: true,
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("numero"), Some("El número de mesa es requerido"));
        assert_eq!(errors.get("capacidad"), Some("La capacidad no puede superar 20"));
        assert_eq!(errors.get("ubicacion"), Some("La ubicación es requerida"));
    }

    #[test]
    fn test_customer_form_email() {
        let mut form = CustomerForm {
            first_name: "Luis".to_string(),
            last_name: "Pérez".to_string(),
            phone: "611000111".to_string(),
            email: "luis.perez@example".to_string(),
        };
        assert_eq!(form.validate().unwrap_err().get("email"), Some("Email inválido"));

        form.email = "luis.perez@example.com".to_string();
        let customer = form.validate().unwrap();
        assert_eq!(customer.last_name, "Pérez");
    }
}
