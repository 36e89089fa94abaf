//! Reservation Status Workflow
//!
//! The four reservation states and the actions a page offers for each one.
//! Transitions are enforced by the server; the client only decides which
//! buttons to show and how to patch its local copy after a successful call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reservation status as stored by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "cancelada")]
    Cancelled,
    #[serde(rename = "completada")]
    Completed,
}

/// Visual tone for badges and chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Primary,
    Secondary,
    Warning,
    Success,
    Error,
    Info,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 4] = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::Cancelled,
        ReservationStatus::Completed,
    ];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pendiente",
            ReservationStatus::Confirmed => "confirmada",
            ReservationStatus::Cancelled => "cancelada",
            ReservationStatus::Completed => "completada",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pendiente",
            ReservationStatus::Confirmed => "Confirmada",
            ReservationStatus::Cancelled => "Cancelada",
            ReservationStatus::Completed => "Completada",
        }
    }

    /// Hex colour used by the dashboard cards
    pub fn color(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "#ff9800",
            ReservationStatus::Confirmed => "#4caf50",
            ReservationStatus::Cancelled => "#f44336",
            ReservationStatus::Completed => "#2196f3",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ReservationStatus::Pending => BadgeTone::Warning,
            ReservationStatus::Confirmed => BadgeTone::Success,
            ReservationStatus::Cancelled => BadgeTone::Error,
            ReservationStatus::Completed => BadgeTone::Info,
        }
    }

    /// Actions offered for a reservation in this status.
    ///
    /// pending → confirm / cancel, confirmed → complete / cancel. Cancelled and
    /// completed reservations are final.
    pub fn actions(&self) -> &'static [StatusAction] {
        match self {
            ReservationStatus::Pending => &[StatusAction::Confirm, StatusAction::Cancel],
            ReservationStatus::Confirmed => &[StatusAction::Complete, StatusAction::Cancel],
            ReservationStatus::Cancelled | ReservationStatus::Completed => &[],
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pendiente" | "pending" => Ok(ReservationStatus::Pending),
            "confirmada" | "confirmed" => Ok(ReservationStatus::Confirmed),
            "cancelada" | "cancelled" | "canceled" => Ok(ReservationStatus::Cancelled),
            "completada" | "completed" => Ok(ReservationStatus::Completed),
            other => Err(format!("Unknown reservation status: {}", other)),
        }
    }
}

/// A status transition requested through its dedicated endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusAction {
    Confirm,
    Cancel,
    Complete,
}

impl StatusAction {
    /// Path segment appended to `/reservas/:id/`
    pub fn path_segment(&self) -> &'static str {
        match self {
            StatusAction::Confirm => "confirmar",
            StatusAction::Cancel => "cancelar",
            StatusAction::Complete => "completar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusAction::Confirm => "Confirmar",
            StatusAction::Cancel => "Cancelar",
            StatusAction::Complete => "Completar",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            StatusAction::Confirm => BadgeTone::Success,
            StatusAction::Cancel => BadgeTone::Error,
            StatusAction::Complete => BadgeTone::Primary,
        }
    }

    /// Status the server reports after the action succeeds
    pub fn resulting_status(&self) -> ReservationStatus {
        match self {
            StatusAction::Confirm => ReservationStatus::Confirmed,
            StatusAction::Cancel => ReservationStatus::Cancelled,
            StatusAction::Complete => ReservationStatus::Completed,
        }
    }

    /// Fallback banner text when the server gives no message
    pub fn failure_message(&self) -> String {
        format!("Error al {} la reserva", self.path_segment())
    }
}

impl FromStr for StatusAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "confirmar" | "confirm" => Ok(StatusAction::Confirm),
            "cancelar" | "cancel" => Ok(StatusAction::Cancel),
            "completar" | "complete" => Ok(StatusAction::Complete),
            other => Err(format!("Unknown status action: {}", other)),
        }
    }
}

/// Tone of the capacity chip on a table card
pub fn capacity_tone(capacity: u32) -> BadgeTone {
    match capacity {
        0..=2 => BadgeTone::Primary,
        3..=4 => BadgeTone::Secondary,
        5..=6 => BadgeTone::Warning,
        _ => BadgeTone::Error,
    }
}

/// Label and tone of the availability chip on a table card
pub fn availability_badge(available: bool) -> (&'static str, BadgeTone) {
    if available {
        ("Disponible", BadgeTone::Success)
    } else {
        ("No disponible", BadgeTone::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_per_status() {
        assert_eq!(
            ReservationStatus::Pending.actions(),
            &[StatusAction::Confirm, StatusAction::Cancel]
        );
        assert_eq!(
            ReservationStatus::Confirmed.actions(),
            &[StatusAction::Complete, StatusAction::Cancel]
        );
        assert!(ReservationStatus::Cancelled.actions().is_empty());
        assert!(ReservationStatus::Completed.actions().is_empty());
    }

    #[test]
    fn test_action_targets_and_paths() {
        assert_eq!(StatusAction::Confirm.path_segment(), "confirmar");
        assert_eq!(StatusAction::Cancel.resulting_status(), ReservationStatus::Cancelled);
        assert_eq!(StatusAction::Complete.resulting_status(), ReservationStatus::Completed);
        assert_eq!(
            StatusAction::Cancel.failure_message(),
            "Error al cancelar la reserva"
        );
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ReservationStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmada\"");

        let parsed: ReservationStatus = serde_json::from_str("\"completada\"").unwrap();
        assert_eq!(parsed, ReservationStatus::Completed);

        assert_eq!("Pending".parse::<ReservationStatus>(), Ok(ReservationStatus::Pending));
        assert!("archived".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_capacity_tones() {
        assert_eq!(capacity_tone(2), BadgeTone::Primary);
        assert_eq!(capacity_tone(4), BadgeTone::Secondary);
        assert_eq!(capacity_tone(6), BadgeTone::Warning);
        assert_eq!(capacity_tone(12), BadgeTone::Error);
    }
}
