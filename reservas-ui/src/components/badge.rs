//! Badge Components
//!
//! Coloured chips for statuses, capacities and availability.

use leptos::*;
use reservas::status::{BadgeTone, ReservationStatus};

/// CSS classes for a badge tone
pub fn tone_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Primary => "bg-blue-100 text-blue-800",
        BadgeTone::Secondary => "bg-purple-100 text-purple-800",
        BadgeTone::Warning => "bg-orange-100 text-orange-800",
        BadgeTone::Success => "bg-green-100 text-green-800",
        BadgeTone::Error => "bg-red-100 text-red-800",
        BadgeTone::Info => "bg-sky-100 text-sky-800",
    }
}

/// CSS classes for a filled action button of the given tone
pub fn button_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Success => "bg-green-600 hover:bg-green-700 text-white",
        BadgeTone::Error => "bg-red-600 hover:bg-red-700 text-white",
        BadgeTone::Info => "bg-sky-600 hover:bg-sky-700 text-white",
        BadgeTone::Warning => "bg-orange-500 hover:bg-orange-600 text-white",
        BadgeTone::Primary | BadgeTone::Secondary => "bg-primary-600 hover:bg-primary-700 text-white",
    }
}

#[component]
pub fn Badge(#[prop(into)] label: String, tone: BadgeTone) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
            tone_class(tone)
        )>
            {label}
        </span>
    }
}

/// Reservation status chip
#[component]
pub fn StatusBadge(status: ReservationStatus) -> impl IntoView {
    view! { <Badge label=status.label() tone=status.tone() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservas::status::capacity_tone;

    #[test]
    fn test_status_tones_are_distinct() {
        let classes: Vec<&str> = ReservationStatus::ALL
            .iter()
            .map(|s| tone_class(s.tone()))
            .collect();
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_capacity_chip_classes() {
        assert_eq!(tone_class(capacity_tone(2)), "bg-blue-100 text-blue-800");
        assert_eq!(tone_class(capacity_tone(8)), "bg-red-100 text-red-800");
    }
}
