//! Reservation reminders

use crate::calendar::Reservation;
use crate::report::{format_currency, format_long_date};
use std::fmt::Write;

/// WhatsApp reminder sent to a group's contact before their Saturday
pub fn reminder_message(reservation: &Reservation) -> String {
    let pending = reservation.pending_amount();
    // Writing to a String never fails
    let mut msg = String::new();

    let _ = writeln!(msg, "🎉 *RECORDATORIO CENA GRUPO* 🎉\n");
    let _ = writeln!(msg, "👥 *Grupo:* {}", reservation.group_name);
    let _ = writeln!(msg, "📅 *Fecha:* {}", format_long_date(reservation.date));
    let _ = writeln!(msg, "🏠 *Local:* {}", reservation.venue);
    let _ = writeln!(msg, "👨‍👩‍👧‍👦 *Asistentes:* {} personas\n", reservation.attendees);
    let _ = writeln!(msg, "------------------");
    let _ = writeln!(msg, "💰 *ESTADO DE PAGO*");
    let _ = writeln!(msg, "Total reserva: {}", format_currency(reservation.total_price));
    let _ = writeln!(msg, "Pagado: {}", format_currency(reservation.paid));

    if pending > 0.0 {
        let _ = writeln!(msg, "❗ *PENDIENTE: {}*\n", format_currency(pending));
        let _ = writeln!(
            msg,
            "Por favor, realizar el pago antes del viernes para confirmar la reserva."
        );
    } else {
        let _ = writeln!(msg, "✅ *PAGADO COMPLETO*\n");
        let _ = writeln!(msg, "¡Todo listo para el sábado!");
    }

    let _ = writeln!(msg, "\n------------------");
    let _ = writeln!(msg, "📞 Cualquier duda, contactar a {}", reservation.contact);

    if let Some(notes) = reservation.notes.as_deref().filter(|n| !n.is_empty()) {
        let _ = write!(msg, "\n📝 *Notas:* {}", notes);
    }

    msg
}
