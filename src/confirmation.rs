//! Booking confirmation — display summary for a recorded appointment and
//! PDF export of it.
//!
//! The summary mirrors what the confirmation screen shows: doctor,
//! patient, long-form date, 12-hour time, location, and fee.

use std::io::BufWriter;

use printpdf::*;
use serde::Serialize;
use thiserror::Error;

use crate::availability;
use crate::models::{Appointment, Doctor};

/// Errors from confirmation PDF generation.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF font error: {0}")]
    Font(String),
    #[error("PDF save error: {0}")]
    Save(String),
}

/// Display-ready details of a confirmed booking.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationDetails {
    pub doctor_name: String,
    pub specialization: String,
    pub location: String,
    pub consultation_fee: u32,
    pub patient_name: String,
    pub patient_email: String,
    /// e.g. "Monday, July 6, 2026".
    pub date_display: String,
    /// e.g. "9:00 AM".
    pub time_display: String,
}

impl ConfirmationDetails {
    pub fn new(doctor: &Doctor, appointment: &Appointment) -> Self {
        Self {
            doctor_name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            location: doctor.location.clone(),
            consultation_fee: doctor.consultation_fee,
            patient_name: appointment.patient_name.clone(),
            patient_email: appointment.patient_email.clone(),
            date_display: appointment
                .appointment_date
                .format("%A, %B %-d, %Y")
                .to_string(),
            time_display: availability::format_slot(&appointment.appointment_time),
        }
    }
}

/// Generate a one-page confirmation PDF. Returns PDF bytes.
pub fn generate_confirmation_pdf(details: &ConfirmationDetails) -> Result<Vec<u8>, PdfError> {
    let (doc, page1, layer1) =
        PdfDocument::new("Appointment Confirmation", Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PdfError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| PdfError::Font(e.to_string()))?;

    let mut y = Mm(280.0);

    layer.use_text("Appointment Confirmed", 16.0, Mm(20.0), y, &bold);
    y -= Mm(12.0);

    layer.use_text("APPOINTMENT DETAILS:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(7.0);

    let rows = [
        ("Doctor", details.doctor_name.as_str()),
        ("Specialization", details.specialization.as_str()),
        ("Patient", details.patient_name.as_str()),
        ("Date", details.date_display.as_str()),
        ("Time", details.time_display.as_str()),
        ("Location", details.location.as_str()),
    ];
    for (label, value) in rows {
        layer.use_text(format!("{label}:"), 10.0, Mm(25.0), y, &bold);
        layer.use_text(value, 10.0, Mm(62.0), y, &font);
        y -= Mm(6.0);
    }
    layer.use_text("Consultation fee:", 10.0, Mm(25.0), y, &bold);
    layer.use_text(
        format!("${}", details.consultation_fee),
        10.0,
        Mm(62.0),
        y,
        &font,
    );
    y -= Mm(12.0);

    let footer = format!(
        "A confirmation email has been sent to {}. Please arrive ten minutes before \
         your appointment time.",
        details.patient_email
    );
    for line in wrap_text(&footer, 90) {
        layer.use_text(&line, 9.0, Mm(20.0), y, &font);
        y -= Mm(4.5);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| PdfError::Save(e.to_string()))?;
    buf.into_inner().map_err(|e| PdfError::Save(e.to_string()))
}

/// Word-wraps text for PDF rendering. Width is counted in characters,
/// not bytes, so accented patient names don't wrap early.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
