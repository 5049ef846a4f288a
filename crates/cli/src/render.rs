//! Plain-text rendering of command results for the terminal.

use clinic_core::{CommandResult, CommandView, FilteredAppointment, Patient};
use std::fmt::Write;

/// Renders the feedback line followed by the view the command produced.
pub fn render(result: &CommandResult) -> String {
    let mut out = String::from(result.feedback());
    let body = match result.view() {
        CommandView::PatientList(patients) => patient_list(patients),
        CommandView::PatientDetail(patient) => patient_detail(patient),
        CommandView::AppointmentList(appts) => appointment_list(appts),
    };
    out.push_str("\n\n");
    out.push_str(&body);
    out
}

fn patient_list(patients: &[Patient]) -> String {
    if patients.is_empty() {
        return "No patients to show.".to_string();
    }
    let mut out = String::new();
    for (index, patient) in patients.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, patient);
        if !patient.allergies().is_empty() {
            let allergies: Vec<String> =
                patient.allergies().iter().map(|a| a.to_string()).collect();
            let _ = writeln!(out, "   Allergies: {}", allergies.join(", "));
        }
    }
    out.trim_end().to_string()
}

fn patient_detail(patient: &Patient) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name:      {}", patient.name());
    let _ = writeln!(out, "NRIC:      {}", patient.nric());
    let _ = writeln!(out, "Sex:       {}", patient.sex());
    let _ = writeln!(out, "Birthdate: {}", patient.birthdate());
    let _ = writeln!(out, "Phone:     {}", patient.phone());

    let _ = writeln!(out, "Allergies:");
    if patient.allergies().is_empty() {
        let _ = writeln!(out, "  none recorded");
    }
    for allergy in patient.allergies().iter() {
        let _ = writeln!(out, "  - {allergy}");
    }

    let _ = writeln!(out, "Appointments:");
    if patient.appointments().is_empty() {
        let _ = writeln!(out, "  none booked");
    }
    for appt in patient.appointments() {
        let _ = writeln!(out, "  - {appt}");
    }
    out.trim_end().to_string()
}

fn appointment_list(appts: &[FilteredAppointment]) -> String {
    if appts.is_empty() {
        return "No appointments found.".to_string();
    }
    appts
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "{}. {} - {} ({})",
                index + 1,
                entry.appt(),
                entry.name(),
                entry.nric()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
