mod account;
mod admin;
mod appointments;
mod assistant;
mod catalog;
mod doctor;
mod notifications;

use appointment_cell::{Appointment, AppointmentType, BookingError, PaymentType};
use shared_i18n::Translator;

use crate::cli::{Commands, SlotSelection};
use crate::context::AppContext;

pub async fn dispatch(ctx: &AppContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login { email, password } => account::login(ctx, &email, &password).await,
        Commands::Register {
            first_name,
            last_name,
            email,
            password,
            repeat_password,
        } => account::register(ctx, first_name, last_name, email, password, repeat_password).await,
        Commands::Logout => account::logout(ctx),
        Commands::Whoami => account::whoami(ctx),
        Commands::Route { path } => account::route(ctx, &path),
        Commands::Lang { code } => account::lang(ctx, code.as_deref()),
        Commands::Profile(cmd) => account::profile(ctx, cmd).await,
        Commands::Doctors(cmd) => catalog::doctors(ctx, cmd).await,
        Commands::Slots { doctor_id, date } => catalog::slots(ctx, &doctor_id, &date).await,
        Commands::Book { doctor_id, selection } => appointments::book(ctx, &doctor_id, selection).await,
        Commands::Appointments(cmd) => appointments::run(ctx, cmd).await,
        Commands::Schedule(cmd) => doctor::schedule(ctx, cmd).await,
        Commands::Doctor(cmd) => doctor::run(ctx, cmd).await,
        Commands::Assistant(cmd) => assistant::run(ctx, cmd).await,
        Commands::Admin(cmd) => admin::run(ctx, cmd).await,
        Commands::Notifications(cmd) => notifications::run(ctx, cmd).await,
    }
}

fn type_label(tr: &Translator, appointment_type: AppointmentType) -> String {
    match appointment_type {
        AppointmentType::Primary => tr.t("appointment.primary"),
        AppointmentType::FollowUp => tr.t("appointment.follow_up"),
    }
}

fn payment_label(tr: &Translator, payment_type: PaymentType) -> String {
    match payment_type {
        PaymentType::Private => tr.t("payment.private"),
        PaymentType::Nhif => tr.t("payment.nhif"),
    }
}

fn print_appointments(tr: &Translator, appointments: &[&Appointment]) {
    if appointments.is_empty() {
        println!("{}", tr.t("common.not_found"));
        return;
    }

    for appointment in appointments {
        let doctor = appointment.doctor_name.as_deref().unwrap_or("-");
        let patient = appointment.patient_name.as_deref().unwrap_or("-");
        let status = appointment.status.map(|s| s.as_str()).unwrap_or("");

        println!(
            "{}  {}  {} / {}  {} / {}  {}",
            appointment.id,
            appointment.date_time.format("%Y-%m-%d %H:%M"),
            doctor,
            patient,
            type_label(tr, appointment.appointment_type),
            payment_label(tr, appointment.payment_type),
            status
        );
    }
}

/// User-facing message for a booking failure. Field errors and the generic
/// failures keep their own text; categorised API failures are translated.
fn booking_message(tr: &Translator, error: &BookingError) -> String {
    match error {
        BookingError::Invalid { message, .. } => message.clone(),
        BookingError::Failed(message) => message.clone(),
        other => tr.t(other.translation_key()),
    }
}

/// Copy command-line picks onto a form. Anything not given keeps the form's value.
fn apply_selection(
    selection: SlotSelection,
    slot: &mut Option<String>,
    appointment_type: &mut String,
    payment_type: &mut String,
) {
    if let Some(at) = selection.at {
        *slot = Some(at);
    }
    if let Some(value) = selection.appointment_type {
        *appointment_type = value;
    }
    if let Some(value) = selection.payment {
        *payment_type = value;
    }
}
