use anyhow::anyhow;

use doctor_cell::specialties::specialties_for_language;
use doctor_cell::{filter_doctors, generate_daily_slots, Doctor, DoctorService, WorkingSchedule};
use shared_i18n::Translator;
use shared_utils::dates::{day_of_week, parse_date_input};

use crate::cli::DoctorsCommand;
use crate::context::AppContext;

pub async fn doctors(ctx: &AppContext, command: DoctorsCommand) -> anyhow::Result<()> {
    let tr = ctx.translator();
    let service = DoctorService::with_client(ctx.api());

    match command {
        DoctorsCommand::List { search, nhif } => {
            ctx.enter("/doctors")?;
            let token = ctx.token()?;

            let doctors = service.list_doctors(&[], &token).await?;
            let shown = filter_doctors(&doctors, &search, nhif);
            if shown.is_empty() {
                println!("{}", tr.t("common.not_found"));
            }
            for doctor in shown {
                print_summary(&tr, doctor);
            }
        }
        DoctorsCommand::Show { doctor_id } => {
            let params = ctx.enter(&format!("/doctors/{}", doctor_id))?;
            let token = ctx.token()?;
            let id = params.get("doctorId").map(String::as_str).unwrap_or(&doctor_id);

            let doctor = service.get_doctor(id, &token).await?;
            print_details(&tr, &doctor);
        }
        DoctorsCommand::Specialties => {
            for (id, name) in specialties_for_language(tr.language()) {
                println!("{:>3}  {}", id, name);
            }
        }
    }
    Ok(())
}

/// Bookable slot starts for one doctor on one date.
pub async fn slots(ctx: &AppContext, doctor_id: &str, date: &str) -> anyhow::Result<()> {
    ctx.enter(&format!("/doctors/{}", doctor_id))?;
    let token = ctx.token()?;
    let tr = ctx.translator();

    let date = parse_date_input(date).ok_or_else(|| anyhow!("{}", tr.t("booking.invalid_date")))?;
    let doctor = DoctorService::with_client(ctx.api()).get_doctor(doctor_id, &token).await?;

    let slots = generate_daily_slots(date, &doctor.working_hours, ctx.config.slot_minutes);
    println!("{} {} ({})", doctor.full_name(), date, tr.day_name(day_of_week(&date)));

    if slots.is_empty() {
        println!("{}", tr.t("booking.no_slots"));
        return Ok(());
    }
    for slot in slots {
        println!("  {}", slot.format("%Y-%m-%dT%H:%M"));
    }
    Ok(())
}

fn print_summary(tr: &Translator, doctor: &Doctor) {
    let nhif = if doctor.works_with_health_insurance {
        tr.t("payment.nhif")
    } else {
        String::new()
    };

    println!(
        "{}  {}  {}  {}",
        doctor.id,
        doctor.full_name(),
        doctor.specialty_label(tr.language()).unwrap_or_default(),
        nhif
    );
}

fn print_details(tr: &Translator, doctor: &Doctor) {
    match &doctor.title {
        Some(title) => println!("{} {}", title, doctor.full_name()),
        None => println!("{}", doctor.full_name()),
    }
    if let Some(specialty) = doctor.specialty_label(tr.language()) {
        println!("{}", specialty);
    }
    if let Some(address) = &doctor.practice_address {
        println!("{}", address);
    }
    if let Some(price) = doctor.price_private {
        println!("{}: {:.2}", tr.t("payment.private"), price);
    }
    if doctor.works_with_health_insurance {
        println!("{}", tr.t("payment.nhif"));
    }
    if let Some(bio) = &doctor.bio {
        println!("\n{}", bio);
    }

    for entry in WorkingSchedule::from_entries(doctor.working_hours.iter().copied()).entries() {
        println!(
            "  {:<12} {}-{}",
            tr.day_name(entry.day_of_week),
            entry.start_time.format("%H:%M"),
            entry.end_time.format("%H:%M")
        );
    }
}
