use anyhow::{anyhow, bail};

use appointment_cell::{AppointmentCache, AppointmentChange, EditForm};
use doctor_cell::{parse_working_hours, specialty_name, DoctorService, MoveDirection, WorkingSchedule};
use shared_i18n::Translator;

use super::{apply_selection, booking_message, print_appointments};
use crate::cli::{DoctorCommand, ScheduleCommand};
use crate::context::AppContext;

pub async fn schedule(ctx: &AppContext, command: ScheduleCommand) -> anyhow::Result<()> {
    ctx.enter("/doctor/schedule")?;
    let token = ctx.token()?;
    let tr = ctx.translator();
    let service = DoctorService::with_client(ctx.api());

    let schedule = match command {
        ScheduleCommand::Show => service.get_my_working_hours(&token).await?,
        ScheduleCommand::Set { day, start, end } => {
            let entry = parse_working_hours(day, &start, &end)?;

            let mut schedule = service.get_my_working_hours(&token).await?;
            schedule.remove_day(day);
            schedule.add(entry)?;

            service.update_my_working_hours(&schedule, &token).await?
        }
        ScheduleCommand::Remove { day } => {
            service.delete_working_hours_by_day(day, &token).await?;
            service.get_my_working_hours(&token).await?
        }
    };

    print_schedule(&tr, &schedule);
    Ok(())
}

pub async fn run(ctx: &AppContext, command: DoctorCommand) -> anyhow::Result<()> {
    let tr = ctx.translator();
    let service = DoctorService::with_client(ctx.api());

    match command {
        DoctorCommand::Me => {
            ctx.enter("/doctor/schedule")?;
            let doctor = service.get_my_profile(&ctx.token()?).await?;
            println!("{}  {}", doctor.id, doctor.full_name());
            if let Some(specialty) = doctor.specialty_label(tr.language()) {
                println!("{}", specialty);
            }
            print_schedule(&tr, &WorkingSchedule::from_entries(doctor.working_hours));
        }
        DoctorCommand::Specialty { specialty_id } => {
            ctx.enter("/doctor/schedule")?;
            if specialty_name(specialty_id, tr.language()).is_none() {
                bail!("Unknown specialty id {}", specialty_id);
            }
            let doctor = service.update_my_specialty(specialty_id, &ctx.token()?).await?;
            println!(
                "{}: {}",
                doctor.full_name(),
                doctor.specialty_label(tr.language()).unwrap_or_default()
            );
        }
        DoctorCommand::Assistants => {
            ctx.enter("/doctor/schedule")?;
            for assistant in service.get_all_assistants(&ctx.token()?).await? {
                println!("{}  {} <{}>", assistant.id, assistant.full_name(), assistant.email);
            }
        }
        DoctorCommand::SetAssistant { assistant_id } => {
            ctx.enter("/doctor/schedule")?;
            service
                .update_my_assistant(assistant_id.as_deref(), &ctx.token()?)
                .await?;
            match assistant_id {
                Some(id) => println!("Assistant set to {}", id),
                None => println!("Assistant cleared"),
            }
        }
        DoctorCommand::Appointments => {
            ctx.enter("/doctor/appointments")?;
            let cache = AppointmentCache::from_list(service.get_my_appointments(&ctx.token()?).await?);
            print_appointments(&tr, &cache.list());
        }
        DoctorCommand::Move {
            appointment_id,
            later: _,
            earlier,
        } => {
            ctx.enter("/doctor/appointments")?;
            let token = ctx.token()?;
            let mut cache = AppointmentCache::from_list(service.get_my_appointments(&token).await?);
            let appointment = cache
                .get(&appointment_id)
                .cloned()
                .ok_or_else(|| anyhow!("{}", tr.t("common.not_found")))?;

            let direction = if earlier { MoveDirection::Earlier } else { MoveDirection::Later };
            let moved = service
                .move_appointment(&appointment, direction, ctx.config.slot_minutes, &token)
                .await?;
            cache.apply(AppointmentChange::Updated(moved));
            print_appointments(&tr, &cache.list());
        }
        DoctorCommand::Edit {
            appointment_id,
            selection,
        } => {
            ctx.enter("/doctor/appointments")?;
            let token = ctx.token()?;
            let mut cache = AppointmentCache::from_list(service.get_my_appointments(&token).await?);
            let appointment = cache
                .get(&appointment_id)
                .cloned()
                .ok_or_else(|| anyhow!("{}", tr.t("common.not_found")))?;
            let me = service.get_my_profile(&token).await?;

            let mut form = EditForm::from_appointment(&appointment, me.works_with_health_insurance);
            apply_selection(
                selection,
                &mut form.slot,
                &mut form.appointment_type,
                &mut form.payment_type,
            );

            let updated = form
                .submit(&service, &token)
                .await
                .map_err(|e| anyhow!("{}", booking_message(&tr, &e)))?;
            cache.apply(AppointmentChange::Updated(updated));
            print_appointments(&tr, &cache.list());
        }
        DoctorCommand::Cancel { appointment_id } => {
            ctx.enter("/doctor/appointments")?;
            let token = ctx.token()?;
            service.cancel_appointment(&appointment_id, &token).await?;

            let mut cache = AppointmentCache::from_list(service.get_my_appointments(&token).await?);
            cache.apply(AppointmentChange::Cancelled { id: appointment_id });
            print_appointments(&tr, &cache.list());
        }
    }
    Ok(())
}

fn print_schedule(tr: &Translator, schedule: &WorkingSchedule) {
    if schedule.is_empty() {
        println!("{}", tr.t("booking.no_slots"));
        return;
    }
    for entry in schedule.entries() {
        println!(
            "  {:<12} {}-{}",
            tr.day_name(entry.day_of_week),
            entry.start_time.format("%H:%M"),
            entry.end_time.format("%H:%M")
        );
    }
}
