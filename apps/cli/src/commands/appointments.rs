use anyhow::{anyhow, bail};

use appointment_cell::{AppointmentCache, AppointmentChange, AppointmentService, BookingForm, EditForm};
use doctor_cell::DoctorService;

use super::{apply_selection, booking_message, print_appointments};
use crate::cli::{AppointmentsCommand, SlotSelection};
use crate::context::AppContext;

pub async fn book(ctx: &AppContext, doctor_id: &str, selection: SlotSelection) -> anyhow::Result<()> {
    ctx.enter(&format!("/doctors/{}", doctor_id))?;
    let token = ctx.token()?;
    let tr = ctx.translator();

    let doctor = DoctorService::with_client(ctx.api()).get_doctor(doctor_id, &token).await?;

    let mut form = BookingForm::for_doctor(&doctor);
    apply_selection(
        selection,
        &mut form.slot,
        &mut form.appointment_type,
        &mut form.payment_type,
    );

    let service = AppointmentService::with_client(ctx.api());
    let mut cache = AppointmentCache::new();

    let result = form
        .submit(&service, &token, |created| {
            cache.apply(AppointmentChange::Created(created.clone()))
        })
        .await;

    match result {
        Ok(_) => {
            println!("{}", tr.t("booking.success"));
            print_appointments(&tr, &cache.list());
            Ok(())
        }
        Err(e) => bail!("{}", booking_message(&tr, &e)),
    }
}

pub async fn run(ctx: &AppContext, command: AppointmentsCommand) -> anyhow::Result<()> {
    ctx.enter("/appointments")?;
    let token = ctx.token()?;
    let tr = ctx.translator();
    let service = AppointmentService::with_client(ctx.api());

    let mut cache = AppointmentCache::from_list(service.get_my_appointments(&token).await?);

    match command {
        AppointmentsCommand::List => {}
        AppointmentsCommand::Edit {
            appointment_id,
            selection,
        } => {
            let appointment = cache
                .get(&appointment_id)
                .cloned()
                .ok_or_else(|| anyhow!("{}", tr.t("common.not_found")))?;

            let works_with_health_insurance = match &appointment.doctor_id {
                Some(doctor_id) => {
                    DoctorService::with_client(ctx.api())
                        .get_doctor(doctor_id, &token)
                        .await?
                        .works_with_health_insurance
                }
                None => false,
            };

            let mut form = EditForm::from_appointment(&appointment, works_with_health_insurance);
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
        }
        AppointmentsCommand::Cancel { appointment_id } => {
            service.cancel(&appointment_id, &token).await?;
            cache.apply(AppointmentChange::Cancelled { id: appointment_id });
        }
    }

    print_appointments(&tr, &cache.list());
    Ok(())
}
