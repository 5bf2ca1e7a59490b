use anyhow::{anyhow, bail};

use appointment_cell::{AppointmentCache, AppointmentChange, BookingForm, EditForm, PatientTarget};
use assistant_cell::AssistantService;
use doctor_cell::Doctor;

use super::{apply_selection, booking_message, print_appointments};
use crate::cli::AssistantCommand;
use crate::context::AppContext;

async fn my_doctor(service: &AssistantService, doctor_id: &str, token: &str) -> anyhow::Result<Doctor> {
    service
        .get_my_doctors(token)
        .await?
        .into_iter()
        .find(|d| d.id == doctor_id)
        .ok_or_else(|| anyhow!("Doctor {} is not assigned to you", doctor_id))
}

pub async fn run(ctx: &AppContext, command: AssistantCommand) -> anyhow::Result<()> {
    let tr = ctx.translator();
    let service = AssistantService::with_client(ctx.api());

    match command {
        AssistantCommand::Doctors => {
            ctx.enter("/assistant")?;
            for doctor in service.get_my_doctors(&ctx.token()?).await? {
                println!(
                    "{}  {}  {}",
                    doctor.id,
                    doctor.full_name(),
                    doctor.specialty_label(tr.language()).unwrap_or_default()
                );
            }
        }
        AssistantCommand::Users => {
            ctx.enter("/assistant")?;
            for user in service.get_all_users(&ctx.token()?).await? {
                println!("{}  {} <{}>", user.id, user.full_name(), user.email);
            }
        }
        AssistantCommand::Appointments { doctor_id } => {
            ctx.enter(&format!("/assistant/doctor/{}", doctor_id))?;
            let appointments = service.get_doctor_appointments(&doctor_id, &ctx.token()?).await?;
            print_appointments(&tr, &AppointmentCache::from_list(appointments).list());
        }
        AssistantCommand::Book {
            doctor_id,
            patient_id,
            patient_name,
            selection,
        } => {
            ctx.enter(&format!("/assistant/doctor/{}", doctor_id))?;
            let token = ctx.token()?;
            let doctor = my_doctor(&service, &doctor_id, &token).await?;

            let patient = match (patient_id, patient_name) {
                (Some(id), _) => PatientTarget::Id(id),
                (None, Some(name)) => PatientTarget::Name(name),
                (None, None) => bail!("{}", tr.t("booking.invalid_patient")),
            };

            let mut form = BookingForm::for_patient(&doctor, patient);
            apply_selection(
                selection,
                &mut form.slot,
                &mut form.appointment_type,
                &mut form.payment_type,
            );

            let mut cache = AppointmentCache::from_list(service.get_doctor_appointments(&doctor_id, &token).await?);
            let result = form
                .submit(&service, &token, |created| {
                    cache.apply(AppointmentChange::Created(created.clone()))
                })
                .await;

            if let Err(e) = result {
                bail!("{}", booking_message(&tr, &e));
            }
            println!("{}", tr.t("booking.success"));
            print_appointments(&tr, &cache.list());
        }
        AssistantCommand::Edit {
            doctor_id,
            appointment_id,
            selection,
        } => {
            ctx.enter(&format!("/assistant/doctor/{}", doctor_id))?;
            let token = ctx.token()?;
            let doctor = my_doctor(&service, &doctor_id, &token).await?;

            let mut cache = AppointmentCache::from_list(service.get_doctor_appointments(&doctor_id, &token).await?);
            let appointment = cache
                .get(&appointment_id)
                .cloned()
                .ok_or_else(|| anyhow!("{}", tr.t("common.not_found")))?;

            let mut form = EditForm::from_appointment(&appointment, doctor.works_with_health_insurance);
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
        AssistantCommand::Cancel {
            doctor_id,
            appointment_id,
        } => {
            ctx.enter(&format!("/assistant/doctor/{}", doctor_id))?;
            let token = ctx.token()?;
            service.cancel_appointment(&appointment_id, &token).await?;

            let mut cache = AppointmentCache::from_list(service.get_doctor_appointments(&doctor_id, &token).await?);
            cache.apply(AppointmentChange::Cancelled { id: appointment_id });
            print_appointments(&tr, &cache.list());
        }
    }
    Ok(())
}
