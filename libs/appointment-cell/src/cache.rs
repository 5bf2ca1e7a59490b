use std::collections::HashMap;

use tracing::debug;

use crate::models::Appointment;

/// Outcome of an appointment call, applied explicitly by whoever owns the list.
#[derive(Debug, Clone, PartialEq)]
pub enum AppointmentChange {
    Created(Appointment),
    Updated(Appointment),
    Cancelled { id: String },
}

impl AppointmentChange {
    pub fn id(&self) -> &str {
        match self {
            AppointmentChange::Created(a) | AppointmentChange::Updated(a) => &a.id,
            AppointmentChange::Cancelled { id } => id,
        }
    }
}

/// Appointments keyed by id, listed in date-time order.
#[derive(Debug, Clone, Default)]
pub struct AppointmentCache {
    by_id: HashMap<String, Appointment>,
}

impl AppointmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_list(appointments: impl IntoIterator<Item = Appointment>) -> Self {
        Self {
            by_id: appointments.into_iter().map(|a| (a.id.clone(), a)).collect(),
        }
    }

    /// Replace everything with a fresh server listing.
    pub fn replace_all(&mut self, appointments: impl IntoIterator<Item = Appointment>) {
        *self = Self::from_list(appointments);
    }

    pub fn apply(&mut self, change: AppointmentChange) {
        debug!("Applying appointment change for {}", change.id());

        match change {
            AppointmentChange::Created(appointment) | AppointmentChange::Updated(appointment) => {
                self.by_id.insert(appointment.id.clone(), appointment);
            }
            AppointmentChange::Cancelled { id } => {
                self.by_id.remove(&id);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.by_id.get(id)
    }

    pub fn list(&self) -> Vec<&Appointment> {
        let mut items: Vec<&Appointment> = self.by_id.values().collect();
        items.sort_by(|a, b| a.date_time.cmp(&b.date_time).then_with(|| a.id.cmp(&b.id)));
        items
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
