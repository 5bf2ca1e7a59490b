use clap::{Args, Parser, Subcommand};

/// Command-line client for the Praxis booking API.
#[derive(Parser, Debug)]
#[command(name = "booking", version, about = "Praxis booking client")]
pub struct Cli {
    /// Override the API base URL (otherwise BOOKING_API_BASE_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and remember the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in.
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        repeat_password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user and the navigation available to them.
    Whoami,
    /// Show what the router decides for a path in the current session.
    Route { path: String },
    /// Show or change the interface language (bg, en, de).
    Lang { code: Option<String> },
    /// Browse the doctor catalog.
    #[command(subcommand)]
    Doctors(DoctorsCommand),
    /// List bookable slots of a doctor on a date.
    Slots {
        doctor_id: String,
        /// Date as YYYY-MM-DD.
        date: String,
    },
    /// Book an appointment with a doctor.
    Book {
        doctor_id: String,
        #[command(flatten)]
        selection: SlotSelection,
    },
    /// Manage your own appointments.
    #[command(subcommand)]
    Appointments(AppointmentsCommand),
    /// Weekly working hours of the signed-in doctor.
    #[command(subcommand)]
    Schedule(ScheduleCommand),
    /// Doctor dashboard.
    #[command(subcommand)]
    Doctor(DoctorCommand),
    /// Assistant dashboard.
    #[command(subcommand)]
    Assistant(AssistantCommand),
    /// User administration.
    #[command(subcommand)]
    Admin(AdminCommand),
    /// Notifications of the signed-in user.
    #[command(subcommand)]
    Notifications(NotificationsCommand),
    /// Your profile.
    #[command(subcommand)]
    Profile(ProfileCommand),
}

/// Slot, appointment type and payment, as picked on a booking form.
#[derive(Args, Debug, Clone)]
pub struct SlotSelection {
    /// Slot start as YYYY-MM-DDTHH:MM[:SS].
    #[arg(long)]
    pub at: Option<String>,
    /// PRIMARY or FOLLOW_UP.
    #[arg(long = "type")]
    pub appointment_type: Option<String>,
    /// PRIVATE or NHIF.
    #[arg(long)]
    pub payment: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DoctorsCommand {
    /// List doctors, optionally filtered.
    List {
        #[arg(long, default_value = "")]
        search: String,
        /// Only doctors working with NHIF.
        #[arg(long)]
        nhif: bool,
    },
    /// Show one doctor.
    Show { doctor_id: String },
    /// List known specialties in the current language.
    Specialties,
}

#[derive(Subcommand, Debug)]
pub enum AppointmentsCommand {
    List,
    Edit {
        appointment_id: String,
        #[command(flatten)]
        selection: SlotSelection,
    },
    Cancel { appointment_id: String },
}

#[derive(Subcommand, Debug)]
pub enum ScheduleCommand {
    Show,
    /// Set (or replace) the window for one day.
    Set {
        /// Day of week, 0 = Sunday.
        #[arg(long)]
        day: u8,
        /// HH:MM
        #[arg(long)]
        start: String,
        /// HH:MM
        #[arg(long)]
        end: String,
    },
    Remove {
        #[arg(long)]
        day: u8,
    },
}

#[derive(Subcommand, Debug)]
pub enum DoctorCommand {
    /// Own doctor profile.
    Me,
    Appointments,
    /// Shift an appointment by one slot.
    Move {
        appointment_id: String,
        #[arg(long, conflicts_with = "earlier")]
        later: bool,
        #[arg(long)]
        earlier: bool,
    },
    Edit {
        appointment_id: String,
        #[command(flatten)]
        selection: SlotSelection,
    },
    Cancel { appointment_id: String },
    /// Change own specialty by id.
    Specialty { specialty_id: u32 },
    /// List assistants that can be assigned.
    Assistants,
    /// Assign an assistant, or clear it when no id is given.
    SetAssistant { assistant_id: Option<String> },
}

#[derive(Subcommand, Debug)]
pub enum AssistantCommand {
    Doctors,
    Appointments { doctor_id: String },
    /// Book for a registered patient or for a walk-in by name.
    Book {
        doctor_id: String,
        #[arg(long, conflicts_with = "patient_name", required_unless_present = "patient_name")]
        patient_id: Option<String>,
        #[arg(long)]
        patient_name: Option<String>,
        #[command(flatten)]
        selection: SlotSelection,
    },
    Edit {
        doctor_id: String,
        appointment_id: String,
        #[command(flatten)]
        selection: SlotSelection,
    },
    Cancel {
        doctor_id: String,
        appointment_id: String,
    },
    /// Patients available for booking.
    Users,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    Users {
        #[arg(long, default_value = "")]
        search: String,
    },
    Update {
        user_id: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        status: String,
    },
    Delete { user_id: String },
}

#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    List,
    Read { notification_id: String },
    ReadAll,
    /// Keep polling and print the unread count until interrupted.
    Watch,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    Show,
    Update {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    Password {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        repeat: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_book_leaves_type_and_payment_to_the_form() {
        let cli = Cli::parse_from(["booking", "book", "d1", "--at", "2024-01-15T09:20"]);
        match cli.command {
            Commands::Book { doctor_id, selection } => {
                assert_eq!(doctor_id, "d1");
                assert_eq!(selection.at.as_deref(), Some("2024-01-15T09:20"));
                assert_eq!(selection.appointment_type, None);
                assert_eq!(selection.payment, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_assistant_book_needs_a_patient() {
        assert!(Cli::try_parse_from(["booking", "assistant", "book", "d1"]).is_err());
        assert!(Cli::try_parse_from([
            "booking", "assistant", "book", "d1", "--patient-id", "p", "--patient-name", "n"
        ])
        .is_err());
        assert!(Cli::try_parse_from(["booking", "assistant", "book", "d1", "--patient-name", "Georgi"]).is_ok());
    }
}
