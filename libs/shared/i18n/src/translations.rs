// =====================================================================================
// TRANSLATION TABLES
// =====================================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::language::Language;

fn build_translations(language: Language) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match language {
        Language::Bg => {
            // Navigation
            translations.insert("nav.home", "Начало");
            translations.insert("nav.doctors", "Лекари");
            translations.insert("nav.my_appointments", "Моите часове");
            translations.insert("nav.schedule", "График");
            translations.insert("nav.doctor_appointments", "Прегледи");
            translations.insert("nav.assistant", "Асистент");
            translations.insert("nav.admin", "Администрация");
            translations.insert("nav.profile", "Профил");
            translations.insert("nav.login", "Вход");
            translations.insert("nav.register", "Регистрация");
            translations.insert("nav.logout", "Изход");

            // Booking
            translations.insert("booking.select_slot", "Моля, изберете час.");
            translations.insert("booking.invalid_doctor", "Невалиден лекар.");
            translations.insert("booking.invalid_patient", "Невалиден пациент.");
            translations.insert("booking.invalid_date", "Невалидна дата.");
            translations.insert("booking.invalid_type", "Невалиден вид преглед.");
            translations.insert("booking.invalid_payment", "Невалиден начин на плащане.");
            translations.insert("booking.nhif_not_supported", "Този лекар не работи със Здравна каса.");
            translations.insert("booking.validation_error", "Невалидни данни за записване.");
            translations.insert("booking.slot_taken", "Този час вече е зает.");
            translations.insert("booking.permission_denied", "Нямате права за това действие.");
            translations.insert("booking.server_error", "Грешка в сървъра. Опитайте отново.");
            translations.insert("booking.network_error", "Няма връзка със сървъра.");
            translations.insert("booking.failed", "Неуспешно записване на час.");
            translations.insert("booking.success", "Часът е записан успешно.");
            translations.insert("booking.no_slots", "Няма свободни часове за тази дата.");
            translations.insert("appointment.primary", "Първичен");
            translations.insert("appointment.follow_up", "Вторичен");
            translations.insert("payment.private", "Частно");
            translations.insert("payment.nhif", "НЗОК");

            // Days
            translations.insert("days.0", "Неделя");
            translations.insert("days.1", "Понеделник");
            translations.insert("days.2", "Вторник");
            translations.insert("days.3", "Сряда");
            translations.insert("days.4", "Четвъртък");
            translations.insert("days.5", "Петък");
            translations.insert("days.6", "Събота");

            // Notifications
            translations.insert("notifications.title", "Известия");
            translations.insert("notifications.empty", "Няма известия");
            translations.insert("notifications.mark_all_read", "Маркирай всички като прочетени");
            translations.insert("notifications.unread", "непрочетени");

            // Common
            translations.insert("common.loading", "Зареждане...");
            translations.insert("common.not_found", "Страницата не е намерена");
        }
        Language::En => {
            // Navigation
            translations.insert("nav.home", "Home");
            translations.insert("nav.doctors", "Doctors");
            translations.insert("nav.my_appointments", "My Appointments");
            translations.insert("nav.schedule", "Schedule");
            translations.insert("nav.doctor_appointments", "Appointments");
            translations.insert("nav.assistant", "Assistant");
            translations.insert("nav.admin", "Admin");
            translations.insert("nav.profile", "Profile");
            translations.insert("nav.login", "Login");
            translations.insert("nav.register", "Register");
            translations.insert("nav.logout", "Logout");

            // Booking
            translations.insert("booking.select_slot", "Please select a time slot.");
            translations.insert("booking.invalid_doctor", "Invalid doctor.");
            translations.insert("booking.invalid_patient", "Invalid patient.");
            translations.insert("booking.invalid_date", "Invalid date.");
            translations.insert("booking.invalid_type", "Invalid appointment type.");
            translations.insert("booking.invalid_payment", "Invalid payment type.");
            translations.insert("booking.nhif_not_supported", "This doctor does not work with NHIF.");
            translations.insert("booking.validation_error", "Invalid booking data.");
            translations.insert("booking.slot_taken", "This slot is already taken.");
            translations.insert("booking.permission_denied", "You do not have permission to do this.");
            translations.insert("booking.server_error", "Server error. Please try again.");
            translations.insert("booking.network_error", "Cannot reach the server.");
            translations.insert("booking.failed", "Failed to book appointment.");
            translations.insert("booking.success", "Appointment booked successfully.");
            translations.insert("booking.no_slots", "No free slots for this date.");
            translations.insert("appointment.primary", "Primary");
            translations.insert("appointment.follow_up", "Follow-up");
            translations.insert("payment.private", "Private");
            translations.insert("payment.nhif", "NHIF");

            // Days
            translations.insert("days.0", "Sunday");
            translations.insert("days.1", "Monday");
            translations.insert("days.2", "Tuesday");
            translations.insert("days.3", "Wednesday");
            translations.insert("days.4", "Thursday");
            translations.insert("days.5", "Friday");
            translations.insert("days.6", "Saturday");

            // Notifications
            translations.insert("notifications.title", "Notifications");
            translations.insert("notifications.empty", "No notifications");
            translations.insert("notifications.mark_all_read", "Mark all as read");
            translations.insert("notifications.unread", "unread");

            // Common
            translations.insert("common.loading", "Loading...");
            translations.insert("common.not_found", "Page not found");
        }
        Language::De => {
            // Navigation
            translations.insert("nav.home", "Startseite");
            translations.insert("nav.doctors", "Ärzte");
            translations.insert("nav.my_appointments", "Meine Termine");
            translations.insert("nav.schedule", "Sprechzeiten");
            translations.insert("nav.doctor_appointments", "Termine");
            translations.insert("nav.assistant", "Assistenz");
            translations.insert("nav.admin", "Verwaltung");
            translations.insert("nav.profile", "Profil");
            translations.insert("nav.login", "Anmelden");
            translations.insert("nav.register", "Registrieren");
            translations.insert("nav.logout", "Abmelden");

            // Booking
            translations.insert("booking.select_slot", "Bitte wählen Sie einen Termin.");
            translations.insert("booking.invalid_doctor", "Ungültiger Arzt.");
            translations.insert("booking.invalid_patient", "Ungültiger Patient.");
            translations.insert("booking.invalid_date", "Ungültiges Datum.");
            translations.insert("booking.invalid_type", "Ungültige Terminart.");
            translations.insert("booking.invalid_payment", "Ungültige Zahlungsart.");
            translations.insert("booking.nhif_not_supported", "Dieser Arzt arbeitet nicht mit der Krankenkasse.");
            translations.insert("booking.validation_error", "Ungültige Buchungsdaten.");
            translations.insert("booking.slot_taken", "Dieser Termin ist bereits vergeben.");
            translations.insert("booking.permission_denied", "Keine Berechtigung für diese Aktion.");
            translations.insert("booking.server_error", "Serverfehler. Bitte erneut versuchen.");
            translations.insert("booking.network_error", "Server nicht erreichbar.");
            translations.insert("booking.failed", "Termin konnte nicht gebucht werden.");
            translations.insert("booking.success", "Termin erfolgreich gebucht.");
            translations.insert("booking.no_slots", "Keine freien Termine an diesem Tag.");
            translations.insert("appointment.primary", "Erstuntersuchung");
            translations.insert("appointment.follow_up", "Folgetermin");
            translations.insert("payment.private", "Privat");
            translations.insert("payment.nhif", "Krankenkasse");

            // Days
            translations.insert("days.0", "Sonntag");
            translations.insert("days.1", "Montag");
            translations.insert("days.2", "Dienstag");
            translations.insert("days.3", "Mittwoch");
            translations.insert("days.4", "Donnerstag");
            translations.insert("days.5", "Freitag");
            translations.insert("days.6", "Samstag");

            // Notifications
            translations.insert("notifications.title", "Benachrichtigungen");
            translations.insert("notifications.empty", "Keine Benachrichtigungen");
            translations.insert("notifications.mark_all_read", "Alle als gelesen markieren");
            translations.insert("notifications.unread", "ungelesen");

            // Common
            translations.insert("common.loading", "Wird geladen...");
            translations.insert("common.not_found", "Seite nicht gefunden");
        }
    }

    translations
}

fn table(language: Language) -> &'static HashMap<&'static str, &'static str> {
    static BG: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static EN: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static DE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    let cell = match language {
        Language::Bg => &BG,
        Language::En => &EN,
        Language::De => &DE,
    };
    cell.get_or_init(|| build_translations(language))
}

/// Looks up `key`, falling back to Bulgarian and then to the key itself.
pub fn t(language: Language, key: &str) -> String {
    table(language)
        .get(key)
        .or_else(|| table(Language::Bg).get(key))
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Translator bound to one language.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: &str) -> String {
        t(self.language, key)
    }

    pub fn day_name(&self, day_of_week: u8) -> String {
        self.t(&format!("days.{}", day_of_week))
    }
}
