use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::datetime::{local_date_time, to_local_date_time_string};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentType {
    Primary,
    FollowUp,
}

impl AppointmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentType::Primary => "PRIMARY",
            AppointmentType::FollowUp => "FOLLOW_UP",
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PRIMARY" => Ok(AppointmentType::Primary),
            "FOLLOW_UP" => Ok(AppointmentType::FollowUp),
            _ => Err("Invalid appointment type.".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Private,
    /// National health insurance fund.
    Nhif,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Private => "PRIVATE",
            PaymentType::Nhif => "NHIF",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PRIVATE" => Ok(PaymentType::Private),
            "NHIF" => Ok(PaymentType::Nhif),
            _ => Err("Invalid payment type.".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Booked,
    Canceled,
    Completed,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "BOOKED",
            AppointmentStatus::Canceled => "CANCELED",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(with = "local_date_time")]
    pub date_time: NaiveDateTime,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub payment_type: PaymentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
}

impl Appointment {
    pub fn is_canceled(&self) -> bool {
        self.status == Some(AppointmentStatus::Canceled)
    }
}

/// Body for creating or editing an appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    pub date_time: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub payment_type: PaymentType,
}

impl AppointmentPayload {
    pub fn new(date_time: &NaiveDateTime, appointment_type: AppointmentType, payment_type: PaymentType) -> Self {
        Self {
            doctor_id: None,
            patient_id: None,
            patient_name: None,
            date_time: to_local_date_time_string(date_time),
            appointment_type,
            payment_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_appointment_wire_format() {
        let appointment: Appointment = serde_json::from_value(json!({
            "id": "a1",
            "doctorId": "d1",
            "dateTime": "2024-01-15T09:20:00",
            "type": "FOLLOW_UP",
            "paymentType": "NHIF",
            "status": "RESCHEDULED"
        }))
        .unwrap();

        assert_eq!(appointment.appointment_type, AppointmentType::FollowUp);
        assert_eq!(appointment.payment_type, PaymentType::Nhif);
        assert_eq!(appointment.status, Some(AppointmentStatus::Unknown));

        let value = serde_json::to_value(&appointment).unwrap();
        assert_eq!(value["dateTime"], "2024-01-15T09:20:00");
        assert_eq!(value["type"], "FOLLOW_UP");
    }

    #[test]
    fn test_payload_omits_absent_targets() {
        let date_time = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 45)
            .unwrap();
        let payload = AppointmentPayload::new(&date_time, AppointmentType::Primary, PaymentType::Private);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "dateTime": "2024-01-15T14:30:45",
                "type": "PRIMARY",
                "paymentType": "PRIVATE"
            })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!("NHIF".parse::<PaymentType>(), Ok(PaymentType::Nhif));
        assert_eq!("CASH".parse::<PaymentType>(), Err("Invalid payment type.".to_string()));
        assert!("SECOND".parse::<AppointmentType>().is_err());
    }

    #[test]
    fn test_status_display_matches_wire_code() {
        for code in ["BOOKED", "CANCELED", "COMPLETED"] {
            let status: AppointmentStatus = serde_json::from_value(serde_json::json!(code)).unwrap();
            assert_eq!(status.to_string(), code);
        }

        let unknown: AppointmentStatus = serde_json::from_value(serde_json::json!("RESCHEDULED")).unwrap();
        assert_eq!(unknown, AppointmentStatus::Unknown);
        assert_eq!(unknown.as_str(), "UNKNOWN");
    }
}
