use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::{BookingError, BookingField, BookingForm, EditForm, PatientTarget};
use assistant_cell::AssistantService;
use shared_utils::test_utils::{MockApiResponses, TestConfig, TestUser};

fn service_for(server: &MockServer) -> AssistantService {
    AssistantService::new(&TestConfig::with_base_url(&format!("{}/api", server.uri())).to_client_config())
}

#[tokio::test]
async fn test_book_for_named_patient() {
    let mock_server = MockServer::start().await;
    let assistant = TestUser::assistant("assistant@example.com");
    let doctor_user = TestUser::doctor("doctor@example.com");

    Mock::given(method("GET"))
        .and(path("/api/assistant/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::doctor_response(&doctor_user.id, true)
        ])))
        .mount(&mock_server)
        .await;

    let mut created = MockApiResponses::appointment_response("app-9", &doctor_user.id, "", "2024-01-15T09:40:00");
    created["patientName"] = json!("Georgi Dimitrov");

    Mock::given(method("POST"))
        .and(path(format!("/api/assistant/doctor/{}/appointments", doctor_user.id)))
        .and(body_json(json!({
            "patientName": "Georgi Dimitrov",
            "dateTime": "2024-01-15T09:40:00",
            "type": "PRIMARY",
            "paymentType": "PRIVATE"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(created))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let doctors = service.get_my_doctors(&assistant.token()).await.unwrap();
    assert_eq!(doctors.len(), 1);

    let mut form = BookingForm::for_patient(&doctors[0], PatientTarget::Name("Georgi Dimitrov".into()));
    form.slot = Some("2024-01-15T09:40:00".into());

    let appointment = form.submit(&service, &assistant.token(), |_| {}).await.unwrap();
    assert_eq!(appointment.patient_name.as_deref(), Some("Georgi Dimitrov"));
}

#[tokio::test]
async fn test_book_for_patient_id_validates_before_request() {
    let mock_server = MockServer::start().await;
    let doctor_user = TestUser::doctor("doctor@example.com");

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let doctor = serde_json::from_value(MockApiResponses::doctor_response(&doctor_user.id, false)).unwrap();
    let mut form = BookingForm::for_patient(&doctor, PatientTarget::Id("patient-7".into()));
    form.slot = Some("2024-01-15T09:40:00".into());

    let result = form.submit(&service_for(&mock_server), "token", |_| {}).await;
    assert_matches!(result, Err(BookingError::Invalid { field: Some(BookingField::Patient), .. }));
}

#[tokio::test]
async fn test_doctor_appointments_edit_and_cancel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/assistant/doctor/d1/appointments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [MockApiResponses::appointment_response("a1", "d1", "p1", "2024-01-15T10:00:00")]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/assistant/appointments/a1"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/assistant/appointments/a1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let appointments = service.get_doctor_appointments("d1", "token").await.unwrap();
    assert_eq!(appointments.len(), 1);

    let mut edit = EditForm::from_appointment(&appointments[0], false);
    assert_matches!(edit.submit(&service, "token").await, Err(BookingError::PermissionDenied));

    service.cancel_appointment("a1", "token").await.unwrap();
}

#[tokio::test]
async fn test_users_envelope_variants() {
    let mock_server = MockServer::start().await;
    let patient = TestUser::patient("p@example.com");

    Mock::given(method("GET"))
        .and(path("/api/assistant/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [MockApiResponses::user_response(&patient)]
        })))
        .mount(&mock_server)
        .await;

    let users = service_for(&mock_server).get_all_users("token").await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, patient.id);
}
