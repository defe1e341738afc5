//! Scenario tests for the patient search/registration controller.

use std::sync::{Arc, Mutex};

use carepoints_admin::{AdminError, PatientDesk};
use carepoints_core::Notifier;
use carepoints_server_client::{CarePointsClient, ServerConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<(&'static str, String)>>>,
}

impl Recorder {
    fn events(&self) -> Vec<(&'static str, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifier for Recorder {
    fn notify_success(&self, message: &str) {
        self.events.lock().unwrap().push(("success", message.to_string()));
    }

    fn notify_failure(&self, message: &str) {
        self.events.lock().unwrap().push(("failure", message.to_string()));
    }
}

fn desk_for(server: &MockServer, recorder: &Recorder) -> PatientDesk<Recorder> {
    let client = CarePointsClient::new(ServerConfig::new(server.uri())).unwrap();
    PatientDesk::new(client, recorder.clone())
}

async fn mount_patient_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/patient/getAllPatients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "patients": [
                {
                    "uhid": "12345",
                    "loyaltyCardNumber": "LC-1",
                    "name": "John Doe",
                    "points": 500
                },
                {
                    "uhid": "67890",
                    "loyaltyCardNumber": "LC-2",
                    "name": "Jane Smith",
                    "points": 750
                }
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn search_matches_name_and_uhid_case_insensitively() {
    let server = MockServer::start().await;
    mount_patient_list(&server).await;

    let recorder = Recorder::default();
    let mut desk = desk_for(&server, &recorder);
    desk.load_patients().await;

    let by_name = desk.search("jane");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].uhid, "67890");

    let by_uhid = desk.search("123");
    assert_eq!(by_uhid.len(), 1);
    assert_eq!(by_uhid[0].name, "John Doe");

    // A term hitting both records
    assert_eq!(desk.search("J").len(), 2);
}

#[tokio::test]
async fn empty_query_matches_nothing() {
    let server = MockServer::start().await;
    mount_patient_list(&server).await;

    let recorder = Recorder::default();
    let mut desk = desk_for(&server, &recorder);
    desk.load_patients().await;

    assert!(desk.search("").is_empty());
    assert!(desk.search("   ").is_empty());
}

#[tokio::test]
async fn load_failure_resolves_loading_with_an_empty_mirror() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/patient/getAllPatients"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let recorder = Recorder::default();
    let mut desk = desk_for(&server, &recorder);
    desk.load_patients().await;

    assert!(!desk.mirror().is_loading());
    assert!(desk.mirror().is_empty());
}

#[tokio::test]
async fn register_patient_success_appends_and_resets_the_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/patient/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "patient": {
                "uhid": "12345",
                "loyaltyCardNumber": "LC-1",
                "name": "John Doe",
                "points": 100
            }
        })))
        .mount(&server)
        .await;

    let recorder = Recorder::default();
    let mut desk = desk_for(&server, &recorder);

    desk.open_registration();
    desk.form.uhid = "12345".to_string();
    desk.form.loyalty_card_number = "LC-1".to_string();
    desk.form.name = "John Doe".to_string();
    desk.form.points = "100".to_string();

    desk.register_patient().await.unwrap();

    assert_eq!(desk.mirror().len(), 1);
    assert_eq!(desk.mirror().get("12345").unwrap().points, 100);
    assert!(!desk.form_dialog.is_open());
    assert!(desk.form.uhid.is_empty());
    assert_eq!(
        recorder.events(),
        vec![("success", "Patient registered successfully".to_string())]
    );
}

#[tokio::test]
async fn register_patient_validation_blocks_the_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/patient/register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let recorder = Recorder::default();
    let mut desk = desk_for(&server, &recorder);

    desk.open_registration();
    desk.form.uhid = "12345".to_string();
    desk.form.loyalty_card_number = "LC-1".to_string();
    desk.form.name = "John Doe".to_string();
    desk.form.points = "lots".to_string();

    let error = desk.register_patient().await.unwrap_err();

    let errors = error.field_errors().expect("validation error");
    assert_eq!(errors.len(), 1);
    assert!(errors.get("points").is_some());
    assert!(recorder.events().is_empty());
}

#[tokio::test]
async fn register_patient_failure_keeps_the_form_open_with_input_intact() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/patient/register"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let recorder = Recorder::default();
    let mut desk = desk_for(&server, &recorder);

    desk.open_registration();
    desk.form.uhid = "12345".to_string();
    desk.form.loyalty_card_number = "LC-1".to_string();
    desk.form.name = "John Doe".to_string();
    desk.form.points = "100".to_string();

    let error = desk.register_patient().await.unwrap_err();

    assert!(matches!(error, AdminError::Client(_)));
    assert!(desk.mirror().is_empty());
    assert!(desk.form_dialog.is_open());
    assert_eq!(desk.form.uhid, "12345");
    assert_eq!(
        recorder.events(),
        vec![("failure", "Failed to register patient".to_string())]
    );
}

#[tokio::test]
async fn register_rejects_a_second_submission_while_in_flight() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/patient/register"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let recorder = Recorder::default();
    let mut desk = desk_for(&server, &recorder);

    desk.open_registration();
    desk.form.uhid = "12345".to_string();
    desk.form.loyalty_card_number = "LC-1".to_string();
    desk.form.name = "John Doe".to_string();
    desk.form.points = "100".to_string();

    assert!(desk.form_dialog.try_begin());

    let error = desk.register_patient().await.unwrap_err();
    assert!(matches!(error, AdminError::SubmissionInFlight));
}
