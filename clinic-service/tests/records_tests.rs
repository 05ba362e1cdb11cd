mod common;

use chrono::DateTime;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

fn parse_instant(value: &serde_json::Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().expect("Expected a datetime string"))
        .expect("Failed to parse datetime")
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_create_and_get_patient() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let create = app
        .post_authenticated("/patients", &token)
        .json(&json!({
            "first_name": "John",
            "last_name": "Smith",
            "email": "john.smith@example.com",
            "phone": "555-0100"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(create.status(), StatusCode::CREATED);

    let body: serde_json::Value = create.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["first_name"], "John");
    assert_eq!(body["data"]["last_name"], "Smith");
    assert_eq!(body["data"]["email"], "john.smith@example.com");
    assert!(body["data"]["address"].is_null());
    let patient_id = body["data"]["id"].as_i64().unwrap();

    // Reads are public
    let get = app
        .get(&format!("/patients/{}", patient_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::OK);

    let body: serde_json::Value = get.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], patient_id);
    assert_eq!(body["data"]["phone"], "555-0100");
}

#[tokio::test]
async fn test_get_patient_not_found() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/patients/9999")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Patient not found");
}

#[tokio::test]
async fn test_update_patient_replaces_fields() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let create = app
        .post_authenticated("/patients", &token)
        .json(&json!({"first_name": "John", "last_name": "Smith"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = create.json().await.expect("Failed to parse response");
    let patient_id = body["data"]["id"].as_i64().unwrap();

    let update = app
        .put_authenticated(&format!("/patients/{}", patient_id), &token)
        .json(&json!({
            "first_name": "Johnny",
            "last_name": "Smith",
            "phone": "555-0199"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(update.status(), StatusCode::OK);

    let body: serde_json::Value = update.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["first_name"], "Johnny");
    assert_eq!(body["data"]["phone"], "555-0199");
    // Replacement, not patch: the email was omitted and is now unset.
    assert!(body["data"]["email"].is_null());
}

#[tokio::test]
async fn test_update_patient_not_found() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let response = app
        .put_authenticated("/patients/9999", &token)
        .json(&json!({"first_name": "John", "last_name": "Smith"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Patient not found");
}

#[tokio::test]
async fn test_delete_patient_then_get_not_found() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let create = app
        .post_authenticated("/patients", &token)
        .json(&json!({"first_name": "John", "last_name": "Smith"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = create.json().await.expect("Failed to parse response");
    let patient_id = body["data"]["id"].as_i64().unwrap();

    let delete = app
        .delete_authenticated(&format!("/patients/{}", patient_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let get = app
        .get(&format!("/patients/{}", patient_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let delete_again = app
        .delete_authenticated(&format!("/patients/{}", patient_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete_again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_patients_ordered_by_last_name() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    for (first, last) in [("Zoe", "Zimmer"), ("Alice", "Abbott"), ("Mark", "Miller")] {
        let response = app
            .post_authenticated("/patients", &token)
            .json(&json!({"first_name": first, "last_name": last}))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = app
        .get("/patients")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(list.status(), StatusCode::OK);

    let body: serde_json::Value = list.json().await.expect("Failed to parse response");
    let last_names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|patient| patient["last_name"].as_str().unwrap())
        .collect();
    assert_eq!(last_names, vec!["Abbott", "Miller", "Zimmer"]);
}

#[tokio::test]
async fn test_search_patients_is_case_insensitive() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    app.post_authenticated("/patients", &token)
        .json(&json!({
            "first_name": "John",
            "last_name": "Smith",
            "email": "jsmith@example.com"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    app.post_authenticated("/patients", &token)
        .json(&json!({"first_name": "Alice", "last_name": "Abbott"}))
        .send()
        .await
        .expect("Failed to execute request");

    let matched = app
        .get("/patients/search/SMITH")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(matched.status(), StatusCode::OK);

    let body: serde_json::Value = matched.json().await.expect("Failed to parse response");
    let results = body["data"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["last_name"], "Smith");

    // Email is searched too
    let by_email = app
        .get("/patients/search/jsmith")
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = by_email.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let unmatched = app
        .get("/patients/search/nobody")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(unmatched.status(), StatusCode::OK);

    let body: serde_json::Value = unmatched.json().await.expect("Failed to parse response");
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_patient_email_conflict() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let first = app
        .post_authenticated("/patients", &token)
        .json(&json!({
            "first_name": "John",
            "last_name": "Smith",
            "email": "shared@example.com"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .post_authenticated("/patients", &token)
        .json(&json!({
            "first_name": "Jane",
            "last_name": "Jones",
            "email": "shared@example.com"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = second.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_patient_embeds_linked_address() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let address = app
        .post_authenticated("/addresses", &token)
        .json(&json!({
            "street": "1 Main St",
            "city": "Boston",
            "postal_code": "02101"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(address.status(), StatusCode::CREATED);
    let body: serde_json::Value = address.json().await.expect("Failed to parse response");
    let address_id = body["data"]["id"].as_i64().unwrap();

    let patient = app
        .post_authenticated("/patients", &token)
        .json(&json!({
            "first_name": "John",
            "last_name": "Smith",
            "address_id": address_id
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(patient.status(), StatusCode::CREATED);

    let body: serde_json::Value = patient.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["address"]["id"], address_id);
    assert_eq!(body["data"]["address"]["street"], "1 Main St");
    assert_eq!(body["data"]["address"]["city"], "Boston");
}

#[tokio::test]
async fn test_patient_with_dangling_address_rejected() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let response = app
        .post_authenticated("/patients", &token)
        .json(&json!({
            "first_name": "John",
            "last_name": "Smith",
            "address_id": 9999
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("does not reference"));
}

#[tokio::test]
async fn test_dentist_crud() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    for (first, last, specialty) in [
        ("Greta", "Weber", "Orthodontics"),
        ("Ana", "Alvarez", "Endodontics"),
    ] {
        let response = app
            .post_authenticated("/dentists", &token)
            .json(&json!({
                "first_name": first,
                "last_name": last,
                "specialty": specialty
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = app
        .get("/dentists")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(list.status(), StatusCode::OK);

    let body: serde_json::Value = list.json().await.expect("Failed to parse response");
    let dentists = body["data"].as_array().unwrap().clone();
    assert_eq!(dentists.len(), 2);
    assert_eq!(dentists[0]["last_name"], "Alvarez");
    assert_eq!(dentists[1]["last_name"], "Weber");
    let dentist_id = dentists[0]["id"].as_i64().unwrap();

    let get = app
        .get(&format!("/dentists/{}", dentist_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::OK);

    let update = app
        .put_authenticated(&format!("/dentists/{}", dentist_id), &token)
        .json(&json!({
            "first_name": "Ana",
            "last_name": "Alvarez",
            "specialty": "Oral surgery"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update.status(), StatusCode::OK);

    let body: serde_json::Value = update.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["specialty"], "Oral surgery");

    let delete = app
        .delete_authenticated(&format!("/dentists/{}", dentist_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let get = app
        .get(&format!("/dentists/{}", dentist_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = get.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Dentist not found");
}

#[tokio::test]
async fn test_surgery_crud() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let create = app
        .post_authenticated("/surgeries", &token)
        .json(&json!({"title": "Root canal", "description": "Endodontic treatment"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(create.status(), StatusCode::CREATED);

    let body: serde_json::Value = create.json().await.expect("Failed to parse response");
    let surgery_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["title"], "Root canal");

    let list = app
        .get("/surgeries")
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = list.json().await.expect("Failed to parse response");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let update = app
        .put_authenticated(&format!("/surgeries/{}", surgery_id), &token)
        .json(&json!({"title": "Root canal treatment"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update.status(), StatusCode::OK);

    let body: serde_json::Value = update.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["title"], "Root canal treatment");
    assert!(body["data"]["description"].is_null());

    let delete = app
        .delete_authenticated(&format!("/surgeries/{}", surgery_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let get = app
        .get(&format!("/surgeries/{}", surgery_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = get.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Surgery not found");
}

#[tokio::test]
async fn test_appointment_crud_and_chronological_listing() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let patient = app
        .post_authenticated("/patients", &token)
        .json(&json!({"first_name": "John", "last_name": "Smith"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = patient.json().await.expect("Failed to parse response");
    let patient_id = body["data"]["id"].as_i64().unwrap();

    let dentist = app
        .post_authenticated("/dentists", &token)
        .json(&json!({"first_name": "Greta", "last_name": "Weber"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = dentist.json().await.expect("Failed to parse response");
    let dentist_id = body["data"]["id"].as_i64().unwrap();

    // Created out of order on purpose
    let later = app
        .post_authenticated("/appointments", &token)
        .json(&json!({
            "patient_id": patient_id,
            "dentist_id": dentist_id,
            "scheduled_at": "2026-09-20T14:30:00Z",
            "notes": "Follow-up"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(later.status(), StatusCode::CREATED);
    let body: serde_json::Value = later.json().await.expect("Failed to parse response");
    let later_id = body["data"]["id"].as_i64().unwrap();

    let earlier = app
        .post_authenticated("/appointments", &token)
        .json(&json!({
            "patient_id": patient_id,
            "dentist_id": dentist_id,
            "scheduled_at": "2026-09-01T09:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(earlier.status(), StatusCode::CREATED);
    let body: serde_json::Value = earlier.json().await.expect("Failed to parse response");
    let earlier_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(
        parse_instant(&body["data"]["scheduled_at"]),
        "2026-09-01T09:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );

    let list = app
        .get("/appointments")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(list.status(), StatusCode::OK);

    let body: serde_json::Value = list.json().await.expect("Failed to parse response");
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|appointment| appointment["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![earlier_id, later_id]);

    let update = app
        .put_authenticated(&format!("/appointments/{}", earlier_id), &token)
        .json(&json!({
            "patient_id": patient_id,
            "dentist_id": dentist_id,
            "scheduled_at": "2026-09-02T10:00:00Z",
            "notes": "Rescheduled"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update.status(), StatusCode::OK);

    let body: serde_json::Value = update.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["notes"], "Rescheduled");

    let delete = app
        .delete_authenticated(&format!("/appointments/{}", later_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let get = app
        .get(&format!("/appointments/{}", later_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = get.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Appointment not found");
}

#[tokio::test]
async fn test_appointment_with_dangling_reference_rejected() {
    let app = TestApp::spawn().await;
    let token = app.staff_token().await;

    let response = app
        .post_authenticated("/appointments", &token)
        .json(&json!({
            "patient_id": 9999,
            "dentist_id": 9999,
            "scheduled_at": "2026-09-01T09:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("does not reference"));
}

#[tokio::test]
async fn test_deleting_patient_cascades_to_appointments() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let patient = app
        .post_authenticated("/patients", &token)
        .json(&json!({"first_name": "John", "last_name": "Smith"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = patient.json().await.expect("Failed to parse response");
    let patient_id = body["data"]["id"].as_i64().unwrap();

    let dentist = app
        .post_authenticated("/dentists", &token)
        .json(&json!({"first_name": "Greta", "last_name": "Weber"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = dentist.json().await.expect("Failed to parse response");
    let dentist_id = body["data"]["id"].as_i64().unwrap();

    let appointment = app
        .post_authenticated("/appointments", &token)
        .json(&json!({
            "patient_id": patient_id,
            "dentist_id": dentist_id,
            "scheduled_at": "2026-09-01T09:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = appointment.json().await.expect("Failed to parse response");
    let appointment_id = body["data"]["id"].as_i64().unwrap();

    let delete = app
        .delete_authenticated(&format!("/patients/{}", patient_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let get = app
        .get(&format!("/appointments/{}", appointment_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_surgery_clears_appointment_reference() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let patient = app
        .post_authenticated("/patients", &token)
        .json(&json!({"first_name": "John", "last_name": "Smith"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = patient.json().await.expect("Failed to parse response");
    let patient_id = body["data"]["id"].as_i64().unwrap();

    let dentist = app
        .post_authenticated("/dentists", &token)
        .json(&json!({"first_name": "Greta", "last_name": "Weber"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = dentist.json().await.expect("Failed to parse response");
    let dentist_id = body["data"]["id"].as_i64().unwrap();

    let surgery = app
        .post_authenticated("/surgeries", &token)
        .json(&json!({"title": "Root canal"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = surgery.json().await.expect("Failed to parse response");
    let surgery_id = body["data"]["id"].as_i64().unwrap();

    let appointment = app
        .post_authenticated("/appointments", &token)
        .json(&json!({
            "patient_id": patient_id,
            "dentist_id": dentist_id,
            "surgery_id": surgery_id,
            "scheduled_at": "2026-09-01T09:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = appointment.json().await.expect("Failed to parse response");
    let appointment_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["surgery_id"], surgery_id);

    let delete = app
        .delete_authenticated(&format!("/surgeries/{}", surgery_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    // The appointment survives with the reference cleared.
    let get = app
        .get(&format!("/appointments/{}", appointment_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::OK);

    let body: serde_json::Value = get.json().await.expect("Failed to parse response");
    assert!(body["data"]["surgery_id"].is_null());
}

#[tokio::test]
async fn test_deleting_address_clears_patient_link() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let address = app
        .post_authenticated("/addresses", &token)
        .json(&json!({"street": "1 Main St", "city": "Boston"}))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = address.json().await.expect("Failed to parse response");
    let address_id = body["data"]["id"].as_i64().unwrap();

    let patient = app
        .post_authenticated("/patients", &token)
        .json(&json!({
            "first_name": "John",
            "last_name": "Smith",
            "address_id": address_id
        }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = patient.json().await.expect("Failed to parse response");
    let patient_id = body["data"]["id"].as_i64().unwrap();

    let delete = app
        .delete_authenticated(&format!("/addresses/{}", address_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let get = app
        .get(&format!("/patients/{}", patient_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::OK);

    let body: serde_json::Value = get.json().await.expect("Failed to parse response");
    assert!(body["data"]["address"].is_null());
}

#[tokio::test]
async fn test_address_crud_and_listing_by_city() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    for (street, city) in [("9 Elm St", "Boston"), ("4 Oak Ave", "Austin")] {
        let response = app
            .post_authenticated("/addresses", &token)
            .json(&json!({"street": street, "city": city}))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = app
        .get("/addresses")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(list.status(), StatusCode::OK);

    let body: serde_json::Value = list.json().await.expect("Failed to parse response");
    let cities: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|address| address["city"].as_str().unwrap())
        .collect();
    assert_eq!(cities, vec!["Austin", "Boston"]);
    let address_id = body["data"][0]["id"].as_i64().unwrap();

    let get = app
        .get(&format!("/addresses/{}", address_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::OK);

    let update = app
        .put_authenticated(&format!("/addresses/{}", address_id), &token)
        .json(&json!({
            "street": "4 Oak Ave",
            "city": "Austin",
            "state": "TX"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(update.status(), StatusCode::OK);

    let body: serde_json::Value = update.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["state"], "TX");

    let delete = app
        .delete_authenticated(&format!("/addresses/{}", address_id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let get = app
        .get(&format!("/addresses/{}", address_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = get.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Address not found");
}
