//! API integration tests
//!
//! Require a running server with a migrated database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create an owner and a property type, returning their ids
async fn create_references(client: &Client) -> (i64, i64) {
    let tag = uuid::Uuid::new_v4().simple().to_string();

    let owner: Value = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "email": format!("owner-{}@example.com", tag),
            "firstname": "Test",
            "lastname": "Owner"
        }))
        .send()
        .await
        .expect("Failed to create owner")
        .json()
        .await
        .expect("Failed to parse owner");

    let property_type: Value = client
        .post(format!("{}/property-types", BASE_URL))
        .json(&json!({ "name": format!("Mobil-home {}", tag) }))
        .send()
        .await
        .expect("Failed to create property type")
        .json()
        .await
        .expect("Failed to parse property type");

    (
        owner["id"].as_i64().expect("No owner id"),
        property_type["id"].as_i64().expect("No property type id"),
    )
}

/// Helper to create a property open from May 5 to Oct 10 2024
async fn create_property(client: &Client) -> i64 {
    let (owner_id, type_id) = create_references(client).await;

    let response = client
        .post(format!("{}/properties", BASE_URL))
        .json(&json!({
            "availability_start": "2024-05-05",
            "availability_end": "2024-10-10",
            "type_id": type_id,
            "owner_id": owner_id,
            "adult_rate": 2500,
            "child_rate": 1200
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No property id")
}

async fn create_booking(client: &Client, property_id: i64) -> i64 {
    let response = client
        .post(format!("{}/properties/{}/bookings", BASE_URL, property_id))
        .json(&json!({
            "arrival_date": "2024-07-01",
            "departure_date": "2024-07-08",
            "adult_count": 2,
            "child_count": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No booking id")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_season_lookup() {
    let client = Client::new();

    let cases = [
        ("2024-07-14", json!("high")),
        ("2024-05-05", json!("open")),
        ("2024-10-11", Value::Null),
    ];

    for (date, expected) in cases {
        let response = client
            .get(format!("{}/seasons/lookup?date={}", BASE_URL, date))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["season"], expected, "{}", date);
    }
}

#[tokio::test]
#[ignore]
async fn test_list_seasons() {
    let client = Client::new();

    let response = client
        .get(format!("{}/seasons", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    let seasons = body.as_array().expect("Expected an array");
    assert_eq!(seasons.len(), 2);
    assert_eq!(seasons[0]["season"], "high");
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_property() {
    let client = Client::new();
    let id = create_property(&client).await;

    let response = client
        .get(format!("{}/properties/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["property"]["adult_rate"], 2500);
    assert_eq!(body["formatted_price"], "25");
    assert!(body["bookings"].as_array().expect("No bookings").is_empty());
}

#[tokio::test]
#[ignore]
async fn test_create_property_equal_dates_rejected() {
    let client = Client::new();
    let (owner_id, type_id) = create_references(&client).await;

    let response = client
        .post(format!("{}/properties", BASE_URL))
        .json(&json!({
            "availability_start": "2024-06-01",
            "availability_end": "2024-06-01",
            "type_id": type_id,
            "owner_id": owner_id,
            "adult_rate": 2500
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["violations"][0]["field"], "availability_start");
    assert_eq!(
        body["violations"][0]["message"],
        "La date de début de disponibilité doit être inférieur à la date de fin de disponibilité!"
    );
}

#[tokio::test]
#[ignore]
async fn test_create_property_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/properties", BASE_URL))
        .json(&json!({ "child_rate": 0 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.expect("Failed to parse response");
    let fields: Vec<&str> = body["violations"]
        .as_array()
        .expect("No violations")
        .iter()
        .filter_map(|v| v["field"].as_str())
        .collect();
    assert!(fields.contains(&"availability_start"));
    assert!(fields.contains(&"adult_rate"));
}

#[tokio::test]
#[ignore]
async fn test_rate_quote() {
    let client = Client::new();
    let id = create_property(&client).await;

    let response = client
        .get(format!(
            "{}/properties/{}/rate?adults=2&children=1&date=2024-07-14",
            BASE_URL, id
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["nightly_rate"], 6200);
    assert_eq!(body["formatted_rate"], "62");
    assert_eq!(body["season"], "high");
    assert_eq!(body["available"], true);
}

#[tokio::test]
#[ignore]
async fn test_register_image() {
    let client = Client::new();
    let id = create_property(&client).await;

    let response = client
        .put(format!("{}/properties/{}/image", BASE_URL, id))
        .json(&json!({ "original_name": "Chalet.JPG" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let name = body["image_name"].as_str().expect("No image name");
    assert!(name.ends_with(".jpg"));

    let response = client
        .put(format!("{}/properties/{}/image", BASE_URL, id))
        .json(&json!({ "original_name": "notes.txt" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_booking_attach_and_detach() {
    let client = Client::new();
    let first = create_property(&client).await;
    let second = create_property(&client).await;
    let booking = create_booking(&client, first).await;

    // Move the booking to the second property
    let response = client
        .put(format!("{}/properties/{}/bookings/{}", BASE_URL, second, booking))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["property_id"], second);

    // No longer attached to the first one
    let response = client
        .delete(format!("{}/properties/{}/bookings/{}", BASE_URL, first, booking))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .delete(format!("{}/properties/{}/bookings/{}", BASE_URL, second, booking))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["property_id"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_booking_departure_before_arrival() {
    let client = Client::new();
    let id = create_property(&client).await;

    let response = client
        .post(format!("{}/properties/{}/bookings", BASE_URL, id))
        .json(&json!({
            "arrival_date": "2024-07-08",
            "departure_date": "2024-07-01",
            "adult_count": 2
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["violations"][0]["field"], "arrival_date");
}

#[tokio::test]
#[ignore]
async fn test_delete_property_removes_bookings() {
    let client = Client::new();
    let id = create_property(&client).await;
    let booking = create_booking(&client, id).await;

    let response = client
        .delete(format!("{}/properties/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/bookings/{}", BASE_URL, booking))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}
