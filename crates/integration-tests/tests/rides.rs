//! Ride booking, visibility, acceptance, and lifecycle over real HTTP.

use serde_json::{Value, json};

use diwai_integration_tests::{TestContext, error_message};

#[tokio::test]
async fn test_book_ride_quotes_fare_from_fixed_route() {
    let ctx = TestContext::spawn().await;
    let (token, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;

    // 10 km suv at 3/km on a 5 base
    let ride = ctx.book_ride(&token, "suv").await;
    assert_eq!(ride["fare"], "35.00");
    assert_eq!(ride["distance"], 10.0);
    assert_eq!(ride["eta"], 7);
    assert_eq!(ride["status"], "pending");
    assert_eq!(ride["paymentMethod"], "cash");
    assert_eq!(ride["paymentStatus"], "pending");
    assert!(ride["driverId"].is_null());
    assert!(ride["startTime"].is_null());
}

#[tokio::test]
async fn test_book_ride_missing_fields() {
    let ctx = TestContext::spawn().await;
    let (token, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;

    let resp = ctx
        .post(&token, "/rides", &json!({ "pickupLocation": "Waigani" }))
        .await;
    assert_eq!(resp.status(), 400);
    assert_eq!(error_message(resp).await, "Missing required fields");
}

#[tokio::test]
async fn test_driver_accepts_pending_ride_once() {
    let ctx = TestContext::spawn().await;
    let (passenger, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;
    let (first, first_user) = ctx.register(&TestContext::unique_email("d1"), "driver").await;
    let (second, _) = ctx.register(&TestContext::unique_email("d2"), "driver").await;

    let ride = ctx.book_ride(&passenger, "sedan").await;
    let id = ride["id"].as_str().unwrap();

    let resp = ctx.put(&first, &format!("/rides/{id}/accept"), &json!({})).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ride"]["status"], "accepted");
    assert_eq!(body["ride"]["driverId"], first_user["id"]);
    assert!(body["ride"]["startTime"].is_string());

    // The ride is already taken
    let resp = ctx.put(&second, &format!("/rides/{id}/accept"), &json!({})).await;
    assert_eq!(resp.status(), 400);
    assert_eq!(error_message(resp).await, "Ride is not available");
}

#[tokio::test]
async fn test_passenger_cannot_accept() {
    let ctx = TestContext::spawn().await;
    let (passenger, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;
    let ride = ctx.book_ride(&passenger, "sedan").await;
    let id = ride["id"].as_str().unwrap();

    let resp = ctx.put(&passenger, &format!("/rides/{id}/accept"), &json!({})).await;
    assert_eq!(resp.status(), 403);
    assert_eq!(error_message(resp).await, "Only drivers can accept rides");
}

#[tokio::test]
async fn test_accept_unknown_ride() {
    let ctx = TestContext::spawn().await;
    let (driver, _) = ctx.register(&TestContext::unique_email("d"), "driver").await;

    let id = uuid::Uuid::new_v4();
    let resp = ctx.put(&driver, &format!("/rides/{id}/accept"), &json!({})).await;
    assert_eq!(resp.status(), 404);
    assert_eq!(error_message(resp).await, "Ride not found");
}

#[tokio::test]
async fn test_ride_detail_access() {
    let ctx = TestContext::spawn().await;
    let (owner, _) = ctx
        .register(&TestContext::unique_email("owner"), "passenger")
        .await;
    let (stranger, _) = ctx
        .register(&TestContext::unique_email("stranger"), "passenger")
        .await;
    let admin = ctx.admin_token().await;

    let ride = ctx.book_ride(&owner, "sedan").await;
    let id = ride["id"].as_str().unwrap();

    assert_eq!(ctx.get(&owner, &format!("/rides/{id}")).await.status(), 200);
    assert_eq!(ctx.get(&admin, &format!("/rides/{id}")).await.status(), 200);

    let resp = ctx.get(&stranger, &format!("/rides/{id}")).await;
    assert_eq!(resp.status(), 403);
    assert_eq!(error_message(resp).await, "Access denied");

    let resp = ctx
        .get(&owner, &format!("/rides/{}", uuid::Uuid::new_v4()))
        .await;
    assert_eq!(resp.status(), 404);
    assert_eq!(error_message(resp).await, "Ride not found");
}

#[tokio::test]
async fn test_driver_sees_open_rides_passenger_sees_own() {
    let ctx = TestContext::spawn().await;
    let (p1, _) = ctx.register(&TestContext::unique_email("p1"), "passenger").await;
    let (p2, _) = ctx.register(&TestContext::unique_email("p2"), "passenger").await;
    let (driver, _) = ctx.register(&TestContext::unique_email("d"), "driver").await;

    ctx.book_ride(&p1, "sedan").await;
    ctx.book_ride(&p2, "sedan").await;

    let body: Value = ctx.get(&driver, "/rides").await.json().await.unwrap();
    assert_eq!(body["rides"].as_array().unwrap().len(), 2);

    let body: Value = ctx.get(&p1, "/rides").await.json().await.unwrap();
    let rides = body["rides"].as_array().unwrap();
    assert_eq!(rides.len(), 1);
    // Passenger profile is embedded alongside the ride
    assert!(rides[0]["passenger"]["email"].is_string());
}

#[tokio::test]
async fn test_completion_credits_driver_earnings() {
    let ctx = TestContext::spawn().await;
    let (passenger, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;
    let (driver, _) = ctx.register(&TestContext::unique_email("d"), "driver").await;

    let ride = ctx.book_ride(&passenger, "suv").await;
    let id = ride["id"].as_str().unwrap();
    ctx.put(&driver, &format!("/rides/{id}/accept"), &json!({})).await;

    let resp = ctx
        .put(
            &driver,
            &format!("/rides/{id}/status"),
            &json!({ "status": "completed" }),
        )
        .await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ride"]["status"], "completed");
    assert!(body["ride"]["endTime"].is_string());

    let body: Value = ctx.get(&driver, "/users/me").await.json().await.unwrap();
    assert_eq!(body["user"]["earnings"], "35.00");
}

#[tokio::test]
async fn test_status_update_authorization() {
    let ctx = TestContext::spawn().await;
    let (passenger, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;
    let (assigned, _) = ctx.register(&TestContext::unique_email("d1"), "driver").await;
    let (other, _) = ctx.register(&TestContext::unique_email("d2"), "driver").await;
    let admin = ctx.admin_token().await;

    let ride = ctx.book_ride(&passenger, "sedan").await;
    let id = ride["id"].as_str().unwrap();
    ctx.put(&assigned, &format!("/rides/{id}/accept"), &json!({})).await;

    let path = format!("/rides/{id}/status");
    let in_progress = json!({ "status": "in-progress" });

    let resp = ctx.put(&other, &path, &in_progress).await;
    assert_eq!(resp.status(), 403);
    assert_eq!(error_message(resp).await, "Access denied");

    let resp = ctx.put(&passenger, &path, &in_progress).await;
    assert_eq!(resp.status(), 403);

    assert_eq!(ctx.put(&assigned, &path, &in_progress).await.status(), 200);
    // Admin can move any ride
    assert_eq!(
        ctx.put(&admin, &path, &json!({ "status": "cancelled" }))
            .await
            .status(),
        200
    );
}

#[tokio::test]
async fn test_status_update_rejects_unknown_status() {
    let ctx = TestContext::spawn().await;
    let (passenger, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;
    let admin = ctx.admin_token().await;
    let ride = ctx.book_ride(&passenger, "sedan").await;
    let id = ride["id"].as_str().unwrap();

    let resp = ctx
        .put(
            &admin,
            &format!("/rides/{id}/status"),
            &json!({ "status": "teleported" }),
        )
        .await;
    assert_eq!(resp.status(), 400);
    assert_eq!(error_message(resp).await, "Invalid status");
}
