//! Payment recording over real HTTP.

use serde_json::{Value, json};

use diwai_integration_tests::{TestContext, error_message};

#[tokio::test]
async fn test_passenger_pays_for_own_ride() {
    let ctx = TestContext::spawn().await;
    let (passenger, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;
    let ride = ctx.book_ride(&passenger, "suv").await;
    let id = ride["id"].as_str().unwrap();

    let resp = ctx
        .post(
            &passenger,
            "/payments",
            &json!({ "rideId": id, "amount": "35.00", "method": "card" }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Payment processed successfully");

    let payment = &body["payment"];
    assert_eq!(payment["rideId"], ride["id"]);
    assert_eq!(payment["amount"], "35.00");
    assert_eq!(payment["method"], "card");
    assert_eq!(payment["status"], "completed");
    assert!(payment["transactionId"].as_str().unwrap().starts_with("TXN-"));

    // The ride is now marked paid
    let body: Value = ctx
        .get(&passenger, &format!("/rides/{id}"))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["ride"]["paymentStatus"], "completed");
}

#[tokio::test]
async fn test_payment_method_defaults_to_cash() {
    let ctx = TestContext::spawn().await;
    let (passenger, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;
    let ride = ctx.book_ride(&passenger, "sedan").await;

    let resp = ctx
        .post(
            &passenger,
            "/payments",
            &json!({ "rideId": ride["id"], "amount": "25.00" }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["payment"]["method"], "cash");
}

#[tokio::test]
async fn test_payment_requires_ride_and_amount() {
    let ctx = TestContext::spawn().await;
    let (passenger, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;

    let resp = ctx
        .post(&passenger, "/payments", &json!({ "amount": "25.00" }))
        .await;
    assert_eq!(resp.status(), 400);
    assert_eq!(error_message(resp).await, "Missing required fields");
}

#[tokio::test]
async fn test_payment_for_unknown_ride() {
    let ctx = TestContext::spawn().await;
    let (passenger, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;

    let resp = ctx
        .post(
            &passenger,
            "/payments",
            &json!({ "rideId": uuid::Uuid::new_v4(), "amount": "25.00" }),
        )
        .await;
    assert_eq!(resp.status(), 404);
    assert_eq!(error_message(resp).await, "Ride not found");
}

#[tokio::test]
async fn test_stranger_cannot_pay_someone_elses_ride() {
    let ctx = TestContext::spawn().await;
    let (owner, _) = ctx
        .register(&TestContext::unique_email("owner"), "passenger")
        .await;
    let (stranger, _) = ctx
        .register(&TestContext::unique_email("stranger"), "passenger")
        .await;
    let ride = ctx.book_ride(&owner, "sedan").await;

    let resp = ctx
        .post(
            &stranger,
            "/payments",
            &json!({ "rideId": ride["id"], "amount": "25.00" }),
        )
        .await;
    assert_eq!(resp.status(), 403);
    assert_eq!(error_message(resp).await, "Access denied");
}

#[tokio::test]
async fn test_admin_payment_is_ledgered_under_the_admin() {
    let ctx = TestContext::spawn().await;
    let (passenger, _) = ctx
        .register(&TestContext::unique_email("p"), "passenger")
        .await;
    let admin = ctx.admin_token().await;
    let ride = ctx.book_ride(&passenger, "sedan").await;

    let resp = ctx
        .post(
            &admin,
            "/payments",
            &json!({ "rideId": ride["id"], "amount": "25.00" }),
        )
        .await;
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let me: Value = ctx.get(&admin, "/users/me").await.json().await.unwrap();
    assert_eq!(body["payment"]["passengerId"], me["user"]["id"]);
    assert_ne!(body["payment"]["passengerId"], ride["passengerId"]);

    // The submitter owns the record, so it never shows up in the
    // passenger's own listing
    let body: Value = ctx.get(&passenger, "/payments").await.json().await.unwrap();
    assert_eq!(body["payments"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_payment_listing_is_scoped() {
    let ctx = TestContext::spawn().await;
    let (p1, _) = ctx.register(&TestContext::unique_email("p1"), "passenger").await;
    let (p2, _) = ctx.register(&TestContext::unique_email("p2"), "passenger").await;
    let admin = ctx.admin_token().await;

    for token in [&p1, &p2] {
        let ride = ctx.book_ride(token, "sedan").await;
        let resp = ctx
            .post(
                token,
                "/payments",
                &json!({ "rideId": ride["id"], "amount": "25.00" }),
            )
            .await;
        assert_eq!(resp.status(), 201);
    }

    let body: Value = ctx.get(&p1, "/payments").await.json().await.unwrap();
    assert_eq!(body["payments"].as_array().unwrap().len(), 1);

    let body: Value = ctx.get(&admin, "/payments").await.json().await.unwrap();
    assert_eq!(body["payments"].as_array().unwrap().len(), 2);
}
