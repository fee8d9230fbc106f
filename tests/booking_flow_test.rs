mod common;

use std::sync::atomic::Ordering;

use common::StubBackend;

use cyfair_booking::models::customer::ContactInfo;
use cyfair_booking::models::house::{Frequency, HouseSizeBand};
use cyfair_booking::wizard::{BookingStep, BookingWizard, PromoError, SubmitError};

fn contact() -> ContactInfo {
    ContactInfo {
        email: "guest@example.com".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        phone: "555-1234".to_string(),
        address: "123 Main St".to_string(),
        city: "Houston".to_string(),
        state: "TX".to_string(),
        zip_code: "77429".to_string(),
    }
}

/// Drive a wizard through every step up to review, asserting each gate opens
/// as the required selection lands.
async fn walk_to_review(wizard: &mut BookingWizard<&StubBackend>) {
    wizard.load_initial_data().await;

    wizard.set_house_size(HouseSizeBand::Sqft1500To2000).await;
    wizard.set_frequency(Frequency::Weekly).await;
    let standard = wizard.standard_services().next().unwrap().clone();
    wizard.toggle_standard_service(&standard);
    assert!(wizard.next(), "rooms gate should open");

    wizard.rooms_mut().master_bedroom = true;
    wizard.rooms_mut().set_other_bedrooms(2);
    assert!(wizard.next(), "add-ons are optional");

    let fridge = wizard
        .a_la_carte_services()
        .find(|s| s.id == "fridge_clean")
        .unwrap()
        .clone();
    wizard.add_a_la_carte(&fridge);
    let oven = wizard
        .a_la_carte_services()
        .find(|s| s.id == "oven_clean")
        .unwrap()
        .clone();
    wizard.add_a_la_carte(&oven);
    wizard.set_cart_quantity("oven_clean", 0);
    assert!(wizard.next(), "date step is always reachable");

    let date = wizard.available_dates()[0].clone();
    wizard.select_date(&date).await.unwrap();
    assert!(wizard.next(), "time gate should open once a date is set");

    let slot = wizard.time_slots()[0].clone();
    wizard.select_time_slot(slot);
    assert!(wizard.next(), "contact gate should open once a slot is set");

    wizard.set_contact(contact());
    wizard.set_special_instructions("Please use eco-friendly products");
    assert!(wizard.next(), "review gate should open with contact details");
    assert_eq!(wizard.current_step(), BookingStep::Review);
}

#[tokio::test]
async fn guest_flow_submits_mapped_payload() {
    let stub = StubBackend::with_fixtures();
    let mut wizard = BookingWizard::new(&stub, true);
    walk_to_review(&mut wizard).await;

    // band 1500-2000 weekly priced at 150 plus one 35.00 add-on
    let quote = wizard.quote();
    assert_eq!(quote.base_price, 150.0);
    assert_eq!(quote.subtotal, 185.0);

    let outcome = wizard.submit().await.unwrap();
    assert_eq!(outcome.booking.id, "abc123");
    assert_eq!(outcome.amount_charged, 185.0);
    assert!(outcome.payment.unwrap().success);

    let submissions = stub.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    let value = serde_json::to_value(&submissions[0]).unwrap();

    // customer block is snake_case with the guest flag set
    assert_eq!(value["customer"]["first_name"], "John");
    assert_eq!(value["customer"]["zip_code"], "77429");
    assert_eq!(value["customer"]["is_guest"], true);

    // rooms stay camelCase on the wire
    assert_eq!(value["rooms"]["masterBedroom"], true);
    assert_eq!(value["rooms"]["otherBedrooms"], 2);

    assert_eq!(value["house_size"], "1500-2000");
    assert_eq!(value["frequency"], "weekly");
    assert_eq!(value["base_price"], 150.0);
    assert_eq!(value["booking_date"], "2026-09-01");
    assert_eq!(value["time_slot"], "08:00-10:00");
    assert_eq!(
        value["special_instructions"],
        "Please use eco-friendly products"
    );
    assert_eq!(value["promo_code"], serde_json::Value::Null);

    // the zeroed oven entry was removed before assembly
    let add_ons = value["a_la_carte_services"].as_array().unwrap();
    assert_eq!(add_ons.len(), 1);
    assert_eq!(add_ons[0]["service_id"], "fridge_clean");
    assert_eq!(add_ons[0]["quantity"], 1);

    // the mock payment charged the quoted total
    let payments = stub.payment_requests.lock().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, 185.0);
    assert_eq!(payments[0].payment_method, "mock_card");
}

#[tokio::test]
async fn successful_submit_discards_the_draft() {
    let stub = StubBackend::with_fixtures();
    let mut wizard = BookingWizard::new(&stub, true);
    walk_to_review(&mut wizard).await;

    wizard.submit().await.unwrap();

    // back at the start with a fresh draft
    assert_eq!(wizard.current_step(), BookingStep::ServiceAndSize);
    assert!(wizard.draft().house_size().is_none());
    assert!(wizard.draft().cart().is_empty());
    assert!(wizard.draft().selected_date().is_none());
    assert!(!wizard.is_submitting());

    // mutating the new draft does not grow the recorded submission
    wizard.set_cart_quantity("fridge_clean", 5);
    assert_eq!(stub.submissions.lock().unwrap().len(), 1);
    assert_eq!(
        stub.submissions.lock().unwrap()[0].a_la_carte_services[0].quantity,
        1
    );
}

#[tokio::test]
async fn pricing_failure_falls_back_to_minimum() {
    let stub = StubBackend::with_fixtures();
    stub.fail_pricing.store(true, Ordering::SeqCst);

    let mut wizard = BookingWizard::new(&stub, true);
    wizard.set_house_size(HouseSizeBand::Sqft2500To3000).await;
    wizard.set_frequency(Frequency::BiWeekly).await;

    assert_eq!(wizard.draft().base_price(), 125.0);
    assert_eq!(wizard.quote().total, 125.0);
}

#[tokio::test]
async fn next_is_a_noop_when_gate_is_closed() {
    let stub = StubBackend::with_fixtures();
    let mut wizard = BookingWizard::new(&stub, true);
    wizard.load_initial_data().await;

    // nothing selected: the rooms gate is closed
    assert!(!wizard.next());
    assert_eq!(wizard.current_step(), BookingStep::ServiceAndSize);

    // backward navigation floors at the first step
    assert!(!wizard.previous());
    assert_eq!(wizard.current_step(), BookingStep::ServiceAndSize);

    // half-complete profile still gates
    wizard.set_house_size(HouseSizeBand::Sqft1000To1500).await;
    assert!(!wizard.next());
    assert_eq!(wizard.current_step(), BookingStep::ServiceAndSize);

    wizard.set_frequency(Frequency::Monthly).await;
    assert!(wizard.next());
    assert_eq!(wizard.current_step(), BookingStep::Rooms);

    // revisiting an earlier step is never gated
    assert!(wizard.previous());
    assert_eq!(wizard.current_step(), BookingStep::ServiceAndSize);
}

#[tokio::test]
async fn selecting_a_new_date_clears_the_slot() {
    let stub = StubBackend::with_fixtures();
    let mut wizard = BookingWizard::new(&stub, true);
    wizard.load_initial_data().await;

    wizard.select_date("2026-09-01").await.unwrap();
    let slot = wizard.time_slots()[0].clone();
    wizard.select_time_slot(slot);
    assert!(wizard.draft().selected_slot().is_some());

    wizard.select_date("2026-09-02").await.unwrap();
    assert_eq!(wizard.draft().selected_date(), Some("2026-09-02"));
    assert!(wizard.draft().selected_slot().is_none());
}

#[tokio::test]
async fn promo_code_is_uppercased_and_idempotent() {
    let stub = StubBackend::with_fixtures();
    let mut wizard = BookingWizard::new(&stub, true);
    wizard.set_house_size(HouseSizeBand::Sqft1500To2000).await;
    wizard.set_frequency(Frequency::Weekly).await;

    // subtotal 150, 10% = 15, cap 15 leaves it at 15
    let first = wizard.apply_promo("save10").await.unwrap();
    assert_eq!(first.discount, 15.0);

    let second = wizard.apply_promo("SAVE10").await.unwrap();
    assert_eq!(second.discount, first.discount);

    let requests = stub.promo_requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.code == "SAVE10"));
    assert!(requests.iter().all(|r| r.subtotal == 150.0));

    assert_eq!(wizard.quote().total, 135.0);
}

#[tokio::test]
async fn rejected_promo_leaves_prior_promo_applied() {
    let stub = StubBackend::with_fixtures();
    let mut wizard = BookingWizard::new(&stub, true);
    wizard.set_house_size(HouseSizeBand::Sqft1500To2000).await;
    wizard.set_frequency(Frequency::Weekly).await;

    wizard.apply_promo("SAVE10").await.unwrap();
    let before = wizard.quote();

    match wizard.apply_promo("BOGUS").await {
        Err(PromoError::Rejected(message)) => assert_eq!(message, "Invalid promo code"),
        other => panic!("expected rejection, got {:?}", other.map(|a| a.discount)),
    }

    let after = wizard.quote();
    assert_eq!(after.discount, before.discount);
    assert_eq!(
        wizard.draft().applied_promo().unwrap().promo.code,
        "SAVE10"
    );
}

#[tokio::test]
async fn failed_submission_preserves_draft_for_retry() {
    let stub = StubBackend::with_fixtures();
    let mut wizard = BookingWizard::new(&stub, true);
    walk_to_review(&mut wizard).await;
    stub.fail_submit.store(true, Ordering::SeqCst);

    match wizard.submit().await {
        Err(SubmitError::Backend(_)) => {}
        other => panic!("expected backend error, got {:?}", other.is_ok()),
    }

    // draft and step untouched, guard released
    assert_eq!(wizard.current_step(), BookingStep::Review);
    assert!(wizard.draft().house_size().is_some());
    assert!(!wizard.is_submitting());
    assert!(stub.submissions.lock().unwrap().is_empty());

    // the retry goes through once the backend recovers
    stub.fail_submit.store(false, Ordering::SeqCst);
    let outcome = wizard.submit().await.unwrap();
    assert_eq!(outcome.booking.id, "abc123");
}

#[tokio::test]
async fn submit_is_rejected_off_the_review_step() {
    let stub = StubBackend::with_fixtures();
    let mut wizard = BookingWizard::new(&stub, true);
    wizard.load_initial_data().await;

    match wizard.submit().await {
        Err(SubmitError::NotOnReview) => {}
        other => panic!("expected NotOnReview, got {:?}", other.is_ok()),
    }
}

#[tokio::test]
async fn catalog_failures_warn_but_do_not_abort() {
    let stub = StubBackend::with_fixtures();
    stub.fail_catalog.store(true, Ordering::SeqCst);
    stub.fail_dates.store(true, Ordering::SeqCst);

    let mut wizard = BookingWizard::new(&stub, true);
    let warnings = wizard.load_initial_data().await;
    assert_eq!(warnings.len(), 2);
    assert!(wizard.catalog().is_empty());
    assert!(wizard.available_dates().is_empty());

    // the session stays usable
    wizard.set_house_size(HouseSizeBand::Sqft1000To1500).await;
    wizard.set_frequency(Frequency::Weekly).await;
    assert_eq!(wizard.draft().base_price(), 150.0);
}

#[tokio::test]
async fn payment_failure_still_reports_the_booking() {
    let mut stub = StubBackend::with_fixtures();
    stub.payment_success = false;

    let mut wizard = BookingWizard::new(&stub, true);
    walk_to_review(&mut wizard).await;

    let outcome = wizard.submit().await.unwrap();
    assert_eq!(outcome.booking.id, "abc123");
    assert!(!outcome.payment.unwrap().success);

    // the booking exists server-side despite the failed payment
    assert_eq!(stub.submissions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn confirmation_view_returns_the_created_booking() {
    let stub = StubBackend::with_fixtures();
    let mut wizard = BookingWizard::new(&stub, true);
    walk_to_review(&mut wizard).await;

    let outcome = wizard.submit().await.unwrap();
    let confirmation = wizard.fetch_confirmation(&outcome.booking.id).await.unwrap();
    assert_eq!(confirmation.id, "abc123");
    assert_eq!(confirmation.booking_date, "2026-09-01");
    assert_eq!(confirmation.time_slot, "08:00-10:00");
}
