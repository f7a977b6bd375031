//! Time-controlled tests of the tracking actor through its client. Actions
//! carry an explicit `now`, so these tests replay arbitrary points of a
//! delivery window without sleeping.

use chrono::{DateTime, Duration, TimeZone, Utc};

use bazaar_core::lifecycle::OrderSystem;
use bazaar_core::model::OrderStatus;
use bazaar_core::tracking_actor::{TrackingCreate, TrackingError, TrackingRecord};

fn placed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

async fn create(system: &OrderSystem, order_id: &str, city: &str) -> TrackingRecord {
    system
        .tracking_client
        .create_tracking(TrackingCreate {
            order_id: order_id.into(),
            placed_at: placed_at(),
            destination_city: city.to_string(),
        })
        .await
        .expect("Failed to create tracking");
    system
        .tracking_client
        .refresh(order_id.into(), placed_at())
        .await
        .expect("Failed to refresh tracking")
        .expect("Tracking record missing")
}

#[tokio::test]
async fn test_status_follows_elapsed_time() {
    let system = OrderSystem::new();

    let record = create(&system, "ORD-KOL001", "Kolkata").await;
    assert_eq!(record.status, OrderStatus::Placed);
    assert_eq!(record.delivery_days, 1);
    assert_eq!(record.progress, 0.0);

    // Half a day into a one-day window: past the 40% mark, so SHIPPED
    let midway = placed_at() + Duration::hours(12);
    let record = system
        .tracking_client
        .refresh("ORD-KOL001".into(), midway)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.status, OrderStatus::Shipped);
    assert!(record.milestones.packed.completed);
    assert!(record.milestones.shipped.completed);
    assert!(!record.milestones.delivered.completed);
    assert!((50.0..=75.0).contains(&record.progress));

    // Past the 70% mark: DELIVERED, progress pinned at 100
    let late = placed_at() + Duration::hours(20);
    let record = system
        .tracking_client
        .refresh("ORD-KOL001".into(), late)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.status, OrderStatus::Delivered);
    assert_eq!(record.progress, 100.0);
    assert!(record.milestones.delivered.completed);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_city_uses_fallback_window() {
    let system = OrderSystem::new();

    let record = create(&system, "ORD-ATL001", "Atlantis").await;
    assert_eq!(record.delivery_days, 5);
    assert!(record.coordinates.is_some(), "warehouse coords still present");

    // Three quarters of a day into five: under the 40% mark, but past 10%,
    // so PACKED
    let record = system
        .tracking_client
        .refresh("ORD-ATL001".into(), placed_at() + Duration::hours(18))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.status, OrderStatus::Packed);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_manual_delivery_overrides_clock() {
    let system = OrderSystem::new();
    create(&system, "ORD-MAN001", "Mumbai").await;

    // Admin marks it delivered immediately after placement
    let record = system
        .tracking_client
        .set_status("ORD-MAN001".into(), OrderStatus::Delivered, placed_at())
        .await
        .unwrap();
    assert_eq!(record.status, OrderStatus::Delivered);
    assert_eq!(record.progress, 100.0);
    assert_eq!(record.milestones.delivered.date, placed_at());

    // A later refresh cannot walk it back
    let record = system
        .tracking_client
        .refresh("ORD-MAN001".into(), placed_at() + Duration::hours(1))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.status, OrderStatus::Delivered);
    assert_eq!(record.progress, 100.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_duplicate_tracking_is_rejected() {
    let system = OrderSystem::new();
    create(&system, "ORD-DUP001", "Delhi").await;

    let err = system
        .tracking_client
        .create_tracking(TrackingCreate {
            order_id: "ORD-DUP001".into(),
            placed_at: placed_at() + Duration::hours(3),
            destination_city: "Chennai".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, TrackingError::AlreadyTracked("ORD-DUP001".to_string()));

    // The original record is untouched: still the Delhi window
    let record = system
        .tracking_client
        .refresh("ORD-DUP001".into(), placed_at())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.delivery_days, 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_untracked_order_reads_as_none() {
    let system = OrderSystem::new();

    let result = system
        .tracking_client
        .refresh("ORD-NONE01".into(), placed_at())
        .await
        .unwrap();
    assert!(result.is_none());

    system.shutdown().await.unwrap();
}
