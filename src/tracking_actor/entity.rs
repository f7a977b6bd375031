//! The tracking record entity and its [`ActorEntity`] implementation.
//!
//! A tracking record is derived state: it is created alongside an order and
//! from then on every read (`Refresh`) re-derives status and progress from
//! elapsed time, while `SetStatus` lets an admin push the lifecycle forward
//! early. Both paths converge on [`TrackingRecord::advance_to`], which is
//! where the forward-only guarantees live.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::framework::ActorEntity;
use crate::model::{OrderId, OrderStatus};
use crate::zones::{self, Coords, WAREHOUSE};

use super::derive::{derive_status, offset_days, progress_for};

/// One named checkpoint in the delivery lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Estimated instant for this checkpoint, set at creation; overwritten
    /// with the actual instant when an admin completes the stage manually.
    pub date: DateTime<Utc>,
    pub completed: bool,
}

/// The four checkpoints of an order's journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestones {
    pub placed: Milestone,
    pub packed: Milestone,
    pub shipped: Milestone,
    pub delivered: Milestone,
}

impl Milestones {
    fn stage_mut(&mut self, status: OrderStatus) -> &mut Milestone {
        match status {
            OrderStatus::Placed => &mut self.placed,
            OrderStatus::Packed => &mut self.packed,
            OrderStatus::Shipped => &mut self.shipped,
            OrderStatus::Delivered => &mut self.delivered,
        }
    }
}

/// Live delivery state for one order, keyed 1:1 by order id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub order_id: OrderId,
    pub status: OrderStatus,
    /// Simplified location model: the warehouse city. Intermediate hops are
    /// not simulated.
    pub current_location: String,
    pub last_updated: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    pub delivery_days: u32,
    /// 0-100, non-decreasing across reads.
    pub progress: f64,
    /// Warehouse coordinates, for the tracking map.
    pub coordinates: Option<Coords>,
    pub milestones: Milestones,
}

/// Payload for initializing tracking on a freshly placed order.
#[derive(Debug, Clone)]
pub struct TrackingCreate {
    pub order_id: OrderId,
    pub placed_at: DateTime<Utc>,
    /// Free-text destination city from the shipping address; resolved against
    /// the zone table, falling back to the default zone when unknown.
    pub destination_city: String,
}

/// Operations on a tracking record. Both carry the caller's `now` so the
/// actor stays deterministic and tests can replay any point in time.
#[derive(Debug, Clone)]
pub enum TrackingAction {
    /// Re-derive status/progress from elapsed time and return the record.
    Refresh { now: DateTime<Utc> },
    /// Admin override: advance the lifecycle to `status` immediately.
    SetStatus { status: OrderStatus, now: DateTime<Utc> },
}

impl TrackingRecord {
    fn new(params: TrackingCreate) -> Self {
        let zone = zones::resolve(&params.destination_city);
        let transit = f64::from(zone.transit_days);
        let placed_at = params.placed_at;
        let estimated_delivery = offset_days(placed_at, transit);

        Self {
            order_id: params.order_id,
            status: OrderStatus::Placed,
            current_location: WAREHOUSE.city.to_string(),
            last_updated: placed_at,
            estimated_delivery,
            delivery_days: zone.transit_days,
            progress: 0.0,
            coordinates: Some(WAREHOUSE.coords),
            milestones: Milestones {
                placed: Milestone { date: placed_at, completed: true },
                packed: Milestone { date: offset_days(placed_at, 0.1 * transit), completed: false },
                shipped: Milestone { date: offset_days(placed_at, 0.4 * transit), completed: false },
                delivered: Milestone { date: estimated_delivery, completed: false },
            },
        }
    }

    fn placed_at(&self) -> DateTime<Utc> {
        self.milestones.placed.date
    }

    /// Moves the record forward to `status` (rank-max with the stored status,
    /// so the lifecycle never regresses), completes every milestone at or
    /// below the effective stage, and recomputes progress.
    ///
    /// `stamp_now` is set on the manual path: the milestone for the newly
    /// reached stage gets the actual instant instead of its estimate.
    /// Completed flags are only ever raised and progress only ever grows,
    /// which keeps reads monotonic even when an admin override and the
    /// elapsed-time derivation disagree.
    fn advance_to(&mut self, status: OrderStatus, now: DateTime<Utc>, stamp_now: bool) {
        let effective = self.status.max(status);

        for stage in OrderStatus::ALL {
            if stage > effective {
                break;
            }
            let milestone = self.milestones.stage_mut(stage);
            if !milestone.completed {
                milestone.completed = true;
                if stamp_now && stage == effective {
                    milestone.date = now;
                }
            }
        }

        self.status = effective;
        let computed = progress_for(effective, self.placed_at(), self.delivery_days, now);
        self.progress = self.progress.max(computed);
        self.last_updated = now;
    }
}

#[async_trait]
impl ActorEntity for TrackingRecord {
    type Id = OrderId;
    type Create = TrackingCreate;
    type Update = ();
    type Action = TrackingAction;
    type ActionResult = TrackingRecord;
    type Context = ();

    fn from_create_params(id: OrderId, params: TrackingCreate) -> Result<Self, String> {
        debug_assert_eq!(id, params.order_id);
        Ok(Self::new(params))
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), String> {
        Err("tracking records are derived state and cannot be updated directly".to_string())
    }

    async fn handle_action(&mut self, action: TrackingAction, _ctx: &()) -> Result<TrackingRecord, String> {
        match action {
            TrackingAction::Refresh { now } => {
                let derived = derive_status(self.placed_at(), self.delivery_days, now);
                self.advance_to(derived, now, false);
            }
            TrackingAction::SetStatus { status, now } => {
                self.advance_to(status, now, true);
            }
        }
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking_actor::derive::offset_days;
    use chrono::TimeZone;

    fn placed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn kolkata_record() -> TrackingRecord {
        TrackingRecord::new(TrackingCreate {
            order_id: "ORD-TEST01".into(),
            placed_at: placed_at(),
            destination_city: "Kolkata".into(),
        })
    }

    #[test]
    fn creation_initializes_placed_state() {
        let record = kolkata_record();
        assert_eq!(record.status, OrderStatus::Placed);
        assert_eq!(record.delivery_days, 1);
        assert_eq!(record.progress, 0.0);
        assert_eq!(record.current_location, "Barrackpore");
        assert_eq!(record.estimated_delivery, offset_days(placed_at(), 1.0));
        assert!(record.milestones.placed.completed);
        assert!(!record.milestones.packed.completed);
        assert!(!record.milestones.shipped.completed);
        assert!(!record.milestones.delivered.completed);
    }

    #[test]
    fn unknown_city_gets_fallback_window() {
        let record = TrackingRecord::new(TrackingCreate {
            order_id: "ORD-TEST02".into(),
            placed_at: placed_at(),
            destination_city: "Atlantis".into(),
        });
        assert_eq!(record.delivery_days, 5);
        assert_eq!(record.estimated_delivery, offset_days(placed_at(), 5.0));
    }

    #[tokio::test]
    async fn refresh_midway_marks_shipped_and_earlier_milestones() {
        let mut record = kolkata_record();
        let now = offset_days(placed_at(), 0.5);
        let updated = record
            .handle_action(TrackingAction::Refresh { now }, &())
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Shipped);
        assert!(updated.milestones.packed.completed, "cascade completes packed");
        assert!(updated.milestones.shipped.completed);
        assert!(!updated.milestones.delivered.completed);
        assert!((50.0..=75.0).contains(&updated.progress));
        assert_eq!(updated.last_updated, now);
    }

    #[tokio::test]
    async fn late_first_refresh_completes_everything() {
        let mut record = kolkata_record();
        let now = offset_days(placed_at(), 0.8);
        let updated = record
            .handle_action(TrackingAction::Refresh { now }, &())
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Delivered);
        assert!(updated.milestones.packed.completed);
        assert!(updated.milestones.shipped.completed);
        assert!(updated.milestones.delivered.completed);
        assert_eq!(updated.progress, 100.0);
    }

    #[tokio::test]
    async fn manual_delivered_pins_status_against_refresh() {
        let mut record = kolkata_record();
        let now = placed_at();
        record
            .handle_action(TrackingAction::SetStatus { status: OrderStatus::Delivered, now }, &())
            .await
            .unwrap();
        assert_eq!(record.status, OrderStatus::Delivered);
        assert!(record.milestones.delivered.completed);
        assert_eq!(record.milestones.delivered.date, now);
        assert_eq!(record.progress, 100.0);

        // A refresh with barely any elapsed time must not walk the status or
        // progress back down.
        let refreshed = record
            .handle_action(TrackingAction::Refresh { now: offset_days(now, 0.01) }, &())
            .await
            .unwrap();
        assert_eq!(refreshed.status, OrderStatus::Delivered);
        assert_eq!(refreshed.progress, 100.0);
        assert!(refreshed.milestones.delivered.completed);
    }

    #[tokio::test]
    async fn status_never_moves_backwards_on_manual_path() {
        let mut record = kolkata_record();
        record
            .handle_action(
                TrackingAction::SetStatus { status: OrderStatus::Shipped, now: placed_at() },
                &(),
            )
            .await
            .unwrap();

        let after = record
            .handle_action(
                TrackingAction::SetStatus { status: OrderStatus::Packed, now: placed_at() },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(after.status, OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn progress_is_monotonic_across_refreshes() {
        let mut record = kolkata_record();
        let mut last = record.progress;
        for step in 1..=10 {
            let now = offset_days(placed_at(), step as f64 * 0.1);
            let updated = record
                .handle_action(TrackingAction::Refresh { now }, &())
                .await
                .unwrap();
            assert!(updated.progress >= last);
            last = updated.progress;
        }
        assert_eq!(last, 100.0);
    }
}
