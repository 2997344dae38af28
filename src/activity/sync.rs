use std::collections::HashSet;

use chrono::{TimeDelta, Utc};
use tokio::sync::Mutex;

use super::capability::CountdownCapability;
use super::types::{ActivityAttributes, ActivityContent, ActivityId, ActivityPhase};

/// The countdown this process is driving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveCountdown {
    pub id: ActivityId,
    pub content: ActivityContent,
}

#[derive(Debug, Default)]
struct Slot {
    live: Option<LiveCountdown>,
    /// Instances this process ended; never updated or adopted again.
    ended: HashSet<ActivityId>,
}

/// Keeps the sleep-timer countdown in step with the app's timer.
///
/// All host calls happen while holding the slot lock, so a create can never
/// race another create or an update of the same countdown.
pub struct SleepTimerSync<C> {
    capability: C,
    attributes: ActivityAttributes,
    slot: Mutex<Slot>,
}

impl<C: CountdownCapability> SleepTimerSync<C> {
    pub fn new(capability: C, attributes: ActivityAttributes) -> Self {
        Self {
            capability,
            attributes,
            slot: Mutex::new(Slot::default()),
        }
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub async fn phase(&self) -> ActivityPhase {
        if self.slot.lock().await.live.is_some() {
            ActivityPhase::Active
        } else {
            ActivityPhase::Idle
        }
    }

    pub async fn current(&self) -> Option<LiveCountdown> {
        self.slot.lock().await.live.clone()
    }

    /// Reflect `remaining` sleep-timer time on the countdown.
    ///
    /// Non-positive `remaining` ends the countdown. Positive `remaining`
    /// updates the live countdown, or creates one when none exists and the
    /// capability is enabled. Host failures are logged, never returned.
    pub async fn sync(&self, remaining: TimeDelta, title: &str, subtitle: &str) {
        if remaining <= TimeDelta::zero() {
            self.end().await;
            return;
        }

        let mut slot = self.slot.lock().await;

        if !self.capability.is_enabled() {
            tracing::debug!("live countdowns disabled, skipping sleep timer sync");
            return;
        }

        let Some(content) = ActivityContent::new(Utc::now(), remaining, title, subtitle) else {
            tracing::warn!(?remaining, "sleep timer remaining time out of range");
            return;
        };

        let existing = match slot.live.take() {
            Some(live) => Some((live.id, Some(live.content))),
            None => self.adoptable(&mut slot).map(|id| (id, None)),
        };

        if let Some((id, previous)) = existing {
            match self.capability.update(&id, &content).await {
                Ok(()) => {
                    tracing::debug!(
                        %id,
                        end = %content.end_date(),
                        "sleep timer countdown updated"
                    );
                    slot.live = Some(LiveCountdown { id, content });
                    return;
                }
                Err(e) => {
                    tracing::warn!(%id, error = %e, "sleep timer countdown update failed");
                }
            }

            // Only replace a countdown the host no longer shows.
            if self.capability.active().contains(&id) {
                if let Err(e) = self.capability.end(&id).await {
                    tracing::warn!(
                        %id,
                        error = %e,
                        "stale sleep timer countdown could not be ended, keeping it"
                    );
                    slot.live = Some(LiveCountdown {
                        id,
                        content: previous.unwrap_or(content),
                    });
                    return;
                }
                slot.ended.insert(id);
            }
        }

        match self.capability.request(&self.attributes, &content).await {
            Ok(id) => {
                tracing::info!(%id, end = %content.end_date(), "sleep timer countdown started");
                slot.live = Some(LiveCountdown { id, content });
            }
            Err(e) => {
                tracing::warn!(error = %e, "sleep timer countdown request failed");
            }
        }
    }

    /// End every countdown this app shows. Idempotent.
    ///
    /// An instance the host failed to end stays adoptable, so a later `sync`
    /// updates it instead of creating a second one.
    pub async fn end(&self) {
        let mut slot = self.slot.lock().await;

        let mut ids: Vec<ActivityId> = slot.live.take().map(|live| live.id).into_iter().collect();
        for id in self.capability.active() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        for id in ids {
            match self.capability.end(&id).await {
                Ok(()) => {
                    tracing::info!(%id, "sleep timer countdown ended");
                    slot.ended.insert(id);
                }
                Err(e) => tracing::warn!(%id, error = %e, "failed to end sleep timer countdown"),
            }
        }
    }

    /// A host-listed instance left over from an earlier process, if any.
    fn adoptable(&self, slot: &mut Slot) -> Option<ActivityId> {
        let active = self.capability.active();
        slot.ended.retain(|id| active.contains(id));
        active.into_iter().find(|id| !slot.ended.contains(id))
    }
}
