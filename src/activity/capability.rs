use std::future::Future;

use crate::error::CountdownError;

use super::types::{ActivityAttributes, ActivityContent, ActivityId};

/// Live-countdown surface provided by the host platform.
///
/// Implemented by the platform glue, never by this crate. Calls against one
/// countdown are serialised by `SleepTimerSync`.
pub trait CountdownCapability: Send + Sync {
    /// Whether the user and platform currently allow live countdowns.
    fn is_enabled(&self) -> bool;

    /// Instances the host currently shows for this app.
    fn active(&self) -> Vec<ActivityId>;

    fn request(
        &self,
        attributes: &ActivityAttributes,
        content: &ActivityContent,
    ) -> impl Future<Output = Result<ActivityId, CountdownError>> + Send;

    fn update(
        &self,
        id: &ActivityId,
        content: &ActivityContent,
    ) -> impl Future<Output = Result<(), CountdownError>> + Send;

    /// Dismiss the instance immediately.
    fn end(&self, id: &ActivityId) -> impl Future<Output = Result<(), CountdownError>> + Send;
}
