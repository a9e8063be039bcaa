//! Method-channel dispatch
//!
//! Preserves the request surface of the original battery channel: a single
//! method named `getBatteryStatus` with no parameters. Unrecognized method
//! names are rejected with a distinguishable not-implemented error rather
//! than silently ignored.

use crate::battery::{DerivedBatteryStatus, interpret};
use crate::error::{LeydenError, Result};
use crate::logging::get_logger;
use crate::telemetry::TelemetrySource;

/// Channel identity, used in logs and the status endpoint
pub const CHANNEL_NAME: &str = "battery_bridge";

/// The single method exposed by the channel
pub const GET_BATTERY_STATUS: &str = "getBatteryStatus";

/// Dispatch a method call against the bridge
pub async fn dispatch(source: &dyn TelemetrySource, method: &str) -> Result<DerivedBatteryStatus> {
    match method {
        GET_BATTERY_STATUS => {
            let raw = source.sample().await?;
            Ok(interpret(&raw))
        }
        other => {
            get_logger("bridge").warn(&format!("Rejecting unknown method '{}'", other));
            Err(LeydenError::not_implemented(other))
        }
    }
}
