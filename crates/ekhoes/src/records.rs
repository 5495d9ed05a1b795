//! Record types returned by the remote service.
//!
//! These are read-only snapshots: fetched fresh on every list call, rendered
//! and discarded, never cached. Field names mirror the server's camelCase
//! JSON; timestamps are RFC 3339 on the wire and a decode failure there means
//! an incompatible server contract, surfaced as a protocol error by the
//! services.

use chrono::{DateTime, FixedOffset, Local, Utc};
use serde::{Deserialize, Serialize};

/// Display format for timestamps, in the viewer's local time zone.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The user a session belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
}

/// One active session on the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub status: String,
    pub user: SessionUser,
    pub agent: String,
    pub platform: String,
    pub device_type: String,
    pub updated: DateTime<FixedOffset>,
}

impl SessionRecord {
    /// Last-update time formatted in the viewer's local time zone.
    pub fn updated_local(&self) -> String {
        self.updated
            .with_timezone(&Local)
            .format(TIME_FORMAT)
            .to_string()
    }
}

/// One live transport-level connection on the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRecord {
    pub session_id: String,
    pub email: String,
    pub created: DateTime<Utc>,
    pub last_activity: String,
    pub last_activity_time: DateTime<Utc>,
}

impl ConnectionRecord {
    /// Creation time formatted in the viewer's local time zone.
    pub fn created_local(&self) -> String {
        self.created
            .with_timezone(&Local)
            .format(TIME_FORMAT)
            .to_string()
    }

    /// Last-activity time formatted in the viewer's local time zone.
    pub fn last_activity_local(&self) -> String {
        self.last_activity_time
            .with_timezone(&Local)
            .format(TIME_FORMAT)
            .to_string()
    }
}
