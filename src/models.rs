// src/models.rs
use chrono::NaiveDateTime;

/// `device_signal` 表中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSignal {
    pub ts: NaiveDateTime,
    pub device_id: String,
    pub signal: i32,
}
