use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// 動体検出イベントのメタデータ
///
/// 1イベントごとに生成され、配信完了後に破棄される。
#[derive(Debug, Clone)]
pub struct MotionEvent {
    /// デバイス識別子（イベント行の device 列とオブジェクト名に使用）
    pub device_id: String,
    /// 検出時刻（UTC、SNTP同期後のシステム時計）
    pub captured_at: DateTime<Utc>,
    /// 起動からの経過ミリ秒（オブジェクト名の一意化に使用）
    pub uptime_ms: u64,
}

impl MotionEvent {
    pub fn new(device_id: impl Into<String>, captured_at: DateTime<Utc>, uptime_ms: u64) -> Self {
        Self {
            device_id: device_id.into(),
            captured_at,
            uptime_ms,
        }
    }
}

/// イベントログテーブルへ挿入する1行
///
/// `image_url` が無い場合はキー自体を省略する（アップロード失敗時の挙動）。
#[derive(Debug, Clone, Serialize)]
pub struct MotionEventRecord {
    pub device: String,
    pub event_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_sha256: Option<String>,
}

impl MotionEventRecord {
    pub fn new(device: impl Into<String>, event_time: DateTime<Utc>) -> Self {
        Self {
            device: device.into(),
            event_time: format_event_time(event_time),
            image_url: None,
            image_sha256: None,
        }
    }

    pub fn with_image(mut self, image_url: Option<String>, image_sha256: Option<String>) -> Self {
        self.image_url = image_url;
        self.image_sha256 = image_sha256;
        self
    }
}

/// ISO8601 (UTC, "Z" サフィックス) のタイムスタンプ文字列
pub fn format_event_time(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// メール本文用のローカル時刻表記
pub fn format_local_time(t: DateTime<Utc>, tz: &Tz) -> String {
    t.with_timezone(tz).format("%Y-%m-%d %H:%M:%S %Z").to_string()
}
