/// コアシステムモジュール
pub mod app_controller;
pub mod config;
pub mod config_validation;
pub mod event;
pub mod image_digest;
pub mod pipeline;
pub mod trigger_policy;

pub use app_controller::AppController;
pub use config::{AppConfig, ConfigError};
pub use event::{format_event_time, format_local_time, MotionEvent, MotionEventRecord};
pub use image_digest::{image_sha256_hex, looks_like_jpeg};
pub use pipeline::{capture_with_flash, AlertSink, CaptureTiming, DelayMs, FlashLamp, FrameSource};
pub use trigger_policy::{MotionGate, DEFAULT_SEND_COOLDOWN_MS};
