/*!
 * # Motion Alert Cam Library
 *
 * PIRセンサーで動体を検出し、フラッシュ照明付きで静止画を撮影して
 * メール添付とクラウドストレージへ配信するためのライブラリ
 *
 * ## モジュール構成
 * - `core`: アプリケーションの核となる機能（設定、トリガー判定、イベント制御）
 * - `hardware`: ハードウェア制御（カメラ、フラッシュLED、PIRセンサー、ピン設定）
 * - `communication`: 通信機能（WiFi、メール送信、ストレージアップロード）
 *
 * `core` と `communication` の純粋ロジックはホストでもビルドされ、
 * ESP-IDF依存のモジュールはESP32ターゲットでのみコンパイルされます。
 */

// 公開モジュール
pub mod communication;
pub mod core;
#[cfg(any(target_arch = "riscv32", target_arch = "xtensa"))]
pub mod hardware;

// 内部で使用する型をまとめてエクスポート
pub use communication::endpoints::StorageEndpoints;
pub use communication::mailer::{MailError, Mailer};
pub use core::{
    AppConfig, AppController, CaptureTiming, ConfigError, MotionEvent, MotionEventRecord,
    MotionGate,
};
#[cfg(any(target_arch = "riscv32", target_arch = "xtensa"))]
pub use hardware::camera::CameraController;
#[cfg(any(target_arch = "riscv32", target_arch = "xtensa"))]
pub use hardware::flash_led::{FlashLed, LedError};
#[cfg(any(target_arch = "riscv32", target_arch = "xtensa"))]
pub use hardware::{CameraPins, PirSensor};

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
