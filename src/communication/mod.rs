/// ストレージAPIのURL・オブジェクト名構築
pub mod endpoints;
/// アラートメール送信（lettre）
pub mod mailer;
/// WiFi・SNTP初期化（ESP32ターゲット専用）
#[cfg(any(target_arch = "riscv32", target_arch = "xtensa"))]
pub mod network_manager;
/// 画像アップロードとイベント行挿入（ESP32ターゲット専用）
#[cfg(any(target_arch = "riscv32", target_arch = "xtensa"))]
pub mod storage_client;

pub use endpoints::*;
pub use mailer::*;
#[cfg(any(target_arch = "riscv32", target_arch = "xtensa"))]
pub use network_manager::*;
#[cfg(any(target_arch = "riscv32", target_arch = "xtensa"))]
pub use storage_client::*;
