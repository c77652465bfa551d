/// カメラ制御モジュール
pub mod camera;
/// FreeRtos遅延アダプタ
pub mod delay;
/// フラッシュLED制御モジュール
pub mod flash_led;
/// カメラピン設定モジュール
pub mod pins;
/// PIRセンサー入力モジュール
pub mod pir_sensor;

pub use camera::CameraController;
pub use delay::FreeRtosDelay;
pub use flash_led::{FlashLed, LedError};
pub use pins::CameraPins;
pub use pir_sensor::PirSensor;
