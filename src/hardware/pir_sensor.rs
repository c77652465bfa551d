use esp_idf_svc::hal::gpio::{Gpio15, Input, PinDriver};
use esp_idf_svc::sys::EspError;

/// PIRセンサー入力（GPIO15）
///
/// センサーモジュール側が信号をドライブするためプルは設定しない。
/// レベルをポーリングで読むだけで、割り込みは使わない。
pub struct PirSensor<'d> {
    pin: PinDriver<'d, Gpio15, Input>,
}

impl<'d> PirSensor<'d> {
    pub fn new(pin: Gpio15) -> Result<Self, EspError> {
        Ok(Self {
            pin: PinDriver::input(pin)?,
        })
    }

    /// 現在のPIRレベル（HIGH = 動体検出中）
    pub fn is_motion(&self) -> bool {
        self.pin.is_high()
    }
}
