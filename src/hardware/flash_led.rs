use esp_idf_svc::hal::gpio::{Gpio4, Output, PinDriver};
use esp_idf_svc::sys::EspError;

use crate::core::pipeline::FlashLamp;

/// フラッシュLEDエラー
#[derive(Debug, thiserror::Error)]
pub enum LedError {
    #[error("GPIO操作エラー: {0}")]
    Gpio(#[from] EspError),
}

/// フラッシュLED制御（AI Thinker基板のGPIO4、高輝度白色LED）
pub struct FlashLed<'d> {
    pin: PinDriver<'d, Gpio4, Output>,
}

impl<'d> FlashLed<'d> {
    pub fn new(pin: Gpio4) -> Result<Self, LedError> {
        let mut driver = PinDriver::output(pin)?;
        // 初期状態は消灯
        driver.set_low()?;
        Ok(Self { pin: driver })
    }

    pub fn turn_on(&mut self) -> Result<(), LedError> {
        self.pin.set_high()?;
        Ok(())
    }

    pub fn turn_off(&mut self) -> Result<(), LedError> {
        self.pin.set_low()?;
        Ok(())
    }
}

impl FlashLamp for FlashLed<'_> {
    fn set_lit(&mut self, lit: bool) -> anyhow::Result<()> {
        if lit {
            self.turn_on()?;
        } else {
            self.turn_off()?;
        }
        Ok(())
    }
}
