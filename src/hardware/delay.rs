use esp_idf_svc::hal::delay::FreeRtos;

use crate::core::pipeline::DelayMs;

/// FreeRtosのブロッキング遅延を`DelayMs`シームとして提供する
pub struct FreeRtosDelay;

impl DelayMs for FreeRtosDelay {
    fn delay_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }
}
