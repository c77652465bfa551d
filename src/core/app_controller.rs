use log::{error, info, warn};

use crate::core::event::MotionEvent;
use crate::core::image_digest::looks_like_jpeg;
use crate::core::pipeline::{
    capture_with_flash, AlertSink, CaptureTiming, DelayMs, FlashLamp, FrameSource,
};

/// アプリケーションの主要な制御フローを管理するモジュール
pub struct AppController;

impl AppController {
    /// 動体検出イベントを1件処理する
    ///
    /// フラッシュ照明付きキャプチャを実行し、成功した場合のみ全シンクへ
    /// 順番に配信する。キャプチャ失敗・配信失敗はログに残して握りつぶし、
    /// 制御ループは継続する。
    pub fn handle_motion_event(
        flash: &mut impl FlashLamp,
        camera: &mut impl FrameSource,
        delay: &mut impl DelayMs,
        sinks: &mut [&mut dyn AlertSink],
        timing: &CaptureTiming,
        event: &MotionEvent,
    ) {
        let jpeg = match capture_with_flash(flash, camera, delay, timing) {
            Ok(data) => data,
            Err(e) => {
                error!("画像キャプチャに失敗しました: {e:?}");
                return;
            }
        };
        info!("画像キャプチャ完了: {} bytes", jpeg.len());

        if !looks_like_jpeg(&jpeg) {
            warn!("キャプチャデータにJPEGマーカーがありません（そのまま配信します）");
        }

        for sink in sinks.iter_mut() {
            match sink.deliver(event, &jpeg) {
                Ok(()) => info!("{} への配信が完了しました", sink.label()),
                Err(e) => error!("{} への配信に失敗しました: {e:?}", sink.label()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct OkFlash;
    impl FlashLamp for OkFlash {
        fn set_lit(&mut self, _lit: bool) -> anyhow::Result<()> {
            Ok(())
        }
    }

    struct NoDelay;
    impl DelayMs for NoDelay {
        fn delay_ms(&mut self, _ms: u32) {}
    }

    struct FixedCamera(Option<Vec<u8>>);
    impl FrameSource for FixedCamera {
        fn capture_jpeg(&mut self) -> anyhow::Result<Vec<u8>> {
            self.0
                .clone()
                .ok_or_else(|| anyhow::anyhow!("camera capture failed"))
        }
    }

    struct RecordingSink {
        label: &'static str,
        deliveries: Rc<RefCell<Vec<&'static str>>>,
        fail: bool,
    }
    impl AlertSink for RecordingSink {
        fn label(&self) -> &'static str {
            self.label
        }
        fn deliver(&mut self, _event: &MotionEvent, jpeg: &[u8]) -> anyhow::Result<()> {
            assert!(!jpeg.is_empty());
            self.deliveries.borrow_mut().push(self.label);
            if self.fail {
                anyhow::bail!("sink failure");
            }
            Ok(())
        }
    }

    fn test_event() -> MotionEvent {
        MotionEvent::new(
            "esp32-cam",
            Utc.with_ymd_and_hms(2025, 6, 22, 0, 0, 0).unwrap(),
            1234,
        )
    }

    #[test]
    fn successful_capture_attempts_all_sinks_in_order() {
        let deliveries = Rc::new(RefCell::new(Vec::new()));
        let mut mail = RecordingSink {
            label: "mail",
            deliveries: deliveries.clone(),
            fail: false,
        };
        let mut storage = RecordingSink {
            label: "storage",
            deliveries: deliveries.clone(),
            fail: false,
        };

        AppController::handle_motion_event(
            &mut OkFlash,
            &mut FixedCamera(Some(vec![0xFF, 0xD8, 0xFF, 0xD9])),
            &mut NoDelay,
            &mut [&mut mail, &mut storage],
            &CaptureTiming::default(),
            &test_event(),
        );

        assert_eq!(*deliveries.borrow(), vec!["mail", "storage"]);
    }

    #[test]
    fn sink_failure_does_not_stop_later_sinks() {
        let deliveries = Rc::new(RefCell::new(Vec::new()));
        let mut mail = RecordingSink {
            label: "mail",
            deliveries: deliveries.clone(),
            fail: true,
        };
        let mut storage = RecordingSink {
            label: "storage",
            deliveries: deliveries.clone(),
            fail: false,
        };

        AppController::handle_motion_event(
            &mut OkFlash,
            &mut FixedCamera(Some(vec![0xFF, 0xD8, 0xFF, 0xD9])),
            &mut NoDelay,
            &mut [&mut mail, &mut storage],
            &CaptureTiming::default(),
            &test_event(),
        );

        assert_eq!(*deliveries.borrow(), vec!["mail", "storage"]);
    }

    #[test]
    fn capture_failure_skips_delivery() {
        let deliveries = Rc::new(RefCell::new(Vec::new()));
        let mut mail = RecordingSink {
            label: "mail",
            deliveries: deliveries.clone(),
            fail: false,
        };

        AppController::handle_motion_event(
            &mut OkFlash,
            &mut FixedCamera(None),
            &mut NoDelay,
            &mut [&mut mail],
            &CaptureTiming::default(),
            &test_event(),
        );

        assert!(deliveries.borrow().is_empty());
    }
}
