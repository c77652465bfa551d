use crate::core::event::MotionEvent;

/// フラッシュLEDの点灯/消灯シーム
///
/// ハードウェア実装は `hardware::flash_led`、ホストテストはモックで差し替える。
pub trait FlashLamp {
    fn set_lit(&mut self, lit: bool) -> anyhow::Result<()>;
}

/// 静止画キャプチャシーム（JPEGバイト列を返す）
pub trait FrameSource {
    fn capture_jpeg(&mut self) -> anyhow::Result<Vec<u8>>;
}

/// ブロッキング遅延シーム
pub trait DelayMs {
    fn delay_ms(&mut self, ms: u32);
}

/// イベント配信先シーム（メール、ストレージ）
pub trait AlertSink {
    fn label(&self) -> &'static str;
    fn deliver(&mut self, event: &MotionEvent, jpeg: &[u8]) -> anyhow::Result<()>;
}

/// フラッシュキャプチャのタイミング設定（ミリ秒）
#[derive(Debug, Clone, Copy)]
pub struct CaptureTiming {
    /// フラッシュ点灯からキャプチャ開始までの待機
    pub flash_warmup_ms: u32,
    /// キャプチャ後の照明保持時間
    pub flash_hold_ms: u32,
}

impl Default for CaptureTiming {
    fn default() -> Self {
        Self {
            flash_warmup_ms: 100,
            flash_hold_ms: 1_000,
        }
    }
}

/// フラッシュ照明付きで1枚キャプチャする
///
/// 点灯 → warmup待機 → キャプチャ → hold待機 → 消灯 の順で実行する。
/// キャプチャが失敗してもフラッシュは消灯してから結果を返す。
pub fn capture_with_flash(
    flash: &mut impl FlashLamp,
    camera: &mut impl FrameSource,
    delay: &mut impl DelayMs,
    timing: &CaptureTiming,
) -> anyhow::Result<Vec<u8>> {
    flash.set_lit(true)?;
    delay.delay_ms(timing.flash_warmup_ms);

    let captured = camera.capture_jpeg();

    delay.delay_ms(timing.flash_hold_ms);
    flash.set_lit(false)?;

    captured
}
