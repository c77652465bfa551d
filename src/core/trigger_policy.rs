/// 送信クールダウンのデフォルト値（ミリ秒）
pub const DEFAULT_SEND_COOLDOWN_MS: u64 = 10_000;

/// 動体トリガーゲート
///
/// PIR信号のデバウンスとクールダウン判定を行う状態機械。
/// HIGHサンプルで一度発火するとLOWサンプルを見るまで再武装されず、
/// 前回発火からクールダウン時間が経過するまで再発火しない。
#[derive(Debug)]
pub struct MotionGate {
    cooldown_ms: u64,
    sent_recently: bool,
    last_fire_ms: Option<u64>,
}

impl MotionGate {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            sent_recently: false,
            last_fire_ms: None,
        }
    }

    /// PIRサンプルを1つ評価し、キャプチャを発火すべきなら true を返す
    pub fn on_sample(&mut self, motion_high: bool, now_ms: u64) -> bool {
        if !motion_high {
            // LOWで再武装
            self.sent_recently = false;
            return false;
        }

        if self.sent_recently {
            return false;
        }

        if let Some(last) = self.last_fire_ms {
            if now_ms.saturating_sub(last) <= self.cooldown_ms {
                return false;
            }
        }

        self.sent_recently = true;
        self.last_fire_ms = Some(now_ms);
        true
    }

    /// 前回発火からの経過時間（未発火なら None）
    pub fn elapsed_since_fire(&self, now_ms: u64) -> Option<u64> {
        self.last_fire_ms.map(|last| now_ms.saturating_sub(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_high_sample_fires_immediately() {
        let mut gate = MotionGate::new(DEFAULT_SEND_COOLDOWN_MS);
        assert!(gate.on_sample(true, 0));
    }

    #[test]
    fn held_high_pulse_fires_only_once() {
        let mut gate = MotionGate::new(10_000);
        assert!(gate.on_sample(true, 0));
        // パルスがHIGHのまま続く限り再発火しない
        assert!(!gate.on_sample(true, 100));
        assert!(!gate.on_sample(true, 5_000));
        // クールダウン経過後もHIGHのままなら発火しない（LOW待ち）
        assert!(!gate.on_sample(true, 20_000));
    }

    #[test]
    fn rearm_requires_low_sample_and_cooldown() {
        let mut gate = MotionGate::new(10_000);
        assert!(gate.on_sample(true, 0));
        assert!(!gate.on_sample(false, 1_000));
        // 再武装済みでもクールダウン内は発火しない
        assert!(!gate.on_sample(true, 5_000));
        assert!(!gate.on_sample(false, 6_000));
        // 境界ちょうどは発火しない（strict greater-than）
        assert!(!gate.on_sample(true, 10_000));
        assert!(!gate.on_sample(false, 10_001));
        assert!(gate.on_sample(true, 10_002));
    }

    #[test]
    fn one_fire_per_cooldown_window_across_many_pulses() {
        let mut gate = MotionGate::new(10_000);
        let mut fires = 0;
        // 500ms周期でHIGH/LOWを繰り返す60秒間のシミュレーション
        for t in (0..60_000u64).step_by(500) {
            let high = (t / 500) % 2 == 0;
            if gate.on_sample(high, t) {
                fires += 1;
            }
        }
        // 10秒クールダウンなら60秒でおよそ6回
        assert_eq!(fires, 6);
    }

    #[test]
    fn elapsed_since_fire_tracks_last_fire() {
        let mut gate = MotionGate::new(10_000);
        assert_eq!(gate.elapsed_since_fire(0), None);
        gate.on_sample(true, 1_000);
        assert_eq!(gate.elapsed_since_fire(4_000), Some(3_000));
    }
}
