#[cfg(any(target_arch = "riscv32", target_arch = "xtensa"))]
mod firmware {
    use esp_idf_svc::{
        eventloop::EspSystemEventLoop,
        hal::delay::FreeRtos,
        hal::peripherals::Peripherals,
        nvs::EspDefaultNvsPartition,
    };
    use log::{error, info};

    use motion_alert_cam::communication::mailer::Mailer;
    use motion_alert_cam::communication::network_manager::NetworkManager;
    use motion_alert_cam::communication::storage_client::StorageClient;
    use motion_alert_cam::core::pipeline::{AlertSink, CaptureTiming};
    use motion_alert_cam::core::{AppConfig, AppController, MotionEvent, MotionGate};
    use motion_alert_cam::hardware::camera::{AiThinkerCamConfig, CameraController};
    use motion_alert_cam::hardware::delay::FreeRtosDelay;
    use motion_alert_cam::hardware::{CameraPins, FlashLed, PirSensor};

    /// アプリケーションのメインエントリーポイント
    pub fn run() -> anyhow::Result<()> {
        // ESP-IDFの基本初期化
        esp_idf_svc::sys::link_patches();
        esp_idf_svc::log::EspLogger::initialize_default();

        // 設定ファイル読み込み
        let app_config = AppConfig::load().map_err(|e| {
            error!("設定ファイルの読み込みに失敗しました: {}", e);
            anyhow::anyhow!("設定ファイルの読み込みエラー: {}", e)
        })?;

        // ペリフェラルとシステムリソースの初期化
        info!("ペリフェラルを初期化しています");
        let peripherals = Peripherals::take()?;
        let sysloop = EspSystemEventLoop::take()?;
        let nvs_partition = EspDefaultNvsPartition::take()?;

        let pins = peripherals.pins;

        // フラッシュLEDとPIRセンサーの初期化
        let mut flash = FlashLed::new(pins.gpio4)?;
        flash.turn_off()?;
        let pir = PirSensor::new(pins.gpio15)?;

        // ネットワーク（WiFi）初期化。失敗してもループは継続する
        // （配信はイベントごとに失敗としてログされる）
        let _wifi = match NetworkManager::connect_wifi(
            peripherals.modem,
            &sysloop,
            &nvs_partition,
            &app_config,
        ) {
            Ok(wifi) => Some(wifi),
            Err(e) => {
                error!("WiFi初期化に失敗しました: {e:?}。オフラインのまま続行します");
                None
            }
        };

        // SNTP時刻同期（WiFi接続時のみ）
        let _sntp = if _wifi.is_some() {
            match NetworkManager::sync_time() {
                Ok(sntp) => Some(sntp),
                Err(e) => {
                    error!("SNTP初期化に失敗しました: {e:?}");
                    None
                }
            }
        } else {
            None
        };

        // カメラ初期化。失敗した場合はデバイスを恒久停止する
        let camera_pins = CameraPins::new(
            pins.gpio32, pins.gpio0, pins.gpio5, pins.gpio18,
            pins.gpio19, pins.gpio21, pins.gpio36, pins.gpio39,
            pins.gpio34, pins.gpio35, pins.gpio25, pins.gpio23,
            pins.gpio22, pins.gpio26, pins.gpio27,
        );
        let camera_config = AiThinkerCamConfig::from_app_config(&app_config);
        let mut camera = match CameraController::new(camera_pins, &camera_config) {
            Ok(camera) => camera,
            Err(e) => {
                error!("カメラ初期化に失敗しました: {e:?}。デバイスを停止します");
                halt_forever();
            }
        };

        // 配信シンクの準備（メール → ストレージの順に配信される）
        let mut mailer = Mailer::new(&app_config);
        let mut storage = StorageClient::new(&app_config);

        let timing = CaptureTiming {
            flash_warmup_ms: app_config.flash_warmup_ms,
            flash_hold_ms: app_config.flash_hold_ms,
        };
        let mut gate = MotionGate::new(app_config.send_cooldown_ms);
        let mut delay = FreeRtosDelay;

        info!(
            "監視ループを開始します: cooldown={}ms poll={}ms",
            app_config.send_cooldown_ms, app_config.pir_poll_interval_ms
        );

        loop {
            let now_ms = uptime_ms();
            if gate.on_sample(pir.is_motion(), now_ms) {
                info!("動体を検出しました");
                let event =
                    MotionEvent::new(app_config.device_id.clone(), chrono::Utc::now(), now_ms);
                let mut sinks: [&mut dyn AlertSink; 2] = [&mut mailer, &mut storage];
                AppController::handle_motion_event(
                    &mut flash,
                    &mut camera,
                    &mut delay,
                    &mut sinks,
                    &timing,
                    &event,
                );
            }
            FreeRtos::delay_ms(app_config.pir_poll_interval_ms);
        }
    }

    /// 起動からの経過ミリ秒
    fn uptime_ms() -> u64 {
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() } / 1000) as u64
    }

    /// 回復不能な初期化失敗時の恒久停止
    fn halt_forever() -> ! {
        loop {
            FreeRtos::delay_ms(1_000);
        }
    }
}

#[cfg(any(target_arch = "riscv32", target_arch = "xtensa"))]
fn main() -> anyhow::Result<()> {
    firmware::run()
}

#[cfg(not(any(target_arch = "riscv32", target_arch = "xtensa")))]
fn main() {
    // ファームウェア本体はESP32ターゲットでのみビルドされる
    eprintln!("motion-alert-cam: ESP32ターゲット専用のファームウェアです");
}
