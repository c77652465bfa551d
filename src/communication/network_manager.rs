use esp_idf_svc::{
    eventloop::EspSystemEventLoop,
    hal::delay::FreeRtos,
    hal::modem::Modem,
    nvs::EspDefaultNvsPartition,
    sntp::{EspSntp, SyncStatus},
    wifi::{AuthMethod, BlockingWifi, ClientConfiguration, Configuration, EspWifi},
};
use log::{info, warn};

use crate::core::config::AppConfig;

/// SNTP同期の最大待機（500ms × 40 = 20秒）
const SNTP_SYNC_MAX_ATTEMPTS: u32 = 40;
const SNTP_SYNC_POLL_MS: u32 = 500;

/// WiFiとSNTPの初期化を管理するモジュール
pub struct NetworkManager;

impl NetworkManager {
    /// WiFiをSTAモードで起動してアクセスポイントへ接続する
    pub fn connect_wifi(
        modem: Modem,
        sysloop: &EspSystemEventLoop,
        nvs_partition: &EspDefaultNvsPartition,
        config: &AppConfig,
    ) -> anyhow::Result<BlockingWifi<EspWifi<'static>>> {
        info!("WiFiをSTAモードで初期化します: SSID={}", config.wifi_ssid);

        let mut wifi = BlockingWifi::wrap(
            EspWifi::new(modem, sysloop.clone(), Some(nvs_partition.clone()))?,
            sysloop.clone(),
        )?;

        let auth_method = if config.wifi_password.is_empty() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };

        wifi.set_configuration(&Configuration::Client(ClientConfiguration {
            ssid: config
                .wifi_ssid
                .as_str()
                .try_into()
                .map_err(|_| anyhow::anyhow!("WiFi SSIDが長すぎます: {}", config.wifi_ssid))?,
            password: config
                .wifi_password
                .as_str()
                .try_into()
                .map_err(|_| anyhow::anyhow!("WiFiパスワードが長すぎます"))?,
            auth_method,
            ..Default::default()
        }))?;

        wifi.start()?;
        wifi.connect()?;
        wifi.wait_netif_up()?;

        // デバイス識別のためMACアドレスとIPを表示
        let mac_addr = wifi.wifi().sta_netif().get_mac()?;
        info!(
            "WiFi接続完了。MAC: {:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            mac_addr[0], mac_addr[1], mac_addr[2], mac_addr[3], mac_addr[4], mac_addr[5]
        );
        let ip_info = wifi.wifi().sta_netif().get_ip_info()?;
        info!("IPアドレス: {}", ip_info.ip);

        Ok(wifi)
    }

    /// SNTPでシステム時計を同期する
    ///
    /// 返された`EspSntp`は生存している間バックグラウンドで再同期を続けるため、
    /// 呼び出し側で保持すること。タイムアウトしても起動は継続する
    /// （イベント時刻の精度が落ちるだけで配信は可能）。
    pub fn sync_time() -> anyhow::Result<EspSntp<'static>> {
        info!("SNTPでシステム時計を同期しています...");
        let sntp = EspSntp::new_default()?;

        let mut attempts = 0;
        while sntp.get_sync_status() != SyncStatus::Completed {
            attempts += 1;
            if attempts > SNTP_SYNC_MAX_ATTEMPTS {
                warn!("SNTP同期がタイムアウトしました。現在のRTC時刻のまま続行します。");
                return Ok(sntp);
            }
            FreeRtos::delay_ms(SNTP_SYNC_POLL_MS);
        }

        info!("SNTP同期完了");
        Ok(sntp)
    }
}
