use crate::core::config_validation::{
    parse_jpeg_quality, parse_send_cooldown_ms, validate_endpoint_url, validate_mail_address,
    validate_smtp_host, validate_wifi_ssid, ValidationError,
};

/// アプリケーション設定
///
/// この構造体はビルド時に`cfg.toml`ファイルから読み込まれた設定を
/// 保持します。各キーは`cfg.toml.example`を参照してください。
#[toml_cfg::toml_config]
pub struct Config {
    #[default("")]
    wifi_ssid: &'static str,

    #[default("")]
    wifi_password: &'static str,

    #[default("smtp.gmail.com")]
    smtp_host: &'static str,

    #[default(465)] // SSL。STARTTLSなら587
    smtp_port: u16,

    #[default("")]
    smtp_username: &'static str,

    #[default("")]
    smtp_password: &'static str,

    #[default("ESP32-CAM")]
    mail_sender_name: &'static str,

    #[default("")]
    mail_sender_address: &'static str,

    #[default("")]
    mail_recipient_address: &'static str,

    #[default("")]
    supabase_url: &'static str,

    #[default("")]
    supabase_api_key: &'static str,

    #[default("motion_events")]
    supabase_table: &'static str,

    #[default("photos")]
    supabase_bucket: &'static str,

    #[default("esp32-cam")]
    device_id: &'static str,

    #[default(10000)]
    send_cooldown_ms: u64,

    #[default(100)]
    flash_warmup_ms: u32,

    #[default(1000)]
    flash_hold_ms: u32,

    #[default(100)]
    pir_poll_interval_ms: u32,

    #[default("VGA")]
    frame_size: &'static str,

    #[default(12)]
    jpeg_quality: u8,

    #[default("UTC")]
    timezone: &'static str,
}

/// 設定エラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WiFi SSIDが設定されていません。cfg.tomlを確認してください。")]
    MissingWifiSsid,
    #[error("SMTPホストが設定されていません。cfg.tomlを確認してください。")]
    MissingSmtpHost,
    #[error("無効なメールアドレス: {0}")]
    InvalidMailAddress(String),
    #[error("無効なエンドポイントURL: {0}")]
    InvalidEndpointUrl(String),
    #[error("jpeg_quality の値が無効です (0-63): {0}")]
    InvalidJpegQuality(u8),
    #[error("send_cooldown_ms は 0 より大きい値が必要です: {0}")]
    InvalidCooldown(u64),
}

/// アプリケーション設定を表す構造体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// WiFi SSID
    pub wifi_ssid: String,
    /// WiFi パスワード
    pub wifi_password: String,

    /// SMTPサーバーホスト
    pub smtp_host: String,
    /// SMTPポート（465=SSL, 587=STARTTLS）
    pub smtp_port: u16,
    /// SMTP認証ユーザー名
    pub smtp_username: String,
    /// SMTP認証パスワード
    pub smtp_password: String,
    /// 送信者表示名
    pub mail_sender_name: String,
    /// 送信者アドレス
    pub mail_sender_address: String,
    /// 受信者アドレス
    pub mail_recipient_address: String,

    /// SupabaseベースURL
    pub supabase_url: String,
    /// Supabase APIキー（anonキー）
    pub supabase_api_key: String,
    /// イベントログテーブル名
    pub supabase_table: String,
    /// 画像アップロード先バケット名
    pub supabase_bucket: String,

    /// デバイス識別子（イベント行の device 列とオブジェクト名に使用）
    pub device_id: String,

    /// 送信クールダウン（ミリ秒）
    pub send_cooldown_ms: u64,
    /// フラッシュ点灯からキャプチャまでの待機（ミリ秒）
    pub flash_warmup_ms: u32,
    /// キャプチャ後の照明保持（ミリ秒）
    pub flash_hold_ms: u32,
    /// PIRポーリング間隔（ミリ秒）
    pub pir_poll_interval_ms: u32,

    /// フレームサイズ
    pub frame_size: String,
    /// JPEG品質（0-63）
    pub jpeg_quality: u8,

    /// メール本文の表示タイムゾーン
    pub timezone: String,
}

impl AppConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        Self::validate(&CONFIG)
    }

    fn validate(config: &Config) -> Result<Self, ConfigError> {
        validate_wifi_ssid(config.wifi_ssid).map_err(map_validation_error)?;
        validate_smtp_host(config.smtp_host).map_err(map_validation_error)?;
        validate_mail_address(config.mail_sender_address).map_err(map_validation_error)?;
        validate_mail_address(config.mail_recipient_address).map_err(map_validation_error)?;
        validate_endpoint_url(config.supabase_url).map_err(map_validation_error)?;
        let jpeg_quality = parse_jpeg_quality(config.jpeg_quality).map_err(map_validation_error)?;
        let send_cooldown_ms =
            parse_send_cooldown_ms(config.send_cooldown_ms).map_err(map_validation_error)?;

        Ok(AppConfig {
            wifi_ssid: config.wifi_ssid.to_string(),
            wifi_password: config.wifi_password.to_string(),
            smtp_host: config.smtp_host.to_string(),
            smtp_port: config.smtp_port,
            smtp_username: config.smtp_username.to_string(),
            smtp_password: config.smtp_password.to_string(),
            mail_sender_name: config.mail_sender_name.to_string(),
            mail_sender_address: config.mail_sender_address.to_string(),
            mail_recipient_address: config.mail_recipient_address.to_string(),
            supabase_url: config.supabase_url.to_string(),
            supabase_api_key: config.supabase_api_key.to_string(),
            supabase_table: config.supabase_table.to_string(),
            supabase_bucket: config.supabase_bucket.to_string(),
            device_id: config.device_id.to_string(),
            send_cooldown_ms,
            flash_warmup_ms: config.flash_warmup_ms,
            flash_hold_ms: config.flash_hold_ms,
            pir_poll_interval_ms: config.pir_poll_interval_ms,
            frame_size: config.frame_size.to_string(),
            jpeg_quality,
            timezone: config.timezone.to_string(),
        })
    }
}

fn map_validation_error(err: ValidationError) -> ConfigError {
    match err {
        ValidationError::MissingWifiSsid => ConfigError::MissingWifiSsid,
        ValidationError::MissingSmtpHost => ConfigError::MissingSmtpHost,
        ValidationError::InvalidMailAddress(v) => ConfigError::InvalidMailAddress(v),
        ValidationError::InvalidEndpointUrl(v) => ConfigError::InvalidEndpointUrl(v),
        ValidationError::InvalidJpegQuality(v) => ConfigError::InvalidJpegQuality(v),
        ValidationError::InvalidCooldown(v) => ConfigError::InvalidCooldown(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_config() -> Config {
        Config {
            wifi_ssid: "mynet",
            wifi_password: "secret",
            smtp_host: "smtp.gmail.com",
            smtp_port: 465,
            smtp_username: "sender@gmail.com",
            smtp_password: "app-password",
            mail_sender_name: "ESP32-CAM",
            mail_sender_address: "sender@gmail.com",
            mail_recipient_address: "owner@example.com",
            supabase_url: "https://example.supabase.co",
            supabase_api_key: "anon-key",
            supabase_table: "motion_events",
            supabase_bucket: "photos",
            device_id: "esp32-cam",
            send_cooldown_ms: 10_000,
            flash_warmup_ms: 100,
            flash_hold_ms: 1_000,
            pir_poll_interval_ms: 100,
            frame_size: "VGA",
            jpeg_quality: 12,
            timezone: "UTC",
        }
    }

    #[test]
    fn valid_config_passes_validation() {
        let config = AppConfig::validate(&raw_config()).unwrap();
        assert_eq!(config.smtp_port, 465);
        assert_eq!(config.supabase_bucket, "photos");
        assert_eq!(config.send_cooldown_ms, 10_000);
    }

    #[test]
    fn missing_ssid_is_a_config_error() {
        let mut raw = raw_config();
        raw.wifi_ssid = "";
        assert!(matches!(
            AppConfig::validate(&raw),
            Err(ConfigError::MissingWifiSsid)
        ));
    }

    #[test]
    fn bad_recipient_address_is_rejected() {
        let mut raw = raw_config();
        raw.mail_recipient_address = "not-an-address";
        assert!(matches!(
            AppConfig::validate(&raw),
            Err(ConfigError::InvalidMailAddress(_))
        ));
    }

    #[test]
    fn out_of_range_jpeg_quality_is_rejected() {
        let mut raw = raw_config();
        raw.jpeg_quality = 64;
        assert!(matches!(
            AppConfig::validate(&raw),
            Err(ConfigError::InvalidJpegQuality(64))
        ));
    }
}
