#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingWifiSsid,
    MissingSmtpHost,
    InvalidMailAddress(String),
    InvalidEndpointUrl(String),
    InvalidJpegQuality(u8),
    InvalidCooldown(u64),
}

pub fn validate_wifi_ssid(ssid: &str) -> Result<(), ValidationError> {
    if ssid.is_empty() {
        Err(ValidationError::MissingWifiSsid)
    } else {
        Ok(())
    }
}

pub fn validate_smtp_host(host: &str) -> Result<(), ValidationError> {
    if host.is_empty() {
        Err(ValidationError::MissingSmtpHost)
    } else {
        Ok(())
    }
}

/// メールアドレスの簡易検証（ローカル部とドメインが非空であること）
pub fn validate_mail_address(address: &str) -> Result<(), ValidationError> {
    match address.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidMailAddress(address.to_string())),
    }
}

/// エンドポイントURLの簡易検証（http/httpsスキームとホスト部があること）
pub fn validate_endpoint_url(url: &str) -> Result<(), ValidationError> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEndpointUrl(url.to_string())),
    }
}

/// JPEG品質の検証（esp32-cameraの有効範囲 0-63）
pub fn parse_jpeg_quality(value: u8) -> Result<u8, ValidationError> {
    if value <= 63 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidJpegQuality(value))
    }
}

pub fn parse_send_cooldown_ms(value: u64) -> Result<u64, ValidationError> {
    if value == 0 {
        Err(ValidationError::InvalidCooldown(value))
    } else {
        Ok(value)
    }
}
