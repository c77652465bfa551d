use embedded_svc::http::client::Client;
use embedded_svc::io::Write;
use esp_idf_svc::http::client::{Configuration as HttpConfiguration, EspHttpConnection};
use esp_idf_svc::io::EspIOError;
use log::{error, info};

use crate::communication::endpoints::{object_name, StorageEndpoints};
use crate::core::config::AppConfig;
use crate::core::event::{MotionEvent, MotionEventRecord};
use crate::core::image_digest::image_sha256_hex;
use crate::core::pipeline::AlertSink;

/// ストレージ操作エラー
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("HTTP I/Oエラー: {0}")]
    Io(#[from] EspIOError),

    #[error("イベント行のシリアライズに失敗: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("想定外のHTTPステータス: {0}")]
    UnexpectedStatus(u16),
}

/// クラウドストレージクライアント
///
/// 画像をバケットへPUTし、イベント行をRESTテーブルへPOSTする。
/// 認証は静的APIキー（`apikey` + `Authorization: Bearer`ヘッダー）。
pub struct StorageClient {
    endpoints: StorageEndpoints,
    api_key: String,
}

impl StorageClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoints: StorageEndpoints::new(
                &config.supabase_url,
                &config.supabase_bucket,
                &config.supabase_table,
            ),
            api_key: config.supabase_api_key.clone(),
        }
    }

    /// HTTPS接続を作成する（リクエストごとに使い捨て）
    fn http_client(&self) -> Result<Client<EspHttpConnection>, StorageError> {
        let connection = EspHttpConnection::new(&HttpConfiguration {
            crt_bundle_attach: Some(esp_idf_svc::sys::esp_crt_bundle_attach),
            ..Default::default()
        })?;
        Ok(Client::wrap(connection))
    }

    /// JPEGをバケットへアップロードし、公開URLを返す
    pub fn upload_photo(&self, object_name: &str, jpeg: &[u8]) -> Result<String, StorageError> {
        let url = self.endpoints.object_upload_url(object_name);
        let bearer = format!("Bearer {}", self.api_key);
        let content_length = jpeg.len().to_string();
        let headers = [
            ("apikey", self.api_key.as_str()),
            ("Authorization", bearer.as_str()),
            ("Content-Type", "image/jpeg"),
            ("Content-Length", content_length.as_str()),
        ];

        let mut client = self.http_client()?;
        let mut request = client.put(&url, &headers)?;
        request.write_all(jpeg)?;
        let response = request.submit()?;

        let status = response.status();
        if (200..300).contains(&status) {
            info!("画像アップロード完了: {} ({} bytes)", object_name, jpeg.len());
            Ok(self.endpoints.object_public_url(object_name))
        } else {
            Err(StorageError::UnexpectedStatus(status))
        }
    }

    /// イベント行をテーブルへ挿入する
    pub fn insert_event(&self, record: &MotionEventRecord) -> Result<(), StorageError> {
        let url = self.endpoints.event_insert_url();
        let body = serde_json::to_vec(record)?;
        let bearer = format!("Bearer {}", self.api_key);
        let content_length = body.len().to_string();
        let headers = [
            ("apikey", self.api_key.as_str()),
            ("Authorization", bearer.as_str()),
            ("Content-Type", "application/json"),
            ("Prefer", "return=representation"),
            ("Content-Length", content_length.as_str()),
        ];

        let mut client = self.http_client()?;
        let mut request = client.post(&url, &headers)?;
        request.write_all(&body)?;
        let response = request.submit()?;

        let status = response.status();
        if (200..300).contains(&status) {
            info!("イベント行の挿入完了: status={}", status);
            Ok(())
        } else {
            Err(StorageError::UnexpectedStatus(status))
        }
    }
}

impl AlertSink for StorageClient {
    fn label(&self) -> &'static str {
        "ストレージ"
    }

    /// アップロード → イベント行挿入の順で配信する
    ///
    /// アップロードが失敗してもイベント行は`image_url`なしで挿入する。
    fn deliver(&mut self, event: &MotionEvent, jpeg: &[u8]) -> anyhow::Result<()> {
        let object_name = object_name(&event.device_id, event.uptime_ms);

        let image_url = match self.upload_photo(&object_name, jpeg) {
            Ok(url) => Some(url),
            Err(e) => {
                error!("画像アップロードに失敗しました: {e:?}");
                None
            }
        };

        let record = MotionEventRecord::new(&event.device_id, event.captured_at)
            .with_image(image_url, Some(image_sha256_hex(jpeg)));
        self.insert_event(&record)?;
        Ok(())
    }
}
