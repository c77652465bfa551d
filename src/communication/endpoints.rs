/// ストレージ・イベントテーブルのエンドポイント構築
///
/// Supabase互換のREST API パスを組み立てる。プロトコルの意味論は
/// バックエンド側の仕様であり、ここでは文字列構築のみを行う。
#[derive(Debug, Clone)]
pub struct StorageEndpoints {
    base_url: String,
    bucket: String,
    table: String,
}

impl StorageEndpoints {
    /// ベースURL末尾の `/` は取り除いて保持する
    pub fn new(base_url: &str, bucket: &str, table: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            table: table.to_string(),
        }
    }

    /// 画像アップロード先URL
    pub fn object_upload_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, object_name
        )
    }

    /// アップロード済みオブジェクトの公開URL
    pub fn object_public_url(&self, object_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, object_name
        )
    }

    /// イベント行の挿入先URL
    pub fn event_insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

/// アップロードオブジェクト名（デバイスIDと起動経過ミリ秒で一意化）
pub fn object_name(device_id: &str, uptime_ms: u64) -> String {
    format!("{device_id}-{uptime_ms}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> StorageEndpoints {
        StorageEndpoints::new("https://example.supabase.co", "photos", "motion_events")
    }

    #[test]
    fn upload_url_targets_bucket_object() {
        assert_eq!(
            endpoints().object_upload_url("esp32-cam-12345.jpg"),
            "https://example.supabase.co/storage/v1/object/photos/esp32-cam-12345.jpg"
        );
    }

    #[test]
    fn public_url_carries_public_segment() {
        assert_eq!(
            endpoints().object_public_url("esp32-cam-12345.jpg"),
            "https://example.supabase.co/storage/v1/object/public/photos/esp32-cam-12345.jpg"
        );
    }

    #[test]
    fn event_insert_url_targets_rest_table() {
        assert_eq!(
            endpoints().event_insert_url(),
            "https://example.supabase.co/rest/v1/motion_events"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let endpoints =
            StorageEndpoints::new("https://example.supabase.co/", "photos", "motion_events");
        assert_eq!(
            endpoints.event_insert_url(),
            "https://example.supabase.co/rest/v1/motion_events"
        );
    }

    #[test]
    fn object_name_is_device_scoped_and_unique_per_uptime() {
        assert_eq!(object_name("esp32-cam", 987_654), "esp32-cam-987654.jpg");
    }
}
