use chrono_tz::Tz;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use log::info;

use crate::core::config::AppConfig;
use crate::core::event::{format_local_time, MotionEvent};
use crate::core::pipeline::AlertSink;

/// 添付ファイル名（受信側での見え方を原実装に合わせて固定）
pub const ATTACHMENT_FILENAME: &str = "photo.jpg";
/// メール件名
pub const MAIL_SUBJECT: &str = "Motion Detected!";

/// メール送信エラー
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("メールアドレスが不正です: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("添付のContent-Typeが不正です: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),

    #[error("メッセージ構築エラー: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP接続・送信エラー: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// アラートメールのMIMEメッセージを構築する
///
/// 本文（検出時刻入りプレーンテキスト）とJPEG添付のmultipartを返す。
pub fn build_alert_message(
    sender_name: &str,
    sender_address: &str,
    recipient_address: &str,
    event: &MotionEvent,
    timezone: &Tz,
    jpeg: &[u8],
) -> Result<Message, MailError> {
    let from = Mailbox::new(Some(sender_name.to_string()), sender_address.parse()?);
    let to = Mailbox::new(None, recipient_address.parse()?);

    let body = format!(
        "Motion detected! Photo attached.\nDevice: {}\nTime: {}\n",
        event.device_id,
        format_local_time(event.captured_at, timezone),
    );

    let attachment = Attachment::new(ATTACHMENT_FILENAME.to_string())
        .body(jpeg.to_vec(), ContentType::parse("image/jpeg")?);

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(MAIL_SUBJECT)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body))
                .singlepart(attachment),
        )?;

    Ok(message)
}

/// アラートメール送信機
///
/// SMTPセッションは送信ごとに確立・破棄する。
pub struct Mailer {
    host: String,
    port: u16,
    credentials: Credentials,
    sender_name: String,
    sender_address: String,
    recipient_address: String,
    timezone: Tz,
}

impl Mailer {
    pub fn new(config: &AppConfig) -> Self {
        let timezone = config.timezone.parse().unwrap_or(chrono_tz::UTC);
        Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            credentials: Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ),
            sender_name: config.mail_sender_name.clone(),
            sender_address: config.mail_sender_address.clone(),
            recipient_address: config.mail_recipient_address.clone(),
            timezone,
        }
    }

    /// イベント1件をメールで送信する
    pub fn send_alert(&self, event: &MotionEvent, jpeg: &[u8]) -> Result<(), MailError> {
        let message = build_alert_message(
            &self.sender_name,
            &self.sender_address,
            &self.recipient_address,
            event,
            &self.timezone,
            jpeg,
        )?;

        let transport = SmtpTransport::relay(&self.host)?
            .port(self.port)
            .credentials(self.credentials.clone())
            .build();

        let response = transport.send(&message)?;
        info!(
            "メール送信完了: {} ({} bytes添付)",
            response.code(),
            jpeg.len()
        );
        Ok(())
    }
}

impl AlertSink for Mailer {
    fn label(&self) -> &'static str {
        "メール"
    }

    fn deliver(&mut self, event: &MotionEvent, jpeg: &[u8]) -> anyhow::Result<()> {
        self.send_alert(event, jpeg)?;
        Ok(())
    }
}
