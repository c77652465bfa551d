use esp_camera_rs::{Camera, FrameBuffer};
use esp_idf_svc::hal::gpio::AnyIOPin;
use esp_idf_svc::sys::camera;
use esp_idf_svc::sys::EspError;
use log::warn;

use crate::core::config::AppConfig;
use crate::core::pipeline::FrameSource;
use crate::hardware::pins::CameraPins;

/// カメラエラー
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("カメラ初期化エラー: {0}")]
    InitFailed(EspError),

    #[error("フレームバッファを取得できませんでした")]
    CaptureFailed,
}

/// AI Thinker ESP32-CAM（OV2640）用カメラ設定
#[derive(Debug, Clone)]
pub struct AiThinkerCamConfig {
    /// フレームサイズ名（"QVGA", "VGA", "SVGA", "XGA", "SXGA", "UXGA"）
    pub frame_size: String,
    /// JPEG品質（0-63、小さいほど高画質）
    pub jpeg_quality: u8,
}

impl AiThinkerCamConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            frame_size: config.frame_size.clone(),
            jpeg_quality: config.jpeg_quality,
        }
    }

    fn framesize(&self) -> camera::framesize_t {
        match self.frame_size.as_str() {
            "QVGA" => camera::framesize_t_FRAMESIZE_QVGA,
            "VGA" => camera::framesize_t_FRAMESIZE_VGA,
            "SVGA" => camera::framesize_t_FRAMESIZE_SVGA,
            "XGA" => camera::framesize_t_FRAMESIZE_XGA,
            "SXGA" => camera::framesize_t_FRAMESIZE_SXGA,
            "UXGA" => camera::framesize_t_FRAMESIZE_UXGA,
            other => {
                warn!("未対応のフレームサイズ指定: {other}。VGAを使用します");
                camera::framesize_t_FRAMESIZE_VGA
            }
        }
    }
}

impl Default for AiThinkerCamConfig {
    fn default() -> Self {
        Self {
            frame_size: "VGA".to_string(),
            jpeg_quality: 12,
        }
    }
}

/// カメラコントローラー
///
/// ドライバ初期化はプロセスで一度だけ。フレームバッファは
/// `FrameBuffer`のDropでドライバへ返却される。
pub struct CameraController<'a> {
    camera: Camera<'a>,
}

impl<'a> CameraController<'a> {
    /// カメラドライバを初期化する（20MHz XCLK、JPEG、フレームバッファ1枚）
    pub fn new(pins: CameraPins, config: &AiThinkerCamConfig) -> Result<Self, CameraError> {
        let camera = Camera::new(
            Some(pins.pwdn),
            Option::<AnyIOPin>::None, // RESETは未結線
            pins.xclk,
            pins.d0,
            pins.d1,
            pins.d2,
            pins.d3,
            pins.d4,
            pins.d5,
            pins.d6,
            pins.d7,
            pins.vsync,
            pins.href,
            pins.pclk,
            pins.sda,
            pins.scl,
            20_000_000,
            config.jpeg_quality as i32,
            1,
            camera::pixformat_t_PIXFORMAT_JPEG,
            config.framesize(),
        )
        .map_err(CameraError::InitFailed)?;

        Ok(Self { camera })
    }

    /// 1フレームキャプチャする
    pub fn capture_image(&self) -> Result<FrameBuffer<'_>, CameraError> {
        self.camera
            .get_framebuffer()
            .ok_or(CameraError::CaptureFailed)
    }
}

impl FrameSource for CameraController<'_> {
    fn capture_jpeg(&mut self) -> anyhow::Result<Vec<u8>> {
        // データをコピーしてからフレームバッファをドライバへ返却する
        let frame_buffer = self.capture_image()?;
        Ok(frame_buffer.data().to_vec())
    }
}
