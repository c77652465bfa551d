/// カメラ制御モジュール
pub mod controller;

pub use controller::*;
