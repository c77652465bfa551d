use sha2::{Digest, Sha256};

/// JPEGデータのSHA-256ハッシュ（16進小文字）
pub fn image_sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// JPEGのSOI/EOIマーカーを簡易チェックする
///
/// フレームバッファ不良の検出用。偽陰性を許容する軽量チェックであり、
/// 配信自体はブロックしない。
pub fn looks_like_jpeg(data: &[u8]) -> bool {
    data.len() >= 4
        && data[0] == 0xFF
        && data[1] == 0xD8
        && data[data.len() - 2] == 0xFF
        && data[data.len() - 1] == 0xD9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_matches_known_vector() {
        // SHA-256("abc")
        assert_eq!(
            image_sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn jpeg_markers_are_detected() {
        assert!(looks_like_jpeg(&[0xFF, 0xD8, 0x00, 0x11, 0xFF, 0xD9]));
        assert!(!looks_like_jpeg(&[0xFF, 0xD8, 0x00, 0x11]));
        assert!(!looks_like_jpeg(&[0x00, 0x01, 0x02, 0x03]));
        assert!(!looks_like_jpeg(&[]));
    }
}
