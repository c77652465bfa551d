fn main() {
    // ESP-IDFツールチェーン情報はターゲットビルドでのみ伝搬する
    // (ホストでの cargo test は espidf 環境なしで動く)
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }

    println!("cargo:rerun-if-changed=cfg.toml");
}
