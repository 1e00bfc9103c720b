#![allow(unused_crate_dependencies)]
// this is the only test in this binary so that changes to the process-wide
// encoder cannot leak into other tests running in parallel
use byte_text::{Bytes, Config, Encoder, active, global, scoped, set_active};

#[test]
fn switch_process_wide_encoder() {
    assert_eq!(global(), Encoder::Hex, "hex is the default");
    assert_eq!(active(), Encoder::Hex, "no scope is active");

    let bytes = Bytes::from(*b"D!.3s");
    let hex = serde_json::to_string(&bytes).expect("serializing must work");
    assert_eq!(hex, r#""44212E3373""#, "hex output");

    let prev = set_active(Encoder::Base64);
    assert_eq!(prev, Encoder::Hex, "previous encoder must be returned");
    let b64 = serde_json::to_string(&bytes).expect("serializing must work");
    assert_eq!(b64, r#""RCEuM3M=""#, "base64 output");

    // earlier output is unaffected, but must now be read with a matching encoder
    assert_eq!(hex, r#""44212E3373""#, "hex output unchanged");
    serde_json::from_str::<Bytes>(&hex).expect_err("hex is invalid base64 length");
    let back: Bytes = scoped(Encoder::Hex, || serde_json::from_str(&hex)).expect("hex must decode");
    assert_eq!(back, bytes, "scoped decode");

    // scopes take precedence over the process-wide encoder
    let raw = scoped(Encoder::RawBase64, || bytes.marshal());
    assert_eq!(raw, r#""RCEuM3M""#, "scoped output");
    assert_eq!(active(), Encoder::Base64, "scope must end");

    let config: Config = toml::from_str(r#"encoder = "raw_base64""#).expect("config must parse");
    assert_eq!(config.apply(), Encoder::Base64, "previous encoder must be returned");
    assert_eq!(active(), Encoder::RawBase64, "config must install encoder");
    assert_eq!(bytes.marshal(), raw, "raw base64 output");

    let handle = std::thread::spawn(active);
    let other = handle.join().expect("thread must not panic");
    assert_eq!(other, Encoder::RawBase64, "other threads see the process-wide encoder");

    set_active(Encoder::Hex);
}
