//! Browser-backed tests for the parts that need real web APIs:
//! multipart payload assembly and session storage.

#![cfg(target_arch = "wasm32")]

use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::File;

use safetrust_frontend::api_client::cases::{
    CryptoLossForm, MoneyRecoveryForm, SocialMediaRecoveryForm,
};
use safetrust_frontend::session;

wasm_bindgen_test_configure!(run_in_browser);

fn make_file(name: &str) -> File {
    let parts = Array::of1(&JsValue::from_str("stub content"));
    File::new_with_str_sequence(&parts, name).unwrap()
}

#[wasm_bindgen_test]
fn crypto_payload_carries_every_scalar_and_every_document() {
    let mut form = CryptoLossForm::default();
    form.set_field("title", "Stolen BTC".into());
    form.set_field("txid", "0xabc123".into());
    form.supporting_documents = vec![make_file("proof-1.png"), make_file("proof-2.pdf")];

    let data = form.multipart_payload().unwrap();

    assert_eq!(data.get("title").as_string().as_deref(), Some("Stolen BTC"));
    assert_eq!(data.get("txid").as_string().as_deref(), Some("0xabc123"));
    // Untouched scalars still travel, as empty strings.
    assert_eq!(data.get("sender_wallet").as_string().as_deref(), Some(""));
    assert_eq!(data.get("crypto_type").as_string().as_deref(), Some("Bitcoin"));

    let documents = data.get_all("supporting_documents");
    assert_eq!(documents.length(), 2);
    let first: File = documents.get(0).into();
    assert_eq!(first.name(), "proof-1.png");
}

#[wasm_bindgen_test]
fn money_payload_includes_empty_fields() {
    let mut form = MoneyRecoveryForm::default();
    form.set_field("amount", "2500.00".into());

    let data = form.multipart_payload().unwrap();

    assert_eq!(data.get("amount").as_string().as_deref(), Some("2500.00"));
    assert_eq!(data.get("iban").as_string().as_deref(), Some(""));
    assert_eq!(data.get_all("supporting_documents").length(), 0);
}

#[wasm_bindgen_test]
fn social_payload_skips_empty_fields() {
    let mut form = SocialMediaRecoveryForm::default();
    form.set_field("username", "@janedoe".into());
    form.profile_pic = Some(make_file("avatar.jpg"));

    let data = form.multipart_payload().unwrap();

    assert_eq!(data.get("username").as_string().as_deref(), Some("@janedoe"));
    // Empty scalars are absent from the payload entirely.
    assert!(data.get("phone").is_undefined());
    assert!(data.get("profile_url").is_undefined());

    let pic: File = data.get("profile_pic").into();
    assert_eq!(pic.name(), "avatar.jpg");
}

#[wasm_bindgen_test]
fn session_tokens_round_trip_through_storage() {
    session::logout();
    assert!(!session::is_authenticated());
    assert_eq!(session::token(), None);

    session::store_tokens("tok-abc", Some("ref-xyz"));
    assert!(session::is_authenticated());
    assert_eq!(session::token().as_deref(), Some("tok-abc"));

    session::logout();
    assert!(!session::is_authenticated());
}
