// # Canonical signing tests
//
// The server recomputes the signature from the same inputs, so these lock
// the canonical form byte for byte.

use proptest::prelude::*;
use serde_json::json;

use karcher_core::signing::{canonical_body, render_value, sign, signature, RequestBuilder, SigningContext};

fn ctx() -> SigningContext {
    SigningContext::new(1_700_000_000, "abc", "tok")
}

// ## 1️⃣ Canonical body

#[test]
fn get_canonical_body_is_empty_and_ignores_query() {
    let req = RequestBuilder::get("/network-service/domains/list")
        .query("tenantId", "1")
        .query("version", 1)
        .build();
    assert_eq!(canonical_body(&req), "");

    let bare = RequestBuilder::get("/network-service/domains/list").build();
    assert_eq!(sign(&req, &ctx()), sign(&bare, &ctx()));
}

#[test]
fn post_fields_render_in_insertion_order() {
    let req = RequestBuilder::post("/x")
        .field("a", 1)
        .field("b", json!(null))
        .field("c", "text")
        .field("d", json!({"z": 1, "y": "two"}))
        .field("e", true)
        .field("f", 1.5)
        .field("g", json!(["p", 2]))
        .build();

    assert_eq!(
        canonical_body(&req),
        r#"a1bnullctextd{"z":1,"y":"two"}eTruef1.5g["p",2]"#
    );
}

#[test]
fn render_value_rules() {
    assert_eq!(render_value(&json!(null)), "null");
    assert_eq!(render_value(&json!("raw \"text\"")), "raw \"text\"");
    assert_eq!(render_value(&json!({"k": {"n": [1, 2]}})), r#"{"k":{"n":[1,2]}}"#);
    assert_eq!(render_value(&json!(10001)), "10001");
    assert_eq!(render_value(&json!(-3)), "-3");
}

#[test]
fn booleans_render_capitalized() {
    assert_eq!(render_value(&json!(true)), "True");
    assert_eq!(render_value(&json!(false)), "False");
    // Inside structured values they stay JSON literals.
    assert_eq!(render_value(&json!({"on": true})), r#"{"on":true}"#);
}

#[test]
fn structured_values_escape_non_ascii() {
    assert_eq!(render_value(&json!({"n": "Küche"})), r#"{"n":"K\u00fcche"}"#);
    assert_eq!(render_value(&json!(["Żółw"])), r#"["\u017b\u00f3\u0142w"]"#);
    // Outside the BMP: UTF-16 surrogate pair.
    assert_eq!(render_value(&json!({"e": "😀"})), r#"{"e":"\ud83d\ude00"}"#);
    // Regular JSON escapes are untouched.
    assert_eq!(render_value(&json!({"q": "a\"b\n"})), r#"{"q":"a\"b\n"}"#);
    // Top-level strings are signed raw.
    assert_eq!(render_value(&json!("Küche")), "Küche");
}

#[test]
fn repeated_field_keeps_first_position() {
    let req = RequestBuilder::post("/x")
        .field("a", 1)
        .field("b", 2)
        .field("a", 3)
        .build();
    assert_eq!(canonical_body(&req), "a3b2");
}

#[test]
fn empty_post_has_empty_canonical_body_and_json_object() {
    let req = RequestBuilder::post("/user-center/auth/logout").build();
    assert_eq!(canonical_body(&req), "");
    assert_eq!(req.json_body().unwrap(), b"{}".to_vec());
}

#[test]
fn put_is_signed_like_post() {
    let post = RequestBuilder::post("/x").field("a", 1).build();
    let put = RequestBuilder::put("/x").field("a", 1).build();
    assert_eq!(canonical_body(&post), canonical_body(&put));
}

#[test]
fn json_body_follows_field_order() {
    let req = RequestBuilder::post("/x")
        .field("zeta", 1)
        .field("alpha", json!(null))
        .build();
    let body = String::from_utf8(req.json_body().unwrap()).unwrap();
    assert_eq!(body, r#"{"zeta":1,"alpha":null}"#);
}

// ## 2️⃣ Signature

#[test]
fn signature_known_vector() {
    // md5("tok" ++ "1700000000" ++ "abc" ++ "a1bnull")
    let req = RequestBuilder::post("/x").field("a", 1).null_field("b").build();
    let headers = sign(&req, &ctx());
    assert_eq!(headers.sign, "298c410be34fdfc18fa4d810bc40d210");
    assert_eq!(headers.ts, "1700000000");
    assert_eq!(headers.nonce, "abc");
}

#[test]
fn signature_known_vector_with_bool_and_unicode() {
    // md5("tok" ++ "1700000000" ++ "abc" ++ r#"flagTrueroom{"n":"K\u00fcche","e":"\ud83d\ude00"}"#)
    let req = RequestBuilder::post("/x")
        .field("flag", true)
        .field("room", json!({"n": "Küche", "e": "😀"}))
        .build();
    assert_eq!(
        canonical_body(&req),
        r#"flagTrueroom{"n":"K\u00fcche","e":"\ud83d\ude00"}"#
    );
    assert_eq!(sign(&req, &ctx()).sign, "ad22939aa31db5c012210a294d7c6656");
}

#[test]
fn json_body_carries_unicode_unchanged() {
    let req = RequestBuilder::post("/x").field("n", "Küche").field("on", true).build();
    let body = String::from_utf8(req.json_body().unwrap()).unwrap();
    assert_eq!(body, r#"{"n":"Küche","on":true}"#);
    assert!(RequestBuilder::get("/x").build().json_body().is_none());
}

#[test]
fn signature_without_token_or_body() {
    let ctx = SigningContext::new(1_700_000_000, "0123456789abcdef", "");
    assert_eq!(signature(&ctx, ""), "0e48de2e25bf78418770443053315722");
}

#[test]
fn signature_is_lower_hex_32() {
    let req = RequestBuilder::post("/x").field("a", "b").build();
    let s = sign(&req, &SigningContext::fresh("")).sign;
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn reordering_fields_changes_signature() {
    let ab = RequestBuilder::post("/x").field("a", "1").field("b", "2").build();
    let ba = RequestBuilder::post("/x").field("b", "2").field("a", "1").build();
    assert_ne!(sign(&ab, &ctx()).sign, sign(&ba, &ctx()).sign);
}

#[test]
fn nested_object_key_order_matters() {
    let one = RequestBuilder::post("/x").field("n", json!({"andIpad": "r", "android": "r"})).build();
    let two = RequestBuilder::post("/x").field("n", json!({"android": "r", "andIpad": "r"})).build();
    assert_ne!(canonical_body(&one), canonical_body(&two));
}

#[test]
fn fresh_contexts_use_new_nonces() {
    let a = SigningContext::fresh("t");
    let b = SigningContext::fresh("t");
    assert_ne!(a.nonce, b.nonce);
    assert_eq!(a.nonce.len(), 32);
}

proptest! {
    #[test]
    fn prop_signature_deterministic(
        token in "[a-zA-Z0-9]{0,24}",
        ts in 0i64..4_000_000_000,
        nonce in "[a-f0-9]{32}",
        fields in proptest::collection::vec(("[a-z]{1,8}", "[ -~]{0,16}"), 0..6),
    ) {
        let build = || {
            let mut b = RequestBuilder::post("/p");
            for (k, v) in &fields {
                b = b.field(k.clone(), v.clone());
            }
            b.build()
        };
        let ctx = SigningContext::new(ts, nonce.clone(), token.clone());
        prop_assert_eq!(sign(&build(), &ctx), sign(&build(), &ctx));
    }
}
