use base64::{engine::general_purpose, Engine as _};
use qr_core::{derive_identifier, issue, symbol, TransactionInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// End-to-end: derive → encode → decode PNG → scan the symbol back.
// ---------------------------------------------------------------------------

fn tx(user_id: i64, amount: Decimal) -> TransactionInput {
    TransactionInput { user_id, amount }
}

/// Decode a PNG and read the QR payload out of it.
fn scan(png: &[u8]) -> String {
    let img = image::load_from_memory(png).expect("valid png").to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32)[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one symbol");
    let (_meta, content) = grids[0].decode().expect("decodable symbol");
    content
}

#[test]
fn scanned_payload_equals_identifier() {
    let issued = issue(&tx(42, dec!(19.99))).unwrap();
    let png = general_purpose::STANDARD
        .decode(&issued.png_base64)
        .unwrap();
    assert_eq!(scan(&png), issued.identifier);
}

#[test]
fn boundary_amounts_stay_scannable() {
    let cases = [
        tx(0, dec!(0)),
        tx(-7, dec!(-0.01)),
        tx(1, dec!(0.123456789012345)),
        tx(i64::MAX, dec!(99999999.99)),
    ];
    for t in cases {
        let issued = issue(&t).unwrap();
        assert_eq!(issued.identifier.len(), 36);
        let png = general_purpose::STANDARD
            .decode(&issued.png_base64)
            .unwrap();
        assert_eq!(scan(&png), issued.identifier, "mismatch for {t:?}");
    }
}

#[test]
fn reissuing_same_transaction_yields_new_identifier() {
    let t = tx(42, dec!(19.99));
    let a = issue(&t).unwrap();
    let b = issue(&t).unwrap();
    assert_ne!(a.identifier, b.identifier);
    // Different payloads must also render different symbols.
    assert_ne!(a.png_base64, b.png_base64);
}

#[test]
fn encoding_a_derived_identifier_is_idempotent() {
    let id = derive_identifier(&tx(9, dec!(1.50)));
    assert_eq!(
        symbol::encode_base64(&id).unwrap(),
        symbol::encode_base64(&id).unwrap()
    );
}
