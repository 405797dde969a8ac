pub mod id;
pub mod symbol;

pub use id::{derive_identifier, TransactionInput};
pub use symbol::SymbolError;

// ---------------------------------------------------------------------------
// qr-core — transaction QR issuing pipeline
//
// Two leaf components, composed linearly:
//   TransactionInput ──derive──> identifier ──encode──> PNG ──b64──> payload
//
// No state survives a call. A failure at any stage aborts the whole
// operation; an IssuedCode always carries both fields or is never built.
// ---------------------------------------------------------------------------

/// One issued code: the identifier and the symbol that encodes it.
///
/// Invariant: `identifier` is byte-for-byte the string embedded in the
/// symbol behind `png_base64`. The two are only ever produced together.
#[derive(Debug, Clone)]
pub struct IssuedCode {
    pub identifier: String,
    pub png_base64: String,
}

/// Derive an identifier for the transaction and encode it as a QR symbol.
pub fn issue(tx: &TransactionInput) -> Result<IssuedCode, SymbolError> {
    let identifier = id::derive_identifier(tx);
    let png_base64 = symbol::encode_base64(&identifier)?;
    Ok(IssuedCode {
        identifier,
        png_base64,
    })
}

/// Placeholder validation: accepts any non-empty identifier.
///
/// A real deployment would resolve the identifier against previously
/// issued codes. No such store exists here, so this only rejects the
/// empty string.
pub fn validate(identifier: &str) -> bool {
    !identifier.is_empty()
}
