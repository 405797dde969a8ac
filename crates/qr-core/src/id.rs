use chrono::{SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Identifier derivation
//
// Seed: "{user_id}_{amount}_{timestamp}_{uuid_v4}"
// The v4 draw plus a microsecond timestamp make collisions negligible even
// for identical transactions; the v5 hash fixes the output to the canonical
// 36-char hyphenated form. The result is an opaque label, not a commitment:
// nothing is recoverable from it and it is never recomputed.
// ---------------------------------------------------------------------------

/// Transaction fields an identifier is derived from.
///
/// `Decimal` makes non-finite amounts unrepresentable; anything that is not
/// a finite number is rejected at deserialization time, before derivation.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInput {
    pub user_id: i64,
    pub amount: Decimal,
}

/// Derive a fresh identifier for this transaction.
///
/// Every call returns a new value, even for identical inputs. The output is
/// always a canonical 36-character hyphenated UUID string.
pub fn derive_identifier(tx: &TransactionInput) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    let entropy = Uuid::new_v4();
    let seed = format!("{}_{}_{}_{}", tx.user_id, tx.amount, timestamp, entropy);
    Uuid::new_v5(&Uuid::NAMESPACE_DNS, seed.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn tx(user_id: i64, amount: Decimal) -> TransactionInput {
        TransactionInput { user_id, amount }
    }

    #[test]
    fn identical_inputs_never_repeat() {
        let t = tx(42, dec!(19.99));
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(derive_identifier(&t)), "identifier repeated");
        }
    }

    #[test]
    fn output_is_canonical_v5_uuid() {
        let id = derive_identifier(&tx(7, dec!(100)));
        assert_eq!(id.len(), 36);
        let parsed = Uuid::parse_str(&id).expect("canonical uuid");
        assert_eq!(parsed.get_version_num(), 5);
        assert_eq!(id, parsed.to_string(), "must already be hyphenated lowercase");
    }

    #[test]
    fn boundary_inputs_still_derive() {
        let cases = [
            tx(0, dec!(0)),
            tx(-1, dec!(-50.25)),
            tx(i64::MAX, dec!(0.000000001)),
            tx(i64::MIN, dec!(123456789.123456789)),
        ];
        for t in cases {
            let id = derive_identifier(&t);
            assert!(Uuid::parse_str(&id).is_ok(), "bad identifier for {t:?}");
        }
    }

    #[test]
    fn amount_rejects_non_finite_json() {
        // JSON has no NaN/Infinity literal; a string posing as a number must
        // not sneak through either.
        let r: Result<TransactionInput, _> =
            serde_json::from_str(r#"{"user_id": 1, "amount": "abc"}"#);
        assert!(r.is_err());
    }
}
