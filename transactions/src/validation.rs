//! Validation that needs the module parameters.

use crate::error::TransactionError;
use crate::Tx;
use stake_types::Params;

/// Bonded coins must be in the module's bond denomination.
///
/// Applies to declare-candidacy and delegate; other kinds carry no coins.
pub fn validate_bond_denom(tx: &Tx, params: &Params) -> Result<(), TransactionError> {
    let bond = match tx {
        Tx::DeclareCandidacy(tx) => &tx.bond,
        Tx::Delegate(tx) => &tx.bond,
        Tx::EditCandidacy(_) | Tx::Unbond(_) | Tx::DefineService(_) => return Ok(()),
    };
    if bond.bond.denom != params.allowed_bond_denom {
        return Err(TransactionError::DenomNotAllowed {
            denom: bond.bond.denom.clone(),
            allowed: params.allowed_bond_denom.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        BondUpdate, TxDeclareCandidacy, TxDefineService, TxDelegate, TxEditCandidacy, TxUnbond,
    };
    use stake_types::{Coin, Description, PublicKey};

    fn pk() -> PublicKey {
        PublicKey::new(vec![0x01, 0x02, 0x03])
    }

    fn bond(denom: &str, amount: u64) -> BondUpdate {
        BondUpdate {
            pub_key: pk(),
            bond: Coin::new(denom, amount),
        }
    }

    fn delegate(pub_key: PublicKey, denom: &str, amount: u64) -> Tx {
        Tx::Delegate(TxDelegate {
            bond: BondUpdate {
                pub_key,
                bond: Coin::new(denom, amount),
            },
        })
    }

    #[test]
    fn test_declare_valid() {
        let tx = Tx::DeclareCandidacy(TxDeclareCandidacy {
            bond: bond("fermion", 10),
            description: Description::default(),
        });
        assert!(tx.validate_basic().is_ok());
    }

    #[test]
    fn test_declare_empty_candidate() {
        let tx = Tx::DeclareCandidacy(TxDeclareCandidacy {
            bond: BondUpdate {
                pub_key: PublicKey::default(),
                bond: Coin::new("fermion", 10),
            },
            description: Description::default(),
        });
        assert_eq!(tx.validate_basic(), Err(TransactionError::EmptyCandidate));
    }

    #[test]
    fn test_delegate_zero_amount() {
        let result = delegate(pk(), "fermion", 0).validate_basic();
        assert_eq!(result, Err(TransactionError::NonPositiveAmount));
    }

    #[test]
    fn test_delegate_malformed_denom() {
        let result = delegate(pk(), "F!", 10).validate_basic();
        assert!(matches!(result, Err(TransactionError::InvalidCoins(_))));
    }

    #[test]
    fn test_delegate_empty_candidate_checked_first() {
        let result = delegate(PublicKey::default(), "F!", 0).validate_basic();
        assert_eq!(result, Err(TransactionError::EmptyCandidate));
    }

    #[test]
    fn test_edit_requires_some_field() {
        let empty = Tx::EditCandidacy(TxEditCandidacy {
            pub_key: pk(),
            description: Description::default(),
        });
        assert_eq!(empty.validate_basic(), Err(TransactionError::EmptyDescription));

        let details_only = Tx::EditCandidacy(TxEditCandidacy {
            pub_key: pk(),
            description: Description {
                details: "runs on bare metal".into(),
                ..Description::default()
            },
        });
        assert!(details_only.validate_basic().is_ok());
    }

    #[test]
    fn test_edit_empty_candidate() {
        let tx = Tx::EditCandidacy(TxEditCandidacy {
            pub_key: PublicKey::default(),
            description: Description {
                moniker: "val".into(),
                ..Description::default()
            },
        });
        assert_eq!(tx.validate_basic(), Err(TransactionError::EmptyCandidate));
    }

    #[test]
    fn test_unbond() {
        let zero = Tx::Unbond(TxUnbond { pub_key: pk(), shares: 0 });
        assert_eq!(zero.validate_basic(), Err(TransactionError::ZeroShares));

        let empty = Tx::Unbond(TxUnbond {
            pub_key: PublicKey::default(),
            shares: 5,
        });
        assert_eq!(empty.validate_basic(), Err(TransactionError::EmptyCandidate));

        let ok = Tx::Unbond(TxUnbond { pub_key: pk(), shares: 5 });
        assert!(ok.validate_basic().is_ok());
    }

    #[test]
    fn test_define_service() {
        let no_name = Tx::DefineService(TxDefineService {
            name: String::new(),
            description: "oracle".into(),
        });
        assert_eq!(no_name.validate_basic(), Err(TransactionError::EmptyServiceName));

        let no_desc = Tx::DefineService(TxDefineService {
            name: "oracle".into(),
            description: String::new(),
        });
        assert_eq!(
            no_desc.validate_basic(),
            Err(TransactionError::EmptyServiceDescription)
        );

        let ok = TxDefineService {
            name: "oracle".into(),
            description: "price feed".into(),
        };
        assert!(Tx::DefineService(ok.clone()).validate_basic().is_ok());
        assert_eq!(ok.definition().name, "oracle");
    }

    #[test]
    fn test_bond_denom_must_match_params() {
        let params = Params::default();
        assert!(validate_bond_denom(&delegate(pk(), "fermion", 1), &params).is_ok());
        assert!(matches!(
            validate_bond_denom(&delegate(pk(), "atom", 1), &params),
            Err(TransactionError::DenomNotAllowed { .. })
        ));
        let unbond = Tx::Unbond(TxUnbond { pub_key: pk(), shares: 1 });
        assert!(validate_bond_denom(&unbond, &params).is_ok());
    }

    #[test]
    fn test_routing_metadata() {
        let params = Params::default();
        let tx = delegate(pk(), "fermion", 1);
        assert_eq!(tx.type_byte(), 0x57);
        assert_eq!(tx.type_name(), "stake/delegate");
        assert_eq!(tx.pub_key(), Some(&pk()));
        assert_eq!(tx.gas_cost(&params), Some(params.gas_delegate));

        let svc = Tx::DefineService(TxDefineService {
            name: "n".into(),
            description: "d".into(),
        });
        assert_eq!(svc.type_byte(), 0x59);
        assert_eq!(svc.pub_key(), None);
        assert_eq!(svc.gas_cost(&params), None);
    }

    #[test]
    fn test_tx_json_shape() {
        let tx = Tx::Unbond(TxUnbond { pub_key: pk(), shares: 3 });
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains("Unbond"));
        let back: Tx = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }
}
