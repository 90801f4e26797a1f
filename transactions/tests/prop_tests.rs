use proptest::prelude::*;

use stake_transactions::{BondUpdate, Tx, TxDelegate, TxUnbond, TxEditCandidacy};
use stake_types::{Coin, Description, PublicKey};

proptest! {
    /// validate_basic is total and pure: the same tx always yields the same verdict.
    #[test]
    fn validate_basic_is_deterministic(
        key in prop::collection::vec(any::<u8>(), 0..8),
        amount in 0u64..10,
    ) {
        let tx = Tx::Delegate(TxDelegate {
            bond: BondUpdate { pub_key: PublicKey::new(key), bond: Coin::new("fermion", amount) },
        });
        prop_assert_eq!(tx.validate_basic(), tx.validate_basic());
    }

    /// A delegate tx with a valid denom passes iff the key is non-empty and the amount positive.
    #[test]
    fn delegate_validity(
        key in prop::collection::vec(any::<u8>(), 0..8),
        amount in 0u64..10,
    ) {
        let valid = !key.is_empty() && amount > 0;
        let tx = Tx::Delegate(TxDelegate {
            bond: BondUpdate { pub_key: PublicKey::new(key), bond: Coin::new("fermion", amount) },
        });
        prop_assert_eq!(tx.validate_basic().is_ok(), valid);
    }

    /// Unbond passes iff the key is non-empty and shares are positive.
    #[test]
    fn unbond_validity(key in prop::collection::vec(any::<u8>(), 0..8), shares in 0u64..10) {
        let valid = !key.is_empty() && shares > 0;
        let tx = Tx::Unbond(TxUnbond { pub_key: PublicKey::new(key), shares });
        prop_assert_eq!(tx.validate_basic().is_ok(), valid);
    }

    /// Any non-empty moniker makes an edit meaningful.
    #[test]
    fn edit_with_moniker_is_valid(moniker in "[a-z]{1,12}") {
        let tx = Tx::EditCandidacy(TxEditCandidacy {
            pub_key: PublicKey::new(vec![1]),
            description: Description { moniker, ..Description::default() },
        });
        prop_assert!(tx.validate_basic().is_ok());
    }
}
