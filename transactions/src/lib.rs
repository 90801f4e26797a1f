//! Staking transaction kinds and their structural validation.
//!
//! Transaction types:
//! - **DeclareCandidacy**: bond an initial self-delegation and register a candidate
//! - **EditCandidacy**: change a candidate's description
//! - **Delegate**: bond coins to a candidate
//! - **Unbond**: withdraw shares from a candidate (paid out after the unbonding period)
//! - **DefineService**: register a named service definition
//!
//! The set is closed: [`Tx`] is a plain enum and every dispatch is an
//! exhaustive `match`.

pub mod bond;
pub mod edit;
pub mod error;
pub mod service;
pub mod unbond;
pub mod validation;

pub use bond::{BondUpdate, TxDeclareCandidacy, TxDelegate};
pub use edit::TxEditCandidacy;
pub use error::TransactionError;
pub use service::TxDefineService;
pub use unbond::TxUnbond;
pub use validation::validate_bond_denom;

use serde::{Deserialize, Serialize};
use stake_types::{Params, PublicKey, MODULE_NAME};

pub const BYTE_TX_DECLARE_CANDIDACY: u8 = 0x55;
pub const BYTE_TX_EDIT_CANDIDACY: u8 = 0x56;
pub const BYTE_TX_DELEGATE: u8 = 0x57;
pub const BYTE_TX_UNBOND: u8 = 0x58;
pub const BYTE_TX_DEFINE_SERVICE: u8 = 0x59;

/// The unified transaction enum wrapping all staking transaction kinds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tx {
    DeclareCandidacy(TxDeclareCandidacy),
    EditCandidacy(TxEditCandidacy),
    Delegate(TxDelegate),
    Unbond(TxUnbond),
    DefineService(TxDefineService),
}

impl Tx {
    /// Stateless structural checks, run before any state is touched.
    pub fn validate_basic(&self) -> Result<(), TransactionError> {
        match self {
            Self::DeclareCandidacy(tx) => tx.validate_basic(),
            Self::EditCandidacy(tx) => tx.validate_basic(),
            Self::Delegate(tx) => tx.validate_basic(),
            Self::Unbond(tx) => tx.validate_basic(),
            Self::DefineService(tx) => tx.validate_basic(),
        }
    }

    /// Wire type byte.
    pub fn type_byte(&self) -> u8 {
        match self {
            Self::DeclareCandidacy(_) => BYTE_TX_DECLARE_CANDIDACY,
            Self::EditCandidacy(_) => BYTE_TX_EDIT_CANDIDACY,
            Self::Delegate(_) => BYTE_TX_DELEGATE,
            Self::Unbond(_) => BYTE_TX_UNBOND,
            Self::DefineService(_) => BYTE_TX_DEFINE_SERVICE,
        }
    }

    /// Routing name, prefixed with the module name.
    pub fn type_name(&self) -> String {
        let kind = match self {
            Self::DeclareCandidacy(_) => "declareCandidacy",
            Self::EditCandidacy(_) => "editCandidacy",
            Self::Delegate(_) => "delegate",
            Self::Unbond(_) => "unbond",
            Self::DefineService(_) => "defineService",
        };
        format!("{MODULE_NAME}/{kind}")
    }

    /// The candidate this transaction targets, if any.
    pub fn pub_key(&self) -> Option<&PublicKey> {
        match self {
            Self::DeclareCandidacy(tx) => Some(&tx.bond.pub_key),
            Self::EditCandidacy(tx) => Some(&tx.pub_key),
            Self::Delegate(tx) => Some(&tx.bond.pub_key),
            Self::Unbond(tx) => Some(&tx.pub_key),
            Self::DefineService(_) => None,
        }
    }

    /// Gas charged by this module. Service definitions are not metered here.
    pub fn gas_cost(&self, params: &Params) -> Option<u64> {
        match self {
            Self::DeclareCandidacy(_) => Some(params.gas_declare_candidacy),
            Self::EditCandidacy(_) => Some(params.gas_edit_candidacy),
            Self::Delegate(_) => Some(params.gas_delegate),
            Self::Unbond(_) => Some(params.gas_unbond),
            Self::DefineService(_) => None,
        }
    }
}
