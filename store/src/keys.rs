//! Key layout. Every key lives under the `stake/` module prefix.

use stake_types::{Address, PublicKey};

pub const PREFIX: &[u8] = b"stake/";

fn prefixed(parts: &[&[u8]]) -> Vec<u8> {
    let len = PREFIX.len() + parts.iter().map(|p| p.len()).sum::<usize>();
    let mut key = Vec::with_capacity(len);
    key.extend_from_slice(PREFIX);
    for part in parts {
        key.extend_from_slice(part);
    }
    key
}

/// Address segment, length-prefixed so that `(address, pubkey)` pairs never collide.
///
/// The prefix is a big-endian `u64`, wide enough for any in-memory length.
fn address_segment(address: &Address) -> Vec<u8> {
    let raw = address.as_str().as_bytes();
    let mut seg = Vec::with_capacity(8 + raw.len());
    seg.extend_from_slice(&(raw.len() as u64).to_be_bytes());
    seg.extend_from_slice(raw);
    seg
}

pub fn params_key() -> Vec<u8> {
    prefixed(&[b"params"])
}

pub fn height_key() -> Vec<u8> {
    prefixed(&[b"height"])
}

/// Index of all candidate public keys.
pub fn candidates_key() -> Vec<u8> {
    prefixed(&[b"candidates"])
}

pub fn candidate_key(pub_key: &PublicKey) -> Vec<u8> {
    prefixed(&[b"candidate/", pub_key.as_bytes()])
}

pub fn delegator_bond_key(delegator: &Address, pub_key: &PublicKey) -> Vec<u8> {
    prefixed(&[b"bond/", &address_segment(delegator), pub_key.as_bytes()])
}

/// Index of the candidates a delegator is bonded to.
pub fn delegator_bonds_key(delegator: &Address) -> Vec<u8> {
    prefixed(&[b"bonds/", &address_segment(delegator)])
}

pub fn service_key(name: &str) -> Vec<u8> {
    prefixed(&[b"service/", name.as_bytes()])
}

pub fn queue_prefix(type_byte: u8) -> Vec<u8> {
    prefixed(&[b"queue/", &[type_byte], b"/"])
}
