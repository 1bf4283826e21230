//! Identify-friend-or-foe exchange built on a letter-rotation tag.
//!
//! The cipher is an identity token for the simulation, not a security mechanism.

pub mod cipher;
pub mod interrogator;

pub use cipher::IdentityCipher;
pub use interrogator::{IffInterrogator, Interrogation};
