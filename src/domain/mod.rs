//! Domain types for the character record service.
//!
//! This module provides:
//! - The persisted `Character` record and its `NewCharacter` create shape
//! - The `CharacterId` identifier newtype

pub mod character;

pub use character::{Character, CharacterId, NewCharacter};
