//! Header render model

pub mod header;

pub use header::{AvatarSlot, HeaderView, LocaleSelector};
