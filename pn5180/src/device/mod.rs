// pn5180-rs/pn5180/src/device/mod.rs

pub mod builder;
pub mod handle;
pub mod iso15693;

pub use builder::Pn5180Builder;
pub use handle::Pn5180;
