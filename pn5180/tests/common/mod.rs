// Shared helpers for integration tests. Each test crate pulls in only part
// of this module.
#![allow(dead_code)]

pub mod helpers;
