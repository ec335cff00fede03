//! Data models module

pub mod quote;

pub use quote::Quote;
