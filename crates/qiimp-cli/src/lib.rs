//! CLI library components for the QIIMP schema builder.

pub mod commands;
pub mod logging;
