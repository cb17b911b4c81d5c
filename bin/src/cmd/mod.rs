//! CLI subcommand modules.
//!
//! This module contains the implementations for all balanza CLI subcommands.

pub(crate) mod calc;
pub(crate) mod currencies;
pub(crate) mod ratios;
