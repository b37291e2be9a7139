//! Data model and wire types shared by the restaurant clients

#![warn(unused_crate_dependencies)]

pub mod catalog;
pub mod const_config;
pub mod errors;
pub mod id;
mod macros;
pub mod orders;
pub mod req_args;
pub mod session;
pub mod uac;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
