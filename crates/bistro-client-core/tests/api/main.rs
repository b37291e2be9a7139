#![cfg(not(target_arch = "wasm32"))]

mod helpers;
mod login;
mod orders;
mod products;
mod users;
