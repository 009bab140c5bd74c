#![no_std]

pub mod access;
pub mod asset;
mod events;
pub mod gateway;
pub mod pause;
pub mod storage;
pub mod types;
pub mod validation;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use gateway::{ReleaseGateway, ReleaseGatewayClient};
pub use types::*;
