use soroban_sdk::{contracterror, contracttype};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GatewayError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidToken = 3,
    Unauthorized = 4,
    Paused = 5,
    InvalidRecipient = 6,
    InvalidAmount = 7,

    // reclaim (burn) é desabilitado permanentemente
    UnsupportedOperation = 8,

    // O token subjacente recusou a transferência
    TransferFailed = 9,
}

// ============================================================================
// PAPÉIS (RBAC)
// ============================================================================

/// Papéis de controle de acesso. Só existe o papel operacional `Admin`,
/// sem hierarquia entre papéis.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
}
