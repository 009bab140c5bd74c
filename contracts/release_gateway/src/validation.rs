use soroban_sdk::{log, Address, Env, String};
use crate::access;
use crate::storage;
use crate::types::{GatewayError, Role};

// ============================================================================
// ENDEREÇOS NULOS
// ============================================================================

/// Conta Stellar com chave pública toda zerada
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Endereço de contrato todo zerado
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// Retorna true se `addr` é um dos endereços nulos.
pub fn is_zero_address(env: &Env, addr: &Address) -> bool {
    let zero_account = Address::from_string(&String::from_str(env, ZERO_ACCOUNT));
    let zero_contract = Address::from_string(&String::from_str(env, ZERO_CONTRACT));
    *addr == zero_account || *addr == zero_contract
}

// ============================================================================
// GUARDS (ordem: papel -> pausa -> destinatário -> quantidade)
// ============================================================================

/// Valida se o caller possui o papel exigido
pub fn require_role(env: &Env, caller: &Address, role: Role) -> Result<(), GatewayError> {
    if !access::has_role(env, role, caller) {
        log!(env, "account is missing role", caller.clone(), role);
        return Err(GatewayError::Unauthorized);
    }
    Ok(())
}

/// Valida se o contrato não está pausado
pub fn require_not_paused(env: &Env) -> Result<(), GatewayError> {
    if storage::is_paused(env) {
        return Err(GatewayError::Paused);
    }
    Ok(())
}

/// Valida se o destinatário não é um endereço nulo nem o próprio gateway
/// (o supply tem que sair do pool).
pub fn require_valid_recipient(env: &Env, recipient: &Address) -> Result<(), GatewayError> {
    if is_zero_address(env, recipient) || *recipient == env.current_contract_address() {
        return Err(GatewayError::InvalidRecipient);
    }
    Ok(())
}

/// Valida se o amount é válido (> 0)
pub fn require_positive_amount(amount: i128) -> Result<(), GatewayError> {
    if amount <= 0 {
        return Err(GatewayError::InvalidAmount);
    }
    Ok(())
}
