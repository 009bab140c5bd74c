use soroban_sdk::{Address, Env};
use crate::events;
use crate::storage;
use crate::types::{GatewayError, Role};
use crate::validation;

// ============================================================================
// CIRCUIT BREAKER
// ============================================================================

pub fn is_paused(env: &Env) -> bool {
    storage::is_paused(env)
}

/// Pausa o gateway (apenas Admin). Pausar já pausado é no-op.
pub fn pause(env: &Env, caller: &Address) -> Result<(), GatewayError> {
    set_paused(env, caller, true)
}

/// Despausa o gateway (apenas Admin). Despausar já ativo é no-op.
pub fn unpause(env: &Env, caller: &Address) -> Result<(), GatewayError> {
    set_paused(env, caller, false)
}

fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), GatewayError> {
    // === CHECKS ===
    caller.require_auth();
    storage::bump_critical_storage(env);

    validation::require_role(env, caller, Role::Admin)?;

    if storage::is_paused(env) == paused {
        return Ok(());
    }

    // === EFFECTS ===
    storage::set_paused(env, paused);

    // === INTERACTIONS ===
    if paused {
        events::emit_pause(env, caller);
    } else {
        events::emit_unpause(env, caller);
    }

    Ok(())
}
