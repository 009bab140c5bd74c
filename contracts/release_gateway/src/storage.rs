use soroban_sdk::{symbol_short, Address, Env, Vec};
use crate::types::Role;

// ============================================================================
// CONSTANTES
// ============================================================================

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL do storage de instância (asset, papéis, paused, supply)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

// ============================================================================
// ASSET SUBJACENTE
// ============================================================================

pub fn has_asset(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("asset"))
}

pub fn get_asset(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("asset"))
}

pub fn set_asset(env: &Env, asset: &Address) {
    env.storage().instance().set(&symbol_short!("asset"), asset);
}

// ============================================================================
// PAPÉIS
// ============================================================================

pub fn get_role_members(env: &Env, role: Role) -> Vec<Address> {
    let key = (symbol_short!("role"), role);
    env.storage()
        .instance()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_role_members(env: &Env, role: Role, members: &Vec<Address>) {
    let key = (symbol_short!("role"), role);
    env.storage().instance().set(&key, members);
}

// ============================================================================
// PAUSED
// ============================================================================

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("paused"))
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&symbol_short!("paused"), &paused);
}

// ============================================================================
// SUPPLY EM CIRCULAÇÃO
// ============================================================================

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("supply"), &amount);
}
