use soroban_sdk::{Address, Env, Vec};
use crate::events;
use crate::storage;
use crate::types::{GatewayError, Role};
use crate::validation;

// ============================================================================
// CONSULTAS
// ============================================================================

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    storage::get_role_members(env, role).contains(account)
}

pub fn role_members(env: &Env, role: Role) -> Vec<Address> {
    storage::get_role_members(env, role)
}

pub fn role_member_count(env: &Env, role: Role) -> u32 {
    storage::get_role_members(env, role).len()
}

// ============================================================================
// CONJUNTO DE MEMBROS (sem duplicatas)
// ============================================================================

/// Adiciona `account` ao papel. Retorna false se já era membro.
fn add_member(env: &Env, role: Role, account: &Address) -> bool {
    let mut members = storage::get_role_members(env, role);
    if members.contains(account) {
        return false;
    }
    members.push_back(account.clone());
    storage::set_role_members(env, role, &members);
    true
}

/// Remove `account` do papel. Retorna false se não era membro.
fn remove_member(env: &Env, role: Role, account: &Address) -> bool {
    let mut members = storage::get_role_members(env, role);
    match members.first_index_of(account) {
        Some(index) => {
            members.remove(index);
            storage::set_role_members(env, role, &members);
            true
        }
        None => false,
    }
}

// ============================================================================
// OPERAÇÕES
// ============================================================================

/// Concessão inicial, sem checagem de papel. Usada apenas no initialize.
pub fn setup_role(env: &Env, role: Role, account: &Address) {
    if add_member(env, role, account) {
        events::emit_role_granted(env, role, account, account);
    }
}

/// Concede `role` a `account`. Idempotente: conceder a um membro é no-op.
pub fn grant_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), GatewayError> {
    caller.require_auth();
    storage::bump_critical_storage(env);

    validation::require_role(env, caller, Role::Admin)?;

    if add_member(env, role, account) {
        events::emit_role_granted(env, role, account, caller);
    }
    Ok(())
}

/// Revoga `role` de `account`. Revogar de um não-membro é no-op.
/// Revogar o último Admin trava o gateway para sempre.
pub fn revoke_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), GatewayError> {
    caller.require_auth();
    storage::bump_critical_storage(env);

    validation::require_role(env, caller, Role::Admin)?;

    if remove_member(env, role, account) {
        events::emit_role_revoked(env, role, account, caller);
    }
    Ok(())
}

/// A própria conta abre mão do papel.
pub fn renounce_role(env: &Env, account: &Address, role: Role) {
    account.require_auth();
    storage::bump_critical_storage(env);

    if remove_member(env, role, account) {
        events::emit_role_revoked(env, role, account, account);
    }
}
