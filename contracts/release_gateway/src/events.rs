use soroban_sdk::{symbol_short, Address, Env};
use crate::types::Role;

//
// EVENTOS DO GATEWAY
//

// Inicialização (deployer recebe Admin)
pub fn emit_initialized(env: &Env, deployer: &Address, asset: &Address) {
    env.events().publish(
        (symbol_short!("init"), deployer),
        asset.clone(),
    );
}

// Papel concedido. Role vai nos dados: topics não aceitam Vec.
pub fn emit_role_granted(env: &Env, role: Role, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_grnt"), account),
        (role, sender.clone()),
    );
}

// Papel revogado (inclui renúncia)
pub fn emit_role_revoked(env: &Env, role: Role, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_rvk"), account),
        (role, sender.clone()),
    );
}

// Pausa
pub fn emit_pause(env: &Env, caller: &Address) {
    env.events().publish(
        (symbol_short!("pause"),),
        caller.clone(),
    );
}

// Despausa
pub fn emit_unpause(env: &Env, caller: &Address) {
    env.events().publish(
        (symbol_short!("unpause"),),
        caller.clone(),
    );
}

// Liberação do pool ("mint")
pub fn emit_release(env: &Env, caller: &Address, recipient: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("release"), caller, recipient),
        amount,
    );
}

//
// TESTES
//
