use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use crate::access;
use crate::asset::AssetLink;
use crate::events;
use crate::pause;
use crate::storage;
use crate::types::{GatewayError, Role};
use crate::validation;

//
// CONTRATO PRINCIPAL - RELEASE GATEWAY
//
// Custódia de um pool pré-financiado de um único token. Admins liberam
// ("mint") partes do pool para destinatários; a operação inversa
// ("burn") é desabilitada permanentemente.
//

#[contract]
pub struct ReleaseGateway;

#[contractimpl]
impl ReleaseGateway {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o gateway com o token custodiado.
    ///
    /// O financiamento do pool é externo: o deployer (ou quem for) transfere
    /// tokens para o endereço do gateway depois desta chamada.
    ///
    /// # Parâmetros
    /// - `deployer`: recebe o papel `Admin` até repassá-lo
    /// - `asset`: endereço do contrato do token subjacente
    ///
    /// # Erros
    /// - `AlreadyInitialized`: se o contrato já foi inicializado
    /// - `InvalidToken`: se `asset` é nulo ou o próprio gateway
    pub fn initialize(env: Env, deployer: Address, asset: Address) -> Result<(), GatewayError> {
        // CHECKS
        if storage::has_asset(&env) {
            return Err(GatewayError::AlreadyInitialized);
        }
        deployer.require_auth();
        let link = AssetLink::new(&env, asset)?;

        // EFFECTS
        storage::set_asset(&env, link.address());
        storage::set_paused(&env, false);
        storage::set_total_supply(&env, 0);
        access::setup_role(&env, Role::Admin, &deployer);
        storage::bump_critical_storage(&env);

        // INTERACTIONS
        events::emit_initialized(&env, &deployer, link.address());

        Ok(())
    }

    //
    // CONSULTAS
    //

    /// Supply em circulação: soma de tudo que já foi liberado.
    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    /// Endereço do token custodiado.
    pub fn asset(env: Env) -> Result<Address, GatewayError> {
        Ok(AssetLink::load(&env)?.address().clone())
    }

    /// Saldo do token subjacente de qualquer conta.
    pub fn balance_of(env: Env, account: Address) -> Result<i128, GatewayError> {
        Ok(AssetLink::load(&env)?.balance_of(&account))
    }

    /// Saldo ainda não liberado do pool.
    pub fn held_balance(env: Env) -> Result<i128, GatewayError> {
        Ok(AssetLink::load(&env)?.held_balance())
    }

    pub fn is_paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access::has_role(&env, role, &account)
    }

    pub fn role_members(env: Env, role: Role) -> Vec<Address> {
        access::role_members(&env, role)
    }

    pub fn role_member_count(env: Env, role: Role) -> u32 {
        access::role_member_count(&env, role)
    }

    //
    // RELEASE ("MINT") / RECLAIM ("BURN")
    //

    /// Libera `amount` do pool para `recipient` (apenas Admin).
    ///
    /// Ordem dos guards: papel -> pausa -> destinatário -> amount. Falhas
    /// de autorização têm precedência sobre a pausa.
    ///
    /// # Erros
    /// - `Unauthorized`, `Paused`, `InvalidRecipient`, `InvalidAmount`
    /// - `TransferFailed`: o pool não cobre `amount`
    pub fn release(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), GatewayError> {
        // === CHECKS ===
        caller.require_auth();
        storage::bump_critical_storage(&env);

        validation::require_role(&env, &caller, Role::Admin)?;
        validation::require_not_paused(&env)?;
        validation::require_valid_recipient(&env, &recipient)?;
        validation::require_positive_amount(amount)?;

        let link = AssetLink::load(&env)?;
        let new_supply = storage::get_total_supply(&env)
            .checked_add(amount)
            .ok_or(GatewayError::InvalidAmount)?;

        // === INTERACTIONS ===
        // O contador só é gravado depois que o token aceitou a transferência.
        link.transfer(&recipient, amount)?;

        // === EFFECTS ===
        storage::set_total_supply(&env, new_supply);
        events::emit_release(&env, &caller, &recipient, amount);

        Ok(())
    }

    /// Desabilitado permanentemente: o pool só se esvazia.
    /// Sempre falha com `UnsupportedOperation`, sem efeitos colaterais.
    pub fn reclaim(_env: Env, _account: Address, _amount: i128) -> Result<(), GatewayError> {
        Err(GatewayError::UnsupportedOperation)
    }

    //
    // CIRCUIT BREAKER
    //

    pub fn pause(env: Env, caller: Address) -> Result<(), GatewayError> {
        pause::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), GatewayError> {
        pause::unpause(&env, &caller)
    }

    //
    // CONTROLE DE ACESSO
    //

    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), GatewayError> {
        access::grant_role(&env, &caller, role, &account)
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), GatewayError> {
        access::revoke_role(&env, &caller, role, &account)
    }

    pub fn renounce_role(env: Env, account: Address, role: Role) {
        access::renounce_role(&env, &account, role)
    }
}

//
// TESTES UNITÁRIOS
//
