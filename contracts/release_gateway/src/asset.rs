use soroban_sdk::{log, token, Address, Env};
use crate::storage;
use crate::types::GatewayError;
use crate::validation;

// ============================================================================
// LINK COM O TOKEN SUBJACENTE (SEP-41)
// ============================================================================

/// Handle para o ledger externo do token custodiado. O endereço é fixado
/// no initialize e nunca muda.
#[derive(Clone)]
pub struct AssetLink {
    env: Env,
    address: Address,
}

impl AssetLink {
    /// Valida a referência do token.
    ///
    /// # Erros
    /// - `InvalidToken`: endereço nulo ou o próprio gateway
    pub fn new(env: &Env, address: Address) -> Result<Self, GatewayError> {
        if validation::is_zero_address(env, &address)
            || address == env.current_contract_address()
        {
            log!(env, "invalid asset reference", address);
            return Err(GatewayError::InvalidToken);
        }
        Ok(Self { env: env.clone(), address })
    }

    /// Carrega o link gravado no storage.
    pub fn load(env: &Env) -> Result<Self, GatewayError> {
        let address = storage::get_asset(env).ok_or(GatewayError::NotInitialized)?;
        Ok(Self { env: env.clone(), address })
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    fn client(&self) -> token::Client<'_> {
        token::Client::new(&self.env, &self.address)
    }

    pub fn balance_of(&self, account: &Address) -> i128 {
        self.client().balance(account)
    }

    /// Saldo do pool mantido pelo próprio gateway.
    pub fn held_balance(&self) -> i128 {
        self.balance_of(&self.env.current_contract_address())
    }

    /// Transfere `amount` do saldo do gateway para `to`.
    ///
    /// # Erros
    /// - `TransferFailed`: saldo insuficiente ou o token recusou a chamada
    pub fn transfer(&self, to: &Address, amount: i128) -> Result<(), GatewayError> {
        let from = self.env.current_contract_address();

        let held = self.balance_of(&from);
        if held < amount {
            log!(&self.env, "insufficient held balance", held, amount);
            return Err(GatewayError::TransferFailed);
        }

        match self.client().try_transfer(&from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => {
                log!(&self.env, "asset transfer rejected", to.clone(), amount);
                Err(GatewayError::TransferFailed)
            }
        }
    }
}
