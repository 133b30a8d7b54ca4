//! Core treasury engine — vault registry, fee collection, authorized burning.

use crate::auth::{self, LifecyclePhase, RoleRegistry};
use crate::error::TreasuryError;
use crate::vault::FeeVault;
use ember_reserve::basket;
use ember_reserve::{
    BurnCapability, CapabilityLedger, Cinder, Coin, Currency, Ember, ReserveCurrency, Spark,
};
use ember_store::TreasuryStore;
use ember_types::{AccountAddress, CurrencyCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

/// A currency with a vault slot in the treasury.
///
/// The seam between the generic entry points and the engine's typed
/// storage: each supported currency knows which slot is its own.
pub trait VaultedCurrency: Currency {
    fn slot(engine: &mut TreasuryEngine) -> &mut Option<FeeVault<Self>>;
    fn slot_ref(engine: &TreasuryEngine) -> &Option<FeeVault<Self>>;
}

/// Result of a completed burn cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BurnReceipt {
    /// The currency whose fee vault was drained.
    pub currency: CurrencyCode,
    /// Amount destroyed per reserve currency, in basket order.
    pub destroyed: Vec<(CurrencyCode, u128)>,
}

impl BurnReceipt {
    /// Total raw units destroyed across all reserve currencies.
    pub fn total_destroyed(&self) -> u128 {
        self.destroyed.iter().map(|(_, amount)| amount).sum()
    }
}

/// The treasury engine — collects fees into per-currency vaults and
/// destroys them under the compliance role.
///
/// All state-mutating entry points take `&mut self`: the exclusive
/// borrow is the per-treasury lock, so extract-and-reset and the
/// borrow/restore of burn tokens are atomic relative to every other
/// caller.
pub struct TreasuryEngine {
    /// Current lifecycle phase; setup is rejected once bootstrap ends.
    pub phase: LifecyclePhase,
    /// Accounts holding the treasury-compliance role.
    pub roles: RoleRegistry,
    /// Burn-capability slots, one per reserve currency.
    pub caps: CapabilityLedger,

    spark_vault: Option<FeeVault<Spark>>,
    cinder_vault: Option<FeeVault<Cinder>>,
    ember_vault: Option<FeeVault<Ember>>,
}

impl VaultedCurrency for Spark {
    fn slot(engine: &mut TreasuryEngine) -> &mut Option<FeeVault<Self>> {
        &mut engine.spark_vault
    }
    fn slot_ref(engine: &TreasuryEngine) -> &Option<FeeVault<Self>> {
        &engine.spark_vault
    }
}

impl VaultedCurrency for Cinder {
    fn slot(engine: &mut TreasuryEngine) -> &mut Option<FeeVault<Self>> {
        &mut engine.cinder_vault
    }
    fn slot_ref(engine: &TreasuryEngine) -> &Option<FeeVault<Self>> {
        &engine.cinder_vault
    }
}

impl VaultedCurrency for Ember {
    fn slot(engine: &mut TreasuryEngine) -> &mut Option<FeeVault<Self>> {
        &mut engine.ember_vault
    }
    fn slot_ref(engine: &TreasuryEngine) -> &Option<FeeVault<Self>> {
        &engine.ember_vault
    }
}

impl TreasuryEngine {
    pub fn new() -> Self {
        Self {
            phase: LifecyclePhase::Bootstrap,
            roles: RoleRegistry::new(),
            caps: CapabilityLedger::new(),
            spark_vault: None,
            cinder_vault: None,
            ember_vault: None,
        }
    }

    /// One-time setup: install a fee vault for every supported currency.
    ///
    /// Only valid during bootstrap, only for the fee-authority account,
    /// and only when `compliance` holds the treasury-compliance role.
    /// Consumes no burn tokens — capability issuance is separate wiring.
    pub fn initialize(
        &mut self,
        authority: &AccountAddress,
        compliance: &AccountAddress,
    ) -> Result<(), TreasuryError> {
        auth::require_bootstrap(self.phase)?;
        auth::require_fee_authority(authority)?;
        auth::require_compliance(&self.roles, compliance)?;

        self.install_vault::<Spark>()?;
        self.install_vault::<Cinder>()?;
        self.install_vault::<Ember>()?;
        info!(authority = %authority, "fee vaults installed");
        Ok(())
    }

    /// Conclude the bootstrap phase. Setup entry points are rejected
    /// from this point on.
    pub fn finish_bootstrap(&mut self) {
        self.phase = LifecyclePhase::Operating;
    }

    /// Deposit a fee payment into the matching vault, consuming it fully.
    ///
    /// Carries no authorization check: fee payment requires no privilege,
    /// only burning does.
    ///
    /// # Panics
    /// Panics if no vault exists for `C` — bootstrap wiring installs
    /// every vault before the first transaction is accepted.
    pub fn pay_fee<C: VaultedCurrency>(&mut self, payment: Coin<C>) {
        let vault = C::slot(self)
            .as_mut()
            .expect("fee vault missing: treasury not initialized");
        debug!(currency = %C::CODE, amount = %payment.value(), "fee collected");
        vault.balance.deposit(payment);
    }

    /// Destroy everything collected in `currency`'s fee vault.
    ///
    /// Requires the treasury-compliance role. Reserve currencies are
    /// staged and burned in place; the Ember basket is decomposed and
    /// each constituent is burned in its own reserve vault. The burn
    /// token for every reserve currency involved is borrowed from
    /// `account` and restored before this returns, on every path.
    pub fn burn_fees(
        &mut self,
        currency: CurrencyCode,
        account: &AccountAddress,
    ) -> Result<BurnReceipt, TreasuryError> {
        auth::require_compliance(&self.roles, account)?;
        let receipt = match currency {
            CurrencyCode::Spark => self.burn_reserve::<Spark>(account)?,
            CurrencyCode::Cinder => self.burn_reserve::<Cinder>(account)?,
            CurrencyCode::Ember => self.burn_basket(account)?,
        };
        info!(
            currency = %receipt.currency,
            destroyed = %receipt.total_destroyed(),
            "fee burn complete"
        );
        Ok(receipt)
    }

    /// Current unburned balance for `C`, if its vault exists.
    /// Read-only view for hosts and tests.
    pub fn vault_balance<C: VaultedCurrency>(&self) -> Option<u128> {
        C::slot_ref(self).as_ref().map(|vault| vault.balance.value())
    }

    /// Cumulative amount ever destroyed out of `C`'s vault.
    pub fn vault_total_burned<C: VaultedCurrency>(&self) -> Option<u128> {
        C::slot_ref(self).as_ref().map(|vault| vault.total_burned)
    }

    fn install_vault<C: VaultedCurrency>(&mut self) -> Result<(), TreasuryError> {
        let slot = C::slot(self);
        if slot.is_some() {
            return Err(TreasuryError::DuplicateVault { currency: C::CODE });
        }
        *slot = Some(FeeVault::new());
        Ok(())
    }

    fn require_vault<C: VaultedCurrency>(&self) -> Result<(), TreasuryError> {
        if C::slot_ref(self).is_none() {
            return Err(TreasuryError::VaultNotFound { currency: C::CODE });
        }
        Ok(())
    }

    /// Drain the entire balance out of `C`'s vault, resetting it to zero.
    fn drain_balance<C: VaultedCurrency>(&mut self) -> Result<Coin<C>, TreasuryError> {
        let vault = C::slot(self)
            .as_mut()
            .ok_or(TreasuryError::VaultNotFound { currency: C::CODE })?;
        Ok(vault.balance.withdraw_all())
    }

    /// Stage `coin` in `C`'s own vault and destroy it with `cap`.
    fn burn_staged<C>(&mut self, coin: Coin<C>, cap: &BurnCapability<C>) -> Result<u128, TreasuryError>
    where
        C: VaultedCurrency + ReserveCurrency,
    {
        let vault = C::slot(self)
            .as_mut()
            .ok_or(TreasuryError::VaultNotFound { currency: C::CODE })?;
        vault.preburn.stage(coin);
        let burned = vault.preburn.burn(cap);
        vault.total_burned = vault.total_burned.saturating_add(burned);
        Ok(burned)
    }

    /// Simple reserve case: borrow the token, burn the vault's balance
    /// in its own staging area, restore the token.
    fn burn_reserve<C>(&mut self, account: &AccountAddress) -> Result<BurnReceipt, TreasuryError>
    where
        C: VaultedCurrency + ReserveCurrency,
    {
        self.require_vault::<C>()?;
        let cap = self
            .caps
            .withdraw::<C>(account)
            .map_err(|_| token_not_held(C::CODE, account))?;
        let result = self
            .drain_balance::<C>()
            .and_then(|extracted| self.burn_staged(extracted, &cap));
        self.caps.restore(cap);
        let burned = result?;
        Ok(BurnReceipt {
            currency: C::CODE,
            destroyed: vec![(C::CODE, burned)],
        })
    }

    /// Composite case: decompose the Ember balance and burn each reserve
    /// constituent in its own vault's staging area.
    fn burn_basket(&mut self, account: &AccountAddress) -> Result<BurnReceipt, TreasuryError> {
        // Every vault this call touches must exist before any value moves.
        self.require_vault::<Ember>()?;
        self.require_vault::<Spark>()?;
        self.require_vault::<Cinder>()?;

        // Both reserve tokens must be in hand before the first burn: a
        // burn of only one constituent is not a valid end state.
        let spark_cap = self
            .caps
            .withdraw::<Spark>(account)
            .map_err(|_| token_not_held(CurrencyCode::Spark, account))?;
        let cinder_cap = match self.caps.withdraw::<Cinder>(account) {
            Ok(cap) => cap,
            Err(_) => {
                self.caps.restore(spark_cap);
                return Err(token_not_held(CurrencyCode::Cinder, account));
            }
        };

        let result = self.decompose_and_burn(&spark_cap, &cinder_cap);
        self.caps.restore(spark_cap);
        self.caps.restore(cinder_cap);
        let (spark_burned, cinder_burned) = result?;

        Ok(BurnReceipt {
            currency: CurrencyCode::Ember,
            destroyed: vec![
                (CurrencyCode::Spark, spark_burned),
                (CurrencyCode::Cinder, cinder_burned),
            ],
        })
    }

    fn decompose_and_burn(
        &mut self,
        spark_cap: &BurnCapability<Spark>,
        cinder_cap: &BurnCapability<Cinder>,
    ) -> Result<(u128, u128), TreasuryError> {
        let extracted = self.drain_balance::<Ember>()?;
        let (spark_coin, cinder_coin) = basket::decompose(extracted);
        let spark_burned = self.burn_staged(spark_coin, spark_cap)?;
        let cinder_burned = self.burn_staged(cinder_coin, cinder_cap)?;
        Ok((spark_burned, cinder_burned))
    }
}

impl Default for TreasuryEngine {
    fn default() -> Self {
        Self::new()
    }
}

const META_PHASE: &[u8] = b"phase";
const META_ROLES: &[u8] = b"roles";
const META_CAPABILITIES: &[u8] = b"capabilities";

impl TreasuryEngine {
    /// Persist all treasury state to a store.
    pub fn save_to_store(&self, store: &dyn TreasuryStore) -> Result<(), TreasuryError> {
        put_meta_blob(store, META_PHASE, &self.phase)?;
        put_meta_blob(store, META_ROLES, &self.roles)?;
        put_meta_blob(store, META_CAPABILITIES, &self.caps)?;

        if let Some(vault) = &self.spark_vault {
            put_vault_blob(store, CurrencyCode::Spark, vault)?;
        }
        if let Some(vault) = &self.cinder_vault {
            put_vault_blob(store, CurrencyCode::Cinder, vault)?;
        }
        if let Some(vault) = &self.ember_vault {
            put_vault_blob(store, CurrencyCode::Ember, vault)?;
        }
        Ok(())
    }

    /// Restore treasury state from a store.
    pub fn load_from_store(store: &dyn TreasuryStore) -> Result<Self, TreasuryError> {
        let mut engine = Self::new();
        if let Some(phase) = get_meta_blob(store, META_PHASE)? {
            engine.phase = phase;
        }
        if let Some(roles) = get_meta_blob(store, META_ROLES)? {
            engine.roles = roles;
        }
        if let Some(caps) = get_meta_blob(store, META_CAPABILITIES)? {
            engine.caps = caps;
        }
        for (code, bytes) in store.iter_vaults().map_err(store_err)? {
            match code {
                CurrencyCode::Spark => engine.spark_vault = Some(decode(&bytes)?),
                CurrencyCode::Cinder => engine.cinder_vault = Some(decode(&bytes)?),
                CurrencyCode::Ember => engine.ember_vault = Some(decode(&bytes)?),
            }
        }
        Ok(engine)
    }
}

fn token_not_held(currency: CurrencyCode, account: &AccountAddress) -> TreasuryError {
    TreasuryError::TokenNotHeld {
        currency,
        account: account.clone(),
    }
}

fn store_err(err: ember_store::StoreError) -> TreasuryError {
    TreasuryError::Store(err.to_string())
}

fn codec_err(err: bincode::Error) -> TreasuryError {
    TreasuryError::Store(err.to_string())
}

fn put_meta_blob<T: Serialize>(
    store: &dyn TreasuryStore,
    key: &[u8],
    value: &T,
) -> Result<(), TreasuryError> {
    let bytes = bincode::serialize(value).map_err(codec_err)?;
    store.put_meta(key, &bytes).map_err(store_err)
}

fn get_meta_blob<T: DeserializeOwned>(
    store: &dyn TreasuryStore,
    key: &[u8],
) -> Result<Option<T>, TreasuryError> {
    match store.get_meta(key).map_err(store_err)? {
        Some(bytes) => Ok(Some(decode(&bytes)?)),
        None => Ok(None),
    }
}

fn put_vault_blob<C: Currency>(
    store: &dyn TreasuryStore,
    code: CurrencyCode,
    vault: &FeeVault<C>,
) -> Result<(), TreasuryError> {
    let bytes = bincode::serialize(vault).map_err(codec_err)?;
    store.put_vault(code, &bytes).map_err(store_err)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, TreasuryError> {
    bincode::deserialize(bytes).map_err(codec_err)
}
