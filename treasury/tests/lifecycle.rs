//! End-to-end fee lifecycle: bootstrap wiring, collection, burning, and
//! persistence across a restart.

use std::sync::Once;

use ember_reserve::{Cinder, Coin, Ember, Spark};
use ember_store::MemoryStore;
use ember_treasury::auth::{fee_authority, LifecyclePhase};
use ember_treasury::TreasuryEngine;
use ember_types::{AccountAddress, CurrencyCode};

static INIT_TRACING: Once = Once::new();

/// Wire up logging once for the whole test binary. The subsystem has no
/// binary of its own, so tests own subscriber initialization.
fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init()
            .ok();
    });
}

fn compliance_account() -> AccountAddress {
    AccountAddress::new("emb_1compliance1111111111111111111111111111111111111111111111111111")
}

/// The wiring a host performs at genesis: roles, burn tokens, vaults.
fn bootstrap() -> TreasuryEngine {
    init_tracing();
    let mut engine = TreasuryEngine::new();
    engine.roles.grant_compliance(compliance_account());
    engine.caps.grant::<Spark>(compliance_account()).unwrap();
    engine.caps.grant::<Cinder>(compliance_account()).unwrap();
    engine
        .initialize(&fee_authority(), &compliance_account())
        .unwrap();
    engine.finish_bootstrap();
    engine
}

#[test]
fn collect_then_burn_reserve_fees() {
    let mut engine = bootstrap();
    assert_eq!(engine.vault_balance::<Spark>(), Some(0));

    engine.pay_fee(Coin::<Spark>::new(100));
    assert_eq!(engine.vault_balance::<Spark>(), Some(100));

    engine.pay_fee(Coin::<Spark>::new(50));
    assert_eq!(engine.vault_balance::<Spark>(), Some(150));

    let receipt = engine
        .burn_fees(CurrencyCode::Spark, &compliance_account())
        .unwrap();
    assert_eq!(engine.vault_balance::<Spark>(), Some(0));
    assert_eq!(receipt.total_destroyed(), 150);
    assert_eq!(engine.vault_total_burned::<Spark>(), Some(150));
}

#[test]
fn collect_then_burn_basket_fees() {
    let mut engine = bootstrap();
    engine.pay_fee(Coin::<Ember>::new(9));

    let receipt = engine
        .burn_fees(CurrencyCode::Ember, &compliance_account())
        .unwrap();
    // 9 units split at the basket ratio: 4 Spark, remainder 5 to Cinder.
    assert_eq!(
        receipt.destroyed,
        vec![(CurrencyCode::Spark, 4), (CurrencyCode::Cinder, 5)]
    );
    assert_eq!(engine.vault_balance::<Ember>(), Some(0));
}

#[test]
fn state_survives_a_store_round_trip() {
    let mut engine = bootstrap();
    engine.pay_fee(Coin::<Spark>::new(1_234));
    engine.pay_fee(Coin::<Ember>::new(777));
    engine
        .burn_fees(CurrencyCode::Cinder, &compliance_account())
        .unwrap();

    let store = MemoryStore::new();
    engine.save_to_store(&store).unwrap();

    let restored = TreasuryEngine::load_from_store(&store).unwrap();
    assert_eq!(restored.phase, LifecyclePhase::Operating);
    assert_eq!(restored.vault_balance::<Spark>(), Some(1_234));
    assert_eq!(restored.vault_balance::<Ember>(), Some(777));
    assert!(restored.roles.is_compliance(&compliance_account()));
    assert_eq!(
        restored.caps.holder::<Spark>(),
        Some(&compliance_account())
    );

    // The restored treasury keeps working where the old one left off.
    let mut restored = restored;
    let receipt = restored
        .burn_fees(CurrencyCode::Ember, &compliance_account())
        .unwrap();
    assert_eq!(receipt.total_destroyed(), 777);
    assert_eq!(restored.vault_balance::<Ember>(), Some(0));
}

#[test]
fn setup_is_rejected_after_bootstrap_ends() {
    let mut engine = bootstrap();
    let result = engine.initialize(&fee_authority(), &compliance_account());
    assert!(result.is_err());
}
