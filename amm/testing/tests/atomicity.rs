use {
    amm_math::{NumberConst, Uint256},
    amm_testing::{units, BalanceChange, TestAccounts, TestBuilder, TestSuite},
    amm_types::{Asset, ResultExt},
    std::collections::BTreeMap,
};

fn setup() -> (TestSuite, TestAccounts) {
    let (mut suite, accounts) = TestBuilder::new()
        .add_account("bob", units("10000"), units("10000"))
        .add_account("alice", units("10000"), units("10000"))
        .build()
        .unwrap();

    let router = suite.router();
    let bob = accounts["bob"];

    suite.approve(bob, router, units("5000")).should_succeed();
    suite.approve_shares(bob, router, units("5000")).should_succeed();
    suite
        .add_liquidity(bob, bob, units("1000"), units("1000"), units("1000"), units("1000"))
        .should_succeed();

    (suite, accounts)
}

fn unchanged() -> BTreeMap<Asset, BalanceChange> {
    BTreeMap::from([
        (Asset::Native, BalanceChange::Unchanged),
        (Asset::Token, BalanceChange::Unchanged),
    ])
}

/// Run `action`, which must fail, and check that nothing it touched stayed
/// changed.
fn assert_rolled_back<F>(suite: &mut TestSuite, accounts: &TestAccounts, action: F)
where
    F: FnOnce(&mut TestSuite, &TestAccounts),
{
    let pool = suite.pool();
    let router = suite.router();
    let parties = [accounts["bob"], accounts["alice"], pool, router];

    let snapshot = suite.app.snapshot().unwrap();
    suite.balances().record_many(parties);

    action(suite, accounts);

    for party in parties {
        suite.balances().should_change(party, unchanged());
    }

    assert_eq!(suite.app.snapshot().unwrap(), snapshot);
}

#[test]
fn failed_add_liquidity_returns_funds() {
    let (mut suite, accounts) = setup();

    // The native value reaches the router before the ratio check fails.
    assert_rolled_back(&mut suite, &accounts, |suite, accounts| {
        let bob = accounts["bob"];
        suite
            .add_liquidity(bob, bob, units("1"), units("1.2"), units("1.1"), units("1.3"))
            .should_fail_with_error("expected token less than min");
    });
}

#[test]
fn failed_remove_liquidity_returns_shares() {
    let (mut suite, accounts) = setup();
    let bob = accounts["bob"];
    let shares_before = suite.query_share_balance(bob).should_succeed();
    let allowance_before = suite
        .query_share_allowance(bob, suite.router())
        .should_succeed();

    // The shares are burned and paid out before the min check rejects the
    // result.
    assert_rolled_back(&mut suite, &accounts, |suite, accounts| {
        let bob = accounts["bob"];
        suite
            .remove_liquidity(bob, bob, units("10"), units("1"), units("1"))
            .should_fail_with_error("min requirements not met");
    });

    suite
        .query_share_balance(bob)
        .should_succeed_and_equal(shares_before);
    suite
        .query_share_allowance(bob, suite.router())
        .should_succeed_and_equal(allowance_before);
}

#[test]
fn failed_router_swap_returns_input() {
    let (mut suite, accounts) = setup();

    assert_rolled_back(&mut suite, &accounts, |suite, accounts| {
        let alice = accounts["alice"];
        suite
            .router_swap(alice, alice, units("1"), Uint256::ZERO, Uint256::ZERO, units("0.99"))
            .should_fail_with_error("output less than min");
    });
}

#[test]
fn failed_pool_swap_returns_attached_value() {
    let (mut suite, accounts) = setup();

    // Attach native, and also donate token, so the direction is ambiguous.
    let bob = accounts["bob"];
    let pool = suite.pool();
    suite
        .transfer(bob, pool, Asset::Token, units("1"))
        .should_succeed();

    assert_rolled_back(&mut suite, &accounts, |suite, accounts| {
        let bob = accounts["bob"];
        suite
            .pool_swap(bob, bob, units("1"))
            .should_fail_with_error("ambiguous swap direction");
    });
}

#[test]
fn successful_message_commits() {
    let (mut suite, accounts) = setup();
    let alice = accounts["alice"];
    let snapshot = suite.app.snapshot().unwrap();

    suite.balances().record(alice);

    suite
        .router_swap(alice, alice, units("1"), Uint256::ZERO, Uint256::ZERO, units("0.95"))
        .should_succeed();

    suite.balances().should_change(
        alice,
        BTreeMap::from([(Asset::Native, BalanceChange::Decreased(units("1")))]),
    );
    assert_ne!(suite.app.snapshot().unwrap(), snapshot);
}

#[test]
fn supply_is_conserved() {
    let (mut suite, accounts) = setup();
    let alice = accounts["alice"];

    suite
        .router_swap(alice, alice, units("3"), Uint256::ZERO, Uint256::ZERO, Uint256::ONE)
        .should_succeed();
    suite
        .transfer(alice, accounts["bob"], Asset::Token, units("7"))
        .should_succeed();

    suite
        .query_supply(Asset::Native)
        .should_succeed_and_equal(units("20000"));
    suite
        .query_supply(Asset::Token)
        .should_succeed_and_equal(units("20000"));
}
