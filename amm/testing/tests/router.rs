use {
    amm_math::{NumberConst, Uint256},
    amm_testing::{raw, units, BalanceChange, TestAccounts, TestBuilder, TestSuite},
    amm_types::{
        bank::BankError,
        pool::{PoolError, Reserves},
        router::RouterError,
        Asset, Response, ResultExt,
    },
    std::collections::BTreeMap,
    test_case::test_case,
};

/// Four funded accounts; bob and alice let the router spend their token and
/// shares.
fn setup() -> (TestSuite, TestAccounts) {
    let (mut suite, accounts) = TestBuilder::new()
        .add_account("bob", units("10000"), units("10000"))
        .add_account("alice", units("10000"), units("10000"))
        .add_account("ashley", units("10000"), units("10000"))
        .add_account("dom", units("10000"), units("10000"))
        .build()
        .unwrap();

    let router = suite.router();

    for name in ["bob", "alice"] {
        suite
            .approve(accounts[name], router, units("5000"))
            .should_succeed();
        suite
            .approve_shares(accounts[name], router, units("5000"))
            .should_succeed();
    }

    (suite, accounts)
}

fn setup_with_liquidity(native: &str, token: &str) -> (TestSuite, TestAccounts) {
    let (mut suite, accounts) = setup();
    let bob = accounts["bob"];

    suite
        .add_liquidity(bob, bob, units(native), units(token), units(token), units(token))
        .should_succeed();

    (suite, accounts)
}

// ------------------------------ add liquidity --------------------------------

#[test]
fn first_deposit_sets_the_price() {
    let (mut suite, accounts) = setup();
    let bob = accounts["bob"];
    let pool = suite.pool();

    suite.balances().record(bob);

    suite
        .add_liquidity(bob, bob, units("10"), units("50"), units("49"), units("51"))
        .should_succeed_and_equal(Response::Minted {
            shares: raw("22360679774997896964"),
        });

    suite.balances().should_change(
        bob,
        BTreeMap::from([
            (Asset::Native, BalanceChange::Decreased(units("10"))),
            (Asset::Token, BalanceChange::Decreased(units("50"))),
        ]),
    );
    suite.query_reserves().should_succeed_and_equal(Reserves {
        native: units("10"),
        token: units("50"),
    });
    suite
        .query_balance(pool, Asset::Native)
        .should_succeed_and_equal(units("10"));
    // The router keeps nothing.
    suite
        .query_balance(suite.router(), Asset::Native)
        .should_succeed_and_equal(Uint256::ZERO);
    suite
        .query_allowance(bob, suite.router())
        .should_succeed_and_equal(units("4950"));
}

#[test]
fn deposit_at_1_to_1() {
    let (mut suite, accounts) = setup_with_liquidity("1000", "1000");
    let bob = accounts["bob"];

    suite
        .add_liquidity(bob, bob, units("1"), units("1"), units("0.9"), units("1.1"))
        .should_succeed_and_equal(Response::Minted {
            shares: units("1"),
        });

    suite
        .query_total_shares()
        .should_succeed_and_equal(raw("1001000000000000000999"));
    suite
        .query_share_balance(bob)
        .should_succeed_and_equal(raw("1000999999999999999999"));
}

#[test]
fn deposit_at_1_to_5() {
    let (mut suite, accounts) = setup_with_liquidity("10", "50");
    let bob = accounts["bob"];

    suite.balances().record(bob);

    suite
        .add_liquidity(bob, bob, units("1"), units("5"), units("4.9"), units("5.1"))
        .should_succeed();

    suite.balances().should_change(
        bob,
        BTreeMap::from([
            (Asset::Native, BalanceChange::Decreased(units("1"))),
            (Asset::Token, BalanceChange::Decreased(units("5"))),
        ]),
    );
    suite
        .query_total_shares()
        .should_succeed_and_equal(raw("24596747752497687760"));
    suite
        .query_share_balance(bob)
        .should_succeed_and_equal(raw("24596747752497686760"));
    suite.query_reserves().should_succeed_and_equal(Reserves {
        native: units("11"),
        token: units("55"),
    });
}

#[test_case("1000", "1000", "1.2", "1.1", "1.3", RouterError::ExpectedTokenLessThanMin {
    expected: units("1"),
    min: units("1.1"),
}; "1:1 expected below min")]
#[test_case("1000", "1000", "0.9", "0.8", "0.95", RouterError::ExpectedTokenMoreThanMax {
    expected: units("1"),
    max: units("0.95"),
}; "1:1 expected above max")]
#[test_case("10", "50", "5.2", "5.1", "5.3", RouterError::ExpectedTokenLessThanMin {
    expected: units("5"),
    min: units("5.1"),
}; "1:5 expected below min")]
#[test_case("10", "50", "0.2", "5.1", "5.3", RouterError::MinMustBeSmallerThanDesired {
    min: units("5.1"),
    desired: units("0.2"),
}; "min above desired")]
#[test_case("10", "50", "10.2", "5.1", "5.3", RouterError::MaxMustBeGreaterThanDesired {
    max: units("5.3"),
    desired: units("10.2"),
}; "max below desired")]
fn deposit_bounds(
    native: &str,
    token: &str,
    desired: &str,
    min: &str,
    max: &str,
    expect: RouterError,
) {
    let (mut suite, accounts) = setup_with_liquidity(native, token);
    let bob = accounts["bob"];

    suite
        .add_liquidity(bob, bob, units("1"), units(desired), units(min), units(max))
        .should_fail_with_error(expect);
}

#[test_case("0.9", "0.8", "1"; "desired below expected")]
#[test_case("1.1", "1", "1.2"; "desired above expected")]
fn deposit_within_bounds(desired: &str, min: &str, max: &str) {
    let (mut suite, accounts) = setup_with_liquidity("1000", "1000");
    let alice = accounts["alice"];

    suite.balances().record(alice);

    // The ratio decides the token taken, not the desired amount.
    suite
        .add_liquidity(alice, alice, units("1"), units(desired), units(min), units(max))
        .should_succeed();

    suite.balances().should_change(
        alice,
        BTreeMap::from([(Asset::Token, BalanceChange::Decreased(units("1")))]),
    );
}

#[test]
fn deposit_needs_both_values() {
    let (mut suite, accounts) = setup_with_liquidity("1000", "1000");
    let bob = accounts["bob"];

    suite
        .add_liquidity(bob, bob, Uint256::ZERO, units("1"), units("1"), units("1"))
        .should_fail_with_error(RouterError::MinimumValuesRequired);

    suite
        .add_liquidity(bob, bob, units("1"), Uint256::ZERO, Uint256::ZERO, Uint256::ZERO)
        .should_fail_with_error(RouterError::MinimumValuesRequired);
}

#[test]
fn first_deposit_is_bounds_checked() {
    let (mut suite, accounts) = setup();
    let bob = accounts["bob"];

    suite
        .add_liquidity(bob, bob, units("1"), units("1"), Uint256::ZERO, Uint256::ZERO)
        .should_fail_with_error(RouterError::MaxMustBeGreaterThanDesired {
            max: Uint256::ZERO,
            desired: units("1"),
        });
}

#[test]
fn deposit_without_approval_fails() {
    let (mut suite, accounts) = setup();
    let ashley = accounts["ashley"];

    suite
        .add_liquidity(ashley, ashley, units("1"), units("1"), units("1"), units("1"))
        .should_fail_with_error(BankError::InsufficientAllowance {
            owner: ashley,
            spender: suite.router(),
            allowance: Uint256::ZERO,
            amount: units("1"),
        });

    suite
        .query_balance(ashley, Asset::Native)
        .should_succeed_and_equal(units("10000"));
}

// ----------------------------- remove liquidity ------------------------------

#[test_case("10", "9999999999999999990", "9999999999999999990", "989999999999999999999"; "10 shares")]
#[test_case("999", "998999999999999999001", "998999999999999999001", "999999999999999999"; "999 shares")]
fn withdraw_at_1_to_1(shares: &str, native_out: &str, token_out: &str, bob_left: &str) {
    let (mut suite, accounts) = setup_with_liquidity("1000", "1000");
    let bob = accounts["bob"];
    let ashley = accounts["ashley"];

    suite.balances().record(ashley);

    suite
        .remove_liquidity(bob, ashley, units("1"), units("1"), units(shares))
        .should_succeed_and_equal(Response::Burned {
            native_out: raw(native_out),
            token_out: raw(token_out),
        });

    suite.balances().should_change(
        ashley,
        BTreeMap::from([
            (Asset::Native, BalanceChange::Increased(raw(native_out))),
            (Asset::Token, BalanceChange::Increased(raw(token_out))),
        ]),
    );
    suite
        .query_share_balance(bob)
        .should_succeed_and_equal(raw(bob_left));
    suite
        .query_share_allowance(bob, suite.router())
        .should_succeed_and_equal(units("5000") - units(shares));
}

#[test]
fn withdraw_at_1_to_5() {
    let (mut suite, accounts) = setup_with_liquidity("10", "50");
    let bob = accounts["bob"];

    suite
        .remove_liquidity(bob, bob, units("1"), units("1"), units("10"))
        .should_succeed_and_equal(Response::Burned {
            native_out: raw("4472135954999579192"),
            token_out: raw("22360679774997895964"),
        });

    suite
        .query_share_balance(bob)
        .should_succeed_and_equal(raw("12360679774997896964"));
}

#[test_case("1000", "1000", "1", "10", "1"; "1:1 native below min")]
#[test_case("1000", "1000", "1", "1", "10"; "1:1 token below min")]
#[test_case("10", "50", "10", "5", "1"; "1:5 native below min")]
#[test_case("10", "50", "10", "1", "23"; "1:5 token below min")]
fn withdraw_below_mins(native: &str, token: &str, shares: &str, min_native: &str, min_token: &str) {
    let (mut suite, accounts) = setup_with_liquidity(native, token);
    let bob = accounts["bob"];
    let before = suite.query_share_balance(bob).should_succeed();

    suite
        .remove_liquidity(bob, bob, units(min_native), units(min_token), units(shares))
        .should_fail_with_error("min requirements not met");

    // Shares pulled into the pool before the check are returned.
    suite.query_share_balance(bob).should_succeed_and_equal(before);
}

#[test]
fn withdraw_needs_mins() {
    let (mut suite, accounts) = setup_with_liquidity("1000", "1000");
    let bob = accounts["bob"];

    suite
        .remove_liquidity(bob, bob, Uint256::ZERO, units("1"), units("10"))
        .should_fail_with_error(RouterError::MustHaveMins);

    suite
        .remove_liquidity(bob, bob, units("1"), Uint256::ZERO, units("10"))
        .should_fail_with_error(RouterError::MustHaveMins);
}

#[test]
fn withdraw_more_than_held() {
    let (mut suite, accounts) = setup_with_liquidity("1000", "1000");
    let alice = accounts["alice"];

    suite
        .remove_liquidity(alice, alice, units("1"), units("1"), units("1"))
        .should_fail_with_error(PoolError::InsufficientShares {
            holder: alice,
            balance: Uint256::ZERO,
            amount: units("1"),
        });
}

// ----------------------------------- swap ------------------------------------

#[test]
fn swap_token_for_native() {
    let (mut suite, accounts) = setup_with_liquidity("1000", "1000");
    let alice = accounts["alice"];

    suite.balances().record(alice);

    suite
        .router_swap(alice, alice, Uint256::ZERO, units("1"), units("0.95"), Uint256::ZERO)
        .should_succeed_and_equal(Response::Swapped {
            asset_out: Asset::Native,
            amount_out: raw("989020869339354040"),
        });

    suite.balances().should_change(
        alice,
        BTreeMap::from([
            (Asset::Native, BalanceChange::Increased(raw("989020869339354040"))),
            (Asset::Token, BalanceChange::Decreased(units("1"))),
        ]),
    );
    suite.query_reserves().should_succeed_and_equal(Reserves {
        native: raw("999010979130660645960"),
        token: units("1001"),
    });
}

#[test]
fn swap_native_for_token() {
    let (mut suite, accounts) = setup_with_liquidity("1000", "1000");
    let dom = accounts["dom"];

    // Swapping native needs no approval.
    suite
        .router_swap(dom, dom, units("1"), Uint256::ZERO, Uint256::ZERO, units("0.95"))
        .should_succeed_and_equal(Response::Swapped {
            asset_out: Asset::Token,
            amount_out: raw("989020869339354040"),
        });

    suite
        .query_balance(dom, Asset::Token)
        .should_succeed_and_equal(units("10000") + raw("989020869339354040"));
}

#[test_case(Uint256::ZERO, units("1"), units("1.95"), Uint256::ZERO; "token in, native min 1.95")]
#[test_case(Uint256::ZERO, units("1"), units("2.95"), Uint256::ZERO; "token in, native min 2.95")]
#[test_case(units("1"), Uint256::ZERO, Uint256::ZERO, units("0.99"); "native in, token min 0.99")]
fn swap_output_below_min(
    native_in: Uint256,
    token_in: Uint256,
    min_native_out: Uint256,
    min_token_out: Uint256,
) {
    let (mut suite, accounts) = setup_with_liquidity("1000", "1000");
    let alice = accounts["alice"];

    suite.balances().record(alice);

    suite
        .router_swap(alice, alice, native_in, token_in, min_native_out, min_token_out)
        .should_fail_with_error(RouterError::OutputLessThanMin {
            output: raw("989020869339354040"),
            min: min_native_out.max(min_token_out),
        });

    suite.balances().should_change(
        alice,
        BTreeMap::from([
            (Asset::Native, BalanceChange::Unchanged),
            (Asset::Token, BalanceChange::Unchanged),
        ]),
    );
}

#[test]
fn swap_argument_checks() {
    let (mut suite, accounts) = setup_with_liquidity("1000", "1000");
    let alice = accounts["alice"];

    suite
        .router_swap(alice, alice, Uint256::ZERO, Uint256::ZERO, units("1"), units("1"))
        .should_fail_with_error(RouterError::EthOrTokenParamsRequired);

    suite
        .router_swap(alice, alice, units("1"), units("1"), units("1"), units("1"))
        .should_fail_with_error(RouterError::CanOnlySwapOneAsset);

    suite
        .router_swap(alice, alice, units("1"), Uint256::ZERO, units("1"), Uint256::ZERO)
        .should_fail_with_error(RouterError::TokenMinOutRequired);
}

#[test]
fn swap_into_empty_pool() {
    let (mut suite, accounts) = setup();
    let alice = accounts["alice"];

    suite
        .router_swap(alice, alice, Uint256::ZERO, units("1"), Uint256::ZERO, Uint256::ZERO)
        .should_fail_with_error(PoolError::NoLiquidity);

    suite
        .router_swap(alice, alice, units("1"), Uint256::ZERO, Uint256::ZERO, units("1"))
        .should_fail_with_error(PoolError::NoLiquidity);
}
