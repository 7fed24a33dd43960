use {
    crate::{ALLOWANCES, BALANCES, SUPPLIES},
    amm_math::{IsZero, Number, Uint256},
    amm_types::{
        bank::{BankError, BankResult, ExecuteMsg},
        Addr, Asset, Balances, Response, StdResult, Storage,
    },
};

pub fn initialize<B>(storage: &mut dyn Storage, initial_balances: B) -> BankResult<()>
where
    B: IntoIterator<Item = (Addr, Balances)>,
{
    for (address, balances) in initial_balances {
        mint(storage, address, Asset::Native, balances.native)?;
        mint(storage, address, Asset::Token, balances.token)?;
    }

    Ok(())
}

/// Create new units of an asset out of thin air.
///
/// There is no gatekeeping here; only genesis calls this.
pub fn mint(storage: &mut dyn Storage, to: Addr, asset: Asset, amount: Uint256) -> BankResult<()> {
    increase_supply(storage, asset, amount)?;
    increase_balance(storage, to, asset, amount)?;

    Ok(())
}

/// The bank has no address of its own; messages act on behalf of `sender`.
pub fn execute(
    storage: &mut dyn Storage,
    sender: Addr,
    msg: ExecuteMsg,
) -> BankResult<Response> {
    match msg {
        ExecuteMsg::Transfer { to, asset, amount } => {
            transfer(storage, sender, to, asset, amount)?;
        },
        ExecuteMsg::Approve { spender, amount } => {
            approve(storage, sender, spender, amount)?;
        },
        ExecuteMsg::TransferFrom { owner, to, amount } => {
            transfer_from(storage, sender, owner, to, amount)?;
        },
    }

    Ok(Response::new())
}

/// Move an asset from one account to another.
pub fn transfer(
    storage: &mut dyn Storage,
    from: Addr,
    to: Addr,
    asset: Asset,
    amount: Uint256,
) -> BankResult<()> {
    decrease_balance(storage, from, asset, amount)?;
    increase_balance(storage, to, asset, amount)?;

    Ok(())
}

/// Set the amount of token `spender` may pull from `owner`, replacing any
/// previous allowance.
pub fn approve(
    storage: &mut dyn Storage,
    owner: Addr,
    spender: Addr,
    amount: Uint256,
) -> StdResult<()> {
    if amount.is_zero() {
        ALLOWANCES.remove(storage, (owner, spender));
    } else {
        ALLOWANCES.save(storage, (owner, spender), &amount)?;
    }

    Ok(())
}

/// Pull token from `owner` into `to`, spending `spender`'s allowance.
pub fn transfer_from(
    storage: &mut dyn Storage,
    spender: Addr,
    owner: Addr,
    to: Addr,
    amount: Uint256,
) -> BankResult<()> {
    ALLOWANCES.may_modify(storage, (owner, spender), |allowance| -> BankResult<_> {
        let allowance = allowance.unwrap_or_default();
        let allowance = allowance
            .checked_sub(amount)
            .map_err(|_| BankError::InsufficientAllowance {
                owner,
                spender,
                allowance,
                amount,
            })?;
        // If allowance is reduced to zero, delete it, to save disk space.
        if allowance.is_zero() {
            Ok(None)
        } else {
            Ok(Some(allowance))
        }
    })?;

    transfer(storage, owner, to, Asset::Token, amount)
}

/// Increase the total supply of an asset by the given amount.
fn increase_supply(storage: &mut dyn Storage, asset: Asset, amount: Uint256) -> StdResult<()> {
    SUPPLIES.may_modify(storage, asset, |supply| -> StdResult<_> {
        let supply = supply.unwrap_or_default().checked_add(amount)?;
        // Only write to storage if the supply is non-zero.
        if supply.is_zero() {
            Ok(None)
        } else {
            Ok(Some(supply))
        }
    })?;

    Ok(())
}

/// Increase an account's balance of an asset by the given amount.
fn increase_balance(
    storage: &mut dyn Storage,
    address: Addr,
    asset: Asset,
    amount: Uint256,
) -> StdResult<()> {
    BALANCES.may_modify(storage, (address, asset), |balance| -> StdResult<_> {
        let balance = balance.unwrap_or_default().checked_add(amount)?;
        // Only write to storage if the balance is non-zero.
        if balance.is_zero() {
            Ok(None)
        } else {
            Ok(Some(balance))
        }
    })?;

    Ok(())
}

/// Decrease an account's balance of an asset by the given amount.
fn decrease_balance(
    storage: &mut dyn Storage,
    address: Addr,
    asset: Asset,
    amount: Uint256,
) -> BankResult<()> {
    BALANCES.may_modify(storage, (address, asset), |balance| -> BankResult<_> {
        let balance = balance.unwrap_or_default();
        let balance = balance
            .checked_sub(amount)
            .map_err(|_| BankError::InsufficientBalance {
                address,
                asset,
                balance,
                amount,
            })?;
        // If balance is reduced to zero, delete it, to save disk space.
        if balance.is_zero() {
            Ok(None)
        } else {
            Ok(Some(balance))
        }
    })?;

    Ok(())
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{query_allowance, query_balance, query_supply},
        amm_math::NumberConst,
        amm_types::{MemStorage, ResultExt},
    };

    const ALICE: Addr = Addr::mock(1);
    const BOB: Addr = Addr::mock(2);
    const ROUTER: Addr = Addr::mock(3);

    fn setup() -> MemStorage {
        let mut storage = MemStorage::new();

        initialize(&mut storage, [(ALICE, Balances {
            native: Uint256::new_from_u64(100),
            token: Uint256::new_from_u64(50),
        })])
        .should_succeed();

        storage
    }

    #[test]
    fn initialize_sets_supply() {
        let storage = setup();

        assert_eq!(
            query_supply(&storage, Asset::Native).unwrap(),
            Uint256::new_from_u64(100)
        );
        assert_eq!(
            query_supply(&storage, Asset::Token).unwrap(),
            Uint256::new_from_u64(50)
        );
    }

    #[test]
    fn transfer_moves_balance() {
        let mut storage = setup();

        transfer(&mut storage, ALICE, BOB, Asset::Native, Uint256::new_from_u64(100))
            .should_succeed();

        assert_eq!(query_balance(&storage, ALICE, Asset::Native).unwrap(), Uint256::ZERO);
        assert_eq!(
            query_balance(&storage, BOB, Asset::Native).unwrap(),
            Uint256::new_from_u64(100)
        );
        // Zero balances are deleted from storage.
        assert!(!BALANCES.has(&storage, (ALICE, Asset::Native)));
    }

    #[test]
    fn transfer_more_than_balance_fails() {
        let mut storage = setup();

        transfer(&mut storage, ALICE, BOB, Asset::Token, Uint256::new_from_u64(51))
            .should_fail_with_error(BankError::InsufficientBalance {
                address: ALICE,
                asset: Asset::Token,
                balance: Uint256::new_from_u64(50),
                amount: Uint256::new_from_u64(51),
            });
    }

    #[test]
    fn transfer_from_spends_allowance() {
        let mut storage = setup();

        approve(&mut storage, ALICE, ROUTER, Uint256::new_from_u64(30)).should_succeed();

        transfer_from(&mut storage, ROUTER, ALICE, BOB, Uint256::new_from_u64(20))
            .should_succeed();

        assert_eq!(
            query_allowance(&storage, ALICE, ROUTER).unwrap(),
            Uint256::new_from_u64(10)
        );
        assert_eq!(
            query_balance(&storage, BOB, Asset::Token).unwrap(),
            Uint256::new_from_u64(20)
        );

        transfer_from(&mut storage, ROUTER, ALICE, BOB, Uint256::new_from_u64(11))
            .should_fail_with_error(BankError::InsufficientAllowance {
                owner: ALICE,
                spender: ROUTER,
                allowance: Uint256::new_from_u64(10),
                amount: Uint256::new_from_u64(11),
            });
    }
}
