use {
    amm_math::Uint256,
    amm_types::{bank::BankError, pool::PoolError, router::RouterError, Addr, StdError},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("state is already initialized")]
    AlreadyInitialized,

    #[error("bank messages do not accept funds! funds: {funds}")]
    UnexpectedFunds { funds: Uint256 },

    #[error("address `{sender}` is reserved and can't send messages")]
    ReservedSender { sender: Addr },
}

pub type AppResult<T> = std::result::Result<T, AppError>;
