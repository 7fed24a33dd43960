use {
    crate::{setup_tracing_subscriber, TestSuite},
    amm_app::App,
    amm_math::Uint256,
    amm_types::{Addr, Balances, Config, GenesisState, TokenInfo},
    std::{collections::BTreeMap, ops::Index},
    tracing::Level,
};

const DEFAULT_TRACING_LEVEL: Level = Level::INFO;

pub const DEFAULT_POOL: Addr = Addr::mock(1);

pub const DEFAULT_ROUTER: Addr = Addr::mock(2);

/// Accounts are given mock addresses counting up from here.
const FIRST_ACCOUNT_INDEX: u8 = 10;

/// Named accounts created by the builder.
#[derive(Default, Debug, Clone)]
pub struct TestAccounts(BTreeMap<&'static str, Addr>);

impl TestAccounts {
    pub fn get(&self, name: &str) -> Option<Addr> {
        self.0.get(name).copied()
    }
}

impl Index<&str> for TestAccounts {
    type Output = Addr;

    fn index(&self, name: &str) -> &Self::Output {
        self.0
            .get(name)
            .unwrap_or_else(|| panic!("account `{name}` not found"))
    }
}

pub struct TestBuilder {
    tracing_level: Option<Level>,
    pool: Addr,
    router: Addr,
    token: TokenInfo,
    accounts: TestAccounts,
    balances: BTreeMap<Addr, Balances>,
}

// Clippy incorrectly thinks we can derive `Default` here, which we can't.
#[allow(clippy::new_without_default)]
impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tracing_level: Some(DEFAULT_TRACING_LEVEL),
            pool: DEFAULT_POOL,
            router: DEFAULT_ROUTER,
            token: TokenInfo::default(),
            accounts: TestAccounts::default(),
            balances: BTreeMap::new(),
        }
    }

    // Setting this to `None` means no tracing.
    pub fn set_tracing_level(mut self, level: Option<Level>) -> Self {
        self.tracing_level = level;
        self
    }

    pub fn set_pool(mut self, pool: Addr) -> Self {
        self.pool = pool;
        self
    }

    pub fn set_router(mut self, router: Addr) -> Self {
        self.router = router;
        self
    }

    pub fn set_token(mut self, name: &str, symbol: &str) -> Self {
        self.token = TokenInfo {
            name: name.to_string(),
            symbol: symbol.to_string(),
        };
        self
    }

    /// Add an account with the given starting balances.
    pub fn add_account(mut self, name: &'static str, native: Uint256, token: Uint256) -> Self {
        let index = u8::try_from(self.accounts.0.len())
            .ok()
            .and_then(|len| len.checked_add(FIRST_ACCOUNT_INDEX))
            .expect("too many test accounts");
        let address = Addr::mock(index);

        self.accounts.0.insert(name, address);
        self.balances.insert(address, Balances { native, token });
        self
    }

    pub fn build(self) -> anyhow::Result<(TestSuite, TestAccounts)> {
        if let Some(tracing_level) = self.tracing_level {
            setup_tracing_subscriber(tracing_level);
        }

        let genesis = GenesisState {
            config: Config {
                pool: self.pool,
                router: self.router,
                token: self.token,
            },
            balances: self.balances,
        };

        let mut app = App::new();
        app.do_init(genesis)?;

        let suite = TestSuite::new(app)?;

        Ok((suite, self.accounts))
    }
}
