use {amm_storage::Item, amm_types::Config};

pub const CONFIG: Item<Config> = Item::new("config");
