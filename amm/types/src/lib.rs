mod address;
mod asset;
pub mod bank;
mod buffer;
mod context;
mod encoders;
mod error;
mod genesis;
mod mem_storage;
mod message;
pub mod pool;
mod result;
pub mod router;
mod storage;
mod utils;

pub use {
    address::*, asset::*, buffer::*, context::*, encoders::*, error::*, genesis::*,
    mem_storage::*, message::*, result::*, storage::*, utils::*,
};
