use {
    crate::{Addr, Config, Storage},
    amm_math::Uint256,
};

/// Context for a state-changing call into a component.
///
/// The native value in `funds` has already been moved from `sender` to
/// `contract` by the time the component sees the call.
pub struct MutableCtx<'a> {
    pub storage: &'a mut dyn Storage,
    pub config: &'a Config,
    pub contract: Addr,
    pub sender: Addr,
    pub funds: Uint256,
}

impl MutableCtx<'_> {
    /// Reborrow this context as a call from `contract` into another component,
    /// carrying `funds` of native value.
    pub fn sub_ctx(&mut self, target: Addr, funds: Uint256) -> MutableCtx<'_> {
        MutableCtx {
            storage: &mut *self.storage,
            config: self.config,
            contract: target,
            sender: self.contract,
            funds,
        }
    }
}

/// Context for a read-only query.
pub struct ImmutableCtx<'a> {
    pub storage: &'a dyn Storage,
    pub config: &'a Config,
}
