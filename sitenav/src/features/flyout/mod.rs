mod event;
mod feature;
mod state;

pub use event::FlyoutEvent;
pub(crate) use feature::{FlyoutCtx, FlyoutFeature};
