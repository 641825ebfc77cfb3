mod errors;
mod event;
mod feature;
mod state;

pub use errors::LayoutError;
pub use event::LayoutEvent;
pub(crate) use feature::{LayoutCtx, LayoutFeature};
pub use state::{LayoutState, PinChange};
