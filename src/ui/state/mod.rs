// SPDX-License-Identifier: MPL-2.0
//! Reusable viewer state types.

pub mod auto_fit;
pub mod close_delay;
pub mod view_state;

pub use auto_fit::AutoMode;
pub use close_delay::CloseSettleDelay;
pub use view_state::{CloseReason, ViewState};
