//! Payment widget adapters.
//!
//! - `ChannelPaymentWidget` - hands each widget session to the host over a channel
//! - `ScriptedPaymentWidget` - queued outcomes for tests

mod channel_widget;
mod scripted_widget;

pub use channel_widget::{ChannelPaymentWidget, WidgetRequest};
pub use scripted_widget::ScriptedPaymentWidget;
