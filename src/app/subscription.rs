// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::design_tokens::animation;
use iced::{time, Subscription};

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Only active while toasts are showing; an idle app gets no timer.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(animation::TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
