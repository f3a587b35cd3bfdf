// SPDX-License-Identifier: MPL-2.0
//! The CRT monitor frame.
//!
//! Every display surface in Archivio renders inside a decorative CRT monitor.
//! The monitor has three interchangeable skins; which one is active is the
//! only state this component owns. The wrapped content is opaque: the frame
//! never inspects or transforms it, it only draws chrome around it.
//!
//! Skins form a closed set, so an illegal variant cannot exist at runtime.
//! The one place an invalid value can appear is the string boundary (the
//! persisted config); [`FrameVariant::parse`] clamps anything unknown to the
//! default skin instead of failing.

pub mod skins;

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};
use serde::{Deserialize, Serialize};

/// The closed set of monitor skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrameVariant {
    /// Realistic beige-era monitor with a curved glass look.
    #[default]
    #[serde(rename = "smooth")]
    Smooth,
    /// 8-bit pixel-art frame.
    #[serde(rename = "pixel")]
    Pixel,
    /// Chunky 4-bit frame with the thickest bezels we could justify.
    #[serde(rename = "4bit")]
    FourBit,
}

impl FrameVariant {
    /// Every legal variant, in switcher display order.
    pub const ALL: [FrameVariant; 3] =
        [FrameVariant::Smooth, FrameVariant::Pixel, FrameVariant::FourBit];

    /// Parses a persisted variant name. Unknown names yield `None`; callers
    /// clamp to the default rather than erroring.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "smooth" => Some(FrameVariant::Smooth),
            "pixel" => Some(FrameVariant::Pixel),
            "4bit" => Some(FrameVariant::FourBit),
            _ => None,
        }
    }

    /// The i18n key of the switcher label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            FrameVariant::Smooth => "crt-variant-smooth",
            FrameVariant::Pixel => "crt-variant-pixel",
            FrameVariant::FourBit => "crt-variant-4bit",
        }
    }
}

/// Events propagated to the owner of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The active skin changed; emitted exactly once per actual change.
    VariantChanged(FrameVariant),
}

/// Variant-selection state of one monitor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    active: FrameVariant,
    initial: FrameVariant,
}

impl State {
    #[must_use]
    pub fn new(initial: FrameVariant) -> Self {
        Self {
            active: initial,
            initial,
        }
    }

    #[must_use]
    pub fn active(&self) -> FrameVariant {
        self.active
    }

    /// Switches the active skin. Setting the current variant again is a
    /// no-op and does not re-emit the change event.
    pub fn set(&mut self, variant: FrameVariant) -> Event {
        if self.active == variant {
            return Event::None;
        }
        self.active = variant;
        Event::VariantChanged(variant)
    }

    /// Re-synchronizes to a new initial variant, last-write-wins.
    ///
    /// Used when the owner re-initializes the frame (e.g. the persisted
    /// preference changed from the settings screen): the new initial value
    /// replaces whatever the user had switched to locally.
    pub fn sync_initial(&mut self, initial: FrameVariant) {
        if self.initial != initial {
            self.initial = initial;
            self.active = initial;
        }
    }
}

/// Contextual data needed to render a monitor.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Window title shown in the fake title bar; `None` uses the localized
    /// default (`display.exe`).
    pub title: Option<String>,
}

impl<'a> ViewContext<'a> {
    fn resolved_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| self.i18n.tr("crt-default-title"))
    }
}

/// Renders the monitor around opaque `content` with the active skin.
pub fn view<'a, M: 'a>(
    state: &State,
    ctx: ViewContext<'a>,
    content: Element<'a, M>,
) -> Element<'a, M> {
    let title = ctx.resolved_title();
    match state.active {
        FrameVariant::Smooth => skins::smooth(title, content),
        FrameVariant::Pixel => skins::pixel(title, content),
        FrameVariant::FourBit => skins::four_bit(title, content),
    }
}

/// Renders the monitor with the skin switcher row above it.
pub fn view_with_switcher<'a, M: Clone + 'a>(
    state: &State,
    ctx: ViewContext<'a>,
    content: Element<'a, M>,
    on_select: impl Fn(FrameVariant) -> M + 'a,
) -> Element<'a, M> {
    let mut switcher = Row::new().spacing(spacing::XS);
    for variant in FrameVariant::ALL {
        let label = Text::new(ctx.i18n.tr(variant.label_key())).size(typography::CAPTION);
        switcher = switcher.push(
            button(label)
                .on_press(on_select(variant))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::toggle(state.active == variant)),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Shrink)
        .push(switcher)
        .push(view(state, ctx, content))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variant_is_smooth() {
        assert_eq!(FrameVariant::default(), FrameVariant::Smooth);
        assert_eq!(State::default().active(), FrameVariant::Smooth);
    }

    #[test]
    fn set_emits_exactly_one_change_event() {
        let mut state = State::new(FrameVariant::Smooth);

        assert_eq!(
            state.set(FrameVariant::Pixel),
            Event::VariantChanged(FrameVariant::Pixel)
        );
        assert_eq!(state.active(), FrameVariant::Pixel);

        // Setting the same variant again is silent.
        assert_eq!(state.set(FrameVariant::Pixel), Event::None);
    }

    #[test]
    fn parse_clamps_unknown_names_to_none() {
        assert_eq!(FrameVariant::parse("pixel"), Some(FrameVariant::Pixel));
        assert_eq!(FrameVariant::parse("4bit"), Some(FrameVariant::FourBit));
        assert_eq!(FrameVariant::parse("teletext"), None);
        assert_eq!(
            FrameVariant::parse("teletext").unwrap_or_default(),
            FrameVariant::Smooth
        );
    }

    #[test]
    fn sync_initial_is_last_write_wins() {
        let mut state = State::new(FrameVariant::Smooth);
        state.set(FrameVariant::Pixel);

        // Owner re-initializes with a new default: the local switch is
        // overwritten, not merged.
        state.sync_initial(FrameVariant::FourBit);
        assert_eq!(state.active(), FrameVariant::FourBit);

        // Re-syncing with an unchanged initial leaves local switches alone.
        state.set(FrameVariant::Smooth);
        state.sync_initial(FrameVariant::FourBit);
        assert_eq!(state.active(), FrameVariant::Smooth);
    }

    #[test]
    fn serde_round_trips_the_wire_names() {
        for variant in FrameVariant::ALL {
            let encoded = toml::to_string(&std::collections::BTreeMap::from([("v", variant)]))
                .expect("serialize");
            let decoded: std::collections::BTreeMap<String, FrameVariant> =
                toml::from_str(&encoded).expect("deserialize");
            assert_eq!(decoded["v"], variant);
        }
    }

    #[test]
    fn view_renders_every_skin() {
        let i18n = I18n::default();
        for variant in FrameVariant::ALL {
            let state = State::new(variant);
            let ctx = ViewContext {
                i18n: &i18n,
                title: Some("display.exe".to_string()),
            };
            let content: Element<'_, ()> = Text::new("hello").into();
            let _element = view(&state, ctx, content);
        }
    }
}
