// SPDX-License-Identifier: MPL-2.0
//! Overlay controls: fullscreen toggle and close button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette::WHITE, sizing, spacing};
use crate::ui::{icons, styles};
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, tooltip, Row};
use iced::{Element, Length};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub fullscreen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleFullscreen,
    Close,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let fullscreen_icon = if ctx.fullscreen {
        icons::compress()
    } else {
        icons::expand()
    };
    let fullscreen_tip = if ctx.fullscreen {
        ctx.i18n.tr("controls-exit-fullscreen-tooltip")
    } else {
        ctx.i18n.tr("controls-enter-fullscreen-tooltip")
    };

    Row::new()
        .spacing(spacing::SM)
        .push(icon_button(
            fullscreen_icon,
            fullscreen_tip,
            Message::ToggleFullscreen,
        ))
        .push(icon_button(
            icons::close(),
            ctx.i18n.tr("controls-close-tooltip"),
            Message::Close,
        ))
        .into()
}

/// Builds one overlay icon button with its tooltip.
fn icon_button(
    icon: Svg<'static>,
    tip: String,
    message: Message,
) -> Element<'static, Message> {
    let icon = icon
        .width(Length::Fixed(sizing::ICON))
        .height(Length::Fixed(sizing::ICON))
        .style(styles::overlay::icon(WHITE));

    let control = button(icon)
        .on_press(message)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::ICON_BUTTON))
        .height(Length::Fixed(sizing::ICON_BUTTON))
        .style(styles::button::overlay(WHITE));

    tooltip(
        control,
        container(text(tip))
            .padding(spacing::XS)
            .style(styles::tooltip::style),
        tooltip::Position::Bottom,
    )
    .into()
}
