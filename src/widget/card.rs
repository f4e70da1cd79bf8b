use data::card::Layout;
use iced::widget::{button, column, container, image, stack, text};
use iced::{alignment, Length};

use super::Element;
use crate::theme;

/// Turns a rendered card layout into an element tree: image region,
/// label, caption, then the call-to-action.
///
/// The card never fetches anything; a host that has already decoded the
/// picture can pass its handle, otherwise the image region shows the
/// alt text over a muted frame. `on_dismiss` adds the corner dismiss
/// control when the host wants cards to be closable.
pub fn card<'a, Message: Clone + 'a>(
    layout: Layout,
    photo: Option<image::Handle>,
    on_press: Message,
    on_dismiss: Option<Message>,
) -> Element<'a, Message> {
    let Layout {
        image: art,
        label,
        caption,
        cta,
    } = layout;

    let picture: Element<'a, Message> = match photo {
        Some(handle) => image(handle).width(Length::Fill).into(),
        None => container(
            text(art.alt)
                .size(theme::TEXT_SIZE)
                .style(theme::text::caption),
        )
        .width(Length::Fill)
        .height(160)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(theme::container::frame)
        .into(),
    };

    let cta = button(
        container(text(cta).size(theme::TEXT_SIZE))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .style(theme::button::cta)
    .on_press(on_press);

    let body = column![]
        .push(picture)
        .push(
            column![]
                .spacing(4)
                .padding(8)
                .push(
                    text(label)
                        .size(theme::TEXT_SIZE)
                        .style(theme::text::label),
                )
                .push(
                    text(caption)
                        .size(theme::TEXT_SIZE)
                        .style(theme::text::caption),
                )
                .push(cta),
        );

    let body = container(body)
        .width(theme::CARD_WIDTH)
        .style(theme::container::card);

    match on_dismiss {
        Some(message) => stack![
            body,
            container(
                button(text("×").size(theme::TEXT_SIZE))
                    .style(theme::button::dismiss)
                    .on_press(message),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .padding(4),
        ]
        .into(),
        None => body.into(),
    }
}
