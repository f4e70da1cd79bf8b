pub use self::card::card;

pub mod card;

pub type Renderer = iced::Renderer;
pub type Theme = iced::Theme;
pub type Element<'a, Message> = iced::Element<'a, Message, Theme, Renderer>;
