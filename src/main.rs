mod logger;
mod screen;
mod theme;
mod widget;

use data::{Catalog, Config};
use iced::{Size, Task};

use self::screen::Gallery;
use self::widget::Element;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn main() -> iced::Result {
    #[cfg(debug_assertions)]
    let is_debug = true;
    #[cfg(not(debug_assertions))]
    let is_debug = false;

    logger::setup(is_debug).expect("setup logging");
    log::info!("application ({VERSION}) has started");

    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => {
            log::warn!("failed to load config: {error}");
            Config::default()
        }
    };

    let catalog = match &config.catalog {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                log::warn!(
                    "failed to load catalog {path}: {error}",
                    path = path.display()
                );
                Catalog::sample()
            }
        },
        None => Catalog::sample(),
    };

    iced::application("Vitrine", Vitrine::update, Vitrine::view)
        .theme(Vitrine::theme)
        .window_size(Size::new(860.0, 640.0))
        .centered()
        .run_with(move || (Vitrine::new(&config, &catalog), Task::none()))
}

struct Vitrine {
    gallery: Gallery,
}

#[derive(Debug, Clone)]
enum Message {
    Gallery(screen::gallery::Message),
}

impl Vitrine {
    fn new(config: &Config, catalog: &Catalog) -> Self {
        Self {
            gallery: Gallery::new(catalog, &config.card.options()),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                self.gallery.update(message);
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        self.gallery.view().map(Message::Gallery)
    }

    fn theme(&self) -> iced::Theme {
        iced::Theme::default()
    }
}
