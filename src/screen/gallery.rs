use data::card::{Layout, Options};
use data::Catalog;
use iced::widget::{column, container, row, scrollable, text};
use iced::{alignment, Length};

use crate::theme;
use crate::widget::{card, Element};

const CARDS_PER_ROW: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    CtaPressed(usize),
    Dismissed(usize),
}

pub struct Gallery {
    entries: Vec<Entry>,
}

struct Entry {
    identifier: String,
    layout: Layout,
    hidden: bool,
}

impl Gallery {
    /// The first entry is always the demo card; the rest come from the
    /// catalog, one card per record, in catalog order.
    pub fn new(catalog: &Catalog, options: &Options) -> Self {
        let demo = Entry {
            identifier: String::new(),
            layout: data::card::render(None, options),
            hidden: false,
        };

        let entries = std::iter::once(demo)
            .chain(catalog.records.iter().map(|record| Entry {
                identifier: record.identifier.clone(),
                layout: data::card::render(Some(record), options),
                hidden: false,
            }))
            .collect();

        Self { entries }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::CtaPressed(index) => {
                // Static placeholder; there is no navigation to go to.
                if let Some(entry) = self.entries.get(index) {
                    log::info!(
                        "call to action pressed for card {index} (identifier {:?})",
                        entry.identifier
                    );
                }
            }
            Message::Dismissed(index) => {
                if let Some(entry) = self.entries.get_mut(index) {
                    entry.hidden = true;
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cards = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.hidden)
            .map(|(index, entry)| {
                card(
                    entry.layout.clone(),
                    None,
                    Message::CtaPressed(index),
                    Some(Message::Dismissed(index)),
                )
            });

        let mut grid = column![].spacing(16);
        let mut current = row![].spacing(16);
        let mut count = 0;

        for element in cards {
            current = current.push(element);
            count += 1;

            if count == CARDS_PER_ROW {
                grid = grid.push(current);
                current = row![].spacing(16);
                count = 0;
            }
        }

        if count > 0 {
            grid = grid.push(current);
        }

        let content = column![]
            .spacing(16)
            .padding(24)
            .push(text("Shop by category").size(theme::TEXT_SIZE + 6.0))
            .push(grid);

        scrollable(
            container(content)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .into()
    }
}
