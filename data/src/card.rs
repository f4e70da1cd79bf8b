//! The card component: a pure mapping from an optional [`CardRecord`]
//! to a [`Layout`] tree which the widget layer turns into elements.

use std::sync::LazyLock;

use serde::{Deserialize, Deserializer};
use url::Url;

pub const DEMO_NAME: &str = "Jesse Grant";
pub const DEMO_CAPTION: &str = "5 mutual friends";
pub const DEMO_CTA_LABEL: &str = "Add Friend";
pub const DEMO_PHOTO_URL: &str = "https://scontent.flhr3-1.fna.fbcdn.net/v/t1.0-1/p320x320/10419949_10105372167674736_5929675618317299881_n.jpg?oh=fa3bbf4311e61e4637b67ef3be89479f&oe=58C28705";

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/320";

const DEFAULT_CTA_LABEL: &str = "Show Now";
const DEFAULT_PLACEHOLDER_TEXT: &str = "No image";

static DEMO_PHOTO: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEMO_PHOTO_URL).expect("expected valid demo photo url"));
static PLACEHOLDER_IMAGE: LazyLock<Url> =
    LazyLock::new(|| Url::parse(PLACEHOLDER_IMAGE_URL).expect("expected valid placeholder url"));

/// A catalog record as supplied by the host. Nothing about it is
/// validated; every field may be empty and identifiers are not
/// guaranteed unique in real catalog data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardRecord {
    #[serde(default, alias = "Type")]
    pub title: String,
    #[serde(default, alias = "imageUrl", deserialize_with = "lenient_url")]
    pub image_url: Option<Url>,
    #[serde(default, alias = "id")]
    pub identifier: String,
}

/// Options recognized by the unified card template. The demo card
/// produced for a missing record ignores these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub cta_label: String,
    pub caption: String,
    pub placeholder_text: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cta_label: DEFAULT_CTA_LABEL.to_string(),
            caption: String::new(),
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
        }
    }
}

/// The rendered card, in display order: image, label, caption,
/// call-to-action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub image: Image,
    pub label: String,
    pub caption: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub source: Source,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    Placeholder,
}

impl Source {
    pub fn url(&self) -> &Url {
        match self {
            Source::Remote(url) => url,
            Source::Placeholder => &PLACEHOLDER_IMAGE,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Source::Placeholder)
    }
}

/// Renders a record into a card layout. Total over its input: missing
/// or empty fields degrade to the placeholder source or empty text, and
/// a missing record yields the fixed demo card.
pub fn render(record: Option<&CardRecord>, options: &Options) -> Layout {
    match record {
        Some(record) => Layout {
            image: Image {
                source: record
                    .image_url
                    .clone()
                    .map_or(Source::Placeholder, Source::Remote),
                alt: if record.title.is_empty() {
                    options.placeholder_text.clone()
                } else {
                    record.title.clone()
                },
            },
            label: record.title.clone(),
            caption: options.caption.clone(),
            cta: options.cta_label.clone(),
        },
        None => Layout {
            image: Image {
                source: Source::Remote(DEMO_PHOTO.clone()),
                alt: format!("Photo of {DEMO_NAME}"),
            },
            label: DEMO_NAME.to_string(),
            caption: DEMO_CAPTION.to_string(),
            cta: DEMO_CTA_LABEL.to_string(),
        },
    }
}

// Catalog data in the wild carries empty strings and junk where an
// image url should be. Fold those to `None` instead of failing the
// whole catalog.
fn lenient_url<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let source = Option::<String>::deserialize(deserializer)?;

    Ok(source
        .filter(|source| !source.is_empty())
        .and_then(|source| match Url::parse(&source) {
            Ok(url) => Some(url),
            Err(error) => {
                log::warn!("discarding unparseable image url {source:?}: {error}");
                None
            }
        }))
}

#[cfg(test)]
mod tests {
    use super::{
        render, CardRecord, Options, DEMO_CAPTION, DEMO_NAME, DEMO_PHOTO_URL,
        PLACEHOLDER_IMAGE_URL,
    };

    #[test]
    fn render_is_pure() {
        let record: CardRecord =
            serde_json::from_str(r#"{"Type":"Mens","id":"1","imageUrl":"https://example.com/mens.png"}"#)
                .expect("valid record");
        let options = Options::default();

        assert_eq!(render(Some(&record), &options), render(Some(&record), &options));
        assert_eq!(render(None, &options), render(None, &options));
    }

    #[test]
    fn missing_record_renders_demo_card() {
        let layout = render(None, &Options::default());

        assert_eq!(layout.label, DEMO_NAME);
        assert_eq!(layout.caption, DEMO_CAPTION);
        assert_eq!(layout.cta, "Add Friend");
        assert_eq!(layout.image.source.url().as_str(), DEMO_PHOTO_URL);
    }

    #[test]
    fn empty_image_url_renders_placeholder_source() {
        let record: CardRecord =
            serde_json::from_str(r#"{"Type":"Jackets","id":"1","imageUrl":""}"#)
                .expect("valid record");

        assert_eq!(record.image_url, None);

        let layout = render(Some(&record), &Options::default());

        assert!(layout.image.source.is_placeholder());
        assert_eq!(layout.image.source.url().as_str(), PLACEHOLDER_IMAGE_URL);
        assert_eq!(layout.label, "Jackets");
        assert_eq!(layout.cta, "Show Now");
    }

    #[test]
    fn empty_title_renders_empty_label() {
        let record = CardRecord {
            title: String::new(),
            image_url: Some("http://example.com/a.png".parse().expect("valid url")),
            identifier: String::new(),
        };

        let layout = render(Some(&record), &Options::default());

        assert!(layout.label.is_empty());
        assert_eq!(layout.image.source.url().as_str(), "http://example.com/a.png");
        assert_eq!(layout.image.alt, "No image");
    }

    #[test]
    fn renders_any_combination_of_missing_fields() {
        let titles = ["", "Shoes"];
        let sources = [None, Some("https://example.com/shoes.png")];
        let identifiers = ["", "1"];

        for title in titles {
            for source in sources {
                for identifier in identifiers {
                    let record = CardRecord {
                        title: title.to_string(),
                        image_url: source.map(|url| url.parse().expect("valid url")),
                        identifier: identifier.to_string(),
                    };

                    let layout = render(Some(&record), &Options::default());
                    assert_eq!(layout.label, title);
                }
            }
        }
    }

    #[test]
    fn unparseable_image_url_is_discarded() {
        let record: CardRecord =
            serde_json::from_str(r#"{"Type":"Women","imageUrl":"not a url"}"#)
                .expect("record still decodes");

        assert_eq!(record.image_url, None);
    }

    #[test]
    fn accepts_canonical_field_names() {
        let record: CardRecord = serde_json::from_str(
            r#"{"title":"Hats","identifier":"7","image_url":"https://example.com/hats.png"}"#,
        )
        .expect("valid record");

        assert_eq!(record.title, "Hats");
        assert_eq!(record.identifier, "7");
        assert!(matches!(record.image_url, Some(_)));
        assert!(!render(Some(&record), &Options::default())
            .image
            .source
            .is_placeholder());
    }

    #[test]
    fn options_parameterize_caption_and_cta() {
        let record = CardRecord {
            title: "Mens".to_string(),
            image_url: None,
            identifier: "1".to_string(),
        };
        let options = Options {
            cta_label: "Shop Now".to_string(),
            caption: "New arrivals".to_string(),
            placeholder_text: "Image coming soon".to_string(),
        };

        let layout = render(Some(&record), &options);

        assert_eq!(layout.cta, "Shop Now");
        assert_eq!(layout.caption, "New arrivals");
    }
}
