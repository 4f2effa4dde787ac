use serde::{Deserialize, Serialize};

/// Label used when a category reference points nowhere
pub const MISSING_CATEGORY_LABEL: &str = "Categoria não encontrada";
/// Name shown for a referenced artist document without a name
pub const UNKNOWN_ARTIST_NAME: &str = "Artista Desconhecido";
/// Title shown for an event without a name
pub const DEFAULT_EVENT_NAME: &str = "Evento";
/// Release label for LPs that are still in pre-save
pub const PRE_SAVE_LABEL: &str = "Brevemente";

/// An artist on the agency roster
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub photo: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    /// Resolved from the artist's category reference
    pub category_name: Option<String>,
    pub email: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub spotify: Option<String>,
    pub youtube: Option<String>,
}

impl Artist {
    /// Social handles that are set, labelled for display
    pub fn social_handles(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", self.facebook.as_deref()),
            ("Instagram", self.instagram.as_deref()),
            ("Spotify", self.spotify.as_deref()),
            ("YouTube", self.youtube.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, handle)| {
            handle
                .filter(|value| !value.trim().is_empty())
                .map(|value| (label, value))
        })
        .collect()
    }
}

/// A scheduled show
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: Option<String>,
    /// Stored as text; see `services::dates::parse_event_date`
    pub date: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    /// Resolved from the event's singer reference
    pub artist: Option<Artist>,
}

impl Event {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_EVENT_NAME)
    }
}

/// An album release
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lp {
    pub id: String,
    pub name: String,
    pub year: i64,
    pub pre_save: bool,
    pub nova_era: bool,
    pub photo: Option<String>,
    pub link1: Option<String>,
    pub link2: Option<String>,
}

impl Lp {
    /// Year of release, or the pre-save label for unreleased albums
    #[must_use]
    pub fn release_label(&self) -> String {
        if self.pre_save {
            PRE_SAVE_LABEL.to_string()
        } else {
            self.year.to_string()
        }
    }

    pub fn links(&self) -> impl Iterator<Item = &str> {
        [self.link1.as_deref(), self.link2.as_deref()]
            .into_iter()
            .flatten()
            .filter(|link| !link.trim().is_empty())
    }
}

/// Agency-wide social profiles shown in the footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub youtube: Option<String>,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            facebook: Some("https://facebook.com".to_string()),
            instagram: Some("https://instagram.com".to_string()),
            youtube: Some("https://youtube.com".to_string()),
        }
    }
}

/// Result of fetching a collection, as seen by a page
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(Vec<T>),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    /// Wraps a fetch result; errors keep only their display message
    pub fn from_result<E: std::fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Self::Ready(items),
            Err(error) => Self::Failed(error.to_string()),
        }
    }

    /// Loaded items, empty while loading or after a failure
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Ready(items) => items,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// True unless the collection loaded with at least one item
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_handles_skip_empty() {
        let artist = Artist {
            id: "ana".to_string(),
            name: "Ana".to_string(),
            instagram: Some("instagram.com/ana".to_string()),
            spotify: Some("  ".to_string()),
            ..Artist::default()
        };
        assert_eq!(
            artist.social_handles(),
            vec![("Instagram", "instagram.com/ana")]
        );
    }

    #[test]
    fn test_event_display_name_falls_back() {
        let mut event = Event::default();
        assert_eq!(event.display_name(), DEFAULT_EVENT_NAME);
        event.name = Some("Noite de Fado".to_string());
        assert_eq!(event.display_name(), "Noite de Fado");
    }

    #[test]
    fn test_lp_release_label() {
        let mut lp = Lp {
            year: 2024,
            ..Lp::default()
        };
        assert_eq!(lp.release_label(), "2024");
        lp.pre_save = true;
        assert_eq!(lp.release_label(), PRE_SAVE_LABEL);
    }

    #[test]
    fn test_load_state_from_result() {
        let ready: LoadState<u8> = LoadState::from_result::<String>(Ok(vec![1, 2]));
        assert_eq!(ready.len(), 2);
        assert!(!ready.is_empty());
        assert!(ready.error().is_none());

        let failed: LoadState<u8> = LoadState::from_result(Err("connection refused"));
        assert_eq!(failed.error(), Some("connection refused"));
        assert!(failed.items().is_empty());
        assert!(failed.is_empty());
        assert_eq!(LoadState::<u8>::default(), LoadState::Loading);
    }
}
