use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::sql::Thing;
use tracing::{debug, info, warn};

use crate::catalog::{
    Artist, Event, Lp, MISSING_CATEGORY_LABEL, SocialLinks, UNKNOWN_ARTIST_NAME,
};
use crate::config::StorageConfig;
use crate::services::dates::parse_event_date;
use crate::services::seed::{CatalogFile, CategoryEntry, EventEntry, LpEntry, SingerEntry};

const SINGER_TABLE: &str = "singer";
const CATEGORY_TABLE: &str = "category";
const EVENT_TABLE: &str = "event";
const LP_TABLE: &str = "lp";
const CONFIG_TABLE: &str = "config";
const SOCIAL_KEY: &str = "social";

/// Raw singer document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SingerRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Thing>,
    name: Option<String>,
    photo: Option<String>,
    genre: Option<String>,
    description: Option<String>,
    category: Option<Thing>,
    email: Option<String>,
    facebook: Option<String>,
    instagram: Option<String>,
    spotify: Option<String>,
    youtube: Option<String>,
}

/// Raw category document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CategoryRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Thing>,
    category: Option<String>,
}

/// Raw event document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct EventRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Thing>,
    name: Option<String>,
    date: Option<String>,
    address: Option<String>,
    description: Option<String>,
    price: Option<String>,
    image: Option<String>,
    singer: Option<Thing>,
}

/// Raw LP document; both flag spellings occur in stored data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LpRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Thing>,
    name: Option<String>,
    year: Option<i64>,
    #[serde(default, rename = "preSave", alias = "pre-save")]
    pre_save: Option<bool>,
    #[serde(default, rename = "novaEra", alias = "nova-era")]
    nova_era: Option<bool>,
    photo: Option<String>,
    link1: Option<String>,
    link2: Option<String>,
    singer: Option<Thing>,
}

/// Counts of documents written by an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub categories: usize,
    pub singers: usize,
    pub events: usize,
    pub lps: usize,
    pub social: bool,
}

/// Read access to the agency catalog held in SurrealDB
#[derive(Clone)]
pub struct CatalogStore {
    db: Surreal<Db>,
}

impl CatalogStore {
    /// Opens (or creates) the on-disk catalog under `data_dir`
    pub async fn open(data_dir: &Path, config: &StorageConfig) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let db_path = data_dir.join("cena.db");

        let db = Surreal::new::<RocksDb>(db_path).await?;
        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await?;

        let store = Self { db };
        store.init_db().await?;
        info!(namespace = %config.namespace, database = %config.database, "catalog store opened");
        Ok(store)
    }

    /// Volatile store for tests
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        let db = Surreal::new::<surrealdb::engine::local::Mem>(()).await?;
        db.use_ns("cena").use_db("test").await?;
        let store = Self { db };
        store.init_db().await?;
        Ok(store)
    }

    async fn init_db(&self) -> Result<()> {
        self.db
            .query(
                "
            DEFINE TABLE IF NOT EXISTS singer SCHEMALESS;
            DEFINE TABLE IF NOT EXISTS category SCHEMALESS;
            DEFINE TABLE IF NOT EXISTS event SCHEMALESS;
            DEFINE TABLE IF NOT EXISTS lp SCHEMALESS;
            DEFINE TABLE IF NOT EXISTS config SCHEMALESS;
        ",
            )
            .await?
            .check()?;
        Ok(())
    }

    async fn load_singers(&self) -> Result<Vec<SingerRecord>> {
        let singers: Vec<SingerRecord> = self.db.select(SINGER_TABLE).await?;
        Ok(singers)
    }

    async fn load_categories(&self) -> Result<Vec<CategoryRecord>> {
        let categories: Vec<CategoryRecord> = self.db.select(CATEGORY_TABLE).await?;
        Ok(categories)
    }

    /// Every artist, with category names resolved
    pub async fn artists_with_categories(&self) -> Result<Vec<Artist>> {
        let singers = self.load_singers().await?;
        let categories = category_names(self.load_categories().await?);
        let artists: Vec<Artist> = singers
            .into_iter()
            .map(|singer| artist_from_record(singer, &categories))
            .collect();
        debug!(count = artists.len(), "loaded artists");
        Ok(artists)
    }

    /// Every event, soonest first, with the performing artist resolved
    pub async fn all_events_with_artists(&self) -> Result<Vec<Event>> {
        let records: Vec<EventRecord> = self.db.select(EVENT_TABLE).await?;
        let artists = self.artists_by_key().await?;

        let mut events: Vec<Event> = records
            .into_iter()
            .map(|record| event_from_record(record, &artists))
            .collect();
        sort_events_ascending(&mut events);
        debug!(count = events.len(), "loaded events");
        Ok(events)
    }

    /// Events performed by one artist, latest first
    pub async fn events_for_artist(&self, artist_id: &str) -> Result<Vec<Event>> {
        if artist_id.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut response = self
            .db
            .query("SELECT * FROM event WHERE singer = $singer")
            .bind(("singer", Thing::from((SINGER_TABLE, artist_id))))
            .await?;
        let records: Vec<EventRecord> = response.take(0)?;

        // The artist is already known to the caller; events are not joined
        let empty = HashMap::new();
        let mut events: Vec<Event> = records
            .into_iter()
            .map(|record| event_from_record(record, &empty))
            .collect();
        sort_events_descending(&mut events);
        debug!(artist_id, count = events.len(), "loaded artist events");
        Ok(events)
    }

    /// Every LP, newest year first
    pub async fn all_lps(&self) -> Result<Vec<Lp>> {
        let records: Vec<LpRecord> = self.db.select(LP_TABLE).await?;
        let mut lps: Vec<Lp> = records.into_iter().map(lp_from_record).collect();
        sort_lps(&mut lps);
        debug!(count = lps.len(), "loaded lps");
        Ok(lps)
    }

    /// LPs released by one artist, newest year first
    pub async fn lps_for_artist(&self, artist_id: &str) -> Result<Vec<Lp>> {
        if artist_id.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut response = self
            .db
            .query("SELECT * FROM lp WHERE singer = $singer")
            .bind(("singer", Thing::from((SINGER_TABLE, artist_id))))
            .await?;
        let records: Vec<LpRecord> = response.take(0)?;
        let mut lps: Vec<Lp> = records.into_iter().map(lp_from_record).collect();
        sort_lps(&mut lps);
        Ok(lps)
    }

    /// Agency social links, falling back to the platform home pages
    pub async fn social_links(&self) -> SocialLinks {
        let stored: Result<Option<SocialLinks>, surrealdb::Error> =
            self.db.select((CONFIG_TABLE, SOCIAL_KEY)).await;
        match stored {
            Ok(Some(links)) => links,
            Ok(None) => {
                debug!("no social config stored, using defaults");
                SocialLinks::default()
            }
            Err(error) => {
                warn!(%error, "failed to read social links, using defaults");
                SocialLinks::default()
            }
        }
    }

    /// Writes every document in `catalog`, replacing documents with the same key
    pub async fn import_catalog(&self, catalog: &CatalogFile) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();

        for entry in &catalog.categories {
            let _: Option<CategoryRecord> = self
                .db
                .upsert((CATEGORY_TABLE, entry.id.as_str()))
                .content(category_record(entry))
                .await?;
            summary.categories += 1;
        }
        for entry in &catalog.singers {
            let _: Option<SingerRecord> = self
                .db
                .upsert((SINGER_TABLE, entry.id.as_str()))
                .content(singer_record(entry))
                .await?;
            summary.singers += 1;
        }
        for entry in &catalog.events {
            let _: Option<EventRecord> = self
                .db
                .upsert((EVENT_TABLE, entry.id.as_str()))
                .content(event_record(entry))
                .await?;
            summary.events += 1;
        }
        for entry in &catalog.lps {
            let _: Option<LpRecord> = self
                .db
                .upsert((LP_TABLE, entry.id.as_str()))
                .content(lp_record(entry))
                .await?;
            summary.lps += 1;
        }
        if let Some(social) = &catalog.social {
            let _: Option<SocialLinks> = self
                .db
                .upsert((CONFIG_TABLE, SOCIAL_KEY))
                .content(social.clone())
                .await?;
            summary.social = true;
        }

        info!(?summary, "catalog imported");
        Ok(summary)
    }

    async fn artists_by_key(&self) -> Result<HashMap<String, Artist>> {
        Ok(self
            .artists_with_categories()
            .await?
            .into_iter()
            .map(|artist| (artist.id.clone(), artist))
            .collect())
    }
}

/// Key of a record without its table prefix
fn record_key(thing: &Thing) -> String {
    thing.id.to_raw()
}

fn category_names(records: Vec<CategoryRecord>) -> HashMap<String, String> {
    records
        .into_iter()
        .filter_map(|record| {
            let key = record.id.as_ref().map(record_key)?;
            Some((key, record.category.unwrap_or_default()))
        })
        .collect()
}

fn artist_from_record(record: SingerRecord, categories: &HashMap<String, String>) -> Artist {
    let id = record.id.as_ref().map(record_key).unwrap_or_default();
    let category_name = record.category.as_ref().map(|category| {
        let key = record_key(category);
        categories.get(&key).cloned().unwrap_or_else(|| {
            warn!(artist = %id, category = %key, "artist references a missing category");
            MISSING_CATEGORY_LABEL.to_string()
        })
    });

    Artist {
        name: record
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ARTIST_NAME.to_string()),
        id,
        photo: record.photo.filter(|photo| !photo.is_empty()),
        genre: record.genre,
        description: record.description,
        category_name,
        email: record.email,
        facebook: record.facebook,
        instagram: record.instagram,
        spotify: record.spotify,
        youtube: record.youtube,
    }
}

fn event_from_record(record: EventRecord, artists: &HashMap<String, Artist>) -> Event {
    let id = record.id.as_ref().map(record_key).unwrap_or_default();
    let artist = record.singer.as_ref().and_then(|singer| {
        let key = record_key(singer);
        let artist = artists.get(&key).cloned();
        if artist.is_none() && !artists.is_empty() {
            warn!(event = %id, singer = %key, "event references a missing artist");
        }
        artist
    });

    Event {
        id,
        name: record.name,
        date: record.date,
        address: record.address,
        description: record.description,
        price: record.price,
        image: record.image,
        artist,
    }
}

fn lp_from_record(record: LpRecord) -> Lp {
    Lp {
        id: record.id.as_ref().map(record_key).unwrap_or_default(),
        name: record.name.unwrap_or_default(),
        year: record.year.unwrap_or(0),
        pre_save: record.pre_save.unwrap_or(false),
        nova_era: record.nova_era.unwrap_or(false),
        photo: record.photo.filter(|photo| !photo.is_empty()),
        link1: record.link1.filter(|link| !link.is_empty()),
        link2: record.link2.filter(|link| !link.is_empty()),
    }
}

/// Soonest first; undated or unparseable events go last
fn sort_events_ascending(events: &mut [Event]) {
    events.sort_by_key(|event| {
        let date = event.date.as_deref().and_then(parse_event_date);
        (date.is_none(), date)
    });
}

/// Latest first; undated or unparseable events go last
fn sort_events_descending(events: &mut [Event]) {
    events.sort_by_key(|event| {
        let date = event.date.as_deref().and_then(parse_event_date);
        (date.is_none(), Reverse(date))
    });
}

fn sort_lps(lps: &mut [Lp]) {
    lps.sort_by_key(|lp| Reverse(lp.year));
}

fn reference(table: &str, key: Option<&String>) -> Option<Thing> {
    key.filter(|key| !key.trim().is_empty())
        .map(|key| Thing::from((table, key.as_str())))
}

fn category_record(entry: &CategoryEntry) -> CategoryRecord {
    CategoryRecord {
        id: None,
        category: Some(entry.category.clone()),
    }
}

fn singer_record(entry: &SingerEntry) -> SingerRecord {
    SingerRecord {
        id: None,
        name: entry.name.clone(),
        photo: entry.photo.clone(),
        genre: entry.genre.clone(),
        description: entry.description.clone(),
        category: reference(CATEGORY_TABLE, entry.category.as_ref()),
        email: entry.email.clone(),
        facebook: entry.facebook.clone(),
        instagram: entry.instagram.clone(),
        spotify: entry.spotify.clone(),
        youtube: entry.youtube.clone(),
    }
}

fn event_record(entry: &EventEntry) -> EventRecord {
    EventRecord {
        id: None,
        name: entry.name.clone(),
        date: entry.date.clone(),
        address: entry.address.clone(),
        description: entry.description.clone(),
        price: entry.price.clone(),
        image: entry.image.clone(),
        singer: reference(SINGER_TABLE, entry.singer.as_ref()),
    }
}

fn lp_record(entry: &LpEntry) -> LpRecord {
    LpRecord {
        id: None,
        name: entry.name.clone(),
        year: entry.year,
        pre_save: entry.pre_save,
        nova_era: entry.nova_era,
        photo: entry.photo.clone(),
        link1: entry.link1.clone(),
        link2: entry.link2.clone(),
        singer: reference(SINGER_TABLE, entry.singer.as_ref()),
    }
}
