//! The persisted content document and its sections
//!
//! Wire format is camelCase JSON. Loading is tolerant: missing or `null`
//! sections and fields fall back to their defaults, scalar text fields
//! accept numbers, and the legacy `password_changed` key is accepted next
//! to `passwordChanged`. Values are kept as written, so a saved document
//! loads back unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Default theme colors
pub const DEFAULT_PRIMARY: &str = "#6366f1";
pub const DEFAULT_SECONDARY: &str = "#14b8a6";
pub const DEFAULT_ACCENT: &str = "#f59e0b";

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text field written by older clients as `null`, a number or a boolean
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string, got {}",
            other
        ))),
    }
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => lenient_string(value).map(Some).map_err(serde::de::Error::custom),
    }
}

/// A theme that does not parse is treated as never saved
fn lenient_theme<'de, D>(deserializer: D) -> Result<Option<ThemeData>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(theme) => Ok(Some(theme)),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable theme");
            Ok(None)
        }
    }
}

/// The single persisted aggregate: all site content plus admin credentials
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawContentDocument")]
pub struct ContentDocument {
    pub artworks: Vec<Artwork>,
    pub exhibitions: Vec<Exhibition>,
    pub about: AboutData,
    pub theme: Option<ThemeData>,
    pub admin_password: String,
    pub password_changed: bool,
}

/// Accepted input shape; legacy clients send `password_changed`, sometimes
/// alongside `passwordChanged`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContentDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    artworks: Vec<Artwork>,
    #[serde(default, deserialize_with = "null_as_default")]
    exhibitions: Vec<Exhibition>,
    #[serde(default, deserialize_with = "null_as_default")]
    about: AboutData,
    #[serde(default, deserialize_with = "lenient_theme")]
    theme: Option<ThemeData>,
    #[serde(default, deserialize_with = "lenient_string")]
    admin_password: String,
    #[serde(default)]
    password_changed: Option<bool>,
    #[serde(default, rename = "password_changed")]
    legacy_password_changed: Option<bool>,
}

impl From<RawContentDocument> for ContentDocument {
    fn from(raw: RawContentDocument) -> Self {
        // Either spelling set means a password was chosen
        let password_changed = raw.password_changed.unwrap_or(false)
            || raw.legacy_password_changed.unwrap_or(false);

        Self {
            artworks: raw.artworks,
            exhibitions: raw.exhibitions,
            about: raw.about,
            theme: raw.theme,
            admin_password: raw.admin_password,
            password_changed,
        }
    }
}

impl ContentDocument {
    /// Document synthesized on first access
    pub fn with_default_password(default_password: &str) -> Self {
        Self {
            admin_password: default_password.to_string(),
            ..Self::default()
        }
    }
}

/// A gallery artwork
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_url: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_optional_string"
    )]
    pub display_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub medium: String,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_optional_string"
    )]
    pub nft_link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
}

/// Artwork fields supplied at creation; the id is assigned by the facade
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub display_url: Option<String>,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub medium: String,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub nft_link: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl ArtworkDraft {
    /// Attach an id, producing the stored artwork
    pub fn into_artwork(self, id: String) -> Artwork {
        Artwork {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            display_url: self.display_url.filter(|u| !u.is_empty()),
            year: self.year,
            medium: self.medium,
            dimensions: self.dimensions,
            nft_link: self.nft_link.filter(|u| !u.is_empty()),
            featured: self.featured,
        }
    }
}

/// Ids were historically written as `Date.now().toString()`; accept bare numbers too.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "id must be a string or number, got {}",
            other
        ))),
    }
}

/// One side of a width/height pair, kept in the form it was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(serde_json::Number),
    Text(String),
}

impl Measure {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Measure::Text(s.clone())),
            Value::Number(n) => Some(Measure::Number(n.clone())),
            _ => None,
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Measure::Number(n) => write!(f, "{}", n),
            Measure::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Artwork dimensions: free text or a width/height pair
///
/// Stored documents keep whatever shape they were saved with; shapes other
/// than text or a bare `{width, height}` are carried as `Other`.
/// [`Dimensions::normalized`] maps the marketplace metadata shape
/// `{artifact: {dimensions: {width, height}}}` onto `Size` for new input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dimensions {
    Text(String),
    Size { width: Measure, height: Measure },
    Other(Value),
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::Text(String::new())
    }
}

impl Dimensions {
    /// Human-readable rendering used by gallery views
    pub fn format(&self) -> String {
        match self {
            Dimensions::Text(text) => text.clone(),
            Dimensions::Size { width, height } => format!("{} x {}", width, height),
            Dimensions::Other(_) => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Dimensions::Text(text) if text.is_empty())
    }

    /// Normalize an arbitrary JSON value; `None` when the shape is not recognized
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Dimensions::default()),
            Value::String(text) => Some(Dimensions::Text(text.clone())),
            Value::Number(n) => Some(Dimensions::Text(n.to_string())),
            Value::Object(map) => {
                if let Some(size) = Self::size_from(map) {
                    return Some(size);
                }
                map.get("artifact")
                    .and_then(|artifact| artifact.get("dimensions"))
                    .and_then(Value::as_object)
                    .and_then(Self::size_from)
            }
            _ => None,
        }
    }

    /// Map a recognized `Other` shape onto `Text` or `Size`
    pub fn normalized(self) -> Self {
        match self {
            Dimensions::Other(value) => {
                Dimensions::from_value(&value).unwrap_or(Dimensions::Other(value))
            }
            dims => dims,
        }
    }

    fn size_from(map: &serde_json::Map<String, Value>) -> Option<Self> {
        let width = Measure::from_value(map.get("width")?)?;
        let height = Measure::from_value(map.get("height")?)?;
        Some(Dimensions::Size { width, height })
    }
}

impl Serialize for Dimensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimensions::Text(text) => serializer.serialize_str(text),
            Dimensions::Size { width, height } => {
                use serde::ser::SerializeStruct;
                let mut state = serializer.serialize_struct("Dimensions", 2)?;
                state.serialize_field("width", width)?;
                state.serialize_field("height", height)?;
                state.end()
            }
            Dimensions::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Dimensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let size = value
            .as_object()
            .filter(|map| map.len() == 2)
            .and_then(Self::size_from);
        if let Some(size) = size {
            return Ok(size);
        }

        Ok(match value {
            Value::Null => Dimensions::default(),
            Value::String(text) => Dimensions::Text(text),
            other => Dimensions::Other(other),
        })
    }
}

/// Exhibition status, set by the author and never derived from dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionStatus {
    #[default]
    Upcoming,
    Current,
    Past,
}

impl std::fmt::Display for ExhibitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Current => write!(f, "current"),
            Self::Past => write!(f, "past"),
        }
    }
}

/// An exhibition entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ExhibitionStatus,
}

/// Exhibition fields supplied at creation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: ExhibitionStatus,
}

impl ExhibitionDraft {
    pub fn into_exhibition(self, id: String) -> Exhibition {
        Exhibition {
            id,
            title: self.title,
            location: self.location,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            images: self.images.into_iter().filter(|u| !u.is_empty()).collect(),
            featured: self.featured,
            status: self.status,
        }
    }
}

/// A link shown on the about page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    #[serde(deserialize_with = "lenient_string")]
    pub platform: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
}

/// About-page content
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutData {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub biography: String,
    #[serde(deserialize_with = "lenient_string")]
    pub profile_image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub social_links: Vec<SocialLink>,
    #[serde(deserialize_with = "lenient_string")]
    pub html_content: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
}

/// Site palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
        }
    }
}

/// Persisted theme; absent from the document until first saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeData {
    #[serde(default = "default_is_dark")]
    pub is_dark: bool,
    #[serde(default)]
    pub colors: ThemeColors,
}

fn default_is_dark() -> bool {
    true
}

impl Default for ThemeData {
    fn default() -> Self {
        Self {
            is_dark: default_is_dark(),
            colors: ThemeColors::default(),
        }
    }
}
