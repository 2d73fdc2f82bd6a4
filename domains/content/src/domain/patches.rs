//! Create requests and partial updates for content sections
//!
//! A patch carries only the fields the caller wants to change. `None`
//! leaves the stored value untouched; for optional links an empty string
//! clears the link.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use folio_store::{
    AboutData, Artwork, ArtworkDraft, Dimensions, Exhibition, ExhibitionDraft, ExhibitionStatus,
    SocialLink, ThemeColors, ThemeData,
};
use regex::Regex;
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

/// `#rgb` or `#rrggbb`
static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color regex is valid")
});

/// Parse a calendar date as entered by the admin (`YYYY-MM-DD`) or a full
/// RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    match parse_date(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("invalid_date")),
    }
}

/// Empty means "no end date yet"
fn validate_optional_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_date(value)
}

fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    if HEX_COLOR_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_color"))
    }
}

/// Contact address on the about page; empty clears it
fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.to_string().validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email"))
    }
}

fn non_empty(link: Option<String>) -> Option<String> {
    link.filter(|l| !l.is_empty())
}

/// Request for adding an artwork
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewArtwork {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
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

impl From<NewArtwork> for ArtworkDraft {
    fn from(request: NewArtwork) -> Self {
        ArtworkDraft {
            title: request.title,
            description: request.description,
            image_url: request.image_url,
            display_url: request.display_url,
            year: request.year,
            medium: request.medium,
            dimensions: request.dimensions.normalized(),
            nft_link: request.nft_link,
            featured: request.featured,
        }
    }
}

/// Partial update of one artwork
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    pub display_url: Option<String>,
    pub year: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub nft_link: Option<String>,
    pub featured: Option<bool>,
}

impl ArtworkPatch {
    /// Merge the present fields into `artwork`; the id never changes.
    pub fn apply(self, artwork: &mut Artwork) {
        if let Some(title) = self.title {
            artwork.title = title;
        }
        if let Some(description) = self.description {
            artwork.description = description;
        }
        if let Some(image_url) = self.image_url {
            artwork.image_url = image_url;
        }
        if let Some(display_url) = self.display_url {
            artwork.display_url = non_empty(Some(display_url));
        }
        if let Some(year) = self.year {
            artwork.year = year;
        }
        if let Some(medium) = self.medium {
            artwork.medium = medium;
        }
        if let Some(dimensions) = self.dimensions {
            artwork.dimensions = dimensions.normalized();
        }
        if let Some(nft_link) = self.nft_link {
            artwork.nft_link = non_empty(Some(nft_link));
        }
        if let Some(featured) = self.featured {
            artwork.featured = featured;
        }
    }
}

/// Request for adding an exhibition
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewExhibition {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[validate(custom(function = "validate_date"))]
    pub start_date: String,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_date"))]
    pub end_date: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: ExhibitionStatus,
}

impl From<NewExhibition> for ExhibitionDraft {
    fn from(request: NewExhibition) -> Self {
        ExhibitionDraft {
            title: request.title,
            location: request.location,
            description: request.description,
            start_date: request.start_date,
            end_date: request.end_date,
            images: request.images,
            featured: request.featured,
            status: request.status,
        }
    }
}

/// Partial update of one exhibition
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExhibitionPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_date"))]
    pub start_date: Option<String>,
    #[validate(custom(function = "validate_optional_date"))]
    pub end_date: Option<String>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub status: Option<ExhibitionStatus>,
}

impl ExhibitionPatch {
    pub fn apply(self, exhibition: &mut Exhibition) {
        if let Some(title) = self.title {
            exhibition.title = title;
        }
        if let Some(location) = self.location {
            exhibition.location = location;
        }
        if let Some(description) = self.description {
            exhibition.description = description;
        }
        if let Some(start_date) = self.start_date {
            exhibition.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            exhibition.end_date = end_date;
        }
        if let Some(images) = self.images {
            exhibition.images = images.into_iter().filter(|u| !u.is_empty()).collect();
        }
        if let Some(featured) = self.featured {
            exhibition.featured = featured;
        }
        if let Some(status) = self.status {
            exhibition.status = status;
        }
    }
}

/// Partial update of the about page
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AboutPatch {
    pub name: Option<String>,
    pub biography: Option<String>,
    pub profile_image: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
    pub html_content: Option<String>,
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,
    pub location: Option<String>,
}

impl AboutPatch {
    pub fn apply(self, about: &mut AboutData) {
        if let Some(name) = self.name {
            about.name = name;
        }
        if let Some(biography) = self.biography {
            about.biography = biography;
        }
        if let Some(profile_image) = self.profile_image {
            about.profile_image = profile_image;
        }
        if let Some(social_links) = self.social_links {
            about.social_links = social_links;
        }
        if let Some(html_content) = self.html_content {
            about.html_content = html_content;
        }
        if let Some(email) = self.email {
            about.email = email;
        }
        if let Some(location) = self.location {
            about.location = location;
        }
    }
}

/// Partial palette
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ColorsPatch {
    #[validate(custom(function = "validate_hex_color"))]
    pub primary: Option<String>,
    #[validate(custom(function = "validate_hex_color"))]
    pub secondary: Option<String>,
    #[validate(custom(function = "validate_hex_color"))]
    pub accent: Option<String>,
}

impl ColorsPatch {
    fn apply(self, colors: &mut ThemeColors) {
        if let Some(primary) = self.primary {
            colors.primary = primary;
        }
        if let Some(secondary) = self.secondary {
            colors.secondary = secondary;
        }
        if let Some(accent) = self.accent {
            colors.accent = accent;
        }
    }
}

/// Theme update: dark-mode toggle and/or individual colors
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ThemeUpdate {
    pub is_dark: Option<bool>,
    #[validate(nested)]
    pub colors: Option<ColorsPatch>,
}

impl ThemeUpdate {
    pub fn apply(self, theme: &mut ThemeData) {
        if let Some(is_dark) = self.is_dark {
            theme.is_dark = is_dark;
        }
        if let Some(colors) = self.colors {
            colors.apply(&mut theme.colors);
        }
    }
}
