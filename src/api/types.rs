//! Art Institute of Chicago API response types.
//!
//! These types model the `GET /api/v1/artworks` collection listing.

use serde::{Deserialize, Serialize};

/// Stable identifier of an artwork record.
pub type RecordId = u64;

/// Fields requested from the API when none are configured.
pub const DEFAULT_FIELDS: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

/// A single artwork record.
///
/// Only `id` is required; every display field may be missing or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    /// The artwork ID, stable across requests.
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// Create an artwork with only an ID and a title.
    pub fn new(id: RecordId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Get the title, or "Untitled" if not set.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get the place of origin, or an empty string.
    pub fn place_of_origin(&self) -> &str {
        self.place_of_origin.as_deref().unwrap_or("")
    }

    /// Get the artist display line with embedded newlines flattened.
    pub fn artist(&self) -> String {
        self.artist_display
            .as_deref()
            .unwrap_or("")
            .replace('\n', ", ")
    }

    /// Get the inscriptions with embedded newlines flattened.
    pub fn inscriptions(&self) -> String {
        self.inscriptions
            .as_deref()
            .unwrap_or("")
            .replace('\n', " ")
    }

    /// Format the start date for display.
    pub fn date_start_display(&self) -> String {
        format_year(self.date_start)
    }

    /// Format the end date for display.
    pub fn date_end_display(&self) -> String {
        format_year(self.date_end)
    }

    /// URL of the artwork's page on artic.edu.
    pub fn web_url(&self) -> String {
        format!("https://www.artic.edu/artworks/{}", self.id)
    }
}

fn format_year(year: Option<i64>) -> String {
    match year {
        Some(y) if y < 0 => format!("{} BCE", -y),
        Some(y) => y.to_string(),
        None => String::new(),
    }
}

/// Pagination metadata returned alongside each page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of records in the collection.
    #[serde(default)]
    pub total: u64,
}

/// Raw collection listing response.
///
/// Both `data` and `pagination` may be absent; they default to an empty page
/// with a total of zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtworkListResponse {
    #[serde(default)]
    pub data: Option<Vec<Artwork>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// One fetched page of artworks plus the collection's reported total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkPage {
    /// Records on this page, in API order.
    pub records: Vec<Artwork>,
    /// Total number of records in the whole collection.
    pub total: u64,
}

impl ArtworkPage {
    /// Create a page from records and a reported total.
    pub fn new(records: Vec<Artwork>, total: u64) -> Self {
        Self { records, total }
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// IDs of the records on this page, in order.
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|a| a.id).collect()
    }

    /// Check whether this page is shorter than the requested size,
    /// which means the collection is exhausted.
    pub fn is_short(&self, page_size: u32) -> bool {
        self.records.len() < page_size as usize
    }
}

impl From<ArtworkListResponse> for ArtworkPage {
    fn from(response: ArtworkListResponse) -> Self {
        Self {
            records: response.data.unwrap_or_default(),
            total: response.pagination.map(|p| p.total).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let json = r#"{
            "pagination": {"total": 129884, "limit": 2, "offset": 0, "total_pages": 64942, "current_page": 1},
            "data": [
                {
                    "id": 27992,
                    "title": "A Sunday on La Grande Jatte, 1884",
                    "place_of_origin": "France",
                    "artist_display": "Georges Seurat\nFrench, 1859-1891",
                    "inscriptions": null,
                    "date_start": 1884,
                    "date_end": 1886
                },
                {"id": 28560, "title": "The Bedroom"}
            ],
            "config": {"iiif_url": "https://www.artic.edu/iiif/2"}
        }"#;

        let response: ArtworkListResponse = serde_json::from_str(json).unwrap();
        let page = ArtworkPage::from(response);

        assert_eq!(page.total, 129884);
        assert_eq!(page.ids(), vec![27992, 28560]);
        assert_eq!(page.records[0].artist(), "Georges Seurat, French, 1859-1891");
        assert_eq!(page.records[0].inscriptions(), "");
        assert_eq!(page.records[1].place_of_origin(), "");
        assert_eq!(page.records[1].date_start, None);
    }

    #[test]
    fn test_missing_data_is_empty_page() {
        let response: ArtworkListResponse =
            serde_json::from_str(r#"{"pagination": {"total": 5}}"#).unwrap();
        let page = ArtworkPage::from(response);
        assert!(page.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_missing_pagination_total_is_zero() {
        let response: ArtworkListResponse =
            serde_json::from_str(r#"{"data": [{"id": 1}]}"#).unwrap();
        let page = ArtworkPage::from(response);
        assert_eq!(page.len(), 1);
        assert_eq!(page.total, 0);

        let response: ArtworkListResponse =
            serde_json::from_str(r#"{"data": [], "pagination": {}}"#).unwrap();
        assert_eq!(ArtworkPage::from(response).total, 0);
    }

    #[test]
    fn test_record_without_id_is_rejected() {
        let result = serde_json::from_str::<ArtworkListResponse>(r#"{"data": [{"title": "x"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_is_short() {
        let page = ArtworkPage::new((0..10).map(|i| Artwork::new(i, "t")).collect(), 10);
        assert!(page.is_short(12));
        assert!(!page.is_short(10));
    }

    #[test]
    fn test_display_helpers() {
        let mut artwork = Artwork::new(7, "Vase");
        artwork.date_start = Some(-500);
        artwork.date_end = Some(-450);
        assert_eq!(artwork.date_start_display(), "500 BCE");
        assert_eq!(artwork.date_end_display(), "450 BCE");
        assert_eq!(artwork.web_url(), "https://www.artic.edu/artworks/7");

        artwork.title = None;
        assert_eq!(artwork.title(), "Untitled");
    }
}
