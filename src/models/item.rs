//! Item (catalog entry) model and related types.
//!
//! Every item shares a common bibliographic record; the variant-specific fields
//! (book, magazine, multimedia) live in [`ItemDetails`], serialized under a `kind` tag
//! next to the common fields.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::ItemStatus;

/// Variant-specific payload of a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemDetails {
    Book {
        page_count: u32,
        edition: String,
        isbn: String,
    },
    Magazine {
        issue_number: u32,
        publication_date: String,
    },
    Multimedia {
        /// e.g. "DVD", "CD", "Audiobook"
        media_type: String,
        director_or_narrator: String,
        duration_minutes: u32,
    },
}

impl ItemDetails {
    pub fn kind(&self) -> &'static str {
        match self {
            ItemDetails::Book { .. } => "Book",
            ItemDetails::Magazine { .. } => "Magazine",
            ItemDetails::Multimedia { .. } => "Multimedia",
        }
    }
}

/// Full item model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub creator: String,
    pub publication_year: i32,
    pub publisher: String,
    pub genre: String,
    pub status: ItemStatus,
    #[serde(flatten)]
    pub details: ItemDetails,
}

/// Create item request. Status always starts as `Available`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewItem {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "creator is required"))]
    pub creator: String,
    pub publication_year: i32,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub genre: String,
    #[serde(flatten)]
    pub details: ItemDetails,
}

/// Partial item update; only the fields present are overwritten.
///
/// Variant fields that do not belong to the item's kind are ignored. Setting `status`
/// here is an administrative override and does not open or close any loan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub publication_year: Option<i32>,
    pub publisher: Option<String>,
    pub genre: Option<String>,
    pub status: Option<ItemStatus>,
    // Book
    pub page_count: Option<u32>,
    pub edition: Option<String>,
    pub isbn: Option<String>,
    // Magazine
    pub issue_number: Option<u32>,
    pub publication_date: Option<String>,
    // Multimedia
    pub media_type: Option<String>,
    pub director_or_narrator: Option<String>,
    pub duration_minutes: Option<u32>,
}

impl Item {
    pub fn from_new(id: i32, item: NewItem) -> Self {
        Self {
            id,
            title: item.title,
            creator: item.creator,
            publication_year: item.publication_year,
            publisher: item.publisher,
            genre: item.genre,
            status: ItemStatus::Available,
            details: item.details,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Available
    }

    /// Overwrite the fields named in `changes`, leaving the others untouched
    pub fn apply(&mut self, changes: UpdateItem) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(creator) = changes.creator {
            self.creator = creator;
        }
        if let Some(year) = changes.publication_year {
            self.publication_year = year;
        }
        if let Some(publisher) = changes.publisher {
            self.publisher = publisher;
        }
        if let Some(genre) = changes.genre {
            self.genre = genre;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }

        match &mut self.details {
            ItemDetails::Book { page_count, edition, isbn } => {
                if let Some(v) = changes.page_count {
                    *page_count = v;
                }
                if let Some(v) = changes.edition {
                    *edition = v;
                }
                if let Some(v) = changes.isbn {
                    *isbn = v;
                }
            }
            ItemDetails::Magazine { issue_number, publication_date } => {
                if let Some(v) = changes.issue_number {
                    *issue_number = v;
                }
                if let Some(v) = changes.publication_date {
                    *publication_date = v;
                }
            }
            ItemDetails::Multimedia { media_type, director_or_narrator, duration_minutes } => {
                if let Some(v) = changes.media_type {
                    *media_type = v;
                }
                if let Some(v) = changes.director_or_narrator {
                    *director_or_narrator = v;
                }
                if let Some(v) = changes.duration_minutes {
                    *duration_minutes = v;
                }
            }
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "  Title: {}", self.title)?;
        writeln!(f, "  Creator: {}", self.creator)?;
        writeln!(f, "  Published: {} by {}", self.publication_year, self.publisher)?;
        writeln!(f, "  Genre: {}", self.genre)?;
        writeln!(f, "  Status: {}", self.status)?;
        match &self.details {
            ItemDetails::Book { page_count, edition, isbn } => {
                writeln!(f, "  Type: Book")?;
                writeln!(f, "  ISBN: {}", isbn)?;
                writeln!(f, "  Pages: {}", page_count)?;
                write!(f, "  Edition: {}", edition)
            }
            ItemDetails::Magazine { issue_number, publication_date } => {
                writeln!(f, "  Type: Magazine")?;
                write!(f, "  Issue: {} ({})", issue_number, publication_date)
            }
            ItemDetails::Multimedia { media_type, director_or_narrator, duration_minutes } => {
                writeln!(f, "  Type: {}", media_type)?;
                writeln!(f, "  Director/Narrator: {}", director_or_narrator)?;
                write!(f, "  Duration: {} minutes", duration_minutes)
            }
        }
    }
}
