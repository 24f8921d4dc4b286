//! Public camp photo gallery.

use std::sync::Arc;

use tracing::warn;

use lifeline_common::ports::repository::DocumentStore;

pub const GALLERY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPhoto {
    pub url: String,
    pub caption: String,
    /// `true` for the built-in pictures shown when the store has none.
    pub placeholder: bool,
}

const PLACEHOLDERS: [(&str, &str); 3] = [
    (
        "https://images.unsplash.com/photo-1615461166324-cd1f91f8b434?q=80&w=1000&auto=format&fit=crop",
        "Blood Donation Camp 2024",
    ),
    (
        "https://img.freepik.com/free-vector/blood-donation-concept-illustration_114360-1044.jpg",
        "Volunteer Donors",
    ),
    (
        "https://media.istockphoto.com/id/1212169974/vector/blood-donation-bag-with-tube-shaped-as-a-heart.jpg?s=612x612&w=0&k=20",
        "Save Lives",
    ),
];

/// Placeholders shown when the store cannot be read.
const OFFLINE_PLACEHOLDERS: usize = 2;

fn placeholders(count: usize) -> Vec<GalleryPhoto> {
    PLACEHOLDERS
        .iter()
        .take(count)
        .map(|(url, caption)| GalleryPhoto {
            url: url.to_string(),
            caption: caption.to_string(),
            placeholder: true,
        })
        .collect()
}

pub struct GalleryService {
    store: Arc<dyn DocumentStore>,
}

impl GalleryService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Newest camp photos. Never fails: an empty or unreadable store yields
    /// placeholders.
    pub async fn camp_photos(&self) -> Vec<GalleryPhoto> {
        match self.store.latest_photos(GALLERY_LIMIT).await {
            Ok(photos) if photos.is_empty() => placeholders(PLACEHOLDERS.len()),
            Ok(photos) => photos
                .into_iter()
                .map(|photo| GalleryPhoto {
                    url: photo.url,
                    caption: photo.caption,
                    placeholder: false,
                })
                .collect(),
            Err(err) => {
                warn!("Failed to load camp photos: {err}");
                placeholders(OFFLINE_PLACEHOLDERS)
            }
        }
    }
}
