//! Discovery of repositories and collection of facts about them
//!
//! Entries are discovered by parsing an index document (an "awesome list") with
//! [`extract_entries`]. Each [`Entry`] is then enriched by the [`MetadataCollector`],
//! which queries the hosting service through the [`HostingApi`](hosting::HostingApi) seam
//! for stars, forks, license and recent issue activity.
//!
//! Failures talking to the hosting service are reported as a [`CollectionError`] carrying
//! a [`CollectionErrorCode`]. None of them are retried here.

mod collection_error;
mod collector;
mod entry;
pub mod hosting;
mod index;
mod progress;

pub use collection_error::{CollectionError, CollectionErrorCode};
pub use collector::{CollectionConfig, MetadataCollector};
pub use entry::{Entry, EntryMetadata, License};
pub use index::extract_entries;
pub use progress::Progress;
