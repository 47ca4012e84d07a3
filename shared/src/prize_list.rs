use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{MAX_PRIZES, MIN_PRIZES};
use crate::image_ref::ImageRef;
use crate::validation::NewPrizeRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeEntry {
    pub id: EntryId,
    pub name: String,
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrizeListError {
    MaxCapacityReached,
    MinCapacityReached,
    EmptyName,
    TooFewPrizes(usize),
    TooManyPrizes(usize),
    IndexOutOfRange { index: usize, len: usize },
    UnknownEntry(EntryId),
}

impl fmt::Display for PrizeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxCapacityReached => write!(f, "Cannot hold more than {} prizes", MAX_PRIZES),
            Self::MinCapacityReached => write!(f, "Cannot hold fewer than {} prizes", MIN_PRIZES),
            Self::EmptyName => write!(f, "Prize name is empty"),
            Self::TooFewPrizes(n) => write!(f, "{} prizes given, at least {} required", n, MIN_PRIZES),
            Self::TooManyPrizes(n) => write!(f, "{} prizes given, at most {} allowed", n, MAX_PRIZES),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Prize index {} out of range for {} prizes", index, len)
            }
            Self::UnknownEntry(id) => write!(f, "No prize with id {}", id.0),
        }
    }
}

impl std::error::Error for PrizeListError {}

/// A rejected `add`. The image is handed back so the caller keeps its
/// release obligation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRejected {
    pub error: PrizeListError,
    pub image: Option<ImageRef>,
}

impl fmt::Display for AddRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for AddRejected {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Ordered wheel prizes. Always holds between `MIN_PRIZES` and `MAX_PRIZES`
/// entries; order decides segment position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrizeList {
    entries: Vec<PrizeEntry>,
    next_id: u64,
}

impl PrizeList {
    pub fn new<I, S>(seed: I) -> Result<Self, PrizeListError>
    where
        I: IntoIterator<Item = (S, Option<ImageRef>)>,
        S: Into<String>,
    {
        let mut entries = Vec::new();
        let mut next_id = 0;
        for (name, image) in seed {
            let name = name.into();
            let request = NewPrizeRequest::new(name);
            if request.validate().is_err() {
                return Err(PrizeListError::EmptyName);
            }
            entries.push(PrizeEntry {
                id: EntryId(next_id),
                name: request.trimmed_name().to_string(),
                image,
            });
            next_id += 1;
        }

        if entries.len() < MIN_PRIZES {
            return Err(PrizeListError::TooFewPrizes(entries.len()));
        }
        if entries.len() > MAX_PRIZES {
            return Err(PrizeListError::TooManyPrizes(entries.len()));
        }

        Ok(Self { entries, next_id })
    }

    /// Builds a list of text-only prizes.
    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self, PrizeListError> {
        Self::new(names.into_iter().map(|name| (name, None)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_PRIZES
    }

    pub fn can_remove(&self) -> bool {
        self.entries.len() > MIN_PRIZES
    }

    pub fn entries(&self) -> &[PrizeEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PrizeEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn add(&mut self, name: &str, image: Option<ImageRef>) -> Result<EntryId, AddRejected> {
        let request = NewPrizeRequest::new(name);
        if request.validate().is_err() {
            debug!("Rejected prize with blank name");
            return Err(AddRejected { error: PrizeListError::EmptyName, image });
        }
        if !self.can_add() {
            debug!("Rejected prize '{}': wheel is full", request.trimmed_name());
            return Err(AddRejected { error: PrizeListError::MaxCapacityReached, image });
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(PrizeEntry {
            id,
            name: request.trimmed_name().to_string(),
            image,
        });
        debug!("Added prize {:?}, wheel now has {} segments", id, self.entries.len());
        Ok(id)
    }

    /// Removes the entry at `index`. The removed entry is returned so any
    /// local image it holds can be released.
    pub fn remove(&mut self, index: usize) -> Result<PrizeEntry, PrizeListError> {
        if index >= self.entries.len() {
            return Err(PrizeListError::IndexOutOfRange { index, len: self.entries.len() });
        }
        if !self.can_remove() {
            debug!("Rejected removal at {}: wheel is at minimum size", index);
            return Err(PrizeListError::MinCapacityReached);
        }
        Ok(self.entries.remove(index))
    }

    pub fn remove_by_id(&mut self, id: EntryId) -> Result<PrizeEntry, PrizeListError> {
        match self.position(id) {
            Some(index) => self.remove(index),
            None => {
                warn!("Tried to remove unknown prize {:?}", id);
                Err(PrizeListError::UnknownEntry(id))
            }
        }
    }

    /// Takes every local image reference still held by the list, leaving the
    /// entries text-only. Used on teardown.
    pub fn drain_releasable(&mut self) -> Vec<ImageRef> {
        let mut released = Vec::new();
        for entry in &mut self.entries {
            if entry.image.as_ref().is_some_and(ImageRef::needs_release) {
                if let Some(image) = entry.image.take() {
                    released.push(image);
                }
            }
        }
        released
    }
}

impl Default for PrizeList {
    /// The smallest valid wheel: one prize and one blank.
    fn default() -> Self {
        let entries = vec![
            PrizeEntry { id: EntryId(0), name: "Prize".to_string(), image: None },
            PrizeEntry { id: EntryId(1), name: "Try Again".to_string(), image: None },
        ];
        Self { entries, next_id: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let list = PrizeList::default();
        assert_eq!(list.len(), MIN_PRIZES);
        assert!(!list.can_remove());
        assert_eq!(list.names(), vec!["Prize", "Try Again"]);
    }

    fn list_of(n: usize) -> PrizeList {
        PrizeList::from_names((0..n).map(|i| format!("Prize {}", i))).unwrap()
    }

    #[test]
    fn test_seed_must_respect_bounds() {
        assert_eq!(PrizeList::from_names(["Only"]), Err(PrizeListError::TooFewPrizes(1)));
        let thirteen: Vec<String> = (0..13).map(|i| i.to_string()).collect();
        assert_eq!(PrizeList::from_names(thirteen), Err(PrizeListError::TooManyPrizes(13)));
        assert_eq!(PrizeList::from_names(["A", "  "]), Err(PrizeListError::EmptyName));
        assert_eq!(list_of(12).len(), 12);
    }

    #[test]
    fn test_add_succeeds_iff_below_max() {
        for n in MIN_PRIZES..=MAX_PRIZES {
            let mut list = list_of(n);
            let result = list.add("Speaker", None);
            assert_eq!(result.is_ok(), n < MAX_PRIZES, "add with {} prizes", n);
            let expected = if n < MAX_PRIZES { n + 1 } else { n };
            assert_eq!(list.len(), expected);
        }
    }

    #[test]
    fn test_remove_succeeds_iff_above_min() {
        for n in MIN_PRIZES..=MAX_PRIZES {
            let mut list = list_of(n);
            let result = list.remove(0);
            assert_eq!(result.is_ok(), n > MIN_PRIZES, "remove with {} prizes", n);
            let expected = if n > MIN_PRIZES { n - 1 } else { n };
            assert_eq!(list.len(), expected);
        }
    }

    #[test]
    fn test_add_trims_and_rejects_blank() {
        let mut list = list_of(2);
        let id = list.add("  Smart Watch \n", None).unwrap();
        assert_eq!(list.get(2).map(|e| e.name.as_str()), Some("Smart Watch"));
        assert_eq!(list.position(id), Some(2));

        let rejected = list.add("   ", None).unwrap_err();
        assert_eq!(rejected.error, PrizeListError::EmptyName);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_rejected_add_hands_image_back() {
        let mut list = list_of(MAX_PRIZES);
        let image = ImageRef::local("blob:preview");
        let rejected = list.add("Headphones", Some(image.clone())).unwrap_err();
        assert_eq!(rejected.error, PrizeListError::MaxCapacityReached);
        assert_eq!(rejected.image, Some(image));
    }

    #[test]
    fn test_remove_returns_entry_for_release() {
        let mut list = list_of(3);
        list.add("Camera", Some(ImageRef::local("blob:camera"))).unwrap();
        let removed = list.remove(3).unwrap();
        assert_eq!(removed.image, Some(ImageRef::local("blob:camera")));
        assert_eq!(
            list.remove(7),
            Err(PrizeListError::IndexOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_remove_by_id_with_duplicate_names() {
        let mut list = PrizeList::from_names(["Try Again", "Speaker", "Try Again"]).unwrap();
        let second_try_again = list.get(2).unwrap().id;
        let removed = list.remove_by_id(second_try_again).unwrap();
        assert_eq!(removed.id, second_try_again);
        assert_eq!(list.names(), vec!["Try Again", "Speaker"]);
        assert_eq!(list.get(0).map(|e| e.id), Some(EntryId(0)));
        assert_eq!(
            list.remove_by_id(second_try_again),
            Err(PrizeListError::UnknownEntry(second_try_again))
        );
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut list = list_of(3);
        let removed = list.remove(2).unwrap();
        let id = list.add("Replacement", None).unwrap();
        assert_ne!(removed.id, id);
    }

    #[test]
    fn test_drain_releasable_only_takes_local_images() {
        let mut list = PrizeList::new(vec![
            ("iPhone 17 Pro", Some(ImageRef::remote("/assets/iphone-17.png"))),
            ("Speaker", Some(ImageRef::local("blob:speaker"))),
            ("Try Again", None),
        ])
        .unwrap();
        let drained = list.drain_releasable();
        assert_eq!(drained, vec![ImageRef::local("blob:speaker")]);
        assert!(list.get(1).unwrap().image.is_none());
        assert!(list.get(0).unwrap().image.is_some());
        assert!(list.drain_releasable().is_empty());
    }
}
