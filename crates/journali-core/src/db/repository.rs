//! Note repository: the canonical note collection and its persistence

use super::blob_store::BlobStore;
use crate::error::Result;
use crate::models::{AudioRef, Note, NoteId};

/// Blob store key holding the JSON-encoded note collection
pub const NOTES_KEY: &str = "journal.notes.v1";

/// Owns the in-memory note collection and mirrors it into a `BlobStore`.
///
/// Every mutation ends with exactly one full-collection write.
pub struct NoteRepository<S> {
    store: S,
    notes: Vec<Note>,
}

impl<S: BlobStore> NoteRepository<S> {
    /// Load the collection from `store`.
    ///
    /// A missing, empty, or unreadable blob yields an empty collection.
    pub fn load(store: S) -> Self {
        let notes = decode_notes(&store);
        tracing::debug!("Loaded {} notes", notes.len());
        Self { store, notes }
    }

    /// Notes in storage order (newest insertions first)
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == *id)
    }

    /// Notes whose id string starts with `prefix`
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&Note> {
        let prefix = prefix.to_ascii_lowercase();
        self.notes
            .iter()
            .filter(|note| note.id.as_str().starts_with(&prefix))
            .collect()
    }

    /// Replace the note with the same id in place, or insert it at the front.
    pub fn upsert(&mut self, note: Note) -> Result<()> {
        if let Some(existing) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *existing = note;
        } else {
            self.notes.insert(0, note);
        }
        self.save()
    }

    /// Remove every note with this id. Absent ids are not an error.
    pub fn delete(&mut self, id: &NoteId) -> Result<()> {
        self.notes.retain(|note| note.id != *id);
        self.save()
    }

    /// Flip the bookmark flag. Absent ids are not an error.
    pub fn toggle_bookmark(&mut self, id: &NoteId) -> Result<()> {
        if let Some(note) = self.notes.iter_mut().find(|note| note.id == *id) {
            note.is_bookmarked = !note.is_bookmarked;
        }
        self.save()
    }

    /// Store a finished recording as a new voice note.
    pub fn add_voice_note(&mut self, audio: AudioRef) -> Result<Note> {
        let note = Note::voice(audio);
        self.upsert(note.clone())?;
        Ok(note)
    }

    /// Serialize the whole collection and overwrite the stored blob.
    ///
    /// On failure the in-memory collection keeps the mutation and the stored
    /// blob is left as it was.
    pub fn save(&mut self) -> Result<()> {
        let encoded = serde_json::to_vec(&self.notes).inspect_err(|error| {
            tracing::error!("Failed to encode {} notes: {error}", self.notes.len());
        })?;

        self.store
            .set(NOTES_KEY, &encoded)
            .inspect_err(|error| tracing::error!("Failed to persist notes: {error}"))?;

        tracing::debug!("Saved {} notes ({} bytes)", self.notes.len(), encoded.len());
        Ok(())
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store, for neighbouring keys such as
    /// preferences.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn decode_notes<S: BlobStore>(store: &S) -> Vec<Note> {
    let blob = match store.get(NOTES_KEY) {
        Ok(Some(blob)) if !blob.is_empty() => blob,
        Ok(_) => return Vec::new(),
        Err(error) => {
            tracing::warn!("Could not read stored notes, starting empty: {error}");
            return Vec::new();
        }
    };

    serde_json::from_slice(&blob).unwrap_or_else(|error| {
        tracing::warn!("Stored notes are unreadable, starting empty: {error}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryBlobStore;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn setup() -> NoteRepository<MemoryBlobStore> {
        NoteRepository::load(MemoryBlobStore::new())
    }

    fn persisted(repo: &NoteRepository<MemoryBlobStore>) -> Vec<Note> {
        let blob = repo.store().get(NOTES_KEY).unwrap().unwrap();
        serde_json::from_slice(&blob).unwrap()
    }

    /// Store whose writes always fail
    #[derive(Default)]
    struct ReadOnlyStore {
        inner: MemoryBlobStore,
    }

    impl BlobStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &[u8]) -> Result<()> {
            Err(Error::Storage("read-only".into()))
        }
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let repo = setup();
        assert!(repo.notes().is_empty());
    }

    #[test]
    fn test_load_empty_blob_is_empty() {
        let mut store = MemoryBlobStore::new();
        store.set(NOTES_KEY, b"").unwrap();

        let repo = NoteRepository::load(store);
        assert!(repo.notes().is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let mut store = MemoryBlobStore::new();
        store.set(NOTES_KEY, b"{not json").unwrap();

        let repo = NoteRepository::load(store);
        assert!(repo.notes().is_empty());
    }

    #[test]
    fn test_load_restores_saved_collection() {
        let mut repo = setup();
        repo.upsert(Note::new("First", "")).unwrap();
        repo.upsert(Note::new("Second", "body")).unwrap();
        let expected = repo.notes().to_vec();

        let reloaded = NoteRepository::load(repo.into_store());
        assert_eq!(reloaded.notes(), expected.as_slice());
    }

    #[test]
    fn test_upsert_inserts_at_front() {
        let mut repo = setup();
        let first = Note::new("First", "");
        let second = Note::new("Second", "");

        repo.upsert(first.clone()).unwrap();
        repo.upsert(second.clone()).unwrap();

        assert_eq!(repo.notes(), [second, first].as_slice());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut repo = setup();
        let a = Note::new("A", "");
        let b = Note::new("B", "");
        let c = Note::new("C", "");
        for note in [a.clone(), b.clone(), c.clone()] {
            repo.upsert(note).unwrap();
        }

        let mut edited = b.clone();
        edited.title = "B edited".to_string();
        edited.content = "more".to_string();
        repo.upsert(edited.clone()).unwrap();

        assert_eq!(repo.notes(), [c, edited.clone(), a].as_slice());
        assert_eq!(repo.get(&b.id).unwrap().date, b.date);
    }

    #[test]
    fn test_upsert_twice_is_idempotent() {
        let mut once = setup();
        let mut twice = setup();
        let note = Note::new("Same", "note");

        once.upsert(note.clone()).unwrap();
        twice.upsert(note.clone()).unwrap();
        twice.upsert(note).unwrap();

        assert_eq!(once.notes(), twice.notes());
    }

    #[test]
    fn test_repository_accepts_empty_title() {
        let mut repo = setup();
        repo.upsert(Note::draft()).unwrap();
        assert_eq!(repo.notes().len(), 1);
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let mut repo = setup();
        let keep = Note::new("Keep", "");
        let gone = Note::new("Gone", "");
        repo.upsert(keep.clone()).unwrap();
        repo.upsert(gone.clone()).unwrap();

        repo.delete(&gone.id).unwrap();
        let after_first = repo.notes().to_vec();
        repo.delete(&gone.id).unwrap();

        assert_eq!(repo.notes(), after_first.as_slice());
        assert_eq!(repo.notes(), [keep].as_slice());
    }

    #[test]
    fn test_toggle_bookmark_flips_and_ignores_unknown() {
        let mut repo = setup();
        let note = Note::new("A", "");
        repo.upsert(note.clone()).unwrap();

        repo.toggle_bookmark(&note.id).unwrap();
        assert!(repo.get(&note.id).unwrap().is_bookmarked);

        repo.toggle_bookmark(&note.id).unwrap();
        assert!(!repo.get(&note.id).unwrap().is_bookmarked);

        let before = repo.notes().to_vec();
        repo.toggle_bookmark(&NoteId::new()).unwrap();
        assert_eq!(repo.notes(), before.as_slice());
    }

    #[test]
    fn test_every_mutation_writes_once() {
        let mut repo = setup();
        let note = Note::new("A", "");

        repo.upsert(note.clone()).unwrap();
        repo.toggle_bookmark(&note.id).unwrap();
        repo.toggle_bookmark(&NoteId::new()).unwrap();
        repo.delete(&note.id).unwrap();
        repo.delete(&note.id).unwrap();

        assert_eq!(repo.store().write_count(), 5);
    }

    #[test]
    fn test_create_bookmark_delete_scenario() {
        let mut repo = setup();
        let note = Note::new("A", "");
        let id = note.id;

        repo.upsert(note).unwrap();
        assert_eq!(repo.notes().len(), 1);
        assert_eq!(persisted(&repo), repo.notes());

        repo.toggle_bookmark(&id).unwrap();
        assert!(repo.get(&id).unwrap().is_bookmarked);
        assert_eq!(persisted(&repo), repo.notes());

        repo.delete(&id).unwrap();
        assert!(repo.notes().is_empty());
        assert_eq!(persisted(&repo), repo.notes());
    }

    #[test]
    fn test_persisted_blob_tracks_mixed_operations() {
        let mut repo = setup();
        let mut ids = Vec::new();
        for i in 0..6 {
            let note = Note::new(format!("Entry {i}"), "x".repeat(i));
            ids.push(note.id);
            repo.upsert(note).unwrap();
            assert_eq!(persisted(&repo), repo.notes());
        }

        for (i, id) in ids.iter().enumerate() {
            if i % 2 == 0 {
                repo.toggle_bookmark(id).unwrap();
            } else {
                repo.delete(id).unwrap();
            }
            assert_eq!(persisted(&repo), repo.notes());
        }

        assert_eq!(repo.notes().len(), 3);
        assert!(repo.notes().iter().all(|note| note.is_bookmarked));
    }

    #[test]
    fn test_add_voice_note() {
        let mut repo = setup();
        let note = repo
            .add_voice_note(AudioRef::new("Documents/rec_9f2e1a.m4a"))
            .unwrap();

        assert_eq!(repo.notes(), [note.clone()].as_slice());
        assert_eq!(note.title, "Voice Note");
        assert_eq!(persisted(&repo)[0].audio_url, note.audio_url);
    }

    #[test]
    fn test_find_by_prefix() {
        let mut repo = setup();
        let note = Note::new("A", "");
        repo.upsert(note.clone()).unwrap();
        repo.upsert(Note::new("B", "")).unwrap();

        let matches = repo.find_by_prefix(&note.id.as_str().to_ascii_uppercase());
        assert_eq!(matches, vec![&note]);
        assert_eq!(repo.find_by_prefix("").len(), 2);
    }

    #[test]
    fn test_failed_save_is_reported_and_memory_keeps_change() {
        let mut repo = NoteRepository::load(ReadOnlyStore::default());
        let note = Note::new("Unsaved", "");

        let error = repo.upsert(note.clone()).unwrap_err();
        assert!(matches!(error, Error::Storage(_)));
        assert_eq!(repo.notes(), [note].as_slice());
    }
}
