//! Command-channel front for a task that owns the note repository.
//!
//! Callbacks that arrive off the main flow (a recorder finishing, say) send
//! commands through a [`JournalHandle`] instead of touching the collection.
//! The owner task applies commands one at a time in arrival order.

use tokio::sync::{mpsc, oneshot};

use crate::db::{BlobStore, NoteRepository};
use crate::error::{Error, Result};
use crate::models::{AudioRef, Note, NoteId};
use crate::query::{derive_displayed, SortMode};

const COMMAND_BUFFER: usize = 32;

enum Command {
    Upsert {
        note: Note,
        reply: oneshot::Sender<Result<()>>,
    },
    Delete {
        id: NoteId,
        reply: oneshot::Sender<Result<()>>,
    },
    ToggleBookmark {
        id: NoteId,
        reply: oneshot::Sender<Result<()>>,
    },
    AddVoiceNote {
        audio: AudioRef,
        reply: oneshot::Sender<Result<Note>>,
    },
    Snapshot {
        reply: oneshot::Sender<Vec<Note>>,
    },
    Query {
        search: String,
        sort: SortMode,
        reply: oneshot::Sender<Vec<Note>>,
    },
}

/// Cloneable handle to the repository-owning task.
#[derive(Clone)]
pub struct JournalHandle {
    tx: mpsc::Sender<Command>,
}

impl JournalHandle {
    /// Move `repository` into a new task on the current tokio runtime.
    ///
    /// The task stops once every handle is dropped.
    pub fn spawn<S>(repository: NoteRepository<S>) -> Self
    where
        S: BlobStore + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(run(repository, rx));
        Self { tx }
    }

    pub async fn upsert(&self, note: Note) -> Result<()> {
        self.request(|reply| Command::Upsert { note, reply }).await?
    }

    pub async fn delete(&self, id: NoteId) -> Result<()> {
        self.request(|reply| Command::Delete { id, reply }).await?
    }

    pub async fn toggle_bookmark(&self, id: NoteId) -> Result<()> {
        self.request(|reply| Command::ToggleBookmark { id, reply })
            .await?
    }

    /// Record a finished recording as a new voice note.
    pub async fn add_voice_note(&self, audio: AudioRef) -> Result<Note> {
        self.request(|reply| Command::AddVoiceNote { audio, reply })
            .await?
    }

    /// Copy of the collection in storage order
    pub async fn snapshot(&self) -> Result<Vec<Note>> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Displayed list for the given search term and sort mode
    pub async fn query(&self, search: impl Into<String>, sort: SortMode) -> Result<Vec<Note>> {
        let search = search.into();
        self.request(|reply| Command::Query {
            search,
            sort,
            reply,
        })
        .await
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(build(reply))
            .await
            .map_err(|_| Error::ChannelClosed)?;
        response.await.map_err(|_| Error::ChannelClosed)
    }
}

async fn run<S: BlobStore>(mut repository: NoteRepository<S>, mut rx: mpsc::Receiver<Command>) {
    while let Some(command) = rx.recv().await {
        // A dropped reply receiver only means the caller stopped waiting.
        match command {
            Command::Upsert { note, reply } => {
                let _ = reply.send(repository.upsert(note));
            }
            Command::Delete { id, reply } => {
                let _ = reply.send(repository.delete(&id));
            }
            Command::ToggleBookmark { id, reply } => {
                let _ = reply.send(repository.toggle_bookmark(&id));
            }
            Command::AddVoiceNote { audio, reply } => {
                let _ = reply.send(repository.add_voice_note(audio));
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(repository.notes().to_vec());
            }
            Command::Query {
                search,
                sort,
                reply,
            } => {
                let _ = reply.send(derive_displayed(repository.notes(), &search, sort));
            }
        }
    }

    tracing::debug!("Journal task stopped; all handles dropped");
}
