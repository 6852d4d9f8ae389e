//! Form State Controller — session-scoped input state for the resume form.
//!
//! Each session owns exactly one `FormState`; there is no global or static
//! storage, and no state is shared across sessions. The presentation layer
//! (out of scope here) renders whatever the form view reports and keys its
//! clearable widgets off the published widget identities.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub mod handlers;

/// Widget-key prefix for the resume upload control.
pub const RESUME_WIDGET: &str = "resume";
/// Widget-key prefix for the job-description text area.
pub const DESCRIPTION_WIDGET: &str = "desc";

/// An uploaded resume, held exactly as received. Text extraction happens at
/// analyze time, so a malformed file only surfaces when the user analyzes.
#[derive(Debug, Clone)]
pub struct UploadedResume {
    pub file_name: String,
    pub bytes: Bytes,
    pub uploaded_at: DateTime<Utc>,
}

/// Per-session input state: the uploaded file, the job-description text, and
/// the widget generation.
///
/// `generation` is a monotonic counter with no meaning beyond minting fresh
/// widget identities on every reset; nothing reads it except `widget_key`.
#[derive(Debug)]
pub struct FormState {
    resume: Option<UploadedResume>,
    job_description: String,
    generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            resume: None,
            job_description: String::new(),
            generation: 0,
        }
    }

    /// Replaces the stored resume unconditionally.
    pub fn set_resume(&mut self, resume: UploadedResume) {
        self.resume = Some(resume);
    }

    /// Replaces the job description unconditionally, empty string included.
    pub fn set_job_description(&mut self, text: String) {
        self.job_description = text;
    }

    /// Clears both inputs and mints a new widget generation, so the
    /// presentation layer discards cached widget state instead of reusing it.
    /// This is the only way to clear inputs; there is no partial reset.
    pub fn reset(&mut self) {
        self.resume = None;
        self.job_description.clear();
        self.generation += 1;
    }

    pub fn resume(&self) -> Option<&UploadedResume> {
        self.resume.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Derives a widget identity from the current generation. After a reset
    /// the key changes, so the widget is treated as brand-new and a stale
    /// selection never reappears.
    pub fn widget_key(&self, prefix: &str) -> String {
        format!("{prefix}_{}", self.generation)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// One user session: the sole owner of its form state.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub form: FormState,
    pub created_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            form: FormState::new(),
            created_at: Utc::now(),
        }
    }
}

/// In-memory session registry.
///
/// Every session sits behind its own `Mutex`. Holding that lock across the
/// analyze call is the suspend point: further actions on the same session
/// wait until the in-flight call completes or fails, while other sessions
/// proceed untouched. Sessions are never persisted and live for the process
/// lifetime.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Arc<Mutex<Session>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session with empty inputs and returns its handle.
    pub async fn create(&self) -> Arc<Mutex<Session>> {
        let session = Session::new();
        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        self.inner.write().await.insert(id, Arc::clone(&handle));
        handle
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<Session>>> {
        self.inner.read().await.get(&id).cloned()
    }
}
