//! Dashboard core: owns the in-memory plate collection and the add/edit
//! dialog state, and reconciles both with the remote resource API.

use shared::domain::{PlateDraft, PlateId, PlateRecord};
use shared::protocol::{CreatePlateRequest, UpdatePlateRequest};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

pub mod resource;

pub use resource::{ResourceClient, ResourceError};

const PLATES_PATH: &str = "foods";

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("no plate is open in the edit dialog")]
    NoEditTarget,
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// Broadcast after each successful patch of the local collection so a
/// presentation surface can re-render. Lagging receivers may drop events;
/// the snapshot accessors remain the source of truth.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    ListReloaded(usize),
    Created(PlateRecord),
    Updated(PlateRecord),
    Removed(PlateId),
}

#[derive(Default)]
struct DashboardState {
    plates: Vec<PlateRecord>,
    editing: Option<PlateRecord>,
    add_dialog_open: bool,
    edit_dialog_open: bool,
}

/// The list controller behind the plate dashboard.
///
/// The collection is a cache of server state: loaded wholesale by
/// [`load_plates`](Self::load_plates) and patched incrementally after each
/// mutation, so a stale entry only persists until the next reload. Every
/// remote operation returns a uniform `Result`; on failure the collection,
/// dialog flags, and edit target are left exactly as they were.
pub struct PlateDashboard {
    api: ResourceClient,
    inner: Mutex<DashboardState>,
    events: broadcast::Sender<DashboardEvent>,
}

impl PlateDashboard {
    pub fn new(api: ResourceClient) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            api,
            inner: Mutex::new(DashboardState::default()),
            events,
        }
    }

    /// Fetch the full collection and replace the local one wholesale.
    /// Serves both initial activation and manual refresh.
    pub async fn load_plates(&self) -> Result<Vec<PlateRecord>, DashboardError> {
        let plates: Vec<PlateRecord> = match self.api.get(PLATES_PATH).await {
            Ok(plates) => plates,
            Err(err) => {
                warn!(error = %err, "failed to load plate list");
                return Err(err.into());
            }
        };

        {
            let mut guard = self.inner.lock().await;
            guard.plates = plates.clone();
        }
        debug!(count = plates.len(), "plate list reloaded");
        let _ = self.events.send(DashboardEvent::ListReloaded(plates.len()));
        Ok(plates)
    }

    /// Create a plate from the add dialog's draft. New plates are always
    /// available. On success the server-assigned record joins the local
    /// collection and the add dialog closes.
    pub async fn create_plate(&self, draft: PlateDraft) -> Result<PlateRecord, DashboardError> {
        let request = CreatePlateRequest::from_draft(draft);
        let created: PlateRecord = match self.api.post(PLATES_PATH, &request).await {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "failed to create plate");
                return Err(err.into());
            }
        };

        {
            let mut guard = self.inner.lock().await;
            upsert_plate(&mut guard.plates, created.clone());
            guard.add_dialog_open = false;
        }
        let _ = self.events.send(DashboardEvent::Created(created.clone()));
        Ok(created)
    }

    /// Update the record currently open in the edit dialog, carrying its
    /// availability flag forward unchanged. On success the stale record is
    /// replaced by the server's response and the edit dialog closes.
    pub async fn update_plate(&self, draft: PlateDraft) -> Result<PlateRecord, DashboardError> {
        let target = {
            let guard = self.inner.lock().await;
            guard.editing.clone()
        }
        .ok_or(DashboardError::NoEditTarget)?;

        let request = UpdatePlateRequest::from_draft(draft, target.available);
        let path = format!("{PLATES_PATH}/{}", target.id.0);
        let updated: PlateRecord = match self.api.put(&path, &request).await {
            Ok(record) => record,
            Err(err) => {
                warn!(plate_id = target.id.0, error = %err, "failed to update plate");
                return Err(err.into());
            }
        };

        {
            let mut guard = self.inner.lock().await;
            guard.plates.retain(|plate| plate.id != target.id);
            upsert_plate(&mut guard.plates, updated.clone());
            guard.edit_dialog_open = false;
            guard.editing = None;
        }
        let _ = self.events.send(DashboardEvent::Updated(updated.clone()));
        Ok(updated)
    }

    /// Delete a plate by id. The local filter is a no-op when the id is
    /// already absent.
    pub async fn remove_plate(&self, id: PlateId) -> Result<(), DashboardError> {
        let path = format!("{PLATES_PATH}/{}", id.0);
        if let Err(err) = self.api.delete(&path).await {
            warn!(plate_id = id.0, error = %err, "failed to delete plate");
            return Err(err.into());
        }

        {
            let mut guard = self.inner.lock().await;
            guard.plates.retain(|plate| plate.id != id);
        }
        let _ = self.events.send(DashboardEvent::Removed(id));
        Ok(())
    }

    pub async fn open_add_dialog(&self) {
        self.inner.lock().await.add_dialog_open = true;
    }

    pub async fn close_add_dialog(&self) {
        self.inner.lock().await.add_dialog_open = false;
    }

    /// Load `plate` into the edit dialog and open it. A later call
    /// supersedes the previous target.
    pub async fn open_edit_dialog(&self, plate: PlateRecord) {
        let mut guard = self.inner.lock().await;
        guard.editing = Some(plate);
        guard.edit_dialog_open = true;
    }

    /// Close the edit dialog. The edit target survives until superseded or
    /// consumed by a successful update.
    pub async fn close_edit_dialog(&self) {
        self.inner.lock().await.edit_dialog_open = false;
    }

    pub async fn plates(&self) -> Vec<PlateRecord> {
        self.inner.lock().await.plates.clone()
    }

    pub async fn edit_target(&self) -> Option<PlateRecord> {
        self.inner.lock().await.editing.clone()
    }

    pub async fn is_add_dialog_open(&self) -> bool {
        self.inner.lock().await.add_dialog_open
    }

    pub async fn is_edit_dialog_open(&self) -> bool {
        self.inner.lock().await.edit_dialog_open
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }
}

// Collection invariant: at most one record per id.
fn upsert_plate(plates: &mut Vec<PlateRecord>, plate: PlateRecord) {
    plates.retain(|existing| existing.id != plate.id);
    plates.push(plate);
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
