//! Load-editor orchestration: wires the form to the services the way the
//! editing screen uses them.
//!
//! The initial fetches run concurrently and may complete in any order; a
//! slice that fails to load stays empty and the editor proceeds with partial
//! reference data.

use std::time::Duration;

use tokio::sync::watch;
use tracing::warn;

use crate::domain::{
    Carrier, ChargeKind, Client, Equipment, LoadStatus, LoadUpdate, Party,
};
use crate::error::{ClientError, ClientResult};
use crate::form::LoadForm;
use crate::services::{ApiClient, ChargesEditor, LoadsService, PartiesService, StatusPoller};

/// Known entities the pickers and multi-selects draw from.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub clients: Vec<Client>,
    pub carriers: Vec<Carrier>,
    pub shippers: Vec<Party>,
    pub consignees: Vec<Party>,
    pub equipments: Vec<Equipment>,
}

pub struct LoadEditor {
    api: ApiClient,
    loads: LoadsService,
    pub parties: PartiesService,
    pub form: LoadForm,
    pub reference: ReferenceData,
    pub updates: Vec<LoadUpdate>,
    /// Display id a new load will get once saved.
    pub next_display_id: Option<i64>,
    poller: Option<StatusPoller>,
    poll_interval: Duration,
}

fn or_empty<T>(result: ClientResult<Vec<T>>, what: &str) -> Vec<T> {
    match result {
        Ok(v) => v,
        Err(e) => {
            warn!(what, error = %e, "Reference fetch failed; continuing with partial data");
            Vec::new()
        }
    }
}

impl LoadEditor {
    async fn fetch_reference(parties: &PartiesService) -> ReferenceData {
        let (clients, carriers, shippers, consignees, equipments) = futures::join!(
            parties.clients(),
            parties.carriers(),
            parties.shippers(),
            parties.consignees(),
            parties.equipments(),
        );
        ReferenceData {
            clients: or_empty(clients, "clients"),
            carriers: or_empty(carriers, "carriers"),
            shippers: or_empty(shippers, "shippers"),
            consignees: or_empty(consignees, "consignees"),
            equipments: or_empty(equipments, "equipments"),
        }
    }

    /// Start a session for a load that doesn't exist yet.
    pub async fn open_new(api: ApiClient, poll_interval: Duration) -> Self {
        let loads = LoadsService::new(api.clone());
        let parties = PartiesService::new(api.clone());

        let (reference, next_id) = futures::join!(Self::fetch_reference(&parties), loads.next_id());
        let next_display_id = match next_id {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(error = %e, "Failed to fetch next load id");
                None
            }
        };

        Self {
            api,
            loads,
            parties,
            form: LoadForm::new(),
            reference,
            updates: Vec::new(),
            next_display_id,
            poller: None,
            poll_interval,
        }
    }

    /// Open an existing load for editing; starts the out-of-band status
    /// poller.
    pub async fn open_existing(
        api: ApiClient,
        id: i64,
        poll_interval: Duration,
    ) -> ClientResult<Self> {
        let loads = LoadsService::new(api.clone());
        let parties = PartiesService::new(api.clone());

        let (reference, load, updates) =
            futures::join!(Self::fetch_reference(&parties), loads.get(id), loads.updates(id));

        let load = load?;
        let form = LoadForm::from_load(&load);
        let poller = StatusPoller::spawn(loads.clone(), id, poll_interval, form.status);

        Ok(Self {
            api,
            loads,
            parties,
            form,
            reference,
            updates: or_empty(updates, "updates"),
            next_display_id: None,
            poller: Some(poller),
            poll_interval,
        })
    }

    /// Key used for checklist progress: the saved id, else the next display
    /// id, else a placeholder.
    pub fn load_key(&self) -> String {
        self.form
            .id
            .or(self.next_display_id)
            .map(|id| id.to_string())
            .unwrap_or_else(|| "new-load".to_string())
    }

    /// Out-of-band status changes observed by the poller, when one is
    /// running.
    pub fn status_updates(&self) -> Option<watch::Receiver<LoadStatus>> {
        self.poller.as_ref().map(|p| p.subscribe())
    }

    /// Persist the form (POST for new, PUT for existing), then re-fetch and
    /// re-hydrate so server-generated fields (pickup/dropoff numbers) land
    /// in the form.
    pub async fn save(&mut self) -> ClientResult<i64> {
        let payload = self.form.to_payload();

        let saved = match self.form.id {
            Some(id) => self.loads.update(id, &payload).await?,
            None => self.loads.create(&payload).await?,
        };
        let id = saved
            .id
            .or(self.form.id)
            .ok_or_else(|| ClientError::Decode("Saved load has no id".to_string()))?;

        let is_first_save = self.form.id.is_none();
        let full = self.loads.get(id).await?;
        self.form = LoadForm::from_load(&full);

        if is_first_save && self.poller.is_none() {
            self.poller = Some(StatusPoller::spawn(
                self.loads.clone(),
                id,
                self.poll_interval,
                self.form.status,
            ));
        }
        Ok(id)
    }

    /// Update the status locally and on the backend (when saved). Returns
    /// true when the caller should prompt for a carrier rating (delivery).
    pub async fn set_status(&mut self, status: LoadStatus) -> ClientResult<bool> {
        let normalized = LoadStatus::normalize(status.label());
        self.form.status = normalized;
        if let Some(id) = self.form.id {
            self.loads.set_status(id, normalized).await?;
        }
        Ok(normalized == LoadStatus::Delivered)
    }

    pub async fn post_update(&mut self, message: &str) -> ClientResult<()> {
        let Some(id) = self.form.id else {
            return Ok(());
        };
        let message = message.trim();
        if message.is_empty() {
            return Ok(());
        }
        self.loads.post_update(id, message).await?;
        self.updates = self.loads.updates(id).await?;
        Ok(())
    }

    /// Open the side-loaded additional-charges editor for one kind.
    pub async fn open_charges(&self, kind: ChargeKind) -> ClientResult<ChargesEditor> {
        ChargesEditor::open(self.api.clone(), self.form.id, kind).await
    }

    /// Tear down the session; stops the poller so nothing updates state
    /// after the view is gone.
    pub fn close(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop();
        }
    }
}

impl Drop for LoadEditor {
    fn drop(&mut self) {
        self.close();
    }
}
