//! Widget host glue: instance bookkeeping and the two update triggers
//! (scheduled refresh, explicit push from the main application). The host
//! environment drives everything here serially; the struct performs no
//! threading of its own.

use anyhow::Result;

use crate::models::UpdateMessage;
use crate::store::SharedStore;
use crate::view::{build_view, WidgetSize, WidgetView};

/// Stable handle the host uses to address one placed widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceId(u64);

/// One placed widget. An instance starts out uninitialized and becomes
/// rendered on its first refresh; every later trigger re-renders it from a
/// fresh store read, so there is no intermediate cached state to invalidate.
struct WidgetInstance {
    id: InstanceId,
    size: WidgetSize,
    view: Option<WidgetView>,
}

/// Tracks every active widget instance and reacts to triggers by re-reading
/// the shared store and rebuilding each instance's view.
pub struct WidgetHost {
    store: SharedStore,
    instances: Vec<WidgetInstance>,
    next_id: u64,
}

impl WidgetHost {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            instances: Vec::new(),
            next_id: 0,
        }
    }

    /// Initialize-on-first-add entry point. The instance is registered but
    /// not yet rendered; the host follows up with a refresh.
    pub fn add_instance(&mut self, size: WidgetSize) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.instances.push(WidgetInstance {
            id,
            size,
            view: None,
        });
        id
    }

    /// Teardown entry point, invoked when the host removes a widget. No
    /// cleanup beyond dropping the bookkeeping entry is required.
    pub fn remove_instance(&mut self, id: InstanceId) {
        self.instances.retain(|instance| instance.id != id);
    }

    /// Scheduled-refresh trigger: one fresh store read, then every active
    /// instance of every size gets a rebuilt view.
    pub fn refresh_all(&mut self) {
        let snapshot = self.store.read();
        for instance in &mut self.instances {
            instance.view = Some(build_view(&snapshot, instance.size));
        }
    }

    /// Explicit-push trigger: persist the payload into the native namespace
    /// of the shared store first, then re-render everything. Most recent
    /// write wins; there is no ordering guarantee against the scheduled
    /// trigger beyond that.
    pub fn handle_update(&mut self, message: &UpdateMessage) -> Result<()> {
        self.store.apply_update(message)?;
        self.refresh_all();
        Ok(())
    }

    /// Current view of one instance; `None` until its first refresh.
    pub fn view(&self, id: InstanceId) -> Option<&WidgetView> {
        self.instances
            .iter()
            .find(|instance| instance.id == id)
            .and_then(|instance| instance.view.as_ref())
    }

    /// Rendered views of all instances, in registration order. Instances
    /// still awaiting their first refresh are skipped.
    pub fn views(&self) -> impl Iterator<Item = &WidgetView> {
        self.instances
            .iter()
            .filter_map(|instance| instance.view.as_ref())
    }

    /// Instance-count enumeration the host exposes to the application.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}
