// ── Lifecycle controller ──
//
// Create / Read / Update / Delete for one IP access list resource. Each entry
// point validates locally, routes a single remote call through the session's
// `ScopeRouter`, and commits the result to `ResourceData` only after that
// call has completed.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::backend::IpAccessListBackend;
use crate::error::{CoreError, Phase};
use crate::model::{ListId, ResourceData};
use crate::schema::{IP_ACCESS_LIST_SCHEMA, Schema};
use crate::scope::{Scope, ScopeRouter};

/// Result of a Read that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Observed state was refreshed from the remote.
    Present,
    /// The remote object is gone; the resource is now Absent.
    Gone,
}

/// Lifecycle controller for IP access lists, bound to one session scope.
#[derive(Debug)]
pub struct IpAccessListResource<A = ipacl_api::AccountClient, W = ipacl_api::WorkspaceClient> {
    router: ScopeRouter<A, W>,
}

impl<A, W> IpAccessListResource<A, W>
where
    A: IpAccessListBackend,
    W: IpAccessListBackend,
{
    pub fn new(router: ScopeRouter<A, W>) -> Self {
        Self { router }
    }

    /// The static field table this resource is declared with.
    pub fn schema() -> &'static Schema {
        &IP_ACCESS_LIST_SCHEMA
    }

    pub fn scope(&self) -> Scope {
        self.router.scope()
    }

    pub fn router(&self) -> &ScopeRouter<A, W> {
        &self.router
    }

    // ── Create ───────────────────────────────────────────────────────

    /// Create the remote list from the declared attributes.
    ///
    /// On success the resource becomes Present with the identifier the
    /// remote assigned. On any failure it stays Absent.
    pub async fn create(
        &self,
        data: &mut ResourceData,
        cancel: &CancellationToken,
    ) -> Result<(), CoreError> {
        let phase = Phase::Create;
        if data.is_present() {
            return Err(invalid_state(phase, data));
        }

        let request = IP_ACCESS_LIST_SCHEMA.to_create_request(data.attributes())?;
        let scope = self.scope();

        let id = guarded(
            phase,
            cancel,
            self.router
                .route(|a| a.create(&request), |w| w.create(&request)),
        )
        .await?
        .map_err(|source| CoreError::Remote {
            phase,
            scope,
            source,
        })?;

        info!(id = %id, %scope, "created IP access list");
        data.set_present(id);
        Ok(())
    }

    // ── Read ─────────────────────────────────────────────────────────

    /// Refresh observed state from the remote.
    ///
    /// A remote not-found is drift, not an error: the resource is set Absent
    /// and [`ReadOutcome::Gone`] is returned.
    pub async fn read(
        &self,
        data: &mut ResourceData,
        cancel: &CancellationToken,
    ) -> Result<ReadOutcome, CoreError> {
        let phase = Phase::Read;
        let id = require_present(phase, data)?;
        let scope = self.scope();

        let result = guarded(
            phase,
            cancel,
            self.router.route(|a| a.get(&id), |w| w.get(&id)),
        )
        .await?;

        match result {
            Ok(info) => {
                IP_ACCESS_LIST_SCHEMA.apply_response(&info, data.attributes_mut());
                debug!(id = %id, %scope, "refreshed IP access list");
                Ok(ReadOutcome::Present)
            }
            Err(e) if e.is_not_found() => {
                warn!(id = %id, %scope, "IP access list no longer exists remotely, removing from state");
                data.set_absent();
                Ok(ReadOutcome::Gone)
            }
            Err(source) => Err(CoreError::Remote {
                phase,
                scope,
                source,
            }),
        }
    }

    // ── Update ───────────────────────────────────────────────────────

    /// Push the declared attributes to the existing remote list.
    ///
    /// The identifier is never reassigned. On failure the remote object may
    /// or may not reflect the new values; the next Read resynchronizes.
    pub async fn update(
        &self,
        data: &mut ResourceData,
        cancel: &CancellationToken,
    ) -> Result<(), CoreError> {
        let phase = Phase::Update;
        let id = require_present(phase, data)?;
        let request = IP_ACCESS_LIST_SCHEMA.to_update_request(data.attributes(), id.clone())?;
        let scope = self.scope();

        let result = guarded(
            phase,
            cancel,
            self.router
                .route(|a| a.update(&request), |w| w.update(&request)),
        )
        .await?;

        match result {
            Ok(()) => {
                info!(id = %id, %scope, "updated IP access list");
                Ok(())
            }
            Err(source) => Err(CoreError::Remote {
                phase,
                scope,
                source,
            }),
        }
    }

    // ── Delete ───────────────────────────────────────────────────────

    /// Remove the remote list. Deleting an object that is already gone
    /// succeeds.
    pub async fn delete(
        &self,
        data: &mut ResourceData,
        cancel: &CancellationToken,
    ) -> Result<(), CoreError> {
        let phase = Phase::Delete;
        let id = require_present(phase, data)?;
        let scope = self.scope();

        let result = guarded(
            phase,
            cancel,
            self.router.route(|a| a.delete(&id), |w| w.delete(&id)),
        )
        .await?;

        match result {
            Ok(()) => info!(id = %id, %scope, "deleted IP access list"),
            Err(e) if e.is_not_found() => {
                debug!(id = %id, %scope, "IP access list already gone");
            }
            Err(source) => {
                return Err(CoreError::Remote {
                    phase,
                    scope,
                    source,
                });
            }
        }
        data.set_absent();
        Ok(())
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

fn invalid_state(phase: Phase, data: &ResourceData) -> CoreError {
    CoreError::InvalidState {
        phase,
        state: data.state().describe(),
    }
}

fn require_present(phase: Phase, data: &ResourceData) -> Result<ListId, CoreError> {
    data.id().cloned().ok_or_else(|| invalid_state(phase, data))
}

/// Drive `call` to completion unless `cancel` fires first.
///
/// A token that is already cancelled short-circuits without polling the call.
/// A call that has completed wins over a cancellation that arrives in the
/// same poll.
async fn guarded<T>(
    phase: Phase,
    cancel: &CancellationToken,
    call: impl Future<Output = T>,
) -> Result<T, CoreError> {
    if cancel.is_cancelled() {
        return Err(CoreError::Cancelled { phase });
    }
    tokio::select! {
        biased;
        output = call => Ok(output),
        () = cancel.cancelled() => Err(CoreError::Cancelled { phase }),
    }
}
