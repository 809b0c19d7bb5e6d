//! Modal editor for an existing equipamento

use equipamentos_transport::{Equipamento, NovoEquipamento};
use log::debug;
use std::future::Future;

use crate::draft::Draft;
use crate::error::{Error, Result};
use crate::format::iso_date;
use crate::notify::{Toaster, MSG_REQUIRED_FIELDS};

/// Edit overlay seeded from one record.
///
/// The draft is copied from `initial` once, when the overlay opens. Changes
/// made to the source record afterwards are not picked up while it stays open.
#[derive(Debug)]
pub struct EditOverlay {
    initial: Equipamento,
    draft: Draft,
    open: bool,
    toaster: Toaster,
}

impl EditOverlay {
    pub fn open(initial: &Equipamento, toaster: Toaster) -> Self {
        Self {
            initial: initial.clone(),
            draft: Draft::new(NovoEquipamento::from(initial)),
            open: true,
            toaster,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The record the draft was seeded from
    pub fn initial_data(&self) -> &Equipamento {
        &self.initial
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Validate the draft, pass it to `on_update` and close.
    ///
    /// A draft with missing required fields stays open and `on_update` is
    /// not called. Otherwise the overlay closes once `on_update` returns,
    /// whatever its outcome, and that outcome is handed back.
    pub async fn submit<F, Fut, T>(&mut self, on_update: F) -> Result<T>
    where
        F: FnOnce(NovoEquipamento) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            debug!("Update of equipamento {} rejected", self.initial.id);
            self.toaster.error(MSG_REQUIRED_FIELDS);
            return Err(Error::Validation(missing));
        }

        let payload = self.draft.to_payload();
        debug!(
            "Updating equipamento {} (next maintenance {})",
            self.initial.id,
            payload
                .data_proxima_manutencao
                .map(iso_date)
                .unwrap_or_else(|| "none".to_string())
        );
        let outcome = on_update(payload).await;
        self.close();
        outcome
    }

    pub fn render(&self) -> String {
        format!(
            "Editar Equipamento #{}\n{}",
            self.initial.id,
            self.draft.render()
        )
    }
}
