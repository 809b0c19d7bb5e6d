//! Table of equipamentos with the edit flow

use equipamentos_transport::{Equipamento, EquipamentoApi};
use log::{debug, error};
use std::future::Future;
use std::sync::Arc;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Style},
};

use crate::edit::EditOverlay;
use crate::error::{Error, Result};
use crate::format::format_currency;
use crate::notify::{Toaster, MSG_UPDATED, MSG_UPDATE_FAILED};

const COLUMNS: [&str; 8] = [
    "ID",
    "Nome",
    "Tipo",
    "Fabricante",
    "Modelo",
    "Número de Série",
    "Status",
    "Valor",
];

/// Renders the collection and owns the "which record is being edited" state
pub struct Listing {
    api: Arc<dyn EquipamentoApi>,
    toaster: Toaster,
    selected: Option<Equipamento>,
    overlay: Option<EditOverlay>,
}

impl Listing {
    pub fn new(api: Arc<dyn EquipamentoApi>, toaster: Toaster) -> Self {
        Self {
            api,
            toaster,
            selected: None,
            overlay: None,
        }
    }

    /// Record selected for editing, `None` while the overlay is closed
    pub fn selected(&self) -> Option<&Equipamento> {
        self.selected.as_ref()
    }

    pub fn overlay(&self) -> Option<&EditOverlay> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut EditOverlay> {
        self.overlay.as_mut()
    }

    /// Select `record` and open the overlay on it.
    ///
    /// An overlay that is already open keeps the draft it was seeded with;
    /// only the selection moves.
    pub fn begin_edit(&mut self, record: &Equipamento) {
        self.selected = Some(record.clone());
        if self.overlay.is_none() {
            self.overlay = Some(EditOverlay::open(record, self.toaster.clone()));
        }
    }

    /// Close the overlay without saving
    pub fn cancel_edit(&mut self) {
        self.overlay = None;
        self.selected = None;
    }

    /// Row delete action. The removal itself is left to `on_delete`, which
    /// belongs to whoever owns the collection.
    ///
    /// Deleting the record being edited closes its overlay first.
    pub async fn delete<F, Fut>(&mut self, id: i64, on_delete: F) -> Result<()>
    where
        F: FnOnce(i64) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        if self.selected.as_ref().map(|record| record.id) == Some(id) {
            debug!("Closing overlay of equipamento {} before delete", id);
            self.cancel_edit();
        }
        on_delete(id).await
    }

    /// Send the overlay's draft to the backend as an update of the selected record.
    ///
    /// Returns the selected record with the submitted fields applied. The
    /// caller decides whether to reload the collection.
    pub async fn submit_edit(&mut self) -> Result<Equipamento> {
        let (overlay, selected) = match (self.overlay.as_mut(), self.selected.clone()) {
            (Some(overlay), Some(selected)) => (overlay, selected),
            _ => return Err(Error::invalid_input("no equipamento selected for editing")),
        };

        let api = Arc::clone(&self.api);
        let id = selected.id;
        let outcome = overlay
            .submit(move |draft| async move {
                api.update(id, &draft).await?;
                Ok::<_, Error>(draft)
            })
            .await;

        match outcome {
            Ok(draft) => {
                self.toaster.success(MSG_UPDATED);
                self.cancel_edit();
                Ok(selected.merge(&draft))
            }
            Err(Error::Validation(missing)) => Err(Error::Validation(missing)),
            Err(e) => {
                error!("Failed to update equipamento {}: {}", id, e);
                self.toaster.error(MSG_UPDATE_FAILED);
                self.cancel_edit();
                Err(e)
            }
        }
    }

    /// Text table of `records`, followed by the overlay when one is open
    pub fn render(&self, records: &[Equipamento]) -> String {
        let mut builder = Builder::default();
        builder.push_record(COLUMNS);
        for record in records {
            builder.push_record([
                record.id.to_string(),
                record.nome.clone(),
                record.tipo.clone(),
                record.fabricante.clone(),
                record.modelo.clone(),
                record.numero_serie.clone(),
                record.status.label().to_string(),
                format_currency(record.valor_compra),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(7..8), Alignment::right());

        let mut out = table.to_string();
        if let Some(overlay) = self.overlay.as_ref().filter(|o| o.is_open()) {
            out.push('\n');
            out.push_str(&overlay.render());
        }
        out
    }
}
