//! Application shell: owner of the canonical collection

use equipamentos_transport::{Equipamento, EquipamentoApi};
use log::{debug, error};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::form::EquipmentForm;
use crate::format::today;
use crate::header;
use crate::listing::Listing;
use crate::notify::{Toaster, MSG_DELETED, MSG_DELETE_FAILED, MSG_LOAD_FAILED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Create,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::List => "Listagem de Equipamentos",
            View::Create => "Registrar Equipamento",
        }
    }
}

/// Root component.
///
/// Holds the only authoritative copy of the collection. Every successful
/// mutation is followed by a full reload; nothing is patched in place.
pub struct Shell {
    api: Arc<dyn EquipamentoApi>,
    toaster: Toaster,
    equipamentos: Vec<Equipamento>,
    view: View,
    listing: Listing,
    form: EquipmentForm,
}

impl Shell {
    pub fn new(api: Arc<dyn EquipamentoApi>, toaster: Toaster) -> Self {
        Self {
            listing: Listing::new(Arc::clone(&api), toaster.clone()),
            form: EquipmentForm::new(today(), toaster.clone()),
            api,
            toaster,
            equipamentos: Vec::new(),
            view: View::List,
        }
    }

    /// The canonical collection, as last read from the backend
    pub fn equipamentos(&self) -> &[Equipamento] {
        &self.equipamentos
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut Listing {
        &mut self.listing
    }

    pub fn form(&self) -> &EquipmentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EquipmentForm {
        &mut self.form
    }

    /// Load the full collection and replace the current one.
    /// On failure the previous collection stays in place.
    pub async fn mount(&mut self) -> Result<()> {
        match self.api.list().await {
            Ok(records) => {
                debug!("Collection replaced with {} records", records.len());
                self.equipamentos = records;
                Ok(())
            }
            Err(e) => {
                error!("Error fetching equipamentos: {}", e);
                self.toaster.error(MSG_LOAD_FAILED);
                Err(e.into())
            }
        }
    }

    async fn refresh(&mut self) {
        if let Err(e) = self.mount().await {
            debug!("Keeping previous collection: {}", e);
        }
    }

    /// Switch views. Entering the create view mounts a fresh form.
    pub fn navigate(&mut self, view: View) {
        if view == View::Create && self.view != View::Create {
            self.form = EquipmentForm::new(today(), self.toaster.clone());
        }
        self.view = view;
    }

    /// Submit the create form and reload on success
    pub async fn submit_create(&mut self) -> Result<Equipamento> {
        let api = Arc::clone(&self.api);
        let created = self
            .form
            .submit(move |novo| async move { Ok::<_, Error>(api.create(&novo).await?) })
            .await?;

        debug!("Reloading after creating equipamento {}", created.id);
        self.refresh().await;
        Ok(created)
    }

    /// Delete record `id` and reload on success
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        let api = Arc::clone(&self.api);
        let outcome = self
            .listing
            .delete(id, move |id| async move { Ok::<_, Error>(api.delete(id).await?) })
            .await;

        if let Err(e) = outcome {
            error!("Error deleting equipamento {}: {}", id, e);
            self.toaster.error(MSG_DELETE_FAILED);
            return Err(e);
        }

        self.toaster.success(MSG_DELETED);
        self.refresh().await;
        Ok(())
    }

    /// Open the edit overlay on record `id` of the current collection
    pub fn edit(&mut self, id: i64) -> Result<()> {
        let record = self
            .equipamentos
            .iter()
            .find(|record| record.id == id)
            .ok_or(Error::NotFound(id))?;
        self.listing.begin_edit(record);
        Ok(())
    }

    /// Submit the open overlay. A successful edit reloads the collection.
    pub async fn submit_edit(&mut self) -> Result<Equipamento> {
        let merged = self.listing.submit_edit().await?;
        debug!("Edit of equipamento {} reported", merged.id);
        self.refresh().await;
        Ok(merged)
    }

    /// Header, tabs, active view and the toasts raised since the last render
    pub fn render(&mut self) -> String {
        let body = match self.view {
            View::List => self.listing.render(&self.equipamentos),
            View::Create => self.form.render(),
        };

        let mut out = format!("{}\n\n{}", header::render(self.view), body);
        for toast in self.toaster.drain() {
            out.push('\n');
            out.push_str(&toast.to_string());
        }
        out
    }
}
