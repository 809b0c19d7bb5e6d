//! Registration form for new equipamentos

use chrono::NaiveDate;
use equipamentos_transport::{NovoEquipamento, Status};
use log::{debug, error};
use std::future::Future;

use crate::draft::Draft;
use crate::error::{Error, Result};
use crate::format::iso_date;
use crate::notify::{Toaster, MSG_CREATED, MSG_CREATE_FAILED, MSG_REQUIRED_FIELDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
}

/// Create form. It owns its draft and never talks to the backend itself.
#[derive(Debug)]
pub struct EquipmentForm {
    initial: NovoEquipamento,
    draft: Draft,
    state: FormState,
    toaster: Toaster,
}

impl EquipmentForm {
    /// Fresh form with every date set to `today`
    pub fn new(today: NaiveDate, toaster: Toaster) -> Self {
        let initial = NovoEquipamento {
            status: Status::EmEstoque,
            data_ultima_manutencao: Some(today),
            data_proxima_manutencao: Some(today),
            ..NovoEquipamento::empty(today)
        };

        Self {
            draft: Draft::new(initial.clone()),
            initial,
            state: FormState::Editing,
            toaster,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Required fields still empty
    pub fn validate(&self) -> Result<()> {
        let missing = self.draft.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(missing))
        }
    }

    /// Validate the draft and hand it to `on_submit`.
    ///
    /// An invalid draft is rejected with [`Error::Validation`] and
    /// `on_submit` is not called. Otherwise the form waits for the callback:
    /// success resets the draft, failure keeps it for another attempt.
    pub async fn submit<F, Fut, T>(&mut self, on_submit: F) -> Result<T>
    where
        F: FnOnce(NovoEquipamento) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Err(e) = self.validate() {
            debug!("Create rejected: {}", e);
            self.toaster.error(MSG_REQUIRED_FIELDS);
            return Err(e);
        }

        self.state = FormState::Submitting;
        let payload = self.draft.to_payload();
        debug!(
            "Submitting equipamento {} purchased {}",
            payload.numero_serie,
            iso_date(payload.data_compra)
        );
        let outcome = on_submit(payload).await;
        self.state = FormState::Editing;

        match &outcome {
            Ok(_) => {
                self.toaster.success(MSG_CREATED);
                self.draft = Draft::new(self.initial.clone());
            }
            Err(e) => {
                error!("Failed to create equipamento: {}", e);
                self.toaster.error(MSG_CREATE_FAILED);
            }
        }

        outcome
    }

    pub fn render(&self) -> String {
        format!("Cadastro de Equipamentos\n{}", self.draft.render())
    }
}
