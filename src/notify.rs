//! Transient notifications (toasts)

use log::{info, warn};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const MSG_REQUIRED_FIELDS: &str = "Por favor, preencha todos os campos obrigatórios.";
pub const MSG_CREATED: &str = "Equipamento cadastrado com sucesso!";
pub const MSG_CREATE_FAILED: &str = "Erro ao cadastrar o equipamento.";
pub const MSG_UPDATED: &str = "Equipamento atualizado com sucesso!";
pub const MSG_UPDATE_FAILED: &str = "Erro ao atualizar o equipamento.";
pub const MSG_DELETED: &str = "Equipamento removido com sucesso!";
pub const MSG_DELETE_FAILED: &str = "Erro ao remover o equipamento.";
pub const MSG_LOAD_FAILED: &str = "Erro ao carregar os equipamentos.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.level {
            ToastLevel::Success => "✔",
            ToastLevel::Error => "✖",
        };
        write!(f, "{} {}", marker, self.message)
    }
}

/// Cloneable handle to a shared toast queue.
///
/// Every component that reports outcomes holds a clone. The shell drains the
/// queue when it renders.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    queue: Arc<Mutex<VecDeque<Toast>>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn success(&self, message: &str) {
        info!("{}", message);
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&self, message: &str) {
        warn!("{}", message);
        self.push(ToastLevel::Error, message);
    }

    fn push(&self, level: ToastLevel, message: &str) {
        self.lock().push_back(Toast {
            level,
            message: message.to_string(),
        });
    }

    /// Toasts not yet shown, oldest first
    pub fn pending(&self) -> Vec<Toast> {
        self.lock().iter().cloned().collect()
    }

    /// Take every pending toast, oldest first
    pub fn drain(&self) -> Vec<Toast> {
        self.lock().drain(..).collect()
    }
}
