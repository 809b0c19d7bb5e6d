//! Wire types for the equipment resource

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational status of an equipment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Em Uso")]
    EmUso,
    #[default]
    #[serde(rename = "Em Estoque")]
    EmEstoque,
    #[serde(rename = "Manutenção")]
    Manutencao,
    #[serde(rename = "Não Funcional")]
    NaoFuncional,
}

impl Status {
    /// Every status, in the order the UI offers them
    pub const ALL: [Status; 4] = [
        Status::EmUso,
        Status::EmEstoque,
        Status::Manutencao,
        Status::NaoFuncional,
    ];

    /// The exact string exchanged with the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::EmUso => "Em Uso",
            Status::EmEstoque => "Em Estoque",
            Status::Manutencao => "Manutenção",
            Status::NaoFuncional => "Não Funcional",
        }
    }

    /// The text shown for the option in a select box
    pub fn label(&self) -> &'static str {
        match self {
            Status::Manutencao => "Em Manutenção",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the four status values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status: {}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| {
                status.as_str().eq_ignore_ascii_case(wanted)
                    || status.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// An equipment record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipamento {
    pub id: i64,
    pub nome: String,
    pub tipo: String,
    pub fabricante: String,
    pub modelo: String,
    pub numero_serie: String,
    #[serde(default)]
    pub status: Status,
    pub data_compra: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_valor")]
    pub valor_compra: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_ultima_manutencao: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_proxima_manutencao: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

impl Equipamento {
    /// Applies every field of `draft` on top of this record, keeping its `id`.
    pub fn merge(&self, draft: &NovoEquipamento) -> Equipamento {
        draft.clone().with_id(self.id)
    }
}

/// Payload for creating or replacing a record. It carries every field but `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovoEquipamento {
    pub nome: String,
    pub tipo: String,
    pub fabricante: String,
    pub modelo: String,
    pub numero_serie: String,
    pub status: Status,
    pub data_compra: NaiveDate,
    pub valor_compra: f64,
    // Sent as null when absent so a replace clears the stored value.
    #[serde(default)]
    pub data_ultima_manutencao: Option<NaiveDate>,
    #[serde(default)]
    pub data_proxima_manutencao: Option<NaiveDate>,
    #[serde(default)]
    pub descricao: Option<String>,
}

impl NovoEquipamento {
    /// Blank draft dated `data_compra`, with the default status and a zero value
    pub fn empty(data_compra: NaiveDate) -> Self {
        Self {
            nome: String::new(),
            tipo: String::new(),
            fabricante: String::new(),
            modelo: String::new(),
            numero_serie: String::new(),
            status: Status::default(),
            data_compra,
            valor_compra: 0.0,
            data_ultima_manutencao: None,
            data_proxima_manutencao: None,
            descricao: None,
        }
    }

    /// Turns the payload into a stored record under `id`
    pub fn with_id(self, id: i64) -> Equipamento {
        Equipamento {
            id,
            nome: self.nome,
            tipo: self.tipo,
            fabricante: self.fabricante,
            modelo: self.modelo,
            numero_serie: self.numero_serie,
            status: self.status,
            data_compra: self.data_compra,
            valor_compra: self.valor_compra,
            data_ultima_manutencao: self.data_ultima_manutencao,
            data_proxima_manutencao: self.data_proxima_manutencao,
            descricao: self.descricao,
        }
    }
}

impl From<&Equipamento> for NovoEquipamento {
    fn from(record: &Equipamento) -> Self {
        Self {
            nome: record.nome.clone(),
            tipo: record.tipo.clone(),
            fabricante: record.fabricante.clone(),
            modelo: record.modelo.clone(),
            numero_serie: record.numero_serie.clone(),
            status: record.status,
            data_compra: record.data_compra,
            valor_compra: record.valor_compra,
            data_ultima_manutencao: record.data_ultima_manutencao,
            data_proxima_manutencao: record.data_proxima_manutencao,
            descricao: record.descricao.clone(),
        }
    }
}

// Decimal columns may come back as "150.50" instead of a number.
fn deserialize_valor<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Valor {
        Number(f64),
        Text(String),
        Null,
    }

    match Valor::deserialize(deserializer)? {
        Valor::Number(n) => Ok(n),
        Valor::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        Valor::Null => Ok(0.0),
    }
}
