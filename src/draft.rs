//! Field-level editing shared by the create form and the edit overlay

use chrono::NaiveDate;
use equipamentos_transport::{NovoEquipamento, Status};
use log::warn;
use std::fmt::Write;

use crate::format::{format_currency, format_date, parse_currency_input};

/// Free-text fields of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nome,
    Tipo,
    Fabricante,
    Modelo,
    NumeroSerie,
    Descricao,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Nome,
        Field::Tipo,
        Field::Fabricante,
        Field::Modelo,
        Field::NumeroSerie,
        Field::Descricao,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Field::Nome => "nome",
            Field::Tipo => "tipo",
            Field::Fabricante => "fabricante",
            Field::Modelo => "modelo",
            Field::NumeroSerie => "numero_serie",
            Field::Descricao => "descricao",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Nome => "Nome",
            Field::Tipo => "Tipo",
            Field::Fabricante => "Fabricante",
            Field::Modelo => "Modelo",
            Field::NumeroSerie => "Número de Série",
            Field::Descricao => "Descrição",
        }
    }
}

/// Fields that must be non-empty before a draft is submitted
pub const REQUIRED_FIELDS: [Field; 4] = [
    Field::Tipo,
    Field::Fabricante,
    Field::Modelo,
    Field::NumeroSerie,
];

/// Date fields of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    DataCompra,
    DataUltimaManutencao,
    DataProximaManutencao,
}

impl DateField {
    pub fn name(&self) -> &'static str {
        match self {
            DateField::DataCompra => "data_compra",
            DateField::DataUltimaManutencao => "data_ultima_manutencao",
            DateField::DataProximaManutencao => "data_proxima_manutencao",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateField::DataCompra => "Data de Compra",
            DateField::DataUltimaManutencao => "Data da Última Manutenção",
            DateField::DataProximaManutencao => "Data da Próxima Manutenção",
        }
    }
}

/// Working copy of a record's fields
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    values: NovoEquipamento,
}

impl Draft {
    pub fn new(values: NovoEquipamento) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &NovoEquipamento {
        &self.values
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Nome => &self.values.nome,
            Field::Tipo => &self.values.tipo,
            Field::Fabricante => &self.values.fabricante,
            Field::Modelo => &self.values.modelo,
            Field::NumeroSerie => &self.values.numero_serie,
            Field::Descricao => self.values.descricao.as_deref().unwrap_or_default(),
        }
    }

    pub fn set_text(&mut self, field: Field, value: &str) {
        let value = value.to_string();
        match field {
            Field::Nome => self.values.nome = value,
            Field::Tipo => self.values.tipo = value,
            Field::Fabricante => self.values.fabricante = value,
            Field::Modelo => self.values.modelo = value,
            Field::NumeroSerie => self.values.numero_serie = value,
            Field::Descricao => self.values.descricao = Some(value),
        }
    }

    pub fn status(&self) -> Status {
        self.values.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.values.status = status;
    }

    /// Store the value typed into the currency input
    pub fn set_valor_compra(&mut self, input: &str) {
        self.values.valor_compra = parse_currency_input(input);
    }

    pub fn valor_compra(&self) -> f64 {
        self.values.valor_compra
    }

    /// What the currency input shows, e.g. `150,50`
    pub fn valor_compra_display(&self) -> String {
        format_currency(self.values.valor_compra)
    }

    pub fn date(&self, field: DateField) -> Option<NaiveDate> {
        match field {
            DateField::DataCompra => Some(self.values.data_compra),
            DateField::DataUltimaManutencao => self.values.data_ultima_manutencao,
            DateField::DataProximaManutencao => self.values.data_proxima_manutencao,
        }
    }

    /// Select or clear a date. The purchase date cannot be cleared.
    pub fn set_date(&mut self, field: DateField, date: Option<NaiveDate>) {
        match field {
            DateField::DataCompra => match date {
                Some(date) => self.values.data_compra = date,
                None => warn!("Ignoring attempt to clear {}", field.name()),
            },
            DateField::DataUltimaManutencao => self.values.data_ultima_manutencao = date,
            DateField::DataProximaManutencao => self.values.data_proxima_manutencao = date,
        }
    }

    /// Wire names of the required fields that are still empty
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .filter(|field| self.text(**field).is_empty())
            .map(Field::name)
            .collect()
    }

    /// The payload to send. An empty description goes out as null.
    pub fn to_payload(&self) -> NovoEquipamento {
        let mut payload = self.values.clone();
        if payload.descricao.as_deref() == Some("") {
            payload.descricao = None;
        }
        payload
    }

    /// Text rendering of every input, one per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for field in Field::ALL.iter().take(5) {
            let _ = writeln!(out, "  {}: {}", field.label(), self.text(*field));
        }
        let _ = writeln!(out, "  Status: {}", self.values.status.label());
        for field in [
            DateField::DataCompra,
            DateField::DataUltimaManutencao,
            DateField::DataProximaManutencao,
        ] {
            let _ = writeln!(out, "  {}: {}", field.label(), format_date(self.date(field)));
        }
        let _ = writeln!(out, "  Valor de Compra: {}", self.valor_compra_display());
        let _ = writeln!(out, "  {}: {}", Field::Descricao.label(), self.text(Field::Descricao));
        out
    }
}
