use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::debug;

use equipamentos::config::ClientOptions;
use equipamentos::draft::{DateField, Draft, Field};
use equipamentos::error::Error;
use equipamentos::format::parse_date_input;
use equipamentos::shell::View;
use equipamentos::transport::Status;
use equipamentos::Equipamentos;

#[derive(Parser, Debug)]
#[clap(
    name = "equipamentos",
    version,
    about = "List, register, edit and remove equipamentos"
)]
struct Cli {
    /// Collection URL of the backend, overrides EQUIPAMENTOS_API_URL
    #[clap(long)]
    api_url: Option<String>,

    /// Token sent as X-CSRFToken on updates, overrides EQUIPAMENTOS_CSRF_TOKEN
    #[clap(long)]
    csrf_token: Option<String>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every equipamento (default)
    List,
    /// Register a new equipamento
    Create(FieldArgs),
    /// Edit an equipamento; only the given fields change
    Edit {
        id: i64,
        #[clap(flatten)]
        fields: FieldArgs,
    },
    /// Remove an equipamento
    Delete { id: i64 },
}

#[derive(Args, Debug)]
struct FieldArgs {
    #[clap(long)]
    nome: Option<String>,
    #[clap(long)]
    tipo: Option<String>,
    #[clap(long)]
    fabricante: Option<String>,
    #[clap(long)]
    modelo: Option<String>,
    #[clap(long)]
    numero_serie: Option<String>,
    /// Em Uso, Em Estoque, Manutenção or Não Funcional
    #[clap(long)]
    status: Option<String>,
    /// dd/mm/yyyy or yyyy-mm-dd
    #[clap(long)]
    data_compra: Option<String>,
    /// e.g. 1500,00
    #[clap(long)]
    valor_compra: Option<String>,
    /// dd/mm/yyyy or yyyy-mm-dd; empty clears it
    #[clap(long)]
    data_ultima_manutencao: Option<String>,
    /// dd/mm/yyyy or yyyy-mm-dd; empty clears it
    #[clap(long)]
    data_proxima_manutencao: Option<String>,
    #[clap(long)]
    descricao: Option<String>,
}

impl FieldArgs {
    fn apply(&self, draft: &mut Draft) -> Result<(), Error> {
        let texts = [
            (Field::Nome, &self.nome),
            (Field::Tipo, &self.tipo),
            (Field::Fabricante, &self.fabricante),
            (Field::Modelo, &self.modelo),
            (Field::NumeroSerie, &self.numero_serie),
            (Field::Descricao, &self.descricao),
        ];
        for (field, value) in texts {
            if let Some(value) = value {
                draft.set_text(field, value);
            }
        }

        if let Some(status) = &self.status {
            let status: Status = status.parse().map_err(Error::invalid_input)?;
            draft.set_status(status);
        }

        if let Some(valor) = &self.valor_compra {
            draft.set_valor_compra(valor);
        }

        let dates = [
            (DateField::DataCompra, &self.data_compra),
            (DateField::DataUltimaManutencao, &self.data_ultima_manutencao),
            (DateField::DataProximaManutencao, &self.data_proxima_manutencao),
        ];
        for (field, value) in dates {
            if let Some(value) = value {
                draft.set_date(field, parse_date_input(value)?);
            }
        }

        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    // Environment and .env first, flags on top.
    let mut options = ClientOptions::from_env();
    if let Some(url) = cli.api_url {
        options = options.with_api_url(&url);
    }
    if cli.csrf_token.is_some() {
        options = options.with_csrf_token(cli.csrf_token);
    }

    let equipamentos =
        Equipamentos::new_with_options(options).context("invalid client configuration")?;
    let mut shell = equipamentos.shell();

    // Load failures surface as toasts in the rendered output.
    let _ = shell.mount().await;

    let outcome = match cli.command.unwrap_or(Command::List) {
        Command::List => Ok(()),
        Command::Create(fields) => {
            shell.navigate(View::Create);
            fields.apply(shell.form_mut().draft_mut())?;
            let outcome = shell.submit_create().await.map(|_| ());
            shell.navigate(View::List);
            outcome
        }
        Command::Edit { id, fields } => {
            shell.edit(id)?;
            if let Some(overlay) = shell.listing_mut().overlay_mut() {
                fields.apply(overlay.draft_mut())?;
            }
            shell.submit_edit().await.map(|_| ())
        }
        Command::Delete { id } => shell.delete(id).await,
    };

    if let Err(e) = outcome {
        debug!("Command did not complete: {}", e);
    }

    println!("{}", shell.render());
    Ok(())
}
