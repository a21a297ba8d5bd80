mod http;


use clap::{Args, Parser, Subcommand};
use quality::{ApiError, LocalState, NewComment, QualityFilter, QualityStore, ReviewAction};
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use http::{ClientSetupError, ReqwestQualityApi};

type CliStore = QualityStore<ReqwestQualityApi, LocalState>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Setup(#[from] ClientSetupError),
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("--sub-status only applies with --status Terminado")]
    SubStatusWithoutFinished,
    #[error("backend did not confirm {action} for record {id}")]
    NotConfirmed { action: &'static str, id: i64 },
}

#[derive(Parser, Debug)]
#[command(name = "calidad-cli", about = "Calidad HYP quality-review CLI")]
struct Cli {
    #[arg(long, env = "CALIDAD_API_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Raw `Cookie` header value carrying the backend session.
    #[arg(long, env = "CALIDAD_SESSION_COOKIE")]
    session_cookie: Option<String>,

    /// User id sent with reviews and comments.
    #[arg(long, env = "CALIDAD_OPERATOR", default_value = quality::config::DEFAULT_OPERATOR)]
    operator: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the current session.
    Whoami,
    /// List quality records, optionally filtered.
    List(ListArgs),
    /// Show one record by primary id.
    Show { id: i64 },
    /// Show one record by external id.
    Vehicle { id_hd: i64 },
    /// Show the previous-phase snapshot of a vehicle.
    Previous { id_hd: i64 },
    /// List comments for a chip.
    Comments { id_chip: i64 },
    /// Add a comment to a chip.
    Comment {
        id_chip: i64,
        #[arg(long)]
        text: String,
    },
    Start { id: i64 },
    Approve { id: i64 },
    Reject { id: i64 },
    Finalize { id: i64 },
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    #[arg(long, default_value = "")]
    status: String,
    #[arg(long, default_value = "")]
    sub_status: String,
    #[arg(long, default_value = "")]
    plates: String,
    #[arg(long, default_value = "")]
    order: String,
}

impl ListArgs {
    fn filter(&self) -> Result<QualityFilter, CliError> {
        let mut filter = QualityFilter { plates: self.plates.clone(), order: self.order.clone(), ..QualityFilter::default() };
        filter.set_status(&self.status);
        if !self.sub_status.is_empty() {
            if !filter.sub_status_enabled() {
                return Err(CliError::SubStatusWithoutFinished);
            }
            filter.sub_status.clone_from(&self.sub_status);
        }
        Ok(filter)
    }
}

fn action_name(action: ReviewAction) -> &'static str {
    match action {
        ReviewAction::Start => "start",
        ReviewAction::Approve => "approve",
        ReviewAction::Reject => "reject",
        ReviewAction::Finalize => "finalize",
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let api = ReqwestQualityApi::new(cli.base_url.as_str(), cli.session_cookie.as_deref())?;
    let store = QualityStore::new(api, LocalState::default());
    let output = run(&store, &cli.operator, cli.command).await?;
    print_json(&output)
}

/// Execute one command and return what should be printed.
async fn run(store: &CliStore, operator: &str, command: Command) -> Result<Value, CliError> {
    match command {
        Command::Whoami => {
            store.check_session().await?;
            to_json(&store.snapshot().session)
        }
        Command::List(args) => {
            let filter = args.filter()?;
            store.load().await?;
            to_json(&filter.apply(&store.snapshot().items))
        }
        Command::Show { id } => {
            store.load_item(id).await?;
            to_json(&store.snapshot().item)
        }
        Command::Vehicle { id_hd } => {
            store.load_by_hd(id_hd).await?;
            to_json(&store.snapshot().item)
        }
        Command::Previous { id_hd } => {
            store.load_previous(id_hd).await?;
            to_json(&store.snapshot().previous)
        }
        Command::Comments { id_chip } => {
            store.load_comments(id_chip).await?;
            to_json(&store.snapshot().comments)
        }
        Command::Comment { id_chip, text } => {
            store.create_comment(&NewComment::operator(id_chip, operator, &text)).await?;
            to_json(&store.snapshot().comments)
        }
        Command::Start { id } => review(store, operator, ReviewAction::Start, id).await,
        Command::Approve { id } => review(store, operator, ReviewAction::Approve, id).await,
        Command::Reject { id } => review(store, operator, ReviewAction::Reject, id).await,
        Command::Finalize { id } => review(store, operator, ReviewAction::Finalize, id).await,
    }
}

/// Perform a review action, then re-list so the printed record reflects the
/// backend after the attempt.
async fn review(store: &CliStore, operator: &str, action: ReviewAction, id: i64) -> Result<Value, CliError> {
    let confirmed = store.perform(action, id, operator).await?;
    store.load().await?;
    let record = store.snapshot().items.into_iter().find(|r| r.id == id);
    let output = json!({
        "id": id,
        "action": action_name(action),
        "confirmed": confirmed,
        "record": record,
    });
    if confirmed {
        Ok(output)
    } else {
        print_json(&output)?;
        Err(CliError::NotConfirmed { action: action_name(action), id })
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
