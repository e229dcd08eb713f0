#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use shift_roster::{
    export::{plan_sheet, ExportOptions},
    io,
    model::YearMonth,
    storage::{JsonStorage, Session, Storage},
};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planning mensuel d'équipe
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`, filtre via RUST_LOG)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de session
    #[arg(long, global = true, default_value = "roster.json")]
    session: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Démarrer une nouvelle session (efface l'existante)
    Init {
        /// YYYY-MM
        #[arg(long)]
        month: String,
    },

    /// Changer de mois (les cellules repartent à SA)
    Month {
        /// YYYY-MM
        #[arg(long)]
        month: String,
    },

    /// Ajouter un membre
    AddMember {
        #[arg(long)]
        name: String,
    },

    /// Retirer un membre (sa ligne est perdue)
    RemoveMember {
        #[arg(long)]
        name: String,
    },

    /// Importer des membres depuis un CSV (header `name`)
    ImportMembers {
        #[arg(long)]
        csv: String,
    },

    /// Modifier une cellule
    Set {
        #[arg(long)]
        member: String,
        /// Libellé du jour, ex. `4-Jan`
        #[arg(long)]
        day: String,
        /// SA, SB, SC, WFH, Leave, WO ou -
        #[arg(long, allow_hyphen_values = true)]
        code: String,
    },

    /// Appliquer un motif par défaut à un membre
    Apply {
        #[arg(long)]
        member: String,
        /// SA, SB, SC ou WFH
        #[arg(long, default_value = "SA")]
        shift: String,
        /// Sat-Sun, Sun-Mon ou Fri-Sat
        #[arg(long, default_value = "Sat-Sun")]
        weekend: String,
    },

    /// Afficher la grille courante
    Show,

    /// Exporter la grille (XLSX, et optionnellement CSV/JSON)
    Export {
        /// Fichier XLSX (défaut : nom suggéré)
        #[arg(long)]
        out: Option<String>,
        #[arg(long)]
        csv: Option<String>,
        #[arg(long)]
        json: Option<String>,
        #[arg(long, default_value = "Roster")]
        sheet_name: String,
        #[arg(long, default_value_t = 15)]
        member_min_width: usize,
        #[arg(long, default_value_t = 10)]
        day_min_width: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.session)?;
    let mut session = if storage.exists() {
        storage.load()?
    } else {
        Session::new(current_month()?)
    };

    match cli.cmd {
        Commands::Init { month } => {
            let month: YearMonth = month.parse()?;
            session = Session::new(month);
            storage.save(&session)?;
            println!("New roster for {} {}", month.full_name(), month.year());
        }
        Commands::Month { month } => {
            session.select_month(month.parse()?)?;
            storage.save(&session)?;
        }
        Commands::AddMember { name } => {
            session.add_member(&name)?;
            storage.save(&session)?;
        }
        Commands::RemoveMember { name } => {
            session.remove_member(&name)?;
            storage.save(&session)?;
        }
        Commands::ImportMembers { csv } => {
            let members = io::import_members_csv(&csv)?;
            for member in &members {
                session
                    .add_member(member.as_str())
                    .with_context(|| format!("importing {csv}"))?;
            }
            storage.save(&session)?;
            println!("Imported {} member(s)", members.len());
        }
        Commands::Set { member, day, code } => {
            session.set_cell(&member, &day, &code)?;
            storage.save(&session)?;
        }
        Commands::Apply {
            member,
            shift,
            weekend,
        } => {
            session.apply_default(&member, &shift, &weekend)?;
            storage.save(&session)?;
            println!("Applied {shift} with {weekend} off for {member}");
        }
        Commands::Show => {
            if session.members().is_empty() {
                println!("No team members yet: use `add-member`.");
            } else {
                let plan = plan_sheet(session.grid(), &ExportOptions::default())?;
                println!("{}", plan.to_text());
            }
        }
        Commands::Export {
            out,
            csv,
            json,
            sheet_name,
            member_min_width,
            day_min_width,
        } => {
            let opts = ExportOptions {
                sheet_name,
                member_column_min_width: member_min_width,
                day_column_min_width: day_min_width,
                ..ExportOptions::default()
            };
            let export = session.export(&opts)?;
            let path = out.unwrap_or(export.file_name);
            std::fs::write(&path, &export.bytes).with_context(|| format!("writing {path}"))?;
            if let Some(path) = csv {
                io::export_grid_csv(path, session.grid())?;
            }
            if let Some(path) = json {
                io::export_grid_json(path, session.grid())?;
            }
            println!("Roster exported to {path} ({})", export.mime);
        }
    }

    Ok(())
}

fn current_month() -> Result<YearMonth> {
    let today = Local::now().date_naive();
    Ok(YearMonth::new(today.year(), today.month())?)
}
