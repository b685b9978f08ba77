#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use relache::{
    io,
    model::{Agent, Category},
    scheduler::{AllocateOptions, Scheduler, TieBreak, ViolationKind},
    storage::{JsonStorage, Storage},
    DAY_LABELS,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de répartition des repos (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de la flotte
    #[arg(long, global = true, default_value = "fleet.json")]
    fleet: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un agent
    AddAgent {
        #[arg(long)]
        name: String,
        /// van | truck | car | autre libellé
        #[arg(long)]
        category: String,
        #[arg(long)]
        priority: bool,
        #[arg(long)]
        preference_priority: bool,
        /// liste "0,6" ou "sat,sun"
        #[arg(long)]
        rest_days: Option<String>,
    },

    /// Retirer un agent (id ou nom)
    RemoveAgent {
        #[arg(long)]
        agent: String,
    },

    /// Importer des agents depuis un CSV
    ImportAgents {
        #[arg(long)]
        csv: String,
    },

    /// Basculer la priorité de travail
    TogglePriority {
        #[arg(long)]
        agent: String,
    },

    /// Basculer la priorité des jours souhaités
    TogglePreferencePriority {
        #[arg(long)]
        agent: String,
    },

    /// Ajouter/retirer un jour de repos souhaité (0 = lundi)
    ToggleRestDay {
        #[arg(long)]
        agent: String,
        #[arg(long)]
        day: u8,
    },

    /// Fixer les besoins quotidiens, ex. "8,8,8,8,8,6,6"
    SetNeeds {
        #[arg(long)]
        needs: String,
    },

    /// Lister agents et besoins
    List,

    /// Générer un planning de repos
    Generate {
        /// Départage pseudo-aléatoire reproductible
        #[arg(long, conflicts_with = "roster_order")]
        seed: Option<u64>,
        /// Départage selon l'ordre de la flotte
        #[arg(long)]
        roster_order: bool,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        /// Lundi de la semaine (YYYY-MM-DD), pour les en-têtes CSV
        #[arg(long)]
        week_start: Option<NaiveDate>,
    },

    /// Vérifier un planning JSON contre la flotte courante
    Check {
        #[arg(long)]
        schedule: String,
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

    let storage = JsonStorage::open(&cli.fleet)?;
    let mut scheduler = Scheduler::with_fleet(storage.load_or_default()?);

    let code = match cli.cmd {
        Commands::AddAgent {
            name,
            category,
            priority,
            preference_priority,
            rest_days,
        } => {
            if name.trim().is_empty() {
                bail!("agent name cannot be empty");
            }
            let category: Category = category.parse().map_err(anyhow::Error::msg)?;
            let mut agent = Agent::new(name.trim(), category);
            agent.priority = priority;
            agent.preference_priority = preference_priority;
            if let Some(days) = rest_days {
                agent.preferred_rest_days = io::parse_days(&days)?;
            }
            println!("{}", agent.id);
            scheduler.add_agents(vec![agent]);
            storage.save(scheduler.fleet())?;
            0
        }
        Commands::RemoveAgent { agent } => {
            let removed = scheduler.remove_agent(&agent)?;
            println!("removed {} ({})", removed.name, removed.id);
            storage.save(scheduler.fleet())?;
            0
        }
        Commands::ImportAgents { csv } => {
            let agents = io::import_agents_csv(csv)?;
            println!("imported {} agent(s)", agents.len());
            scheduler.add_agents(agents);
            storage.save(scheduler.fleet())?;
            0
        }
        Commands::TogglePriority { agent } => {
            let on = scheduler.toggle_priority(&agent)?;
            println!("priority: {on}");
            storage.save(scheduler.fleet())?;
            0
        }
        Commands::TogglePreferencePriority { agent } => {
            let on = scheduler.toggle_preference_priority(&agent)?;
            println!("preference priority: {on}");
            storage.save(scheduler.fleet())?;
            0
        }
        Commands::ToggleRestDay { agent, day } => {
            let on = scheduler.toggle_rest_day(&agent, day)?;
            println!("rest day {day}: {on}");
            storage.save(scheduler.fleet())?;
            0
        }
        Commands::SetNeeds { needs } => {
            scheduler.set_requirements(io::parse_needs(&needs)?);
            storage.save(scheduler.fleet())?;
            0
        }
        Commands::List => {
            let needs = scheduler.requirements();
            for (label, active) in DAY_LABELS.iter().zip(needs.as_array()) {
                println!("{label}: {active} active");
            }
            for a in &scheduler.fleet().agents {
                let days: Vec<&str> = a
                    .preferred_rest_days
                    .iter()
                    .filter_map(|d| DAY_LABELS.get(usize::from(*d)).copied())
                    .collect();
                println!(
                    "{} | {} | {} | prio={} pref_prio={} | {}",
                    a.id,
                    a.name,
                    a.category,
                    a.priority,
                    a.preference_priority,
                    days.join(",")
                );
            }
            0
        }
        Commands::Generate {
            seed,
            roster_order,
            out_json,
            out_csv,
            week_start,
        } => {
            let tie_break = match (seed, roster_order) {
                (Some(seed), _) => TieBreak::Seeded(seed),
                (None, true) => TieBreak::RosterOrder,
                (None, false) => TieBreak::AgentId,
            };
            scheduler.set_options(AllocateOptions { tie_break });
            let schedule = scheduler.generate()?;
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, scheduler.fleet(), &schedule, week_start)?;
            }
            println!("{}", schedule.render_text(&scheduler.fleet().agents));
            0
        }
        Commands::Check { schedule } => {
            let schedule = io::load_schedule_json(schedule)?;
            let violations = scheduler.verify(&schedule);
            if violations.is_empty() {
                println!("OK: schedule matches fleet and needs");
                0
            } else {
                eprintln!("Found {} violation(s)", violations.len());
                for v in &violations {
                    let agent = v.agent.as_ref().map_or("-", |id| id.as_str());
                    match &v.kind {
                        ViolationKind::QuotaMismatch {
                            day,
                            expected,
                            actual,
                        } => eprintln!(
                            "{}: expected {expected} resting, got {actual}",
                            DAY_LABELS[*day]
                        ),
                        ViolationKind::MissingAgent => {
                            eprintln!("{agent}: missing from schedule")
                        }
                        ViolationKind::UnknownAgent => eprintln!("{agent}: not in fleet"),
                    }
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}
