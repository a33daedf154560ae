//! staff-runner: drive an office by hand over JSON lines.
//!
//! Usage:
//!   staff-runner --seed 12345
//!   staff-runner --seed 12345 --rules data/rules.json
//!
//! One command per stdin line, one JSON response per stdout line:
//!   {"type":"hire","role":"manager","name":"M","salary":10000,"savings":20000}
//!   {"type":"hire","role":"temp","name":"A","manager":"M","salary":200,"savings":10000}
//!   {"type":"work","name":"A"}
//!   {"type":"interact","actor":"M","other":"A"}
//!   {"type":"set","name":"A","write":{"field":"happiness","value":80}}
//!   {"type":"show","name":"A"}

use anyhow::Result;
use staffsim_core::{
    event::EventLogEntry, rng::RngBank, Employee, FieldWrite, Office, Role, RulesConfig,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Hire {
        role: String,
        name: String,
        #[serde(default)]
        manager: Option<String>,
        salary: i64,
        #[serde(default)]
        savings: i64,
    },
    Set {
        name: String,
        write: FieldWrite,
    },
    Work {
        name: String,
    },
    DailyExpense {
        name: String,
    },
    Interact {
        actor: String,
        other: String,
    },
    Show {
        name: String,
    },
    GetState,
    Quit,
}

#[derive(serde::Serialize)]
struct UiState<'a> {
    seed:   u64,
    staff:  Vec<&'a Employee>,
    events: &'a [EventLogEntry],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let rules = match args.windows(2).find(|w| w[0] == "--rules") {
        Some(w) => RulesConfig::load(&w[1])?,
        None => RulesConfig::default(),
    };

    let mut office = Office::new(rules)?;
    let mut bank = RngBank::new(seed);
    log::info!("staff-runner: seed {seed}");

    run_ipc_loop(&mut office, &mut bank)
}

fn run_ipc_loop(office: &mut Office, bank: &mut RngBank) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e)?;
                continue;
            }
        };
        if matches!(cmd, IpcCommand::Quit) {
            break;
        }

        match handle_command(office, bank, cmd) {
            Ok(response) => writeln!(stdout, "{response}")?,
            Err(e) => {
                log::warn!("staff-runner: command failed: {e}");
                write_error(&mut stdout, &e)?;
                continue;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn handle_command(
    office: &mut Office,
    bank: &mut RngBank,
    cmd: IpcCommand,
) -> Result<serde_json::Value> {
    let response = match cmd {
        IpcCommand::Hire { role, name, manager, salary, savings } => {
            let role: Role = role.parse()?;
            let manager = manager.map(|m| office.id_of(&m)).transpose()?;
            let id = office.hire(role, name, manager, salary, savings)?;
            serde_json::json!({ "hired": id })
        }
        IpcCommand::Set { name, write } => {
            let id = office.id_of(&name)?;
            office.apply(id, write)?;
            serde_json::to_value(office.employee(id)?)?
        }
        IpcCommand::Work { name } => {
            let id = office.id_of(&name)?;
            let day = office.work(id, bank.stream(id))?;
            serde_json::to_value(day)?
        }
        IpcCommand::DailyExpense { name } => {
            let id = office.id_of(&name)?;
            serde_json::to_value(office.daily_expense(id)?)?
        }
        IpcCommand::Interact { actor, other } => {
            let actor = office.id_of(&actor)?;
            let other = office.id_of(&other)?;
            serde_json::to_value(office.interact(actor, other)?)?
        }
        IpcCommand::Show { name } => {
            let employee = office.employee(office.id_of(&name)?)?;
            serde_json::json!({ "display": employee.to_string() })
        }
        IpcCommand::GetState => serde_json::to_value(build_ui_state(office, bank))?,
        IpcCommand::Quit => serde_json::Value::Null,
    };
    Ok(response)
}

fn build_ui_state<'a>(office: &'a Office, bank: &RngBank) -> UiState<'a> {
    UiState {
        seed:   bank.master_seed(),
        staff:  office.iter().collect(),
        events: office.events(),
    }
}

fn write_error(stdout: &mut impl Write, e: &dyn std::fmt::Display) -> Result<()> {
    let err_json = serde_json::json!({ "error": e.to_string() });
    writeln!(stdout, "{err_json}")?;
    stdout.flush()?;
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
