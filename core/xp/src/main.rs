mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;


use std::process;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::{RunConfig, XpCommand};
use ports::inbound::UseCaseRunner;
use wiring::{wire_app, wire_farm, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, cmd: XpCommand) -> Result<i32, Error> {
        let command_name = cmd_name_for_log(&cmd);
        self.log(
            LogRecord::new(LogLevel::Debug, "command started")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            XpCommand::Help => {
                print_help();
                Ok(0)
            }
            XpCommand::DryRun(config) => {
                print_config(&config);
                Ok(0)
            }
            XpCommand::Run(config) => {
                self.log(
                    LogRecord::new(LogLevel::Debug, "effective configuration")
                        .kind("config")
                        .field("lessons", config.lessons)
                        .field("min_delay_ms", config.delay.min_ms())
                        .field("max_delay_ms", config.delay.max_ms())
                        .field("strategy", config.strategy.as_str()),
                );
                let use_case = wire_farm(config, &self.app)?;
                use_case.run().map(|_| 0).map_err(Error::from)
            }
        };

        let code = result.as_ref().copied().unwrap_or_else(|e| e.exit_code());
        self.log(
            LogRecord::new(LogLevel::Debug, "command finished")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        result
    }
}

fn cmd_name_for_log(cmd: &XpCommand) -> &'static str {
    match cmd {
        XpCommand::Help => "help",
        XpCommand::DryRun(_) => "dry-run",
        XpCommand::Run(_) => "run",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("xp: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    run_with_config(&config)
}

fn run_with_config(config: &Config) -> Result<i32, Error> {
    let app = wire_app(config.verbose, config.log_file.as_deref());
    let (cmd, notes) = config_to_command(config, app.env_resolver.as_ref())?;
    let runner = Runner { app };
    for note in notes {
        runner.log(LogRecord::new(LogLevel::Warn, note).kind("config"));
    }
    runner.run(cmd)
}

fn print_usage() {
    eprintln!("Usage: xp [options]");
}

fn print_help() {
    println!("Usage: xp [options]");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -n, --lessons <count>      Number of sessions to complete (default 5; 20 with --pace patient)");
    println!("  --pace <preset>            normal: wait 1-3 s between sessions; patient: wait 70-90 s");
    println!("  --min-delay-ms <ms>        Lower bound of the wait between sessions (inclusive)");
    println!("  --max-delay-ms <ms>        Upper bound of the wait between sessions (exclusive)");
    println!("  --strategy <strategy>      auto (default), practice, or unit-test");
    println!("  --skill-id <id>            Skill used for unit tests instead of looking it up in the course");
    println!("  --unit-index <index>       Unit index sent when completing a unit test (default 0)");
    println!("  --base-url <url>           API base URL");
    println!("  --config <path>            JSON config file");
    println!("  --log-file <path>          Append structured JSONL logs to this file");
    println!("  --dry-run                  Print the effective configuration and exit");
    println!("  -v, --verbose              Also print debug logs");
    println!("  --generate <shell>         Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  token, userId              Credentials (XP_TOKEN / XP_USER_ID also accepted). Surrounding quotes are ignored.");
    println!("  lessonsToComplete          Number of sessions (overridden by --lessons)");
    println!("  XP_CONFIG                  JSON config file (overridden by --config)");
}

fn print_config(config: &RunConfig) {
    println!("lessons:          {}", config.lessons);
    println!(
        "delay:            {}..{} ms",
        config.delay.min_ms(),
        config.delay.max_ms()
    );
    println!("strategy:         {}", config.strategy.as_str());
    match &config.skill_id_override {
        Some(id) => println!("skill id:         {}", id),
        None => println!("skill id:         (from course)"),
    }
    println!("unit index:       {}", config.unit_index);
    println!(
        "practice reward:  xpPromised={} happyHourBonusXp={}",
        config.rewards.practice.xp_promised, config.rewards.practice.happy_hour_bonus_xp
    );
    println!(
        "unit test reward: xpPromised={} happyHourBonusXp={}",
        config.rewards.unit_test.xp_promised, config.rewards.unit_test.happy_hour_bonus_xp
    );
    println!("session duration: {} s", config.session_duration_secs);
    println!("base url:         {}", config.api.base_url);
}
