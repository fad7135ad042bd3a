//! CLI argument parsing.
//!
//! Hand-rolled so that parsing is a pure function of an iterator of strings
//! and can be tested without a process.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Evaluate the analytical model of a scenario
    Analyze {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
        /// Print JSON instead of text.
        json: bool,
    },
    /// Simulate a scenario
    Simulate {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
        /// Optional seed override.
        seed_override: Option<u64>,
        /// Print JSON instead of text.
        json: bool,
        /// Enable debug logging.
        verbose: bool,
    },
    /// Verify a seeded simulation is reproducible
    Verify {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
        /// Number of verification runs.
        runs: usize,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

/// Default number of `verify` runs.
pub const DEFAULT_VERIFY_RUNS: usize = 3;

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// The first item is the program name.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Whether debug logging was requested.
    #[must_use]
    pub fn verbose(&self) -> bool {
        matches!(self.command, Command::Simulate { verbose: true, .. })
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "analyze" => Self::parse_analyze_command(args),
            "simulate" => Self::parse_simulate_command(args),
            "verify" => Self::parse_verify_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    fn parse_analyze_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'analyze' command requires scenario path");
            return Command::Help;
        }

        Command::Analyze {
            scenario_path: PathBuf::from(&args[2]),
            json: args[3..].iter().any(|a| a == "--json"),
        }
    }

    fn parse_simulate_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'simulate' command requires scenario path");
            return Command::Help;
        }

        let mut seed_override = None;
        let mut json = false;
        let mut verbose = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    if i + 1 < args.len() {
                        match args[i + 1].parse() {
                            Ok(seed) => seed_override = Some(seed),
                            Err(_) => eprintln!("Warning: ignoring invalid seed '{}'", args[i + 1]),
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                _ => i += 1,
            }
        }

        Command::Simulate {
            scenario_path: PathBuf::from(&args[2]),
            seed_override,
            json,
            verbose,
        }
    }

    fn parse_verify_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'verify' command requires scenario path");
            return Command::Help;
        }

        let mut runs = DEFAULT_VERIFY_RUNS;
        if let Some(pos) = args.iter().skip(3).position(|a| a == "--runs") {
            if let Some(n) = args.get(pos + 4).and_then(|v| v.parse().ok()) {
                runs = n;
            }
        }

        Command::Verify {
            scenario_path: PathBuf::from(&args[2]),
            runs,
        }
    }
}
