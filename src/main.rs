use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use utilslib::config::{Command, FilesCommand, SortArgs, TimeCommand};
use utilslib::utils::error::ErrorCategory;
use utilslib::utils::{logger, validation::Validate};
use utilslib::{sort, CliConfig, FileManager, LocalFileStore, TimeValue, TomlConfig, UtilsError};

fn main() {
    let cli = CliConfig::parse();

    // 載入 TOML 配置
    let config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    // 初始化日誌
    if cli.log_json || config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose || config.verbose());
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &config) {
        tracing::error!("❌ {:#}", e);
        let exit_code = match e.downcast_ref::<UtilsError>() {
            Some(err) => {
                eprintln!("❌ {}", err.user_friendly_message());
                match err.category() {
                    ErrorCategory::Input => 2,
                    ErrorCategory::FileSystem => 3,
                    ErrorCategory::Platform => 4,
                    ErrorCategory::Configuration => 1,
                }
            }
            None => {
                eprintln!("❌ {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(command: Command, config: &TomlConfig) -> anyhow::Result<()> {
    let mut manager = FileManager::new(LocalFileStore::new(config.base_dir()));

    match command {
        Command::Sort(args) => run_sort(&manager, args, config),
        Command::Time { command } => run_time(command),
        Command::Files { command } => {
            let path = match command {
                FilesCommand::CreateFolder { parent, name } => manager.create_folder(parent, &name)?,
                FilesCommand::CreateFile { name, folder } => {
                    let folder = folder
                        .or_else(|| config.default_folder().map(Into::into))
                        .unwrap_or_default();
                    manager.create_file(folder, &name)?
                }
            };
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_sort(
    manager: &FileManager<LocalFileStore>,
    args: SortArgs,
    config: &TomlConfig,
) -> anyhow::Result<()> {
    let records = match &args.input {
        Some(path) => manager
            .read_lines(path)
            .with_context(|| format!("reading records from {}", path.display()))?,
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("reading records from stdin")?,
    };

    let kind = args.mode.unwrap_or_else(|| config.default_sort_kind());
    tracing::info!("Sorting {} records by {:?}", records.len(), kind);
    let sorted = sort(&records, kind)?;

    match &args.output {
        Some(path) => {
            manager.print(path, args.append, &sorted)?;
            tracing::info!("📁 Output saved to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            for record in &sorted {
                writeln!(stdout, "{}", record)?;
            }
        }
    }
    Ok(())
}

fn run_time(command: TimeCommand) -> anyhow::Result<()> {
    let (time, fields, json) = match command {
        TimeCommand::Format { millis, fields, json } => {
            (TimeValue::from_milliseconds(millis)?, fields, json)
        }
        TimeCommand::Diff {
            minuend,
            subtrahend,
            clock,
            json,
        } => {
            let a = TimeValue::from_milliseconds(minuend)?;
            let b = TimeValue::from_milliseconds(subtrahend)?;
            let diff = if clock {
                a.clock_difference_from(&b)?
            } else {
                a.difference_from(&b)?
            };
            (diff, Vec::new(), json)
        }
    };

    if json {
        println!("{}", serde_json::to_string(&time).map_err(UtilsError::from)?);
    } else if fields.is_empty() {
        println!("{}", time);
    } else {
        println!("{}", time.format_selected(&fields));
    }
    Ok(())
}
