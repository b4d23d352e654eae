// panenav demo binary
//
// Wires the library's navigators to a small CLI. Logging goes to a file -
// stdout belongs to the alternate screen while a navigator runs, and stray
// log lines would garble the display.

use anyhow::Result;
use clap::Parser;
use panenav::cli::{Cli, Commands};
use panenav::config::NavigatorConfig;
use panenav::demo;
use panenav::translate::Translator;
use panenav::{FileBrowser, GridEditor};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // File logging: ~/.config/panenav/panenav.log (falls back to ./panenav.log)
    let log_dir = NavigatorConfig::config_path()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    let appender = tracing_appender::rolling::never(log_dir, "panenav.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    NavigatorConfig::ensure_config_exists();
    let config = NavigatorConfig::from_env();

    match cli.command {
        Commands::Browse {
            path,
            directories_only,
            prompt,
        } => {
            let mut browser = FileBrowser::new(
                prompt,
                directories_only,
                path,
                config,
                Translator::default(),
            );
            match browser.select()? {
                Some(chosen) => println!("{}", chosen.display()),
                None => eprintln!("cancelled"),
            }
        }

        Commands::Edit {
            times,
            values,
            prompt,
        } => {
            let mut editor =
                GridEditor::new(prompt, &times, &values, config, Translator::default());
            let (times, values) = editor.edit()?;
            if times.is_empty() {
                eprintln!("cancelled");
            } else {
                for (t, v) in times.iter().zip(values.iter()) {
                    println!("{t}\t{v}");
                }
            }
        }

        Commands::Demo => {
            let root = demo::build_demo_tree()?;
            let mut browser = FileBrowser::new(
                "Demo: pick any file",
                false,
                root,
                config.clone(),
                Translator::default(),
            );
            if let Some(chosen) = browser.select()? {
                println!("browsed to: {}", chosen.display());
            }

            let mut editor = GridEditor::new(
                "Demo: edit the series (Ctrl+S to confirm)",
                &demo::DEMO_TIMES,
                &demo::DEMO_VALUES,
                config,
                Translator::default(),
            );
            let (times, values) = editor.edit()?;
            for (t, v) in times.iter().zip(values.iter()) {
                println!("{t}\t{v}");
            }
        }

        Commands::Config { path, show } => {
            if path {
                match NavigatorConfig::config_path() {
                    Some(p) => println!("{}", p.display()),
                    None => eprintln!("could not determine config path"),
                }
            } else if show {
                print!("{}", config.to_toml());
            } else {
                println!("Usage: panenav config [--path|--show]");
            }
        }
    }

    Ok(())
}
