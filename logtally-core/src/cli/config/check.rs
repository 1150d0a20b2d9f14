use crate::conf::{ConfigError, load_config};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    let cfg = match load_config(&path, Path::new(".")) {
        Ok(cfg) => cfg,
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    };

    println!("✔ Config loaded successfully");
    println!("✔ bucket source: {}", cfg.analysis.bucket_source);
    println!("✔ output dir: {}", cfg.output.dir.display());
    if !cfg.output.write_files {
        println!("✔ report files disabled");
    }
    Ok(())
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{}: {}", "error".red().bold(), err);
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create a config file with:\n\
             \n\
             logtally config init",
        ),

        ConfigError::Parse { .. } => Some(
            "Expected layout:\n\
             \n\
             [analysis]\n\
             bucket_source = \"plain\"   # or \"bracketed\"\n\
             \n\
             [output]\n\
             dir         = \".\"\n\
             write_files = true\n\
             format      = \"table\"     # or \"json\"",
        ),

        ConfigError::OutputDirNotADirectory { .. } => Some(
            "`output.dir` points at an existing file.\n\
             \n\
             Choose a directory path instead.",
        ),
    }
}
