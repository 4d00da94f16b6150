// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing and help text.
use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// What the viewer binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive week view.
    Interactive,
    /// Print runs, or the files of one run.
    List { run: Option<String> },
    /// Print the parsed events of one export as JSON.
    Events { run: String, file: String },
    Help,
}

/// Flags shared by both binaries. `None` means "use the config value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config_root: Option<PathBuf>,
    pub export_root: Option<PathBuf>,
    pub server_url: Option<String>,
    pub bind: Option<String>,
    pub static_dir: Option<PathBuf>,
    pub positional: Vec<String>,
    pub help: bool,
}

impl CliArgs {
    /// Parses everything after the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = CliArgs::default();
        let mut args = args.into_iter().map(Into::<String>::into);
        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| anyhow!("Missing value for {}", flag))
            };
            match arg.as_str() {
                "-h" | "--help" | "help" => out.help = true,
                "-c" | "--config-root" => out.config_root = Some(value(&arg)?.into()),
                "-r" | "--root" => out.export_root = Some(value(&arg)?.into()),
                "-s" | "--server" => out.server_url = Some(value(&arg)?),
                "-b" | "--bind" => out.bind = Some(value(&arg)?),
                "--static" => out.static_dir = Some(value(&arg)?.into()),
                flag if flag.starts_with('-') => return Err(anyhow!("Unknown option '{}'", flag)),
                _ => out.positional.push(arg.clone()),
            }
        }
        if out.export_root.is_some() && out.server_url.is_some() {
            return Err(anyhow!("--root and --server are mutually exclusive"));
        }
        Ok(out)
    }

    /// Interprets the positional arguments of the viewer binary.
    pub fn command(&self) -> Result<Command> {
        if self.help {
            return Ok(Command::Help);
        }
        let pos: Vec<&str> = self.positional.iter().map(String::as_str).collect();
        match pos.as_slice() {
            [] => Ok(Command::Interactive),
            ["list"] => Ok(Command::List { run: None }),
            ["list", run] => Ok(Command::List {
                run: Some(run.to_string()),
            }),
            ["events", run, file] => Ok(Command::Events {
                run: run.to_string(),
                file: file.to_string(),
            }),
            _ => Err(anyhow!(
                "Unexpected arguments: {}",
                self.positional.join(" ")
            )),
        }
    }
}

pub fn print_help(binary_name: &str) {
    let is_server = binary_name.contains("serve");

    println!(
        "Schedview v{} - Weekly calendar viewer for schedule CSV exports ({})",
        env!("CARGO_PKG_VERSION"),
        if is_server { "local file API" } else { "TUI" }
    );
    println!();
    println!("USAGE:");
    if is_server {
        println!(
            "    {} [--root <dir>] [--bind <addr>] [--static <dir>]",
            binary_name
        );
    } else {
        println!("    {} [--root <dir> | --server <url>]", binary_name);
        println!("    {} list [<run>]", binary_name);
        println!("    {} events <run> <file>", binary_name);
    }
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <dir>          Export root (one directory per run).");
    if is_server {
        println!("    -b, --bind <addr>         Listen address (default 127.0.0.1:5173).");
        println!("    --static <dir>            Serve files from <dir> for non-API paths.");
    } else {
        println!("                              Reads the tree directly, no server needed.");
        println!("    -s, --server <url>        Address of schedview-serve.");
    }
    println!("    -c, --config-root <dir>   Use a different directory for config and logs.");
    println!("    -h, --help                Show this help message.");
    println!();

    if is_server {
        println!("ENDPOINTS:");
        println!("    GET /api/runs                    Run names, most recent first");
        println!("    GET /api/run/<run>/files         output<N>.csv names in order");
        println!("    GET /api/run/<run>/file/<file>   Raw CSV text");
    } else {
        println!("KEYBINDINGS:");
        println!("    Left / h      Previous export");
        println!("    Right / l     Next export");
        println!("    r / R         Next / previous run");
        println!("    ?             Toggle help");
        println!("    q / Esc       Quit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_interactive() {
        let args = CliArgs::parse(Vec::<String>::new()).unwrap();
        assert_eq!(args.command().unwrap(), Command::Interactive);
    }

    #[test]
    fn flags_and_subcommands() {
        let args = CliArgs::parse(["--root", "/tmp/out", "events", "r1", "output2.csv"]).unwrap();
        assert_eq!(args.export_root, Some(PathBuf::from("/tmp/out")));
        assert_eq!(
            args.command().unwrap(),
            Command::Events {
                run: "r1".to_string(),
                file: "output2.csv".to_string()
            }
        );

        let args = CliArgs::parse(["list", "-s", "http://h:1"]).unwrap();
        assert_eq!(args.server_url.as_deref(), Some("http://h:1"));
        assert_eq!(args.command().unwrap(), Command::List { run: None });
    }

    #[test]
    fn bad_input() {
        assert!(CliArgs::parse(["--root"]).is_err());
        assert!(CliArgs::parse(["--frobnicate"]).is_err());
        assert!(CliArgs::parse(["-r", "a", "-s", "b"]).is_err());
        assert!(CliArgs::parse(["events", "r1"]).unwrap().command().is_err());
        assert_eq!(
            CliArgs::parse(["-h"]).unwrap().command().unwrap(),
            Command::Help
        );
    }
}
