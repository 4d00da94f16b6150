use anyhow::Result;
use log::LevelFilter;
use schedview::cli::{CliArgs, Command, print_help};
use schedview::client::ShimClient;
use schedview::config::Config;
use schedview::context::{AppContext, StandardContext};
use schedview::logging;
use schedview::model::parse_events;
use schedview::source::ScheduleSource;
use schedview::store::ExportTree;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    let command = args.command()?;
    if command == Command::Help {
        print_help("schedview");
        return Ok(());
    }

    let ctx = StandardContext::new(args.config_root.clone());
    let cfg = Config::load(&ctx)?;

    // --root reads the tree directly; otherwise talk to schedview-serve.
    let source: Arc<dyn ScheduleSource> = match (&args.export_root, &args.server_url) {
        (Some(root), _) => Arc::new(ExportTree::new(root.clone())),
        (None, Some(url)) => Arc::new(ShimClient::new(url)?),
        (None, None) => Arc::new(ShimClient::new(&cfg.server_url)?),
    };

    match command {
        Command::List { run } => {
            logging::init_terminal(LevelFilter::Warn);
            let names = match run {
                Some(run) => source.list_files(&run).await?,
                None => source.list_runs().await?,
            };
            for name in names {
                println!("{}", name);
            }
            Ok(())
        }
        Command::Events { run, file } => {
            logging::init_terminal(LevelFilter::Warn);
            let text = source.fetch_file(&run, &file).await?;
            println!("{}", serde_json::to_string_pretty(&parse_events(&text))?);
            Ok(())
        }
        _ => {
            if let Some(path) = ctx.get_log_path() {
                logging::init_file(cfg.level_filter()?, &path)?;
            }
            schedview::tui::run(source).await
        }
    }
}
