use anyhow::Result;
use schedview::cli::{CliArgs, print_help};
use schedview::config::Config;
use schedview::context::StandardContext;
use schedview::logging;
use schedview::server::{self, ServerOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        print_help("schedview-serve");
        return Ok(());
    }

    let ctx = StandardContext::new(args.config_root.clone());
    let mut cfg = Config::load(&ctx)?;
    if let Some(root) = args.export_root {
        cfg.export_root = root;
    }
    if let Some(bind) = args.bind {
        cfg.bind = bind;
    }
    if args.static_dir.is_some() {
        cfg.static_dir = args.static_dir;
    }

    logging::init_terminal(cfg.level_filter()?);

    server::serve(ServerOptions {
        bind: cfg.bind_addr()?,
        export_root: cfg.export_root,
        static_dir: cfg.static_dir,
    })
    .await
}
