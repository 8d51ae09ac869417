use std::error::Error;
use std::io::{self, IsTerminal};
use subnet_calc::actions::{run_analyze, run_locate, run_split};
use subnet_calc::cli::{Commands, CommandLine};
use subnet_calc::config::Config;
use subnet_calc::interactive::Menu;
use subnet_calc::logging::{init_logging, LOG_CONFIG_FILE};
use subnet_calc::output::Ui;
use subnet_calc::Goal;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging(LOG_CONFIG_FILE)?;
    log::info!("#Start main()");

    let args = CommandLine::parse_args();
    let config = args.apply(Config::from_env());
    let ui = Ui::new(config.use_color && io::stdout().is_terminal());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match args.command.clone().unwrap_or(Commands::Menu) {
        Commands::Count { network, n } => {
            run_split(&mut out, ui, &config, network, Goal::ByCount(n), &args.export).map(|_| ())
        }
        Commands::Prefix { network, prefix } => run_split(
            &mut out,
            ui,
            &config,
            network,
            Goal::ByPrefix(prefix),
            &args.export,
        )
        .map(|_| ()),
        Commands::Hosts { network, hosts } => run_split(
            &mut out,
            ui,
            &config,
            network,
            Goal::ByHosts(hosts),
            &args.export,
        )
        .map(|_| ()),
        Commands::Locate {
            network,
            prefix,
            ip,
        } => run_locate(&mut out, ui, network, prefix, ip).map(|_| ()),
        Commands::Analyze { cidr } => run_analyze(&mut out, ui, cidr),
        Commands::Menu => {
            drop(out);
            let stdin = io::stdin();
            Menu::new(stdin.lock(), io::stdout(), ui, config).run()
        }
    };

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("{}", ui.err(&format!("Error: {e}")));
        std::process::exit(1);
    }
    Ok(())
}
