use calc_core::error::Result;
use calc_core::{demo, repl, ReplConfig};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use miette::IntoDiagnostic;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Run the sample calculation and print its history")]
    Demo,
    #[command(about = "Run one operation: add, sub, mul or div", allow_negative_numbers = true)]
    Eval { op: String, a: String, b: String },
    #[command(about = "Interactive calculator")]
    Repl {
        #[arg(long, default_value = ">> ")]
        prompt: String,
        #[arg(long)]
        no_banner: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG wins when set
    builder.parse_default_env();
    builder.init();
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().build())
    }))
    .ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Eval { op, a, b }) => {
            let line = calc_core::eval_once(&op, &a, &b)?;
            println!("{}", line);
        }
        Some(Commands::Repl { prompt, no_banner }) => {
            let config = ReplConfig::default()
                .with_prompt(prompt)
                .with_banner(!no_banner);
            repl::main_loop(&config)?;
        }
        Some(Commands::Demo) | None => {
            let stdout = std::io::stdout();
            demo::run(&mut stdout.lock()).into_diagnostic()?;
        }
    }

    Ok(())
}
