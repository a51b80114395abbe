use anyhow::Context;
use clap::{Parser, ValueEnum};
use cprop::prelude::*;
use cprop_test_utils::programs;
use log::LevelFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Program {
    Straight,
    Branch,
    Loop,
    Params,
}

impl Program {
    fn build(self) -> Cfg {
        match self {
            Program::Straight => programs::straight_line(),
            Program::Branch => programs::branch_merge(),
            Program::Loop => programs::counting_loop(),
            Program::Params => programs::mixed_params(),
        }
    }
}

/// Run constant propagation over a built-in procedure and print the IN and
/// OUT facts of every CFG node.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[arg(value_enum)]
    program: Program,

    /// Worklist iteration limit.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Print the CFG before the facts.
    #[arg(long)]
    cfg: bool,

    /// Log solver progress (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let cfg = cli.program.build();
    if cli.cfg {
        println!("{cfg}");
    }

    let config =
        AnalysisConfig::new(ConstantPropagation::ID).with_max_iterations(cli.max_iterations);
    let result = ConstantPropagation::new(config)
        .analyze(&cfg)
        .with_context(|| format!("analysing `{}`", cfg.ir().name()))?;
    print!("{}", result.display(&cfg));
    Ok(())
}
