//! `tegra-gpio` — blink and inspect Tegra GPIO banks through `/dev/mem`.
//!
//! ```text
//! USAGE:
//!   tegra-gpio blink [--layout single|multi] [--period-ms N]   Toggle a bank forever (root)
//!   tegra-gpio dump  [--layout single|multi]                   Print every bank register (root)
//! ```

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use tegra_gpio_driver::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tegra-gpio", about = "Tegra GPIO register mapper and blinker", version)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Toggle one bank field once per period, forever (requires root).
    Blink {
        #[command(flatten)]
        select: Select,

        /// Field to toggle. Default: OE for the single layout, OUT for multi.
        #[arg(long, value_enum)]
        field: Option<FieldArg>,

        /// Toggle period in milliseconds.
        #[arg(long, default_value_t = 1000)]
        period_ms: u64,
    },
    /// Print every register of the selected bank (requires root).
    Dump {
        #[command(flatten)]
        select: Select,
    },
}

#[derive(Args)]
struct Select {
    /// Register arrangement variant.
    #[arg(long, value_enum, default_value_t = LayoutArg::Single)]
    layout: LayoutArg,

    /// Controller index, multi layout only (0..8).
    #[arg(long, default_value_t = 1)]
    controller: usize,

    /// Port within the controller, multi layout only (0..4).
    #[arg(long, default_value_t = 0)]
    port: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutArg {
    /// One bank at 0x6000d100, fields padded to 16 bytes.
    Single,
    /// Eight controllers from 0x6000d000, four packed port words per field.
    Multi,
}

/// Writable fields only — the input register cannot be toggled.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FieldArg {
    Cnf,
    Oe,
    Out,
    IntSta,
    IntEnb,
    IntLvl,
    IntClr,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Cnf => Field::Cnf,
            FieldArg::Oe => Field::Oe,
            FieldArg::Out => Field::Out,
            FieldArg::IntSta => Field::IntSta,
            FieldArg::IntEnb => Field::IntEnb,
            FieldArg::IntLvl => Field::IntLvl,
            FieldArg::IntClr => Field::IntClr,
        }
    }
}

impl Select {
    fn bank(&self) -> Result<BankConfig> {
        match self.layout {
            LayoutArg::Single => Ok(BankConfig::single_bank()),
            LayoutArg::Multi => BankConfig::multi_controller(self.controller, self.port)
                .ok_or_else(|| {
                    anyhow!(
                        "invalid selection: controller {} port {} (have 8 controllers × 4 ports)",
                        self.controller,
                        self.port
                    )
                }),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Cmd::Blink {
            select,
            field,
            period_ms,
        } => cmd_blink(&select, field, period_ms)?,
        Cmd::Dump { select } => cmd_dump(&select)?,
    }

    Ok(())
}

fn map_bank(bank: BankConfig) -> Result<BankView<MappedPage>> {
    let mem = DevMem::open()?;
    let page = mem.map_page(bank.base)?;
    let offset = page.offset();
    Ok(BankView::new(page, offset, bank.layout, bank.port)?)
}

fn cmd_blink(select: &Select, field: Option<FieldArg>, period_ms: u64) -> Result<()> {
    let bank = select.bank()?;
    let field = field.map_or_else(|| bank.toggle_field(), Field::from);

    let mut view = map_bank(bank)?;
    view.init()?;

    eprintln!("press ctrl-C to stop");

    // No stop condition by design: the process runs until a signal kills it.
    let stop = AtomicBool::new(false);
    let cfg = BlinkConfig::new(field, Duration::from_millis(period_ms));
    blink_loop(&mut view, &cfg, &stop)?;

    Ok(())
}

fn cmd_dump(select: &Select) -> Result<()> {
    let bank = select.bank()?;
    let view = map_bank(bank)?;

    println!(
        "bank @ {:#010x}  layout {:?}  port {}",
        bank.base, bank.layout, bank.port
    );
    for (field, value) in view.snapshot()? {
        println!("  {:<8} = {value:#010x}", field.name());
    }

    Ok(())
}
