// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ RUST_LOG=debug cargo r --example outs -- --hole "Ah Kh" --board "2h 7h 9c"
// ```
use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use overcall_outs::{OutsCalculator, Street};

#[derive(Debug, Parser)]
struct Cli {
    /// The player hole cards (eg. "Ah Kh").
    #[clap(long)]
    hole: String,
    /// The board cards, 0, 3, 4 or 5 cards (eg. "2h 7h 9c").
    #[clap(long, default_value = "")]
    board: String,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let hole = cli.hole.split_whitespace().collect::<Vec<_>>();
    let board = cli.board.split_whitespace().collect::<Vec<_>>();

    if hole.len() != 2 {
        bail!("Expected 2 hole cards got {}", hole.len());
    }

    let Some(street) = Street::from_board_len(board.len()) else {
        bail!("Expected 0, 3, 4, or 5 board cards got {}", board.len());
    };

    let mut calc = OutsCalculator::new();
    calc.update_cards(hole.as_slice(), board.as_slice(), street)?;

    info!("Street: {street}");
    info!("Outs: {:.1}", calc.calculate_total_outs());
    info!("Equity: {:.0}%", calc.calculate_equity_from_outs() * 100.0);
    info!("{}", calc.get_outs_description());

    Ok(())
}
