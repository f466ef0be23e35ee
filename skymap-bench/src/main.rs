/*
 * Created on Sat Mar 02 2024
 *
 * This file is a part of Skymap
 * Skymap is a free and open-source ordered indexed map library written by
 * Sayan Nandan ("the Author") with the vision to provide a positionally
 * addressable associative container without compromising on correctness
 * or performance.
 *
 * Copyright (c) 2024, Sayan Nandan <ohsayan@outlook.com>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

mod bench;
mod cli;
mod error;
mod report;

use {
    crate::error::BResult,
    clap::Parser,
    env_logger::Builder,
    std::{env, process},
};

fn main() {
    Builder::new()
        .parse_filters(&env::var("SKYMAP_LOG").unwrap_or_else(|_| "info".to_owned()))
        .init();
    match run() {
        Ok(()) => {}
        Err(e) => {
            log::error!("bench failure: {}", e);
            process::exit(0x01);
        }
    }
}

fn run() -> BResult<()> {
    let args = cli::Task::parse();
    let json_out = args.json;
    let config = bench::BenchConfig::new(&args)?;
    let report = bench::run_bench(&config)?;
    if json_out {
        println!("{}", report.into_json());
    } else {
        let (stats, maxpad) = report.into_sorted_stat();
        for stat in stats {
            println!(
                "{:<maxpad$} {:.2} ops/sec",
                stat.name(),
                stat.stat(),
                maxpad = maxpad
            );
        }
    }
    Ok(())
}
