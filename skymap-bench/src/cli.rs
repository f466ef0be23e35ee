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

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "skymap-bench",
    about = "Benchmark the skymap positional index",
    version
)]
pub struct Task {
    #[arg(
        short = 'k',
        long = "keys",
        help = "Sets the number of keys to run the benches over",
        value_name = "COUNT",
        default_value_t = 100_000
    )]
    pub key_count: usize,

    #[arg(
        short = 'r',
        long = "runs",
        help = "Sets the number of times each bench is repeated",
        value_name = "RUNS",
        default_value_t = 5
    )]
    pub runs: usize,

    #[arg(
        short = 's',
        long = "ksize",
        help = "Sets the size of the generated string keys",
        value_name = "BYTES",
        default_value_t = 8
    )]
    pub ksize: usize,

    #[arg(
        short = 'j',
        long = "json",
        help = "Sets output type to JSON",
        default_value_t = false
    )]
    pub json: bool,
}
