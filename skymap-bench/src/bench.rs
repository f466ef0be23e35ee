/*
 * Created on Sun Mar 03 2024
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

use {
    crate::{
        cli::Task,
        error::{BResult, Error},
        report::AggregateReport,
    },
    devtimer::SimpleTimer,
    log::info,
    rand::{seq::SliceRandom, Rng},
    skymap::{IndexBaseSpec, IndexSTSeqDef, STIndex, STIndexPos, STIndexSeq},
    std::hint::black_box,
};

/// Upper bound on the number of keys driven through the O(n) positional benches
const POS_CAP: usize = 10_000;

pub struct BenchConfig {
    key_count: usize,
    runs: usize,
    ksize: usize,
}

impl BenchConfig {
    pub fn new(args: &Task) -> BResult<Self> {
        if args.key_count == 0 || args.runs == 0 {
            return Err(Error::Config("key count and runs must be nonzero".into()));
        }
        // keys are zero-padded decimal strings, so the width must fit the whole key space
        let digits = args.key_count.to_string().len();
        if args.ksize < digits {
            return Err(Error::Config(format!(
                "key size {} cannot fit {} distinct keys",
                args.ksize, args.key_count
            )));
        }
        Ok(Self {
            key_count: args.key_count,
            runs: args.runs,
            ksize: args.ksize,
        })
    }
    fn pos_count(&self) -> usize {
        self.key_count.min(POS_CAP)
    }
}

fn mkkeys(config: &BenchConfig) -> Vec<String> {
    (0..config.key_count)
        .map(|i| format!("{:0>width$}", i, width = config.ksize))
        .collect()
}

fn read_nanos(tm: &SimpleTimer) -> BResult<u128> {
    tm.time_in_nanos()
        .ok_or_else(|| Error::Runtime("timer read before stop".into()))
}

pub fn run_bench(config: &BenchConfig) -> BResult<AggregateReport> {
    let mut report = AggregateReport::new(config.runs);
    let mut rng = rand::thread_rng();
    info!("initializing test data ...");
    let keys = mkkeys(config);
    let pos_cnt = config.pos_count();
    if pos_cnt < config.key_count {
        info!(
            "positional benches run over {} of the {} keys",
            pos_cnt, config.key_count
        );
    }
    for run in 1..=config.runs {
        info!("run {}/{} ...", run, config.runs);
        // keyed writes
        let mut idx: IndexSTSeqDef<String, usize> = IndexSTSeqDef::idx_init_cap(config.key_count);
        let mut tm = SimpleTimer::new();
        tm.start();
        for (i, k) in keys.iter().enumerate() {
            let _ = idx.st_upsert(k.clone(), i);
        }
        tm.stop();
        report.insert("UPSERT", read_nanos(&tm)?, config.key_count);
        // keyed reads, in scrambled order
        let mut probe: Vec<&str> = keys.iter().map(String::as_str).collect();
        probe.shuffle(&mut rng);
        let mut tm = SimpleTimer::new();
        tm.start();
        for k in &probe {
            if black_box(idx.st_get(*k)).is_none() {
                return Err(Error::Runtime("a key vanished mid-bench".into()));
            }
        }
        tm.stop();
        report.insert("GET", read_nanos(&tm)?, config.key_count);
        // ordered scan
        let mut tm = SimpleTimer::new();
        tm.start();
        let scanned = black_box(idx.stseq_ord_kv().count());
        tm.stop();
        if scanned != config.key_count {
            return Err(Error::Runtime("ordered scan lost entries".into()));
        }
        report.insert("ORD_SCAN", read_nanos(&tm)?, config.key_count);
        drop(idx);
        // positional writes
        let positions: Vec<usize> = (0..pos_cnt).map(|i| rng.gen_range(0..=i)).collect();
        let mut pidx: IndexSTSeqDef<String, usize> = IndexSTSeqDef::idx_init_cap(pos_cnt);
        let mut tm = SimpleTimer::new();
        tm.start();
        for (i, at) in positions.iter().enumerate() {
            pidx.stpos_upsert_at(*at, keys[i].clone(), i)
                .map_err(|e| Error::Runtime(format!("positional insert failed: {}", e)))?;
        }
        tm.stop();
        report.insert("POS_INSERT", read_nanos(&tm)?, pos_cnt);
        // positional lookups, in scrambled order
        let mut probe: Vec<&str> = keys[..pos_cnt].iter().map(String::as_str).collect();
        probe.shuffle(&mut rng);
        let mut tm = SimpleTimer::new();
        tm.start();
        for k in &probe {
            if black_box(pidx.stpos_index_of(*k)).is_none() {
                return Err(Error::Runtime("a key lost its position mid-bench".into()));
            }
        }
        tm.stop();
        report.insert("INDEX_OF", read_nanos(&tm)?, pos_cnt);
        // keyed removes
        let mut tm = SimpleTimer::new();
        tm.start();
        for k in &probe {
            if pidx.st_delete_return(*k).is_none() {
                return Err(Error::Runtime("a key vanished mid-bench".into()));
            }
        }
        tm.stop();
        report.insert("REMOVE", read_nanos(&tm)?, pos_cnt);
        // positional removes; rebuild the index first (untimed)
        for (i, k) in keys[..pos_cnt].iter().enumerate() {
            let _ = pidx.st_upsert(k.clone(), i);
        }
        let mut tm = SimpleTimer::new();
        tm.start();
        while !pidx.st_is_empty() {
            let at = rng.gen_range(0..pidx.st_len());
            pidx.stpos_remove_at(at)
                .map_err(|e| Error::Runtime(format!("positional remove failed: {}", e)))?;
        }
        tm.stop();
        report.insert("REMOVE_AT", read_nanos(&tm)?, pos_cnt);
    }
    Ok(report)
}
