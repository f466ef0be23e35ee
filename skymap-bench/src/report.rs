/*
 * Created on Tue Mar 05 2024
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
    core::cmp::Ordering,
    std::collections::{hash_map::Entry, HashMap},
};

/// A map of reports
pub struct AggregateReport {
    map: HashMap<&'static str, Report>,
    cap: usize,
}

impl AggregateReport {
    /// Create a new aggregated report instance. `cap` is the number of repeats every bench
    /// will be running
    pub fn new(cap: usize) -> Self {
        Self {
            map: HashMap::new(),
            cap,
        }
    }
    /// Insert a new timing for the named bench. `time` is the nanoseconds the timed section
    /// took and `ops` the number of operations it performed
    pub fn insert(&mut self, name: &'static str, time: u128, ops: usize) {
        match self.map.entry(name) {
            Entry::Occupied(mut oe) => oe.get_mut().times.push(time),
            Entry::Vacant(ve) => {
                let mut rep = Report::with_capacity(self.cap, ops);
                rep.times.push(time);
                let _ = ve.insert(rep);
            }
        }
    }
    /// Returns a vector of statistics sorted by bench name and the length of the longest
    /// bench name. `(Vec<Stat>, longest_bench_name)`
    pub fn into_sorted_stat(self) -> (Vec<Stat>, usize) {
        let Self { map, .. } = self;
        let mut maxpad = 0usize;
        let mut repvec: Vec<Stat> = map
            .into_iter()
            .map(|(name, report)| {
                if name.len() > maxpad {
                    maxpad = name.len();
                }
                report.into_stat(name)
            })
            .collect();
        repvec.sort();
        (repvec, maxpad)
    }
    /// Returns a minified JSON string
    pub fn into_json(self) -> String {
        serde_json::to_string(&self.into_sorted_stat().0).unwrap()
    }
}

#[derive(Debug)]
/// A report with a collection of times
pub struct Report {
    times: Vec<u128>,
    ops: usize,
}

impl Report {
    /// Returns a new report with space for atleast `cap` number of times
    fn with_capacity(cap: usize, ops: usize) -> Self {
        Self {
            times: Vec::with_capacity(cap),
            ops,
        }
    }
    /// Returns a [`Stat`] with the average throughput
    fn into_stat(self, name: &'static str) -> Stat {
        let Self { times, ops } = self;
        let count = times.len();
        let total: u128 = times.into_iter().sum();
        // clock resolution floor
        let avg = (total / count as u128).max(1);
        Stat {
            name,
            stat: (ops as f64 / avg as f64) * 1_000_000_000_f64,
        }
    }
}

#[derive(serde::Serialize, Debug)]
/// A statistic: the name of the bench and its throughput in ops/sec
pub struct Stat {
    name: &'static str,
    stat: f64,
}

impl Stat {
    /// Get a reference to the report name
    pub fn name(&self) -> &str {
        self.name
    }
    /// Get the statistic
    pub fn stat(&self) -> f64 {
        self.stat
    }
}

impl PartialEq for Stat {
    fn eq(&self, oth: &Self) -> bool {
        self.name == oth.name
    }
}

impl Eq for Stat {}

impl PartialOrd for Stat {
    fn partial_cmp(&self, oth: &Self) -> Option<Ordering> {
        self.name.partial_cmp(oth.name)
    }
}

impl Ord for Stat {
    fn cmp(&self, oth: &Self) -> Ordering {
        self.name.cmp(oth.name)
    }
}
