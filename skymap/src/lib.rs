/*
 * Created on Sat Feb 10 2024
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

//! # Skymap
//!
//! An order-preserving, index-addressable associative container: a key/value mapping that is
//! simultaneously a positional sequence. Every entry is reachable by key (hashmap style) and
//! by its integer position (list style), and the two views can never diverge.
//!
//! ```
//! use skymap::{IndexBaseSpec, IndexSTSeqDef, STIndex, STIndexPos};
//!
//! let mut idx: IndexSTSeqDef<&str, u32> = IndexSTSeqDef::idx_init();
//! assert_eq!(idx.st_upsert("mid", 2), None);
//! idx.stpos_upsert_at(0, "first", 1).unwrap();
//! assert_eq!(idx.stpos_key_at(0), Ok(&"first"));
//! assert_eq!(idx.stpos_index_of("mid"), Some(1));
//! ```

pub mod cmp;
pub mod error;
pub mod idx;
pub mod transform;
#[cfg(test)]
mod tests;

// re-exports
pub use {
    error::{Error, PosResult},
    idx::{IndexBaseSpec, IndexSTSeqDef, IndexSTSeqVec, STIndex, STIndexPos, STIndexSeq},
};
