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

use core::fmt;

/// A generic result for positional operations
pub type PosResult<T> = Result<T, Error>;

/// An enumeration of the errors raised by the positional surface of an index. Index validation
/// always happens before the first structural write, so a returned error implies the index was
/// left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// an index argument was outside the valid range for the operation
    IndexOutOfRange { index: usize, size: usize },
    /// a cursor was stepped past either end of the sequence
    CursorExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index out of range: index is {index} but size is {size}")
            }
            Self::CursorExhausted => write!(f, "cursor stepped past the end of the sequence"),
        }
    }
}

impl std::error::Error for Error {}
