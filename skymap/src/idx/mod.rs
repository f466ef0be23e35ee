/*
 * Created on Sun Feb 11 2024
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

#![deny(unreachable_patterns)]

mod meta;
mod stdhm;
mod stpos;
#[cfg(test)]
mod tests;

use {
    crate::error::PosResult,
    core::{borrow::Borrow, hash::Hash},
};

// re-exports
pub use self::{
    meta::AsHasher,
    stpos::{
        config::{Config, DefConfig},
        iter::{
            IndexSTSeqVecCursor, IndexSTSeqVecIntoIter, IndexSTSeqVecIterOrdKV,
            IndexSTSeqVecIterOrdKey, IndexSTSeqVecIterOrdValue,
        },
        views::{IndexSTSeqVecKeyView, IndexSTSeqVecValueView},
        IndexSTSeqVec,
    },
};

/// The positional index with the default configuration
pub type IndexSTSeqDef<K, V> = IndexSTSeqVec<K, V, DefConfig<K, V>>;

/// Any type implementing this trait can be used as a key inside the index structures
pub trait AsKey: Hash + Eq {
    /// Read the key
    fn read_key(&self) -> &Self;
}

impl<T: Hash + Eq + ?Sized> AsKey for T {
    fn read_key(&self) -> &Self {
        self
    }
}

/// If your T can be cloned/copied and implements [`AsKey`], then this trait will automatically be implemented
pub trait AsKeyClone: AsKey + Clone {
    /// Read the key and return a clone
    fn read_key_clone(&self) -> Self;
}

impl<T: AsKey + Clone + ?Sized> AsKeyClone for T {
    #[inline(always)]
    fn read_key_clone(&self) -> Self {
        Clone::clone(self)
    }
}

pub trait AsValue {
    fn read_value(&self) -> &Self;
}
impl<T: ?Sized> AsValue for T {
    fn read_value(&self) -> &Self {
        self
    }
}

/// Any type implementing this trait can be used as a value inside the index structures
pub trait AsValueClone: AsValue + Clone {
    /// Read the value and return a clone
    fn read_value_clone(&self) -> Self;
}

impl<T: AsValue + Clone + ?Sized> AsValueClone for T {
    #[inline(always)]
    fn read_value_clone(&self) -> Self {
        Clone::clone(self)
    }
}

/// The base spec for any index. For more specialized impls, use the [`STIndex`],
/// [`STIndexSeq`] or [`STIndexPos`] traits
pub trait IndexBaseSpec: Sized {
    /// Index supports prealloc?
    const PREALLOC: bool;
    /// Initialize an empty instance of the index
    fn idx_init() -> Self;
    /// Initialize a pre-loaded instance of the index
    fn idx_init_with(s: Self) -> Self;
    /// Init the idx with the given cap
    ///
    /// By default doesn't attempt to allocate
    fn idx_init_cap(_: usize) -> Self {
        if Self::PREALLOC {
            panic!("expected prealloc");
        }
        Self::idx_init()
    }
}

/// An unordered STIndex
pub trait STIndex<K, V>: IndexBaseSpec {
    /// An iterator over the keys and values
    type IterKV<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    /// An iterator over the keys
    type IterKey<'a>: Iterator<Item = &'a K>
    where
        Self: 'a,
        K: 'a;
    /// An iterator over the values
    type IterValue<'a>: Iterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;
    /// Attempts to compact the backing storage
    fn st_compact(&mut self) {}
    /// Returns the number of entries in the STIndex
    fn st_len(&self) -> usize;
    fn st_is_empty(&self) -> bool {
        self.st_len() == 0
    }
    /// Clears all the entries in the STIndex
    fn st_clear(&mut self);
    // write
    /// Returns true if the entry was inserted successfully; returns false if the uniqueness constraint is
    /// violated
    fn st_insert(&mut self, key: K, val: V) -> bool
    where
        K: AsKeyClone,
        V: AsValue;
    /// Updates or inserts the given value, returning the value it replaced (if any). A key
    /// that is already present keeps its position; a new key is appended to the sequence
    fn st_upsert(&mut self, key: K, val: V) -> Option<V>
    where
        K: AsKeyClone,
        V: AsValue;
    // read
    fn st_contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + AsKeyClone,
        Q: ?Sized + AsKey;
    /// Returns a reference to the value corresponding to the key, if it exists
    fn st_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: AsKeyClone + Borrow<Q>,
        Q: ?Sized + AsKey;
    /// Returns a clone of the value corresponding to the key, if it exists
    fn st_get_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: AsKeyClone + Borrow<Q>,
        Q: ?Sized + AsKey,
        V: AsValueClone;
    /// Returns a mutable reference to the value corresponding to the key, if it exists
    fn st_get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: AsKeyClone + Borrow<Q>,
        Q: ?Sized + AsKey;
    // update
    /// Returns true if the entry is updated
    fn st_update<Q>(&mut self, key: &Q, val: V) -> bool
    where
        K: AsKeyClone + Borrow<Q>,
        V: AsValue,
        Q: ?Sized + AsKey;
    /// Updates the entry and returns the old value, if it exists
    fn st_update_return<Q>(&mut self, key: &Q, val: V) -> Option<V>
    where
        K: AsKeyClone + Borrow<Q>,
        V: AsValue,
        Q: ?Sized + AsKey;
    // delete
    /// Returns true if the entry was deleted
    fn st_delete<Q>(&mut self, key: &Q) -> bool
    where
        K: AsKeyClone + Borrow<Q>,
        Q: ?Sized + AsKey;
    /// Removes the entry and returns it, if it exists. An absent key is a no-op
    fn st_delete_return<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: AsKeyClone + Borrow<Q>,
        Q: ?Sized + AsKey;
    /// Removes the entry if `iff` approves of its value. Returns `None` if the key is absent
    fn st_delete_if<Q>(&mut self, key: &Q, iff: impl Fn(&V) -> bool) -> Option<bool>
    where
        K: AsKeyClone + Borrow<Q>,
        Q: ?Sized + AsKey;
    // iter
    /// Returns an iterator over a tuple of keys and values
    fn st_iter_kv<'a>(&'a self) -> Self::IterKV<'a>;
    /// Returns an iterator over the keys
    fn st_iter_key<'a>(&'a self) -> Self::IterKey<'a>;
    /// Returns an iterator over the values
    fn st_iter_value<'a>(&'a self) -> Self::IterValue<'a>;
}

/// An STIndex whose entries form a sequence with a defined order
pub trait STIndexSeq<K, V>: STIndex<K, V> {
    /// An ordered iterator over the keys and values
    type IterOrdKV<'a>: Iterator<Item = (&'a K, &'a V)> + DoubleEndedIterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    /// An ordered iterator over the keys
    type IterOrdKey<'a>: Iterator<Item = &'a K> + DoubleEndedIterator<Item = &'a K>
    where
        Self: 'a,
        K: 'a;
    /// An ordered iterator over the values
    type IterOrdValue<'a>: Iterator<Item = &'a V> + DoubleEndedIterator<Item = &'a V>
    where
        Self: 'a,
        V: 'a;
    /// Returns an ordered iterator over the KV pairs
    fn stseq_ord_kv<'a>(&'a self) -> Self::IterOrdKV<'a>;
    /// Returns an ordered iterator over the keys
    fn stseq_ord_key<'a>(&'a self) -> Self::IterOrdKey<'a>;
    /// Returns an ordered iterator over the values
    fn stseq_ord_value<'a>(&'a self) -> Self::IterOrdValue<'a>;
    /// Returns the first key in sequence order
    fn stseq_first_key(&self) -> Option<&K>;
    /// Returns the last key in sequence order
    fn stseq_last_key(&self) -> Option<&K>;
    /// Returns the key that follows the given key in sequence order
    fn stseq_next_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey;
    /// Returns the key that precedes the given key in sequence order
    fn stseq_prev_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey;
}

/// A positionally addressed STIndex: every entry is reachable both by key and by its integer
/// position in the sequence, and the two addressing schemes can never diverge
pub trait STIndexPos<K, V>: STIndexSeq<K, V> {
    /// Returns the key at the given position. Fails for `index >= len`
    fn stpos_key_at(&self, index: usize) -> PosResult<&K>;
    /// Returns the value at the given position. Fails for `index >= len`
    fn stpos_value_at(&self, index: usize) -> PosResult<&V>;
    /// Returns the position of the given key, scanning the sequence linearly
    fn stpos_index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey;
    /// Update-or-insert at a position. If the key is already present anywhere in the index,
    /// only its value is updated (at the key's existing position; `index` is still validated
    /// but ignored for placement). If the key is new, it is inserted at `index`, shifting
    /// later entries right; `index == len` appends. Fails for `index > len` in either case,
    /// before anything is written
    fn stpos_upsert_at(&mut self, index: usize, key: K, val: V) -> PosResult<Option<V>>
    where
        K: AsKeyClone,
        V: AsValue;
    /// Applies [`STIndex::st_upsert`] for every entry of the source, in the source's own order
    fn stpos_upsert_all<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsKeyClone,
        V: AsValue;
    /// Applies [`STIndexPos::stpos_upsert_at`] for every entry of the source, in the source's
    /// own order, advancing the position by one for each entry that was newly inserted. New
    /// keys end up as a contiguous run starting at `index`; keys already present are updated
    /// in place and consume no position
    fn stpos_upsert_all_at<I>(&mut self, index: usize, source: I) -> PosResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsKeyClone,
        V: AsValue;
    /// Removes the entry at the given position, shifting later entries left. Fails for
    /// `index >= len`
    fn stpos_remove_at(&mut self, index: usize) -> PosResult<V>;
    /// Replaces the value at the given position without touching the order. Fails for
    /// `index >= len`
    fn stpos_set_value_at(&mut self, index: usize, val: V) -> PosResult<V>;
}
