/*
 * Created on Fri Feb 23 2024
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

//! The transformer capability and the transforming index decorator: a wrapper that drives
//! every incoming key and value through a pure transform before storage

use {
    crate::{
        error::PosResult,
        idx::{AsKey, AsKeyClone, AsValue, Config, IndexSTSeqVec, STIndex, STIndexPos},
    },
    std::{
        borrow::Borrow,
        fmt::{self, Debug},
    },
};

/// A pure value transform
pub trait Transformer<T> {
    fn transform(&self, input: T) -> T;
}

/// Every closure of the right shape is a transformer
impl<T, F: Fn(T) -> T> Transformer<T> for F {
    fn transform(&self, input: T) -> T {
        self(input)
    }
}

/// The identity transformer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ident;

impl<T> Transformer<T> for Ident {
    fn transform(&self, input: T) -> T {
        input
    }
}

/// A decorator over [`IndexSTSeqVec`] that drives every incoming key through `TK` and every
/// incoming value through `TV` before it is stored. Reads and removals pass through
/// untransformed
pub struct TransformedIndex<K, V, C: Config<K, V>, TK, TV> {
    idx: IndexSTSeqVec<K, V, C>,
    tk: TK,
    tv: TV,
}

impl<K, V, C, TK, TV> TransformedIndex<K, V, C, TK, TV>
where
    K: AsKeyClone,
    V: AsValue,
    C: Config<K, V>,
    TK: Transformer<K>,
    TV: Transformer<V>,
{
    /// Decorate the given index. Entries it already holds are left as they are; only entries
    /// stored from now on are transformed
    pub fn transforming(idx: IndexSTSeqVec<K, V, C>, tk: TK, tv: TV) -> Self {
        Self { idx, tk, tv }
    }
    /// Decorate the given index, re-driving every entry it already holds through the
    /// transformers, in sequence order
    pub fn transformed(idx: IndexSTSeqVec<K, V, C>, tk: TK, tv: TV) -> Self {
        let mut slf = Self::transforming(IndexSTSeqVec::with_capacity(idx.len()), tk, tv);
        for (k, v) in idx {
            let _ = slf.upsert(k, v);
        }
        slf
    }
    /// [`STIndex::st_upsert`] with both transforms applied
    pub fn upsert(&mut self, key: K, val: V) -> Option<V> {
        self.idx
            .st_upsert(self.tk.transform(key), self.tv.transform(val))
    }
    /// [`STIndexPos::stpos_upsert_at`] with both transforms applied
    pub fn upsert_at(&mut self, index: usize, key: K, val: V) -> PosResult<Option<V>> {
        self.idx
            .stpos_upsert_at(index, self.tk.transform(key), self.tv.transform(val))
    }
    /// [`STIndexPos::stpos_upsert_all`] with both transforms applied
    pub fn upsert_all<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let Self { idx, tk, tv } = self;
        idx.stpos_upsert_all(
            source
                .into_iter()
                .map(|(k, v)| (tk.transform(k), tv.transform(v))),
        )
    }
    /// [`STIndexPos::stpos_upsert_all_at`] with both transforms applied
    pub fn upsert_all_at<I>(&mut self, index: usize, source: I) -> PosResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let Self { idx, tk, tv } = self;
        idx.stpos_upsert_all_at(
            index,
            source
                .into_iter()
                .map(|(k, v)| (tk.transform(k), tv.transform(v))),
        )
    }
    /// [`STIndexPos::stpos_set_value_at`] with the value transform applied
    pub fn set_value_at(&mut self, index: usize, val: V) -> PosResult<V> {
        self.idx.stpos_set_value_at(index, self.tv.transform(val))
    }
    pub fn len(&self) -> usize {
        self.idx.len()
    }
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.idx.st_get(key)
    }
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.idx.stpos_index_of(key)
    }
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.idx.st_delete_return(key)
    }
    pub fn remove_at(&mut self, index: usize) -> PosResult<V> {
        self.idx.stpos_remove_at(index)
    }
    pub fn clear(&mut self) {
        self.idx.st_clear()
    }
    /// Read access to the decorated index
    pub fn inner(&self) -> &IndexSTSeqVec<K, V, C> {
        &self.idx
    }
    /// Unwraps the decorator
    pub fn into_inner(self) -> IndexSTSeqVec<K, V, C> {
        self.idx
    }
}

impl<K, V, C, TK, TV> Debug for TransformedIndex<K, V, C, TK, TV>
where
    K: AsKey + Debug,
    V: AsValue + Debug,
    C: Config<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.idx.fmt(f)
    }
}
