/*
 * Created on Tue Feb 13 2024
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

pub(super) mod config;
pub(super) mod iter;
pub(super) mod views;

use {
    self::{
        config::Config,
        iter::{
            IndexSTSeqVecCursor, IndexSTSeqVecIntoIter, IndexSTSeqVecIterOrdKV,
            IndexSTSeqVecIterOrdKey, IndexSTSeqVecIterOrdValue,
        },
        views::{IndexSTSeqVecKeyView, IndexSTSeqVecValueView},
    },
    super::{
        AsKey, AsKeyClone, AsValue, AsValueClone, IndexBaseSpec, STIndex, STIndexPos, STIndexSeq,
    },
    crate::error::{Error, PosResult},
    std::{
        borrow::Borrow,
        collections::{
            hash_map::{Iter as StdMapIterKV, Keys as StdMapIterKey, Values as StdMapIterVal},
            HashMap as StdMap,
        },
        fmt::{self, Debug},
        mem,
    },
};

/*
    The positional index couples a lookup table (a std hashmap) with an order sequence (a
    vector of keys). The vector holds one clone of every key, the map holds the other along
    with the value, and every mutation keeps the two in lockstep: the map never knows a key
    the vector doesn't, and the other way round. The vector is the authority on order and
    positions; index_of and positional writes scan/shift it, so they are O(n).
*/

/// An ST index with positional addressing: a lookup table for key access plus an order
/// sequence for integer indexing, guaranteed to never diverge
pub struct IndexSTSeqVec<K, V, C: Config<K, V>> {
    m: StdMap<K, V, C::Hasher>,
    o: Vec<K>,
}

impl<K, V, C: Config<K, V>> IndexSTSeqVec<K, V, C> {
    const DEF_CAP: usize = 0;
    #[inline(always)]
    const fn _new(m: StdMap<K, V, C::Hasher>, o: Vec<K>) -> IndexSTSeqVec<K, V, C> {
        Self { m, o }
    }
    #[inline(always)]
    pub fn with_hasher(hasher: C::Hasher) -> Self {
        Self::with_capacity_and_hasher(Self::DEF_CAP, hasher)
    }
    #[inline(always)]
    pub fn with_capacity_and_hasher(cap: usize, hasher: C::Hasher) -> Self {
        Self::_new(
            StdMap::with_capacity_and_hasher(cap, hasher),
            Vec::with_capacity(cap),
        )
    }
    pub fn with_capacity(cap: usize) -> Self {
        Self::with_capacity_and_hasher(cap, C::Hasher::default())
    }
    pub fn len(&self) -> usize {
        self.m.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    #[inline(always)]
    fn _bounds_entry(&self, index: usize) -> PosResult<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                size: self.len(),
            })
        }
    }
    #[inline(always)]
    fn _bounds_insertion(&self, index: usize) -> PosResult<()> {
        if index <= self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                size: self.len(),
            })
        }
    }
}

impl<K, V, C: Config<K, V> + Default> Default for IndexSTSeqVec<K, V, C> {
    fn default() -> Self {
        Self::with_hasher(C::Hasher::default())
    }
}

impl<K, V, C: Config<K, V>> IndexSTSeqVec<K, V, C> {
    #[inline(always)]
    fn _iter_ord_kv<'a>(&'a self) -> IndexSTSeqVecIterOrdKV<'a, K, V, C::Hasher> {
        IndexSTSeqVecIterOrdKV::new(self)
    }
    #[inline(always)]
    fn _iter_ord_k<'a>(&'a self) -> IndexSTSeqVecIterOrdKey<'a, K> {
        IndexSTSeqVecIterOrdKey::new(self)
    }
    #[inline(always)]
    fn _iter_ord_v<'a>(&'a self) -> IndexSTSeqVecIterOrdValue<'a, K, V, C::Hasher> {
        IndexSTSeqVecIterOrdValue::new(self)
    }
}

impl<K: AsKey, V: AsValue, C: Config<K, V>> IndexSTSeqVec<K, V, C> {
    #[inline(always)]
    /// Clean up unused and cached memory
    fn vacuum_full(&mut self) {
        self.m.shrink_to_fit();
        self.o.shrink_to_fit();
    }
    fn _index_of<Q>(&self, k: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        // the order sequence is the only structure that knows positions
        self.o.iter().position(|e| e.borrow() == k)
    }
    #[inline(always)]
    fn _get<Q>(&self, k: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.m.get(k)
    }
    #[inline(always)]
    fn _get_mut<Q>(&mut self, k: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.m.get_mut(k)
    }
    #[inline(always)]
    /// Append a key that is known to be absent
    fn __insert_append(&mut self, k: K, v: V)
    where
        K: AsKeyClone,
    {
        self.o.push(k.read_key_clone());
        let _ = self.m.insert(k, v);
    }
    #[inline(always)]
    /// Insert a key that is known to be absent at the given (pre-validated) position
    fn __insert_shift(&mut self, index: usize, k: K, v: V)
    where
        K: AsKeyClone,
    {
        self.o.insert(index, k.read_key_clone());
        let _ = self.m.insert(k, v);
    }
    #[inline(always)]
    fn _insert(&mut self, k: K, v: V) -> bool
    where
        K: AsKeyClone,
    {
        if self.m.contains_key(&k) {
            return false;
        }
        self.__insert_append(k, v);
        true
    }
    #[inline(always)]
    fn _update<Q>(&mut self, k: &Q, v: V) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.m.get_mut(k).map(move |e| {
            let mut v = v;
            mem::swap(&mut v, e);
            v
        })
    }
    #[inline(always)]
    fn _upsert(&mut self, k: K, v: V) -> Option<V>
    where
        K: AsKeyClone,
    {
        match self.m.get_mut(&k) {
            Some(e) => {
                let mut v = v;
                mem::swap(&mut v, e);
                Some(v)
            }
            None => {
                self.__insert_append(k, v);
                None
            }
        }
    }
    fn _upsert_at(&mut self, index: usize, k: K, v: V) -> PosResult<Option<V>>
    where
        K: AsKeyClone,
    {
        // the insertion-range check applies whether or not the key exists, and must run
        // before the first structural write
        self._bounds_insertion(index)?;
        match self._index_of(&k) {
            Some(pos) => {
                // existing key: update in place, no repositioning; the supplied key replaces
                // the stored one (the two are equal)
                let prev = self.m.remove(&k);
                self.o[pos] = k.read_key_clone();
                let _ = self.m.insert(k, v);
                Ok(prev)
            }
            None => {
                self.__insert_shift(index, k, v);
                Ok(None)
            }
        }
    }
    fn _upsert_all<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsKeyClone,
    {
        source.into_iter().for_each(|(k, v)| {
            let _ = self._upsert(k, v);
        })
    }
    fn _upsert_all_at<I>(&mut self, mut index: usize, source: I) -> PosResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsKeyClone,
    {
        // validate up front so that a bad index mutates nothing, even for an empty source
        self._bounds_insertion(index)?;
        for (k, v) in source {
            if self._upsert_at(index, k, v)?.is_none() {
                // a fresh insertion consumed this position; updated keys stay where they were
                index += 1;
            }
        }
        Ok(())
    }
    fn _remove<Q>(&mut self, k: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        let pos = self._index_of(k)?;
        let _ = self.o.remove(pos);
        self.m.remove(k)
    }
    fn _remove_at(&mut self, index: usize) -> PosResult<V> {
        self._bounds_entry(index)?;
        let k = self.o.remove(index);
        // the order sequence never holds a key the lookup table doesn't
        Ok(self.m.remove(&k).unwrap())
    }
    fn _key_at(&self, index: usize) -> PosResult<&K> {
        self._bounds_entry(index)?;
        Ok(&self.o[index])
    }
    fn _value_at(&self, index: usize) -> PosResult<&V> {
        self._bounds_entry(index)?;
        // same invariant: every key in the order sequence resolves in the lookup table
        Ok(self.m.get(&self.o[index]).unwrap())
    }
    fn _set_value_at(&mut self, index: usize, v: V) -> PosResult<V> {
        self._bounds_entry(index)?;
        let e = self.m.get_mut(&self.o[index]).unwrap();
        let mut v = v;
        mem::swap(&mut v, e);
        Ok(v)
    }
    #[inline(always)]
    fn _clear(&mut self) {
        self.m.clear();
        self.o.clear();
    }
}

impl<K: AsKey, V: AsValue, C: Config<K, V>> IndexSTSeqVec<K, V, C> {
    /// Returns a live, read-only list view of the keys in sequence order
    pub fn key_view(&self) -> IndexSTSeqVecKeyView<'_, K, V, C> {
        IndexSTSeqVecKeyView::new(self)
    }
    /// Returns a live list view of the values, aligned index-for-index with the key view.
    /// Removal through this view removes the whole entry
    pub fn value_view(&mut self) -> IndexSTSeqVecValueView<'_, K, V, C> {
        IndexSTSeqVecValueView::new(self)
    }
    /// Returns a bidirectional entry cursor positioned before the first entry
    pub fn cursor(&mut self) -> IndexSTSeqVecCursor<'_, K, V, C> {
        IndexSTSeqVecCursor::new(self)
    }
}

#[cfg(test)]
impl<K: AsKey, V: AsValue, C: Config<K, V>> IndexSTSeqVec<K, V, C> {
    /// Cross-checks the lookup table against the order sequence
    pub(crate) fn _verify_integrity(&self) -> bool {
        self.m.len() == self.o.len()
            && self.o.iter().all(|k| self.m.contains_key(k))
            && (0..self.o.len()).all(|i| self._index_of(&self.o[i]) == Some(i))
    }
}

impl<K, V, C: Config<K, V>> IndexBaseSpec for IndexSTSeqVec<K, V, C> {
    const PREALLOC: bool = true;

    fn idx_init() -> Self {
        Self::with_hasher(C::Hasher::default())
    }

    fn idx_init_with(s: Self) -> Self {
        s
    }

    fn idx_init_cap(cap: usize) -> Self {
        Self::with_capacity_and_hasher(cap, C::Hasher::default())
    }
}

impl<K, V, C> STIndex<K, V> for IndexSTSeqVec<K, V, C>
where
    K: AsKey,
    V: AsValue,
    C: Config<K, V>,
{
    type IterKV<'a> = StdMapIterKV<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    type IterKey<'a> = StdMapIterKey<'a, K, V>
    where
        Self: 'a,
        K: 'a;

    type IterValue<'a> = StdMapIterVal<'a, K, V>
    where
        Self: 'a,
        V: 'a;

    fn st_compact(&mut self) {
        self.vacuum_full()
    }

    fn st_len(&self) -> usize {
        self.len()
    }

    fn st_clear(&mut self) {
        self._clear()
    }

    fn st_insert(&mut self, key: K, val: V) -> bool
    where
        K: AsKeyClone,
    {
        self._insert(key, val)
    }

    fn st_upsert(&mut self, key: K, val: V) -> Option<V>
    where
        K: AsKeyClone,
    {
        self._upsert(key, val)
    }

    fn st_contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.m.contains_key(key)
    }

    fn st_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self._get(key)
    }

    fn st_get_cloned<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
        V: AsValueClone,
    {
        self._get(key).cloned()
    }

    fn st_get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self._get_mut(key)
    }

    fn st_update<Q>(&mut self, key: &Q, val: V) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self._update(key, val).is_some()
    }

    fn st_update_return<Q>(&mut self, key: &Q, val: V) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self._update(key, val)
    }

    fn st_delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self._remove(key).is_some()
    }

    fn st_delete_return<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self._remove(key)
    }

    fn st_delete_if<Q>(&mut self, key: &Q, iff: impl Fn(&V) -> bool) -> Option<bool>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        match self._get(key) {
            Some(v) if iff(v) => {
                let _ = self._remove(key);
                Some(true)
            }
            Some(_) => Some(false),
            None => None,
        }
    }

    fn st_iter_kv<'a>(&'a self) -> Self::IterKV<'a> {
        self.m.iter()
    }

    fn st_iter_key<'a>(&'a self) -> Self::IterKey<'a> {
        self.m.keys()
    }

    fn st_iter_value<'a>(&'a self) -> Self::IterValue<'a> {
        self.m.values()
    }
}

impl<K, V, C> STIndexSeq<K, V> for IndexSTSeqVec<K, V, C>
where
    K: AsKey,
    V: AsValue,
    C: Config<K, V>,
{
    type IterOrdKV<'a> = IndexSTSeqVecIterOrdKV<'a, K, V, C::Hasher>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    type IterOrdKey<'a> = IndexSTSeqVecIterOrdKey<'a, K>
    where
        Self: 'a,
        K: 'a;
    type IterOrdValue<'a> = IndexSTSeqVecIterOrdValue<'a, K, V, C::Hasher>
    where
        Self: 'a,
        V: 'a;

    fn stseq_ord_kv<'a>(&'a self) -> Self::IterOrdKV<'a> {
        self._iter_ord_kv()
    }

    fn stseq_ord_key<'a>(&'a self) -> Self::IterOrdKey<'a> {
        self._iter_ord_k()
    }

    fn stseq_ord_value<'a>(&'a self) -> Self::IterOrdValue<'a> {
        self._iter_ord_v()
    }

    fn stseq_first_key(&self) -> Option<&K> {
        self.o.first()
    }

    fn stseq_last_key(&self) -> Option<&K> {
        self.o.last()
    }

    fn stseq_next_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self._index_of(key).and_then(|i| self.o.get(i + 1))
    }

    fn stseq_prev_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        match self._index_of(key) {
            Some(i) if i != 0 => self.o.get(i - 1),
            _ => None,
        }
    }
}

impl<K, V, C> STIndexPos<K, V> for IndexSTSeqVec<K, V, C>
where
    K: AsKey,
    V: AsValue,
    C: Config<K, V>,
{
    fn stpos_key_at(&self, index: usize) -> PosResult<&K> {
        self._key_at(index)
    }

    fn stpos_value_at(&self, index: usize) -> PosResult<&V> {
        self._value_at(index)
    }

    fn stpos_index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self._index_of(key)
    }

    fn stpos_upsert_at(&mut self, index: usize, key: K, val: V) -> PosResult<Option<V>>
    where
        K: AsKeyClone,
    {
        self._upsert_at(index, key, val)
    }

    fn stpos_upsert_all<I>(&mut self, source: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsKeyClone,
    {
        self._upsert_all(source)
    }

    fn stpos_upsert_all_at<I>(&mut self, index: usize, source: I) -> PosResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsKeyClone,
    {
        self._upsert_all_at(index, source)
    }

    fn stpos_remove_at(&mut self, index: usize) -> PosResult<V> {
        self._remove_at(index)
    }

    fn stpos_set_value_at(&mut self, index: usize, val: V) -> PosResult<V> {
        self._set_value_at(index, val)
    }
}

impl<K: AsKeyClone, V: AsValue, C: Config<K, V>> FromIterator<(K, V)> for IndexSTSeqVec<K, V, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut slf = Self::with_hasher(C::Hasher::default());
        slf._upsert_all(iter);
        slf
    }
}

impl<K: AsKeyClone, V: AsValue, C: Config<K, V>> Extend<(K, V)> for IndexSTSeqVec<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self._upsert_all(iter)
    }
}

impl<K: AsKeyClone, V: AsValue, C: Config<K, V>, S> From<StdMap<K, V, S>>
    for IndexSTSeqVec<K, V, C>
{
    fn from(m: StdMap<K, V, S>) -> Self {
        m.into_iter().collect()
    }
}

impl<K: AsKey, V, C: Config<K, V>> IntoIterator for IndexSTSeqVec<K, V, C> {
    type Item = (K, V);
    type IntoIter = IndexSTSeqVecIntoIter<K, V, C::Hasher>;
    fn into_iter(self) -> Self::IntoIter {
        IndexSTSeqVecIntoIter::new(self)
    }
}

impl<'a, K: AsKey, V: AsValue, C: Config<K, V>> IntoIterator for &'a IndexSTSeqVec<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = IndexSTSeqVecIterOrdKV<'a, K, V, C::Hasher>;
    fn into_iter(self) -> Self::IntoIter {
        self._iter_ord_kv()
    }
}

impl<K: AsKeyClone, V: AsValueClone, C: Config<K, V>> Clone for IndexSTSeqVec<K, V, C> {
    fn clone(&self) -> Self {
        let mut slf = Self::with_capacity_and_hasher(self.len(), C::Hasher::default());
        self._iter_ord_kv()
            .map(|(k, v)| (k.read_key_clone(), v.read_value_clone()))
            .for_each(|(k, v)| {
                let _ = slf._upsert(k, v);
            });
        slf
    }
}

impl<K: AsKey + Debug, V: AsValue + Debug, C: Config<K, V>> Debug for IndexSTSeqVec<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self._iter_ord_kv()).finish()
    }
}

impl<K: AsKey, V: AsValue + PartialEq, C: Config<K, V>> PartialEq for IndexSTSeqVec<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self._iter_ord_kv().all(|(k, v)| other._get(k) == Some(v))
    }
}
