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

use {
    crate::idx::meta::AsHasher,
    std::{collections::hash_map::RandomState, marker::PhantomData},
};

/// Compile-time configuration for a positional index
pub trait Config<K, V> {
    type Hasher: AsHasher;
}

#[derive(Debug, Default)]
pub struct DefConfig<K, V>(PhantomData<super::IndexSTSeqVec<K, V, Self>>);

impl<K, V> Config<K, V> for DefConfig<K, V> {
    type Hasher = RandomState;
}
