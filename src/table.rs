//! Monomial position tables shared by homogeneous polynomials.
//!
//! A [`PolyTable`] for `n` variables and maximum order `N` lists, for every
//! degree `d ≤ N`, the monomials of total degree `d` (as exponent vectors)
//! in a fixed order, and maps each monomial to its slot.
//!
//! Monomials are keyed by `Σ_v e_v · (N+1)^v`. Exponents never exceed `N`,
//! so the key of a product is the sum of the keys of its factors and the
//! slot of `m_i · m_j` is found with one hash lookup.
//!
//! Tables are built by an explicit [`PolyTable::setup`] call, leaked to
//! `&'static` and cached per `(num_vars, max_order)`. They are never mutated
//! afterwards, so every polynomial can hold a shared reference.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use log::debug;
use rustc_hash::FxHashMap;

use crate::error::SeriesError;

type Registry = Mutex<HashMap<(usize, usize), &'static PolyTable>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Immutable monomial index for `num_vars` variables up to `max_order`.
pub struct PolyTable {
    num_vars: usize,
    max_order: usize,
    /// `monomials[d][i]`: exponent vector of slot `i` in degree `d`.
    monomials: Vec<Vec<Vec<usize>>>,
    /// `keys[d][i]`: packed key of `monomials[d][i]`.
    keys: Vec<Vec<u64>>,
    /// `positions[d]`: key → slot.
    positions: Vec<FxHashMap<u64, usize>>,
}

impl fmt::Debug for PolyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyTable")
            .field("num_vars", &self.num_vars)
            .field("max_order", &self.max_order)
            .finish()
    }
}

impl PolyTable {
    /// Return the table for `(num_vars, max_order)`, building it on first use.
    ///
    /// Must be called before any homogeneous-polynomial arithmetic with those
    /// parameters. Repeated calls return the same `&'static` table.
    pub fn setup(num_vars: usize, max_order: usize) -> Result<&'static PolyTable, SeriesError> {
        assert!(num_vars > 0, "a polynomial table needs at least one variable");
        let registry = REGISTRY.get_or_init(Default::default);
        let mut tables = registry.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(&table) = tables.get(&(num_vars, max_order)) {
            return Ok(table);
        }
        let table: &'static PolyTable = Box::leak(Box::new(Self::build(num_vars, max_order)?));
        debug!(
            "built monomial table: {} variables, max order {}, {} monomials",
            num_vars,
            max_order,
            table.keys.iter().map(Vec::len).sum::<usize>()
        );
        tables.insert((num_vars, max_order), table);
        Ok(table)
    }

    fn build(num_vars: usize, max_order: usize) -> Result<Self, SeriesError> {
        let overflow = SeriesError::TableOverflow {
            num_vars,
            max_order,
        };
        let base = max_order as u64 + 1;
        // Keys must hold (N+1)^n - 1; only weights of actual variables are formed.
        let mut weights = Vec::with_capacity(num_vars);
        let mut w = 1u64;
        for v in 0..num_vars {
            weights.push(w);
            if v + 1 < num_vars {
                w = w.checked_mul(base).ok_or_else(|| overflow.clone())?;
            }
        }

        let mut monomials = Vec::with_capacity(max_order + 1);
        let mut keys = Vec::with_capacity(max_order + 1);
        let mut positions = Vec::with_capacity(max_order + 1);
        for degree in 0..=max_order {
            let mut list = Vec::new();
            let mut current = vec![0; num_vars];
            push_monomials(degree, 0, &mut current, &mut list);
            let degree_keys: Vec<u64> = list
                .iter()
                .map(|m| m.iter().zip(&weights).map(|(&e, &w)| e as u64 * w).sum())
                .collect();
            let map = degree_keys.iter().enumerate().map(|(i, &k)| (k, i)).collect();
            monomials.push(list);
            keys.push(degree_keys);
            positions.push(map);
        }

        Ok(PolyTable {
            num_vars,
            max_order,
            monomials,
            keys,
            positions,
        })
    }

    #[inline]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    #[inline]
    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// Number of monomials of total degree `degree`.
    #[inline]
    pub fn len(&self, degree: usize) -> usize {
        self.keys[degree].len()
    }

    /// Exponent vectors of degree `degree`, in slot order.
    #[inline]
    pub fn monomials(&self, degree: usize) -> &[Vec<usize>] {
        &self.monomials[degree]
    }

    /// Slot of the monomial with the given exponents, if it is in the table.
    pub fn position(&self, exponents: &[usize]) -> Option<usize> {
        if exponents.len() != self.num_vars {
            return None;
        }
        let degree: usize = exponents.iter().sum();
        if degree > self.max_order {
            return None;
        }
        let base = self.max_order as u64 + 1;
        let key = exponents
            .iter()
            .rev()
            .fold(0u64, |acc, &e| acc * base + e as u64);
        self.positions[degree].get(&key).copied()
    }

    /// Slot in degree `da + db` of the product of slot `i` (degree `da`) and
    /// slot `j` (degree `db`). Requires `da + db ≤ max_order`.
    #[inline]
    pub(crate) fn product_position(&self, da: usize, i: usize, db: usize, j: usize) -> usize {
        self.positions[da + db][&(self.keys[da][i] + self.keys[db][j])]
    }
}

/// Enumerate exponent vectors of total degree `remaining` over variables
/// `var..`, highest power of the first variable first.
fn push_monomials(remaining: usize, var: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    if var + 1 == current.len() {
        current[var] = remaining;
        out.push(current.clone());
        current[var] = 0;
        return;
    }
    for e in (0..=remaining).rev() {
        current[var] = e;
        push_monomials(remaining - e, var + 1, current, out);
    }
    current[var] = 0;
}
