// ABOUTME: Ingredient coverage predicate and recipe search modes
// ABOUTME: Query search filters by named terms, fridge search by what the fridge can satisfy
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Recipe Matching
//!
//! Both search modes share one predicate, [`covers`]: every required term must
//! appear at least once in the available collection. It is an AND over the
//! required terms with no scoring or partial credit.
//!
//! - **Query search** ([`search_by_ingredients`]): the query terms are required and
//!   each recipe's ingredient list is available. A recipe matches when it uses
//!   every queried ingredient.
//! - **Fridge search** ([`recipes_from_fridge`]): the direction is reversed. A recipe
//!   matches when every ingredient it needs is in the fridge.
//!
//! Both inputs are linear scans over short lists and keep store order.

use crate::constants::{messages, parsing::QUERY_SEPARATOR};
use crate::errors::{AppError, AppResult};
use crate::models::{normalize, Recipe};
use tracing::debug;

/// True iff every element of `required` is present in `available`.
///
/// Stops at the first missing term. An empty `required` is trivially covered.
#[must_use]
pub fn covers<R, A>(required: &[R], available: &[A]) -> bool
where
    R: AsRef<str>,
    A: AsRef<str>,
{
    required.iter().all(|term| {
        available
            .iter()
            .any(|candidate| candidate.as_ref() == term.as_ref())
    })
}

/// Split a comma-separated ingredients query into normalized terms.
///
/// Blank terms (from `"a,,b"` or trailing commas) are dropped.
///
/// # Errors
///
/// Returns a client input error when no term remains, which includes the
/// empty string.
pub fn parse_query(raw: &str) -> AppResult<Vec<String>> {
    let terms: Vec<String> = raw
        .split(QUERY_SEPARATOR)
        .map(normalize)
        .filter(|term| !term.is_empty())
        .collect();

    if terms.is_empty() {
        return Err(AppError::missing_field("ingredients"));
    }

    Ok(terms)
}

/// Recipes that use every ingredient named in `raw_query`.
///
/// # Errors
///
/// - client input error if the query is empty
/// - not found if no recipe matches
pub fn search_by_ingredients<'a>(
    recipes: &'a [Recipe],
    raw_query: &str,
) -> AppResult<Vec<&'a Recipe>> {
    let terms = parse_query(raw_query)?;

    let found: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| covers(&terms, &recipe.ingredients))
        .collect();

    debug!(
        matcher.mode = "ingredients",
        matcher.terms = terms.len(),
        matcher.matches = found.len(),
        "Ingredient search finished"
    );

    if found.is_empty() {
        return Err(AppError::nothing_found(
            messages::NO_RECIPES_FOR_INGREDIENTS,
        ));
    }

    Ok(found)
}

/// Recipes whose every ingredient is in `fridge`.
///
/// # Errors
///
/// Returns not found if the fridge is empty (checked before any matching) or
/// if no recipe can be made from it.
pub fn recipes_from_fridge<'a, S>(
    recipes: &'a [Recipe],
    fridge: &[S],
) -> AppResult<Vec<&'a Recipe>>
where
    S: AsRef<str>,
{
    if fridge.is_empty() {
        return Err(AppError::nothing_found(messages::FRIDGE_EMPTY));
    }

    let available: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| covers(&recipe.ingredients, fridge))
        .collect();

    debug!(
        matcher.mode = "fridge",
        fridge.size = fridge.len(),
        matcher.matches = available.len(),
        "Fridge search finished"
    );

    if available.is_empty() {
        return Err(AppError::nothing_found(messages::NO_RECIPES_FOR_FRIDGE));
    }

    Ok(available)
}
