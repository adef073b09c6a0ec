use serde_json::Value;

use super::listing::Listing;
use super::normalizer::normalize;
use crate::error::DirectoryError;

/// Normalize every child node, in order.
///
/// Fails fast: the first bad child aborts the whole listing, so a caller
/// never receives a listing with silent gaps.
pub fn parse_children(children: &[Value]) -> Result<Listing, DirectoryError> {
    let subreddits = children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            normalize(child).map_err(|e| DirectoryError::FieldCoercion {
                field: e.field,
                index: Some(index),
                reason: e.reason,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Listing::new(subreddits))
}
