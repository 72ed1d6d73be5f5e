//! Collision resolution for merged column names.

use crate::constants::{CAMPAIGN_COLLISION_SUFFIX, SALES_COLLISION_SUFFIX};
use crate::errors::Result;
use crate::frame::Frame;

use super::combine_model::TableSide;

/// Explicit precedence for bare-name ownership when both tables carry the
/// same column: realized sales revenue outranks campaign-reported revenue,
/// spend is a campaign measure, and unlisted names default to the campaign
/// side. Resolution depends only on this table, never on column order.
const COLLISION_PRECEDENCE: &[(&str, TableSide)] = &[
    ("revenue", TableSide::Sales),
    ("spend", TableSide::Campaign),
];

/// Which side owns the bare name for a collided column.
pub(crate) fn winning_side(name: &str) -> TableSide {
    COLLISION_PRECEDENCE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, side)| *side)
        .unwrap_or(TableSide::Campaign)
}

/// Strip the winning side's suffix for every collision recorded by the
/// merge.
///
/// Only merge-added suffixes participate: `collisions` lists the bare names
/// the merge suffixed, so a source column that happened to end in
/// `_campaign` is never renamed. If the bare name is already taken by a
/// pre-existing column, both sides keep their suffixes.
pub(crate) fn resolve_collisions(frame: &mut Frame, collisions: &[String]) -> Result<()> {
    for base in collisions {
        if frame.has_column(base) {
            continue;
        }
        let side = winning_side(base);
        let suffix = match side {
            TableSide::Campaign => CAMPAIGN_COLLISION_SUFFIX,
            TableSide::Sales => SALES_COLLISION_SUFFIX,
        };
        let suffixed = format!("{base}{suffix}");
        if frame.has_column(&suffixed) {
            log::debug!("resolving column collision '{}' to the {} side", base, side);
            frame.rename_column(&suffixed, base.clone())?;
        }
    }
    Ok(())
}
