//! One-hot encoding of pose records into an [`InteractionTable`].

use std::collections::HashMap;

use super::accumulator::PoseRecord;
use crate::model::label::{InteractionLabel, LabelSets};
use crate::model::table::{ColumnKey, InteractionTable, RowKey};

/// Encodes `records` over the columns of `vocabulary`.
///
/// Columns follow the vocabulary's iteration order (hb, vdw, water). Columns
/// with no set cell are dropped. Rows keep record order and carry 1-based
/// pose numbers. Zero records give an empty table.
pub fn encode(records: &[PoseRecord], vocabulary: &LabelSets) -> InteractionTable {
    let labels: Vec<&InteractionLabel> = vocabulary.iter().collect();
    let column_of: HashMap<&InteractionLabel, usize> =
        labels.iter().enumerate().map(|(i, &l)| (l, i)).collect();

    let width = labels.len();
    let mut dense = vec![0u8; records.len() * width];
    for (row, record) in records.iter().enumerate() {
        for label in record.labels.iter() {
            if let Some(&col) = column_of.get(label) {
                dense[row * width + col] = 1;
            }
        }
    }

    let keep: Vec<usize> = (0..width)
        .filter(|&col| (0..records.len()).any(|row| dense[row * width + col] != 0))
        .collect();

    let columns = keep
        .iter()
        .map(|&col| ColumnKey {
            kind: labels[col].kind,
            partner: labels[col].partner(),
        })
        .collect();

    let mut cells = Vec::with_capacity(records.len() * keep.len());
    for row in 0..records.len() {
        cells.extend(keep.iter().map(|&col| dense[row * width + col]));
    }

    let rows = records
        .iter()
        .map(|r| RowKey {
            name: r.name.clone(),
            pose: r.pose_id + 1,
        })
        .collect();

    InteractionTable {
        columns,
        rows,
        cells,
    }
}
