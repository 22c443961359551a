use crate::model::label::LabelSets;

/// Labels observed for one pose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoseRecord {
    pub name: String,
    /// 0-based pose id as reported by the provider.
    pub pose_id: usize,
    pub labels: LabelSets,
}

/// Append-only store of pose records and the label vocabulary.
///
/// The vocabulary is the union of all recorded label sets. Neither records
/// nor vocabulary entries are ever removed.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    records: Vec<PoseRecord>,
    vocabulary: LabelSets,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and merges its labels into the vocabulary.
    pub fn record(&mut self, name: impl Into<String>, pose_id: usize, labels: LabelSets) {
        self.vocabulary.extend_from(&labels);
        self.records.push(PoseRecord {
            name: name.into(),
            pose_id,
            labels,
        });
    }

    #[inline]
    pub fn records(&self) -> &[PoseRecord] {
        &self.records
    }

    #[inline]
    pub fn vocabulary(&self) -> &LabelSets {
        &self.vocabulary
    }

    #[inline]
    pub fn pose_count(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
