use super::label::InteractionKind;

/// Two-level column key: interaction type and partner identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnKey {
    pub kind: InteractionKind,
    pub partner: String,
}

/// Row key: pose name and 1-based pose number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub name: String,
    pub pose: usize,
}

/// One-hot interaction table, one row per pose and one column per label.
///
/// Cells are stored row-major. Every column has at least one set cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionTable {
    pub columns: Vec<ColumnKey>,
    pub rows: Vec<RowKey>,
    pub cells: Vec<u8>,
}

impl InteractionTable {
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of one row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.row_count() {
            return None;
        }
        let width = self.column_count();
        self.cells.get(row * width..(row + 1) * width)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if row >= self.row_count() || column >= self.column_count() {
            return None;
        }
        Some(self.cells[row * self.column_count() + column])
    }

    pub fn column_index(&self, kind: InteractionKind, partner: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.kind == kind && c.partner == partner)
    }

    pub fn row_index(&self, name: &str, pose: usize) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| r.name == name && r.pose == pose)
    }

    /// Cell lookup by keys rather than positions.
    pub fn value(&self, name: &str, pose: usize, kind: InteractionKind, partner: &str) -> Option<u8> {
        let row = self.row_index(name, pose)?;
        let column = self.column_index(kind, partner)?;
        self.get(row, column)
    }

    pub fn column_sums(&self) -> Vec<usize> {
        let width = self.column_count();
        let mut sums = vec![0usize; width];
        if width == 0 {
            return sums;
        }
        for row in self.cells.chunks_exact(width) {
            for (sum, &cell) in sums.iter_mut().zip(row) {
                *sum += cell as usize;
            }
        }
        sums
    }

    /// Number of columns per interaction kind, in column order.
    pub fn kind_counts(&self) -> Vec<(InteractionKind, usize)> {
        InteractionKind::ALL
            .iter()
            .map(|&kind| (kind, self.columns.iter().filter(|c| c.kind == kind).count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InteractionTable {
        InteractionTable {
            columns: vec![
                ColumnKey {
                    kind: InteractionKind::HBond,
                    partner: "A:12:OG".into(),
                },
                ColumnKey {
                    kind: InteractionKind::Vdw,
                    partner: "B:5".into(),
                },
            ],
            rows: vec![
                RowKey {
                    name: "lig".into(),
                    pose: 1,
                },
                RowKey {
                    name: "lig".into(),
                    pose: 2,
                },
            ],
            cells: vec![1, 0, 1, 1],
        }
    }

    #[test]
    fn positional_access() {
        let t = sample();
        assert_eq!(t.row_count(), 2);
        assert_eq!(t.column_count(), 2);
        assert_eq!(t.row(0), Some(&[1, 0][..]));
        assert_eq!(t.row(1), Some(&[1, 1][..]));
        assert_eq!(t.row(2), None);
        assert_eq!(t.get(0, 1), Some(0));
        assert_eq!(t.get(2, 0), None);
        assert_eq!(t.get(0, 2), None);
    }

    #[test]
    fn keyed_access() {
        let t = sample();
        assert_eq!(t.value("lig", 2, InteractionKind::Vdw, "B:5"), Some(1));
        assert_eq!(t.value("lig", 1, InteractionKind::Vdw, "B:5"), Some(0));
        assert_eq!(t.value("lig", 3, InteractionKind::Vdw, "B:5"), None);
        assert_eq!(t.value("lig", 1, InteractionKind::Water, "B:5"), None);
    }

    #[test]
    fn sums_and_kind_counts() {
        let t = sample();
        assert_eq!(t.column_sums(), vec![2, 1]);
        assert_eq!(
            t.kind_counts(),
            vec![
                (InteractionKind::HBond, 1),
                (InteractionKind::Vdw, 1),
                (InteractionKind::Water, 0)
            ]
        );
    }

    #[test]
    fn empty_table() {
        let t = InteractionTable::default();
        assert!(t.is_empty());
        assert!(t.column_sums().is_empty());
    }
}
