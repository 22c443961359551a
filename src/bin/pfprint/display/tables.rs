use std::collections::BTreeSet;
use std::io::{self, Write};

use pose_fingerprint::{
    AtomProperty, DockedMolecule, InteractionTable, PoseProvider, Role, Structure,
};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const MAX_DISTRIBUTION_ROWS: usize = 15;

pub fn print_receptor_info(receptor: &Structure) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let atoms = receptor.atoms();
    let residues: BTreeSet<_> = atoms.iter().map(|a| (a.chain_id, a.residue_id)).collect();
    let chains: BTreeSet<_> = atoms.iter().map(|a| a.chain_id).collect();
    let count = |p: AtomProperty| atoms.iter().filter(|a| a.property() == p).count();

    let rows = vec![
        ("Atoms", receptor.atom_count().to_string()),
        ("Bonds", receptor.bond_count().to_string()),
        ("Residues", residues.len().to_string()),
        ("Chains", chains.iter().collect::<String>()),
        ("H-bond Donors", count(AtomProperty::HbDonor).to_string()),
        ("H-bond Acceptors", count(AtomProperty::HbAcceptor).to_string()),
    ];

    print_kv_table(&mut out, "Receptor", &rows);
}

pub fn print_docking_summary(molecules: &[DockedMolecule]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let poses: usize = molecules.iter().map(|m| m.pose_count()).sum();
    let flexible = molecules.iter().filter(|m| m.has_flexible_residues()).count();
    let waters: usize = molecules
        .iter()
        .flat_map(|m| m.poses())
        .map(|p| p.structure().role_count(Role::Water))
        .sum();

    let rows = vec![
        ("Docking Results", molecules.len().to_string()),
        ("Poses", poses.to_string()),
        ("With Flex Res.", flexible.to_string()),
        ("Water Atoms", waters.to_string()),
    ];

    print_kv_table(&mut out, "Docking Results", &rows);
}

pub fn print_interaction_summary(table: &InteractionTable) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    if table.is_empty() {
        let _ = writeln!(out, "{}No interactions found.", INDENT);
        return;
    }

    let kinds: Vec<(String, usize)> = table
        .kind_counts()
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(kind, n)| (kind.name().to_string(), n))
        .collect();
    print_distribution_table(
        &mut out,
        "Columns by Interaction",
        "Kind",
        &kinds,
        table.column_count(),
    );

    let mut partners: Vec<(String, usize)> = table
        .columns
        .iter()
        .zip(table.column_sums())
        .map(|(c, n)| (format!("{} {}", c.kind.prefix(), c.partner), n))
        .collect();
    partners.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    print_distribution_table(
        &mut out,
        "Most Frequent Contacts (share of poses)",
        "Contact",
        &partners,
        table.row_count(),
    );
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    heading: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 14usize;
    let count_w = 6usize;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + 6);
    let bar_w = dist_w.saturating_sub(8).min(20);

    let rule = |l: &str, m: &str, r: &str| {
        format!(
            "{}{l}{}{m}{}{m}{}{r}",
            INDENT,
            "─".repeat(name_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(dist_w + 2),
        )
    };

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, heading, "Count", "Share"
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (name, count) in data.iter().take(MAX_DISTRIBUTION_ROWS) {
        let pct = if total == 0 {
            0.0
        } else {
            *count as f64 / total as f64 * 100.0
        };
        let cell = format!("{}  {:>5.1}%", make_bar(pct, bar_w), pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(name, name_w),
            count,
            cell
        );
    }

    if data.len() > MAX_DISTRIBUTION_ROWS {
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            "...",
            "...",
            format!("({} more)", data.len() - MAX_DISTRIBUTION_ROWS)
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + 6);
    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{}┌{k_line}┬{v_line}┐", INDENT);
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w)
        );
    }
    let _ = writeln!(out, "{}└{k_line}┴{v_line}┘", INDENT);
}

fn make_bar(pct: f64, width: usize) -> String {
    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(make_bar(50.0, 4), "██░░");
        assert_eq!(make_bar(0.0, 3), "░░░");
        assert_eq!(make_bar(100.0, 2), "██");
    }

    #[test]
    fn bar_clamps_out_of_range_shares() {
        assert_eq!(make_bar(150.0, 2), "██");
    }

    #[test]
    fn distribution_table_marks_overflow() {
        let data: Vec<(String, usize)> = (0..20).map(|i| (format!("A:{}", i), 1)).collect();
        let mut buf = Vec::new();
        print_distribution_table(&mut buf, "Contacts", "Contact", &data, 20);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("(5 more)"));
        assert!(text.contains("A:14"));
        assert!(!text.contains("A:15 "));
    }

    #[test]
    fn kv_table_lists_every_row() {
        let mut buf = Vec::new();
        print_kv_table(
            &mut buf,
            "Receptor",
            &[("Atoms", "12".to_string()), ("Chains", "AB".to_string())],
        );
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("Chains"));
    }
}
