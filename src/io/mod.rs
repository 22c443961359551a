//! Reading docking structures and writing interaction tables.
//!
//! - PDBQT receptors and multi-model docking results ([`read_receptor`],
//!   [`read_docked`])
//! - Delimited one-hot tables and long-form contact lists ([`write_table`],
//!   [`write_contacts`])

use std::fmt;
use std::io::{BufRead, Write};

pub mod error;

mod pdbqt {
    pub mod reader;
}

mod delimited {
    pub mod writer;
}

use crate::fingerprint::PoseRecord;
use crate::model::system::{DockedMolecule, Structure};
use crate::model::table::InteractionTable;
pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdbqt,
    Csv,
    Tsv,
}

impl Format {
    /// Field delimiter of a tabular format.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            Format::Csv => Some(b','),
            Format::Tsv => Some(b'\t'),
            Format::Pdbqt => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Pdbqt => write!(f, "PDBQT"),
            Format::Csv => write!(f, "CSV"),
            Format::Tsv => write!(f, "TSV"),
        }
    }
}

/// Reads a rigid receptor; every atom gets the receptor role.
pub fn read_receptor<R: BufRead>(reader: R) -> Result<Structure, Error> {
    pdbqt::reader::read_receptor(reader)
}

/// Reads a docking result, one pose per `MODEL` block.
pub fn read_docked<R: BufRead>(reader: R, name: &str) -> Result<DockedMolecule, Error> {
    pdbqt::reader::read_docked(reader, name)
}

/// Writes a one-hot table with a two-row header (type, then partner).
pub fn write_table<W: Write>(writer: W, table: &InteractionTable, delimiter: u8) -> Result<(), Error> {
    delimited::writer::write_table(writer, table, delimiter)
}

/// Writes one `name, pose, interaction, partner` line per recorded label.
pub fn write_contacts<W: Write>(writer: W, records: &[PoseRecord], delimiter: u8) -> Result<(), Error> {
    delimited::writer::write_contacts(writer, records, delimiter)
}
