mod contacts;
mod pipeline;
mod table;

use contacts::run_contacts;
use table::run_table;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Table(args) => run_table(args, ctx),
        Command::Contacts(args) => run_contacts(args, ctx),
    }
}
