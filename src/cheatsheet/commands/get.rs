use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{SheetLocation, SheetStore};

pub fn run<S: SheetStore>(store: &S, location: &SheetLocation, id: u32) -> Result<CmdResult> {
    let sheet = store.load(location)?;
    let entry = sheet.get(id)?.clone();
    Ok(CmdResult::default().with_listed_entries(vec![entry]))
}
