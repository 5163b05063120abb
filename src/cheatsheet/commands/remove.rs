use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{SheetLocation, SheetStore};

pub fn run<S: SheetStore>(store: &mut S, location: &SheetLocation, id: u32) -> Result<CmdResult> {
    let mut sheet = store.load(location)?;
    let removed = sheet.remove(id)?;
    let path = store.save(&sheet, location)?;

    let mut result = CmdResult::default().with_saved_to(path);
    result.add_message(CmdMessage::success(format!(
        "Entry removed ({}): {}",
        id,
        removed.clue()
    )));
    Ok(result.with_affected_entries(vec![removed]))
}
