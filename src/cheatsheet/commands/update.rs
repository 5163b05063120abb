use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EntryUpdate;
use crate::store::{SheetLocation, SheetStore};

/// Applies `update` to entry `id`. The list is only written back when the
/// entry actually changed.
pub fn run<S: SheetStore>(
    store: &mut S,
    location: &SheetLocation,
    id: u32,
    update: EntryUpdate,
) -> Result<CmdResult> {
    let mut sheet = store.load(location)?;
    let updated = sheet.update(id, update)?.clone();

    let mut result = CmdResult::default();
    if sheet.is_modified() {
        let path = store.save(&sheet, location)?;
        result = result.with_saved_to(path);
        result.add_message(CmdMessage::success(format!("Entry updated ({})", id)));
    } else {
        result.add_message(CmdMessage::info(format!("Entry {} unchanged", id)));
    }
    Ok(result.with_affected_entries(vec![updated]))
}
