use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Entry, Tags};
use crate::store::{SheetLocation, SheetStore};

/// Adds `entry` to the list at `location`.
///
/// If the entry brings tags the list has never used, `approve` is asked first
/// with those tags; when it declines nothing is saved. The list is loaded once
/// for both the check and the insert.
pub fn run<S, F>(store: &mut S, location: &SheetLocation, entry: Entry, approve: F) -> Result<CmdResult>
where
    S: SheetStore,
    F: FnOnce(&Tags) -> Result<bool>,
{
    let mut sheet = store.load(location)?;
    let unseen = sheet.new_tags(entry.primary(), entry.tags());
    if !unseen.is_empty() && !approve(&unseen)? {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("Entry not added"));
        return Ok(result);
    }

    let id = sheet.add_new(entry)?;
    let added = sheet.get(id)?.clone();
    let path = store.save(&sheet, location)?;

    let mut result = CmdResult::default()
        .with_affected_entries(vec![added])
        .with_saved_to(path);
    result.add_message(CmdMessage::success(format!("Entry added ({})", id)));
    Ok(result)
}
