use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SheetStore;

pub fn run<S: SheetStore>(store: &S) -> Result<CmdResult> {
    let names = store.list_names()?;
    let mut result = CmdResult::default();
    if names.is_empty() {
        result.add_message(CmdMessage::info("No cheat sheet lists found."));
    }
    Ok(result.with_list_names(names))
}
