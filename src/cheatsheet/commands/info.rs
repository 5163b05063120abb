use crate::commands::{CmdResult, SheetSummary};
use crate::error::Result;
use crate::store::{SheetLocation, SheetStore};

pub fn run<S: SheetStore>(store: &S, location: &SheetLocation) -> Result<CmdResult> {
    let sheet = store.load(location)?;
    let summary = SheetSummary {
        entry_count: sheet.len(),
        tags: sheet.tag_universe().clone(),
        primary_counts: sheet.primary_counts(),
    };
    Ok(CmdResult::default().with_summary(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tag_set;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn summarises_list() {
        let fixture = StoreFixture::new()
            .with_entry("bash,cli", "one", "1")
            .with_entry("bash", "two", "2")
            .with_entry("git,cli", "three", "3");

        let summary = run(&fixture.store, &SheetLocation::Default)
            .unwrap()
            .summary
            .unwrap();
        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.tags, tag_set(["bash", "cli", "git"]));
        assert_eq!(
            summary.primary_counts,
            vec![("bash".to_string(), 2), ("git".to_string(), 1)]
        );
    }

    #[test]
    fn empty_list_has_empty_summary() {
        let fixture = StoreFixture::new();
        let summary = run(&fixture.store, &SheetLocation::Default)
            .unwrap()
            .summary
            .unwrap();
        assert_eq!(summary, SheetSummary::default());
    }
}
