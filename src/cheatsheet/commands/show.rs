use crate::commands::CmdResult;
use crate::error::Result;
use crate::matcher::TagMatcher;
use crate::store::{SheetLocation, SheetStore};

pub fn run<S: SheetStore>(store: &S, location: &SheetLocation, matcher: &TagMatcher) -> Result<CmdResult> {
    let sheet = store.load(location)?;
    let listed = sheet.query(matcher).into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_entries(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::Combinator;
    use crate::model::tag_set;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_entry("bash", "one", "1")
            .with_entry("python,bash", "two", "2")
            .with_entry("x,y", "three", "3")
    }

    fn clues(result: &CmdResult) -> Vec<&str> {
        result.listed_entries.iter().map(|e| e.clue()).collect()
    }

    #[test]
    fn shows_everything_without_filter() {
        let fixture = fixture();
        let result = run(&fixture.store, &SheetLocation::Default, &TagMatcher::everything()).unwrap();
        assert_eq!(clues(&result), vec!["one", "two", "three"]);
    }

    #[test]
    fn filters_with_any() {
        let fixture = fixture();
        let matcher = TagMatcher::new(tag_set(["bash"]), Combinator::Any);
        let result = run(&fixture.store, &SheetLocation::Default, &matcher).unwrap();
        assert_eq!(clues(&result), vec!["one", "two"]);
    }

    #[test]
    fn filters_with_all() {
        let fixture = fixture();
        let matcher = TagMatcher::new(tag_set(["python", "bash"]), Combinator::All);
        let result = run(&fixture.store, &SheetLocation::Default, &matcher).unwrap();
        assert_eq!(clues(&result), vec!["two"]);
    }

    #[test]
    fn empty_list_shows_nothing() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store, &SheetLocation::Default, &TagMatcher::everything()).unwrap();
        assert!(result.listed_entries.is_empty());
    }
}
