use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

/// Strip embedded markup tags from a fragment, then collapse whitespace
/// runs (including `&nbsp;` entities) to single spaces and trim.
///
/// Pure and idempotent; every extractor that reads inner markup funnels
/// through here.
pub fn remove_tags_and_spaces(fragment: &str) -> String {
    let stripped = TAG.replace_all(fragment, "");
    let stripped = stripped.replace("&nbsp;", " ");

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags() {
        assert_eq!(
            remove_tags_and_spaces("<span class=\"pos\">n.</span>world"),
            "n.world"
        );
    }

    #[test]
    fn collapses_entities_and_whitespace() {
        assert_eq!(
            remove_tags_and_spaces("  美&nbsp;[wɜrld]\n\t英 \u{a0} [wɜːld]  "),
            "美 [wɜrld] 英 [wɜːld]"
        );
    }

    #[test]
    fn empty_and_tag_only_fragments_yield_empty() {
        assert_eq!(remove_tags_and_spaces(""), "");
        assert_eq!(remove_tags_and_spaces("<div><br/></div>"), "");
    }

    #[test]
    fn is_idempotent() {
        let once = remove_tags_and_spaces("<b>a</b>&nbsp; b\u{a0}c  <i>d</i>");
        let twice = remove_tags_and_spaces(&once);
        assert_eq!(once, twice);
    }
}
