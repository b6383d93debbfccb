use std::collections::HashSet;

use tracing::{debug, trace};

use crate::{Match, Rule, Settings};

pub(crate) fn first_match<'r>(rules: &'r [Rule], path: &str) -> Option<Match<'r>> {
    rules.iter().find_map(|rule| {
        trace!(path, line = rule.line(), pattern = rule.pattern(), "trying rule");
        rule.apply(path).map(|destination| Match::new(rule, destination))
    })
}

pub(crate) fn resolve<'r>(rules: &'r [Rule], start: &str, settings: &Settings) -> Vec<Match<'r>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut chain: Vec<Match<'r>> = Vec::new();
    let mut next = first_match(rules, start);

    while let Some(hop) = next {
        debug!(
            start,
            line = hop.rule().line(),
            destination = hop.destination(),
            "matched"
        );

        if !seen.insert(hop.destination().to_owned()) {
            debug!(start, destination = hop.destination(), "cycle");
            return chain;
        }
        chain.push(hop);

        if settings.exceeds_hops(chain.len()) {
            debug!(start, hops = chain.len(), max_hops = settings.max_hops, "max hops");
            return chain;
        }

        next = match chain.last() {
            Some(last) if !last.destination().is_empty() => first_match(rules, last.destination()),
            _ => {
                debug!(start, "no-target redirect");
                return chain;
            }
        };
    }

    debug!(start, hops = chain.len(), "no more matches");
    chain
}

#[cfg(test)]
mod tests {
    use crate::{RuleSet, RuleSetBuilder, Settings};

    fn project_rule() -> RuleSet {
        RuleSetBuilder::new()
            .rule(&[
                "redirectmatch",
                "301",
                "^/project/([^/]+)/old_page.html$",
                "/project/$1/new_page.html",
            ])
            .build()
            .unwrap()
    }

    fn renamed(directive: &str, last_target: &str) -> RuleSet {
        RuleSetBuilder::new()
            .rule(&[directive, "301", "/renamed/old/", "/renamed/new1/"])
            .rule(&[directive, "301", "/renamed/new1/", "/renamed/new2/"])
            .rule(&[directive, "301", "/renamed/new2/", last_target])
            .build()
            .unwrap()
    }

    #[test]
    fn first_match_literal() {
        let ruleset = RuleSetBuilder::new()
            .rule(&[
                "redirect",
                "301",
                "/project/def/new_page.html",
                "/project/def/other_page.html",
            ])
            .build()
            .unwrap();

        let m = ruleset.first_match("/project/def/new_page.html").unwrap();
        assert_eq!(m.destination(), "/project/def/other_page.html");
        assert!(ruleset.first_match("/project/def/same_page.html").is_none());
    }

    #[test]
    fn first_match_regex() {
        let ruleset = project_rule();
        let m = ruleset.first_match("/project/def/old_page.html").unwrap();
        assert_eq!(m.destination(), "/project/def/new_page.html");
        assert!(ruleset.first_match("/project/def/same_page.html").is_none());
    }

    #[test]
    fn first_match_prefers_earlier_rule() {
        let ruleset = RuleSetBuilder::new()
            .rule(&["redirectmatch", "302", "^/a", "/first"])
            .rule(&["redirect", "301", "/a", "/second"])
            .build()
            .unwrap();
        let m = ruleset.first_match("/a").unwrap();
        assert_eq!(m.rule().line(), 1);
        assert_eq!(m.destination(), "/first");
        assert_eq!(m.code(), "302");
    }

    #[test]
    fn resolve_without_rules_is_empty() {
        let ruleset = RuleSet::default();
        assert!(ruleset
            .resolve("/project/def/old_page.html", &Settings::default())
            .is_empty());
    }

    #[test]
    fn resolve_single_hop() {
        let ruleset = project_rule();
        let chain = ruleset.resolve("/project/def/old_page.html", &Settings::default());
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].destination(), "/project/def/new_page.html");
    }

    #[test]
    fn resolve_follows_chain() {
        let ruleset = renamed("redirect", "/renamed/new3/");
        let chain = ruleset.resolve("/renamed/old/", &Settings::default());
        let destinations: Vec<&str> = chain.iter().map(|m| m.destination()).collect();
        assert_eq!(
            destinations,
            vec!["/renamed/new1/", "/renamed/new2/", "/renamed/new3/"]
        );
    }

    #[test]
    fn resolve_includes_hop_over_limit() {
        let ruleset = renamed("redirectmatch", "/renamed/new3/");
        let chain = ruleset.resolve("/renamed/old/", &Settings::new().with_max_hops(2));
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn resolve_stops_before_repeated_destination() {
        let ruleset = renamed("redirect", "/renamed/old/");
        let chain = ruleset.resolve("/renamed/old/", &Settings::default());
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0].rule().pattern(), chain[2].destination());
    }

    #[test]
    fn resolve_detects_cycle_not_involving_start() {
        // /start -> /a -> /b -> /a: the second /a is dropped.
        let ruleset = RuleSetBuilder::new()
            .rule(&["redirect", "301", "/start", "/a"])
            .rule(&["redirect", "301", "/a", "/b"])
            .rule(&["redirect", "301", "/b", "/a"])
            .build()
            .unwrap();
        let chain = ruleset.resolve("/start", &Settings::default());
        let destinations: Vec<&str> = chain.iter().map(|m| m.destination()).collect();
        assert_eq!(destinations, vec!["/a", "/b"]);
    }

    #[test]
    fn resolve_stops_at_terminal_rule() {
        let ruleset = RuleSetBuilder::new()
            .rule(&["redirect", "301", "/old", "/gone"])
            .rule(&["redirect", "410", "/gone"])
            .rule(&["redirectmatch", "301", "^$", "/never"])
            .build()
            .unwrap();
        let chain = ruleset.resolve("/old", &Settings::default());
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[1].destination(), "");
        assert_eq!(chain[1].code(), "410");
    }

    #[test]
    fn resolve_self_redirect() {
        let ruleset = RuleSetBuilder::new()
            .rule(&["redirect", "301", "/loop", "/loop"])
            .build()
            .unwrap();
        let chain = ruleset.resolve("/loop", &Settings::default());
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].destination(), "/loop");
    }
}
