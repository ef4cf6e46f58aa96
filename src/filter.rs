//! Category filter bar shared by the services, gallery and FAQ sections.

pub const ALL: &str = "all";

/// `all` followed by each distinct category in first-appearance order.
pub fn categories<'a, T>(items: &'a [T], category: impl Fn(&'a T) -> &'a str) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for item in items {
        let c = category(item);
        if !out.iter().any(|seen| seen == c) {
            out.push(c.to_string());
        }
    }
    out
}

pub fn matches(selected: &str, category: &str) -> bool {
    selected == ALL || selected == category
}

pub fn apply<'a, T>(
    items: &'a [T],
    selected: &str,
    category: impl Fn(&T) -> &str,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|it| matches(selected, category(*it)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pic {
        cat: &'static str,
    }

    fn pics() -> Vec<Pic> {
        ["Facility", "Classes", "Facility", "Training"]
            .into_iter()
            .map(|cat| Pic { cat })
            .collect()
    }

    #[test]
    fn test_categories_dedup_in_order() {
        let items = pics();
        assert_eq!(
            categories(&items, |p| p.cat),
            vec!["all", "Facility", "Classes", "Training"]
        );
    }

    #[test]
    fn test_categories_of_nothing_is_just_all() {
        let items: Vec<Pic> = vec![];
        assert_eq!(categories(&items, |p| p.cat), vec!["all"]);
    }

    #[test]
    fn test_apply() {
        let items = pics();
        assert_eq!(apply(&items, ALL, |p| p.cat).len(), 4);
        assert_eq!(apply(&items, "Facility", |p| p.cat).len(), 2);
        assert!(apply(&items, "Spa", |p| p.cat).is_empty());
    }
}
