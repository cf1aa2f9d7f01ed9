//! Orders teams by rank so calculators see the best placement first

/// Pair each item with its rank and sort by rank ascending.
///
/// The sort is stable: items sharing a rank keep their original order.
/// Callers must check that `items` and `ranks` have the same length; extra
/// entries on either side are dropped.
pub fn sort<'a, T>(items: &'a [T], ranks: &[u32]) -> Vec<(&'a T, u32)> {
    let mut paired: Vec<(&T, u32)> = items.iter().zip(ranks.iter().copied()).collect();
    paired.sort_by_key(|(_, rank)| *rank);
    paired
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_by_rank() {
        let items = ["third", "first", "second"];
        let sorted = sort(&items, &[3, 1, 2]);
        let names: Vec<&str> = sorted.iter().map(|(item, _)| **item).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(
            sorted.iter().map(|(_, rank)| *rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = ["a", "b", "c"];
        let sorted = sort(&items, &[2, 1, 2]);
        let names: Vec<&str> = sorted.iter().map(|(item, _)| **item).collect();
        assert_eq!(names, vec!["b", "a", "c"]);

        let sorted = sort(&items[..2], &[1, 1]);
        assert_eq!(*sorted[0].0, "a");
        assert_eq!(*sorted[1].0, "b");
    }
}
