use crate::model::OpenFile;

/// Move the item at `from` to `to` in a copy of `items`.
///
/// The item is removed first and then inserted, so `to` is an index into the
/// resulting sequence. Returns `None` if either index is out of range.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= items.len() || to >= items.len() {
        return None;
    }

    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    Some(moved)
}

/// New path order after dragging the tab at `source` onto `destination`.
///
/// Returns `None` when the drop had no destination, the destination is out of
/// range, or the move would leave the order unchanged.
pub fn reorder_paths(
    files: &[OpenFile],
    source: usize,
    destination: Option<usize>,
) -> Option<Vec<String>> {
    let destination = destination?;
    if source == destination {
        return None;
    }

    let moved = move_item(files, source, destination)?;
    Some(moved.into_iter().map(|f| f.path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<OpenFile> {
        paths.iter().map(|p| OpenFile::new(*p)).collect()
    }

    #[test]
    fn test_move_item() {
        let items = vec!['a', 'b', 'c', 'd'];
        assert_eq!(move_item(&items, 0, 2), Some(vec!['b', 'c', 'a', 'd']));
        assert_eq!(move_item(&items, 3, 0), Some(vec!['d', 'a', 'b', 'c']));
        assert_eq!(move_item(&items, 1, 1), Some(items.clone()));
        assert_eq!(move_item(&items, 4, 0), None);
        assert_eq!(move_item(&items, 0, 4), None);
        // Source is never mutated
        assert_eq!(items, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_reorder_two_tabs() {
        let open = files(&["/a/x.ts", "/a/y.ts"]);
        assert_eq!(
            reorder_paths(&open, 0, Some(1)),
            Some(vec!["/a/y.ts".to_string(), "/a/x.ts".to_string()])
        );
    }

    #[test]
    fn test_reorder_preserves_relative_order() {
        let open = files(&["1", "2", "3", "4", "5"]);
        assert_eq!(
            reorder_paths(&open, 3, Some(1)),
            Some(vec!["1", "4", "2", "3", "5"].into_iter().map(String::from).collect())
        );
        assert_eq!(
            reorder_paths(&open, 0, Some(4)),
            Some(vec!["2", "3", "4", "5", "1"].into_iter().map(String::from).collect())
        );
    }

    #[test]
    fn test_reorder_without_destination() {
        let open = files(&["/a/x.ts", "/a/y.ts"]);
        assert_eq!(reorder_paths(&open, 0, None), None);
        assert_eq!(reorder_paths(&open, 0, Some(0)), None);
        assert_eq!(reorder_paths(&open, 0, Some(2)), None);
        assert_eq!(reorder_paths(&[], 0, Some(0)), None);
    }
}
