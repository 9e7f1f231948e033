/// Ordered list of the currently open ancestor directory names, indexed
/// by nesting level. Segments keep their trailing slash, so a full path
/// is plain concatenation of the stack.
#[derive(Debug, Default)]
pub struct PathStack {
    segments: Vec<String>,
}

impl PathStack {
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Discards everything and opens `segment` as the sole ancestor.
    pub fn reset_to(&mut self, segment: String) {
        self.segments.clear();
        self.segments.push(segment);
    }

    /// Drops ancestors deeper than `level`, invalidating the chain left
    /// behind by a previously deeper block.
    pub fn truncate(&mut self, level: usize) {
        self.segments.truncate(level);
    }

    pub fn push(&mut self, segment: String) {
        self.segments.push(segment);
    }

    pub fn join(&self) -> String {
        self.segments.concat()
    }

    pub fn join_with(&self, leaf: &str) -> String {
        let mut path = self.join();
        path.push_str(leaf);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_concatenates_open_ancestors() {
        let mut stack = PathStack::default();
        stack.push("root/".to_string());
        stack.push("sub/".to_string());
        assert_eq!(stack.join(), "root/sub/");
        assert_eq!(stack.join_with("leaf.txt"), "root/sub/leaf.txt");
    }

    #[test]
    fn truncate_discards_stale_descendants() {
        let mut stack = PathStack::default();
        stack.push("root/".to_string());
        stack.push("a/".to_string());
        stack.push("b/".to_string());
        stack.truncate(1);
        stack.push("c/".to_string());
        assert_eq!(stack.join(), "root/c/");
    }

    #[test]
    fn reset_replaces_the_whole_chain() {
        let mut stack = PathStack::default();
        stack.push("old/".to_string());
        stack.push("deep/".to_string());
        stack.reset_to("new/".to_string());
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.join(), "new/");
    }
}
