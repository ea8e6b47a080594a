use std::collections::BTreeMap;

/// Index of a node in the trie arena. The root is always 0.
type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug, Default, Clone)]
struct Node {
    /// Outgoing edges, kept ordered by character.
    children: BTreeMap<char, NodeId>,
    /// Whether some word ends at this node.
    is_end: bool,
}

/// In-memory prefix tree for word completion.
///
/// Nodes live in a single arena owned by the index; dropping the index
/// releases the whole tree at once. The tree is immutable once built and a
/// rebuild is the only way to change its contents.
#[derive(Debug, Clone)]
pub struct Autocomplete {
    nodes: Vec<Node>,
    words: usize,
}

impl Autocomplete {
    /// Build a trie from a set of words. Insertion order does not affect the
    /// shape of the tree or the order of completions.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ac = Self {
            nodes: vec![Node::default()],
            words: 0,
        };
        for w in words {
            ac.insert(w.as_ref());
        }
        ac
    }

    fn insert(&mut self, word: &str) {
        let mut cur = ROOT;
        for c in word.chars() {
            cur = match self.nodes[cur].children.get(&c) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[cur].children.insert(c, next);
                    next
                }
            };
        }

        if !self.nodes[cur].is_end {
            self.nodes[cur].is_end = true;
            self.words += 1;
        }
    }

    /// Walk from the root along `prefix`. Returns `None` if the path breaks.
    fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(ROOT, |cur, c| self.nodes[cur].children.get(&c).copied())
    }

    /// Lazily enumerate every word that starts with `prefix`, depth first with
    /// children visited in ascending character order. The result is therefore
    /// in lexicographic order. An empty prefix enumerates every word.
    pub fn predictive_search(&self, prefix: &str) -> Completions<'_> {
        let stack = match self.find(prefix) {
            Some(n) => vec![(n, prefix.len(), None)],
            None => Vec::new(),
        };

        Completions {
            trie: self,
            buf: prefix.to_string(),
            stack,
        }
    }

    /// Query completions for a prefix. With a `limit`, enumeration stops as
    /// soon as that many words have been collected.
    pub fn query(&self, prefix: &str, limit: Option<usize>) -> Vec<String> {
        let it = self.predictive_search(prefix);
        match limit {
            Some(n) => it.take(n).collect(),
            None => it.collect(),
        }
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Iterator over completions, produced by [`Autocomplete::predictive_search`].
///
/// Uses an explicit stack, so word length is not bounded by recursion depth.
pub struct Completions<'a> {
    trie: &'a Autocomplete,
    /// Characters on the path to the node being visited.
    buf: String,
    /// Pending nodes: (node, byte length of `buf` before the edge, edge char).
    stack: Vec<(NodeId, usize, Option<char>)>,
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((id, depth, edge)) = self.stack.pop() {
            self.buf.truncate(depth);
            if let Some(c) = edge {
                self.buf.push(c);
            }

            let node = &self.trie.nodes[id];
            let depth = self.buf.len();

            // Push in reverse so the smallest character is popped first.
            for (&c, &child) in node.children.iter().rev() {
                self.stack.push((child, depth, Some(c)));
            }

            if node.is_end {
                return Some(self.buf.clone());
            }
        }
        None
    }
}
