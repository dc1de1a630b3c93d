use std::collections::BTreeSet;

// An empty filter means "no filter", i.e., every namespace is included.  Cluster-scoped kinds must
// not consult the filter at all (rather than checking it against the empty string).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NamespaceFilter(BTreeSet<String>);

impl NamespaceFilter {
    pub fn all() -> NamespaceFilter {
        NamespaceFilter(BTreeSet::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn includes(&self, namespace: &str) -> bool {
        namespace_included(&self.0, namespace)
    }
}

impl<S: Into<String>> FromIterator<S> for NamespaceFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NamespaceFilter(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for NamespaceFilter {
    fn from(namespaces: Vec<String>) -> Self {
        namespaces.into_iter().collect()
    }
}

pub fn namespace_included(filter: &BTreeSet<String>, namespace: &str) -> bool {
    filter.is_empty() || filter.contains(namespace)
}
