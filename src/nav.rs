use std::sync::Arc;

use indexmap::{map::Entry, IndexMap};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::entity::{ApiIndex, ClassRecord, EntityKind, MethodRecord};

/// Children of a node, keyed by name in index order.
pub type NavChildren = IndexMap<String, NavDataNode>;

/// One entry of the navigation sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavDataNode {
    pub name: String,
    pub url_path: String,
    pub children: NavChildren,
}

impl NavDataNode {
    pub fn leaf(name: impl Into<String>, url_path: impl Into<String>) -> Self {
        Self::branch(name, url_path, NavChildren::new())
    }

    pub fn branch(
        name: impl Into<String>,
        url_path: impl Into<String>,
        children: NavChildren,
    ) -> Self {
        Self {
            name: name.into(),
            url_path: url_path.into(),
            children,
        }
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// The four category roots of a product's navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTree {
    #[serde(rename = "Classes")]
    pub classes: NavDataNode,
    #[serde(rename = "Interfaces")]
    pub interfaces: NavDataNode,
    #[serde(rename = "Traits")]
    pub traits: NavDataNode,
    #[serde(rename = "Functions")]
    pub functions: NavDataNode,
}

impl NavTree {
    pub fn root(&self, kind: EntityKind) -> &NavDataNode {
        match kind {
            EntityKind::Class => &self.classes,
            EntityKind::Interface => &self.interfaces,
            EntityKind::Trait => &self.traits,
            EntityKind::Function => &self.functions,
        }
    }

    /// `(root label, root node)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &NavDataNode)> {
        EntityKind::ALL
            .into_iter()
            .map(move |kind| (kind.root_label(), self.root(kind)))
    }

    /// Number of nodes in the tree, not counting the roots.
    pub fn node_count(&self) -> usize {
        self.iter().map(|(_, root)| root.descendant_count()).sum()
    }
}

/// Builds the navigation tree of one product from its index.
#[derive(Debug)]
pub struct NavTreeBuilder {
    index: Arc<ApiIndex>,
}

impl NavTreeBuilder {
    pub fn new(index: Arc<ApiIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &Arc<ApiIndex> {
        &self.index
    }

    /// Rebuilds the whole tree from the bound index. Every root is present
    /// even when its category has no records.
    pub fn build_nav_tree(&self) -> NavTree {
        let tree = NavTree {
            classes: self.build_category_node(EntityKind::Class),
            interfaces: self.build_category_node(EntityKind::Interface),
            traits: self.build_category_node(EntityKind::Trait),
            functions: NavDataNode::branch(
                Self::root_label_for(EntityKind::Function),
                EntityKind::Function.url_root(),
                self.build_function_nodes(),
            ),
        };
        debug!(nodes = tree.node_count(), "built nav tree");
        tree
    }

    pub fn root_label_for(kind: EntityKind) -> &'static str {
        kind.root_label()
    }

    fn build_category_node(&self, kind: EntityKind) -> NavDataNode {
        let mut children = NavChildren::new();
        for class in self.index.class_index(kind) {
            insert_child(
                &mut children,
                NavDataNode::branch(
                    &class.name,
                    &class.url_path,
                    Self::build_method_nodes(class),
                ),
            );
        }
        NavDataNode::branch(Self::root_label_for(kind), kind.url_root(), children)
    }

    fn build_method_nodes(class: &ClassRecord) -> NavChildren {
        let mut children = NavChildren::new();
        for MethodRecord { name, url_path } in class.methods.values() {
            insert_child(&mut children, NavDataNode::leaf(name, url_path));
        }
        children
    }

    fn build_function_nodes(&self) -> NavChildren {
        let mut children = NavChildren::new();
        for function in self.index.function_index() {
            insert_child(
                &mut children,
                NavDataNode::leaf(&function.name, &function.url_path),
            );
        }
        children
    }
}

/// Last write wins; the replaced entry keeps its original position.
fn insert_child(children: &mut NavChildren, node: NavDataNode) {
    match children.entry(node.name.clone()) {
        Entry::Occupied(mut slot) => {
            warn!(
                name = %node.name,
                replaced = %slot.get().url_path,
                url_path = %node.url_path,
                "duplicate nav entry, keeping the last one"
            );
            slot.insert(node);
        }
        Entry::Vacant(slot) => {
            slot.insert(node);
        }
    }
}
